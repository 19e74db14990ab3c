use std::fmt;
use std::io::{self, BufRead, Write};

use log::warn;
use twentyone::table::HoleCard;
use twentyone::{Card, Decision, DecisionSource, Error, Role, RoundOutcome, TableObserver, TableView};

const PAGE_BREAK: &str = "=================================";
const HIT_OR_STAND: &str = "Do you want to (H)it or (S)tand? ";
const PLAY_AGAIN: &str = "Play again? (y/n) ";

/// Reads the player's answers line by line and asks again on anything it
/// does not understand.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    pub fn play_again(&mut self) -> Result<bool, Error> {
        loop {
            match self.ask(PLAY_AGAIN)?.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String, Error> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )));
        }
        Ok(line.trim().to_ascii_lowercase())
    }
}

impl<R: BufRead, W: Write> DecisionSource for Prompt<R, W> {
    fn request_choice(&mut self, _: &TableView<'_>) -> Result<Decision, Error> {
        writeln!(self.output, "{}", PAGE_BREAK)?;
        loop {
            match self.ask(HIT_OR_STAND)?.as_str() {
                "h" => return Ok(Decision::Hit),
                "s" => return Ok(Decision::Stand),
                _ => continue,
            }
        }
    }
}

/// Narrates the round to a terminal.
pub struct TerminalObserver<W> {
    output: W,
}

impl<W: Write> TerminalObserver<W> {
    pub fn new(output: W) -> Self {
        TerminalObserver { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = self.output.write_fmt(args) {
            warn!("cannot write to the terminal: {}", err);
        }
    }
}

fn join_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    cards
        .into_iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<W: Write> TableObserver for TerminalObserver<W> {
    fn on_round_begin(&mut self) {
        self.emit(format_args!(
            "Let's play BlackJack!\n\nThe dealer shuffles the deck thoroughly then starts dealing...\n"
        ));
    }

    fn on_hands(&mut self, view: &TableView<'_>) {
        self.emit(format_args!(
            "{}\nYou have: {} (score {}).\n",
            PAGE_BREAK,
            join_cards(view.player_cards),
            view.player_score
        ));
        match (view.hole_card, view.dealer_score) {
            (HoleCard::Revealed(hidden), Some(score)) => self.emit(format_args!(
                "{} has: {} (score {}).\n",
                view.dealer_name,
                join_cards(view.dealer_cards.iter().chain(Some(hidden))),
                score
            )),
            (HoleCard::NotDealt, _) => self.emit(format_args!(
                "{} has: {}.\n",
                view.dealer_name,
                join_cards(view.dealer_cards)
            )),
            _ => self.emit(format_args!(
                "{} has: {}, and a card face down.\n",
                view.dealer_name,
                join_cards(view.dealer_cards)
            )),
        }
    }

    fn on_decision(&mut self, _: &str, _: Decision) {}

    fn on_draw(&mut self, role: Role, name: &str, card: &Card) {
        match role {
            Role::Player => self.emit(format_args!("You draw {}.\n", card)),
            Role::Dealer => self.emit(format_args!("{} hits, draws {}.\n", name, card)),
        }
    }

    fn on_dealer_soft_17(&mut self, name: &str) {
        self.emit(format_args!("{} has a soft 17.\n", name));
    }

    fn on_stand(&mut self, role: Role, name: &str, score: u16) {
        match role {
            Role::Player => self.emit(format_args!("You stand on {}.\n", score)),
            Role::Dealer => self.emit(format_args!("{} stands on {}.\n", name, score)),
        }
    }

    fn on_bust(&mut self, role: Role, name: &str, score: u16) {
        let banner = "+".repeat(PAGE_BREAK.len());
        match role {
            Role::Player => self.emit(format_args!(
                "{}\nYou're BUST with {}!\n{}\n",
                banner, score, banner
            )),
            Role::Dealer => self.emit(format_args!(
                "{}\n{} is BUST with {}. You win!\n{}\n",
                banner, name, score, banner
            )),
        }
    }

    fn on_outcome(&mut self, outcome: &RoundOutcome) {
        match outcome {
            RoundOutcome::Winner(name) => self.emit(format_args!("\n{} wins!\n", name)),
            RoundOutcome::Draw => self.emit(format_args!("\nThe game is a draw!\n")),
        }
    }
}
