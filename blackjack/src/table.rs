//! Collaborators the round engine talks to: where the player's choices come
//! from and where every state change is reported.

use std::collections::VecDeque;

use crate::card::Card;
use crate::participant::{Dealer, Participant, Player, Role};
use crate::resolver::RoundOutcome;
use crate::{Decision, Error};

/// The dealer's first card as seen from across the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleCard<'a> {
    NotDealt,
    FaceDown,
    Revealed(&'a Card),
}

/// What the player is allowed to see at one moment of the round.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub player_name: &'a str,
    pub player_cards: &'a [Card],
    pub player_score: u16,
    pub dealer_name: &'a str,
    pub dealer_cards: &'a [Card],
    pub hole_card: HoleCard<'a>,
    /// Only known once the hole card is revealed.
    pub dealer_score: Option<u16>,
}

impl<'a> TableView<'a> {
    pub fn new(player: &'a Player, dealer: &'a Dealer) -> TableView<'a> {
        let hole_card = match dealer.hidden_card() {
            None => HoleCard::NotDealt,
            Some(card) if dealer.is_revealed() => HoleCard::Revealed(card),
            Some(_) => HoleCard::FaceDown,
        };
        TableView {
            player_name: player.name(),
            player_cards: player.hand().cards(),
            player_score: player.current_score(),
            dealer_name: dealer.name(),
            dealer_cards: dealer.visible_cards(),
            hole_card,
            dealer_score: dealer.is_revealed().then(|| dealer.current_score()),
        }
    }
}

/// Supplies the player's Hit or Stand. Implementations block until a valid
/// choice is available; input validation is theirs.
pub trait DecisionSource {
    fn request_choice(&mut self, view: &TableView<'_>) -> Result<Decision, Error>;
}

/// Receives every state change of a round. Nothing returned here feeds back
/// into the engine.
pub trait TableObserver {
    fn on_round_begin(&mut self);
    fn on_hands(&mut self, view: &TableView<'_>);
    fn on_decision(&mut self, name: &str, decision: Decision);
    fn on_draw(&mut self, role: Role, name: &str, card: &Card);
    fn on_dealer_soft_17(&mut self, name: &str);
    fn on_stand(&mut self, role: Role, name: &str, score: u16);
    fn on_bust(&mut self, role: Role, name: &str, score: u16);
    fn on_outcome(&mut self, outcome: &RoundOutcome);
}

/// Ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl TableObserver for SilentObserver {
    fn on_round_begin(&mut self) {}
    fn on_hands(&mut self, _: &TableView<'_>) {}
    fn on_decision(&mut self, _: &str, _: Decision) {}
    fn on_draw(&mut self, _: Role, _: &str, _: &Card) {}
    fn on_dealer_soft_17(&mut self, _: &str) {}
    fn on_stand(&mut self, _: Role, _: &str, _: u16) {}
    fn on_bust(&mut self, _: Role, _: &str, _: u16) {}
    fn on_outcome(&mut self, _: &RoundOutcome) {}
}

/// Plays back a fixed list of choices, then stands.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisions {
    choices: VecDeque<Decision>,
}

impl ScriptedDecisions {
    pub fn new(choices: impl IntoIterator<Item = Decision>) -> Self {
        ScriptedDecisions {
            choices: choices.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl DecisionSource for ScriptedDecisions {
    fn request_choice(&mut self, _: &TableView<'_>) -> Result<Decision, Error> {
        Ok(self.choices.pop_front().unwrap_or(Decision::Stand))
    }
}
