use crate::card::Card;
use crate::hand::Hand;
use crate::scoring;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Player,
    Dealer,
}

/// Capabilities shared by everyone holding a hand at the table.
pub trait Participant {
    fn name(&self) -> &str;
    fn role(&self) -> Role;
    fn receive_card(&mut self, card: Card);
    /// The true score of every card held, hidden ones included.
    fn current_score(&self) -> u16;
    fn has_ace(&self) -> bool;
    /// Set once the participant stands. `None` while the turn is open or
    /// after a bust.
    fn final_score(&self) -> Option<u16>;
    /// Drops all cards and the final score, ready for the next round.
    fn clear(&mut self);
}

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
    final_score: Option<u16>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Player {
        Player {
            name: name.into(),
            hand: Hand::new(),
            final_score: None,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn finalize(&mut self) -> u16 {
        let score = self.current_score();
        self.final_score = Some(score);
        score
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> Role {
        Role::Player
    }

    fn receive_card(&mut self, card: Card) {
        self.hand.receive_card(card);
    }

    fn current_score(&self) -> u16 {
        self.hand.score()
    }

    fn has_ace(&self) -> bool {
        self.hand.has_ace()
    }

    fn final_score(&self) -> Option<u16> {
        self.final_score
    }

    fn clear(&mut self) {
        self.hand.clear();
        self.final_score = None;
    }
}

/// The dealer keeps the first card of each round face down, apart from the
/// visible hand, until it is revealed.
#[derive(Debug, Clone)]
pub struct Dealer {
    name: String,
    hidden_card: Option<Card>,
    revealed: bool,
    hand: Hand,
    final_score: Option<u16>,
}

impl Dealer {
    pub fn new(name: impl Into<String>) -> Dealer {
        Dealer {
            name: name.into(),
            hidden_card: None,
            revealed: false,
            hand: Hand::new(),
            final_score: None,
        }
    }

    /// Cards the other participants can see before the reveal.
    pub fn visible_cards(&self) -> &[Card] {
        self.hand.cards()
    }

    pub fn hidden_card(&self) -> Option<&Card> {
        self.hidden_card.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Hidden card first, then the visible ones in arrival order.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.hidden_card.iter().chain(self.hand.cards())
    }

    pub(crate) fn finalize(&mut self) -> u16 {
        let score = self.current_score();
        self.final_score = Some(score);
        score
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> Role {
        Role::Dealer
    }

    fn receive_card(&mut self, card: Card) {
        if self.hidden_card.is_none() {
            self.hidden_card = Some(card);
        } else {
            self.hand.receive_card(card);
        }
    }

    fn current_score(&self) -> u16 {
        scoring::score_cards(self.all_cards())
    }

    fn has_ace(&self) -> bool {
        scoring::contains_ace(self.all_cards())
    }

    fn final_score(&self) -> Option<u16> {
        self.final_score
    }

    fn clear(&mut self) {
        self.hidden_card = None;
        self.revealed = false;
        self.hand.clear();
        self.final_score = None;
    }
}
