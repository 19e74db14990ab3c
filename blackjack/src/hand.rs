use crate::card::Card;
use crate::scoring;

/// The cards one participant holds during a round. Cards are only ever
/// appended; the hand is emptied between rounds.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand {
            cards: Vec::with_capacity(5),
        }
    }

    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn score(&self) -> u16 {
        scoring::score_hand(&self.cards)
    }

    pub fn has_ace(&self) -> bool {
        scoring::contains_ace(&self.cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Hand {
            cards: iter.into_iter().collect(),
        }
    }
}
