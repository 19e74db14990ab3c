use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use strum::IntoEnumIterator;

use crate::card::{Card, Rank, Suit};
use crate::{Error, ExhaustionPolicy};

pub const DECK_SIZE: usize = 52;

/// Where the cards of a round come from. Called once per card dealt.
pub trait DrawSource {
    fn draw(&mut self) -> Result<Card, Error>;
}

/// Represents a single deck in the dealer's hands.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    current_index: usize,
    policy: ExhaustionPolicy,
    rng: StdRng,
}

impl Shoe {
    /// Creates a new shoe with ordered cards, suit by suit.
    pub fn new(policy: ExhaustionPolicy) -> Shoe {
        Shoe {
            cards: full_deck(),
            current_index: 0,
            policy,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a shuffled shoe. The same seed always deals the same cards.
    pub fn shuffled(policy: ExhaustionPolicy, seed: Option<u64>) -> Shoe {
        let mut shoe = Shoe::new(policy);
        if let Some(seed) = seed {
            shoe.rng = StdRng::seed_from_u64(seed);
        }
        shoe.shuffle();
        shoe
    }

    /// Creates a shoe that deals exactly the given cards, in order. When
    /// they run out the policy applies as usual.
    pub fn stacked(cards: Vec<Card>, policy: ExhaustionPolicy) -> Shoe {
        Shoe {
            cards,
            current_index: 0,
            policy,
            rng: StdRng::from_entropy(),
        }
    }

    /// Gathers a full deck back into the shoe and shuffles it.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.current_index = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.current_index
    }
}

impl DrawSource for Shoe {
    fn draw(&mut self) -> Result<Card, Error> {
        if self.current_index >= self.cards.len() {
            match self.policy {
                ExhaustionPolicy::Reshuffle => {
                    info!("shoe is empty, reshuffling a full deck");
                    self.shuffle();
                }
                ExhaustionPolicy::Fail => return Err(Error::ShoeExhausted),
            }
        }
        let card = self.cards[self.current_index];
        self.current_index += 1;
        debug!("dealt {} ({} left)", card, self.remaining());
        Ok(card)
    }
}

fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::iter() {
        for rank in Rank::iter() {
            cards.push(Card { rank, suit });
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn draw_all(shoe: &mut Shoe) -> Vec<Card> {
        (0..shoe.remaining()).map(|_| shoe.draw().unwrap()).collect()
    }

    #[test]
    fn new_shoe_is_ordered() {
        let shoe = Shoe::new(ExhaustionPolicy::Fail);
        assert_eq!(shoe.remaining(), DECK_SIZE);
        let mut index = 0;
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                assert_eq!(shoe.cards[index], Card { rank, suit });
                index += 1;
            }
        }
    }

    #[test]
    fn shuffled_shoe_holds_each_card_once() {
        let mut shoe = Shoe::shuffled(ExhaustionPolicy::Fail, None);
        let dealt = draw_all(&mut shoe);
        let unique: HashSet<Card> = dealt.iter().copied().collect();
        assert_eq!(dealt.len(), DECK_SIZE);
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn same_seed_deals_same_cards() {
        let mut a = Shoe::shuffled(ExhaustionPolicy::Fail, Some(7));
        let mut b = Shoe::shuffled(ExhaustionPolicy::Fail, Some(7));
        assert_eq!(draw_all(&mut a), draw_all(&mut b));
    }

    #[test]
    fn stacked_shoe_deals_in_order() {
        let cards = crate::parse_cards("T,3,2,5").unwrap();
        let mut shoe = Shoe::stacked(cards.clone(), ExhaustionPolicy::Fail);
        assert_eq!(shoe.remaining(), 4);
        assert_eq!(draw_all(&mut shoe), cards);
        assert_eq!(shoe.remaining(), 0);
    }

    #[test]
    fn exhausted_shoe_fails_when_asked_to() {
        let mut shoe = Shoe::stacked(crate::parse_cards("A").unwrap(), ExhaustionPolicy::Fail);
        assert!(shoe.draw().is_ok());
        assert!(matches!(shoe.draw(), Err(Error::ShoeExhausted)));
        assert!(matches!(shoe.draw(), Err(Error::ShoeExhausted)));
    }

    #[test]
    fn exhausted_shoe_reshuffles_when_asked_to() {
        let mut shoe = Shoe::stacked(crate::parse_cards("A").unwrap(), ExhaustionPolicy::Reshuffle);
        assert!(shoe.draw().is_ok());
        assert_eq!(shoe.remaining(), 0);
        assert!(shoe.draw().is_ok());
        assert_eq!(shoe.remaining(), DECK_SIZE - 1);
    }
}
