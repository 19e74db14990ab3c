//! Card and hand scoring.
//!
//! A hand is worth the sum of its rank values, counting every Ace as 1, plus
//! a single soft-ace bonus of 10 when the hand holds an Ace and the bonus
//! does not take it past 21. The bonus is applied at most once no matter
//! how many Aces the hand holds.

use crate::card::{Card, Rank};

pub const BLACKJACK: u16 = 21;
const SOFT_ACE_BONUS: u16 = 10;

/// Ace is 1, pips are their face value, Jack, Queen and King are 10.
pub fn rank_value(rank: Rank) -> u16 {
    match rank {
        Rank::Ace => 1,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        pip => pip as u16,
    }
}

/// Scores any sequence of cards. Used directly when a hand is split across
/// storage, like the dealer's hidden card plus the visible ones.
pub fn score_cards<'a, I>(cards: I) -> u16
where
    I: IntoIterator<Item = &'a Card>,
{
    let (sum, has_ace) = cards.into_iter().fold((0, false), |(sum, has_ace), card| {
        (sum + rank_value(card.rank), has_ace || card.rank == Rank::Ace)
    });

    if has_ace && sum + SOFT_ACE_BONUS <= BLACKJACK {
        sum + SOFT_ACE_BONUS
    } else {
        sum
    }
}

pub fn score_hand(cards: &[Card]) -> u16 {
    score_cards(cards)
}

pub fn contains_ace<'a, I>(cards: I) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    cards.into_iter().any(|card| card.rank == Rank::Ace)
}

pub fn is_bust(score: u16) -> bool {
    score > BLACKJACK
}
