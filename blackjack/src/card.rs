use std::fmt;
use std::str::FromStr;

use strum_macros::{Display, EnumIter};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl TryFrom<u8> for Rank {
    type Error = Error;

    /// Face values run from 1 (Ace) to 13 (King).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let rank = match value {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => return Err(Error::InvalidRank(value)),
        };
        Ok(rank)
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            digit => match digit.parse::<u8>() {
                Ok(value @ 2..=9) => Rank::try_from(value)?,
                _ => return Err(Error::InvalidCard(String::from(s))),
            },
        };
        Ok(rank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Suit {
    Diamond,
    Club,
    Heart,
    Spade,
}

impl Suit {
    fn from_letter(letter: char) -> Option<Suit> {
        match letter.to_ascii_uppercase() {
            'D' => Some(Suit::Diamond),
            'C' => Some(Suit::Club),
            'H' => Some(Suit::Heart),
            'S' => Some(Suit::Spade),
            _ => None,
        }
    }
}

/// Represents a card in the real world with a rank and a suit. The suit never
/// matters for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

/// Parses a short card such as `A`, `10`, `T`, `QH` or `7d`. The rank comes
/// first, an optional trailing suit letter follows. Without a suit letter the
/// card is a Spade.
impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (rank_text, suit) = match s.chars().last().and_then(Suit::from_letter) {
            Some(suit) if s.len() > 1 => (&s[..s.len() - 1], suit),
            _ => (s, Suit::Spade),
        };
        let rank = rank_text
            .parse()
            .map_err(|_| Error::InvalidCard(String::from(s)))?;
        Ok(Card { rank, suit })
    }
}

/// Parses a comma or whitespace separated list of cards, in dealing order.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, Error> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ranks_convert_from_face_values() {
        for (face_value, rank) in (1..=13).zip(Rank::iter()) {
            assert_eq!(Rank::try_from(face_value).unwrap(), rank);
            assert_eq!(rank as u8, face_value);
        }
    }

    #[test]
    fn out_of_domain_rank_is_rejected() {
        assert!(matches!(Rank::try_from(0), Err(Error::InvalidRank(0))));
        assert!(matches!(Rank::try_from(14), Err(Error::InvalidRank(14))));
    }

    #[test]
    fn card_text_is_parsed() {
        assert_eq!(
            "A".parse::<Card>().unwrap(),
            Card::new(Rank::Ace, Suit::Spade)
        );
        assert_eq!(
            "10h".parse::<Card>().unwrap(),
            Card::new(Rank::Ten, Suit::Heart)
        );
        assert_eq!(
            "QD".parse::<Card>().unwrap(),
            Card::new(Rank::Queen, Suit::Diamond)
        );
        assert_eq!("t".parse::<Card>().unwrap().rank, Rank::Ten);
        assert!(matches!("1".parse::<Card>(), Err(Error::InvalidCard(_))));
        assert!(matches!("Z".parse::<Card>(), Err(Error::InvalidCard(_))));
        assert!(matches!("11".parse::<Card>(), Err(Error::InvalidCard(_))));
    }

    #[test]
    fn card_lists_keep_dealing_order() {
        let cards = parse_cards("T, 8 A,5").unwrap();
        let ranks: Vec<Rank> = cards.iter().map(|card| card.rank).collect();
        assert_eq!(ranks, vec![Rank::Ten, Rank::Eight, Rank::Ace, Rank::Five]);
        assert!(parse_cards("T,X").is_err());
    }

    #[test]
    fn card_is_displayed_by_name() {
        assert_eq!(
            Card::new(Rank::Ace, Suit::Spade).to_string(),
            "Ace of Spades"
        );
        assert_eq!(
            Card::new(Rank::Seven, Suit::Diamond).to_string(),
            "Seven of Diamonds"
        );
    }
}
