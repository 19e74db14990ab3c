use std::fmt;

use log::info;

use crate::participant::Participant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Winner(String),
    Draw,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::Winner(name) => write!(f, "{} wins", name),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Picks the winner among participants who did not bust. Busts are filtered
/// out before this is called. The highest score wins outright; a tie at the
/// top is a draw. A lone participant wins, nobody at all is a draw.
pub fn decide_winner(participants: &[&dyn Participant]) -> RoundOutcome {
    let mut ranked: Vec<(&str, u16)> = participants
        .iter()
        .map(|p| (p.name(), p.current_score()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let outcome = match ranked.as_slice() {
        [] => RoundOutcome::Draw,
        [(name, _)] => RoundOutcome::Winner(String::from(*name)),
        [(name, top), (_, second), ..] if top > second => RoundOutcome::Winner(String::from(*name)),
        _ => RoundOutcome::Draw,
    };
    info!("round decided: {} ({:?})", outcome, ranked);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::participant::{Dealer, Player};

    fn player_with(ranks: &[Rank]) -> Player {
        let mut player = Player::new("TestPlayer");
        for &rank in ranks {
            player.receive_card(Card::new(rank, Suit::Spade));
        }
        player
    }

    /// The first rank becomes the dealer's hidden card.
    fn dealer_with(ranks: &[Rank]) -> Dealer {
        let mut dealer = Dealer::new("Dealer");
        for &rank in ranks {
            dealer.receive_card(Card::new(rank, Suit::Spade));
        }
        dealer
    }

    #[test]
    fn player_wins() {
        let player = player_with(&[Rank::Nine, Rank::Queen]);
        let dealer = dealer_with(&[Rank::Ten, Rank::Eight]);
        assert_eq!(
            decide_winner(&[&player, &dealer]),
            RoundOutcome::Winner(String::from("TestPlayer"))
        );
    }

    #[test]
    fn dealer_wins() {
        let player = player_with(&[Rank::Nine, Rank::Ten]);
        let dealer = dealer_with(&[Rank::Ace, Rank::Ten]);
        assert_eq!(
            decide_winner(&[&player, &dealer]),
            RoundOutcome::Winner(String::from("Dealer"))
        );
    }

    #[test]
    fn game_is_drawn() {
        let player = player_with(&[Rank::Nine, Rank::Ten]);
        let dealer = dealer_with(&[Rank::Nine, Rank::Ten]);
        assert_eq!(decide_winner(&[&player, &dealer]), RoundOutcome::Draw);
    }

    #[test]
    fn order_of_participants_does_not_matter() {
        let player = player_with(&[Rank::King, Rank::Seven]);
        let dealer = dealer_with(&[Rank::Six, Rank::Five, Rank::Four]);
        assert_eq!(
            decide_winner(&[&dealer, &player]),
            decide_winner(&[&player, &dealer])
        );
    }

    #[test]
    fn degenerate_tables() {
        let player = player_with(&[Rank::Two]);
        assert_eq!(
            decide_winner(&[&player]),
            RoundOutcome::Winner(String::from("TestPlayer"))
        );
        assert_eq!(decide_winner(&[]), RoundOutcome::Draw);
    }

    #[test]
    fn outcome_is_displayed() {
        assert_eq!(
            RoundOutcome::Winner(String::from("Player1")).to_string(),
            "Player1 wins"
        );
        assert_eq!(RoundOutcome::Draw.to_string(), "Draw");
    }
}
