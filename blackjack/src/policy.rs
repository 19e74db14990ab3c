//! How the dealer plays its hand.
//!
//! The dealer does not follow the house "hit below 17" rule. It plays
//! against the player's final score instead:
//! - already ahead of the player, or at 21: stand;
//! - behind the player: hit;
//! - level with the player on a total of [`SOFT_17`] while holding an Ace
//!   (when the rule enables it): hit;
//! - anything else: stand.
//!
//! The same decision is taken on entering the turn and after every card, so
//! the dealer stops drawing the moment it gets ahead.

use crate::scoring::BLACKJACK;
use crate::Rule;

/// Default dealer total that is re-drawn when an Ace is in the hand.
pub const SOFT_17: u16 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerMove {
    Hit,
    Stand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerPolicy {
    soft_total: u16,
    hit_on_soft_total: bool,
}

impl DealerPolicy {
    pub fn new(rule: &Rule) -> Self {
        DealerPolicy {
            soft_total: rule.dealer_soft_total,
            hit_on_soft_total: rule.dealer_hit_on_soft17,
        }
    }

    /// True when the dealer sits on its soft total with an Ace in hand and
    /// the rule asks it to draw there.
    pub fn is_soft_trigger(&self, dealer_score: u16, dealer_has_ace: bool) -> bool {
        self.hit_on_soft_total && dealer_has_ace && dealer_score == self.soft_total
    }

    /// True when the soft trigger is the only reason the dealer hits: it is
    /// level with the player rather than behind.
    pub fn hits_on_soft_trigger(
        &self,
        dealer_score: u16,
        dealer_has_ace: bool,
        player_score: u16,
    ) -> bool {
        dealer_score == player_score && self.is_soft_trigger(dealer_score, dealer_has_ace)
    }

    pub fn decide(&self, dealer_score: u16, dealer_has_ace: bool, player_score: u16) -> DealerMove {
        if dealer_score > player_score || dealer_score >= BLACKJACK {
            return DealerMove::Stand;
        }
        if dealer_score < player_score || self.is_soft_trigger(dealer_score, dealer_has_ace) {
            DealerMove::Hit
        } else {
            DealerMove::Stand
        }
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        DealerPolicy::new(&Rule::default())
    }
}
