pub mod card;
mod error;
pub mod hand;
pub mod participant;
pub mod policy;
pub mod resolver;
pub mod round;
pub mod scoring;
pub mod shoe;
pub mod table;
pub mod turn;

use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

pub use card::{parse_cards, Card, Rank, Suit};
pub use error::Error;
pub use participant::{Dealer, Participant, Player, Role};
pub use resolver::RoundOutcome;
pub use round::{Round, RoundPhase, RoundResult};
pub use shoe::{DrawSource, Shoe};
pub use table::{DecisionSource, TableObserver, TableView};

/// House rules and names for one table. Every policy constant the round
/// engine consults lives here.
#[derive(Clone, Debug)]
pub struct Rule {
    /// The dealer total that triggers the soft-hand check.
    pub dealer_soft_total: u16,
    pub dealer_hit_on_soft17: bool,
    pub exhaustion_policy: ExhaustionPolicy,

    pub player_name: String,
    pub dealer_name: String,
}

impl Default for Rule {
    fn default() -> Self {
        Rule {
            dealer_soft_total: policy::SOFT_17,
            dealer_hit_on_soft17: true,
            exhaustion_policy: ExhaustionPolicy::Reshuffle,
            player_name: String::from("Player1"),
            dealer_name: String::from("The dealer"),
        }
    }
}

/// What a shoe does when asked for a card after the last one was dealt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize_enum_str, Deserialize_enum_str)]
pub enum ExhaustionPolicy {
    Reshuffle,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
}
