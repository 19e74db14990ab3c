use std::io;

use thiserror::Error;

use crate::round::RoundPhase;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid card rank {0}, it must be in [1, 13]")]
    InvalidRank(u8),
    #[error("invalid card {0:?}")]
    InvalidCard(String),
    #[error("the shoe is exhausted")]
    ShoeExhausted,
    #[error("{operation} is only allowed in {expected:?} phase, the round is in {actual:?} phase")]
    WrongPhase {
        operation: &'static str,
        expected: RoundPhase,
        actual: RoundPhase,
    },
    #[error("cannot read the player's decision: {0}")]
    Input(#[from] io::Error),
}

impl Error {
    /// Returns true for broken invariants: a caller handing the engine an
    /// out-of-domain card or driving the round out of order. The hosting
    /// application should abandon the round on these.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            Error::InvalidRank(_) | Error::InvalidCard(_) | Error::WrongPhase { .. }
        )
    }
}
