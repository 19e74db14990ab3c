//! Drives one participant's turn to a terminal state.
//!
//! Each turn is a small state machine:
//! `AwaitingAction -> DrawAndCheck -> AwaitingAction | Bust | Stand`.
//! The player leaves `AwaitingAction` on an external choice, the dealer on
//! its [`DealerPolicy`]. A bust is an ordinary terminal state, reported in
//! the returned [`TurnResult`], never as an error.

use log::{debug, info};

use crate::participant::{Dealer, Participant, Player, Role};
use crate::policy::{DealerMove, DealerPolicy};
use crate::scoring::is_bust;
use crate::shoe::DrawSource;
use crate::table::{DecisionSource, TableObserver, TableView};
use crate::{Decision, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingAction,
    DrawAndCheck,
    Bust,
    Stand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    Stand { score: u16 },
    Bust { name: String, score: u16 },
}

impl TurnResult {
    pub fn is_bust(&self) -> bool {
        matches!(self, TurnResult::Bust { .. })
    }
}

/// Plays the player's turn. The dealer is only read, to show the table.
pub fn play_player<D: DrawSource, S: DecisionSource, O: TableObserver>(
    player: &mut Player,
    dealer: &Dealer,
    shoe: &mut D,
    decisions: &mut S,
    observer: &mut O,
) -> Result<TurnResult, Error> {
    let mut state = TurnState::AwaitingAction;
    loop {
        state = match state {
            TurnState::AwaitingAction => {
                let decision = decisions.request_choice(&TableView::new(player, dealer))?;
                debug!("{} chooses {:?}", player.name(), decision);
                observer.on_decision(player.name(), decision);
                match decision {
                    Decision::Hit => TurnState::DrawAndCheck,
                    Decision::Stand => TurnState::Stand,
                }
            }
            TurnState::DrawAndCheck => {
                let card = shoe.draw()?;
                player.receive_card(card);
                observer.on_draw(Role::Player, player.name(), &card);
                observer.on_hands(&TableView::new(player, dealer));
                if is_bust(player.current_score()) {
                    TurnState::Bust
                } else {
                    TurnState::AwaitingAction
                }
            }
            TurnState::Bust => return Ok(bust(&*player, observer)),
            TurnState::Stand => {
                let score = player.finalize();
                info!("{} stands on {}", player.name(), score);
                observer.on_stand(Role::Player, player.name(), score);
                return Ok(TurnResult::Stand { score });
            }
        };
    }
}

/// Plays the dealer's turn against the player's final score.
pub fn play_dealer<D: DrawSource, O: TableObserver>(
    dealer: &mut Dealer,
    player: &Player,
    player_score: u16,
    policy: &DealerPolicy,
    shoe: &mut D,
    observer: &mut O,
) -> Result<TurnResult, Error> {
    let mut state = TurnState::AwaitingAction;
    loop {
        state = match state {
            TurnState::AwaitingAction => {
                let score = dealer.current_score();
                let has_ace = dealer.has_ace();
                if policy.hits_on_soft_trigger(score, has_ace, player_score) {
                    observer.on_dealer_soft_17(dealer.name());
                }
                let dealer_move = policy.decide(score, has_ace, player_score);
                debug!(
                    "{} on {} against {}: {:?}",
                    dealer.name(),
                    score,
                    player_score,
                    dealer_move
                );
                match dealer_move {
                    DealerMove::Hit => TurnState::DrawAndCheck,
                    DealerMove::Stand => TurnState::Stand,
                }
            }
            TurnState::DrawAndCheck => {
                let card = shoe.draw()?;
                dealer.receive_card(card);
                observer.on_draw(Role::Dealer, dealer.name(), &card);
                observer.on_hands(&TableView::new(player, dealer));
                if is_bust(dealer.current_score()) {
                    TurnState::Bust
                } else {
                    TurnState::AwaitingAction
                }
            }
            TurnState::Bust => return Ok(bust(&*dealer, observer)),
            TurnState::Stand => {
                let score = dealer.finalize();
                info!("{} stands on {}", dealer.name(), score);
                observer.on_stand(Role::Dealer, dealer.name(), score);
                return Ok(TurnResult::Stand { score });
            }
        };
    }
}

fn bust<P: Participant, O: TableObserver>(participant: &P, observer: &mut O) -> TurnResult {
    let score = participant.current_score();
    info!("{} is bust on {}", participant.name(), score);
    observer.on_bust(participant.role(), participant.name(), score);
    TurnResult::Bust {
        name: String::from(participant.name()),
        score,
    }
}
