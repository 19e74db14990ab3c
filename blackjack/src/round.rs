use log::{info, warn};
use twentyone_macros::allowed_phase;

use crate::participant::{Dealer, Participant, Player};
use crate::policy::DealerPolicy;
use crate::resolver::{decide_winner, RoundOutcome};
use crate::shoe::DrawSource;
use crate::table::{DecisionSource, TableObserver, TableView};
use crate::turn::{self, TurnResult};
use crate::{Error, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    WaitForDeal,
    PlayerTurn,
    DealerTurn,
    Resolve,
    Finished,
}

/// How a round ended: somebody went bust, or the scores were compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    Bust { name: String, score: u16 },
    Resolved(RoundOutcome),
}

/// One player against the dealer. The round owns both participants and its
/// draw source, so separate rounds never share state.
///
/// Phase-bound methods return `Error::WrongPhase` when called out of order.
/// `play` runs the phases in order; the individual steps are public for
/// callers that want to drive the round themselves.
pub struct Round<D: DrawSource> {
    policy: DealerPolicy,
    phase: RoundPhase,
    shoe: D,
    player: Player,
    dealer: Dealer,
    result: Option<RoundResult>,
}

impl<D: DrawSource> Round<D> {
    pub fn new(rule: &Rule, shoe: D) -> Self {
        Self {
            policy: DealerPolicy::new(rule),
            phase: RoundPhase::WaitForDeal,
            shoe,
            player: Player::new(rule.player_name.as_str()),
            dealer: Dealer::new(rule.dealer_name.as_str()),
            result: None,
        }
    }

    /// Plays the whole round: deal, player turn, dealer turn, and winner
    /// resolution unless somebody goes bust first.
    ///
    /// A failing draw or decision abandons the round: the error is returned
    /// and the round is left `Finished` with no result, ready for
    /// `new_round`.
    #[allowed_phase(WaitForDeal)]
    pub fn play<S: DecisionSource, O: TableObserver>(
        &mut self,
        decisions: &mut S,
        observer: &mut O,
    ) -> Result<RoundResult, Error> {
        observer.on_round_begin();
        let played = self.play_phases(decisions, observer);
        if let Err(err) = &played {
            warn!("round abandoned: {}", err);
            self.abandon();
        }
        played
    }

    fn play_phases<S: DecisionSource, O: TableObserver>(
        &mut self,
        decisions: &mut S,
        observer: &mut O,
    ) -> Result<RoundResult, Error> {
        self.deal_initial_cards()?;
        observer.on_hands(&self.view());

        let result = match self.play_player_turn(decisions, observer)? {
            TurnResult::Bust { name, score } => RoundResult::Bust { name, score },
            TurnResult::Stand { .. } => match self.play_dealer_turn(observer)? {
                TurnResult::Bust { name, score } => RoundResult::Bust { name, score },
                TurnResult::Stand { .. } => RoundResult::Resolved(self.resolve(observer)?),
            },
        };
        Ok(result)
    }

    /// Deals two cards each, one at a time, player first. The dealer's first
    /// card goes face down. Whatever a failed earlier deal left in the hands
    /// is dropped first.
    #[allowed_phase(WaitForDeal)]
    pub fn deal_initial_cards(&mut self) -> Result<(), Error> {
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        for _ in 0..2 {
            for participant in [&mut self.player as &mut dyn Participant, &mut self.dealer] {
                let card = self.shoe.draw()?;
                participant.receive_card(card);
            }
        }
        self.phase = RoundPhase::PlayerTurn;
        Ok(())
    }

    #[allowed_phase(PlayerTurn)]
    pub fn play_player_turn<S: DecisionSource, O: TableObserver>(
        &mut self,
        decisions: &mut S,
        observer: &mut O,
    ) -> Result<TurnResult, Error> {
        let result = turn::play_player(
            &mut self.player,
            &self.dealer,
            &mut self.shoe,
            decisions,
            observer,
        )?;
        self.phase = match &result {
            TurnResult::Stand { .. } => RoundPhase::DealerTurn,
            TurnResult::Bust { name, score } => self.finish(RoundResult::Bust {
                name: name.clone(),
                score: *score,
            }),
        };
        Ok(result)
    }

    /// Reveals the hidden card and lets the dealer play against the player's
    /// final score.
    #[allowed_phase(DealerTurn)]
    pub fn play_dealer_turn<O: TableObserver>(&mut self, observer: &mut O) -> Result<TurnResult, Error> {
        self.dealer.reveal();
        observer.on_hands(&self.view());

        let player_score = self
            .player
            .final_score()
            .unwrap_or_else(|| self.player.current_score());
        let result = turn::play_dealer(
            &mut self.dealer,
            &self.player,
            player_score,
            &self.policy,
            &mut self.shoe,
            observer,
        )?;
        self.phase = match &result {
            TurnResult::Stand { .. } => RoundPhase::Resolve,
            TurnResult::Bust { name, score } => self.finish(RoundResult::Bust {
                name: name.clone(),
                score: *score,
            }),
        };
        Ok(result)
    }

    #[allowed_phase(Resolve)]
    pub fn resolve<O: TableObserver>(&mut self, observer: &mut O) -> Result<RoundOutcome, Error> {
        let outcome = decide_winner(&[&self.player, &self.dealer]);
        observer.on_outcome(&outcome);
        self.phase = self.finish(RoundResult::Resolved(outcome.clone()));
        Ok(outcome)
    }

    /// Clears both hands for the next round. The shoe carries on.
    #[allowed_phase(Finished)]
    pub fn new_round(&mut self) -> Result<(), Error> {
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        self.phase = RoundPhase::WaitForDeal;
        Ok(())
    }

    /// Ends the round where it stands, without a result. Works from any
    /// phase; follow it with `new_round` to play on with the same shoe.
    pub fn abandon(&mut self) {
        self.result = None;
        self.phase = RoundPhase::Finished;
    }

    /// Gives the shoe back, ending the round.
    pub fn into_shoe(self) -> D {
        self.shoe
    }

    pub fn view(&self) -> TableView<'_> {
        TableView::new(&self.player, &self.dealer)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn shoe(&self) -> &D {
        &self.shoe
    }

    fn finish(&mut self, result: RoundResult) -> RoundPhase {
        info!("round over: {:?}", result);
        self.result = Some(result);
        RoundPhase::Finished
    }
}
