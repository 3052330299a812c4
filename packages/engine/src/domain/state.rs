//! Mutable match state threaded through the engine.

use serde::{Deserialize, Serialize};

use crate::domain::claim::Claim;
use crate::domain::rules::{RulesConfig, PLAYERS};
use crate::errors::domain::DomainError;

pub type PlayerId = u8; // 0..=1

/// The opposing seat (0 ↔ 1).
#[inline]
pub fn other_player(p: PlayerId) -> PlayerId {
    1 - p
}

/// Match progression; `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Active,
    Finished,
}

/// What the most recent accepted transition was. Affects who is
/// liable for how much when the next bluff call lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LastAction {
    /// An ordinary claim (or a fresh-round special).
    Claim,
    /// A Reverse played specifically against a Mexican lockdown.
    ReverseVsMexican,
}

/// The record a caller persists per match and hands back for every
/// transition. The engine never stores it anywhere itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Scores per seat, floored at zero.
    pub scores: [u8; PLAYERS],
    /// Last claim made; `None` at round start.
    pub current_claim: Option<Claim>,
    /// The claim that must be beaten once reverse chains unwind.
    /// `None` exactly when `current_claim` is `None`.
    pub baseline_claim: Option<Claim>,
    /// Tag for the most recent transition; `None` at round start.
    pub last_action: Option<LastAction>,
    /// Seat expected to act next.
    pub turn: PlayerId,
    pub status: MatchStatus,
    /// Set exactly when `status` is `Finished`.
    pub winner: Option<PlayerId>,
}

impl MatchState {
    /// Fresh match: full scores, empty round, given opening seat.
    pub fn new(rules: &RulesConfig, starting_player: PlayerId) -> Self {
        Self {
            scores: [rules.initial_score; PLAYERS],
            current_claim: None,
            baseline_claim: None,
            last_action: None,
            turn: starting_player,
            status: MatchStatus::Active,
            winner: None,
        }
    }

    /// The claim the next claim must actually beat. A Reverse chain
    /// keeps the pre-Mexican pressure point alive in `baseline_claim`
    /// while `current_claim` holds the 31.
    pub fn claim_to_beat(&self) -> Option<Claim> {
        match self.last_action {
            Some(LastAction::ReverseVsMexican) => self.baseline_claim,
            _ => self.current_claim,
        }
    }

    /// Clear the round-scoped fields (claim, baseline, last action).
    pub(crate) fn clear_round(&mut self) {
        self.current_claim = None;
        self.baseline_claim = None;
        self.last_action = None;
    }

    /// Deduct `penalty` from `seat`, flooring at zero, and finish the
    /// match if the score ran out. Returns the winner if one emerged.
    pub(crate) fn apply_penalty(&mut self, seat: PlayerId, penalty: u8) -> Option<PlayerId> {
        self.scores[seat as usize] = self.scores[seat as usize].saturating_sub(penalty);
        if self.scores[seat as usize] == 0 {
            self.status = MatchStatus::Finished;
            self.winner = Some(other_player(seat));
            self.winner
        } else {
            None
        }
    }
}

pub fn require_current_claim(state: &MatchState, ctx: &'static str) -> Result<Claim, DomainError> {
    state.current_claim.ok_or_else(|| {
        DomainError::contract(format!("no active claim to challenge ({ctx})"))
    })
}
