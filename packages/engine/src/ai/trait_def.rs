//! Opponent policy trait definition.

use std::fmt;

use crate::domain::claim::{Claim, SOCIAL};
use crate::domain::options::build_claim_options;
use crate::domain::roll::Roll;
use crate::domain::rules::RulesConfig;

/// Errors that can occur during policy decision-making.
#[derive(Debug)]
pub enum PolicyError {
    /// Policy encountered an internal error.
    Internal(String),
    /// Policy produced or faced an invalid move situation.
    InvalidMove(String),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::Internal(msg) => write!(f, "policy internal error: {msg}"),
            PolicyError::InvalidMove(msg) => write!(f, "policy invalid move: {msg}"),
        }
    }
}

impl std::error::Error for PolicyError {}

/// What a policy decided to do with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentAction {
    MakeClaim(Claim),
    CallBluff,
    ShowSocial,
}

/// Everything a policy may look at when choosing an action: the rules,
/// the standing claim, the claim its raise must beat, its own secret
/// roll, and both scores. Rolls of other players are never visible.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub rules: &'a RulesConfig,
    /// The claim currently on the table (challengeable), if any.
    pub standing_claim: Option<Claim>,
    /// The claim a raise must beat (`MatchState::claim_to_beat`).
    pub claim_to_beat: Option<Claim>,
    /// The actor's own roll this turn.
    pub roll: Roll,
    pub my_score: u8,
    pub opponent_score: u8,
}

impl TurnView<'_> {
    /// The claim menu actually playable this turn. The loose variant
    /// lists 41 in the option set, but 41 stays show-only: the engine
    /// rejects it as a claim unless the actor is holding it, so it is
    /// filtered out here whenever the roll is anything else.
    pub fn legal_claims(&self) -> Vec<Claim> {
        let mut options = build_claim_options(self.rules, self.claim_to_beat);
        if self.roll.value() != SOCIAL {
            options.retain(|c| !c.is_social());
        }
        options
    }

    /// Whether a bluff call is available (a claim is on the table).
    pub fn can_call_bluff(&self) -> bool {
        self.standing_claim.is_some()
    }
}

/// Trait for opponent policies.
///
/// Implementations receive the visible turn state and must choose a
/// legal action; they are responsible for querying `legal_claims()`
/// rather than inventing claims.
pub trait OpponentPolicy: Send + Sync {
    fn name(&self) -> &'static str;

    fn choose_action(&self, view: &TurnView<'_>) -> Result<OpponentAction, PolicyError>;
}
