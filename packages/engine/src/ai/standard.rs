//! Standard opponent - the deterministic fixed policy shipped with
//! the single-player modes.
//!
//! Goals:
//! - Stay 100% legal by only ever picking from `legal_claims()`.
//! - Be deterministic (no RNG) so a given match seed replays exactly.
//!
//! Strategy:
//! - Show a rolled Social immediately (free round reset).
//! - Under a Mexican lockdown: claim 21 only when actually holding it,
//!   otherwise challenge - the lockdown menu is all risk.
//! - Challenge once the standing claim reaches the doubles tier; bluffs
//!   that high are more likely than honest rolls.
//! - Otherwise claim truthfully when the roll is a legal raise, or take
//!   the smallest legal bluff to keep later options open.

use super::trait_def::{OpponentAction, OpponentPolicy, PolicyError, TurnView};
use crate::domain::claim::{is_legal_raise, Claim, MEXICAN, SOCIAL};

/// Rank at which the standing claim becomes worth challenging
/// (the lowest double, 11).
const CALL_RANK_THRESHOLD: u16 = 101;

#[derive(Clone, Default)]
pub struct StandardPolicy;

impl StandardPolicy {
    pub const NAME: &'static str = "standard";

    pub fn new() -> Self {
        Self
    }
}

impl OpponentPolicy for StandardPolicy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_action(&self, view: &TurnView<'_>) -> Result<OpponentAction, PolicyError> {
        let rolled: Claim = view.roll.value();

        if rolled == SOCIAL {
            return Ok(OpponentAction::ShowSocial);
        }

        if view.claim_to_beat.is_some_and(Claim::is_mexican) {
            if rolled == MEXICAN {
                return Ok(OpponentAction::MakeClaim(MEXICAN));
            }
            if view.can_call_bluff() {
                return Ok(OpponentAction::CallBluff);
            }
        }

        if view.can_call_bluff() {
            if let Some(standing) = view.standing_claim {
                if standing.rank() >= CALL_RANK_THRESHOLD {
                    return Ok(OpponentAction::CallBluff);
                }
            }
        }

        if is_legal_raise(view.claim_to_beat, rolled) {
            return Ok(OpponentAction::MakeClaim(rolled));
        }

        // Minimal bluff: the smallest claim still on the menu.
        let legal = view.legal_claims();
        legal
            .first()
            .copied()
            .map(OpponentAction::MakeClaim)
            .ok_or_else(|| PolicyError::InvalidMove("no legal claims available".into()))
    }
}
