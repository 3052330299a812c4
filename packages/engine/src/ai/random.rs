//! Random opponent - makes random legal moves.
//!
//! Baseline policy: chooses uniformly among the legal claims, calls
//! bluff with a fixed probability when a claim is on the table, and
//! always shows a rolled Social. Deterministic under a seed.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{OpponentAction, OpponentPolicy, PolicyError, TurnView};
use crate::domain::claim::SOCIAL;

/// Probability of challenging the standing claim instead of raising.
const CALL_CHANCE: f64 = 0.25;

pub struct RandomPolicy {
    /// Wrapped in `Mutex` for interior mutability since policy methods
    /// take `&self` but the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPolicy {
    pub const NAME: &'static str = "random";

    /// `Some(seed)` gives reproducible behavior; `None` uses system
    /// entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl OpponentPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_action(&self, view: &TurnView<'_>) -> Result<OpponentAction, PolicyError> {
        // A rolled Social is free: reset the round, no downside.
        if view.roll.value() == SOCIAL {
            return Ok(OpponentAction::ShowSocial);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| PolicyError::Internal(format!("RNG lock poisoned: {e}")))?;

        if view.can_call_bluff() && rng.random_bool(CALL_CHANCE) {
            return Ok(OpponentAction::CallBluff);
        }

        let legal = view.legal_claims();
        let choice = legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| PolicyError::InvalidMove("no legal claims available".into()))?;

        Ok(OpponentAction::MakeClaim(choice))
    }
}
