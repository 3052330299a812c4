//! Dice rolls and deterministic roll-seed derivation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::domain::claim::Claim;

/// A two-die roll as it left the cup, order preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    pub die1: u8,
    pub die2: u8,
}

impl Roll {
    /// Normalized claim-shaped encoding, larger face first
    /// (rolling (2,6) yields 62).
    pub fn value(self) -> Claim {
        Claim::from_dice(self.die1, self.die2)
    }
}

/// Roll two independent uniform dice in 1..=6.
pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R) -> Roll {
    Roll {
        die1: rng.random_range(1..=6),
        die2: rng.random_range(1..=6),
    }
}

/// Derive the RNG seed for one player's roll on a given turn.
///
/// Same match seed + turn number + seat always reproduce the same
/// roll, so an online caller can regenerate a stored turn's dice
/// without persisting them.
pub fn derive_roll_seed(match_seed: i64, turn_no: u32, seat: u8) -> u64 {
    let base = match_seed as u64;
    base.wrapping_add((turn_no as u64).wrapping_mul(10007))
        .wrapping_add((seat as u64).wrapping_mul(101))
        .wrapping_add(3)
}

/// The roll a given seat holds on a given turn of a seeded match.
///
/// Uses ChaCha so the same stored match seed regenerates the same
/// dice on every platform and release; online callers can avoid
/// persisting rolls entirely.
pub fn roll_for_turn(match_seed: i64, turn_no: u32, seat: u8) -> Roll {
    let mut rng = ChaCha8Rng::seed_from_u64(derive_roll_seed(match_seed, turn_no, seat));
    roll_dice(&mut rng)
}
