//! Bluff resolution: the pure verdict-and-penalty computation.

use serde::{Deserialize, Serialize};

use crate::domain::claim::Claim;
use crate::domain::rules::RulesConfig;

/// Outcome of revealing the defender's actual roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The claim matched the actual roll.
    Truthful,
    /// The claim did not match the actual roll.
    Bluffing,
}

/// Verdict plus the score penalty at stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BluffResolution {
    pub verdict: Verdict,
    pub penalty: u8,
}

/// Resolve a bluff call against `claimed` given the defender's
/// `actual_roll`.
///
/// Truthful iff the roll equals the claim exactly; 41 in particular is
/// never satisfied by rank, only by a real roll of 41. The penalty is
/// ordinary unless the claim under scrutiny was a Reverse played
/// against a Mexican lockdown, where the stakes double.
///
/// Pure and order-independent: identical inputs always yield the
/// identical resolution.
pub fn resolve_bluff(
    rules: &RulesConfig,
    claimed: Claim,
    actual_roll: Claim,
    reverse_vs_mexican: bool,
) -> BluffResolution {
    let verdict = if actual_roll == claimed {
        Verdict::Truthful
    } else {
        Verdict::Bluffing
    };
    let penalty = if reverse_vs_mexican {
        rules.reverse_penalty
    } else {
        rules.base_penalty
    };
    BluffResolution { verdict, penalty }
}
