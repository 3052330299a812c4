//! Rule configuration threaded through every engine entry point.
//!
//! Two field-observed variants of the option builder exist: the strict
//! one keeps 41 (Social) out of the claimable universe entirely, the
//! loose one offers it inside lockdown and general option sets. The
//! variant is an explicit, immutable choice made when the match is
//! configured, never a per-call default.

use serde::{Deserialize, Serialize};

/// Number of players in a match. The engine is strictly two-handed.
pub const PLAYERS: usize = 2;

/// Which 41-handling variant is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleVariant {
    /// 41 is show-only: excluded from enumeration and from lockdown.
    Strict,
    /// 41 also appears in the lockdown and general option sets.
    Loose,
}

/// Immutable per-match rule configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    pub variant: RuleVariant,
    /// Starting score for both players.
    pub initial_score: u8,
    /// Points lost on an ordinary bluff resolution.
    pub base_penalty: u8,
    /// Points lost when the resolution concerns a Reverse played
    /// against a Mexican lockdown, and on a lockdown violation.
    pub reverse_penalty: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            variant: RuleVariant::Strict,
            initial_score: 6,
            base_penalty: 1,
            reverse_penalty: 2,
        }
    }
}

impl RulesConfig {
    /// Whether 41 belongs in builder output (lockdown and open sets).
    pub fn social_in_options(&self) -> bool {
        self.variant == RuleVariant::Loose
    }
}
