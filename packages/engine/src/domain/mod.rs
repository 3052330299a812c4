//! Domain layer: pure game logic types and transitions.

pub mod bluff;
pub mod claim;
pub mod options;
pub mod roll;
pub mod rules;
pub mod state;
pub mod transition;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_bluff;
#[cfg(test)]
mod tests_claims;
#[cfg(test)]
mod tests_props_claims;

// Re-exports for ergonomics
pub use bluff::{resolve_bluff, BluffResolution, Verdict};
pub use claim::{is_legal_raise, Claim, MEXICAN, REVERSE, SOCIAL};
pub use options::build_claim_options;
pub use roll::{derive_roll_seed, roll_dice, roll_for_turn, Roll};
pub use rules::{RuleVariant, RulesConfig};
pub use state::{other_player, LastAction, MatchState, MatchStatus, PlayerId};
pub use transition::{
    apply_call_bluff, apply_claim, BluffCallResolved, ClaimApplied, ClaimOutcome, RoundEvent,
};
