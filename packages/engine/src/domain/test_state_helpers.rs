// Helpers for building match states in specific mid-round shapes.

use crate::domain::claim::Claim;
use crate::domain::rules::RulesConfig;
use crate::domain::state::{LastAction, MatchState, PlayerId};

/// Fresh match with player 0 to open.
pub fn fresh_state(rules: &RulesConfig) -> MatchState {
    MatchState::new(rules, 0)
}

/// Mid-round state with an explicit claim/baseline pair on the table.
pub fn state_with_claim(
    rules: &RulesConfig,
    current: Claim,
    baseline: Claim,
    last_action: LastAction,
    turn: PlayerId,
) -> MatchState {
    let mut state = MatchState::new(rules, turn);
    state.current_claim = Some(current);
    state.baseline_claim = Some(baseline);
    state.last_action = Some(last_action);
    state
}
