//! Pure rule engine for the Mexican Dice bluffing game.
//!
//! Two players roll two dice each, make ascending (possibly false)
//! claims about their roll, and may challenge the previous claim.
//! Everything here is a pure function from (state, input) to
//! (new state | rejection): no I/O, no hidden randomness, no
//! persistence. Screens, storage and transport live with the caller,
//! which is expected to read authoritative state immediately before
//! computing a transition and write it back atomically.
//!
//! The two entry points are [`domain::apply_claim`] and
//! [`domain::apply_call_bluff`]; legal options come from
//! [`domain::build_claim_options`].

pub mod ai;
pub mod domain;
pub mod errors;
