//! Fixed opponent policies for the single-player modes.

pub mod random;
pub mod standard;
pub mod trait_def;

pub use random::RandomPolicy;
pub use standard::StandardPolicy;
pub use trait_def::{OpponentAction, OpponentPolicy, PolicyError, TurnView};
