//! Shared types for the simulator.

use clap::ValueEnum;

/// Which single-player mode to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Independent matches, each starting fresh.
    QuickPlay,
    /// Consecutive matches for seat 0 until the first loss.
    Survival,
}

/// Which fixed policy fills a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    Standard,
    Random,
}

impl PolicyKind {
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Standard => "standard",
            PolicyKind::Random => "random",
        }
    }
}
