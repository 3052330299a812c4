//! Metrics collection for simulated matches.
//!
//! Everything here is derived from the engine's event log; this is
//! the aggregate-statistics counter layer the engine deliberately
//! leaves to its callers.

use std::collections::HashMap;

use mexican_engine::domain::{RoundEvent, Verdict};
use serde::Serialize;

use crate::simulator::MatchResult;

/// One JSONL row per match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    pub seed: i64,
    pub timestamp: String,
    pub mode: String,
    pub policies: [String; 2],
    pub winner: u8,
    pub turns: u32,
    pub final_scores: [u8; 2],
    pub counters: MatchCounters,
    /// How often each claim value was put on the table.
    pub claim_counts: HashMap<u8, u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchCounters {
    pub claims_made: u32,
    pub reverse_plays: u32,
    pub bluff_calls: u32,
    pub truthful_claims_challenged: u32,
    pub bluffs_caught: u32,
    pub socials_shown: u32,
    pub lockdown_violations: u32,
}

pub fn build_match_metrics(
    match_id: u32,
    seed: i64,
    mode: &str,
    policies: [String; 2],
    result: &MatchResult,
) -> MatchMetrics {
    let mut counters = MatchCounters::default();
    let mut claim_counts: HashMap<u8, u32> = HashMap::new();

    for event in &result.events {
        match event {
            RoundEvent::ClaimMade {
                claim,
                reverse_vs_mexican,
                ..
            } => {
                counters.claims_made += 1;
                if *reverse_vs_mexican {
                    counters.reverse_plays += 1;
                }
                *claim_counts.entry(claim.0).or_default() += 1;
            }
            RoundEvent::SocialShown { .. } => counters.socials_shown += 1,
            RoundEvent::LockdownViolated { .. } => counters.lockdown_violations += 1,
            RoundEvent::BluffResolved { verdict, .. } => {
                counters.bluff_calls += 1;
                match verdict {
                    Verdict::Truthful => counters.truthful_claims_challenged += 1,
                    Verdict::Bluffing => counters.bluffs_caught += 1,
                }
            }
            RoundEvent::MatchEnded { .. } => {}
        }
    }

    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .unwrap_or_else(|_| "unknown".to_string());

    MatchMetrics {
        match_id,
        seed,
        timestamp,
        mode: mode.to_string(),
        policies,
        winner: result.winner,
        turns: result.turns,
        final_scores: result.final_scores,
        counters,
        claim_counts,
    }
}
