//! Match simulator CLI - fast in-memory Mexican Dice simulation.
//!
//! Runs Quick Play or Survival matches between fixed policies entirely
//! in memory, with no persistence or transport, and writes per-match
//! metrics as JSONL. Doubles as the engine's end-to-end exerciser.

mod metrics;
mod output;
mod simulator;
mod types;

use clap::Parser;
use mexican_engine::ai::{OpponentPolicy, RandomPolicy, StandardPolicy};
use mexican_engine::domain::{RuleVariant, RulesConfig};
use metrics::build_match_metrics;
use output::OutputWriter;
use simulator::Simulator;
use tracing::{info, warn};
use types::{Mode, PolicyKind};

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "Fast in-memory Mexican Dice simulator")]
struct Args {
    /// Number of matches to simulate (survival: upper bound on the run)
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Game mode
    #[arg(long, default_value = "quick-play")]
    mode: Mode,

    /// Policy for seat 0 (the tracked player in survival)
    #[arg(long, default_value = "standard")]
    seat0: PolicyKind,

    /// Policy for seat 1
    #[arg(long, default_value = "random")]
    seat1: PolicyKind,

    /// Match seed (for deterministic runs); random when omitted
    #[arg(long)]
    seed: Option<i64>,

    /// Use the loose rule variant (41 offered in option sets)
    #[arg(long)]
    loose: bool,

    /// Starting score for both players
    #[arg(long, default_value = "6")]
    initial_score: u8,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,
}

fn build_policy(kind: PolicyKind, seed: Option<i64>) -> Box<dyn OpponentPolicy> {
    match kind {
        PolicyKind::Standard => Box::new(StandardPolicy::new()),
        PolicyKind::Random => Box::new(RandomPolicy::new(seed.map(|s| s as u64))),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let rules = RulesConfig {
        variant: if args.loose {
            RuleVariant::Loose
        } else {
            RuleVariant::Strict
        },
        initial_score: args.initial_score,
        ..RulesConfig::default()
    };

    let base_seed = args.seed.unwrap_or_else(rand::random::<i64>);
    info!(
        mode = ?args.mode,
        matches = args.matches,
        seat0 = args.seat0.name(),
        seat1 = args.seat1.name(),
        seed = base_seed,
        "starting simulator"
    );

    let seat0 = build_policy(args.seat0, args.seed);
    let seat1 = build_policy(args.seat1, args.seed.map(|s| s.wrapping_add(1)));
    let sim = Simulator::new(rules, [seat0.as_ref(), seat1.as_ref()]);
    let policy_names = [
        args.seat0.name().to_string(),
        args.seat1.name().to_string(),
    ];

    let mut output_writer = OutputWriter::new(&args.output_dir)?;
    let mut wins: [u32; 2] = [0, 0];
    let mut errors = 0u32;

    match args.mode {
        Mode::QuickPlay => {
            for match_num in 1..=args.matches {
                let match_seed =
                    base_seed.wrapping_add((match_num as i64).wrapping_mul(1_000_003));
                match sim.run_match(match_seed) {
                    Ok(result) => {
                        wins[result.winner as usize] += 1;
                        let metrics = build_match_metrics(
                            match_num,
                            result.seed,
                            "quick-play",
                            policy_names.clone(),
                            &result,
                        );
                        if let Err(e) = output_writer.write_match(&metrics) {
                            warn!("failed to write metrics for match {match_num}: {e}");
                        }
                        info!(
                            match_num,
                            winner = result.winner,
                            turns = result.turns,
                            scores = ?result.final_scores,
                            "match completed"
                        );
                    }
                    Err(e) => {
                        errors += 1;
                        warn!("match {match_num} failed: {e}");
                    }
                }
            }
        }
        Mode::Survival => {
            let survival = sim.run_survival(base_seed, args.matches)?;
            for (i, result) in survival.matches.iter().enumerate() {
                wins[result.winner as usize] += 1;
                let metrics = build_match_metrics(
                    i as u32 + 1,
                    result.seed,
                    "survival",
                    policy_names.clone(),
                    result,
                );
                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!("failed to write metrics for match {}: {e}", i + 1);
                }
            }
            info!(streak = survival.streak, "survival run ended");
        }
    }

    let path = output_writer.finish()?;
    info!(
        seat0_wins = wins[0],
        seat1_wins = wins[1],
        errors,
        output = %path.display(),
        "simulation finished"
    );

    Ok(())
}
