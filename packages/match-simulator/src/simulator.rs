//! In-memory match driver.
//!
//! Runs whole matches through the two public engine entry points and
//! nothing else: the driver holds the per-player rolls (the engine
//! never sees a roll it should not) and appends the emitted events to
//! a local log, exactly as a real screen or backend caller would.

use mexican_engine::ai::{OpponentAction, OpponentPolicy, TurnView};
use mexican_engine::domain::{
    apply_call_bluff, apply_claim, other_player, roll_for_turn, ClaimOutcome, MatchState,
    MatchStatus, PlayerId, Roll, RoundEvent, RulesConfig, SOCIAL,
};
use tracing::debug;

/// Hard cap so a pathological policy pairing cannot spin forever.
const MAX_TURNS: u32 = 10_000;

/// Result of simulating a complete match.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// The seed this match was actually played from; metrics must
    /// report this value, not a recomputed one.
    pub seed: i64,
    pub winner: PlayerId,
    pub final_scores: [u8; 2],
    pub turns: u32,
    /// Append-only event log, in emission order.
    pub events: Vec<RoundEvent>,
}

/// Result of a survival run: seat 0 plays until it loses.
#[derive(Debug, Clone)]
pub struct SurvivalResult {
    /// Matches won by seat 0 before the first loss.
    pub streak: u32,
    pub matches: Vec<MatchResult>,
}

pub struct Simulator<'a> {
    rules: RulesConfig,
    policies: [&'a dyn OpponentPolicy; 2],
}

impl<'a> Simulator<'a> {
    pub fn new(rules: RulesConfig, policies: [&'a dyn OpponentPolicy; 2]) -> Self {
        Self { rules, policies }
    }

    /// Play one match to completion from the given seed.
    pub fn run_match(&self, match_seed: i64) -> Result<MatchResult, Box<dyn std::error::Error>> {
        let mut state = MatchState::new(&self.rules, 0);
        let mut events: Vec<RoundEvent> = Vec::new();
        let mut turn_no: u32 = 0;
        // The roll backing the standing claim, owned here: the engine
        // only ever receives it at resolution time.
        let mut claimant_roll: Option<Roll> = None;

        while state.status == MatchStatus::Active {
            turn_no += 1;
            if turn_no > MAX_TURNS {
                return Err(format!("match exceeded {MAX_TURNS} turns without finishing").into());
            }

            let actor = state.turn;
            let roll = roll_for_turn(match_seed, turn_no, actor);
            let view = TurnView {
                rules: &self.rules,
                standing_claim: state.current_claim,
                claim_to_beat: state.claim_to_beat(),
                roll,
                my_score: state.scores[actor as usize],
                opponent_score: state.scores[other_player(actor) as usize],
            };

            match self.policies[actor as usize].choose_action(&view)? {
                OpponentAction::CallBluff => {
                    let defender_roll = claimant_roll
                        .ok_or("policy called bluff with no claim on the table")?;
                    let resolved =
                        apply_call_bluff(&self.rules, &mut state, defender_roll.value())?;
                    debug!(turn = turn_no, actor, "{}", resolved.message);
                    events.extend(resolved.events);
                    claimant_roll = None;
                }
                OpponentAction::ShowSocial => {
                    let applied = apply_claim(&self.rules, &mut state, SOCIAL, Some(roll.value()))?;
                    events.extend(applied.events);
                    claimant_roll = None;
                }
                OpponentAction::MakeClaim(claim) => {
                    let applied = apply_claim(&self.rules, &mut state, claim, Some(roll.value()))?;
                    claimant_roll = match applied.outcome {
                        ClaimOutcome::Claimed => Some(roll),
                        _ => None,
                    };
                    events.extend(applied.events);
                }
            }
        }

        let winner = state
            .winner
            .ok_or("match finished without a recorded winner")?;
        Ok(MatchResult {
            seed: match_seed,
            winner,
            final_scores: state.scores,
            turns: turn_no,
            events,
        })
    }

    /// Chain matches until seat 0 loses (or the cap is reached),
    /// deriving a fresh seed per match.
    pub fn run_survival(
        &self,
        base_seed: i64,
        max_matches: u32,
    ) -> Result<SurvivalResult, Box<dyn std::error::Error>> {
        let mut matches = Vec::new();
        let mut streak = 0;
        for n in 0..max_matches {
            let seed = base_seed.wrapping_add((n as i64).wrapping_mul(1_000_003));
            let result = self.run_match(seed)?;
            let lost = result.winner != 0;
            if !lost {
                streak += 1;
            }
            matches.push(result);
            if lost {
                break;
            }
        }
        Ok(SurvivalResult { streak, matches })
    }
}
