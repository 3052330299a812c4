//! Turn/round state machine: the two engine entry points.
//!
//! Both transitions validate first and mutate only on acceptance; a
//! rejected input leaves the state untouched so the caller can
//! re-prompt the same actor. Every accepted transition ends the
//! acting player's turn and yields [`RoundEvent`]s for the caller's
//! append-only history log.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::bluff::{resolve_bluff, Verdict};
use crate::domain::claim::{is_legal_raise, Claim, MEXICAN, REVERSE, SOCIAL};
use crate::domain::rules::RulesConfig;
use crate::domain::state::{
    other_player, require_current_claim, LastAction, MatchState, MatchStatus, PlayerId,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// Discrete records emitted by accepted transitions. The engine keeps
/// no history of its own; callers append these to whatever log or
/// stats store they maintain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum RoundEvent {
    ClaimMade {
        player: PlayerId,
        claim: Claim,
        reverse_vs_mexican: bool,
    },
    SocialShown {
        player: PlayerId,
    },
    LockdownViolated {
        player: PlayerId,
        claim: Claim,
        penalty: u8,
    },
    BluffResolved {
        caller: PlayerId,
        defender: PlayerId,
        claimed: Claim,
        actual: Claim,
        verdict: Verdict,
        loser: PlayerId,
        penalty: u8,
    },
    MatchEnded {
        winner: PlayerId,
    },
}

/// How an accepted claim landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Ordinary or special claim recorded; round continues.
    Claimed,
    /// A true 41 was shown; round reset without penalty.
    SocialShown,
    /// Claim broke the Mexican lockdown; automatic double-penalty
    /// loss for the claimant, no bluff call needed.
    LockdownLoss { penalty: u8 },
}

/// Result of [`apply_claim`], describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimApplied {
    pub outcome: ClaimOutcome,
    pub events: Vec<RoundEvent>,
}

/// Result of [`apply_call_bluff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BluffCallResolved {
    pub verdict: Verdict,
    /// Seat that paid the penalty.
    pub loser: PlayerId,
    pub penalty: u8,
    /// Narration suitable for surfacing to the user verbatim.
    pub message: String,
    pub events: Vec<RoundEvent>,
}

fn ensure_active(state: &MatchState) -> Result<(), DomainError> {
    if state.status == MatchStatus::Finished {
        return Err(DomainError::validation(
            ValidationKind::GameFinished,
            "game is finished",
        ));
    }
    Ok(())
}

/// Apply the current turn owner's claim.
///
/// `actual_roll` is consulted only for the Social path: 41 must be
/// backed by a real roll of 41. Everything else may be bluffed freely;
/// claiming above (or below) one's roll is a legitimate move, not an
/// error.
pub fn apply_claim(
    rules: &RulesConfig,
    state: &mut MatchState,
    claim: Claim,
    actual_roll: Option<Claim>,
) -> Result<ClaimApplied, DomainError> {
    ensure_active(state)?;

    if !claim.is_valid() {
        return Err(DomainError::validation(
            ValidationKind::IllegalClaim,
            format!("{claim} is not a two-die combination"),
        ));
    }

    let actor = state.turn;

    // Social: show-only, validated by equality with the real roll,
    // never converted into a bluffable claim.
    if claim.is_social() {
        if actual_roll != Some(SOCIAL) {
            return Err(DomainError::validation(
                ValidationKind::SocialWithoutRoll,
                "41 can only be shown with an actual roll of 41",
            ));
        }
        state.clear_round();
        state.turn = other_player(actor);
        debug!(player = actor, "social shown, round reset");
        return Ok(ClaimApplied {
            outcome: ClaimOutcome::SocialShown,
            events: vec![RoundEvent::SocialShown { player: actor }],
        });
    }

    let previous = state.claim_to_beat();

    // Mexican lockdown: only 21 and 31 keep the round alive. Anything
    // else is an automatic double-penalty loss, no bluff call needed.
    if previous.is_some_and(Claim::is_mexican) {
        if claim == MEXICAN {
            state.current_claim = Some(MEXICAN);
            state.baseline_claim = state.baseline_claim.or(Some(claim));
            state.last_action = Some(LastAction::Claim);
            state.turn = other_player(actor);
            debug!(player = actor, %claim, "mexican re-claimed under lockdown");
            return Ok(ClaimApplied {
                outcome: ClaimOutcome::Claimed,
                events: vec![RoundEvent::ClaimMade {
                    player: actor,
                    claim,
                    reverse_vs_mexican: false,
                }],
            });
        }
        if claim == REVERSE {
            state.current_claim = Some(REVERSE);
            state.last_action = Some(LastAction::ReverseVsMexican);
            state.turn = other_player(actor);
            debug!(player = actor, "reverse played against mexican");
            return Ok(ClaimApplied {
                outcome: ClaimOutcome::Claimed,
                events: vec![RoundEvent::ClaimMade {
                    player: actor,
                    claim,
                    reverse_vs_mexican: true,
                }],
            });
        }

        let penalty = rules.reverse_penalty;
        let mut events = vec![RoundEvent::LockdownViolated {
            player: actor,
            claim,
            penalty,
        }];
        if let Some(winner) = state.apply_penalty(actor, penalty) {
            events.push(RoundEvent::MatchEnded { winner });
        }
        state.clear_round();
        state.turn = other_player(actor);
        debug!(player = actor, %claim, penalty, "lockdown violated");
        return Ok(ClaimApplied {
            outcome: ClaimOutcome::LockdownLoss { penalty },
            events,
        });
    }

    if !is_legal_raise(previous, claim) {
        let detail = match previous {
            Some(p) => format!("{claim} does not beat the standing claim {p}"),
            None => format!("{claim} cannot open the round"),
        };
        return Err(DomainError::validation(ValidationKind::IllegalClaim, detail));
    }

    state.current_claim = Some(claim);
    // Mexican keeps the pre-Mexican pressure point alive; ordinary
    // claims move it. An opening claim always seeds the baseline.
    if claim.is_mexican() {
        state.baseline_claim = state.baseline_claim.or(Some(claim));
    } else {
        state.baseline_claim = Some(claim);
    }
    state.last_action = Some(LastAction::Claim);
    state.turn = other_player(actor);
    debug!(player = actor, %claim, "claim accepted");

    Ok(ClaimApplied {
        outcome: ClaimOutcome::Claimed,
        events: vec![RoundEvent::ClaimMade {
            player: actor,
            claim,
            reverse_vs_mexican: false,
        }],
    })
}

/// The current turn owner challenges the standing claim.
///
/// `defender_actual_roll` is the roll the previous claimant was
/// holding. Liability follows the verdict: a truthful defender costs
/// the challenger the penalty, a bluffing defender pays it. The
/// challenger opens the next round either way.
pub fn apply_call_bluff(
    rules: &RulesConfig,
    state: &mut MatchState,
    defender_actual_roll: Claim,
) -> Result<BluffCallResolved, DomainError> {
    ensure_active(state)?;

    let claimed = require_current_claim(state, "apply_call_bluff")?;
    let caller = state.turn;
    let defender = other_player(caller);
    let reverse_vs_mexican = state.last_action == Some(LastAction::ReverseVsMexican);

    let resolution = resolve_bluff(rules, claimed, defender_actual_roll, reverse_vs_mexican);
    let loser = match resolution.verdict {
        Verdict::Truthful => caller,
        Verdict::Bluffing => defender,
    };

    let mut events = vec![RoundEvent::BluffResolved {
        caller,
        defender,
        claimed,
        actual: defender_actual_roll,
        verdict: resolution.verdict,
        loser,
        penalty: resolution.penalty,
    }];
    if let Some(winner) = state.apply_penalty(loser, resolution.penalty) {
        events.push(RoundEvent::MatchEnded { winner });
    }
    state.clear_round();
    // Challenger opens the next round regardless of outcome.
    state.turn = caller;

    let message = match resolution.verdict {
        Verdict::Truthful => format!(
            "claim {claimed} was truthful ({} rolled), player {loser} loses {} point(s)",
            defender_actual_roll, resolution.penalty
        ),
        Verdict::Bluffing => format!(
            "claim {claimed} was a bluff ({} rolled), player {loser} loses {} point(s)",
            defender_actual_roll, resolution.penalty
        ),
    };
    debug!(
        caller,
        defender,
        %claimed,
        actual = %defender_actual_roll,
        verdict = ?resolution.verdict,
        loser,
        "bluff call resolved"
    );

    Ok(BluffCallResolved {
        verdict: resolution.verdict,
        loser,
        penalty: resolution.penalty,
        message,
        events,
    })
}
