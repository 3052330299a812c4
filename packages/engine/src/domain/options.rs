//! Legal claim option builder.

use crate::domain::claim::{enumerate_claims, is_legal_raise, Claim, MEXICAN, REVERSE, SOCIAL};
use crate::domain::rules::RulesConfig;

/// Compute the full legal option set for the current actor, sorted by
/// the claim order and deduplicated.
///
/// - Fresh round: the whole enumerable universe plus the specials.
/// - After a Mexican: the hard lockdown set only.
/// - Otherwise: every claim strictly above the previous one, plus the
///   always-claimable specials.
///
/// Purely a function of its inputs; bluffing below one's actual roll
/// is permitted and intentional, so the actor's roll never narrows
/// the menu.
pub fn build_claim_options(rules: &RulesConfig, previous: Option<Claim>) -> Vec<Claim> {
    let mut options: Vec<Claim> = match previous {
        Some(prev) if prev.is_mexican() => {
            let mut lockdown = vec![MEXICAN, REVERSE];
            if rules.social_in_options() {
                lockdown.push(SOCIAL);
            }
            lockdown
        }
        Some(prev) => {
            let mut v: Vec<Claim> = enumerate_claims(rules)
                .into_iter()
                .filter(|&c| is_legal_raise(Some(prev), c))
                .collect();
            // Mexican always stays claimable; Reverse answers only a
            // Mexican, so offering it here would invite a rejection.
            v.push(MEXICAN);
            v
        }
        None => {
            let mut v = enumerate_claims(rules);
            v.push(MEXICAN);
            v.push(REVERSE);
            v
        }
    };
    options.sort();
    options.dedup();
    options
}
