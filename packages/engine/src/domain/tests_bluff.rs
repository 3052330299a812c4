use crate::domain::bluff::{resolve_bluff, Verdict};
use crate::domain::claim::{Claim, REVERSE, SOCIAL};
use crate::domain::rules::RulesConfig;

#[test]
fn truthful_claim_costs_one_point() {
    let rules = RulesConfig::default();
    let res = resolve_bluff(&rules, Claim(53), Claim(53), false);
    assert_eq!(res.verdict, Verdict::Truthful);
    assert_eq!(res.penalty, 1);
}

#[test]
fn bluffing_claim_costs_one_point() {
    let rules = RulesConfig::default();
    let res = resolve_bluff(&rules, Claim(62), Claim(41), false);
    assert_eq!(res.verdict, Verdict::Bluffing);
    assert_eq!(res.penalty, 1);
}

#[test]
fn reverse_vs_mexican_doubles_the_stakes_either_way() {
    let rules = RulesConfig::default();
    let truthful = resolve_bluff(&rules, REVERSE, REVERSE, true);
    assert_eq!(truthful.verdict, Verdict::Truthful);
    assert_eq!(truthful.penalty, 2);

    let bluffing = resolve_bluff(&rules, REVERSE, Claim(53), true);
    assert_eq!(bluffing.verdict, Verdict::Bluffing);
    assert_eq!(bluffing.penalty, 2);
}

#[test]
fn social_is_only_truthful_on_an_exact_roll() {
    let rules = RulesConfig::default();
    let shown = resolve_bluff(&rules, SOCIAL, SOCIAL, false);
    assert_eq!(shown.verdict, Verdict::Truthful);

    // A higher-ranked roll never satisfies 41 by rank.
    let faked = resolve_bluff(&rules, SOCIAL, Claim(66), false);
    assert_eq!(faked.verdict, Verdict::Bluffing);
}

#[test]
fn resolution_is_pure_and_repeatable() {
    let rules = RulesConfig::default();
    let a = resolve_bluff(&rules, Claim(54), Claim(43), false);
    let b = resolve_bluff(&rules, Claim(54), Claim(43), false);
    assert_eq!(a, b);
}
