/// Property-based tests for the claim total order and bluff resolver.
use proptest::prelude::*;

use crate::domain::bluff::{resolve_bluff, Verdict};
use crate::domain::rules::RulesConfig;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the claim order is total and antisymmetric.
    /// For any two valid claims, exactly one of "a beats b",
    /// "b beats a" or "a == b" holds.
    #[test]
    fn prop_claim_order_is_total(
        a in test_gens::valid_claim(),
        b in test_gens::valid_claim(),
    ) {
        let outcomes = [a.beats(b), b.beats(a), a == b];
        prop_assert_eq!(outcomes.iter().filter(|&&x| x).count(), 1,
            "exactly one relation must hold between {} and {}", a, b);
    }

    /// Property: Ord agrees with beats(), so display sorting is
    /// consistent with the ranking comparisons.
    #[test]
    fn prop_compare_consistent_with_beats(
        a in test_gens::valid_claim(),
        b in test_gens::valid_claim(),
    ) {
        prop_assert_eq!(a > b, a.beats(b));
        prop_assert_eq!(a.meets_or_beats(b), a >= b);
    }

    /// Property: a claim equal to the roll is truthful with penalty 1,
    /// any other claim is a bluff with penalty 1 (ordinary path).
    #[test]
    fn prop_resolution_verdict_is_exact_equality(
        claimed in test_gens::valid_claim(),
        actual in test_gens::valid_claim(),
    ) {
        let rules = RulesConfig::default();
        let res = resolve_bluff(&rules, claimed, actual, false);
        if claimed == actual {
            prop_assert_eq!(res.verdict, Verdict::Truthful);
        } else {
            prop_assert_eq!(res.verdict, Verdict::Bluffing);
        }
        prop_assert_eq!(res.penalty, 1);
    }

    /// Property: the reverse-vs-mexican flag always doubles the
    /// penalty, independent of the verdict.
    #[test]
    fn prop_reverse_flag_always_doubles(
        claimed in test_gens::valid_claim(),
        actual in test_gens::valid_claim(),
    ) {
        let rules = RulesConfig::default();
        let res = resolve_bluff(&rules, claimed, actual, true);
        prop_assert_eq!(res.penalty, 2);
    }

    /// Property: resolution is pure; identical inputs give identical
    /// outputs.
    #[test]
    fn prop_resolution_is_deterministic(
        claimed in test_gens::valid_claim(),
        actual in test_gens::valid_claim(),
        flag in any::<bool>(),
    ) {
        let rules = RulesConfig::default();
        prop_assert_eq!(
            resolve_bluff(&rules, claimed, actual, flag),
            resolve_bluff(&rules, claimed, actual, flag)
        );
    }
}
