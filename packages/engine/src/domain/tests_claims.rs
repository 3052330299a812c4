use crate::domain::claim::{
    enumerate_claims, is_legal_raise, Claim, MEXICAN, REVERSE, SOCIAL,
};
use crate::domain::rules::{RuleVariant, RulesConfig};

fn loose() -> RulesConfig {
    RulesConfig {
        variant: RuleVariant::Loose,
        ..RulesConfig::default()
    }
}

#[test]
fn total_order_matches_traditional_ranking() {
    // Mixed values ascend, doubles above all mixed, Mexican on top.
    let expected: [u8; 20] = [
        31, 32, 42, 43, 51, 52, 53, 54, 61, 62, 63, 64, 65, // mixed
        11, 22, 33, 44, 55, 66, // doubles
        21, // mexican
    ];
    let mut claims: Vec<Claim> = expected.iter().rev().map(|&v| Claim(v)).collect();
    claims.sort();
    let sorted: Vec<u8> = claims.iter().map(|c| c.0).collect();
    assert_eq!(sorted, expected);
}

#[test]
fn doubles_outrank_every_mixed_value() {
    assert!(Claim(11).beats(Claim(65)));
    assert!(Claim(66).beats(Claim(11)));
    assert!(!Claim(65).beats(Claim(11)));
}

#[test]
fn mexican_outranks_everything() {
    for hi in 1..=6u8 {
        for lo in 1..=hi {
            let c = Claim(hi * 10 + lo);
            if c != MEXICAN {
                assert!(MEXICAN.beats(c), "21 must beat {c}");
            }
        }
    }
}

#[test]
fn normalization_puts_high_die_first() {
    assert_eq!(Claim::from_dice(3, 5), Claim(53));
    assert_eq!(Claim::from_dice(5, 3), Claim(53));
    assert_eq!(Claim::from_dice(2, 6), Claim(62));
    assert_eq!(Claim::from_dice(4, 4), Claim(44));
}

#[test]
fn validity_rejects_non_die_encodings() {
    assert!(Claim(53).is_valid());
    assert!(Claim(11).is_valid());
    assert!(!Claim(70).is_valid());
    assert!(!Claim(17).is_valid());
    assert!(!Claim(0).is_valid());
    assert!(!Claim(35).is_valid()); // low digit above high digit
}

#[test]
fn reverse_relation_only_answers_mexican() {
    assert!(REVERSE.is_reverse_of(MEXICAN));
    assert!(!REVERSE.is_reverse_of(Claim(53)));
    assert!(!Claim(53).is_reverse_of(MEXICAN));
    assert!(!MEXICAN.is_reverse_of(REVERSE));
}

#[test]
fn always_claimable_is_exactly_mexican_and_reverse() {
    assert!(MEXICAN.is_always_claimable());
    assert!(REVERSE.is_always_claimable());
    assert!(!SOCIAL.is_always_claimable());
    assert!(!Claim(66).is_always_claimable());
}

#[test]
fn legal_raise_requires_strictly_higher_rank() {
    assert!(is_legal_raise(None, Claim(32)));
    assert!(is_legal_raise(Some(Claim(53)), Claim(54)));
    assert!(is_legal_raise(Some(Claim(53)), Claim(11)));
    assert!(is_legal_raise(Some(Claim(66)), MEXICAN));
    assert!(!is_legal_raise(Some(Claim(53)), Claim(53)));
    assert!(!is_legal_raise(Some(Claim(53)), Claim(43)));
    assert!(!is_legal_raise(Some(Claim(53)), REVERSE));
}

#[test]
fn reverse_is_a_legal_raise_only_against_mexican() {
    assert!(is_legal_raise(Some(MEXICAN), REVERSE));
    assert!(is_legal_raise(None, REVERSE));
    assert!(!is_legal_raise(Some(Claim(11)), REVERSE));
}

#[test]
fn strict_enumeration_excludes_all_specials() {
    let claims = enumerate_claims(&RulesConfig::default());
    assert_eq!(claims.len(), 18);
    assert!(!claims.contains(&MEXICAN));
    assert!(!claims.contains(&REVERSE));
    assert!(!claims.contains(&SOCIAL));
    assert!(claims.iter().all(|c| c.is_valid()));
}

#[test]
fn loose_enumeration_adds_social_only() {
    let claims = enumerate_claims(&loose());
    assert_eq!(claims.len(), 19);
    assert!(claims.contains(&SOCIAL));
    assert!(!claims.contains(&MEXICAN));
    assert!(!claims.contains(&REVERSE));
}
