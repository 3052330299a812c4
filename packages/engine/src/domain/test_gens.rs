// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::claim::Claim;
use crate::domain::roll::Roll;
use crate::domain::rules::{RuleVariant, RulesConfig};

/// Any syntactically valid claim value, specials included.
pub fn valid_claim() -> impl Strategy<Value = Claim> {
    (1u8..=6, 1u8..=6).prop_map(|(a, b)| Claim::from_dice(a, b))
}

/// A valid claim that is neither Mexican, Reverse nor Social.
pub fn ordinary_claim() -> impl Strategy<Value = Claim> {
    valid_claim().prop_filter("ordinary claims only", |c| {
        !c.is_mexican() && !c.is_reverse() && !c.is_social()
    })
}

/// An optional prior claim, as the option builder receives it.
pub fn prev_claim() -> impl Strategy<Value = Option<Claim>> {
    proptest::option::of(valid_claim())
}

pub fn roll() -> impl Strategy<Value = Roll> {
    (1u8..=6, 1u8..=6).prop_map(|(die1, die2)| Roll { die1, die2 })
}

/// Either rule variant with default scoring.
pub fn rules() -> impl Strategy<Value = RulesConfig> {
    prop_oneof![
        Just(RulesConfig::default()),
        Just(RulesConfig {
            variant: RuleVariant::Loose,
            ..RulesConfig::default()
        }),
    ]
}
