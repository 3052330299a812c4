//! Claim values and the total ordering over them.
//!
//! A claim is a two-digit combination of two dice, high die first,
//! encoded as `10*hi + lo` (rolling (3,5) gives claim 53). Three
//! values carry special status: 21 (Mexican) is the highest claim and
//! triggers lockdown, 31 (Reverse) is legal only against a Mexican,
//! and 41 (Social) must be an actual roll and resets the round.

use serde::{Deserialize, Serialize};

use crate::domain::rules::RulesConfig;

/// The highest-ranked claim; once made, options collapse to the lockdown set.
pub const MEXICAN: Claim = Claim(21);
/// Legal only in response to a Mexican; inverts the pressure.
pub const REVERSE: Claim = Claim(31);
/// Show-only value; must match the actual roll, never bluffable.
pub const SOCIAL: Claim = Claim(41);

/// A claim value in the `10*hi + lo` encoding, `1 <= lo <= hi <= 6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claim(pub u8);

impl Claim {
    /// Build a claim from two dice faces, normalizing to high-first.
    pub fn from_dice(a: u8, b: u8) -> Self {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        Claim(hi * 10 + lo)
    }

    pub fn hi(self) -> u8 {
        self.0 / 10
    }

    pub fn lo(self) -> u8 {
        self.0 % 10
    }

    /// Whether this is a syntactically valid two-die combination.
    pub fn is_valid(self) -> bool {
        let (hi, lo) = (self.hi(), self.lo());
        (1..=6).contains(&lo) && (lo..=6).contains(&hi)
    }

    pub fn is_double(self) -> bool {
        self.hi() == self.lo()
    }

    pub fn is_mexican(self) -> bool {
        self == MEXICAN
    }

    pub fn is_reverse(self) -> bool {
        self == REVERSE
    }

    pub fn is_social(self) -> bool {
        self == SOCIAL
    }

    /// True iff this claim is the Reverse answer to `prev` (the only
    /// legal reverse relation: 31 against 21).
    pub fn is_reverse_of(self, prev: Claim) -> bool {
        prev.is_mexican() && self.is_reverse()
    }

    /// 21 and 31 may be claimed regardless of the prior claim; they
    /// are the lockdown entry/escape values.
    pub fn is_always_claimable(self) -> bool {
        self.is_mexican() || self.is_reverse()
    }

    /// Position in the total claim order.
    ///
    /// Mixed values rank by their encoding, doubles above all mixed
    /// values, Mexican above everything. 31 and 41 sit at their
    /// natural mixed positions; those ranks are only ever consulted in
    /// lockdown/show contexts, ordinary comparisons never see them.
    pub fn rank(self) -> u16 {
        if self.is_mexican() {
            return 1000;
        }
        if self.is_double() {
            return 100 + self.hi() as u16;
        }
        self.0 as u16
    }

    /// Strict total-order win: `self` outranks `other`.
    pub fn beats(self, other: Claim) -> bool {
        self.rank() > other.rank()
    }

    pub fn meets_or_beats(self, other: Claim) -> bool {
        self.rank() >= other.rank()
    }
}

// Ord follows rank(), so sorting a claim list yields the deterministic
// display order the option builder promises.
impl Ord for Claim {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank().cmp(&other.rank()) {
            std::cmp::Ordering::Equal => self.0.cmp(&other.0),
            ord => ord,
        }
    }
}

impl PartialOrd for Claim {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether `claim` may follow `prev`: anything opens a fresh round, an
/// ongoing round demands a strictly higher rank or the Reverse answer
/// to a Mexican.
pub fn is_legal_raise(prev: Option<Claim>, claim: Claim) -> bool {
    match prev {
        None => true,
        Some(p) => claim.beats(p) || claim.is_reverse_of(p),
    }
}

/// All enumerable (generally bluffable) claim values: every mixed
/// combination plus the doubles, excluding the specials. 41 joins the
/// universe only under the loose variant; 21 and 31 are injected by
/// the option builder, never enumerated.
pub fn enumerate_claims(rules: &RulesConfig) -> Vec<Claim> {
    let mut out = Vec::with_capacity(19);
    for hi in 1..=6u8 {
        for lo in 1..=hi {
            let c = Claim(hi * 10 + lo);
            if c.is_mexican() || c.is_reverse() {
                continue;
            }
            if c.is_social() && !rules.social_in_options() {
                continue;
            }
            out.push(c);
        }
    }
    out.sort();
    out
}
