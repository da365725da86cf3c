// Disallowed suffix combinations.
//
// Four flag conjunctions have no sensible English rendering. Any one of
// them turns the whole translation into the "Invalid input" sentinel, no
// matter what the rest of the stack says. `translate.rs` checks this
// before doing any rendering work.

use serde::Serialize;
use std::fmt;

use crate::features::FeatureSet;

/// A combination the renderer refuses to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Disallowed {
    /// -lla + -puni + -ri: "about to" stacked on "likes to".
    ImminentDesire,
    /// -ña + -ri: "already" stacked on "likes to".
    CompletedDesire,
    /// -lla + -taq + -ña.
    LimitedContrastiveChange,
    /// -lla + -raq + -taq.
    LimitedContrastivePersistence,
}

impl Disallowed {
    /// Checked in this order; the first that holds is reported.
    pub const ALL: [Disallowed; 4] = [
        Disallowed::ImminentDesire,
        Disallowed::CompletedDesire,
        Disallowed::LimitedContrastiveChange,
        Disallowed::LimitedContrastivePersistence,
    ];

    /// Whether this combination is present in `f`.
    pub fn holds(self, f: &FeatureSet) -> bool {
        match self {
            Disallowed::ImminentDesire => f.limitative && f.exclusive && f.desire,
            Disallowed::CompletedDesire => f.change_of_state && f.desire,
            Disallowed::LimitedContrastiveChange => {
                f.limitative && f.adversative && f.change_of_state
            }
            Disallowed::LimitedContrastivePersistence => {
                f.limitative && f.persistive && f.adversative
            }
        }
    }

    /// The suffixes whose co-occurrence is rejected.
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            Disallowed::ImminentDesire => &["lla", "puni", "ri"],
            Disallowed::CompletedDesire => &["ña", "ri"],
            Disallowed::LimitedContrastiveChange => &["lla", "taq", "ña"],
            Disallowed::LimitedContrastivePersistence => &["lla", "raq", "taq"],
        }
    }
}

impl fmt::Display for Disallowed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{} cannot combine", self.suffixes().join(" + -"))
    }
}

/// First disallowed combination present, or `None` if the flags are renderable.
pub fn check(features: &FeatureSet) -> Option<Disallowed> {
    Disallowed::ALL.into_iter().find(|d| d.holds(features))
}
