// Feature extraction: six raw slot strings -> named boolean flags.
//
// Every rendering decision downstream (validity, opening marker, adverbs,
// conjugation frame, trailing adverbials) reads these flags rather than the
// raw strings. Combined suffixes set more than one flag: "kamu" is both
// additive and movement, "chkalla" both progressive and limitative, and
// "rpari" both haste and desire.

use serde::Serialize;

use crate::suffixes::{is_prefix, is_suffix};
use crate::types::{Slot, WordForm};

/// Flags derived from a word form. Recomputed on every translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureSet {
    /// -ku / -kamu: doing it alone.
    pub additive: bool,
    /// -mu / -kamu: going somewhere to do it.
    pub movement: bool,
    /// -lla / -chkalla: only, just.
    pub limitative: bool,
    /// -raq: still, first.
    pub persistive: bool,
    /// -chka / -chkalla: ongoing action.
    pub progressive: bool,
    /// -puni: of course, definitely.
    pub exclusive: bool,
    /// -pis: also.
    pub also: bool,
    /// -ri / -rpari: likes to.
    pub desire: bool,
    /// -ña: already, now.
    pub change_of_state: bool,
    /// -taq: but, again.
    pub adversative: bool,
    /// -rpa / -rpari: quickly.
    pub haste: bool,
    /// -sina: most likely.
    pub conjecture: bool,
}

impl FeatureSet {
    /// Derive all flags from a word form's suffixes.
    pub fn extract(form: &WordForm) -> Self {
        let manner = form.suffix(Slot::Manner);
        let direction = form.suffix(Slot::Direction);
        let aspect = form.suffix(Slot::Aspect);
        let phase = form.suffix(Slot::Phase);
        let discourse = form.suffix(Slot::Discourse);

        FeatureSet {
            additive: direction == "ku" || direction == "kamu",
            movement: is_suffix(direction, "mu"),
            limitative: is_suffix(aspect, "lla"),
            persistive: phase == "raq",
            progressive: is_prefix(aspect, "chka"),
            exclusive: discourse == "puni",
            also: discourse == "pis",
            desire: is_suffix(manner, "ri"),
            change_of_state: phase == "ña",
            adversative: discourse == "taq",
            haste: is_prefix(manner, "rpa"),
            conjecture: discourse == "sina",
        }
    }
}
