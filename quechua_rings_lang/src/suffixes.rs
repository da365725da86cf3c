// Suffix vocabularies for the six slots, plus the two string tests the
// feature extractor is built from.
//
// Vocabulary order is ring order: index 0 is the position closest to the
// ultrasonic sensor, and the absence marker (where allowed) is always last.
// `quechua_rings_calib::decoder` relies on this to turn a ring position
// into a suffix, and `generator.rs` samples uniformly over these tables.
//
// "ña" is stored precomposed (U+00F1). Older ring tables carried a
// mis-decoded UTF-8 form, which `canonicalize_suffix` repairs at ingestion.

use crate::types::Slot;

/// The absence marker for optional slots.
pub const ABSENT: &str = "";

/// One candidate suffix for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSuffix {
    /// Surface text appended to the root (`""` for absence).
    pub text: &'static str,
    /// Short English description of what the suffix contributes.
    pub label: &'static str,
}

const fn suffix(text: &'static str, label: &'static str) -> SlotSuffix {
    SlotSuffix { text, label }
}

/// Slot 0.
pub const MANNER_SUFFIXES: &[SlotSuffix] = &[
    suffix("ri", "fondness"),
    suffix("rpa", "haste"),
    suffix("rpari", "haste + fondness"),
    suffix(ABSENT, "none"),
];

/// Slot 1.
pub const DIRECTION_SUFFIXES: &[SlotSuffix] = &[
    suffix("ku", "alone"),
    suffix("mu", "going somewhere"),
    suffix("kamu", "alone + going somewhere"),
    suffix(ABSENT, "none"),
];

/// Slot 2.
pub const ASPECT_SUFFIXES: &[SlotSuffix] = &[
    suffix("chka", "progressive"),
    suffix("lla", "only"),
    suffix("chkalla", "progressive + only"),
    suffix(ABSENT, "none"),
];

/// Slot 3. No absence marker.
pub const PERSON_SUFFIXES: &[SlotSuffix] = &[
    suffix("ni", "I"),
    suffix("nki", "you"),
    suffix("n", "he/she"),
    suffix("yku", "we (exclusive)"),
    suffix("nchik", "we (inclusive)"),
    suffix("nkichik", "you all"),
    suffix("nku", "they"),
];

/// Slot 4.
pub const PHASE_SUFFIXES: &[SlotSuffix] = &[
    suffix("ña", "already"),
    suffix("raq", "still / first"),
    suffix(ABSENT, "none"),
];

/// Slot 5.
pub const DISCOURSE_SUFFIXES: &[SlotSuffix] = &[
    suffix("pis", "also"),
    suffix("taq", "but / again"),
    suffix("sina", "most likely"),
    suffix("puni", "of course"),
    suffix(ABSENT, "none"),
];

/// The candidate list for a slot, in ring order.
pub fn vocabulary(slot: Slot) -> &'static [SlotSuffix] {
    match slot {
        Slot::Manner => MANNER_SUFFIXES,
        Slot::Direction => DIRECTION_SUFFIXES,
        Slot::Aspect => ASPECT_SUFFIXES,
        Slot::Person => PERSON_SUFFIXES,
        Slot::Phase => PHASE_SUFFIXES,
        Slot::Discourse => DISCOURSE_SUFFIXES,
    }
}

/// Ring position of a suffix within its slot, if it belongs there.
pub fn position_of(slot: Slot, text: &str) -> Option<usize> {
    vocabulary(slot).iter().position(|s| s.text == text)
}

/// Repair the known mis-encodings of "ñ": the Latin-1 reading of its UTF-8
/// bytes ("Ã±") and the decomposed n + combining tilde.
pub fn canonicalize_suffix(raw: &str) -> String {
    raw.replace("Ã±", "ñ").replace("n\u{0303}", "ñ")
}

/// True iff `prefix` is a prefix of `s`. The empty string is a prefix of
/// everything.
pub fn is_prefix(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

/// True iff `s` ends with `tail`. A `tail` longer than `s` never matches,
/// so the absence marker fails every non-empty suffix test.
pub fn is_suffix(s: &str, tail: &str) -> bool {
    s.ends_with(tail)
}
