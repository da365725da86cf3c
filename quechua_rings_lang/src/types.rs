// Core types: suffix slots, lexical entries, and word forms.
//
// A word form is a verb root followed by exactly six suffix selections, one
// per `Slot`, in the fixed agglutination order
//   root + manner + direction + aspect + person + phase + discourse
// e.g. wayk'u + "" + ku + chka + n + "" + "" = "wayk'ukuchkan".
//
// Every slot except `Person` may be empty (the absence marker `""`). The
// vocabularies themselves live in `suffixes.rs`; this file owns the
// invariant that a `WordForm` only ever holds vocabulary members, enforced
// at construction by `WordForm::new`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LangError, LangResult};
use crate::suffixes::{canonicalize_suffix, vocabulary};

/// Number of suffix slots in a word form.
pub const SLOT_COUNT: usize = 6;

/// One of the six ordered suffix positions (one physical ring each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Slot 0: -ri (fondness), -rpa (haste), -rpari (both).
    Manner,
    /// Slot 1: -ku (alone), -mu (going somewhere), -kamu (both).
    Direction,
    /// Slot 2: -chka (progressive), -lla (limitative), -chkalla (both).
    Aspect,
    /// Slot 3: person/number. Never empty.
    Person,
    /// Slot 4: -ña (change of state), -raq (persistive).
    Phase,
    /// Slot 5: -pis, -taq, -sina, -puni.
    Discourse,
}

impl Slot {
    /// All slots in agglutination order.
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::Manner,
        Slot::Direction,
        Slot::Aspect,
        Slot::Person,
        Slot::Phase,
        Slot::Discourse,
    ];

    /// Position of this slot in the suffix stack (0..6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the slot admits the absence marker.
    pub fn allows_absence(self) -> bool {
        self != Slot::Person
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Manner => "manner",
            Slot::Direction => "direction",
            Slot::Aspect => "aspect",
            Slot::Person => "person",
            Slot::Phase => "phase",
            Slot::Discourse => "discourse",
        };
        f.write_str(name)
    }
}

/// A JSON-loadable lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexEntry {
    /// The bare root that suffixes attach to (e.g. "wayk'u").
    pub root: String,
    /// English infinitive without "to" (e.g. "cook").
    pub gloss: String,
    /// Dictionary citation form with the -y infinitive (e.g. "wayk'uy").
    #[serde(default)]
    pub dictionary_form: Option<String>,
}

/// A root plus one vocabulary member per slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordForm {
    root: String,
    suffixes: [String; SLOT_COUNT],
}

impl WordForm {
    /// Build a word form, canonicalizing each suffix and rejecting any that
    /// is not in its slot's vocabulary.
    ///
    /// The root is not checked here; an unknown root surfaces as
    /// `LangError::UnknownRoot` at translation time.
    pub fn new<S: AsRef<str>>(root: &str, suffixes: [S; SLOT_COUNT]) -> LangResult<Self> {
        Self::from_slice(root, &suffixes)
    }

    /// Like `new`, but from a slice whose length is checked against `SLOT_COUNT`.
    pub fn from_slice<S: AsRef<str>>(root: &str, suffixes: &[S]) -> LangResult<Self> {
        if suffixes.len() != SLOT_COUNT {
            return Err(LangError::WrongSlotCount(suffixes.len()));
        }
        let mut canonical: [String; SLOT_COUNT] = Default::default();
        for (slot, (raw, out)) in Slot::ALL.iter().zip(suffixes.iter().zip(canonical.iter_mut())) {
            let value = canonicalize_suffix(raw.as_ref());
            if !vocabulary(*slot).iter().any(|s| s.text == value) {
                return Err(LangError::InvalidSlotValue { slot: *slot, value });
            }
            *out = value;
        }
        Ok(WordForm {
            root: root.to_string(),
            suffixes: canonical,
        })
    }

    /// Construct from suffixes already known to be canonical vocabulary members.
    pub(crate) fn from_vocabulary(root: &str, suffixes: [&'static str; SLOT_COUNT]) -> Self {
        WordForm {
            root: root.to_string(),
            suffixes: suffixes.map(str::to_string),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// The selection in a given slot (`""` when absent).
    pub fn suffix(&self, slot: Slot) -> &str {
        &self.suffixes[slot.index()]
    }

    pub fn suffixes(&self) -> &[String; SLOT_COUNT] {
        &self.suffixes
    }

    /// The agglutinated Quechua word, e.g. "wayk'ukuchkan".
    pub fn surface(&self) -> String {
        let mut word = self.root.clone();
        for s in &self.suffixes {
            word.push_str(s);
        }
        word
    }
}

impl fmt::Display for WordForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.surface())
    }
}
