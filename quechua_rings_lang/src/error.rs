// Error type for the translation engine.
//
// Only faults live here: bad input vectors and lexicon/conjugation-table
// mismatches. A disallowed suffix combination is NOT an error; it is a
// normal outcome carried by `Translation::Invalid` (see `translate.rs`).

use crate::types::Slot;

/// Faults raised while ingesting or translating a word form.
#[derive(Debug, thiserror::Error)]
pub enum LangError {
    /// The root is not in the loaded lexicon.
    #[error("unknown root '{0}'")]
    UnknownRoot(String),

    /// The lexicon produced a verb the conjugation table has no forms for.
    #[error("no conjugation forms for verb '{0}'")]
    UnknownVerb(String),

    /// A slot value is outside that slot's vocabulary.
    #[error("'{value}' is not a valid {slot} suffix")]
    InvalidSlotValue { slot: Slot, value: String },

    /// A suffix vector did not have one entry per slot.
    #[error("expected 6 suffix slots, got {0}")]
    WrongSlotCount(usize),

    /// The person slot held something that maps to no pronoun. Unreachable
    /// for word forms built through `WordForm::new`.
    #[error("no subject for person suffix '{0}'")]
    UnknownSubject(String),

    /// The lexicon JSON could not be parsed.
    #[error("malformed lexicon: {0}")]
    Lexicon(#[from] serde_json::Error),
}

pub type LangResult<T> = Result<T, LangError>;
