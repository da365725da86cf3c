// Word form -> English sentence.
//
// Pipeline, one stage per function so each can be tested on its own:
//   1. resolve the verb (lexicon) and subject (person slot), extract flags
//   2. reject disallowed combinations (`validity::check`), short-circuiting
//      to `Translation::Invalid`
//   3. `Opening::select`: at most one leading discourse marker
//   4. `Mood::accumulate`: adverb text, exclamation, and the about-to frame
//   5. pronoun + `conjugate::conjugate`
//   6. `trailing`: quickly / alone / first / again / instead
//   7. "!" or ".", then upper-case the first ASCII letter
//
// Translation is a pure function of (lexicon, word form). Nothing here is
// cached between calls, so one `Lexicon` can be shared across threads.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::Lexicon;
use crate::conjugate::{Frame, conjugate};
use crate::error::LangResult;
use crate::features::FeatureSet;
use crate::subject::Person;
use crate::types::{Slot, WordForm};
use crate::validity::{self, Disallowed};

/// Exact output for a disallowed combination.
pub const INVALID_INPUT: &str = "Invalid input";

/// Result of translating one word form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Translation {
    /// A rendered, capitalized, punctuated sentence.
    Sentence(String),
    /// The suffix stack hit a combination with no rendering.
    Invalid(Disallowed),
}

impl Translation {
    /// The sentence, or "Invalid input".
    pub fn as_str(&self) -> &str {
        match self {
            Translation::Sentence(s) => s,
            Translation::Invalid(_) => INVALID_INPUT,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Translation::Sentence(_))
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leading discourse marker chosen from the discourse and aspect slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opening {
    /// -puni without -lla.
    OfCourse,
    /// -sina.
    MostLikely,
    /// -taq without -lla.
    But,
    /// -pis without -lla. Not a leading marker: becomes the adverb "also".
    Also,
    /// -pis with -lla.
    Nonetheless,
}

impl Opening {
    /// First matching marker, in priority order.
    pub fn select(f: &FeatureSet) -> Option<Opening> {
        if f.exclusive && !f.limitative {
            Some(Opening::OfCourse)
        } else if f.conjecture {
            Some(Opening::MostLikely)
        } else if f.adversative && !f.limitative {
            Some(Opening::But)
        } else if f.also && !f.limitative {
            Some(Opening::Also)
        } else if f.also && f.limitative {
            Some(Opening::Nonetheless)
        } else {
            None
        }
    }

    /// Text placed before the pronoun (empty for `Also`).
    pub fn prefix(self) -> &'static str {
        match self {
            Opening::OfCourse => "of course ",
            Opening::MostLikely => "most likely, ",
            Opening::But => "but ",
            Opening::Also => "",
            Opening::Nonetheless => "nonetheless ",
        }
    }

    /// Adverb seeded into the verb phrase.
    pub fn adverb(self) -> &'static str {
        match self {
            Opening::Also => "also ",
            _ => "",
        }
    }
}

/// Adverb text and mood derived from the phase/aspect/discourse flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mood {
    /// Adverbs placed inside the verb phrase, each with a trailing space.
    pub adverb: String,
    /// Ends the sentence with "!" instead of ".".
    pub upset: bool,
    /// Renders the verb as "<be> about to ...".
    pub about_to: bool,
}

impl Mood {
    /// Apply the three accumulation rules, in order, on top of `adverb`.
    pub fn accumulate(f: &FeatureSet, adverb: &str) -> Mood {
        let mut mood = Mood {
            adverb: adverb.to_string(),
            ..Default::default()
        };

        if f.change_of_state && !f.adversative && !f.limitative {
            mood.adverb.push_str("still ");
            mood.upset = true;
        }
        if f.limitative && !f.change_of_state {
            mood.adverb
                .push_str(if f.persistive { "still " } else { "only " });
            if f.exclusive {
                mood.about_to = true;
            }
        }
        if f.change_of_state && f.adversative {
            mood.upset = f.limitative;
            mood.about_to = true;
        }
        mood
    }
}

/// Adverbials appended after the verb phrase, each with a leading space.
pub fn trailing(f: &FeatureSet) -> String {
    let mut out = String::new();
    if f.haste {
        out.push_str(" quickly");
    }
    if f.additive {
        out.push_str(" alone");
    }
    if f.persistive && !f.limitative {
        out.push_str(" first");
    }
    if (f.limitative || f.change_of_state) && f.adversative {
        out.push_str(" again");
    }
    if f.limitative && f.change_of_state {
        out.push_str(" instead");
    }
    out
}

/// Upper-case the first character if it is an ASCII lowercase letter.
pub fn capitalize_first(sentence: &mut String) {
    if let Some(first) = sentence.get_mut(..1) {
        first.make_ascii_uppercase();
    }
}

/// Translate a word form with the given lexicon.
///
/// Faults (unknown root, verb without conjugation forms) are errors. A
/// disallowed combination is a successful `Translation::Invalid`.
pub fn translate(lexicon: &Lexicon, form: &WordForm) -> LangResult<Translation> {
    let verb = lexicon.resolve_verb(form.root())?;
    let person = Person::from_suffix(form.suffix(Slot::Person))?;
    let features = FeatureSet::extract(form);
    debug!(word = %form, ?features, "extracted features");

    if let Some(rule) = validity::check(&features) {
        debug!(word = %form, %rule, "disallowed combination");
        return Ok(Translation::Invalid(rule));
    }

    let opening = Opening::select(&features);
    let mut mood = Mood::accumulate(&features, opening.map_or("", Opening::adverb));

    let frame = Frame {
        progressive: features.progressive,
        movement: features.movement,
        desire: features.desire,
        about_to: mood.about_to,
    };

    let mut sentence = String::from(opening.map_or("", Opening::prefix));
    sentence.push_str(person.pronoun());
    sentence.push(' ');
    sentence.push_str(&conjugate(verb, person, frame, &mut mood.adverb)?);
    sentence.push_str(&trailing(&features));
    sentence.push(if mood.upset { '!' } else { '.' });
    capitalize_first(&mut sentence);

    Ok(Translation::Sentence(sentence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_lexicon;

    fn render(root: &str, suffixes: [&str; 6]) -> String {
        let form = WordForm::new(root, suffixes).unwrap();
        translate(&default_lexicon(), &form).unwrap().to_string()
    }

    #[test]
    fn test_progressive_alone() {
        assert_eq!(
            render("wayk'u", ["", "ku", "chka", "n", "", ""]),
            "He/she is cooking alone."
        );
    }

    #[test]
    fn test_desire_progressive() {
        assert_eq!(
            render("puklla", ["ri", "", "chka", "ni", "", ""]),
            "I like to be playing."
        );
    }

    #[test]
    fn test_limitative_exclusive_desire_is_invalid() {
        assert_eq!(
            render("t'usu", ["ri", "", "chkalla", "ni", "", "puni"]),
            INVALID_INPUT
        );
    }

    #[test]
    fn test_limitative_change_of_state_instead() {
        assert_eq!(
            render("awa", ["", "", "lla", "nku", "ña", ""]),
            "They weave instead."
        );
    }

    #[test]
    fn test_bare_forms() {
        assert_eq!(render("t'usu", ["", "", "", "ni", "", ""]), "I dance.");
        assert_eq!(render("t'usu", ["", "", "", "n", "", ""]), "He/she dances.");
        assert_eq!(
            render("llamk'a", ["", "", "", "yku", "", ""]),
            "We (but not you) work."
        );
        assert_eq!(render("puklla", ["", "", "", "nkichik", "", ""]), "You all play.");
    }

    #[test]
    fn test_movement_quickly() {
        assert_eq!(
            render("t'usu", ["rpa", "mu", "", "ni", "", ""]),
            "I go to dance quickly."
        );
    }

    #[test]
    fn test_kamu_progressive() {
        assert_eq!(
            render("llamk'a", ["", "kamu", "chka", "nchik", "", ""]),
            "We (including you) are on our way to work alone."
        );
    }

    #[test]
    fn test_rpari_desire_and_quickly() {
        assert_eq!(
            render("t'usu", ["rpari", "", "", "n", "", ""]),
            "He/she likes to dance quickly."
        );
    }

    #[test]
    fn test_openings() {
        assert_eq!(render("awa", ["", "", "", "nki", "", "puni"]), "Of course you weave.");
        assert_eq!(
            render("t'usu", ["", "", "", "n", "", "sina"]),
            "Most likely, he/she dances."
        );
        assert_eq!(render("puklla", ["", "", "", "n", "", "taq"]), "But he/she plays.");
        assert_eq!(render("puklla", ["", "", "", "n", "", "pis"]), "He/she also plays.");
        assert_eq!(
            render("wayk'u", ["", "", "lla", "ni", "", "pis"]),
            "Nonetheless I only cook."
        );
    }

    #[test]
    fn test_change_of_state_is_upset() {
        assert_eq!(render("awa", ["", "", "", "nku", "ña", ""]), "They still weave!");
        assert_eq!(
            render("wayk'u", ["", "", "chka", "n", "ña", ""]),
            "He/she is still cooking!"
        );
        assert_eq!(
            render("wayk'u", ["", "mu", "", "n", "ña", ""]),
            "He/she still goes to cook!"
        );
    }

    #[test]
    fn test_persistive() {
        assert_eq!(render("t'usu", ["", "", "", "ni", "raq", ""]), "I dance first.");
        assert_eq!(render("t'usu", ["", "", "lla", "ni", "raq", ""]), "I still dance.");
    }

    #[test]
    fn test_limitative_exclusive_is_about_to() {
        assert_eq!(
            render("wayk'u", ["", "", "lla", "ni", "", "puni"]),
            "I only am about to cook."
        );
    }

    #[test]
    fn test_change_of_state_adversative() {
        assert_eq!(
            render("awa", ["", "", "", "nku", "ña", "taq"]),
            "But they are about to weave again."
        );
    }

    #[test]
    fn test_limitative_adversative_again() {
        assert_eq!(render("t'usu", ["", "", "lla", "ni", "", "taq"]), "I only dance again.");
    }

    #[test]
    fn test_desire_with_also() {
        assert_eq!(render("t'usu", ["ri", "", "", "ni", "", "pis"]), "I also like to dance.");
    }

    #[test]
    fn test_desire_movement_progressive() {
        assert_eq!(
            render("t'usu", ["ri", "mu", "chka", "ni", "", ""]),
            "I like to be on my way to dance."
        );
    }

    #[test]
    fn test_each_disallowed_rule() {
        let cases = [
            (["ri", "", "lla", "ni", "", "puni"], Disallowed::ImminentDesire),
            (["ri", "", "", "ni", "ña", ""], Disallowed::CompletedDesire),
            (["", "", "lla", "ni", "ña", "taq"], Disallowed::LimitedContrastiveChange),
            (["", "", "lla", "ni", "raq", "taq"], Disallowed::LimitedContrastivePersistence),
        ];
        let lexicon = default_lexicon();
        for (suffixes, rule) in cases {
            let form = WordForm::new("awa", suffixes).unwrap();
            assert_eq!(
                translate(&lexicon, &form).unwrap(),
                Translation::Invalid(rule),
                "{suffixes:?}"
            );
        }
    }

    #[test]
    fn test_unknown_root_is_error() {
        let form = WordForm::new("taki", ["", "", "", "ni", "", ""]).unwrap();
        let err = translate(&default_lexicon(), &form).unwrap_err();
        assert!(matches!(err, crate::LangError::UnknownRoot(r) if r == "taki"));
    }

    #[test]
    fn test_unknown_verb_is_error() {
        let lexicon =
            Lexicon::from_json(r#"{"roots": [{"root": "taki", "gloss": "sing"}]}"#).unwrap();
        let form = WordForm::new("taki", ["", "", "", "ni", "", ""]).unwrap();
        let err = translate(&lexicon, &form).unwrap_err();
        assert!(matches!(err, crate::LangError::UnknownVerb(v) if v == "sing"));
    }

    #[test]
    fn test_opening_priority() {
        let f = FeatureSet {
            exclusive: true,
            ..Default::default()
        };
        assert_eq!(Opening::select(&f), Some(Opening::OfCourse));
        let f = FeatureSet {
            exclusive: true,
            limitative: true,
            ..Default::default()
        };
        assert_eq!(Opening::select(&f), None);
        let f = FeatureSet {
            adversative: true,
            limitative: true,
            ..Default::default()
        };
        assert_eq!(Opening::select(&f), None);
    }

    #[test]
    fn test_mood_rules() {
        let m = Mood::accumulate(
            &FeatureSet {
                change_of_state: true,
                ..Default::default()
            },
            "",
        );
        assert_eq!(m.adverb, "still ");
        assert!(m.upset);
        assert!(!m.about_to);

        let m = Mood::accumulate(
            &FeatureSet {
                limitative: true,
                exclusive: true,
                ..Default::default()
            },
            "",
        );
        assert_eq!(m.adverb, "only ");
        assert!(m.about_to);

        let m = Mood::accumulate(
            &FeatureSet {
                change_of_state: true,
                adversative: true,
                ..Default::default()
            },
            "",
        );
        assert_eq!(m.adverb, "");
        assert!(!m.upset);
        assert!(m.about_to);

        let m = Mood::accumulate(
            &FeatureSet {
                limitative: true,
                change_of_state: true,
                ..Default::default()
            },
            "",
        );
        assert_eq!(m, Mood::default());
    }

    #[test]
    fn test_trailing_order() {
        let f = FeatureSet {
            haste: true,
            additive: true,
            persistive: true,
            ..Default::default()
        };
        assert_eq!(trailing(&f), " quickly alone first");
        let f = FeatureSet {
            limitative: true,
            change_of_state: true,
            adversative: true,
            ..Default::default()
        };
        assert_eq!(trailing(&f), " again instead");
    }

    #[test]
    fn test_capitalize_first() {
        let mut s = "he/she dances.".to_string();
        capitalize_first(&mut s);
        assert_eq!(s, "He/she dances.");
        let mut s = "I dance.".to_string();
        capitalize_first(&mut s);
        assert_eq!(s, "I dance.");
        let mut s = String::new();
        capitalize_first(&mut s);
        assert_eq!(s, "");
        let mut s = "ña".to_string();
        capitalize_first(&mut s);
        assert_eq!(s, "ña");
    }

    #[test]
    fn test_translation_display() {
        assert_eq!(Translation::Invalid(Disallowed::CompletedDesire).as_str(), INVALID_INPUT);
        assert!(!Translation::Invalid(Disallowed::CompletedDesire).is_valid());
        assert_eq!(Translation::Sentence("I dance.".into()).to_string(), "I dance.");
    }
}
