// Verb phrase construction.
//
// Given an English verb, the subject, and a `Frame` of aspect/mood flags,
// produce the verb phrase that follows the pronoun, e.g.
//   "is cooking", "like to be playing", "are on our way to work",
//   "still goes to cook", "are about to weave".
//
// The adverb accumulated by the translator ("only ", "still ", "also ")
// lands in different places depending on the frame: before "like to" /
// "<be> about to" when a modal frame is open, otherwise right before the
// main verb (after the copula in progressive phrases). Once a modal frame
// has consumed it the adverb is cleared, and the copula and "to go" fall
// back to their bare infinitives ("be ", "go ").

use crate::error::{LangError, LangResult};
use crate::subject::Person;

/// Surface forms of one English base verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbForms {
    pub infinitive: &'static str,
    pub progressive: &'static str,
    pub third_person: &'static str,
}

/// Every verb the lexicon may produce.
pub const VERB_FORMS: &[VerbForms] = &[
    VerbForms {
        infinitive: "dance",
        progressive: "dancing",
        third_person: "dances",
    },
    VerbForms {
        infinitive: "play",
        progressive: "playing",
        third_person: "plays",
    },
    VerbForms {
        infinitive: "cook",
        progressive: "cooking",
        third_person: "cooks",
    },
    VerbForms {
        infinitive: "weave",
        progressive: "weaving",
        third_person: "weaves",
    },
    VerbForms {
        infinitive: "work",
        progressive: "working",
        third_person: "works",
    },
];

/// Look up a verb's surface forms by infinitive.
pub fn verb_forms(verb: &str) -> Option<&'static VerbForms> {
    VERB_FORMS.iter().find(|v| v.infinitive == verb)
}

/// Aspect and mood flags that shape the verb phrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    /// -chka: ongoing.
    pub progressive: bool,
    /// -mu: going somewhere to do it.
    pub movement: bool,
    /// -ri: "like to ...".
    pub desire: bool,
    /// Imminent "about to ..."; derived by the translator, never marked directly.
    pub about_to: bool,
}

impl Frame {
    /// A modal frame puts the main verb in the bare infinitive.
    pub fn is_infinitive(&self) -> bool {
        self.desire || self.about_to
    }
}

/// Build the verb phrase for `verb` with `person` as subject.
///
/// `adverb` is consumed (cleared) when a desire or about-to frame takes it.
/// Fails with `UnknownVerb` if the phrase needs an inflected form of a verb
/// missing from `VERB_FORMS`. Movement phrases keep the infinitive as-is
/// and never need the table.
pub fn conjugate(
    verb: &str,
    person: Person,
    frame: Frame,
    adverb: &mut String,
) -> LangResult<String> {
    let mut phrase = String::new();
    let mut copula = person.copula();
    let mut motion = person.motion_verb();

    if frame.desire {
        phrase.push_str(adverb);
        phrase.push_str(person.desire_verb());
    } else if frame.about_to {
        phrase.push_str(adverb);
        phrase.push_str(copula);
        phrase.push_str("about to ");
    }

    let infinitive = frame.is_infinitive();
    if infinitive {
        copula = "be ";
        motion = "go ";
        adverb.clear();
    }

    if frame.movement {
        if frame.progressive {
            phrase.push_str(copula);
            phrase.push_str(adverb);
            phrase.push_str("on ");
            phrase.push_str(person.possessive());
            phrase.push_str("way to ");
        } else {
            phrase.push_str(adverb);
            phrase.push_str(motion);
            phrase.push_str("to ");
        }
        phrase.push_str(verb);
        return Ok(phrase);
    }

    let forms = verb_forms(verb).ok_or_else(|| LangError::UnknownVerb(verb.to_string()))?;
    if frame.progressive {
        phrase.push_str(copula);
        phrase.push_str(adverb);
        phrase.push_str(forms.progressive);
    } else if infinitive || !person.is_third_singular() {
        phrase.push_str(adverb);
        phrase.push_str(forms.infinitive);
    } else {
        phrase.push_str(adverb);
        phrase.push_str(forms.third_person);
    }
    Ok(phrase)
}
