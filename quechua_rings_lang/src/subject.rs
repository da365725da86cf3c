// Person suffix -> English subject, with the auxiliary forms that agree
// with it (possessive, "to be", "to go", "to like").

use serde::Serialize;

use crate::error::{LangError, LangResult};

/// Grammatical subject selected by the person slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Person {
    /// -ni
    First,
    /// -nki
    Second,
    /// -n
    Third,
    /// -yku: we, excluding the listener.
    FirstExclusive,
    /// -nchik: we, including the listener.
    FirstInclusive,
    /// -nkichik
    SecondPlural,
    /// -nku
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 7] = [
        Person::First,
        Person::Second,
        Person::Third,
        Person::FirstExclusive,
        Person::FirstInclusive,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// Resolve the person slot's suffix.
    pub fn from_suffix(suffix: &str) -> LangResult<Self> {
        let person = match suffix {
            "ni" => Person::First,
            "nki" => Person::Second,
            "n" => Person::Third,
            "yku" => Person::FirstExclusive,
            "nchik" => Person::FirstInclusive,
            "nkichik" => Person::SecondPlural,
            "nku" => Person::ThirdPlural,
            other => return Err(LangError::UnknownSubject(other.to_string())),
        };
        Ok(person)
    }

    /// The English subject as it appears in the sentence.
    pub fn pronoun(self) -> &'static str {
        match self {
            Person::First => "I",
            Person::Second => "you",
            Person::Third => "he/she",
            Person::FirstExclusive => "we (but not you)",
            Person::FirstInclusive => "we (including you)",
            Person::SecondPlural => "you all",
            Person::ThirdPlural => "they",
        }
    }

    /// Possessive determiner, with trailing space.
    pub fn possessive(self) -> &'static str {
        match self {
            Person::First => "my ",
            Person::Second | Person::SecondPlural => "your ",
            Person::FirstExclusive | Person::FirstInclusive => "our ",
            // Third singular shares "their" with the plural.
            Person::Third | Person::ThirdPlural => "their ",
        }
    }

    /// Present tense of "to be", with trailing space.
    pub fn copula(self) -> &'static str {
        match self {
            Person::First => "am ",
            Person::Third => "is ",
            _ => "are ",
        }
    }

    /// Present tense of "to go", with trailing space.
    pub fn motion_verb(self) -> &'static str {
        if self.is_third_singular() { "goes " } else { "go " }
    }

    /// "like(s) to ", for the desire frame.
    pub fn desire_verb(self) -> &'static str {
        if self.is_third_singular() {
            "likes to "
        } else {
            "like to "
        }
    }

    /// The only person that takes -s agreement.
    pub fn is_third_singular(self) -> bool {
        self == Person::Third
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suffixes::PERSON_SUFFIXES;

    #[test]
    fn test_every_person_suffix_resolves() {
        for (entry, person) in PERSON_SUFFIXES.iter().zip(Person::ALL) {
            assert_eq!(Person::from_suffix(entry.text).unwrap(), person);
        }
    }

    #[test]
    fn test_pronouns() {
        let pronouns: Vec<&str> = Person::ALL.iter().map(|p| p.pronoun()).collect();
        assert_eq!(
            pronouns,
            vec![
                "I",
                "you",
                "he/she",
                "we (but not you)",
                "we (including you)",
                "you all",
                "they"
            ]
        );
    }

    #[test]
    fn test_unknown_suffix_is_error() {
        assert!(matches!(
            Person::from_suffix(""),
            Err(LangError::UnknownSubject(s)) if s.is_empty()
        ));
        assert!(Person::from_suffix("nkis").is_err());
    }

    #[test]
    fn test_possessives() {
        assert_eq!(Person::First.possessive(), "my ");
        assert_eq!(Person::Second.possessive(), "your ");
        assert_eq!(Person::SecondPlural.possessive(), "your ");
        assert_eq!(Person::FirstExclusive.possessive(), "our ");
        assert_eq!(Person::FirstInclusive.possessive(), "our ");
        assert_eq!(Person::Third.possessive(), "their ");
        assert_eq!(Person::ThirdPlural.possessive(), "their ");
    }

    #[test]
    fn test_agreement_forms() {
        assert_eq!(Person::First.copula(), "am ");
        assert_eq!(Person::Third.copula(), "is ");
        assert_eq!(Person::ThirdPlural.copula(), "are ");
        assert_eq!(Person::Second.copula(), "are ");
        assert_eq!(Person::Third.motion_verb(), "goes ");
        assert_eq!(Person::First.motion_verb(), "go ");
        assert_eq!(Person::Third.desire_verb(), "likes to ");
        assert_eq!(Person::FirstInclusive.desire_verb(), "like to ");
    }
}
