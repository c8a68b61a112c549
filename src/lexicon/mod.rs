//! Read-only word tables shared by every metric.
//!
//! A [`Lexicon`] is built once and never mutated afterwards, so a single
//! `Arc<Lexicon>` can be handed to the caller and to the background worker
//! without any locking.

pub mod tables;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::genre::{standard_profiles, Genre, GenreProfile};

static SHARED: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::standard()));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sense {
    Sight,
    Sound,
    Touch,
    Smell,
    Taste,
}

impl Sense {
    pub const ALL: [Sense; 5] = [Sense::Sight, Sense::Sound, Sense::Touch, Sense::Smell, Sense::Taste];

    pub fn label(self) -> &'static str {
        match self {
            Sense::Sight => "sight",
            Sense::Sound => "sound",
            Sense::Touch => "touch",
            Sense::Smell => "smell",
            Sense::Taste => "taste",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub fn label(self) -> &'static str {
        match self {
            Person::First => "first person",
            Person::Second => "second person",
            Person::Third => "third person",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    synonyms: HashMap<&'static str, &'static [&'static str]>,
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    glue: HashSet<&'static str>,
    weasel: Vec<&'static str>,
    cliches: Vec<&'static str>,
    senses: Vec<(Sense, HashSet<&'static str>)>,
    pronouns: HashMap<&'static str, Person>,
    dialogue_tag_re: Regex,
    repeatable: HashSet<&'static str>,
    spelling_variants: Vec<(&'static str, &'static str)>,
    genres: [GenreProfile; 6],
}

impl Lexicon {
    pub fn standard() -> Self {
        let mut pronouns = HashMap::new();
        for (words, person) in [
            (tables::FIRST_PERSON, Person::First),
            (tables::SECOND_PERSON, Person::Second),
            (tables::THIRD_PERSON, Person::Third),
        ] {
            for word in words {
                pronouns.insert(*word, person);
            }
        }

        let senses = vec![
            (Sense::Sight, tables::SIGHT_WORDS.iter().copied().collect()),
            (Sense::Sound, tables::SOUND_WORDS.iter().copied().collect()),
            (Sense::Touch, tables::TOUCH_WORDS.iter().copied().collect()),
            (Sense::Smell, tables::SMELL_WORDS.iter().copied().collect()),
            (Sense::Taste, tables::TASTE_WORDS.iter().copied().collect()),
        ];

        Self {
            synonyms: tables::SYNONYMS.iter().copied().collect(),
            positive: tables::POSITIVE_WORDS.iter().copied().collect(),
            negative: tables::NEGATIVE_WORDS.iter().copied().collect(),
            glue: tables::GLUE_WORDS.iter().copied().collect(),
            weasel: tables::WEASEL_WORDS.to_vec(),
            cliches: tables::CLICHES.to_vec(),
            senses,
            pronouns,
            dialogue_tag_re: dialogue_tag_pattern(tables::DIALOGUE_TAGS),
            repeatable: tables::REPEATABLE_WORDS.iter().copied().collect(),
            spelling_variants: tables::SPELLING_VARIANTS.to_vec(),
            genres: standard_profiles(),
        }
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&SHARED)
    }

    pub fn synonyms(&self, word: &str) -> Option<&'static [&'static str]> {
        self.synonyms.get(word).copied()
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_glue(&self, word: &str) -> bool {
        self.glue.contains(word)
    }

    pub fn weasel_words(&self) -> &[&'static str] {
        &self.weasel
    }

    pub fn cliches(&self) -> &[&'static str] {
        &self.cliches
    }

    pub fn sense_of(&self, word: &str) -> Option<Sense> {
        self.senses
            .iter()
            .find(|(_, words)| words.contains(word))
            .map(|(sense, _)| *sense)
    }

    pub fn person_of(&self, word: &str) -> Option<Person> {
        self.pronouns.get(word).copied()
    }

    /// Matches a closing quote glued to a word and followed by a dialogue tag,
    /// as in `"Stop" she said`.
    pub fn missing_tag_comma_pattern(&self) -> &Regex {
        &self.dialogue_tag_re
    }

    pub fn is_repeatable(&self, word: &str) -> bool {
        self.repeatable.contains(word)
    }

    pub fn spelling_variants(&self) -> &[(&'static str, &'static str)] {
        &self.spelling_variants
    }

    pub fn genre_profile(&self, genre: Genre) -> &GenreProfile {
        &self.genres[genre.index()]
    }

    pub fn genre_profiles(&self) -> &[GenreProfile] {
        &self.genres
    }
}

fn dialogue_tag_pattern(tags: &[&str]) -> Regex {
    let alternation = tags.join("|");
    Regex::new(&format!(
        r#"(?i)\w["\u{{201D}}]\s+(?:\w+\s+)?(?:{alternation})\b"#
    ))
    .unwrap()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_sets_are_disjoint() {
        let lexicon = Lexicon::standard();
        for word in tables::POSITIVE_WORDS {
            assert!(!lexicon.is_negative(word), "{word} is in both sets");
        }
    }

    #[test]
    fn every_genre_has_a_profile() {
        let lexicon = Lexicon::standard();
        for genre in Genre::ALL {
            assert_eq!(lexicon.genre_profile(genre).name, genre);
        }
    }

    #[test]
    fn synonym_keys_are_lowercase_single_words() {
        for (word, synonyms) in tables::SYNONYMS {
            assert_eq!(*word, word.to_lowercase());
            assert!(!word.contains(' '));
            assert!(!synonyms.is_empty());
        }
    }

    #[test]
    fn tag_pattern_requires_a_missing_comma() {
        let lexicon = Lexicon::standard();
        let pattern = lexicon.missing_tag_comma_pattern();
        assert!(pattern.is_match("\"Stop\" she said."));
        assert!(pattern.is_match("\"Stop\" Marcus whispered."));
        assert!(!pattern.is_match("\"Stop,\" she said."));
        assert!(!pattern.is_match("\"Stop!\" she said."));
    }

    #[test]
    fn pronouns_map_to_person() {
        let lexicon = Lexicon::standard();
        assert_eq!(lexicon.person_of("i"), Some(Person::First));
        assert_eq!(lexicon.person_of("you"), Some(Person::Second));
        assert_eq!(lexicon.person_of("she"), Some(Person::Third));
        assert_eq!(lexicon.person_of("tree"), None);
    }
}
