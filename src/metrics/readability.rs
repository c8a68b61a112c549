//! Readability, sentence rhythm and the raw counts behind [`ReadingStats`].
//!
//! Syllables, adverbs and passive voice are regex heuristics rather than
//! linguistic analysis. Irregular words miscount syllables, any `-ly` word
//! counts as an adverb ("family", "rely") and "was excited" counts as passive.
//! Downstream thresholds are tuned to exactly these heuristics.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::metrics::text::{self, round1};

const WORDS_PER_MINUTE: f64 = 200.0;

static SILENT_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());
static LEADING_Y_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^y").unwrap());
static VOWEL_CLUSTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());
static ADVERB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b\w+ly\b").unwrap());
static PASSIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:am|are|is|was|were|be|been|being) \w+ed\b").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingStats {
    pub fk_grade: f64,
    pub std_dev: f64,
    pub pacing_score: f64,
    pub word_count: usize,
    pub sentence_count: usize,
    pub adverb_count: usize,
    pub passive_count: usize,
    pub read_time_minutes: usize,
}

/// Estimate the syllables in one word from its vowel clusters.
///
/// Always at least 1 for a non-empty word.
pub fn count_syllables(word: &str) -> usize {
    let word = text::normalize_word(word);
    if word.chars().count() <= 3 {
        return 1;
    }
    let trimmed = SILENT_SUFFIX_RE.replace(&word, "");
    let trimmed = LEADING_Y_RE.replace(&trimmed, "");
    VOWEL_CLUSTER_RE.find_iter(&trimmed).count().max(1)
}

/// Flesch-Kincaid grade, floored at zero. Empty text grades 0.
pub fn readability_grade(text: &str) -> f64 {
    let words = text::words(text);
    if words.is_empty() {
        return 0.0;
    }
    let sentences = text::sentences(text).len().max(1);
    let syllables: usize = words.iter().map(|word| count_syllables(word)).sum();
    flesch_kincaid(words.len(), sentences, syllables)
}

fn flesch_kincaid(words: usize, sentences: usize, syllables: usize) -> f64 {
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;
    grade.max(0.0)
}

/// Population standard deviation of per-sentence word counts.
pub fn sentence_length_std_dev(text: &str) -> f64 {
    let lengths: Vec<f64> = text::sentences(text)
        .iter()
        .map(|sentence| text::word_count(sentence) as f64)
        .collect();
    if lengths.is_empty() {
        return 0.0;
    }
    let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
    let variance =
        lengths.iter().map(|len| (len - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
    variance.sqrt()
}

/// Words per paragraph; text without paragraphs counts as one.
pub fn pacing_score(text: &str) -> f64 {
    let paragraphs = text::paragraphs(text).len().max(1);
    text::word_count(text) as f64 / paragraphs as f64
}

pub fn adverbs(text: &str) -> Vec<&str> {
    ADVERB_RE.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn adverb_count(text: &str) -> usize {
    ADVERB_RE.find_iter(text).count()
}

pub fn passive_count(text: &str) -> usize {
    PASSIVE_RE.find_iter(text).count()
}

pub fn calculate_reading_stats(text: &str) -> Option<ReadingStats> {
    let words = text::words(text);
    if words.is_empty() {
        return None;
    }
    let word_count = words.len();
    let sentence_count = text::sentences(text).len();
    let syllables: usize = words.iter().map(|word| count_syllables(word)).sum();
    let fk_grade = flesch_kincaid(word_count, sentence_count.max(1), syllables);

    Some(ReadingStats {
        fk_grade: round1(fk_grade),
        std_dev: round1(sentence_length_std_dev(text)),
        pacing_score: round1(pacing_score(text)),
        word_count,
        sentence_count,
        adverb_count: adverb_count(text),
        passive_count: passive_count(text),
        read_time_minutes: (word_count as f64 / WORDS_PER_MINUTE).ceil() as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_one_syllable() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("a"), 1);
    }

    #[test]
    fn syllables_follow_vowel_clusters() {
        assert_eq!(count_syllables("reading"), 2);
        assert_eq!(count_syllables("another"), 3);
        assert_eq!(count_syllables("makes"), 1);
        assert_eq!(count_syllables("rhythm"), 1);
    }

    #[test]
    fn simple_sentence_stats() {
        let stats = calculate_reading_stats("The cat sat.").unwrap();
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.read_time_minutes, 1);
        assert!(stats.fk_grade >= 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn empty_text_has_no_stats() {
        assert!(calculate_reading_stats("").is_none());
        assert!(calculate_reading_stats("   \n ").is_none());
        assert_eq!(readability_grade(""), 0.0);
    }

    #[test]
    fn std_dev_is_population_deviation() {
        // sentence lengths 2 and 4 -> mean 3, deviation 1
        assert!((sentence_length_std_dev("One two. One two three four.") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pacing_divides_by_paragraphs() {
        assert_eq!(pacing_score("a b c d\n\ne f"), 3.0);
        assert_eq!(pacing_score(""), 0.0);
    }

    #[test]
    fn heuristics_match_their_patterns() {
        assert_eq!(adverb_count("She ran quickly and quietly with her family."), 3);
        assert_eq!(passive_count("The door was opened. It is closed. He is tall."), 2);
    }
}
