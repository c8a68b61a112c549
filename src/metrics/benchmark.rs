//! Benchmark prose against a genre's target ranges.

use serde::{Deserialize, Serialize};

use crate::genre::{GenreProfile, Range};
use crate::metrics::readability::{adverb_count, passive_count, readability_grade};
use crate::metrics::text::{self, round1};

const MIN_WORDS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkStatus {
    Good,
    Low,
    High,
}

impl BenchmarkStatus {
    pub fn label(self) -> &'static str {
        match self {
            BenchmarkStatus::Good => "good",
            BenchmarkStatus::Low => "low",
            BenchmarkStatus::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenchmarkMetric {
    SentenceLength,
    AdverbDensity,
    PassiveVoice,
    DialogueRatio,
    ReadingGrade,
}

impl BenchmarkMetric {
    pub fn label(self) -> &'static str {
        match self {
            BenchmarkMetric::SentenceLength => "Avg. Sentence Length",
            BenchmarkMetric::AdverbDensity => "Adverbs per 1000 Words",
            BenchmarkMetric::PassiveVoice => "Passive Voice %",
            BenchmarkMetric::DialogueRatio => "Dialogue %",
            BenchmarkMetric::ReadingGrade => "Reading Grade",
        }
    }

    fn advice(self, status: BenchmarkStatus) -> &'static str {
        use BenchmarkMetric::*;
        use BenchmarkStatus::*;

        match (self, status) {
            (SentenceLength, Low) => "Sentences run short for this genre; combine a few to vary the rhythm.",
            (SentenceLength, High) => "Sentences run long for this genre; shorten or split them to keep momentum.",
            (AdverbDensity, Low) => "Adverb use is sparse.",
            (AdverbDensity, High) => "Too many adverbs; reach for stronger verbs instead.",
            (PassiveVoice, Low) => "Passive voice is rare.",
            (PassiveVoice, High) => "Passive voice is above the genre norm; make the actors do the acting.",
            (DialogueRatio, Low) => "Dialogue is light for this genre; let characters speak more.",
            (DialogueRatio, High) => "Dialogue dominates; ground scenes with action and description.",
            (ReadingGrade, Low) => "Prose reads simpler than the genre norm; consider richer vocabulary.",
            (ReadingGrade, High) => "Prose reads denser than the genre norm; simplify word choice.",
            (_, Good) => "Right on target for the genre.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub metric: BenchmarkMetric,
    pub label: String,
    pub your_value: f64,
    pub target_range: Range,
    pub status: BenchmarkStatus,
    pub advice: String,
}

impl BenchmarkResult {
    fn evaluate(metric: BenchmarkMetric, value: f64, target: Range) -> Self {
        let status = if target.contains(value) {
            BenchmarkStatus::Good
        } else if value < target.min {
            BenchmarkStatus::Low
        } else {
            BenchmarkStatus::High
        };
        Self {
            metric,
            label: metric.label().to_string(),
            your_value: round1(value),
            target_range: target,
            status,
            advice: metric.advice(status).to_string(),
        }
    }
}

/// Percentage of characters that sit inside double-quoted spans.
pub fn dialogue_char_percent(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let quoted: usize = text::quoted_spans(text).map(|span| span.chars().count()).sum();
    quoted as f64 / total as f64 * 100.0
}

/// Five results in fixed order, or none below 100 words.
pub fn benchmark_genre(text: &str, profile: &GenreProfile) -> Vec<BenchmarkResult> {
    let word_count = text::word_count(text);
    if word_count < MIN_WORDS {
        return Vec::new();
    }
    let sentence_count = text::sentences(text).len().max(1);
    let words = word_count as f64;

    let avg_sentence_length = words / sentence_count as f64;
    let adverbs_per_1000 = adverb_count(text) as f64 / words * 1000.0;
    let passive_percent = passive_count(text) as f64 / sentence_count as f64 * 100.0;

    vec![
        BenchmarkResult::evaluate(
            BenchmarkMetric::SentenceLength,
            avg_sentence_length,
            profile.ideal_sentence_length_range,
        ),
        BenchmarkResult::evaluate(
            BenchmarkMetric::AdverbDensity,
            adverbs_per_1000,
            Range::new(0.0, profile.max_adverbs_per_1000_words),
        ),
        BenchmarkResult::evaluate(
            BenchmarkMetric::PassiveVoice,
            passive_percent,
            Range::new(0.0, profile.max_passive_voice_percent),
        ),
        BenchmarkResult::evaluate(
            BenchmarkMetric::DialogueRatio,
            dialogue_char_percent(text),
            profile.ideal_dialogue_percent_range,
        ),
        BenchmarkResult::evaluate(
            BenchmarkMetric::ReadingGrade,
            readability_grade(text),
            profile.ideal_reading_grade_range,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::Genre;
    use crate::lexicon::Lexicon;

    #[test]
    fn short_text_is_not_benchmarked() {
        let lexicon = Lexicon::standard();
        let text = "word ".repeat(99);
        assert!(benchmark_genre(&text, lexicon.genre_profile(Genre::Fantasy)).is_empty());
    }

    #[test]
    fn emits_five_metrics_in_order() {
        let lexicon = Lexicon::standard();
        let text = "The knight rode north. ".repeat(30);
        let results = benchmark_genre(&text, lexicon.genre_profile(Genre::Fantasy));
        let metrics: Vec<_> = results.iter().map(|r| r.metric).collect();
        assert_eq!(
            metrics,
            vec![
                BenchmarkMetric::SentenceLength,
                BenchmarkMetric::AdverbDensity,
                BenchmarkMetric::PassiveVoice,
                BenchmarkMetric::DialogueRatio,
                BenchmarkMetric::ReadingGrade,
            ]
        );
        assert_eq!(results[0].your_value, 4.0);
        assert_eq!(results[0].status, BenchmarkStatus::Low);
        assert_eq!(results[1].status, BenchmarkStatus::Good);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let target = Range::new(8.0, 15.0);
        let status = |value| {
            BenchmarkResult::evaluate(BenchmarkMetric::SentenceLength, value, target).status
        };
        assert_eq!(status(8.0), BenchmarkStatus::Good);
        assert_eq!(status(15.0), BenchmarkStatus::Good);
        assert_eq!(status(7.9), BenchmarkStatus::Low);
        assert_eq!(status(15.1), BenchmarkStatus::High);
    }

    #[test]
    fn dialogue_percent_counts_quoted_chars() {
        assert_eq!(dialogue_char_percent("\"ab\" cd"), 4.0 / 7.0 * 100.0);
        assert_eq!(dialogue_char_percent(""), 0.0);
    }
}
