//! Lexicon sentiment scoring and the per-chunk sentiment arc.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::metrics::text;

pub const DEFAULT_ARC_CHUNKS: usize = 10;
const SNIPPET_WORDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn label(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }

    pub fn from_score(score: i32) -> Self {
        if score > 2 {
            SentimentLabel::Positive
        } else if score < -2 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScore {
    pub score: i32,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentPoint {
    pub chunk_index: usize,
    pub score: i32,
    pub snippet: String,
}

/// Unnormalised score: +1 per positive word, -1 per negative word.
pub fn score_sentiment<'a, I>(lexicon: &Lexicon, tokens: I) -> i32
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(|token| {
            let word = text::normalize_word(token);
            if lexicon.is_positive(&word) {
                1
            } else if lexicon.is_negative(&word) {
                -1
            } else {
                0
            }
        })
        .sum()
}

pub fn analyze_sentiment(lexicon: &Lexicon, text: &str) -> SentimentScore {
    let score = score_sentiment(lexicon, text.split_whitespace());
    SentimentScore {
        score,
        label: SentimentLabel::from_score(score),
    }
}

/// Split the text into `chunks` equal word-count chunks and score each.
///
/// Returns exactly `chunks` points, or none when the text has fewer words
/// than chunks. Words left over after `chunks` equal slices are not scored.
pub fn analyze_sentiment_arc(lexicon: &Lexicon, text: &str, chunks: usize) -> Vec<SentimentPoint> {
    let words = text::words(text);
    if chunks == 0 || words.len() < chunks {
        return Vec::new();
    }
    let chunk_size = words.len() / chunks;

    (0..chunks)
        .map(|chunk_index| {
            let start = chunk_index * chunk_size;
            let chunk = &words[start..start + chunk_size];
            let snippet = chunk
                .iter()
                .take(SNIPPET_WORDS)
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            SentimentPoint {
                chunk_index,
                score: score_sentiment(lexicon, chunk.iter().copied()),
                snippet: format!("{snippet}..."),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_use_strict_thresholds() {
        assert_eq!(SentimentLabel::from_score(3), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(2), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-2), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-3), SentimentLabel::Negative);
    }

    #[test]
    fn scores_ignore_case_and_punctuation() {
        let lexicon = Lexicon::standard();
        let score = analyze_sentiment(&lexicon, "Joy! Love, hope and a smile. Then death.");
        assert_eq!(score.score, 3);
        assert_eq!(score.label, SentimentLabel::Positive);
    }

    #[test]
    fn arc_is_all_or_nothing() {
        let lexicon = Lexicon::standard();
        assert!(analyze_sentiment_arc(&lexicon, "too few words here", 10).is_empty());

        let text = "love ".repeat(23);
        let arc = analyze_sentiment_arc(&lexicon, &text, 10);
        assert_eq!(arc.len(), 10);
        assert_eq!(arc[0].score, 2);
        assert_eq!(arc[9].score, 2);
        assert_eq!(arc[0].snippet, "love love...");
    }

    #[test]
    fn arc_chunks_have_equal_size() {
        let lexicon = Lexicon::standard();
        let text = format!("{}{}", "stone ".repeat(9), "love ".repeat(10));
        let arc = analyze_sentiment_arc(&lexicon, &text, 10);
        let scores: Vec<i32> = arc.iter().map(|point| point.score).collect();
        assert_eq!(scores, vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(arc[9].snippet, "love...");
    }
}
