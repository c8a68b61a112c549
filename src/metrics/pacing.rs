use serde::{Deserialize, Serialize};

use crate::metrics::text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Slow,
    Medium,
    Fast,
}

impl Intensity {
    pub fn label(self) -> &'static str {
        match self {
            Intensity::Slow => "slow",
            Intensity::Medium => "medium",
            Intensity::Fast => "fast",
        }
    }

    fn from_avg_sentence_length(avg: f64) -> Self {
        if avg < 10.0 {
            Intensity::Fast
        } else if avg > 20.0 {
            Intensity::Slow
        } else {
            Intensity::Medium
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphPacing {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub is_dialogue: bool,
    pub intensity: Intensity,
}

/// One entry per blank-line separated paragraph, in document order.
pub fn analyze_paragraph_pacing(text: &str) -> Vec<ParagraphPacing> {
    text::paragraphs(text)
        .into_iter()
        .map(|paragraph| {
            let word_count = text::word_count(paragraph);
            let sentence_count = text::sentences(paragraph).len();
            let avg_sentence_length = word_count as f64 / sentence_count.max(1) as f64;
            let quoted = text::quoted_word_count(paragraph);
            ParagraphPacing {
                word_count,
                sentence_count,
                avg_sentence_length: text::round1(avg_sentence_length),
                is_dialogue: word_count > 0 && quoted as f64 > word_count as f64 * 0.5,
                intensity: Intensity::from_avg_sentence_length(avg_sentence_length),
            }
        })
        .collect()
}
