use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::metrics::text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverusedWord {
    pub word: String,
    pub count: usize,
    pub synonyms: Vec<String>,
}

/// Synonym-lexicon words used at least twice, most frequent first.
pub fn get_overused_words(lexicon: &Lexicon, text: &str) -> Vec<OverusedWord> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in text::normalized_words(text) {
        if lexicon.synonyms(&word).is_some() {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut overused: Vec<OverusedWord> = counts
        .into_iter()
        .filter(|(_, count)| *count >= 2)
        .map(|(word, count)| {
            let synonyms = lexicon
                .synonyms(&word)
                .unwrap_or_default()
                .iter()
                .map(|synonym| synonym.to_string())
                .collect();
            OverusedWord {
                word,
                count,
                synonyms,
            }
        })
        .collect();

    overused.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    overused
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_repeated_lexicon_words_only() {
        let lexicon = Lexicon::standard();
        let text = "Very good. Very, very good! She said it was good. The river said nothing.";
        let words = get_overused_words(&lexicon, text);
        let summary: Vec<_> = words.iter().map(|w| (w.word.as_str(), w.count)).collect();
        assert_eq!(summary, vec![("good", 3), ("very", 3), ("said", 2)]);
        assert!(words.iter().all(|w| !w.synonyms.is_empty()));
    }

    #[test]
    fn empty_text_has_no_overused_words() {
        assert!(get_overused_words(&Lexicon::standard(), "").is_empty());
    }
}
