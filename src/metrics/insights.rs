//! Editor insights: an ordered battery of independent style checks.
//!
//! Each rule adds at most one insight and the list keeps rule order, not
//! severity order. Substantial text with no findings gets a single praise
//! entry instead of an empty list.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::{Lexicon, Person, Sense};
use crate::metrics::readability::{adverbs, passive_count};
use crate::metrics::text;

const MAX_ADVERBS: usize = 5;
const MAX_PASSIVE: usize = 3;
const LONG_SENTENCE_AVG: f64 = 25.0;
const CHOPPY_SENTENCE_AVG: f64 = 8.0;
const CHOPPY_MIN_SENTENCES: usize = 5;
const ECHO_MIN_LETTERS: usize = 5;
const ECHO_WINDOW: usize = 50;
const ECHO_WARNING_ABOVE: usize = 5;
const STICKY_MIN_WORDS: usize = 5;
const STICKY_GLUE_RATIO: f64 = 0.45;
const STICKY_MIN_SENTENCES: usize = 3;
const DIALOGUE_MIN_WORDS: usize = 100;
const DIALOGUE_MIN_PERCENT: f64 = 10.0;
const DIALOGUE_MAX_PERCENT: f64 = 70.0;
const SENSORY_MIN_WORDS: usize = 200;
const POV_SECONDARY_MAX: usize = 5;
const RUN_ON_MIN_WORDS: usize = 30;
const MAX_DOUBLE_SPACES: usize = 3;
const CLEAN_MIN_CHARS: usize = 100;
const CONTEXT_ITEMS: usize = 5;

static DOUBLE_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Suggestion,
    Praise,
}

impl InsightKind {
    pub fn label(self) -> &'static str {
        match self {
            InsightKind::Warning => "warning",
            InsightKind::Suggestion => "suggestion",
            InsightKind::Praise => "praise",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorInsight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
    pub context: String,
}

impl EditorInsight {
    fn new(kind: InsightKind, message: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: context.into(),
        }
    }
}

/// Document views shared by the rules, computed once per call.
struct Draft<'a> {
    text: &'a str,
    sentences: Vec<&'a str>,
    word_count: usize,
    tokens: Vec<String>,
}

type Rule = fn(&Lexicon, &Draft<'_>) -> Option<EditorInsight>;

const RULES: &[Rule] = &[
    adverb_density,
    passive_voice,
    sentence_length,
    filler_words,
    word_echoes,
    cliches,
    sticky_sentences,
    dialogue_balance,
    sensory_balance,
    point_of_view,
    unterminated_quotes,
    dialogue_tag_commas,
    run_on_sentences,
    double_spaces,
];

pub fn generate_editor_insights(lexicon: &Lexicon, text: &str) -> Vec<EditorInsight> {
    let draft = Draft {
        text,
        sentences: text::sentences(text),
        word_count: text::word_count(text),
        tokens: text::normalized_words(text),
    };

    let mut insights: Vec<EditorInsight> =
        RULES.iter().filter_map(|rule| rule(lexicon, &draft)).collect();

    if insights.is_empty() && text.chars().count() > CLEAN_MIN_CHARS {
        insights.push(EditorInsight::new(
            InsightKind::Praise,
            "Clean draft! No common style issues detected.",
            "Keep going.",
        ));
    }
    insights
}

fn adverb_density(_: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    let found = adverbs(draft.text);
    if found.len() <= MAX_ADVERBS {
        return None;
    }
    let sample = distinct_lowercase(found.iter().copied());
    Some(EditorInsight::new(
        InsightKind::Warning,
        format!("High adverb usage ({} words ending in -ly).", found.len()),
        sample_list(&sample),
    ))
}

fn passive_voice(_: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    let count = passive_count(draft.text);
    if count <= MAX_PASSIVE {
        return None;
    }
    Some(EditorInsight::new(
        InsightKind::Warning,
        format!("Passive voice detected {count} times."),
        "Let the subject perform the action.",
    ))
}

fn sentence_length(_: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    if draft.sentences.is_empty() {
        return None;
    }
    let avg = draft.word_count as f64 / draft.sentences.len() as f64;
    if avg > LONG_SENTENCE_AVG {
        Some(EditorInsight::new(
            InsightKind::Suggestion,
            format!("Long sentences (average {avg:.1} words)."),
            "Break up long sentences to keep the reader moving.",
        ))
    } else if avg < CHOPPY_SENTENCE_AVG && draft.sentences.len() > CHOPPY_MIN_SENTENCES {
        Some(EditorInsight::new(
            InsightKind::Suggestion,
            format!("Choppy rhythm (average {avg:.1} words per sentence)."),
            "Combine some short sentences to vary the flow.",
        ))
    } else {
        None
    }
}

fn filler_words(lexicon: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    let present: HashSet<&str> = draft.tokens.iter().map(String::as_str).collect();
    let found: Vec<&str> = lexicon
        .weasel_words()
        .iter()
        .copied()
        .filter(|word| present.contains(word))
        .collect();
    if found.is_empty() {
        return None;
    }
    Some(EditorInsight::new(
        InsightKind::Suggestion,
        "Filler words weaken your prose.",
        found.join(", "),
    ))
}

fn word_echoes(_: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    let mut last_seen: HashMap<&str, usize> = HashMap::new();
    let mut echoes: Vec<&str> = Vec::new();

    for (position, word) in draft.tokens.iter().enumerate() {
        if word.chars().count() < ECHO_MIN_LETTERS {
            continue;
        }
        if let Some(previous) = last_seen.insert(word.as_str(), position) {
            if position - previous < ECHO_WINDOW && !echoes.contains(&word.as_str()) {
                echoes.push(word.as_str());
            }
        }
    }

    if echoes.is_empty() {
        return None;
    }
    let kind = if echoes.len() > ECHO_WARNING_ABOVE {
        InsightKind::Warning
    } else {
        InsightKind::Suggestion
    };
    Some(EditorInsight::new(
        kind,
        format!("{} words echo within a few lines of each other.", echoes.len()),
        sample_list(&echoes),
    ))
}

fn cliches(lexicon: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    let lowered = draft.text.to_lowercase();
    let found: Vec<&str> = lexicon
        .cliches()
        .iter()
        .copied()
        .filter(|phrase| lowered.contains(phrase))
        .collect();
    if found.is_empty() {
        return None;
    }
    Some(EditorInsight::new(
        InsightKind::Warning,
        format!("Clich\u{e9}s detected ({}).", found.len()),
        sample_list(&found),
    ))
}

fn sticky_sentences(lexicon: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    let sticky = draft
        .sentences
        .iter()
        .filter(|sentence| {
            let words = text::normalized_words(sentence);
            if words.len() < STICKY_MIN_WORDS {
                return false;
            }
            let glue = words.iter().filter(|word| lexicon.is_glue(word)).count();
            glue as f64 / words.len() as f64 > STICKY_GLUE_RATIO
        })
        .count();
    if sticky < STICKY_MIN_SENTENCES {
        return None;
    }
    Some(EditorInsight::new(
        InsightKind::Suggestion,
        format!("{sticky} sticky sentences packed with glue words."),
        "Cut filler like 'of the', 'in order to' and 'it is'.",
    ))
}

fn dialogue_balance(_: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    if draft.word_count <= DIALOGUE_MIN_WORDS {
        return None;
    }
    let percent = text::quoted_word_count(draft.text) as f64 / draft.word_count as f64 * 100.0;
    if percent < DIALOGUE_MIN_PERCENT {
        Some(EditorInsight::new(
            InsightKind::Suggestion,
            format!("Dialogue is only {percent:.0}% of the text."),
            "Scenes with little dialogue can feel distant.",
        ))
    } else if percent > DIALOGUE_MAX_PERCENT {
        Some(EditorInsight::new(
            InsightKind::Suggestion,
            format!("Dialogue makes up {percent:.0}% of the text."),
            "Ground the conversation with action and setting.",
        ))
    } else {
        None
    }
}

fn sensory_balance(lexicon: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    if draft.word_count <= SENSORY_MIN_WORDS {
        return None;
    }
    let mut counts: HashMap<Sense, usize> = HashMap::new();
    for word in &draft.tokens {
        if let Some(sense) = lexicon.sense_of(word) {
            *counts.entry(sense).or_insert(0) += 1;
        }
    }
    let missing: Vec<&str> = Sense::ALL
        .iter()
        .filter(|sense| !counts.contains_key(*sense))
        .map(|sense| sense.label())
        .collect();
    if missing.is_empty() {
        return None;
    }
    Some(EditorInsight::new(
        InsightKind::Suggestion,
        format!("No {} details in this passage.", missing.join(", ")),
        "Engage more of the senses to immerse the reader.",
    ))
}

fn point_of_view(lexicon: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    let mut counts = [(Person::First, 0usize), (Person::Second, 0), (Person::Third, 0)];
    for word in &draft.tokens {
        if let Some(person) = lexicon.person_of(word) {
            for entry in counts.iter_mut().filter(|entry| entry.0 == person) {
                entry.1 += 1;
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let (dominant, dominant_count) = counts[0];
    let (secondary, secondary_count) = counts[1];
    if secondary_count <= POV_SECONDARY_MAX {
        return None;
    }
    Some(EditorInsight::new(
        InsightKind::Warning,
        "Possible point-of-view mixing.",
        format!(
            "{}: {dominant_count}, {}: {secondary_count}",
            dominant.label(),
            secondary.label()
        ),
    ))
}

fn unterminated_quotes(_: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    let straight = draft.text.matches('"').count();
    let opening = draft.text.matches('\u{201C}').count();
    let closing = draft.text.matches('\u{201D}').count();
    if straight % 2 == 0 && opening == closing {
        return None;
    }
    Some(EditorInsight::new(
        InsightKind::Warning,
        "Unterminated dialogue: quotation marks are unbalanced.",
        "Check that every opened quote is closed.",
    ))
}

fn dialogue_tag_commas(lexicon: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    let matches: Vec<&str> = lexicon
        .missing_tag_comma_pattern()
        .find_iter(draft.text)
        .map(|m| m.as_str())
        .collect();
    let first = matches.first()?;
    Some(EditorInsight::new(
        InsightKind::Suggestion,
        format!("Missing comma before dialogue tag ({}).", matches.len()),
        *first,
    ))
}

fn run_on_sentences(_: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    let run_ons = draft
        .sentences
        .iter()
        .filter(|sentence| text::word_count(sentence) > RUN_ON_MIN_WORDS && !sentence.contains(','))
        .count();
    if run_ons == 0 {
        return None;
    }
    Some(EditorInsight::new(
        InsightKind::Suggestion,
        format!("{run_ons} possible run-on sentences."),
        "Sentences over 30 words with no commas are hard to follow.",
    ))
}

fn double_spaces(_: &Lexicon, draft: &Draft<'_>) -> Option<EditorInsight> {
    let count = DOUBLE_SPACE_RE.find_iter(draft.text).count();
    if count <= MAX_DOUBLE_SPACES {
        return None;
    }
    Some(EditorInsight::new(
        InsightKind::Suggestion,
        format!("{count} runs of extra spaces."),
        "Use a single space between words and sentences.",
    ))
}

fn distinct_lowercase<'a>(words: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for word in words {
        let word = word.to_lowercase();
        if !seen.contains(&word) {
            seen.push(word);
        }
    }
    seen
}

fn sample_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .take(CONTEXT_ITEMS)
        .map(|item| item.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: &str = "Mara crossed the frozen field at dawn. Wind pushed against her coat \
                         while crows circled above the barn. She counted fence posts to stay \
                         awake and thought about the letter hidden in her boot.";

    fn kinds(text: &str) -> Vec<(InsightKind, String)> {
        generate_editor_insights(&Lexicon::standard(), text)
            .into_iter()
            .map(|insight| (insight.kind, insight.message))
            .collect()
    }

    fn fires(text: &str, message: &str) -> bool {
        kinds(text).iter().any(|(_, m)| m.contains(message))
    }

    fn words(word: &str, count: usize) -> String {
        vec![word; count].join(" ")
    }

    fn with_dialogue(quoted: usize, total: usize) -> String {
        format!("\"{}\" {}", words("go", quoted), words("walk", total - quoted))
    }

    #[test]
    fn passive_voice_fires_above_three_matches() {
        assert!(!fires(&"The door was opened. ".repeat(3), "Passive voice"));
        let found = kinds(&"The door was opened. ".repeat(4));
        assert!(found
            .iter()
            .any(|(k, m)| *k == InsightKind::Warning && m == "Passive voice detected 4 times."));
    }

    #[test]
    fn long_sentences_fire_above_twenty_five_words() {
        let sentence = |count| format!("{}.", words("stone", count));
        assert!(!fires(&sentence(25), "Long sentences"));
        assert!(fires(&sentence(26), "Long sentences (average 26.0 words)."));
    }

    #[test]
    fn choppy_rhythm_needs_more_than_five_sentences() {
        assert!(!fires(&"He ran. ".repeat(5), "Choppy rhythm"));
        assert!(fires(&"He ran. ".repeat(6), "Choppy rhythm"));
        assert!(!fires(&"He ran to the old mill by the river. ".repeat(6), "Choppy rhythm"));
    }

    #[test]
    fn filler_words_are_listed_in_lexicon_order() {
        assert!(!fires("It was cold.", "Filler words"));
        let insights = generate_editor_insights(&Lexicon::standard(), "It was really very cold.");
        let filler = insights
            .iter()
            .find(|i| i.message.starts_with("Filler words"))
            .unwrap();
        assert_eq!(filler.kind, InsightKind::Suggestion);
        assert_eq!(filler.context, "very, really");
    }

    #[test]
    fn sticky_sentences_need_three_over_the_glue_ratio() {
        let sticky = "It was in the box of the man. ";
        assert!(!fires(&sticky.repeat(2), "sticky sentences"));
        assert!(fires(&sticky.repeat(3), "3 sticky sentences"));

        let at_ratio = format!("{} {}. ", words("the", 9), words("stone", 11));
        assert!(!fires(&at_ratio.repeat(3), "sticky sentences"));
        let over_ratio = format!("{} {}. ", words("the", 10), words("stone", 10));
        assert!(fires(&over_ratio.repeat(3), "sticky sentences"));

        assert!(!fires(&"It was in the. ".repeat(3), "sticky sentences"));
    }

    #[test]
    fn dialogue_balance_skips_short_texts() {
        assert!(!fires(&words("walk", 100), "Dialogue"));
        assert!(fires(&words("walk", 101), "Dialogue is only 0%"));
    }

    #[test]
    fn dialogue_balance_window_is_inclusive() {
        assert!(!fires(&with_dialogue(11, 110), "Dialogue"));
        assert!(fires(&with_dialogue(10, 110), "Dialogue is only"));
        assert!(!fires(&with_dialogue(77, 110), "Dialogue"));
        assert!(fires(&with_dialogue(78, 110), "Dialogue makes up"));
    }

    #[test]
    fn sensory_balance_needs_over_two_hundred_words() {
        assert!(!fires(&words("walk", 200), "details in this passage"));
        assert!(fires(
            &words("walk", 201),
            "No sight, sound, touch, smell, taste details in this passage."
        ));

        let partial = format!("saw heard {}", words("walk", 199));
        assert!(fires(&partial, "No touch, smell, taste details"));
        let all_senses = format!("saw heard felt smelled tasted {}", words("walk", 196));
        assert!(!fires(&all_senses, "details in this passage"));
    }

    #[test]
    fn clean_text_earns_single_praise() {
        let insights = generate_editor_insights(&Lexicon::standard(), CLEAN);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Praise);
    }

    #[test]
    fn short_clean_text_gets_nothing() {
        assert!(generate_editor_insights(&Lexicon::standard(), "The cat sat.").is_empty());
        assert!(generate_editor_insights(&Lexicon::standard(), "").is_empty());
    }

    #[test]
    fn repeated_adverbs_warn() {
        let text = "she said very quickly. ".repeat(6);
        let insights = kinds(&text);
        assert_eq!(insights[0].0, InsightKind::Warning);
        assert!(insights[0].1.contains("adverb"));
    }

    #[test]
    fn echoes_escalate_above_five_words() {
        let few = "river stone river stone";
        let insights = generate_editor_insights(&Lexicon::standard(), few);
        let echo = insights.iter().find(|i| i.message.contains("echo")).unwrap();
        assert_eq!(echo.kind, InsightKind::Suggestion);
        assert_eq!(echo.context, "river, stone");

        let many = "river stone cloud maple ember frost river stone cloud maple ember frost";
        let insights = generate_editor_insights(&Lexicon::standard(), many);
        let echo = insights.iter().find(|i| i.message.contains("echo")).unwrap();
        assert_eq!(echo.kind, InsightKind::Warning);
    }

    #[test]
    fn flags_cliches_and_unbalanced_quotes() {
        let text = "It was a dark and stormy night. \"Run, she said.";
        let found = kinds(text);
        assert!(found.iter().any(|(_, m)| m.starts_with("Clich")));
        assert!(found.iter().any(|(_, m)| m.starts_with("Unterminated")));
    }

    #[test]
    fn mixed_pov_warns() {
        let text = "I think you know. I told you. I gave you mine. We left my coat. \
                    She saw him. He saw her. They saw them. She and he left.";
        let found = kinds(text);
        assert!(found.iter().any(|(k, m)| *k == InsightKind::Warning && m.contains("point-of-view")));
    }

    #[test]
    fn mechanics_rules_fire_independently() {
        let text = "\"Stop\" she said.  Then  she  left  the room. One two three four five six \
                    seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen seventeen \
                    eighteen nineteen twenty twenty one twenty two twenty three twenty four twenty five twenty six.";
        let found = kinds(text);
        assert!(found.iter().any(|(_, m)| m.starts_with("Missing comma")));
        assert!(found.iter().any(|(_, m)| m.contains("run-on")));
        assert!(found.iter().any(|(_, m)| m.contains("extra spaces")));
    }
}
