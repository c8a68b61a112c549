//! Grammar and mechanics checks with character positions for highlighting.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::metrics::text::{self, char_index, context_around};

const CONTEXT_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Grammar,
    Style,
    Consistency,
    Typo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub severity: Severity,
    /// Char offset into the analysed text; 0 with `length` 0 for whole-document findings.
    pub index: usize,
    pub length: usize,
}

struct ConfusedWordRule {
    id: &'static str,
    pattern: Regex,
    replacement: &'static str,
    kind: IssueKind,
    severity: Severity,
}

impl ConfusedWordRule {
    fn new(
        id: &'static str,
        pattern: &str,
        replacement: &'static str,
        kind: IssueKind,
        severity: Severity,
    ) -> Self {
        Self {
            id,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
            kind,
            severity,
        }
    }
}

static CONFUSED_WORDS: Lazy<Vec<ConfusedWordRule>> = Lazy::new(|| {
    use IssueKind::*;
    use Severity::*;

    vec![
        ConfusedWordRule::new(
            "modal-of",
            r"(?i)\b(should|could|would|must|might) of\b",
            "$1 have",
            Grammar,
            Critical,
        ),
        ConfusedWordRule::new("alot", r"(?i)\balot\b", "a lot", Typo, Critical),
        ConfusedWordRule::new("irregardless", r"(?i)\birregardless\b", "regardless", Grammar, Warning),
        ConfusedWordRule::new(
            "intensive-purposes",
            r"(?i)\bfor all intensive purposes\b",
            "for all intents and purposes",
            Grammar,
            Warning,
        ),
        ConfusedWordRule::new("suppose-to", r"(?i)\bsuppose to\b", "supposed to", Grammar, Warning),
        ConfusedWordRule::new(
            "could-care-less",
            r"(?i)\bcould care less\b",
            "couldn't care less",
            Style,
            Info,
        ),
        ConfusedWordRule::new("its-self", r"(?i)\bits self\b", "itself", Typo, Warning),
        ConfusedWordRule::new("thier", r"(?i)\bthier\b", "their", Typo, Critical),
        ConfusedWordRule::new("recieve", r"(?i)\brecieve(d|s)?\b", "receive$1", Typo, Critical),
        ConfusedWordRule::new("definately", r"(?i)\bdefinately\b", "definitely", Typo, Critical),
    ]
});

static DOUBLE_SPACE_AFTER_PERIOD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\. {2,}").unwrap());
static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S( +)([,.;:!?])").unwrap());
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z']+").unwrap());

/// Run every mechanics rule; issues come back ordered by position.
pub fn check_grammar(lexicon: &Lexicon, text: &str) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();
    issues.extend(confused_words(text));
    issues.extend(spelling_consistency(lexicon, text));
    issues.extend(double_spaces_after_period(text));
    issues.extend(space_before_punctuation(text));
    issues.extend(repeated_words(lexicon, text));
    issues.sort_by_key(|issue| issue.index);
    issues
}

fn positioned(
    text: &str,
    id: &str,
    start: usize,
    end: usize,
    kind: IssueKind,
    severity: Severity,
    message: String,
    suggestion: Option<String>,
) -> GrammarIssue {
    let index = char_index(text, start);
    GrammarIssue {
        id: format!("{id}-{index}"),
        kind,
        message,
        context: context_around(text, start, end, CONTEXT_WIDTH),
        suggestion,
        severity,
        index,
        length: text[start..end].chars().count(),
    }
}

fn confused_words(text: &str) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();
    for rule in CONFUSED_WORDS.iter() {
        for caps in rule.pattern.captures_iter(text) {
            let Some(found) = caps.get(0) else {
                continue;
            };
            let mut replacement = String::new();
            caps.expand(rule.replacement, &mut replacement);
            let replacement = replacement.to_lowercase();
            issues.push(positioned(
                text,
                rule.id,
                found.start(),
                found.end(),
                rule.kind,
                rule.severity,
                format!("\"{}\" should be \"{replacement}\".", found.as_str()),
                Some(replacement),
            ));
        }
    }
    issues
}

fn spelling_consistency(lexicon: &Lexicon, text: &str) -> Option<GrammarIssue> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in text::normalized_words(text) {
        *counts.entry(word).or_insert(0) += 1;
    }
    let count = |word: &str| counts.get(word).copied().unwrap_or(0);

    let variants = lexicon.spelling_variants();
    let us_total: usize = variants.iter().map(|(us, _)| count(*us)).sum();
    let uk_total: usize = variants.iter().map(|(_, uk)| count(*uk)).sum();
    if us_total == 0 || uk_total == 0 {
        return None;
    }

    let uk_is_minority = uk_total <= us_total;
    let (minority, majority_label): (Vec<&str>, &str) = if uk_is_minority {
        (variants.iter().map(|(_, uk)| *uk).filter(|uk| count(*uk) > 0).collect(), "US")
    } else {
        (variants.iter().map(|(us, _)| *us).filter(|us| count(*us) > 0).collect(), "UK")
    };
    let preferred: Vec<&str> = variants
        .iter()
        .filter(|(us, uk)| minority.contains(us) || minority.contains(uk))
        .map(|(us, uk)| if uk_is_minority { *us } else { *uk })
        .collect();

    Some(GrammarIssue {
        id: "spelling-consistency-0".to_string(),
        kind: IssueKind::Consistency,
        message: format!(
            "Mixed US and UK spelling; the text mostly uses {majority_label} forms."
        ),
        context: minority.join(", "),
        suggestion: Some(preferred.join(", ")),
        severity: Severity::Info,
        index: 0,
        length: 0,
    })
}

fn double_spaces_after_period(text: &str) -> Vec<GrammarIssue> {
    DOUBLE_SPACE_AFTER_PERIOD_RE
        .find_iter(text)
        .map(|found| {
            positioned(
                text,
                "double-space",
                found.start(),
                found.end(),
                IssueKind::Style,
                Severity::Info,
                "Use a single space after a period.".to_string(),
                Some(". ".to_string()),
            )
        })
        .collect()
}

fn space_before_punctuation(text: &str) -> Vec<GrammarIssue> {
    SPACE_BEFORE_PUNCT_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let spaces = caps.get(1)?;
            let mark = caps.get(2)?;
            Some(positioned(
                text,
                "space-before-punct",
                spaces.start(),
                mark.end(),
                IssueKind::Style,
                Severity::Warning,
                format!("Remove the space before \"{}\".", mark.as_str()),
                Some(mark.as_str().to_string()),
            ))
        })
        .collect()
}

fn repeated_words(lexicon: &Lexicon, text: &str) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();
    let mut previous: Option<regex::Match<'_>> = None;

    for current in WORD_RE.find_iter(text) {
        if let Some(prev) = previous {
            let gap = &text[prev.end()..current.start()];
            let word = current.as_str().to_lowercase();
            let stutter = !gap.is_empty()
                && gap.chars().all(char::is_whitespace)
                && gap.matches('\n').count() < 2
                && prev.as_str().to_lowercase() == word
                && !lexicon.is_repeatable(&word);
            if stutter {
                issues.push(positioned(
                    text,
                    "repeated-word",
                    prev.start(),
                    current.end(),
                    IssueKind::Typo,
                    Severity::Warning,
                    format!("Repeated word \"{}\".", current.as_str()),
                    Some(prev.as_str().to_string()),
                ));
            }
        }
        previous = Some(current);
    }
    issues
}
