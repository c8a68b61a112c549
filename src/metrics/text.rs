//! Tokenisation shared by the metric functions.

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</(?:p|div|h[1-6]|li|blockquote)\s*>|<br\s*/?>").unwrap()
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());
static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static QUOTE_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*"|\u{201C}[^\u{201D}]*\u{201D}"#).unwrap());

/// Strip inline markup to plain text.
///
/// Closing block tags and `<br>` become line breaks so paragraph structure
/// survives; every other tag is removed outright.
pub fn strip_markup(text: &str) -> String {
    let with_breaks = BLOCK_TAG_RE.replace_all(text, "\n\n");
    let stripped = TAG_RE.replace_all(&with_breaks, "");
    stripped
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

/// Whitespace-delimited, non-empty tokens.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Non-empty segments between runs of `.`, `!` and `?`.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Non-empty blocks separated by blank lines.
pub fn paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

/// Lowercased letter-only tokens; punctuation and digits are dropped.
pub fn normalized_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|word| !word.is_empty())
        .collect()
}

pub fn normalize_word(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Double-quoted spans, straight or curly, quotes included.
pub fn quoted_spans(text: &str) -> impl Iterator<Item = &str> {
    QUOTE_SPAN_RE.find_iter(text).map(|m| m.as_str())
}

/// Number of whitespace tokens that fall inside quoted spans.
pub fn quoted_word_count(text: &str) -> usize {
    quoted_spans(text).map(word_count).sum()
}

/// Char offset of a byte offset, for UI highlighting.
pub fn char_index(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}

/// Snippet of roughly `width` bytes centred on `start..end`, newlines flattened.
pub fn context_around(text: &str, start: usize, end: usize, width: usize) -> String {
    let mid = (start + end) / 2;
    let half = width / 2;
    let ctx_start = floor_char_boundary(text, mid.saturating_sub(half));
    let ctx_end = ceil_char_boundary(text, (mid + half).min(text.len()));

    let snippet = text[ctx_start..ctx_end].replace('\n', " ");
    let prefix = if ctx_start > 0 { "..." } else { "" };
    let suffix = if ctx_end < text.len() { "..." } else { "" };
    format!("{prefix}{}{suffix}", snippet.trim())
}

fn floor_char_boundary(text: &str, mut pos: usize) -> usize {
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

fn ceil_char_boundary(text: &str, mut pos: usize) -> usize {
    while pos < text.len() && !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
