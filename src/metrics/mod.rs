//! Pure metric functions. Same input, same output; no I/O, no shared state.

pub mod benchmark;
pub mod context;
pub mod grammar;
pub mod insights;
pub mod overused;
pub mod pacing;
pub mod readability;
pub mod sentiment;
pub mod text;

pub use benchmark::{benchmark_genre, BenchmarkMetric, BenchmarkResult, BenchmarkStatus};
pub use context::{find_context_matches, ContextMatch};
pub use grammar::{check_grammar, GrammarIssue, IssueKind, Severity};
pub use insights::{generate_editor_insights, EditorInsight, InsightKind};
pub use overused::{get_overused_words, OverusedWord};
pub use pacing::{analyze_paragraph_pacing, Intensity, ParagraphPacing};
pub use readability::{calculate_reading_stats, count_syllables, ReadingStats};
pub use sentiment::{
    analyze_sentiment, analyze_sentiment_arc, SentimentLabel, SentimentPoint, SentimentScore,
    DEFAULT_ARC_CHUNKS,
};
pub use text::strip_markup;
