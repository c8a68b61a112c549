pub mod config;
pub mod error;
pub mod genre;
pub mod lexicon;
pub mod metrics;
pub mod pipeline;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::AnalyzerConfig;
use crate::metrics::{
    analyze_paragraph_pacing, analyze_sentiment, analyze_sentiment_arc, benchmark_genre,
    calculate_reading_stats, check_grammar, find_context_matches, generate_editor_insights,
    get_overused_words, strip_markup, BenchmarkResult, ContextMatch, EditorInsight, GrammarIssue,
    OverusedWord, ParagraphPacing, ReadingStats, SentimentPoint, SentimentScore,
    DEFAULT_ARC_CHUNKS,
};

pub use crate::error::AnalyzerError;
pub use crate::genre::{Genre, GenreProfile};
pub use crate::lexicon::Lexicon;

/// Named lore text supplied alongside the document; content is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceFile {
    pub name: String,
    pub content: String,
}

impl ReferenceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Every readable file directly inside `dir`, sorted by file name.
///
/// Subdirectories are ignored; files that cannot be read as UTF-8 are skipped.
pub fn load_reference_dir(dir: &Path) -> Result<Vec<ReferenceFile>, AnalyzerError> {
    let entries = std::fs::read_dir(dir).map_err(|err| AnalyzerError::io(dir, err))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| AnalyzerError::io(dir, err))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        match std::fs::read_to_string(&path) {
            Ok(content) => files.push(ReferenceFile { name, content }),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable reference file")
            }
        }
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(count = files.len(), dir = %dir.display(), "loaded reference files");
    Ok(files)
}

/// Aggregate result of one orchestrator run. Rebuilt wholesale every run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub stats: Option<ReadingStats>,
    pub sentiment: Option<SentimentScore>,
    pub benchmarks: Vec<BenchmarkResult>,
    pub pacing: Vec<ParagraphPacing>,
    pub sentiment_arc: Vec<SentimentPoint>,
    pub overused_words: Vec<OverusedWord>,
    pub insights: Vec<EditorInsight>,
    pub grammar_issues: Vec<GrammarIssue>,
    pub context_matches: Vec<ContextMatch>,
}

impl AnalysisReport {
    /// True when there was no text to analyse.
    pub fn is_empty(&self) -> bool {
        self.stats.is_none()
            && self.sentiment.is_none()
            && self.benchmarks.is_empty()
            && self.pacing.is_empty()
            && self.sentiment_arc.is_empty()
            && self.overused_words.is_empty()
            && self.insights.is_empty()
            && self.grammar_issues.is_empty()
            && self.context_matches.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
    sentiment_chunks: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Lexicon::shared())
    }
}

impl Analyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            sentiment_chunks: DEFAULT_ARC_CHUNKS,
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::default().with_sentiment_chunks(config.analysis.sentiment_chunks)
    }

    /// Chunk count for the sentiment arc. Zero falls back to the default.
    pub fn with_sentiment_chunks(mut self, chunks: usize) -> Self {
        self.sentiment_chunks = if chunks == 0 { DEFAULT_ARC_CHUNKS } else { chunks };
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn sentiment_chunks(&self) -> usize {
        self.sentiment_chunks
    }

    /// Strip markup once and run every metric over the plain text.
    ///
    /// Never fails: text that strips to nothing yields the empty report.
    pub fn run_full_analysis(
        &self,
        text: &str,
        genre: Genre,
        reference_files: &[ReferenceFile],
    ) -> AnalysisReport {
        let plain = strip_markup(text);
        if plain.is_empty() {
            return AnalysisReport::default();
        }

        let lexicon = self.lexicon.as_ref();
        AnalysisReport {
            stats: calculate_reading_stats(&plain),
            sentiment: Some(analyze_sentiment(lexicon, &plain)),
            benchmarks: benchmark_genre(&plain, lexicon.genre_profile(genre)),
            pacing: analyze_paragraph_pacing(&plain),
            sentiment_arc: analyze_sentiment_arc(lexicon, &plain, self.sentiment_chunks),
            overused_words: get_overused_words(lexicon, &plain),
            insights: generate_editor_insights(lexicon, &plain),
            grammar_issues: check_grammar(lexicon, &plain),
            context_matches: find_context_matches(&plain, reference_files),
        }
    }
}

/// One-shot run against the shared lexicon with default settings.
pub fn run_full_analysis(
    text: &str,
    genre: Genre,
    reference_files: &[ReferenceFile],
) -> AnalysisReport {
    Analyzer::default().run_full_analysis(text, genre, reference_files)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_only_input_is_empty() {
        let report = run_full_analysis("<p><em></em></p>", Genre::Fantasy, &[]);
        assert!(report.is_empty());
        assert_eq!(report, AnalysisReport::default());
    }

    #[test]
    fn zero_chunks_keeps_the_default() {
        let analyzer = Analyzer::default().with_sentiment_chunks(0);
        assert_eq!(analyzer.sentiment_chunks(), DEFAULT_ARC_CHUNKS);
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = run_full_analysis("The cat sat.", Genre::Thriller, &[]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["stats"]["wordCount"], 3);
        assert!(json["sentimentArc"].as_array().unwrap().is_empty());
        assert!(json.get("grammarIssues").is_some());
    }

    #[test]
    fn formats_numbers() {
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_float(2.0, 2), "2.00");
    }
}
