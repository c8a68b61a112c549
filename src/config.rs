use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AnalyzerError, Result};
use crate::genre::Genre;
use crate::metrics::DEFAULT_ARC_CHUNKS;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub genre: String,
    pub sentiment_chunks: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            genre: Genre::Thriller.label().to_string(),
            sentiment_chunks: DEFAULT_ARC_CHUNKS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Quiet period after the last request before a run starts. 0 disables debouncing.
    pub debounce_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub analysis: AnalysisConfig,
    pub pipeline: PipelineConfig,
}

impl AnalyzerConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::read(path)?,
            _ => AnalyzerConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| AnalyzerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| AnalyzerError::io(parent, err))?;
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload).map_err(|err| AnalyzerError::io(path, err))?;
        Ok(())
    }

    pub fn default_genre(&self) -> Result<Genre> {
        Genre::parse(&self.analysis.genre)
            .ok_or_else(|| AnalyzerError::UnknownGenre(self.analysis.genre.clone()))
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(genre) = lookup("ANALYZER_GENRE") {
            if !genre.trim().is_empty() {
                self.analysis.genre = genre;
            }
        }
        if let Some(chunks) = lookup("ANALYZER_SENTIMENT_CHUNKS") {
            if let Ok(value) = chunks.trim().parse::<usize>() {
                self.analysis.sentiment_chunks = value;
            }
        }
        if let Some(debounce) = lookup("ANALYZER_DEBOUNCE_MS") {
            if let Ok(value) = debounce.trim().parse::<u64>() {
                self.pipeline.debounce_ms = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("ANALYZER_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/analyzer.toml")))
}
