//! Configuration file parsing.
//!
//! Parses individual `.tfidf.toml` files into intermediate `RawConfig` structures that
//! keep every field optional until the files are merged.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{ConfigError, RawStopWords, TextOp};

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Model section.
    pub model: Option<RawModelSettings>,
    /// Output section.
    pub output: Option<RawOutputSettings>,
}

/// A document-frequency value as written in TOML: an integer count or a float fraction.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum RawDocFrequency {
    /// `min_df = 2`
    Count(i64),
    /// `max_df = 0.95`
    Fraction(f64),
}

/// Raw model settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawModelSettings {
    /// Operation names, e.g. `["lower", "digits"]`.
    pub ops: Option<Vec<TextOp>>,
    /// Analyzer mode name.
    pub analyzer: Option<String>,
    /// Stop-word source: the `"default"` marker or a list of words.
    pub stop_words: Option<RawStopWords>,
    /// Lower and upper n-gram length.
    pub ngram_range: Option<(usize, usize)>,
    /// Minimum document frequency.
    pub min_df: Option<RawDocFrequency>,
    /// Maximum document frequency.
    pub max_df: Option<RawDocFrequency>,
    /// Vocabulary size cap.
    pub max_features: Option<usize>,
    /// Fixed vocabulary.
    pub vocabulary: Option<Vec<String>>,
    /// Binary term frequencies.
    pub binary: Option<bool>,
    /// Row normalization name.
    pub norm: Option<String>,
    /// Apply IDF weighting.
    pub use_idf: Option<bool>,
    /// Smooth IDF weights.
    pub smooth_idf: Option<bool>,
    /// Use `1 + ln(tf)` term frequencies.
    pub sublinear_tf: Option<bool>,
}

/// Raw output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOutputSettings {
    /// Directory receiving CSV results.
    pub dir: Option<String>,
    /// Number of top terms shown per document.
    pub top_terms: Option<usize>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks whether a config file declares `root = true`.
///
/// Unreadable or unparseable files are treated as non-root; the error surfaces later
/// when the file is actually loaded.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path)
        .ok()
        .and_then(|c| c.root)
        .unwrap_or(false)
}
