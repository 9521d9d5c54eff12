//! Error types for tfidf configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

use crate::TextOp;

/// Errors raised while building or validating a model configuration.
///
/// Every variant is detected eagerly, before any document is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two operations that cannot be combined were both selected.
    #[error("both {first} and {second} cannot be applied together")]
    ExclusiveOps {
        /// The first conflicting operation.
        first: TextOp,
        /// The second conflicting operation.
        second: TextOp,
    },

    /// An operation name could not be recognized.
    #[error("unknown text operation '{0}'")]
    UnknownOp(String),

    /// The analyzer name is not one of `word`, `char` or `char_wb`.
    #[error("analyzer must be one of word, char, or char_wb, got '{0}'")]
    InvalidAnalyzer(String),

    /// The normalization name is not one of `l1`, `l2` or `none`.
    #[error("norm must be one of l1, l2, or none, got '{0}'")]
    InvalidNorm(String),

    /// The n-gram range is malformed.
    #[error("ngram_range must have 2 items and each item has to be >= 1, got ({min}, {max})")]
    InvalidNgramRange {
        /// Lower bound of the range.
        min: usize,
        /// Upper bound of the range.
        max: usize,
    },

    /// A document-frequency threshold is out of its accepted range.
    #[error("{name}: {message}")]
    InvalidDocFrequency {
        /// Which threshold was rejected (`min_df` or `max_df`).
        name: &'static str,
        /// Description of the accepted range.
        message: String,
    },

    /// `max_features` was set to zero.
    #[error("'max_features' should be a positive integer")]
    InvalidMaxFeatures,

    /// A fixed vocabulary was supplied but holds no terms.
    #[error("fixed vocabulary cannot be empty")]
    EmptyVocabulary,

    /// A fixed vocabulary lists the same term twice.
    #[error("fixed vocabulary contains repeated term '{0}'")]
    DuplicateVocabularyTerm(String),

    /// Stop-word removal was requested without any source of words.
    #[error("if stop words will be discarded from the data, stop_words must be specified")]
    MissingStopWords,

    /// Stop-word removal was requested with an explicitly empty list.
    #[error("if stop words are given, they cannot be empty")]
    EmptyStopWords,

    /// A bare string other than the default marker was given as stop words.
    #[error("if stop_words is given as a string, only supported value is 'default', got '{0}'")]
    InvalidStopWordsMarker(String),

    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },
}
