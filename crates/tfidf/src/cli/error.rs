//! Error types for the `tfidf` binary.

use std::{io, path::PathBuf};

use thiserror::Error;
use tfidf_config::ConfigError;
use tfidf_model::ModelError;

/// Failures while reading a corpus file.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The file could not be read.
    #[error("failed to read corpus {path}: {source}")]
    Read {
        /// Corpus path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A line is not valid UTF-8 text.
    #[error("{path}: line {line} is not valid UTF-8 text")]
    NotText {
        /// Corpus path.
        path: PathBuf,
        /// One-based line number.
        line: usize,
    },
}

/// Failures while writing CSV results.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing a record failed.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Labels do not match the matrix shape.
    #[error("{axis} labels: expected {expected}, got {actual}")]
    Shape {
        /// `"row"` or `"column"`.
        axis: &'static str,
        /// Matrix extent along the axis.
        expected: usize,
        /// Number of labels supplied.
        actual: usize,
    },
}

/// Any failure of a `tfidf` run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A corpus could not be read.
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// Model construction, training or inference failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Results could not be written.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The current directory is unavailable.
    #[error("could not determine current directory: {0}")]
    CurrentDir(io::Error),

    /// The JSON summary could not be serialized.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
