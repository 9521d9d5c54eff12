//! Error types for the tfidf-model crate.

use thiserror::Error;
use tfidf_config::ConfigError;
use tfidf_engine::EngineError;
use tfidf_text::TextError;

/// Errors from building or running a [`crate::TfIdfModel`].
#[derive(Debug, Error)]
pub enum ModelError {
    /// Invalid model configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A text component could not be built.
    #[error(transparent)]
    Text(#[from] TextError),

    /// Training or inference failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
