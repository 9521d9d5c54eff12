//! Error types for the tfidf-engine crate.

use thiserror::Error;
use tfidf_config::ConfigError;
use tfidf_text::TextError;

/// Errors raised while fitting or applying a vectorizer.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid vectorizer parameters.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `train` or `infer` received no documents.
    #[error("corpus cannot be empty")]
    EmptyCorpus,

    /// `infer` was called before `train`.
    #[error("vocabulary not fitted; train the model before inference")]
    NotFitted,

    /// Training produced no terms at all.
    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,

    /// Document-frequency pruning removed every term.
    #[error("after pruning, no terms remain; try a lower min_df or a higher max_df")]
    NoTermsRemain,

    /// The resolved `max_df` count is below the resolved `min_df` count.
    #[error("max_df corresponds to {max} documents, fewer than min_df ({min})")]
    DfBoundsCross {
        /// Resolved maximum document count.
        max: f64,
        /// Resolved minimum document count.
        min: f64,
    },

    /// The tokenizer rejected a document.
    #[error("failed to tokenize document {document}: {source}")]
    Tokenize {
        /// Zero-based position of the document in its corpus.
        document: usize,
        /// Underlying tokenizer error.
        source: TextError,
    },
}
