//! Error types for the tfidf-text crate.

use thiserror::Error;

/// Call-time validation failures of preprocessors and tokenizers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A tokenizer received empty or whitespace-only text.
    #[error("text to tokenize cannot be empty")]
    EmptyText,

    /// A preprocessor chain was built from an empty list.
    #[error("list of preprocessors cannot be empty")]
    EmptyChain,
}
