//! Configurable TF-IDF model.
//!
//! [`TfIdfModel`] turns a [`ModelConfig`] into a ready text pipeline:
//!
//! 1. **Validation**: mutually exclusive operations and parameter ranges are rejected
//! 2. **Preprocessing**: native lowercasing and accent stripping, then digit and
//!    punctuation removal as selected
//! 3. **Tokenization**: a lemmatizing or stemming tokenizer when selected, otherwise the
//!    vectorizer's default word pattern
//! 4. **Stop words**: none, the built-in English list, or a caller-supplied list
//!
//! Training and inference return dense matrices; [`closeness`] and [`top_terms`] give
//! textual views of them.

#![warn(missing_docs)]

mod error;
mod model;
mod pipeline;
mod similarity;

pub use error::ModelError;
pub use model::TfIdfModel;
pub use pipeline::build_preprocessor;
pub use similarity::{ScoredTerm, closeness, top_terms};
pub use tfidf_config::ModelConfig;
