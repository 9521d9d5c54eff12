//! TF-IDF vectorization engine.
//!
//! The [`Vectorizer`] consumes a fully configured analysis (preprocessor, tokenizer, stop
//! words, analyzer mode and n-gram range) and produces dense `f64` document-term
//! matrices:
//!
//! 1. **Analysis**: each document becomes a list of word or character n-grams
//! 2. **Vocabulary**: terms are sorted, pruned by document frequency and capped
//! 3. **Weighting**: counts are optionally clipped or log-scaled, multiplied by IDF and
//!    row-normalized
//!
//! Training learns the vocabulary and IDF weights once; inference reuses them.

#![warn(missing_docs)]

mod accents;
mod analyzer;
mod error;
mod vectorizer;
mod vocabulary;
pub mod weighting;

pub use accents::{BasePreprocessor, strip_accents_ascii, strip_accents_unicode};
pub use analyzer::DocumentAnalyzer;
pub use error::EngineError;
pub use vectorizer::{Vectorizer, VectorizerParams};
pub use vocabulary::{Learned, Limits, TermStats, Vocabulary, collect_stats, learn};
