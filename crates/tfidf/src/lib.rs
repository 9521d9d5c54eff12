//! tfidf: TF-IDF vectorization of text corpora.
//!
//! Reads one-document-per-line corpora, runs them through a configurable cleaning
//! pipeline (lowercasing, accent stripping, digit and punctuation removal, stop words,
//! lemmatization or stemming) and writes the resulting TF-IDF matrices as CSV. Settings
//! come from `.tfidf.toml` files and command-line flags.

#![warn(missing_docs)]

pub mod cli;
