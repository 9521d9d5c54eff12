//! Word tokenizers that reduce each token to a normalized form.
//!
//! Text is split into words with tantivy's `SimpleTokenizer`, which breaks on any
//! non-alphanumeric character. The two tokenizers then differ only in how a word is
//! reduced:
//! 1. [`LemmaTokenizer`] - noun lemmatization, case preserved
//! 2. [`StemTokenizer`] - lowercasing followed by English Snowball stemming

mod lemmatizer;

pub use lemmatizer::Lemmatizer;
use tantivy::tokenizer::{
    Language, LowerCaser, SimpleTokenizer, Stemmer, TextAnalyzer, TokenStream,
};
use tfidf_config::Reduction;

use crate::TextError;

/// Splits text into reduced word tokens.
pub trait Tokenizer: Send + Sync {
    /// Returns the tokens of `text` in order of appearance.
    ///
    /// Fails with [`TextError::EmptyText`] on empty or whitespace-only input.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TextError>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TextError> {
        (**self).tokenize(text)
    }
}

/// Returns the tokenizer that applies `reduction`.
pub fn tokenizer_for(reduction: Reduction) -> Box<dyn Tokenizer> {
    match reduction {
        Reduction::Lemma => Box::new(LemmaTokenizer::new()),
        Reduction::Stem => Box::new(StemTokenizer::new()),
    }
}

/// Runs `analyzer` over `text` and collects the token texts.
fn collect_tokens(analyzer: &TextAnalyzer, text: &str) -> Result<Vec<String>, TextError> {
    if text.trim().is_empty() {
        return Err(TextError::EmptyText);
    }
    // token_stream needs exclusive access, so each call works on its own copy
    let mut analyzer = analyzer.clone();
    let mut stream = analyzer.token_stream(text);
    let mut tokens = Vec::new();
    while stream.advance() {
        tokens.push(stream.token().text.clone());
    }
    Ok(tokens)
}

/// Tokenizer that replaces each word with its noun lemma.
#[derive(Clone)]
pub struct LemmaTokenizer {
    /// Word splitter.
    analyzer: TextAnalyzer,
    /// Per-word reduction.
    lemmatizer: Lemmatizer,
}

impl Default for LemmaTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LemmaTokenizer {
    /// Creates a lemmatizing tokenizer.
    pub fn new() -> Self {
        Self {
            analyzer: TextAnalyzer::from(SimpleTokenizer::default()),
            lemmatizer: Lemmatizer::new(),
        }
    }
}

impl Tokenizer for LemmaTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TextError> {
        Ok(collect_tokens(&self.analyzer, text)?
            .into_iter()
            .map(|word| self.lemmatizer.lemmatize(&word).into_owned())
            .collect())
    }
}

/// Tokenizer that lowercases and stems each word.
#[derive(Clone)]
pub struct StemTokenizer {
    /// Splitter, lowercaser and stemmer.
    analyzer: TextAnalyzer,
}

impl Default for StemTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl StemTokenizer {
    /// Creates an English stemming tokenizer.
    pub fn new() -> Self {
        Self {
            analyzer: TextAnalyzer::builder(SimpleTokenizer::default())
                .filter(LowerCaser)
                .filter(Stemmer::new(Language::English))
                .build(),
        }
    }
}

impl Tokenizer for StemTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TextError> {
        collect_tokens(&self.analyzer, text)
    }
}
