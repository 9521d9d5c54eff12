//! Turns a document into the terms counted by the vectorizer.
//!
//! The word analyzer runs preprocess -> tokenize -> stop-word filter -> word n-grams.
//! The character analyzers run preprocess -> whitespace collapse -> character n-grams
//! and ignore the tokenizer and stop words.

use std::sync::LazyLock;

use regex::Regex;
use tfidf_config::{Analyzer, NgramRange};
use tfidf_text::{Preprocessor, StopWords, TextError, Tokenizer};

use crate::BasePreprocessor;

/// Default word pattern: two or more word characters.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern should compile"));

/// Runs of two or more whitespace characters.
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s+").expect("whitespace pattern should compile"));

/// The fully assembled per-document analysis.
pub struct DocumentAnalyzer {
    /// Feature unit.
    mode: Analyzer,
    /// N-gram lengths.
    ngram_range: NgramRange,
    /// Text cleaning applied first.
    preprocessor: Box<dyn Preprocessor>,
    /// Word splitter; `None` selects the default token pattern.
    tokenizer: Option<Box<dyn Tokenizer>>,
    /// Words dropped before n-gram expansion.
    stop_words: Option<StopWords>,
}

impl DocumentAnalyzer {
    /// Creates an analyzer with the vectorizer's native preprocessing and default
    /// tokenization.
    pub fn new(mode: Analyzer, ngram_range: NgramRange, base: BasePreprocessor) -> Self {
        Self {
            mode,
            ngram_range,
            preprocessor: Box::new(base),
            tokenizer: None,
            stop_words: None,
        }
    }

    /// Replaces the native preprocessing.
    pub fn set_preprocessor(&mut self, preprocessor: Box<dyn Preprocessor>) {
        self.preprocessor = preprocessor;
    }

    /// Replaces the default token pattern.
    pub fn set_tokenizer(&mut self, tokenizer: Box<dyn Tokenizer>) {
        self.tokenizer = Some(tokenizer);
    }

    /// Sets the stop words.
    pub fn set_stop_words(&mut self, stop_words: Option<StopWords>) {
        self.stop_words = stop_words;
    }

    /// Returns the stop words, if any.
    pub fn stop_words(&self) -> Option<&StopWords> {
        self.stop_words.as_ref()
    }

    /// Returns the analyzer mode.
    pub fn mode(&self) -> Analyzer {
        self.mode
    }

    /// Extracts the terms of one document, repeated once per occurrence.
    pub fn analyze(&self, document: &str) -> Result<Vec<String>, TextError> {
        let text = self.preprocessor.preprocess(document);
        match self.mode {
            Analyzer::Word => {
                let tokens = self.tokenize(&text)?;
                let tokens = match &self.stop_words {
                    Some(stop_words) => tokens
                        .into_iter()
                        .filter(|t| !stop_words.contains(t))
                        .collect(),
                    None => tokens,
                };
                Ok(word_ngrams(tokens, self.ngram_range))
            }
            Analyzer::Char => Ok(char_ngrams(&text, self.ngram_range)),
            Analyzer::CharWb => Ok(char_wb_ngrams(&text, self.ngram_range)),
        }
    }

    /// Splits preprocessed text into words.
    ///
    /// Text that cleaning left blank has no words; it never reaches the tokenizer.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TextError> {
        match &self.tokenizer {
            Some(_) if text.trim().is_empty() => Ok(Vec::new()),
            Some(tokenizer) => tokenizer.tokenize(text),
            None => Ok(TOKEN_PATTERN
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect()),
        }
    }
}

/// Expands tokens into word n-grams joined by a space, shortest first.
fn word_ngrams(tokens: Vec<String>, range: NgramRange) -> Vec<String> {
    if range.max == 1 {
        return tokens;
    }
    let mut min_n = range.min;
    let mut ngrams = Vec::new();
    if min_n == 1 {
        ngrams.extend(tokens.iter().cloned());
        min_n += 1;
    }
    for n in min_n..=range.max.min(tokens.len()) {
        ngrams.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    ngrams
}

/// Character n-grams over the whole text after whitespace collapse.
fn char_ngrams(text: &str, range: NgramRange) -> Vec<String> {
    let text = WHITESPACE_RUNS.replace_all(text, " ");
    let chars: Vec<char> = text.chars().collect();
    let mut ngrams = Vec::new();
    for n in range.min..=range.max.min(chars.len()) {
        ngrams.extend(chars.windows(n).map(|window| window.iter().collect::<String>()));
    }
    ngrams
}

/// Character n-grams inside each word, the word padded with one space on each side.
///
/// A padded word no longer than `n` contributes itself once and no longer n-grams.
fn char_wb_ngrams(text: &str, range: NgramRange) -> Vec<String> {
    let text = WHITESPACE_RUNS.replace_all(text, " ");
    let mut ngrams = Vec::new();
    for word in text.split_whitespace() {
        let padded: Vec<char> = format!(" {word} ").chars().collect();
        for n in range.min..=range.max {
            if padded.len() <= n {
                ngrams.push(padded.iter().collect());
                break;
            }
            ngrams.extend(padded.windows(n).map(|window| window.iter().collect::<String>()));
        }
    }
    ngrams
}
