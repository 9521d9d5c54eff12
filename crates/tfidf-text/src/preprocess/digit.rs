//! Digit removal.

use std::sync::LazyLock;

use regex::Regex;

use super::{Preprocessor, collapse_spaces};

/// Maximal runs of ASCII digits.
static DIGIT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit pattern should compile"));

/// Deletes every run of ASCII digits, then collapses the spaces left behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitPreprocessor;

impl DigitPreprocessor {
    /// Creates a digit remover.
    pub fn new() -> Self {
        Self
    }
}

impl Preprocessor for DigitPreprocessor {
    fn preprocess(&self, text: &str) -> String {
        collapse_spaces(&DIGIT_RUNS.replace_all(text, ""))
    }
}
