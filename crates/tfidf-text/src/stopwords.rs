//! Stop-word sets and their resolution from a model's operations.
//!
//! The built-in list is the English list of the `stop-words` crate. Explicit lists are
//! kept verbatim, so matching against them is case-sensitive.

use std::collections::HashSet;

use stop_words::LANGUAGE;
use tfidf_config::{ConfigError, OpSet, StopWordsSpec, TextOp};

/// A set of words dropped from the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    /// Member words.
    words: HashSet<String>,
}

impl StopWords {
    /// Returns the built-in English list.
    pub fn english() -> Self {
        stop_words::get(LANGUAGE::English).iter().copied().collect()
    }

    /// Returns true if `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Resolves the stop words a model filters with.
///
/// Without [`TextOp::StopWords`] in `ops` the source is ignored and no filtering
/// happens. With it, a source is required: the default marker selects
/// [`StopWords::english`] and an explicit list is used exactly as given.
pub fn resolve_stop_words(
    ops: OpSet,
    spec: Option<&StopWordsSpec>,
) -> Result<Option<StopWords>, ConfigError> {
    if !ops.contains(TextOp::StopWords) {
        return Ok(None);
    }
    match spec {
        None => Err(ConfigError::MissingStopWords),
        Some(StopWordsSpec::Default) => Ok(Some(StopWords::english())),
        Some(StopWordsSpec::Words(words)) if words.is_empty() => {
            Err(ConfigError::EmptyStopWords)
        }
        Some(StopWordsSpec::Words(words)) => Ok(Some(words.iter().cloned().collect())),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn with_stop_words() -> OpSet {
        OpSet::empty().with(TextOp::StopWords)
    }

    #[test]
    fn english_list_is_populated() {
        let words = StopWords::english();
        assert!(!words.is_empty());
        assert!(words.contains("the"));
        assert!(words.contains("and"));
        assert!(!words.contains("tokenizer"));
    }

    #[test]
    fn op_absent_means_no_filtering() {
        let spec = StopWordsSpec::Words(vec!["but".into()]);
        assert_eq!(resolve_stop_words(OpSet::empty(), Some(&spec)).unwrap(), None);
        assert_eq!(resolve_stop_words(OpSet::empty(), None).unwrap(), None);
    }

    #[test]
    fn default_marker_selects_builtin_list() {
        let resolved = resolve_stop_words(with_stop_words(), Some(&StopWordsSpec::Default));
        assert_eq!(resolved.unwrap(), Some(StopWords::english()));

        let sole_marker = StopWordsSpec::from_words(["default"]);
        let resolved = resolve_stop_words(with_stop_words(), Some(&sole_marker));
        assert_eq!(resolved.unwrap(), Some(StopWords::english()));
    }

    #[test]
    fn explicit_list_is_used_verbatim() {
        let spec = StopWordsSpec::from_words(["default", "dummy"]);
        let resolved = resolve_stop_words(with_stop_words(), Some(&spec))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.sorted(), vec!["default", "dummy"]);
        assert!(!resolved.contains("the"));

        let spec = StopWordsSpec::from_words(["but", "and"]);
        let resolved = resolve_stop_words(with_stop_words(), Some(&spec))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.sorted(), vec!["and", "but"]);
    }

    #[test]
    fn explicit_list_is_case_sensitive() {
        let words: StopWords = ["But"].into_iter().collect();
        assert!(words.contains("But"));
        assert!(!words.contains("but"));
    }

    #[test]
    fn missing_source_is_an_error() {
        assert!(matches!(
            resolve_stop_words(with_stop_words(), None),
            Err(ConfigError::MissingStopWords)
        ));
    }

    #[test]
    fn empty_list_is_an_error() {
        let spec = StopWordsSpec::Words(Vec::new());
        assert!(matches!(
            resolve_stop_words(with_stop_words(), Some(&spec)),
            Err(ConfigError::EmptyStopWords)
        ));
    }
}
