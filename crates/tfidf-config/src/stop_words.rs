//! Caller-supplied stop-word source.

use std::str;

use serde::Deserialize;

use crate::ConfigError;

/// The marker that selects the built-in English stop-word list.
pub const DEFAULT_STOP_WORDS_MARKER: &str = "default";

/// Where the stop words for a model come from.
///
/// The marker only selects the built-in list when it is the sole value: a list such as
/// `["default", "dummy"]` is used verbatim and is not merged with the built-in words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopWordsSpec {
    /// The built-in English list.
    Default,
    /// An explicit list, used exactly as given.
    Words(Vec<String>),
}

impl StopWordsSpec {
    /// Interprets a bare string value. Only the marker is accepted.
    pub fn from_marker(value: &str) -> Result<Self, ConfigError> {
        if value == DEFAULT_STOP_WORDS_MARKER {
            Ok(Self::Default)
        } else {
            Err(ConfigError::InvalidStopWordsMarker(value.to_string()))
        }
    }

    /// Interprets an explicit list. A list whose only element is the marker expands to
    /// the built-in list; any other list is kept as is.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        match words.as_slice() {
            [only] if only == DEFAULT_STOP_WORDS_MARKER => Self::Default,
            _ => Self::Words(words),
        }
    }
}

impl str::FromStr for StopWordsSpec {
    type Err = ConfigError;

    /// Parses a comma-separated word list, e.g. `"but,and"`, or the marker `"default"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect();
        Ok(Self::from_words(words))
    }
}

/// Raw TOML shape: either a bare string or an array of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawStopWords {
    /// `stop_words = "default"`
    One(String),
    /// `stop_words = ["but", "and"]`
    Many(Vec<String>),
}

impl TryFrom<RawStopWords> for StopWordsSpec {
    type Error = ConfigError;

    fn try_from(raw: RawStopWords) -> Result<Self, Self::Error> {
        match raw {
            RawStopWords::One(value) => Self::from_marker(&value),
            RawStopWords::Many(words) => Ok(Self::from_words(words)),
        }
    }
}
