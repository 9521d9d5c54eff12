//! Vectorizer parameters: analyzer mode, n-gram range, document-frequency bounds and
//! row normalization.

use std::{fmt, str};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Unit of the features the vectorizer extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Analyzer {
    /// Word n-grams.
    #[default]
    Word,
    /// Character n-grams over the whole document.
    Char,
    /// Character n-grams confined to word boundaries, words padded with a space.
    CharWb,
}

impl fmt::Display for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word => write!(f, "word"),
            Self::Char => write!(f, "char"),
            Self::CharWb => write!(f, "char_wb"),
        }
    }
}

impl str::FromStr for Analyzer {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(Self::Word),
            "char" => Ok(Self::Char),
            "char_wb" => Ok(Self::CharWb),
            _ => Err(ConfigError::InvalidAnalyzer(s.to_string())),
        }
    }
}

/// Row normalization applied after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Norm {
    /// Sum of absolute values is one.
    L1,
    /// Euclidean length is one.
    #[default]
    L2,
    /// Rows are left as weighted.
    None,
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L1 => write!(f, "l1"),
            Self::L2 => write!(f, "l2"),
            Self::None => write!(f, "none"),
        }
    }
}

impl str::FromStr for Norm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "l1" => Ok(Self::L1),
            "l2" => Ok(Self::L2),
            "none" => Ok(Self::None),
            _ => Err(ConfigError::InvalidNorm(s.to_string())),
        }
    }
}

/// Inclusive range of n-gram lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct NgramRange {
    /// Shortest n-gram length.
    pub min: usize,
    /// Longest n-gram length.
    pub max: usize,
}

impl NgramRange {
    /// Creates a range; call [`NgramRange::validate`] before use.
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Requires `1 <= min <= max`.
    pub fn validate(self) -> Result<(), ConfigError> {
        if self.min == 0 || self.max == 0 || self.min > self.max {
            return Err(ConfigError::InvalidNgramRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for NgramRange {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl From<(usize, usize)> for NgramRange {
    fn from((min, max): (usize, usize)) -> Self {
        Self::new(min, max)
    }
}

impl From<NgramRange> for (usize, usize) {
    fn from(range: NgramRange) -> Self {
        (range.min, range.max)
    }
}

/// A document-frequency threshold.
///
/// A fraction is relative to the number of training documents, a count is absolute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocFrequency {
    /// Proportion of documents.
    Fraction(f64),
    /// Number of documents.
    Count(usize),
}

impl DocFrequency {
    /// Converts the threshold into a document count for a corpus of `n_docs`.
    pub fn resolve(self, n_docs: usize) -> f64 {
        match self {
            Self::Fraction(f) => f * n_docs as f64,
            Self::Count(c) => c as f64,
        }
    }

    /// Validates a `min_df` threshold: `[0.0, 1.0)` as a fraction, any count.
    pub fn validate_min(self) -> Result<(), ConfigError> {
        match self {
            Self::Fraction(f) if !(0.0..1.0).contains(&f) => {
                Err(ConfigError::InvalidDocFrequency {
                    name: "min_df",
                    message: "if float, min_df should be in range >= 0.0 and < 1.0".into(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Validates a `max_df` threshold: `(0.0, 1.0]` as a fraction, positive count.
    pub fn validate_max(self) -> Result<(), ConfigError> {
        match self {
            Self::Fraction(f) if !(f > 0.0 && f <= 1.0) => Err(ConfigError::InvalidDocFrequency {
                name: "max_df",
                message: "if float, max_df should be in range > 0.0 and <= 1.0".into(),
            }),
            Self::Count(0) => Err(ConfigError::InvalidDocFrequency {
                name: "max_df",
                message: "if int, max_df should be greater than 0".into(),
            }),
            _ => Ok(()),
        }
    }

    /// Builds a count threshold from a signed integer, rejecting negatives.
    pub fn from_signed(name: &'static str, value: i64) -> Result<Self, ConfigError> {
        usize::try_from(value)
            .map(Self::Count)
            .map_err(|_| ConfigError::InvalidDocFrequency {
                name,
                message: format!("if int, {name} should be greater than equal to 0, got {value}"),
            })
    }
}

impl fmt::Display for DocFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction(v) => write!(f, "{v:?}"),
            Self::Count(c) => write!(f, "{c}"),
        }
    }
}

impl str::FromStr for DocFrequency {
    type Err = ConfigError;

    /// Parses `"0.5"` as a fraction and `"3"` as a count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidDocFrequency {
            name: "df",
            message: format!("expected a fraction or a document count, got '{s}'"),
        };
        if s.contains(['.', 'e', 'E']) {
            s.parse::<f64>().map(Self::Fraction).map_err(|_| invalid())
        } else {
            let value = s.parse::<i64>().map_err(|_| invalid())?;
            Self::from_signed("df", value)
        }
    }
}
