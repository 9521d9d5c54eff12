//! Operation catalog.
//!
//! A [`TextOp`] names one text-cleaning step. An [`OpSet`] is the immutable set of
//! steps chosen for a model; it is evaluated once at construction to decide which
//! preprocessors are chained, which tokenizer is installed and whether stop words
//! are filtered.

use std::{fmt, str};

use serde::{Deserialize, Deserializer, de};

use crate::ConfigError;

/// A text-cleaning operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextOp {
    /// Lowercase every document.
    Lower,
    /// Strip accents by unicode decomposition, keeping non-ASCII base letters.
    UnicodeStrip,
    /// Strip accents and drop every character without an ASCII decomposition.
    AsciiStrip,
    /// Remove stop words after tokenization.
    StopWords,
    /// Reduce tokens to their noun lemma.
    Lemmatize,
    /// Reduce tokens to their algorithmic stem.
    Stem,
    /// Remove ASCII digits.
    Digits,
    /// Remove punctuation, apostrophes included.
    Punctuation,
}

impl TextOp {
    /// Every operation, in catalog order.
    pub const ALL: [Self; 8] = [
        Self::Lower,
        Self::UnicodeStrip,
        Self::AsciiStrip,
        Self::StopWords,
        Self::Lemmatize,
        Self::Stem,
        Self::Digits,
        Self::Punctuation,
    ];

    /// Bit used for this operation inside an [`OpSet`].
    const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Returns a brief description of the operation.
    pub fn description(self) -> &'static str {
        match self {
            Self::Lower => "Lowercase the entire corpus",
            Self::UnicodeStrip => "Strip accents, keep other unicode characters",
            Self::AsciiStrip => "Strip accents and non-ASCII characters",
            Self::StopWords => "Remove stop words",
            Self::Lemmatize => "Reduce words to their lemma",
            Self::Stem => "Reduce words to their stem",
            Self::Digits => "Remove digits",
            Self::Punctuation => "Remove punctuation",
        }
    }
}

impl fmt::Display for TextOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lower => "lower",
            Self::UnicodeStrip => "unicode",
            Self::AsciiStrip => "ascii",
            Self::StopWords => "stop_words",
            Self::Lemmatize => "lemmatize",
            Self::Stem => "stem",
            Self::Digits => "digits",
            Self::Punctuation => "punctuation",
        };
        f.write_str(name)
    }
}

impl str::FromStr for TextOp {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "lower" | "lowercase" => Ok(Self::Lower),
            "unicode" | "unicode_strip" => Ok(Self::UnicodeStrip),
            "ascii" | "ascii_strip" => Ok(Self::AsciiStrip),
            "stop_words" | "stopwords" => Ok(Self::StopWords),
            "lemmatize" | "lemma" => Ok(Self::Lemmatize),
            "stem" => Ok(Self::Stem),
            "digits" => Ok(Self::Digits),
            "punctuation" | "punctuations" | "punc" => Ok(Self::Punctuation),
            _ => Err(ConfigError::UnknownOp(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for TextOp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// Accent-stripping mode selected by an [`OpSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripAccents {
    /// Decompose and keep only ASCII characters.
    Ascii,
    /// Decompose and drop combining marks.
    Unicode,
}

/// Per-token reduction selected by an [`OpSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Dictionary-style noun lemma.
    Lemma,
    /// Algorithmic stem.
    Stem,
}

/// Immutable set of operations for one model.
///
/// Stored as a bit set so membership tests are constant time and the set is `Copy`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OpSet {
    /// One bit per [`TextOp`].
    bits: u8,
}

impl OpSet {
    /// Creates an empty set, which yields a pass-through pipeline.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Returns a copy of this set with `op` added.
    #[must_use]
    pub const fn with(self, op: TextOp) -> Self {
        Self {
            bits: self.bits | op.bit(),
        }
    }

    /// Returns true if `op` is part of the set.
    pub const fn contains(self, op: TextOp) -> bool {
        self.bits & op.bit() != 0
    }

    /// Returns true if no operation is selected.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates the selected operations in catalog order.
    pub fn iter(self) -> impl Iterator<Item = TextOp> {
        TextOp::ALL.into_iter().filter(move |op| self.contains(*op))
    }

    /// Checks the mutual-exclusion rules of the catalog.
    ///
    /// Fails when both `Lemmatize` and `Stem`, or both `AsciiStrip` and `UnicodeStrip`,
    /// are selected.
    pub fn validate(self) -> Result<(), ConfigError> {
        let exclusive = [
            (TextOp::Lemmatize, TextOp::Stem),
            (TextOp::AsciiStrip, TextOp::UnicodeStrip),
        ];
        for (first, second) in exclusive {
            if self.contains(first) && self.contains(second) {
                return Err(ConfigError::ExclusiveOps { first, second });
            }
        }
        Ok(())
    }

    /// Returns the accent-stripping mode, if any.
    pub fn strip_accents(self) -> Result<Option<StripAccents>, ConfigError> {
        self.validate()?;
        Ok(if self.contains(TextOp::AsciiStrip) {
            Some(StripAccents::Ascii)
        } else if self.contains(TextOp::UnicodeStrip) {
            Some(StripAccents::Unicode)
        } else {
            None
        })
    }

    /// Returns the per-token reduction, if any.
    pub fn reduction(self) -> Result<Option<Reduction>, ConfigError> {
        self.validate()?;
        Ok(if self.contains(TextOp::Lemmatize) {
            Some(Reduction::Lemma)
        } else if self.contains(TextOp::Stem) {
            Some(Reduction::Stem)
        } else {
            None
        })
    }
}

impl FromIterator<TextOp> for OpSet {
    fn from_iter<I: IntoIterator<Item = TextOp>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl<const N: usize> From<[TextOp; N]> for OpSet {
    fn from(ops: [TextOp; N]) -> Self {
        ops.into_iter().collect()
    }
}

impl fmt::Debug for OpSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for OpSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|op| op.to_string()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

impl<'de> Deserialize<'de> for OpSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ops = Vec::<TextOp>::deserialize(deserializer)?;
        Ok(ops.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_set_is_valid() {
        let ops = OpSet::empty();
        assert!(ops.is_empty());
        assert!(ops.validate().is_ok());
        assert_eq!(ops.strip_accents().unwrap(), None);
        assert_eq!(ops.reduction().unwrap(), None);
    }

    #[test]
    fn lemmatize_and_stem_conflict() {
        let ops = OpSet::from([TextOp::Lemmatize, TextOp::Stem]);
        let err = ops.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ExclusiveOps {
                first: TextOp::Lemmatize,
                second: TextOp::Stem
            }
        ));
        assert!(err.to_string().contains("cannot be applied together"));
    }

    #[test]
    fn ascii_and_unicode_conflict() {
        let ops = OpSet::from([TextOp::AsciiStrip, TextOp::UnicodeStrip, TextOp::Lower]);
        assert!(ops.validate().is_err());
        assert!(ops.strip_accents().is_err());
    }

    #[test]
    fn selects_strip_mode_and_reduction() {
        let ops = OpSet::from([TextOp::AsciiStrip, TextOp::Stem]);
        assert_eq!(ops.strip_accents().unwrap(), Some(StripAccents::Ascii));
        assert_eq!(ops.reduction().unwrap(), Some(Reduction::Stem));

        let ops = OpSet::from([TextOp::UnicodeStrip, TextOp::Lemmatize]);
        assert_eq!(ops.strip_accents().unwrap(), Some(StripAccents::Unicode));
        assert_eq!(ops.reduction().unwrap(), Some(Reduction::Lemma));
    }

    #[test]
    fn membership_is_exact() {
        let ops = OpSet::from([TextOp::Digits, TextOp::Punctuation]);
        assert!(ops.contains(TextOp::Digits));
        assert!(ops.contains(TextOp::Punctuation));
        assert!(!ops.contains(TextOp::Lower));
        assert_eq!(
            ops.iter().collect::<Vec<_>>(),
            vec![TextOp::Digits, TextOp::Punctuation]
        );
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("LOWER".parse::<TextOp>().unwrap(), TextOp::Lower);
        assert_eq!("stop-words".parse::<TextOp>().unwrap(), TextOp::StopWords);
        assert_eq!("punctuations".parse::<TextOp>().unwrap(), TextOp::Punctuation);
        assert!("uppercase".parse::<TextOp>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for op in TextOp::ALL {
            assert_eq!(op.to_string().parse::<TextOp>().unwrap(), op);
        }
    }

    #[test]
    fn display_set() {
        let ops = OpSet::from([TextOp::Stem, TextOp::Lower]);
        assert_eq!(ops.to_string(), "{lower, stem}");
    }
}
