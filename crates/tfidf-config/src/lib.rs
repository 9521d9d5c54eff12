//! Configuration system for tfidf.
//!
//! Holds the operation catalog ([`TextOp`], [`OpSet`]), the vectorizer parameters and
//! the resolved [`ModelConfig`]. Configuration files named `.tfidf.toml` are discovered
//! by walking up from the current directory, with `~/.tfidf.toml` as the global config of
//! lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod ops;
mod params;
mod parse;
mod stop_words;

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use ops::{OpSet, Reduction, StripAccents, TextOp};
pub use params::{Analyzer, DocFrequency, NgramRange, Norm};
pub use parse::{
    RawConfig, RawDocFrequency, RawModelSettings, RawOutputSettings, parse_config_file,
    parse_config_str,
};
pub use stop_words::{DEFAULT_STOP_WORDS_MARKER, RawStopWords, StopWordsSpec};

/// Top-level merged configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Model construction parameters.
    pub model: ModelConfig,
    /// Output settings for the command-line front end.
    pub output: OutputSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.tfidf.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths, highest
    /// precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }
}

/// Output settings.
#[derive(Debug, Clone)]
pub struct OutputSettings {
    /// Directory receiving CSV results; nothing is written when unset.
    pub dir: Option<PathBuf>,
    /// Number of top-weighted terms shown per document.
    pub top_terms: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: None,
            top_terms: 5,
        }
    }
}

/// Everything needed to construct a TF-IDF model.
///
/// Built with [`ModelConfig::new`] and the `with_*` methods, or merged from config
/// files. [`ModelConfig::validate`] checks every parameter range; stop-word resolution
/// is checked separately because it needs the built-in word list.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Selected text operations.
    pub ops: OpSet,
    /// Feature unit.
    pub analyzer: Analyzer,
    /// Stop-word source; only consulted when `ops` contains `StopWords`.
    pub stop_words: Option<StopWordsSpec>,
    /// Range of n-gram lengths.
    pub ngram_range: NgramRange,
    /// Terms above this document frequency are pruned.
    pub max_df: DocFrequency,
    /// Terms below this document frequency are pruned.
    pub min_df: DocFrequency,
    /// Keep only this many highest-frequency terms.
    pub max_features: Option<usize>,
    /// Fixed vocabulary; disables pruning when set.
    pub vocabulary: Option<Vec<String>>,
    /// Clip term counts to one.
    pub binary: bool,
    /// Row normalization.
    pub norm: Norm,
    /// Multiply term frequencies by IDF.
    pub use_idf: bool,
    /// Add one to document frequencies, as if an extra document held every term.
    pub smooth_idf: bool,
    /// Replace `tf` with `1 + ln(tf)`.
    pub sublinear_tf: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            ops: OpSet::empty(),
            analyzer: Analyzer::Word,
            stop_words: None,
            ngram_range: NgramRange::default(),
            max_df: DocFrequency::Fraction(1.0),
            min_df: DocFrequency::Fraction(0.0),
            max_features: None,
            vocabulary: None,
            binary: false,
            norm: Norm::L2,
            use_idf: true,
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

impl ModelConfig {
    /// Creates a configuration with default parameters for the given operations.
    pub fn new(ops: impl Into<OpSet>) -> Self {
        Self {
            ops: ops.into(),
            ..Self::default()
        }
    }

    /// Sets the analyzer mode.
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: Analyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Sets the stop-word source.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWordsSpec) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Sets the n-gram range.
    #[must_use]
    pub fn with_ngram_range(mut self, min: usize, max: usize) -> Self {
        self.ngram_range = NgramRange::new(min, max);
        self
    }

    /// Sets both document-frequency bounds.
    #[must_use]
    pub fn with_df(mut self, min_df: DocFrequency, max_df: DocFrequency) -> Self {
        self.min_df = min_df;
        self.max_df = max_df;
        self
    }

    /// Caps the vocabulary size.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Fixes the vocabulary.
    #[must_use]
    pub fn with_vocabulary<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = Some(terms.into_iter().map(Into::into).collect());
        self
    }

    /// Enables binary term frequencies.
    #[must_use]
    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    /// Sets the row normalization.
    #[must_use]
    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    /// Enables sublinear term frequencies.
    #[must_use]
    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    /// Validates the operation set and every numeric parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ops.validate()?;
        self.ngram_range.validate()?;
        self.max_df.validate_max()?;
        self.min_df.validate_min()?;

        if self.max_features == Some(0) {
            return Err(ConfigError::InvalidMaxFeatures);
        }

        if let Some(ref vocabulary) = self.vocabulary {
            if vocabulary.is_empty() {
                return Err(ConfigError::EmptyVocabulary);
            }
            let mut seen = HashSet::new();
            for term in vocabulary {
                if !seen.insert(term.as_str()) {
                    return Err(ConfigError::DuplicateVocabularyTerm(term.clone()));
                }
            }
        }

        Ok(())
    }
}
