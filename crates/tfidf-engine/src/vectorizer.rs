//! The TF-IDF vectorizer: learns a vocabulary and IDF weights, then maps documents to
//! weighted, normalized rows.

use std::collections::BTreeSet;

use ndarray::{Array1, Array2};
use tfidf_config::{
    Analyzer, ConfigError, DocFrequency, ModelConfig, NgramRange, Norm, StripAccents, TextOp,
};
use tfidf_text::{Preprocessor, StopWords, Tokenizer};
use tracing::{debug, info};

use crate::{
    BasePreprocessor, EngineError,
    analyzer::DocumentAnalyzer,
    vocabulary::{self, Limits, Vocabulary},
    weighting,
};

/// Parameters of a [`Vectorizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct VectorizerParams {
    /// Lowercase documents in the native preprocessing.
    pub lowercase: bool,
    /// Accent stripping in the native preprocessing.
    pub strip_accents: Option<StripAccents>,
    /// Feature unit.
    pub analyzer: Analyzer,
    /// N-gram lengths.
    pub ngram_range: NgramRange,
    /// Upper document-frequency bound.
    pub max_df: DocFrequency,
    /// Lower document-frequency bound.
    pub min_df: DocFrequency,
    /// Cap on the number of columns.
    pub max_features: Option<usize>,
    /// Fixed vocabulary, in column order.
    pub vocabulary: Option<Vec<String>>,
    /// Clip counts to one.
    pub binary: bool,
    /// Row normalization.
    pub norm: Norm,
    /// Weight by IDF.
    pub use_idf: bool,
    /// Smooth IDF weights.
    pub smooth_idf: bool,
    /// Use `1 + ln(tf)`.
    pub sublinear_tf: bool,
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_accents: None,
            analyzer: Analyzer::Word,
            ngram_range: NgramRange::default(),
            max_df: DocFrequency::Fraction(1.0),
            min_df: DocFrequency::Count(1),
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

impl VectorizerParams {
    /// Derives the parameters a model configuration asks for.
    ///
    /// Lowercasing follows [`TextOp::Lower`] and accent stripping follows the selected
    /// strip operation.
    pub fn from_config(config: &ModelConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            lowercase: config.ops.contains(TextOp::Lower),
            strip_accents: config.ops.strip_accents()?,
            analyzer: config.analyzer,
            ngram_range: config.ngram_range,
            max_df: config.max_df,
            min_df: config.min_df,
            max_features: config.max_features,
            vocabulary: config.vocabulary.clone(),
            binary: config.binary,
            norm: config.norm,
            use_idf: config.use_idf,
            smooth_idf: config.smooth_idf,
            sublinear_tf: config.sublinear_tf,
        })
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ngram_range.validate()?;
        self.max_df.validate_max()?;
        self.min_df.validate_min()?;
        if self.max_features == Some(0) {
            return Err(ConfigError::InvalidMaxFeatures);
        }
        Ok(())
    }

    /// The preprocessing applied when no custom preprocessor is installed.
    pub fn base_preprocessor(&self) -> BasePreprocessor {
        BasePreprocessor::new(self.lowercase, self.strip_accents)
    }
}

/// State produced by training.
#[derive(Debug, Clone)]
struct Fitted {
    /// Term -> column.
    vocabulary: Vocabulary,
    /// Per-column IDF weights, when IDF is enabled.
    idf: Option<Array1<f64>>,
    /// Terms removed while learning the vocabulary.
    pruned: BTreeSet<String>,
}

/// A TF-IDF vectorizer.
///
/// [`Vectorizer::fit_transform`] learns the vocabulary and IDF weights;
/// [`Vectorizer::transform`] reuses them. Terms unseen at training time are ignored.
pub struct Vectorizer {
    /// Parameters fixed at construction.
    params: VectorizerParams,
    /// Document -> terms.
    analyzer: DocumentAnalyzer,
    /// Vocabulary supplied up front.
    fixed_vocabulary: Option<Vocabulary>,
    /// Training output.
    fitted: Option<Fitted>,
}

impl Vectorizer {
    /// Creates an untrained vectorizer with native preprocessing and the default token
    /// pattern.
    pub fn new(params: VectorizerParams) -> Result<Self, EngineError> {
        params.validate()?;
        let fixed_vocabulary = params
            .vocabulary
            .as_ref()
            .map(|terms| Vocabulary::fixed(terms.iter().cloned()))
            .transpose()?;
        let analyzer = DocumentAnalyzer::new(
            params.analyzer,
            params.ngram_range,
            params.base_preprocessor(),
        );
        Ok(Self {
            params,
            analyzer,
            fixed_vocabulary,
            fitted: None,
        })
    }

    /// Replaces the native preprocessing.
    #[must_use]
    pub fn with_preprocessor(mut self, preprocessor: Box<dyn Preprocessor>) -> Self {
        self.analyzer.set_preprocessor(preprocessor);
        self
    }

    /// Replaces the default token pattern. Ignored by the character analyzers.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.analyzer.set_tokenizer(tokenizer);
        self
    }

    /// Sets the stop words. Ignored by the character analyzers.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: Option<StopWords>) -> Self {
        self.analyzer.set_stop_words(stop_words);
        self
    }

    /// Returns the parameters.
    pub fn params(&self) -> &VectorizerParams {
        &self.params
    }

    /// Returns the stop words in effect.
    pub fn stop_words(&self) -> Option<&StopWords> {
        self.analyzer.stop_words()
    }

    /// Returns true once [`Vectorizer::fit_transform`] has succeeded.
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Learns the vocabulary and IDF weights from `documents` and returns their matrix.
    ///
    /// On failure the previous training state, if any, is kept.
    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        documents: &[S],
    ) -> Result<Array2<f64>, EngineError> {
        let analyzed = self.analyze_all(documents)?;
        let (vocabulary, pruned) = match &self.fixed_vocabulary {
            Some(fixed) => (fixed.clone(), BTreeSet::new()),
            None => {
                let stats = vocabulary::collect_stats(&analyzed, self.params.binary);
                let learned = vocabulary::learn(
                    stats,
                    analyzed.len(),
                    Limits {
                        max_df: self.params.max_df,
                        min_df: self.params.min_df,
                        max_features: self.params.max_features,
                    },
                )?;
                (learned.vocabulary, learned.pruned)
            }
        };

        let mut weights = self.count(&analyzed, &vocabulary);
        let idf = self
            .params
            .use_idf
            .then(|| weighting::idf(&weights, self.params.smooth_idf));
        self.weigh(&mut weights, idf.as_ref());
        info!(
            documents = analyzed.len(),
            features = vocabulary.len(),
            pruned = pruned.len(),
            "trained vectorizer"
        );
        self.fitted = Some(Fitted {
            vocabulary,
            idf,
            pruned,
        });
        Ok(weights)
    }

    /// Maps `documents` onto the trained vocabulary.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Array2<f64>, EngineError> {
        let fitted = self.fitted.as_ref().ok_or(EngineError::NotFitted)?;
        let analyzed = self.analyze_all(documents)?;
        let mut weights = self.count(&analyzed, &fitted.vocabulary);
        self.weigh(&mut weights, fitted.idf.as_ref());
        debug!(documents = analyzed.len(), "transformed documents");
        Ok(weights)
    }

    /// Returns the feature terms in column order.
    pub fn feature_names(&self) -> Result<&[String], EngineError> {
        Ok(self.fitted()?.vocabulary.terms())
    }

    /// Returns the terms removed by document-frequency bounds or the feature cap.
    pub fn pruned_terms(&self) -> Result<&BTreeSet<String>, EngineError> {
        Ok(&self.fitted()?.pruned)
    }

    /// Returns the per-column IDF weights, or `None` when IDF is disabled.
    pub fn idf(&self) -> Result<Option<&Array1<f64>>, EngineError> {
        Ok(self.fitted()?.idf.as_ref())
    }

    /// Returns the training state.
    fn fitted(&self) -> Result<&Fitted, EngineError> {
        self.fitted.as_ref().ok_or(EngineError::NotFitted)
    }

    /// Analyzes every document, failing on an empty corpus or a rejected document.
    fn analyze_all<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Vec<String>>, EngineError> {
        if documents.is_empty() {
            return Err(EngineError::EmptyCorpus);
        }
        documents
            .iter()
            .enumerate()
            .map(|(document, text)| {
                self.analyzer
                    .analyze(text.as_ref())
                    .map_err(|source| EngineError::Tokenize { document, source })
            })
            .collect()
    }

    /// Builds the raw count matrix over `vocabulary`, ignoring unknown terms.
    fn count(&self, analyzed: &[Vec<String>], vocabulary: &Vocabulary) -> Array2<f64> {
        let mut counts = Array2::zeros((analyzed.len(), vocabulary.len()));
        for (row, terms) in analyzed.iter().enumerate() {
            for term in terms {
                if let Some(column) = vocabulary.get(term) {
                    counts[[row, column]] += 1.0;
                }
            }
        }
        if self.params.binary {
            weighting::binarize(&mut counts);
        }
        counts
    }

    /// Turns counts into normalized TF-IDF weights in place.
    fn weigh(&self, weights: &mut Array2<f64>, idf: Option<&Array1<f64>>) {
        if self.params.sublinear_tf {
            weighting::sublinear_tf(weights);
        }
        if let Some(idf) = idf {
            weighting::apply_idf(weights, idf);
        }
        weighting::normalize_rows(weights, self.params.norm);
    }
}
