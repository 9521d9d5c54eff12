//! The configured TF-IDF model.

use std::collections::BTreeSet;

use ndarray::Array2;
use tfidf_config::{ModelConfig, OpSet};
use tfidf_engine::{Vectorizer, VectorizerParams};
use tfidf_text::{StopWords, resolve_stop_words, tokenizer_for};
use tracing::{debug, info};

use crate::{ModelError, pipeline::build_preprocessor};

/// A TF-IDF model whose text pipeline is derived from an operation set.
///
/// Construction validates the configuration and resolves every component once:
/// the preprocessing chain, the tokenizer override and the stop words. The model then
/// runs any number of independent [`TfIdfModel::train`] and [`TfIdfModel::infer`]
/// calls. A failed call leaves the model usable.
pub struct TfIdfModel {
    /// Configuration the model was built from.
    config: ModelConfig,
    /// The vectorizer owning the resolved pipeline.
    vectorizer: Vectorizer,
}

impl TfIdfModel {
    /// Builds a model from `config`.
    ///
    /// Fails on mutually exclusive operations, out-of-range parameters, a missing or
    /// empty stop-word list while stop-word removal is selected, or a bad fixed
    /// vocabulary.
    pub fn new(config: ModelConfig) -> Result<Self, ModelError> {
        config.validate()?;
        let params = VectorizerParams::from_config(&config)?;
        let preprocessor = build_preprocessor(config.ops, params.base_preprocessor())?;
        let stop_words = resolve_stop_words(config.ops, config.stop_words.as_ref())?;
        let reduction = config.ops.reduction()?;

        debug!(
            ops = %config.ops,
            stages = preprocessor.len(),
            stop_words = stop_words.as_ref().map_or(0, StopWords::len),
            ?reduction,
            "assembled text pipeline"
        );

        let mut vectorizer = Vectorizer::new(params)?
            .with_preprocessor(Box::new(preprocessor))
            .with_stop_words(stop_words);
        if let Some(reduction) = reduction {
            vectorizer = vectorizer.with_tokenizer(tokenizer_for(reduction));
        }
        Ok(Self { config, vectorizer })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Returns the selected operations.
    pub fn ops(&self) -> OpSet {
        self.config.ops
    }

    /// Returns the effective stop words, or `None` when stop-word removal is off.
    pub fn stop_words(&self) -> Option<&StopWords> {
        self.vectorizer.stop_words()
    }

    /// Learns the vocabulary from `corpus` and returns its weighted matrix, one row per
    /// document in input order.
    pub fn train<S: AsRef<str>>(&mut self, corpus: &[S]) -> Result<Array2<f64>, ModelError> {
        let weights = self.vectorizer.fit_transform(corpus)?;
        info!(
            rows = weights.nrows(),
            columns = weights.ncols(),
            "trained model"
        );
        Ok(weights)
    }

    /// Weights `corpus` with the vocabulary and IDF of the last successful training.
    pub fn infer<S: AsRef<str>>(&self, corpus: &[S]) -> Result<Array2<f64>, ModelError> {
        Ok(self.vectorizer.transform(corpus)?)
    }

    /// Returns the feature terms; position `i` names column `i`.
    pub fn feature_names(&self) -> Result<&[String], ModelError> {
        Ok(self.vectorizer.feature_names()?)
    }

    /// Returns the terms dropped by document-frequency bounds or the feature cap.
    pub fn pruned_terms(&self) -> Result<&BTreeSet<String>, ModelError> {
        Ok(self.vectorizer.pruned_terms()?)
    }
}
