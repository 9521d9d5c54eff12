//! Term -> column mapping and its construction from a training corpus.
//!
//! A learned vocabulary is built in three steps:
//! 1. Count every term's total occurrences and document frequency
//! 2. Drop terms outside the document-frequency bounds
//! 3. Keep the `max_features` most frequent of the survivors
//!
//! Columns are assigned in lexicographic term order.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tfidf_config::{ConfigError, DocFrequency};
use tracing::debug;

use crate::EngineError;

/// Ordered feature terms with a reverse index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Terms by column.
    terms: Vec<String>,
    /// Term -> column.
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Creates a vocabulary whose columns follow the order of `terms`.
    ///
    /// Fails on an empty list or a repeated term.
    pub fn fixed<I, S>(terms: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        if terms.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }
        let mut index = HashMap::with_capacity(terms.len());
        for (column, term) in terms.iter().enumerate() {
            if index.insert(term.clone(), column).is_some() {
                return Err(ConfigError::DuplicateVocabularyTerm(term.clone()));
            }
        }
        Ok(Self { terms, index })
    }

    /// Builds a vocabulary from already ordered, distinct terms.
    fn from_ordered(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(column, term)| (term.clone(), column))
            .collect();
        Self { terms, index }
    }

    /// Returns the column of `term`.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Returns the terms in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Corpus-wide statistics of one term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermStats {
    /// Total occurrences, after binary clipping.
    pub count: usize,
    /// Number of documents containing the term.
    pub df: usize,
}

/// Collects per-term statistics over analyzed documents.
///
/// With `binary`, a term counts at most once per document.
pub fn collect_stats(documents: &[Vec<String>], binary: bool) -> BTreeMap<String, TermStats> {
    let mut stats: BTreeMap<String, TermStats> = BTreeMap::new();
    for terms in documents {
        let mut in_doc: HashMap<&str, usize> = HashMap::new();
        for term in terms {
            *in_doc.entry(term.as_str()).or_default() += 1;
        }
        for (term, count) in in_doc {
            let entry = stats.entry(term.to_string()).or_default();
            entry.count += if binary { 1 } else { count };
            entry.df += 1;
        }
    }
    stats
}

/// Thresholds applied while learning a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Upper document-frequency bound.
    pub max_df: DocFrequency,
    /// Lower document-frequency bound.
    pub min_df: DocFrequency,
    /// Cap on the number of columns.
    pub max_features: Option<usize>,
}

/// A learned vocabulary and the terms that were cut from it.
#[derive(Debug, Clone)]
pub struct Learned {
    /// Surviving terms.
    pub vocabulary: Vocabulary,
    /// Terms removed by the bounds or the cap.
    pub pruned: BTreeSet<String>,
}

/// Applies `limits` to the statistics of an `n_docs` corpus.
pub fn learn(
    stats: BTreeMap<String, TermStats>,
    n_docs: usize,
    limits: Limits,
) -> Result<Learned, EngineError> {
    if stats.is_empty() {
        return Err(EngineError::EmptyVocabulary);
    }
    let max_count = limits.max_df.resolve(n_docs);
    let min_count = limits.min_df.resolve(n_docs);
    if max_count < min_count {
        return Err(EngineError::DfBoundsCross {
            max: max_count,
            min: min_count,
        });
    }

    let mut pruned = BTreeSet::new();
    let mut kept: Vec<(String, TermStats)> = Vec::with_capacity(stats.len());
    for (term, stat) in stats {
        let df = stat.df as f64;
        if df > max_count || df < min_count {
            pruned.insert(term);
        } else {
            kept.push((term, stat));
        }
    }

    if let Some(limit) = limits.max_features
        && kept.len() > limit
    {
        // Stable sort keeps lexicographic order among equal counts.
        let mut by_count: Vec<usize> = (0..kept.len()).collect();
        by_count.sort_by(|a, b| kept[*b].1.count.cmp(&kept[*a].1.count));
        let keep: BTreeSet<usize> = by_count.into_iter().take(limit).collect();
        let (capped, cut): (Vec<_>, Vec<_>) = kept
            .into_iter()
            .enumerate()
            .partition(|(i, _)| keep.contains(i));
        pruned.extend(cut.into_iter().map(|(_, (term, _))| term));
        kept = capped.into_iter().map(|(_, entry)| entry).collect();
    }

    debug!(
        kept = kept.len(),
        pruned = pruned.len(),
        max_count,
        min_count,
        "learned vocabulary"
    );
    if kept.is_empty() {
        return Err(EngineError::NoTermsRemain);
    }
    Ok(Learned {
        vocabulary: Vocabulary::from_ordered(kept.into_iter().map(|(term, _)| term).collect()),
        pruned,
    })
}
