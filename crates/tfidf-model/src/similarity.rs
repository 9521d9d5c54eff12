//! Closeness and ranking views over a weighted matrix.

use std::cmp::Ordering;

use ndarray::{Array2, ArrayView1, Axis};
use serde::Serialize;

/// Pairwise cosine similarity between the vectors along `axis`.
///
/// `Axis(0)` compares rows (documents), `Axis(1)` compares columns (terms). All-zero
/// vectors have similarity zero with everything, themselves included.
pub fn closeness(weights: &Array2<f64>, axis: Axis) -> Array2<f64> {
    let mut vectors = if axis == Axis(0) {
        weights.to_owned()
    } else {
        weights.t().to_owned()
    };
    for mut vector in vectors.rows_mut() {
        let length = vector.dot(&vector).sqrt();
        if length > 0.0 {
            vector /= length;
        }
    }
    vectors.dot(&vectors.t())
}

/// A feature term with its weight in one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTerm {
    /// The feature term.
    pub term: String,
    /// Its TF-IDF weight.
    pub weight: f64,
}

/// Returns up to `limit` terms of one document row, highest weight first.
///
/// Zero weights are skipped; ties are ordered by term.
pub fn top_terms(
    row: ArrayView1<'_, f64>,
    feature_names: &[String],
    limit: usize,
) -> Vec<ScoredTerm> {
    let mut scored: Vec<ScoredTerm> = row
        .iter()
        .zip(feature_names)
        .filter(|(weight, _)| **weight > 0.0)
        .map(|(weight, term)| ScoredTerm {
            term: term.clone(),
            weight: *weight,
        })
        .collect();
    scored.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod test {
    use ndarray::array;

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn document_closeness() {
        let weights = array![[1.0, 0.0], [2.0, 0.0], [0.0, 3.0], [0.0, 0.0]];
        let sim = closeness(&weights, Axis(0));
        assert_eq!(sim.dim(), (4, 4));
        assert!((sim[[0, 1]] - 1.0).abs() < EPS);
        assert!(sim[[0, 2]].abs() < EPS);
        assert_eq!(sim[[3, 3]], 0.0);
    }

    #[test]
    fn term_closeness() {
        let weights = array![[1.0, 1.0, 0.0], [1.0, 1.0, 1.0]];
        let sim = closeness(&weights, Axis(1));
        assert_eq!(sim.dim(), (3, 3));
        assert!((sim[[0, 1]] - 1.0).abs() < EPS);
        assert!((sim[[0, 2]] - 1.0 / 2.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn top_terms_sorted_and_capped() {
        let names: Vec<String> = ["apple", "banana", "cherry", "date"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let row = array![0.2, 0.0, 0.5, 0.2];
        let top = top_terms(row.view(), &names, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].term, "cherry");
        assert_eq!(top[1].term, "apple");

        let all = top_terms(row.view(), &names, 10);
        let terms: Vec<&str> = all.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["cherry", "apple", "date"]);
    }
}
