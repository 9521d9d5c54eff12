//! Terminal and JSON reporting of a run.

use std::path::PathBuf;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use ndarray::Array2;
use serde::Serialize;
use tfidf_model::top_terms;

/// Builds a table of the highest-weighted terms of every document.
///
/// Documents without any weighted term still get a row with empty term and weight
/// cells, so row numbers line up with the corpus.
pub fn top_terms_table(weights: &Array2<f64>, names: &[String], limit: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Doc", "Term", "Weight"]);

    for (doc, row) in weights.rows().into_iter().enumerate() {
        let scored = top_terms(row, names, limit);
        if scored.is_empty() {
            table.add_row(vec![Cell::new(doc), Cell::new(""), Cell::new("")]);
            continue;
        }
        for (rank, term) in scored.iter().enumerate() {
            let label = if rank == 0 { doc.to_string() } else { String::new() };
            table.add_row(vec![
                Cell::new(label),
                Cell::new(&term.term),
                Cell::new(format!("{:.4}", term.weight)),
            ]);
        }
    }
    table
}

/// Shape of one transformed matrix.
#[derive(Debug, Serialize)]
pub struct MatrixShape {
    /// Number of documents.
    pub rows: usize,
    /// Number of features.
    pub columns: usize,
}

impl From<&Array2<f64>> for MatrixShape {
    fn from(matrix: &Array2<f64>) -> Self {
        Self {
            rows: matrix.nrows(),
            columns: matrix.ncols(),
        }
    }
}

/// Machine-readable summary printed by `--json`.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Operations the model was built with.
    pub ops: Vec<String>,
    /// Training matrix shape.
    pub train: MatrixShape,
    /// Validation matrix shape, when a validation corpus was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<MatrixShape>,
    /// Learned feature names, in column order.
    pub features: Vec<String>,
    /// Number of terms removed by document-frequency and feature-count limits.
    pub pruned: usize,
    /// Files written during the run.
    pub written: Vec<PathBuf>,
}
