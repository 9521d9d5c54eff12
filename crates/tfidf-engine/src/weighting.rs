//! Term-frequency transforms, inverse document frequency and row normalization.

use ndarray::{Array1, Array2, Axis};
use tfidf_config::Norm;

/// Inverse document frequency of every column of a count matrix.
///
/// With `smooth`, one is added to the document count and to every document frequency,
/// as if an extra document contained every term once: `ln((1 + n) / (1 + df)) + 1`.
/// Without it, `ln(n / df) + 1`, where a term no document contains (only possible with a
/// fixed vocabulary) counts as contained once so its weight stays finite.
pub fn idf(counts: &Array2<f64>, smooth: bool) -> Array1<f64> {
    let offset = if smooth { 1.0 } else { 0.0 };
    let n_docs = counts.nrows() as f64 + offset;
    counts.map_axis(Axis(0), |column| {
        let df = (column.iter().filter(|c| **c > 0.0).count() as f64 + offset).max(1.0);
        (n_docs / df).ln() + 1.0
    })
}

/// Replaces every non-zero count `tf` with `1 + ln(tf)`.
pub fn sublinear_tf(counts: &mut Array2<f64>) {
    counts.mapv_inplace(|tf| if tf > 0.0 { tf.ln() + 1.0 } else { tf });
}

/// Clips every non-zero count to one.
pub fn binarize(counts: &mut Array2<f64>) {
    counts.mapv_inplace(|tf| if tf > 0.0 { 1.0 } else { 0.0 });
}

/// Multiplies each non-zero entry by the IDF weight of its column.
pub fn apply_idf(weights: &mut Array2<f64>, idf: &Array1<f64>) {
    for mut row in weights.rows_mut() {
        row.zip_mut_with(idf, |w, weight| {
            if *w != 0.0 {
                *w *= weight;
            }
        });
    }
}

/// Scales each row to unit norm. All-zero rows are left as they are.
pub fn normalize_rows(weights: &mut Array2<f64>, norm: Norm) {
    if norm == Norm::None {
        return;
    }
    for mut row in weights.rows_mut() {
        let length = match norm {
            Norm::L1 => row.iter().map(|w| w.abs()).sum::<f64>(),
            Norm::L2 => row.iter().map(|w| w * w).sum::<f64>().sqrt(),
            Norm::None => 1.0,
        };
        if length > 0.0 {
            row /= length;
        }
    }
}
