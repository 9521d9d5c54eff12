//! CSV export of weighted matrices.
//!
//! The header row holds an empty cell followed by the column labels; every following
//! row starts with its row label.

use std::{fs::File, io, iter, path::Path};

use ndarray::Array2;

use super::error::ExportError;

/// Writes `matrix` as CSV to `writer`.
///
/// Rows are labelled with `row_labels`, or with their zero-based index when `None`.
pub fn write_matrix<W: io::Write>(
    writer: W,
    matrix: &Array2<f64>,
    row_labels: Option<&[String]>,
    column_labels: &[String],
) -> Result<(), ExportError> {
    check_len("column", matrix.ncols(), column_labels.len())?;
    if let Some(labels) = row_labels {
        check_len("row", matrix.nrows(), labels.len())?;
    }

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(iter::once("").chain(column_labels.iter().map(String::as_str)))?;
    for (index, row) in matrix.rows().into_iter().enumerate() {
        let label = row_labels.map_or_else(|| index.to_string(), |labels| labels[index].clone());
        csv.write_record(iter::once(label).chain(row.iter().map(f64::to_string)))?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes `matrix` as CSV to the file at `path`, replacing it.
pub fn save_matrix(
    path: &Path,
    matrix: &Array2<f64>,
    row_labels: Option<&[String]>,
    column_labels: &[String],
) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_matrix(file, matrix, row_labels, column_labels)
}

/// Fails when the label count differs from the matrix extent.
fn check_len(axis: &'static str, expected: usize, actual: usize) -> Result<(), ExportError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ExportError::Shape {
            axis,
            expected,
            actual,
        })
    }
}
