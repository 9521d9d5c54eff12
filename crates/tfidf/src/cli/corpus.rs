//! Corpus files: UTF-8 text with one document per line.

use std::{fs, path::Path, str};

use tracing::debug;

use super::error::CorpusError;

/// Documents read from a corpus file, each with the line it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// Document texts in file order.
    pub documents: Vec<String>,
    /// One-based source line of each document.
    pub lines: Vec<usize>,
}

impl Corpus {
    /// Source line numbers as row labels for exported matrices.
    pub fn line_labels(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}

/// Reads the documents of a corpus file in order.
///
/// Blank lines are skipped, so a document's row index can differ from its line; the
/// source line is kept in [`Corpus::lines`]. A line that is not valid UTF-8 fails the
/// whole read.
pub fn read_corpus(path: &Path) -> Result<Corpus, CorpusError> {
    let bytes = fs::read(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let corpus = parse_corpus(&bytes).map_err(|line| CorpusError::NotText {
        path: path.to_path_buf(),
        line,
    })?;
    debug!(path = %path.display(), documents = corpus.documents.len(), "read corpus");
    Ok(corpus)
}

/// Splits raw bytes into documents; the error is the one-based number of the first
/// line that is not UTF-8.
fn parse_corpus(bytes: &[u8]) -> Result<Corpus, usize> {
    let mut corpus = Corpus::default();
    for (index, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = str::from_utf8(raw).map_err(|_| index + 1)?;
        if !line.trim().is_empty() {
            corpus.documents.push(line.to_string());
            corpus.lines.push(index + 1);
        }
    }
    Ok(corpus)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn one_document_per_line() {
        let corpus = parse_corpus(b"first doc\nsecond doc\r\n\n   \nthird").unwrap();
        assert_eq!(corpus.documents, vec!["first doc", "second doc", "third"]);
    }

    #[test]
    fn blank_lines_keep_source_numbers() {
        let corpus = parse_corpus(b"first\n\nthird\n   \nfifth\n").unwrap();
        assert_eq!(corpus.lines, vec![1, 3, 5]);
        assert_eq!(corpus.line_labels(), vec!["1", "3", "5"]);
    }

    #[test]
    fn invalid_utf8_names_the_line() {
        assert_eq!(parse_corpus(b"ok\n\xff\xfe bad\nok"), Err(2));
    }

    #[test]
    fn empty_file_has_no_documents() {
        let corpus = parse_corpus(b"").unwrap();
        assert!(corpus.documents.is_empty());
        assert!(corpus.lines.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_corpus(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, CorpusError::Read { .. }));
    }
}
