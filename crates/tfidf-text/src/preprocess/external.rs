//! Adapter for transforms supplied from outside the crate.

use std::fmt;

use super::Preprocessor;

/// Wraps any pure `&str -> String` function as a [`Preprocessor`].
///
/// Used to put the vectorizer's native lowercasing and accent stripping at the head
/// of a chain.
pub struct ExternalPreprocessor {
    /// The wrapped transform.
    transform: Box<dyn Fn(&str) -> String + Send + Sync>,
}

impl ExternalPreprocessor {
    /// Wraps `transform`.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            transform: Box::new(transform),
        }
    }

    /// Wraps another preprocessor.
    pub fn from_preprocessor<P: Preprocessor + 'static>(inner: P) -> Self {
        Self::new(move |text| inner.preprocess(text))
    }
}

impl Preprocessor for ExternalPreprocessor {
    fn preprocess(&self, text: &str) -> String {
        (self.transform)(text)
    }
}

impl fmt::Debug for ExternalPreprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalPreprocessor").finish_non_exhaustive()
    }
}
