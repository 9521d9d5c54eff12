//! Ordered composition of preprocessors.

use tracing::debug;

use super::Preprocessor;
use crate::TextError;

/// Applies a non-empty list of preprocessors in order, feeding each output to the next.
pub struct MultiPreprocessor {
    /// The chain, applied front to back.
    preprocessors: Vec<Box<dyn Preprocessor>>,
}

impl MultiPreprocessor {
    /// Builds a chain. Fails when `preprocessors` is empty.
    pub fn new(preprocessors: Vec<Box<dyn Preprocessor>>) -> Result<Self, TextError> {
        if preprocessors.is_empty() {
            return Err(TextError::EmptyChain);
        }
        debug!(len = preprocessors.len(), "built preprocessor chain");
        Ok(Self { preprocessors })
    }

    /// Number of preprocessors in the chain.
    pub fn len(&self) -> usize {
        self.preprocessors.len()
    }

    /// Always false; an empty chain cannot be built.
    pub fn is_empty(&self) -> bool {
        self.preprocessors.is_empty()
    }
}

impl Preprocessor for MultiPreprocessor {
    fn preprocess(&self, text: &str) -> String {
        self.preprocessors
            .iter()
            .fold(text.to_string(), |text, p| p.preprocess(&text))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{DigitPreprocessor, ExternalPreprocessor, PunctuationPreprocessor};

    const INPUT: &str = "random_string_230498_20\"'''`#11ai-ic+&%/\n\t lalalalal";
    const CLEANED: &str = "random string ai ic \n\t lalalalal";

    #[test]
    fn empty_chain_rejected() {
        assert_eq!(MultiPreprocessor::new(vec![]).err(), Some(TextError::EmptyChain));
    }

    #[test]
    fn punctuation_then_digits() {
        let mp = MultiPreprocessor::new(vec![
            Box::new(PunctuationPreprocessor::new()),
            Box::new(DigitPreprocessor::new()),
        ])
        .unwrap();
        assert_eq!(mp.len(), 2);
        assert_eq!(mp.preprocess(INPUT), CLEANED);
    }

    #[test]
    fn digits_then_punctuation() {
        let mp = MultiPreprocessor::new(vec![
            Box::new(DigitPreprocessor::new()),
            Box::new(PunctuationPreprocessor::new()),
        ])
        .unwrap();
        assert_eq!(mp.preprocess(INPUT), CLEANED);
    }

    #[test]
    fn order_is_respected() {
        let mp = MultiPreprocessor::new(vec![
            Box::new(ExternalPreprocessor::new(|t| format!("{t}!"))),
            Box::new(PunctuationPreprocessor::new()),
        ])
        .unwrap();
        assert_eq!(mp.preprocess("hi"), "hi");

        let mp = MultiPreprocessor::new(vec![
            Box::new(PunctuationPreprocessor::new()),
            Box::new(ExternalPreprocessor::new(|t| format!("{t}!"))),
        ])
        .unwrap();
        assert_eq!(mp.preprocess("hi"), "hi!");
    }
}
