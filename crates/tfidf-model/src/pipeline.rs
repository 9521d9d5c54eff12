//! Assembly of the text components an operation set selects.

use tfidf_config::{OpSet, TextOp};
use tfidf_engine::BasePreprocessor;
use tfidf_text::{
    DigitPreprocessor, ExternalPreprocessor, MultiPreprocessor, Preprocessor,
    PunctuationPreprocessor, TextError,
};

/// Builds the preprocessing chain for `ops`.
///
/// The vectorizer's native lowercasing and accent stripping (`base`) always run first,
/// then digit removal if selected, then punctuation removal if selected.
pub fn build_preprocessor(
    ops: OpSet,
    base: BasePreprocessor,
) -> Result<MultiPreprocessor, TextError> {
    let mut stages: Vec<Box<dyn Preprocessor>> =
        vec![Box::new(ExternalPreprocessor::from_preprocessor(base))];
    if ops.contains(TextOp::Digits) {
        stages.push(Box::new(DigitPreprocessor::new()));
    }
    if ops.contains(TextOp::Punctuation) {
        stages.push(Box::new(PunctuationPreprocessor::new()));
    }
    MultiPreprocessor::new(stages)
}

#[cfg(test)]
mod test {
    use tfidf_config::StripAccents;

    use super::*;

    #[test]
    fn empty_ops_only_run_the_base() {
        let chain = build_preprocessor(OpSet::empty(), BasePreprocessor::default()).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.preprocess("Keep 42, As-Is"), "Keep 42, As-Is");
    }

    #[test]
    fn stages_follow_selected_ops() {
        let ops = OpSet::from([TextOp::Lower, TextOp::Digits, TextOp::Punctuation]);
        let chain = build_preprocessor(ops, BasePreprocessor::new(true, None)).unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.preprocess("Call 312-832-3160 NOW!"),
            "call now"
        );
    }

    #[test]
    fn accents_stripped_before_punctuation() {
        let ops = OpSet::from([TextOp::UnicodeStrip, TextOp::Punctuation]);
        let base = BasePreprocessor::new(false, Some(StripAccents::Unicode));
        let chain = build_preprocessor(ops, base).unwrap();
        assert_eq!(chain.preprocess("Crème-brûlée"), "Creme brulee");
    }
}
