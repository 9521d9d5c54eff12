//! Integration tests for tfidf-engine.
//!
//! Drives the vectorizer with custom preprocessing chains and tokenizers the way a model
//! assembles them.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use tfidf_config::{DocFrequency, StripAccents};
use tfidf_engine::{EngineError, Vectorizer, VectorizerParams};
use tfidf_text::{
    DigitPreprocessor, ExternalPreprocessor, LemmaTokenizer, MultiPreprocessor, Preprocessor,
    PunctuationPreprocessor, StopWords,
};

const REVIEWS: &[&str] = &[
    "Great shirts, 2 sizes too small!!",
    "The shirts fit great; ordered 3 more.",
    "Colors faded after 10 washes.",
    "Great colors and the fabric feels soft.",
];

fn chain(params: &VectorizerParams) -> Box<dyn Preprocessor> {
    let stages: Vec<Box<dyn Preprocessor>> = vec![
        Box::new(ExternalPreprocessor::from_preprocessor(
            params.base_preprocessor(),
        )),
        Box::new(DigitPreprocessor::new()),
        Box::new(PunctuationPreprocessor::new()),
    ];
    Box::new(MultiPreprocessor::new(stages).unwrap())
}

#[test]
fn test_full_chain_with_lemmas_and_stop_words() {
    let params = VectorizerParams::default();
    let stop_words: StopWords = ["the", "and", "too", "after"].into_iter().collect();
    let mut vectorizer = Vectorizer::new(params.clone())
        .unwrap()
        .with_preprocessor(chain(&params))
        .with_tokenizer(Box::new(LemmaTokenizer::new()))
        .with_stop_words(Some(stop_words));

    let matrix = vectorizer.fit_transform(REVIEWS).unwrap();
    let names = vectorizer.feature_names().unwrap();

    assert_eq!(matrix.nrows(), REVIEWS.len());
    assert_eq!(matrix.ncols(), names.len());
    assert!(names.iter().any(|n| n == "shirt"));
    assert!(names.iter().any(|n| n == "size"));
    assert!(names.iter().any(|n| n == "wash"));
    assert!(!names.iter().any(|n| n == "the"));
    assert!(!names.iter().any(|n| n.chars().any(|c| c.is_ascii_digit())));
}

#[test]
fn test_df_bounds_on_real_text() {
    let params = VectorizerParams {
        max_df: DocFrequency::Fraction(0.5),
        min_df: DocFrequency::Count(2),
        ..VectorizerParams::default()
    };
    let mut vectorizer = Vectorizer::new(params).unwrap();
    vectorizer.fit_transform(REVIEWS).unwrap();

    // "great" appears in 3 of 4 reviews, above the 0.5 ceiling
    assert!(vectorizer.pruned_terms().unwrap().contains("great"));
    let names = vectorizer.feature_names().unwrap();
    assert!(names.iter().any(|n| n == "colors"));
    assert!(names.iter().any(|n| n == "shirts"));
}

#[test]
fn test_crossing_bounds_fail_at_training() {
    let params = VectorizerParams {
        max_df: DocFrequency::Count(1),
        min_df: DocFrequency::Count(3),
        ..VectorizerParams::default()
    };
    let mut vectorizer = Vectorizer::new(params).unwrap();
    assert!(matches!(
        vectorizer.fit_transform(REVIEWS),
        Err(EngineError::DfBoundsCross { .. })
    ));
}

#[test]
fn test_accent_stripping_merges_features() {
    let params = VectorizerParams {
        strip_accents: Some(StripAccents::Unicode),
        ..VectorizerParams::default()
    };
    let mut vectorizer = Vectorizer::new(params).unwrap();
    vectorizer.fit_transform(&["Café crème", "cafe creme"]).unwrap();
    assert_eq!(vectorizer.feature_names().unwrap(), ["cafe", "creme"]);
}

#[test]
fn test_infer_after_train_keeps_columns() {
    let mut vectorizer = Vectorizer::new(VectorizerParams::default()).unwrap();
    let train = vectorizer.fit_transform(&REVIEWS[..2]).unwrap();
    let valid = vectorizer.transform(&REVIEWS[2..]).unwrap();
    assert_eq!(train.ncols(), valid.ncols());
    assert_eq!(valid.nrows(), 2);
}
