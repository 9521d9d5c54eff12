//! Text cleaning building blocks for the tfidf pipeline.
//!
//! Three kinds of components live here:
//!
//! - **Preprocessors** ([`Preprocessor`]): pure `text -> text` cleaners such as digit
//!   and punctuation removal, plus [`MultiPreprocessor`] to chain them.
//! - **Tokenizers** ([`Tokenizer`]): split text into words and reduce each word by
//!   lemmatization or stemming.
//! - **Stop words** ([`StopWords`]): the set of words dropped after tokenization, resolved
//!   from a model's operations by [`resolve_stop_words`].

#![warn(missing_docs)]

mod error;
pub mod preprocess;
mod stopwords;
pub mod tokenize;

pub use error::TextError;
pub use preprocess::{
    DigitPreprocessor, ExternalPreprocessor, MultiPreprocessor, Preprocessor,
    PunctuationPreprocessor,
};
pub use stopwords::{StopWords, resolve_stop_words};
pub use tokenize::{LemmaTokenizer, Lemmatizer, StemTokenizer, Tokenizer, tokenizer_for};
