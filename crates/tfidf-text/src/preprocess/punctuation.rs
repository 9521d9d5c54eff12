//! Punctuation removal.

use std::sync::LazyLock;

use regex::Regex;

use super::{Preprocessor, collapse_spaces};

/// Runs of ASCII punctuation, apostrophe included.
static PUNCTUATION_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"[!"#$%&()*+,\-./\\:;<=>?@\[\]^_`{|}~']+"##)
        .expect("punctuation pattern should compile")
});

/// Replaces every run of punctuation with a single space, then collapses spaces.
///
/// Removed characters: `` ! " # $ % & ( ) * + , - . ' / \ : ; < = > ? @ [ ] ^ _ ` { | } ~ ``.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationPreprocessor;

impl PunctuationPreprocessor {
    /// Creates a punctuation remover.
    pub fn new() -> Self {
        Self
    }
}

impl Preprocessor for PunctuationPreprocessor {
    fn preprocess(&self, text: &str) -> String {
        collapse_spaces(&PUNCTUATION_RUNS.replace_all(text, " "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deletes_punctuation() {
        let pp = PunctuationPreprocessor::new();
        assert_eq!(
            pp.preprocess("random_string_230498_20\"'''`#11ai-ic+&%/\n\t lalalalal"),
            "random string 230498 20 11ai ic \n\t lalalalal"
        );
    }

    #[test]
    fn no_punctuation() {
        assert_eq!(PunctuationPreprocessor::new().preprocess("randomstring"), "randomstring");
    }

    #[test]
    fn non_ascii_text_with_punctuation() {
        assert_eq!(
            PunctuationPreprocessor::new().preprocess("ışöçğ654787%+(&)(&865+-*/"),
            "ışöçğ654787 865"
        );
    }

    #[test]
    fn apostrophes_removed() {
        assert_eq!(
            PunctuationPreprocessor::new().preprocess("We're on a roll, aren't we?"),
            "We re on a roll aren t we"
        );
    }

    #[test]
    fn every_listed_character_removed() {
        let all = r##"!"#$%&()*+,-.'/\:;<=>?@[]^_`{|}~"##;
        assert_eq!(PunctuationPreprocessor::new().preprocess(all), "");
        let spaced = format!("a{all}b");
        assert_eq!(PunctuationPreprocessor::new().preprocess(&spaced), "a b");
    }

    #[test]
    fn empty_text() {
        assert_eq!(PunctuationPreprocessor::new().preprocess(""), "");
    }
}
