//! Character-level cleaners applied to raw documents before tokenization.
//!
//! Every cleaner implements [`Preprocessor`], a pure `text -> text` transform that keeps
//! no state between calls. [`MultiPreprocessor`] composes cleaners in order.

mod digit;
mod external;
mod multi;
mod punctuation;

use std::sync::LazyLock;

pub use digit::DigitPreprocessor;
pub use external::ExternalPreprocessor;
pub use multi::MultiPreprocessor;
pub use punctuation::PunctuationPreprocessor;
use regex::Regex;

/// A pure text transform applied to every document.
pub trait Preprocessor: Send + Sync {
    /// Returns the cleaned text.
    fn preprocess(&self, text: &str) -> String;
}

impl<P: Preprocessor + ?Sized> Preprocessor for Box<P> {
    fn preprocess(&self, text: &str) -> String {
        (**self).preprocess(text)
    }
}

/// Runs of plain spaces. Tabs and newlines are left alone.
static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("space pattern should compile"));

/// Collapses runs of spaces into one and trims surrounding whitespace.
fn collapse_spaces(text: &str) -> String {
    SPACE_RUNS.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    /// Mixed strings used to check that the cleaners commute.
    const MIXED: &[&str] = &[
        "random_string_230498_20\"'''`#11ai-ic+&%/\n\t lalalalal",
        "random 1244 string",
        "ışöçğ654787%+(&)(&865+-*/",
        "call 312-832-3160 now!",
        "it's 9 o'clock, 10.5 degrees",
        "  leading and trailing 42  ",
        "a1b2c3 -- d4e5",
        "",
        "no digits or punctuation",
        "...123...",
    ];

    #[test]
    fn collapse_keeps_tabs_and_newlines() {
        assert_eq!(collapse_spaces("  a   b \n\t c  "), "a b \n\t c");
    }

    #[test]
    fn digits_and_punctuation_commute() {
        let digits = DigitPreprocessor::new();
        let punctuation = PunctuationPreprocessor::new();
        for text in MIXED {
            let forward = punctuation.preprocess(&digits.preprocess(text));
            let backward = digits.preprocess(&punctuation.preprocess(text));
            assert_eq!(forward, backward, "order changed the result for {text:?}");
        }
    }

    #[test]
    fn digit_removal_is_idempotent() {
        let digits = DigitPreprocessor::new();
        for text in MIXED {
            let once = digits.preprocess(text);
            assert_eq!(digits.preprocess(&once), once);
        }
    }

    #[test]
    fn boxed_preprocessor_delegates() {
        let boxed: Box<dyn Preprocessor> = Box::new(DigitPreprocessor::new());
        assert_eq!(boxed.preprocess("a 1 b"), "a b");
    }
}
