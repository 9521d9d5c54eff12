//! Accent stripping and the vectorizer's native preprocessing.

use tfidf_config::StripAccents;
use tfidf_text::Preprocessor;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Decomposes `text` (NFKD) and keeps only ASCII characters.
///
/// Characters without an ASCII decomposition, such as `ı`, are dropped.
pub fn strip_accents_ascii(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Decomposes `text` (NFKD) and removes combining marks.
///
/// Non-ASCII base characters survive.
pub fn strip_accents_unicode(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lowercasing followed by optional accent stripping.
///
/// This is what the vectorizer applies when no preprocessor is supplied, and what a
/// custom chain wraps as its first stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasePreprocessor {
    /// Lowercase before stripping.
    pub lowercase: bool,
    /// Accent-stripping mode.
    pub strip_accents: Option<StripAccents>,
}

impl BasePreprocessor {
    /// Creates the base preprocessor.
    pub const fn new(lowercase: bool, strip_accents: Option<StripAccents>) -> Self {
        Self {
            lowercase,
            strip_accents,
        }
    }
}

impl Preprocessor for BasePreprocessor {
    fn preprocess(&self, text: &str) -> String {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        match self.strip_accents {
            Some(StripAccents::Ascii) => strip_accents_ascii(&text),
            Some(StripAccents::Unicode) => strip_accents_unicode(&text),
            None => text,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ACCENTED: &str = "āăąēîïĩíĝġńñšŝśûůŷşöçğ";
    const STRIPPED: &str = "aaaeiiiiggnnsssuuysocg";

    #[test]
    fn ascii_strip() {
        assert_eq!(strip_accents_ascii(ACCENTED), STRIPPED);
        assert_eq!(strip_accents_ascii("ışık"), "sk");
    }

    #[test]
    fn unicode_strip() {
        assert_eq!(strip_accents_unicode(ACCENTED), STRIPPED);
        assert_eq!(strip_accents_unicode("ışık"), "ışık".replace('ş', "s"));
        assert_eq!(strip_accents_unicode("plain"), "plain");
    }

    #[test]
    fn base_lowercases_before_stripping() {
        let base = BasePreprocessor::new(true, Some(StripAccents::Unicode));
        assert_eq!(base.preprocess("Çağrı ÖZ"), "cagrı oz");
    }

    #[test]
    fn base_without_options_is_identity() {
        let base = BasePreprocessor::default();
        assert_eq!(base.preprocess("Mixed Ünïcode"), "Mixed Ünïcode");
    }
}
