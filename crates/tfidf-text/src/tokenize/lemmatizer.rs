//! Dictionary-backed noun lemmatizer.
//!
//! Reduces plural nouns to their singular form with detachment rules in the style of
//! WordNet's morphological processor. A rule only applies when its result is a known
//! base noun; words outside the lexicon come back unchanged. Every token is treated as
//! a noun, so verb forms such as "filming" pass through and "does" becomes "doe".

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
};

/// Base nouns, one per line.
static LEXICON: &str = include_str!("nouns.txt");

/// Irregular plurals and their singular.
static IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("wolves", "wolf"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("calves", "calf"),
    ("scarves", "scarf"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("quizzes", "quiz"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
];

/// Plural endings and their singular replacement, tried in order.
static DETACHMENTS: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Noun lemmatizer.
///
/// Only lowercase tokens are reduced, matching a lexicon whose entries are all
/// lowercase.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    /// Irregular plural -> singular.
    irregular: HashMap<&'static str, &'static str>,
    /// Known base nouns.
    lexicon: HashSet<&'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    /// Creates a lemmatizer with the built-in tables.
    pub fn new() -> Self {
        Self {
            irregular: IRREGULAR.iter().copied().collect(),
            lexicon: LEXICON.lines().map(str::trim).filter(|l| !l.is_empty()).collect(),
        }
    }

    /// Returns true if `word` is a known base noun.
    pub fn is_known(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// Returns the noun lemma of `word`.
    ///
    /// Among the word itself and every detachment that yields a known noun, the
    /// shortest wins. A word with no known form is returned as is.
    pub fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if word.chars().any(char::is_uppercase) {
            return Cow::Borrowed(word);
        }
        if let Some(singular) = self.irregular.get(word) {
            return Cow::Borrowed(*singular);
        }

        let mut best: Option<Cow<'a, str>> = self.is_known(word).then_some(Cow::Borrowed(word));
        for (suffix, replacement) in DETACHMENTS {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }
            let candidate = if replacement.is_empty() {
                Cow::Borrowed(stem)
            } else {
                Cow::Owned(format!("{stem}{replacement}"))
            };
            let shorter = best.as_ref().is_none_or(|b| candidate.len() < b.len());
            if shorter && self.is_known(&candidate) {
                best = Some(candidate);
            }
        }
        best.unwrap_or(Cow::Borrowed(word))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lemma(word: &str) -> String {
        Lemmatizer::new().lemmatize(word).into_owned()
    }

    #[test]
    fn regular_plurals() {
        assert_eq!(lemma("changes"), "change");
        assert_eq!(lemma("toys"), "toy");
        assert_eq!(lemma("premiums"), "premium");
        assert_eq!(lemma("houses"), "house");
        assert_eq!(lemma("stories"), "story");
        assert_eq!(lemma("ties"), "tie");
    }

    #[test]
    fn verb_forms_pass_through() {
        assert_eq!(lemma("filming"), "filming");
        assert_eq!(lemma("ordered"), "ordered");
        assert_eq!(lemma("they"), "they");
    }

    #[test]
    fn does_becomes_doe() {
        assert_eq!(lemma("does"), "doe");
    }

    #[test]
    fn sibilant_plurals() {
        assert_eq!(lemma("classes"), "class");
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("churches"), "church");
        assert_eq!(lemma("dishes"), "dish");
        assert_eq!(lemma("buzzes"), "buzz");
        assert_eq!(lemma("headaches"), "headache");
        assert_eq!(lemma("sizes"), "size");
    }

    #[test]
    fn singular_lookalikes_untouched() {
        assert_eq!(lemma("glass"), "glass");
        assert_eq!(lemma("status"), "status");
        assert_eq!(lemma("analysis"), "analysis");
        assert_eq!(lemma("news"), "news");
        assert_eq!(lemma("was"), "was");
    }

    #[test]
    fn unknown_words_untouched() {
        assert_eq!(lemma("goes"), "goes");
        assert_eq!(lemma("ierfeys"), "ierfeys");
        assert_eq!(lemma("oupeefvs"), "oupeefvs");
    }

    #[test]
    fn irregular_plurals() {
        assert_eq!(lemma("children"), "child");
        assert_eq!(lemma("women"), "woman");
        assert_eq!(lemma("leaves"), "leaf");
        assert_eq!(lemma("knives"), "knife");
    }

    #[test]
    fn lexicon_is_lowercase() {
        assert!(LEXICON.lines().all(|l| l.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn capitalized_words_untouched() {
        assert_eq!(lemma("Changes"), "Changes");
    }
}
