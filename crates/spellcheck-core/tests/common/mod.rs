//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use spellcheck_core::{HeadlessEditor, Settings, SpellChecker, SpellerInterface, WordForSpeller};
use std::collections::HashSet;

/// Words known to [`WordListSpeller::standard`].
pub const DICTIONARY: &[&str] = &[
    "This", "is", "test", "document", "Please", "bear", "with", "me", "И", "ещё", "немного",
    "слов",
];

/// Exact-match word list speller with a user dictionary and an ignore list.
#[derive(Debug, Default)]
pub struct WordListSpeller {
    known: HashSet<String>,
    user: HashSet<String>,
    ignored: HashSet<String>,
    pub disabled: bool,
    pub batches: std::cell::Cell<usize>,
}

impl WordListSpeller {
    pub fn standard() -> Self {
        Self {
            known: DICTIONARY.iter().map(|w| w.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn user_words(&self) -> Vec<String> {
        let mut words: Vec<_> = self.user.iter().cloned().collect();
        words.sort();
        words
    }
}

impl SpellerInterface for WordListSpeller {
    fn check_words(&self, words: &[WordForSpeller]) -> Vec<bool> {
        self.batches.set(self.batches.get() + 1);
        words
            .iter()
            .map(|w| {
                self.known.contains(&w.text)
                    || self.user.contains(&w.text)
                    || self.ignored.contains(&w.text)
            })
            .collect()
    }

    fn get_suggestions(&self, word: &str) -> Vec<String> {
        // Everything sharing the first letter, alphabetically.
        let first = word.chars().next();
        let mut out: Vec<String> = self
            .known
            .iter()
            .filter(|k| k.chars().next() == first)
            .cloned()
            .collect();
        out.sort();
        out
    }

    fn add_to_dictionary(&mut self, word: &str) {
        self.user.insert(word.to_string());
    }

    fn ignore_all(&mut self, word: &str) {
        self.ignored.insert(word.to_string());
    }

    fn is_working(&self) -> bool {
        !self.disabled
    }
}

pub type Checker = SpellChecker<HeadlessEditor, WordListSpeller>;

pub fn checker(text: &str) -> Checker {
    checker_with(text, Settings::default())
}

pub fn checker_with(text: &str, settings: Settings) -> Checker {
    SpellChecker::new(HeadlessEditor::new(text), WordListSpeller::standard(), settings)
}

/// Two misspellings on lines 1 and 3, a correct line between them, trailing newline.
pub const TWO_MISTAKES: &str = "\nwrongword\nThis is test document\nbadword\n";
pub const WRONGWORD: std::ops::Range<usize> = 1..10;
pub const BADWORD: std::ops::Range<usize> = 33..40;
