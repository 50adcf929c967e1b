//! The speller boundary.
//!
//! Dictionary engines live outside this crate. The scanner only needs bulk correctness
//! checks, suggestions, and a way to teach the dictionary new words.

use crate::word::WordForSpeller;

/// Dictionary backend consumed by the scanner.
///
/// Backends implement the batch lookup; `check_word` goes through it as a one-element batch.
pub trait SpellerInterface {
    /// Check a batch of words. The result lines up with `words` by index.
    ///
    /// An empty result means the backend is not able to check anything right now.
    fn check_words(&self, words: &[WordForSpeller]) -> Vec<bool>;

    /// Check a single word. Unanswered words count as correct.
    fn check_word(&self, word: &WordForSpeller) -> bool {
        self.check_words(std::slice::from_ref(word))
            .first()
            .copied()
            .unwrap_or(true)
    }

    /// Replacement candidates for `word`, best first.
    fn get_suggestions(&self, word: &str) -> Vec<String>;

    /// Add `word` to the user dictionary.
    fn add_to_dictionary(&mut self, word: &str);

    /// Accept `word` for the rest of the session.
    fn ignore_all(&mut self, word: &str);

    /// Returns `false` while no dictionary is loaded.
    fn is_working(&self) -> bool;
}

/// Speller used before any dictionary is configured. Never working.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummySpeller;

impl SpellerInterface for DummySpeller {
    fn check_words(&self, _words: &[WordForSpeller]) -> Vec<bool> {
        Vec::new()
    }

    fn get_suggestions(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }

    fn add_to_dictionary(&mut self, _word: &str) {}

    fn ignore_all(&mut self, _word: &str) {}

    fn is_working(&self) -> bool {
        false
    }
}

/// Suggestions for one word, together with where that word sits in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    /// The word as it appears in the document.
    pub word: String,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset.
    pub end: usize,
    /// Candidates, best first.
    pub candidates: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Vowels;

    impl SpellerInterface for Vowels {
        fn check_words(&self, words: &[WordForSpeller]) -> Vec<bool> {
            words
                .iter()
                .map(|w| w.text.chars().all(|c| "aeiou".contains(c)))
                .collect()
        }

        fn get_suggestions(&self, _word: &str) -> Vec<String> {
            Vec::new()
        }

        fn add_to_dictionary(&mut self, _word: &str) {}

        fn ignore_all(&mut self, _word: &str) {}

        fn is_working(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_single_check_is_a_one_word_batch() {
        assert!(Vowels.check_word(&WordForSpeller::new("aei")));
        assert!(!Vowels.check_word(&WordForSpeller::new("xyz")));
        let words = [WordForSpeller::new("aei"), WordForSpeller::new("xyz")];
        assert_eq!(Vowels.check_words(&words), vec![true, false]);
    }

    #[test]
    fn test_dummy_speller_never_works() {
        assert!(!DummySpeller.is_working());
        assert!(DummySpeller.check_words(&[WordForSpeller::new("a")]).is_empty());
        assert!(DummySpeller.check_word(&WordForSpeller::new("a")));
    }
}
