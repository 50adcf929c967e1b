//! Spell-checking settings.
//!
//! Settings are owned by the [`crate::SpellChecker`] and read-only during a scan. They
//! derive `serde` traits with container-level defaults, so a host can deserialize a partial
//! configuration and get the documented defaults for everything it leaves out.

use serde::{Deserialize, Serialize};

/// Default punctuation treated as word delimiters by [`TokenizationStyle::ByDelimiters`].
pub const DEFAULT_DELIMITERS: &str = concat!(
    ",.!?\":;{}()[]\\/=+-^$*<>|#$@%&~",
    "\u{2026}\u{2116}\u{2014}\u{00AB}\u{00BB}\u{2013}\u{2022}\u{00A9}\u{203A}",
    "\u{201C}\u{201D}\u{00B7}\u{00A0}\u{0060}\u{2192}\u{00D7}",
);

/// Default characters kept inside tokens when tokenizing by character class.
pub const DEFAULT_DELIMITER_EXCLUSIONS: &str = "'\u{2019}_";

/// How text is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizationStyle {
    /// Any character that is not a letter or digit separates words.
    #[default]
    ByNonAlphabetic,
    /// Only whitespace and the configured delimiter string separate words.
    ByDelimiters,
    /// Any character outside ASCII letters and digits separates words.
    ByNonAnsi,
}

/// Every knob consulted by the tokenizer, the admission filter, and the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delimiter predicate selector.
    pub tokenization_style: TokenizationStyle,
    /// Extra delimiters for [`TokenizationStyle::ByDelimiters`].
    pub delimiters: String,
    /// Characters kept inside tokens for the character-class styles.
    pub delimiter_exclusions: String,
    /// Split `camelCase` runs into separate words.
    pub split_camel_case: bool,

    /// Normalize `ё` to `е` before checking.
    pub ignore_yo: bool,
    /// Normalize `’` to `'` before checking.
    pub convert_single_quotes: bool,
    /// Trim apostrophes at both ends of a token.
    pub remove_boundary_apostrophes: bool,

    /// When `true`, only files matching `file_types` are checked; otherwise matching files
    /// are skipped.
    pub check_those: bool,
    /// `;`-separated wildcard patterns.
    pub file_types: String,
    /// Check words inside comments.
    pub check_comments: bool,
    /// Check words inside string literals.
    pub check_strings: bool,
    /// Check identifiers.
    pub check_variable_functions: bool,

    /// Skip words containing digits.
    pub ignore_containing_digit: bool,
    /// Skip words starting with an uppercase letter.
    pub ignore_starting_with_capital: bool,
    /// Skip mixed-case words.
    pub ignore_having_a_capital: bool,
    /// Skip all-caps words.
    pub ignore_all_capital: bool,
    /// Skip single-letter words.
    pub ignore_one_letter: bool,
    /// Skip words shorter than this many characters.
    pub word_minimum_length: usize,
    /// Skip words containing `_`.
    pub ignore_having_underscore: bool,
    /// Skip words starting or ending with an apostrophe.
    pub ignore_starting_or_ending_with_apostrophe: bool,

    /// Underline misspellings in the visible text automatically.
    pub auto_check_text: bool,
    /// Maximum number of suggestions returned for a word.
    pub suggestion_count: usize,
    /// Size of one find-next / find-previous window, in document positions.
    pub find_window_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tokenization_style: TokenizationStyle::default(),
            delimiters: DEFAULT_DELIMITERS.to_string(),
            delimiter_exclusions: DEFAULT_DELIMITER_EXCLUSIONS.to_string(),
            split_camel_case: false,
            ignore_yo: false,
            convert_single_quotes: true,
            remove_boundary_apostrophes: true,
            check_those: true,
            file_types: "*.*".to_string(),
            check_comments: true,
            check_strings: true,
            check_variable_functions: false,
            ignore_containing_digit: true,
            ignore_starting_with_capital: false,
            ignore_having_a_capital: true,
            ignore_all_capital: true,
            ignore_one_letter: false,
            word_minimum_length: 0,
            ignore_having_underscore: true,
            ignore_starting_or_ending_with_apostrophe: false,
            auto_check_text: true,
            suggestion_count: 5,
            find_window_size: 4096,
        }
    }
}

impl Settings {
    /// Returns `true` if `c` counts as an apostrophe under the current conversions.
    pub fn is_apostrophe(&self, c: char) -> bool {
        c == '\'' || (self.convert_single_quotes && c == '\u{2019}')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tokenization_style, TokenizationStyle::ByNonAlphabetic);
        assert!(settings.delimiters.contains('\u{2026}'));
        assert!(settings.ignore_all_capital);
        assert!(!settings.ignore_starting_with_capital);
        assert_eq!(settings.find_window_size, 4096);
    }

    #[test]
    fn test_apostrophe_depends_on_quote_conversion() {
        let mut settings = Settings::default();
        assert!(settings.is_apostrophe('\u{2019}'));
        settings.convert_single_quotes = false;
        assert!(!settings.is_apostrophe('\u{2019}'));
        assert!(settings.is_apostrophe('\''));
    }
}
