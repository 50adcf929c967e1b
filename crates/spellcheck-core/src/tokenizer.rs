//! Token boundaries over normalized text.
//!
//! A token is a maximal run of non-delimiter characters. What counts as a delimiter is
//! decided by a predicate ([`IsDelimiter`]); with camel-case splitting enabled a run is also
//! cut in front of an uppercase letter that touches a lowercase one, so `stillToken` yields
//! `still` and `Token` while `TOKEN` stays whole.
//!
//! All indices are character offsets into the normalized buffer. Translating to and from
//! editor byte offsets is the caller's job (see [`crate::MappedText`]).

use crate::settings::{Settings, TokenizationStyle};
use crate::text::{is_lower, is_upper};

/// Characters that always separate words when tokenizing by an explicit delimiter set.
pub const WHITESPACE_DELIMITERS: &str = " \n\r\t\u{0B}";

/// Delimiter predicate.
pub trait IsDelimiter {
    /// Returns `true` if `c` separates tokens.
    fn is_delimiter(&self, c: char) -> bool;
}

impl<F> IsDelimiter for F
where
    F: Fn(char) -> bool,
{
    fn is_delimiter(&self, c: char) -> bool {
        self(c)
    }
}

/// Delimiter predicates selectable from [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterRule {
    /// Only the listed characters (kept sorted) separate tokens.
    Set(Vec<char>),
    /// Anything that is not a letter or digit separates tokens, except the exclusions.
    NonAlphabetic {
        /// Characters kept inside tokens (apostrophes, underscore).
        exclusions: Vec<char>,
    },
    /// Anything outside ASCII letters and digits separates tokens, except the exclusions.
    NonAnsi {
        /// Characters kept inside tokens.
        exclusions: Vec<char>,
    },
}

impl DelimiterRule {
    /// Build an explicit delimiter set; whitespace is always included.
    pub fn set(delimiters: &str) -> Self {
        let mut chars: Vec<char> = WHITESPACE_DELIMITERS.chars().chain(delimiters.chars()).collect();
        chars.sort_unstable();
        chars.dedup();
        DelimiterRule::Set(chars)
    }

    /// Build the rule selected by `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        let exclusions = || settings.delimiter_exclusions.chars().collect();
        match settings.tokenization_style {
            TokenizationStyle::ByDelimiters => Self::set(&settings.delimiters),
            TokenizationStyle::ByNonAlphabetic => DelimiterRule::NonAlphabetic {
                exclusions: exclusions(),
            },
            TokenizationStyle::ByNonAnsi => DelimiterRule::NonAnsi {
                exclusions: exclusions(),
            },
        }
    }
}

impl IsDelimiter for DelimiterRule {
    fn is_delimiter(&self, c: char) -> bool {
        match self {
            DelimiterRule::Set(chars) => chars.binary_search(&c).is_ok(),
            DelimiterRule::NonAlphabetic { exclusions } => {
                !c.is_alphanumeric() && !exclusions.contains(&c)
            }
            DelimiterRule::NonAnsi { exclusions } => {
                !c.is_ascii_alphanumeric() && !exclusions.contains(&c)
            }
        }
    }
}

/// Half-open `[start, end)` token range in normalized character indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// First character.
    pub start: usize,
    /// One past the last character.
    pub end: usize,
}

impl Token {
    /// Number of characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Tokens are never empty once emitted; provided for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Tokenizer over a borrowed character buffer.
pub struct Tokenizer<'a, D> {
    text: &'a [char],
    delimiters: D,
    split_camel_case: bool,
}

impl<'a, D: IsDelimiter> Tokenizer<'a, D> {
    /// Create a tokenizer.
    pub fn new(text: &'a [char], delimiters: D, split_camel_case: bool) -> Self {
        Self {
            text,
            delimiters,
            split_camel_case,
        }
    }

    /// The underlying text.
    pub fn text(&self) -> &'a [char] {
        self.text
    }

    /// Characters of `token`.
    pub fn token_text(&self, token: Token) -> &'a [char] {
        &self.text[token.start..token.end]
    }

    fn is_delim(&self, c: char) -> bool {
        self.delimiters.is_delimiter(c)
    }

    /// Tokenize the whole buffer left to right.
    pub fn get_all_tokens(&self) -> Vec<Token> {
        let text = self.text;
        let len = text.len();
        let mut tokens = Vec::new();
        let mut begin = 0;
        let mut end = 0;

        let mut finalize = |begin: usize, end: usize| {
            if begin < end {
                tokens.push(Token { start: begin, end });
            }
        };

        for (i, &c) in text.iter().enumerate() {
            if self.is_delim(c) {
                finalize(begin, end);
                begin = i + 1;
                continue;
            }
            if self.split_camel_case
                && i > begin
                && is_upper(c)
                && (is_lower(text[i - 1]) || (i + 1 < len && is_lower(text[i + 1])))
            {
                finalize(begin, i);
                begin = i;
            }
            end = i + 1;
        }
        finalize(begin, end);
        tokens
    }

    /// Start of the token containing (or immediately preceding) `index`.
    ///
    /// If `index` sits on a delimiter that follows another delimiter, there is no token
    /// here and `index` is returned unchanged.
    pub fn prev_token_begin(&self, index: usize) -> usize {
        let text = self.text;
        let len = text.len();
        if index == 0 || len == 0 {
            return 0;
        }
        let mut index = index.min(len - 1);

        if self.is_delim(text[index]) {
            if self.is_delim(text[index - 1]) {
                return index;
            }
            index -= 1;
        }

        loop {
            if self.is_delim(text[index]) {
                return index + 1;
            }
            if self.split_camel_case
                && index > 0
                && is_upper(text[index])
                && (index == len - 1 || is_lower(text[index + 1]) || is_lower(text[index - 1]))
            {
                return index;
            }
            if index == 0 {
                return 0;
            }
            index -= 1;
        }
    }

    /// End of the token containing `index`: the first delimiter or camel-case boundary at or
    /// after it.
    pub fn next_token_end(&self, index: usize) -> usize {
        let text = self.text;
        let len = text.len();
        let mut index = index;
        while index < len && !self.is_delim(text[index]) {
            if self.split_camel_case
                && index + 1 < len
                && is_upper(text[index + 1])
                && (is_lower(text[index]) || (index + 2 < len && is_lower(text[index + 2])))
            {
                return index + 1;
            }
            index += 1;
        }
        index.min(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn words<D: IsDelimiter>(tokenizer: &Tokenizer<'_, D>) -> Vec<String> {
        tokenizer
            .get_all_tokens()
            .into_iter()
            .map(|t| tokenizer.token_text(t).iter().collect())
            .collect()
    }

    #[test]
    fn test_delimiter_set() {
        let text = chars("Hello, world!  again");
        let tokenizer = Tokenizer::new(&text, DelimiterRule::set(",!"), false);
        assert_eq!(words(&tokenizer), vec!["Hello", "world", "again"]);
    }

    #[test]
    fn test_closure_predicate() {
        let text = chars("a-b--c");
        let tokenizer = Tokenizer::new(&text, |c: char| c == '-', false);
        assert_eq!(words(&tokenizer), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_non_alphabetic_keeps_digits_and_exclusions() {
        let text = chars("abaas123asd don't snake_case (x)");
        let rule = DelimiterRule::NonAlphabetic {
            exclusions: vec!['\'', '_'],
        };
        let tokenizer = Tokenizer::new(&text, rule, false);
        assert_eq!(
            words(&tokenizer),
            vec!["abaas123asd", "don't", "snake_case", "x"]
        );
    }

    #[test]
    fn test_non_ansi_splits_on_non_ascii() {
        let text = chars("naïve text");
        let rule = DelimiterRule::NonAnsi { exclusions: vec![] };
        let tokenizer = Tokenizer::new(&text, rule, false);
        assert_eq!(words(&tokenizer), vec!["na", "ve", "text"]);
    }

    #[test]
    fn test_camel_case_split() {
        let text = chars("stillToken TOKEN wEirdCasE");
        let tokenizer = Tokenizer::new(&text, DelimiterRule::set(""), true);
        assert_eq!(
            words(&tokenizer),
            vec!["still", "Token", "TOKEN", "w", "Eird", "Cas", "E"]
        );
    }

    #[test]
    fn test_camel_case_boundaries() {
        let text = chars("TestCamelCase");
        let tokenizer = Tokenizer::new(&text, DelimiterRule::set(""), true);
        assert_eq!(words(&tokenizer), vec!["Test", "Camel", "Case"]);
        assert_eq!(tokenizer.prev_token_begin(2), 0);
        assert_eq!(tokenizer.next_token_end(2), 4);
        assert_eq!(tokenizer.prev_token_begin(6), 4);
        assert_eq!(tokenizer.next_token_end(6), 9);
        assert_eq!(tokenizer.prev_token_begin(10), 9);
        assert_eq!(tokenizer.next_token_end(10), 13);
    }

    #[test]
    fn test_boundaries_on_delimiters() {
        let text = chars("ab  cd");
        let tokenizer = Tokenizer::new(&text, DelimiterRule::set(""), false);
        assert_eq!(tokenizer.prev_token_begin(0), 0);
        // Delimiter right after a token steps back into it.
        assert_eq!(tokenizer.prev_token_begin(2), 0);
        // Delimiter after a delimiter: no token here.
        assert_eq!(tokenizer.prev_token_begin(3), 3);
        assert_eq!(tokenizer.prev_token_begin(5), 4);
        assert_eq!(tokenizer.next_token_end(2), 2);
        assert_eq!(tokenizer.next_token_end(4), 6);
        assert_eq!(tokenizer.next_token_end(10), 6);
    }

    #[test]
    fn test_tokens_are_stable_under_retokenization() {
        let text = chars("The quick, brownFox jumps; overTheLAZYDog");
        let tokenizer = Tokenizer::new(&text, DelimiterRule::set(",;"), true);
        for token in tokenizer.get_all_tokens() {
            let piece = tokenizer.token_text(token);
            let inner = Tokenizer::new(piece, DelimiterRule::set(",;"), true);
            assert_eq!(
                inner.get_all_tokens(),
                vec![Token {
                    start: 0,
                    end: piece.len()
                }]
            );
        }
    }
}
