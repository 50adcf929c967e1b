//! Character classes and word casing.

/// Uppercase letter test used by the tokenizer and the admission filter.
pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// Lowercase letter test used by the tokenizer and the admission filter.
pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

/// Alphanumeric but not alphabetic (digits in any script).
pub fn is_digit_like(c: char) -> bool {
    c.is_alphanumeric() && !c.is_alphabetic()
}

/// Casing pattern of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringCase {
    /// `word`
    Lower,
    /// `WORD`
    Upper,
    /// `Word`
    Title,
    /// Anything else, e.g. `wOrD`.
    Mixed,
}

/// Detect the casing pattern of `word`.
///
/// Caseless characters (digits, punctuation) are ignored; a word with no cased characters is
/// reported as [`StringCase::Lower`].
pub fn string_case(word: &str) -> StringCase {
    let mut chars = word.chars().filter(|c| is_upper(*c) || is_lower(*c));
    let Some(first) = chars.next() else {
        return StringCase::Lower;
    };

    let mut rest_upper = true;
    let mut rest_lower = true;
    for c in chars {
        if is_upper(c) {
            rest_lower = false;
        } else {
            rest_upper = false;
        }
    }

    match (is_upper(first), rest_upper, rest_lower) {
        (false, _, true) => StringCase::Lower,
        (true, true, _) => StringCase::Upper,
        (true, false, true) => StringCase::Title,
        _ => StringCase::Mixed,
    }
}

/// Re-case `word` to follow `case`. [`StringCase::Mixed`] leaves the word as given.
pub fn apply_case(word: &str, case: StringCase) -> String {
    match case {
        StringCase::Lower => word.to_lowercase(),
        StringCase::Upper => word.to_uppercase(),
        StringCase::Title => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        }
        StringCase::Mixed => word.to_string(),
    }
}
