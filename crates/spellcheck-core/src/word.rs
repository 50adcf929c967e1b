//! Word admission and word-level conversions.
//!
//! Not every token is a word worth checking: identifiers in code, URLs, ALLCAPS acronyms and
//! tokens with digits are skipped according to [`Settings`]. Tokens that pass are converted
//! into the form the speller expects.

use crate::editor::{EditorInterface, IndicatorId};
use crate::error::{Result, SpellCheckError};
use crate::settings::Settings;
use crate::text::{is_digit_like, is_upper};
use crate::tokenizer::Token;
use regex::Regex;
use spellcheck_core_lang::{StyleCategory, style_category};
use std::path::Path;

/// A word as handed to the speller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordForSpeller {
    /// Converted word text.
    pub text: String,
    /// The character right after the word is a period (abbreviation candidates).
    pub ends_with_dot: bool,
}

impl WordForSpeller {
    /// Word without a trailing period.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ends_with_dot: false,
        }
    }
}

/// Apply the ё and smart-quote normalizations enabled in `settings`.
pub fn apply_word_conversions(word: &str, settings: &Settings) -> String {
    word.chars()
        .map(|c| match c {
            'ё' if settings.ignore_yo => 'е',
            'Ё' if settings.ignore_yo => 'Е',
            '\u{2019}' if settings.convert_single_quotes => '\'',
            other => other,
        })
        .collect()
}

/// Trim boundary apostrophes off `token` when `remove_boundary_apostrophes` is set.
///
/// The result may be empty.
pub fn cut_apostrophes(settings: &Settings, text: &[char], token: Token) -> Token {
    if !settings.remove_boundary_apostrophes {
        return token;
    }
    let Token { mut start, mut end } = token;
    while start < end && settings.is_apostrophe(text[start]) {
        start += 1;
    }
    while end > start && settings.is_apostrophe(text[end - 1]) {
        end -= 1;
    }
    Token { start, end }
}

/// Build the speller form of `token`.
pub fn to_word_for_speller(text: &[char], token: Token, settings: &Settings) -> WordForSpeller {
    let raw: String = text[token.start..token.end].iter().collect();
    WordForSpeller {
        text: apply_word_conversions(&raw, settings),
        ends_with_dot: text.get(token.end) == Some(&'.'),
    }
}

/// Decide whether `word`, starting at byte `word_start`, should be checked at all.
///
/// Rules short-circuit in a fixed order; see the field docs on [`Settings`].
pub fn is_word_spell_checking_needed<E>(
    word: &[char],
    word_start: usize,
    editor: &E,
    settings: &Settings,
) -> bool
where
    E: EditorInterface + ?Sized,
{
    let Some((&first, rest)) = word.split_first() else {
        return false;
    };

    let style = editor.get_style_at(word_start);
    match style_category(editor.get_lexer(), style) {
        StyleCategory::Text => {}
        StyleCategory::Comment if settings.check_comments => {}
        StyleCategory::String if settings.check_strings => {}
        StyleCategory::Identifier if settings.check_variable_functions => {}
        _ => return false,
    }

    if editor.is_style_hotspot(style) {
        return false;
    }

    if editor.get_indicator_value_at(IndicatorId::URL, word_start) != 0 {
        return false;
    }

    if word.len() < settings.word_minimum_length {
        return false;
    }

    if settings.ignore_one_letter && word.len() == 1 {
        return false;
    }

    if settings.ignore_containing_digit && word.iter().any(|&c| is_digit_like(c)) {
        return false;
    }

    if settings.ignore_starting_with_capital && is_upper(first) {
        return false;
    }

    if settings.ignore_having_a_capital || settings.ignore_all_capital {
        let mut all_upper = is_upper(first);
        let mut any_upper = false;
        for &c in rest {
            if is_upper(c) {
                any_upper = true;
            } else {
                all_upper = false;
            }
        }

        if !all_upper && any_upper && settings.ignore_having_a_capital {
            return false;
        }
        if all_upper && settings.ignore_all_capital {
            return false;
        }
    }

    if settings.ignore_having_underscore && word.contains(&'_') {
        return false;
    }

    if settings.ignore_starting_or_ending_with_apostrophe {
        let last = word[word.len() - 1];
        if settings.is_apostrophe(first) || settings.is_apostrophe(last) {
            return false;
        }
    }

    true
}

/// Compiled `file_types` patterns.
#[derive(Debug, Clone)]
pub struct FileTypeFilter {
    patterns: Vec<Regex>,
}

impl FileTypeFilter {
    /// Compile a `;`-separated list of wildcard patterns (`*`, `?`), matched
    /// case-insensitively against the file name.
    pub fn new(file_types: &str) -> Result<Self> {
        let patterns = file_types
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|pattern| {
                Regex::new(&wildcard_to_regex(pattern)).map_err(|source| {
                    SpellCheckError::InvalidFilePattern {
                        pattern: pattern.to_string(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Returns `true` if any pattern matches the file name of `path`.
    pub fn matches(&self, path: &str) -> bool {
        let name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path);
        self.patterns.iter().any(|re| re.is_match(name))
    }

    /// Apply the `check_those` polarity: check only matching files, or all but them.
    pub fn is_spell_checking_needed(&self, path: &str, check_those: bool) -> bool {
        self.matches(path) == check_those
    }
}

fn wildcard_to_regex(pattern: &str) -> String {
    // `*.*` matches names without an extension too.
    if pattern == "*.*" {
        return "(?s)^.*$".to_string();
    }
    let mut out = String::from("(?i)(?s)^");
    for c in pattern.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            other => out.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    out.push('$');
    out
}

/// One-shot form of [`FileTypeFilter::is_spell_checking_needed`] driven by `settings`.
pub fn is_spell_checking_needed_for_file(path: &str, settings: &Settings) -> Result<bool> {
    let filter = FileTypeFilter::new(&settings.file_types)?;
    Ok(filter.is_spell_checking_needed(path, settings.check_those))
}
