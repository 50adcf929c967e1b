//! The misspelling scanner.
//!
//! [`SpellChecker`] ties the pieces together: it pulls position-mapped text out of the
//! editor, tokenizes it, filters tokens through the admission rules, asks the speller about
//! the survivors in one batch, and maps the answers back to byte offsets for underlining,
//! selection, bookmarking or deletion.
//!
//! Document-wide navigation never loads the whole document. [`SpellChecker::find_next_mistake`]
//! and [`SpellChecker::find_prev_mistake`] walk the document in windows whose edges are snapped
//! to token boundaries, wrapping around at most once.
//!
//! # Example
//!
//! ```rust
//! use spellcheck_core::{
//!     HeadlessEditor, IndicatorId, Settings, SpellChecker, SpellerInterface, WordForSpeller,
//! };
//!
//! struct Known(Vec<&'static str>);
//!
//! impl SpellerInterface for Known {
//!     fn check_words(&self, words: &[WordForSpeller]) -> Vec<bool> {
//!         words.iter().map(|w| self.0.contains(&w.text.as_str())).collect()
//!     }
//!     fn get_suggestions(&self, _word: &str) -> Vec<String> {
//!         Vec::new()
//!     }
//!     fn add_to_dictionary(&mut self, _word: &str) {}
//!     fn ignore_all(&mut self, _word: &str) {}
//!     fn is_working(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let editor = HeadlessEditor::new("some wrods here");
//! let mut checker = SpellChecker::new(editor, Known(vec!["some", "here"]), Settings::default());
//! checker.recheck_visible();
//! assert_eq!(
//!     checker.editor().indicator_ranges(IndicatorId::SPELL_CHECK),
//!     vec![5..10]
//! );
//!
//! checker.find_next_mistake();
//! assert_eq!(checker.editor().selected_text(), "wrods");
//! ```

use crate::editor::{EditorInterface, IndicatorId};
use crate::mapped_text::MappedText;
use crate::replace;
use crate::settings::Settings;
use crate::speller::{SpellerInterface, Suggestions};
use crate::tokenizer::{DelimiterRule, IsDelimiter, Token, Tokenizer};
use crate::word::{
    FileTypeFilter, WordForSpeller, cut_apostrophes, is_word_spell_checking_needed,
    to_word_for_speller,
};
use std::ops::Range;

/// First probe size used when searching for a token boundary around a document position.
const INITIAL_PROBE: usize = 15;

/// A checked token, in normalized indices of the text it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedWord {
    /// The token (apostrophes already trimmed).
    pub token: Token,
    /// Speller verdict.
    pub is_correct: bool,
}

/// A misspelled word in document coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    /// Start byte offset.
    pub start: usize,
    /// End byte offset.
    pub end: usize,
    /// The word as written in the document.
    pub word: String,
}

/// Result of checking the word at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordUnderCursor {
    /// Start byte offset of the word (the queried position when there is no word).
    pub start: usize,
    /// Length in bytes; 0 when there is no word.
    pub length: usize,
    /// `true` for correct, skipped, or absent words.
    pub is_correct: bool,
}

/// Misspelling scanner bound to one editor and one speller.
pub struct SpellChecker<E, S> {
    editor: E,
    speller: S,
    settings: Settings,
    file_filter: Option<FileTypeFilter>,
    current_position: Option<usize>,
}

impl<E: EditorInterface, S: SpellerInterface> SpellChecker<E, S> {
    /// Create a scanner. Nothing is checked until a recheck or navigation call.
    pub fn new(editor: E, speller: S, settings: Settings) -> Self {
        let file_filter = compile_file_filter(&settings);
        Self {
            editor,
            speller,
            settings,
            file_filter,
            current_position: None,
        }
    }

    /// The editor.
    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Mutable access to the editor (for host-driven edits between scans).
    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    /// The speller.
    pub fn speller(&self) -> &S {
        &self.speller
    }

    /// Mutable access to the speller. Call [`Self::on_speller_status_changed`] afterwards if
    /// its readiness changed.
    pub fn speller_mut(&mut self) -> &mut S {
        &mut self.speller
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Last anchor used by find next / previous, if any.
    pub fn current_position(&self) -> Option<usize> {
        self.current_position
    }

    /// Change settings and recheck the visible text.
    pub fn modify_settings(&mut self, change: impl FnOnce(&mut Settings)) {
        change(&mut self.settings);
        self.on_settings_changed();
    }

    /// React to a settings change.
    pub fn on_settings_changed(&mut self) {
        log::info!("spell-check settings changed, rechecking");
        self.file_filter = compile_file_filter(&self.settings);
        self.recheck_visible();
    }

    /// React to the speller becoming ready or failing.
    pub fn on_speller_status_changed(&mut self) {
        self.recheck_visible();
    }

    fn delimiter_rule(&self) -> DelimiterRule {
        DelimiterRule::from_settings(&self.settings)
    }

    fn tokenizer<'t>(&self, text: &'t [char]) -> Tokenizer<'t, DelimiterRule> {
        Tokenizer::new(text, self.delimiter_rule(), self.settings.split_camel_case)
    }

    /// Returns `true` if the active file passes the file-type filter.
    pub fn is_spellchecking_needed(&self) -> bool {
        match &self.file_filter {
            Some(filter) => filter.is_spell_checking_needed(
                &self.editor.get_full_current_path(),
                self.settings.check_those,
            ),
            None => true,
        }
    }

    /// Tokenize `text`, filter tokens, and check the survivors in one speller call.
    ///
    /// Every word is reported correct when the speller is not working or answers with a
    /// result of the wrong size.
    pub fn check_text(&self, text: &MappedText) -> Vec<CheckedWord> {
        let chars = text.as_chars();
        let tokenizer = self.tokenizer(chars);

        let mut tokens = Vec::new();
        let mut batch: Vec<WordForSpeller> = Vec::new();
        for token in tokenizer.get_all_tokens() {
            let word_start = text.to_original_index(token.start);
            if !is_word_spell_checking_needed(
                tokenizer.token_text(token),
                word_start,
                &self.editor,
                &self.settings,
            ) {
                continue;
            }
            let token = cut_apostrophes(&self.settings, chars, token);
            if token.is_empty() {
                continue;
            }
            batch.push(to_word_for_speller(chars, token, &self.settings));
            tokens.push(token);
        }

        let results = if batch.is_empty() || !self.speller.is_working() {
            Vec::new()
        } else {
            self.speller.check_words(&batch)
        };
        let usable = results.len() == batch.len();
        if !usable && !results.is_empty() {
            log::warn!(
                "speller returned {} results for {} words; treating all as correct",
                results.len(),
                batch.len()
            );
        }

        tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| CheckedWord {
                token,
                is_correct: !usable || results[i],
            })
            .collect()
    }

    fn incorrect_ranges(&self, text: &MappedText) -> Vec<(usize, usize)> {
        self.check_text(text)
            .into_iter()
            .filter(|w| !w.is_correct)
            .map(|w| {
                (
                    text.to_original_index(w.token.start),
                    text.to_original_index(w.token.end),
                )
            })
            .collect()
    }

    /// Underline every misspelling in `text` and clear stale underlines between them.
    pub fn underline_misspelled_words(&mut self, text: &MappedText) {
        if text.is_empty() {
            return;
        }
        let ranges = self.incorrect_ranges(text);
        let mut prev_end = text.to_original_index(0);
        for (start, end) in ranges {
            if prev_end < start {
                self.editor
                    .indicator_clear_range(IndicatorId::SPELL_CHECK, prev_end, start);
            }
            self.editor
                .indicator_fill_range(IndicatorId::SPELL_CHECK, start, end);
            prev_end = end;
        }
        let text_end = text.original_length();
        if prev_end < text_end {
            self.editor
                .indicator_clear_range(IndicatorId::SPELL_CHECK, prev_end, text_end);
        }
    }

    /// First misspelling in `text` ending after `position`.
    pub fn find_first_misspelling(
        &self,
        text: &MappedText,
        position: usize,
    ) -> Option<(usize, usize)> {
        self.incorrect_ranges(text)
            .into_iter()
            .find(|&(_, end)| end > position)
    }

    /// Last misspelling in `text` ending before `position`.
    ///
    /// Stops at the first misspelling that reaches `position`, so the word currently
    /// selected is never returned again.
    pub fn find_last_misspelling(
        &self,
        text: &MappedText,
        position: usize,
    ) -> Option<(usize, usize)> {
        let mut last = None;
        for (start, end) in self.incorrect_ranges(text) {
            if end >= position {
                break;
            }
            last = Some((start, end));
        }
        last
    }

    /// Every misspelling in `text`, in document order.
    pub fn get_misspelled_words(&self, text: &MappedText) -> Vec<Misspelling> {
        self.check_text(text)
            .into_iter()
            .filter(|w| !w.is_correct)
            .map(|w| Misspelling {
                start: text.to_original_index(w.token.start),
                end: text.to_original_index(w.token.end),
                word: text.substring(w.token.start, w.token.end),
            })
            .collect()
    }

    fn document_text(&self) -> MappedText {
        self.editor
            .get_mapped_text_range(0, self.editor.get_active_document_length())
    }

    /// Remove every underline.
    pub fn clear_all_underlines(&mut self) {
        let length = self.editor.get_active_document_length();
        self.editor
            .indicator_clear_range(IndicatorId::SPELL_CHECK, 0, length);
    }

    /// Recheck the visible text, or clear all underlines when checking is off, the file is
    /// excluded, or the speller is not working.
    pub fn recheck_visible(&mut self) {
        if !self.settings.auto_check_text {
            self.clear_all_underlines();
            return;
        }
        if !self.is_spellchecking_needed() {
            log::info!(
                "skipping {:?}: excluded by file type filter",
                self.editor.get_full_current_path()
            );
            self.clear_all_underlines();
            return;
        }
        if !self.speller.is_working() {
            self.clear_all_underlines();
            return;
        }
        let text = self.get_visible_text();
        self.underline_misspelled_words(&text);
    }

    /// Text of every visible line, each line's visible span widened to whole tokens.
    pub fn get_visible_text(&self) -> MappedText {
        let editor = &self.editor;
        let first = editor.get_first_visible_line();
        let last = first.saturating_add(editor.get_lines_on_screen());
        let line_count = editor.get_line_count();

        let mut result = MappedText::new();
        let mut previous_line = None;
        for visible in first..last {
            let line = editor.get_document_line_from_visible(visible);
            if line >= line_count {
                break;
            }
            if previous_line == Some(line) || !editor.is_line_visible(line) {
                continue;
            }
            previous_line = Some(line);

            let Range { mut start, mut end } = editor.get_visible_line_range(line);
            if start > editor.get_line_start_position(line) {
                start = self.prev_token_begin_in_document(start);
            }
            if end < editor.get_line_end_position(line) {
                end = self.next_token_end_in_document(end);
            }
            result.append(editor.get_mapped_text_range(start, end));
        }
        result
    }

    fn char_start_at(&self, position: usize) -> usize {
        if position >= self.editor.get_active_document_length() {
            return self.editor.get_active_document_length();
        }
        self.editor
            .get_prev_valid_begin_pos(self.editor.get_next_valid_end_pos(position))
    }

    /// Start of the token around `position`, probing backwards in growing windows.
    ///
    /// Returns the document start when no boundary exists before `position`.
    pub fn prev_token_begin_in_document(&self, position: usize) -> usize {
        let position = self.char_start_at(position);
        let end = self.editor.get_next_valid_end_pos(position);
        let mut probe = INITIAL_PROBE;
        loop {
            let start = position.saturating_sub(probe);
            let text = self.editor.get_mapped_text_range(start, end);
            if text.is_empty() {
                return position;
            }
            let tokenizer = self.tokenizer(text.as_chars());
            let index = text.from_original_index(position).min(text.len() - 1);
            let begin = tokenizer.prev_token_begin(index);
            if begin > 0 || start == 0 {
                return text.to_original_index(begin);
            }
            log::trace!("no token start within {probe} bytes before {position}");
            probe *= 2;
        }
    }

    /// End of the token around `position`, probing forwards in growing windows.
    ///
    /// Returns the document end when no boundary exists after `position`.
    pub fn next_token_end_in_document(&self, position: usize) -> usize {
        let length = self.editor.get_active_document_length();
        if position >= length {
            return length;
        }
        let mut probe = INITIAL_PROBE;
        loop {
            let mut end = position.saturating_add(probe).min(length);
            if end < length {
                end = self.char_start_at(end).max(position);
            }
            let text = self.editor.get_mapped_text_range(position, end);
            let tokenizer = self.tokenizer(text.as_chars());
            let index = tokenizer.next_token_end(0);
            if index < text.len() || end == length {
                return text.to_original_index(index);
            }
            log::trace!("no token end within {probe} bytes after {position}");
            probe *= 2;
        }
    }

    /// Select the next misspelling after the caret, wrapping around once.
    ///
    /// Returns the selected range, or `None` (selection untouched) when the document has
    /// no misspellings.
    pub fn find_next_mistake(&mut self) -> Option<Range<usize>> {
        let length = self.editor.get_active_document_length();
        let cursor = self.editor.get_current_pos();
        self.current_position = Some(cursor);
        if length == 0 {
            return None;
        }

        let window = self.settings.find_window_size.max(1);
        let line = self.editor.line_from_position(cursor);
        let mut from = self.editor.get_line_start_position(line);
        let mut full_check = false;

        loop {
            let mut to = from.saturating_add(window).min(length);
            if to < length {
                to = self.next_token_end_in_document(to);
            }
            log::debug!("find next: scanning {from}..{to}");

            let text = self.editor.get_mapped_text_range(from, to);
            let position = self.current_position.unwrap_or(0);
            if let Some((start, end)) = self.find_first_misspelling(&text, position) {
                self.editor.set_selection(start, end);
                return Some(start..end);
            }

            if to >= length {
                if full_check {
                    break;
                }
                log::debug!("find next: reached end of document, wrapping around");
                full_check = true;
                self.current_position = Some(0);
                from = 0;
                continue;
            }
            from = to;
            if full_check && from > cursor {
                break;
            }
        }
        None
    }

    /// Select the previous misspelling before the caret, wrapping around once.
    pub fn find_prev_mistake(&mut self) -> Option<Range<usize>> {
        let length = self.editor.get_active_document_length();
        let cursor = self.editor.get_current_pos();
        self.current_position = Some(cursor);
        if length == 0 {
            return None;
        }

        let window = self.settings.find_window_size.max(1);
        let line = self.editor.line_from_position(cursor);
        let mut to = self.editor.get_line_end_position(line);
        let mut full_check = false;

        loop {
            let mut from = to.saturating_sub(window);
            if from > 0 {
                from = self.prev_token_begin_in_document(from);
            }
            log::debug!("find previous: scanning {from}..{to}");

            let text = self.editor.get_mapped_text_range(from, to);
            let position = self.current_position.unwrap_or(length + 1);
            if let Some((start, end)) = self.find_last_misspelling(&text, position) {
                self.editor.set_selection(start, end);
                return Some(start..end);
            }

            if from == 0 {
                if full_check {
                    break;
                }
                log::debug!("find previous: reached start of document, wrapping around");
                full_check = true;
                self.current_position = Some(length + 1);
                to = length;
                continue;
            }
            to = from;
            if full_check && to < cursor {
                break;
            }
        }
        None
    }

    /// Sorted, case-insensitively deduplicated misspellings, one per line.
    pub fn get_all_misspellings_as_string(&self) -> String {
        let mut words: Vec<String> = self
            .get_misspelled_words(&self.document_text())
            .into_iter()
            .map(|m| m.word)
            .collect();
        words.sort_by_key(|w| w.to_lowercase());
        words.dedup_by(|a, b| a.to_lowercase() == b.to_lowercase());

        let mut out = String::new();
        for word in words {
            out.push_str(&word);
            out.push('\n');
        }
        out
    }

    /// Delete every misspelling in one undo step. Returns the number of words removed.
    pub fn erase_all_misspellings(&mut self) -> usize {
        let misspellings = self.get_misspelled_words(&self.document_text());
        if misspellings.is_empty() {
            return 0;
        }

        self.editor.begin_undo_action();
        let mut removed = 0;
        for m in &misspellings {
            let length = m.end - m.start;
            self.editor.delete_range(m.start - removed, length);
            removed += length;
        }
        self.editor.end_undo_action();
        misspellings.len()
    }

    /// Bookmark every line holding a misspelling.
    pub fn mark_lines_with_misspelling(&mut self) {
        for m in self.get_misspelled_words(&self.document_text()) {
            let line = self.editor.line_from_position(m.start);
            self.editor.add_bookmark(line);
        }
    }

    fn word_at(&self, position: usize) -> Option<(MappedText, Token)> {
        let line = self.editor.line_from_position(position);
        let text = self.editor.get_mapped_text_line(line);
        let chars = text.as_chars();
        if chars.is_empty() {
            return None;
        }

        let rule = self.delimiter_rule();
        let mut index = text.from_original_index(position);
        if index >= chars.len() || rule.is_delimiter(chars[index]) {
            // Right after a word still counts as being on it.
            index = index.checked_sub(1)?;
            if rule.is_delimiter(chars[index]) {
                return None;
            }
        }

        let tokenizer = Tokenizer::new(chars, rule, self.settings.split_camel_case);
        let token = Token {
            start: tokenizer.prev_token_begin(index),
            end: tokenizer.next_token_end(index),
        };
        if token.is_empty() {
            return None;
        }
        Some((text, token))
    }

    /// Byte range of the word at `position`.
    pub fn get_word_at(&self, position: usize) -> Option<Range<usize>> {
        self.word_at(position).map(|(text, token)| {
            text.to_original_index(token.start)..text.to_original_index(token.end)
        })
    }

    /// The word at `position` in speller form with its byte range, when it is eligible.
    fn eligible_word_at(&self, position: usize) -> Option<(WordForSpeller, usize, usize, String)> {
        let (text, token) = self.word_at(position)?;
        let chars = text.as_chars();
        let start = text.to_original_index(token.start);
        if !is_word_spell_checking_needed(
            &chars[token.start..token.end],
            start,
            &self.editor,
            &self.settings,
        ) {
            return None;
        }
        let token = cut_apostrophes(&self.settings, chars, token);
        if token.is_empty() {
            return None;
        }
        Some((
            to_word_for_speller(chars, token, &self.settings),
            text.to_original_index(token.start),
            text.to_original_index(token.end),
            text.substring(token.start, token.end),
        ))
    }

    /// Check the word at `position`.
    pub fn check_word_at(&self, position: usize) -> WordUnderCursor {
        let Some(range) = self.get_word_at(position) else {
            return WordUnderCursor {
                start: position,
                length: 0,
                is_correct: true,
            };
        };
        match self.eligible_word_at(position) {
            Some((word, start, end, _)) => WordUnderCursor {
                start,
                length: end - start,
                is_correct: !self.speller.is_working() || self.speller.check_word(&word),
            },
            None => WordUnderCursor {
                start: range.start,
                length: range.end - range.start,
                is_correct: true,
            },
        }
    }

    /// Check the word at the caret.
    pub fn is_word_under_cursor_correct(&self) -> WordUnderCursor {
        self.check_word_at(self.editor.get_current_pos())
    }

    /// Suggestions for the misspelled word at `position`.
    ///
    /// `None` when there is no word, it is skipped by the filters, or it is spelled
    /// correctly.
    pub fn get_suggestions_at(&self, position: usize) -> Option<Suggestions> {
        if !self.speller.is_working() {
            return None;
        }
        let (word, start, end, original) = self.eligible_word_at(position)?;
        if self.speller.check_word(&word) {
            return None;
        }
        let mut candidates = self.speller.get_suggestions(&word.text);
        candidates.truncate(self.settings.suggestion_count);
        Some(Suggestions {
            word: original,
            start,
            end,
            candidates,
        })
    }

    /// Add the word at the caret to the user dictionary and recheck.
    ///
    /// Returns `false` when there is no eligible word at the caret.
    pub fn add_word_under_cursor_to_dictionary(&mut self) -> bool {
        let Some((word, ..)) = self.eligible_word_at(self.editor.get_current_pos()) else {
            return false;
        };
        self.speller.add_to_dictionary(&word.text);
        self.recheck_visible();
        true
    }

    /// Ignore the word at the caret for the session and recheck.
    pub fn ignore_all_under_cursor(&mut self) -> bool {
        let Some((word, ..)) = self.eligible_word_at(self.editor.get_current_pos()) else {
            return false;
        };
        self.speller.ignore_all(&word.text);
        self.recheck_visible();
        true
    }

    /// Replace every token equal to `from` (ignoring case) with `to` and recheck.
    ///
    /// See [`replace::replace_all_tokens`].
    pub fn replace_all_tokens(&mut self, from: &str, to: &str, is_proper_name: bool) -> usize {
        let replaced =
            replace::replace_all_tokens(&mut self.editor, &self.settings, from, to, is_proper_name);
        if replaced > 0 {
            self.recheck_visible();
        }
        replaced
    }
}

fn compile_file_filter(settings: &Settings) -> Option<FileTypeFilter> {
    match FileTypeFilter::new(&settings.file_types) {
        Ok(filter) => Some(filter),
        Err(err) => {
            log::warn!("ignoring file type filter: {err}");
            None
        }
    }
}
