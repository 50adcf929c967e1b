//! In-memory editor.
//!
//! [`HeadlessEditor`] implements [`EditorInterface`] on top of a byte piece table, a rope
//! line index, grouped undo history and interval sets for styles and indicators. It lets
//! the scanner run without a host editor: in tests, in benchmarks, or in tools that check
//! plain buffers.
//!
//! # Example
//!
//! ```rust
//! use spellcheck_core::{EditorInterface, HeadlessEditor, IndicatorId};
//!
//! let mut editor = HeadlessEditor::new("hello world");
//! editor.indicator_fill_range(IndicatorId::SPELL_CHECK, 6, 11);
//! assert_eq!(editor.indicator_ranges(IndicatorId::SPELL_CHECK), vec![6..11]);
//! ```

use crate::editor::{EditorInterface, IndicatorId};
use crate::encoding::{self, Codepage};
use crate::error::{Result, SpellCheckError};
use crate::intervals::IntervalSet;
use crate::line_index::LineIndex;
use crate::storage::PieceTable;
use crate::undo::{TextEdit, UndoRedoManager};
use spellcheck_core_lang::{Lexer, StyleId};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

const DEFAULT_LINES_ON_SCREEN: usize = 100;

/// In-memory implementation of the editor boundary.
#[derive(Debug)]
pub struct HeadlessEditor {
    storage: PieceTable,
    lines: LineIndex,
    history: UndoRedoManager,
    codepage: Codepage,
    path: String,
    lexer: Lexer,
    styles: IntervalSet,
    hotspot_styles: BTreeSet<StyleId>,
    indicators: BTreeMap<IndicatorId, IntervalSet>,
    bookmarks: BTreeSet<usize>,
    anchor: usize,
    caret: usize,
    first_visible_line: usize,
    lines_on_screen: usize,
    hidden_lines: BTreeSet<usize>,
    visible_columns: Option<Range<usize>>,
}

impl Default for HeadlessEditor {
    fn default() -> Self {
        Self::from_bytes(&[], Codepage::Utf8)
    }
}

impl HeadlessEditor {
    /// Create a UTF-8 editor holding `text`.
    pub fn new(text: &str) -> Self {
        Self::from_bytes(text.as_bytes(), Codepage::Utf8)
    }

    /// Create an editor from raw bytes in `codepage`.
    pub fn from_bytes(bytes: &[u8], codepage: Codepage) -> Self {
        Self {
            storage: PieceTable::new(bytes),
            lines: LineIndex::from_bytes(bytes),
            history: UndoRedoManager::default(),
            codepage,
            path: String::new(),
            lexer: Lexer::Null,
            styles: IntervalSet::new(),
            hotspot_styles: BTreeSet::new(),
            indicators: BTreeMap::new(),
            bookmarks: BTreeSet::new(),
            anchor: 0,
            caret: 0,
            first_visible_line: 0,
            lines_on_screen: DEFAULT_LINES_ON_SCREEN,
            hidden_lines: BTreeSet::new(),
            visible_columns: None,
        }
    }

    /// Replace the document with `text` (encoded for the current codepage).
    ///
    /// History, styles, indicators, bookmarks and the selection are reset.
    pub fn set_text(&mut self, text: &str) {
        let bytes = encoding::encode(text, self.codepage);
        self.set_bytes(&bytes);
    }

    /// Replace the document with raw bytes.
    pub fn set_bytes(&mut self, bytes: &[u8]) {
        self.storage = PieceTable::new(bytes);
        self.lines = LineIndex::from_bytes(bytes);
        self.history = UndoRedoManager::default();
        self.styles.clear();
        self.indicators.clear();
        self.bookmarks.clear();
        self.anchor = 0;
        self.caret = 0;
    }

    /// Document decoded to a `String`.
    pub fn text(&self) -> String {
        encoding::decode(&self.storage.get_bytes(), self.codepage)
    }

    /// Raw document bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.storage.get_bytes()
    }

    /// Change the document encoding without touching the bytes.
    pub fn set_codepage(&mut self, codepage: Codepage) {
        self.codepage = codepage;
    }

    /// Set the path reported to the file-type filter.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Set the active lexer.
    pub fn set_lexer(&mut self, lexer: Lexer) {
        self.lexer = lexer;
    }

    /// Style `from..to` with `style`.
    pub fn set_style_range(&mut self, from: usize, to: usize, style: StyleId) {
        self.styles.fill(from, to, style);
    }

    /// Mark `style` as a hotspot style.
    pub fn set_hotspot_style(&mut self, style: StyleId) {
        self.hotspot_styles.insert(style);
    }

    /// Place the caret at `position` with an empty selection.
    pub fn set_cursor(&mut self, position: usize) {
        let position = position.min(self.storage.len());
        self.anchor = position;
        self.caret = position;
    }

    /// Current selection as a byte range.
    pub fn selection(&self) -> Range<usize> {
        self.anchor.min(self.caret)..self.anchor.max(self.caret)
    }

    /// Selected text.
    pub fn selected_text(&self) -> String {
        let Range { start, end } = self.selection();
        encoding::decode(&self.storage.get_range(start, end), self.codepage)
    }

    /// Scroll so that display line `first_line` is on top and `lines_on_screen` fit.
    pub fn set_viewport(&mut self, first_line: usize, lines_on_screen: usize) {
        self.first_visible_line = first_line;
        self.lines_on_screen = lines_on_screen;
    }

    /// Hide (fold away) document `lines`.
    pub fn fold_lines(&mut self, lines: Range<usize>) {
        self.hidden_lines.extend(lines);
    }

    /// Show only byte columns `columns` of every line (horizontal scrolling).
    pub fn set_visible_columns(&mut self, columns: Option<Range<usize>>) {
        self.visible_columns = columns;
    }

    /// Ranges painted with `indicator`.
    pub fn indicator_ranges(&self, indicator: IndicatorId) -> Vec<Range<usize>> {
        self.indicators
            .get(&indicator)
            .map(IntervalSet::ranges)
            .unwrap_or_default()
    }

    /// Bookmarked lines in ascending order.
    pub fn bookmarks(&self) -> Vec<usize> {
        self.bookmarks.iter().copied().collect()
    }

    /// Returns `true` if an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Revert the most recent edit group.
    pub fn undo(&mut self) -> Result<()> {
        let edits = self
            .history
            .pop_undo_group()
            .ok_or(SpellCheckError::NothingToUndo)?;
        for edit in edits {
            self.apply_raw(edit.offset, edit.inserted.len(), &edit.deleted);
        }
        Ok(())
    }

    /// Re-apply the most recently undone edit group.
    pub fn redo(&mut self) -> Result<()> {
        let edits = self
            .history
            .pop_redo_group()
            .ok_or(SpellCheckError::NothingToRedo)?;
        for edit in edits {
            self.apply_raw(edit.offset, edit.deleted.len(), &edit.inserted);
        }
        Ok(())
    }

    /// Checked replacement: rejects reversed or out-of-document ranges.
    pub fn try_replace(&mut self, from: usize, to: usize, text: &[u8]) -> Result<()> {
        if from > to || to > self.storage.len() {
            return Err(SpellCheckError::InvalidRange {
                start: from,
                end: to,
            });
        }
        self.replace_text(from, to, text);
        Ok(())
    }

    /// Checked caret placement.
    pub fn try_set_cursor(&mut self, position: usize) -> Result<()> {
        if position > self.storage.len() {
            return Err(SpellCheckError::InvalidOffset(position));
        }
        self.set_cursor(position);
        Ok(())
    }

    fn apply_raw(&mut self, offset: usize, remove: usize, insert: &[u8]) {
        let end = offset + remove;
        if remove > 0 {
            self.storage.delete(offset, remove);
            self.lines.delete(offset, remove);
            self.styles.update_for_deletion(offset, end);
            for set in self.indicators.values_mut() {
                set.update_for_deletion(offset, end);
            }
        }
        if !insert.is_empty() {
            self.storage.insert(offset, insert);
            self.lines.insert(offset, insert);
            self.styles.update_for_insertion(offset, insert.len());
            for set in self.indicators.values_mut() {
                set.update_for_insertion(offset, insert.len());
            }
        }

        let shift = |pos: usize| {
            if pos >= end {
                pos - remove + insert.len()
            } else if pos > offset {
                offset
            } else {
                pos
            }
        };
        self.anchor = shift(self.anchor);
        self.caret = shift(self.caret);
    }
}

impl EditorInterface for HeadlessEditor {
    fn get_encoding(&self) -> Codepage {
        self.codepage
    }

    fn get_active_document_length(&self) -> usize {
        self.storage.len()
    }

    fn get_text_range(&self, from: usize, to: usize) -> Vec<u8> {
        debug_assert!(from <= to, "reversed range {from}..{to}");
        self.storage.get_range(from, to)
    }

    fn get_current_pos(&self) -> usize {
        self.caret
    }

    fn line_from_position(&self, position: usize) -> usize {
        self.lines.line_of(position)
    }

    fn get_line_start_position(&self, line: usize) -> usize {
        self.lines.line_start(line)
    }

    fn get_line_end_position(&self, line: usize) -> usize {
        self.lines.line_end(line)
    }

    fn get_line_count(&self) -> usize {
        self.lines.line_count()
    }

    fn get_full_current_path(&self) -> String {
        self.path.clone()
    }

    fn get_lexer(&self) -> Lexer {
        self.lexer
    }

    fn get_style_at(&self, position: usize) -> StyleId {
        self.styles.value_at(position)
    }

    fn is_style_hotspot(&self, style: StyleId) -> bool {
        self.hotspot_styles.contains(&style)
    }

    fn get_indicator_value_at(&self, indicator: IndicatorId, position: usize) -> u32 {
        self.indicators
            .get(&indicator)
            .map_or(0, |set| set.value_at(position))
    }

    fn get_first_visible_line(&self) -> usize {
        self.first_visible_line
    }

    fn get_lines_on_screen(&self) -> usize {
        self.lines_on_screen
    }

    fn get_document_line_from_visible(&self, visible_line: usize) -> usize {
        (0..self.lines.line_count())
            .filter(|line| !self.hidden_lines.contains(line))
            .nth(visible_line)
            .unwrap_or(self.lines.line_count())
    }

    fn is_line_visible(&self, line: usize) -> bool {
        !self.hidden_lines.contains(&line)
    }

    fn get_visible_line_range(&self, line: usize) -> Range<usize> {
        let start = self.lines.line_start(line);
        let end = self.lines.line_end(line);
        match &self.visible_columns {
            Some(columns) => {
                (start + columns.start).min(end)..(start + columns.end).min(end)
            }
            None => start..end,
        }
    }

    fn set_selection(&mut self, from: usize, to: usize) {
        let len = self.storage.len();
        self.anchor = from.min(len);
        self.caret = to.min(len);
    }

    fn replace_text(&mut self, from: usize, to: usize, text: &[u8]) {
        debug_assert!(from <= to, "reversed range {from}..{to}");
        let len = self.storage.len();
        let from = from.min(len);
        let to = to.clamp(from, len);
        if from == to && text.is_empty() {
            return;
        }
        let deleted = self.storage.get_range(from, to);
        self.apply_raw(from, to - from, text);
        self.history.push(TextEdit {
            offset: from,
            deleted,
            inserted: text.to_vec(),
        });
    }

    fn begin_undo_action(&mut self) {
        self.history.begin_group();
    }

    fn end_undo_action(&mut self) {
        self.history.end_group();
    }

    fn indicator_fill_range(&mut self, indicator: IndicatorId, from: usize, to: usize) {
        self.indicators.entry(indicator).or_default().fill(from, to, 1);
    }

    fn indicator_clear_range(&mut self, indicator: IndicatorId, from: usize, to: usize) {
        if let Some(set) = self.indicators.get_mut(&indicator) {
            set.clear_range(from, to);
        }
    }

    fn add_bookmark(&mut self, line: usize) {
        self.bookmarks.insert(line);
    }
}
