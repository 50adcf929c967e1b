//! The editor boundary.
//!
//! [`EditorInterface`] is the narrow set of queries and commands the scanner needs from a
//! host editor. Every position is a byte offset into the document in the editor's own
//! encoding. Implementations clamp out-of-range requests; a reversed range is a logic error
//! and trips a debug assertion.

use crate::encoding::{self, Codepage, utf8_is_continuation, utf8_is_lead, utf8_symbol_len};
use crate::mapped_text::MappedText;
use spellcheck_core_lang::{Lexer, StyleId};
use std::ops::Range;

/// Indicator (underline layer) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndicatorId(pub u32);

impl IndicatorId {
    /// Hyperlink indicator painted by the host over detected URLs.
    pub const URL: Self = Self(8);

    /// Squiggly underline used for misspellings.
    pub const SPELL_CHECK: Self = Self(19);
}

/// Queries and commands consumed from the host editor (active view).
pub trait EditorInterface {
    /// Encoding of the active document.
    fn get_encoding(&self) -> Codepage;

    /// Document length in bytes.
    fn get_active_document_length(&self) -> usize;

    /// Raw bytes of `from..to`.
    fn get_text_range(&self, from: usize, to: usize) -> Vec<u8>;

    /// Caret position.
    fn get_current_pos(&self) -> usize;

    /// Line containing `position`.
    fn line_from_position(&self, position: usize) -> usize;

    /// First byte of `line`.
    fn get_line_start_position(&self, line: usize) -> usize;

    /// End of `line`, excluding the line terminator.
    fn get_line_end_position(&self, line: usize) -> usize;

    /// Number of lines (an empty document has one).
    fn get_line_count(&self) -> usize;

    /// Path of the active file (may be empty for unsaved buffers).
    fn get_full_current_path(&self) -> String;

    /// Active lexer.
    fn get_lexer(&self) -> Lexer;

    /// Lexer style at `position`.
    fn get_style_at(&self, position: usize) -> StyleId;

    /// Returns `true` if `style` is rendered as a clickable hotspot.
    fn is_style_hotspot(&self, style: StyleId) -> bool;

    /// Value of `indicator` at `position` (0 when unset).
    fn get_indicator_value_at(&self, indicator: IndicatorId, position: usize) -> u32;

    /// First visible (display) line.
    fn get_first_visible_line(&self) -> usize;

    /// Number of display lines on screen.
    fn get_lines_on_screen(&self) -> usize;

    /// Document line shown at display line `visible_line`.
    fn get_document_line_from_visible(&self, visible_line: usize) -> usize;

    /// Returns `false` for lines hidden by folding.
    fn is_line_visible(&self, _line: usize) -> bool {
        true
    }

    /// Horizontally visible part of `line`.
    ///
    /// Editors without horizontal clipping report the whole line.
    fn get_visible_line_range(&self, line: usize) -> Range<usize> {
        self.get_line_start_position(line)..self.get_line_end_position(line)
    }

    /// Select `from..to` and move the caret to `to`.
    fn set_selection(&mut self, from: usize, to: usize);

    /// Replace `from..to` with `text` (already in the editor encoding).
    fn replace_text(&mut self, from: usize, to: usize, text: &[u8]);

    /// Delete `length` bytes starting at `from`.
    fn delete_range(&mut self, from: usize, length: usize) {
        self.replace_text(from, from + length, &[]);
    }

    /// Open an undo group; edits until [`EditorInterface::end_undo_action`] undo together.
    fn begin_undo_action(&mut self);

    /// Close the undo group.
    fn end_undo_action(&mut self);

    /// Paint `indicator` over `from..to`.
    fn indicator_fill_range(&mut self, indicator: IndicatorId, from: usize, to: usize);

    /// Remove `indicator` from `from..to`.
    fn indicator_clear_range(&mut self, indicator: IndicatorId, from: usize, to: usize);

    /// Bookmark `line`.
    fn add_bookmark(&mut self, line: usize);

    /// Decode `from..to` into position-mapped text carrying absolute offsets.
    fn get_mapped_text_range(&self, from: usize, to: usize) -> MappedText {
        debug_assert!(from <= to, "reversed range {from}..{to}");
        let bytes = self.get_text_range(from, to);
        MappedText::from_bytes(&bytes, self.get_encoding()).with_base_offset(from)
    }

    /// Decode one line (without its terminator).
    fn get_mapped_text_line(&self, line: usize) -> MappedText {
        self.get_mapped_text_range(
            self.get_line_start_position(line),
            self.get_line_end_position(line),
        )
    }

    /// Start of the character before `position`.
    fn get_prev_valid_begin_pos(&self, position: usize) -> usize {
        if position == 0 {
            return 0;
        }
        match self.get_encoding() {
            Codepage::Ansi => position - 1,
            Codepage::Utf8 => {
                let from = position.saturating_sub(4);
                let bytes = self.get_text_range(from, position);
                let mut index = bytes.len();
                while index > 0 {
                    index -= 1;
                    if !utf8_is_continuation(bytes[index]) {
                        break;
                    }
                }
                from + index
            }
        }
    }

    /// End of the character containing `position`.
    ///
    /// Never lands inside a multibyte character, even when `position` does.
    fn get_next_valid_end_pos(&self, position: usize) -> usize {
        let length = self.get_active_document_length();
        if position >= length {
            return length;
        }
        match self.get_encoding() {
            Codepage::Ansi => position + 1,
            Codepage::Utf8 => {
                let to = (position + 4).min(length);
                let bytes = self.get_text_range(position, to);
                let step = bytes.first().map_or(1, |&b| utf8_symbol_len(b));
                let mut end = (position + step).min(to);
                while end < to && bytes.get(end - position).is_some_and(|&b| !utf8_is_lead(b)) {
                    end += 1;
                }
                end
            }
        }
    }

    /// Encode `text` for this document.
    fn to_editor_encoding(&self, text: &str) -> Vec<u8> {
        encoding::encode(text, self.get_encoding())
    }
}
