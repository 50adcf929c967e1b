//! Line index for the headless editor.
//!
//! Lines are tracked with a `ropey::Rope` holding a one-char-per-byte projection of the
//! document, so rope char indices equal document byte offsets. Only `\n`, `\r\n` and a lone
//! `\r` end a line; every other byte that ropey would treat as a break is projected to a
//! space.

use ropey::Rope;

fn project(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            b'\n' | b'\r' => char::from(b),
            0x0B | 0x0C | 0x85 => ' ',
            other => char::from(other),
        })
        .collect()
}

/// Rope-backed line index over byte offsets.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty index (one empty line).
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Index `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            rope: Rope::from_str(&project(bytes)),
        }
    }

    /// Total line count.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total byte count.
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns `true` for an empty document.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Line containing byte `offset` (clamped to the last line).
    pub fn line_of(&self, offset: usize) -> usize {
        self.rope.char_to_line(offset.min(self.rope.len_chars()))
    }

    /// Offset of the first byte of `line`; past-the-end lines map to the document end.
    pub fn line_start(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line)
    }

    /// Offset where `line`'s terminator begins.
    pub fn line_end(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let start = self.rope.line_to_char(line);
        let slice = self.rope.line(line);
        let mut end = start + slice.len_chars();
        let mut chars = slice.chars_at(slice.len_chars()).reversed();
        match chars.next() {
            Some('\n') => {
                end -= 1;
                if chars.next() == Some('\r') {
                    end -= 1;
                }
            }
            Some('\r') => end -= 1,
            _ => {}
        }
        end
    }

    /// Record `bytes` inserted at `offset`.
    pub fn insert(&mut self, offset: usize, bytes: &[u8]) {
        let offset = offset.min(self.rope.len_chars());
        self.rope.insert(offset, &project(bytes));
    }

    /// Record the deletion of `len` bytes at `offset`.
    pub fn delete(&mut self, offset: usize, len: usize) {
        let start = offset.min(self.rope.len_chars());
        let end = (offset + len).min(self.rope.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}
