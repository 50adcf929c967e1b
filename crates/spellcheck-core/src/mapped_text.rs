//! Position-mapped text.
//!
//! Linguistic analysis (case tests, token boundaries, per-character classes) runs over a
//! normalized `char` buffer, while the editor only understands byte offsets into its own
//! encoding. [`MappedText`] carries both: the decoded characters and, for every character,
//! the byte offset it came from. Every word range found in the normalized text can be
//! translated back with [`MappedText::to_original_index`].

use crate::encoding::{Codepage, utf8_is_continuation};

/// Mapping from normalized character indices to original byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetMap {
    /// `offsets[i] == i` for every index, including the end sentinel.
    Identity,
    /// One entry per character plus a trailing sentinel holding the original end offset.
    ///
    /// Always non-decreasing and exactly `len + 1` entries long.
    Explicit(Vec<usize>),
}

/// Normalized text paired with a mapping back to original byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedText {
    text: Vec<char>,
    offsets: OffsetMap,
}

impl Default for MappedText {
    fn default() -> Self {
        Self {
            text: Vec::new(),
            offsets: OffsetMap::Identity,
        }
    }
}

impl From<&str> for MappedText {
    /// Identity-mapped text where original offsets are character indices.
    fn from(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            offsets: OffsetMap::Identity,
        }
    }
}

impl MappedText {
    /// Create an empty mapped text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a single-byte buffer: one character per byte, identity mapping.
    pub fn from_bytes_identity(bytes: &[u8]) -> Self {
        Self {
            text: bytes.iter().map(|&b| char::from(b)).collect(),
            offsets: OffsetMap::Identity,
        }
    }

    /// Decode a UTF-8 buffer, recording the start byte of every character.
    ///
    /// The slice may begin in the middle of a character when the caller cut an arbitrary
    /// byte range; leading continuation bytes are skipped. Invalid sequences decode to
    /// U+FFFD so that damaged documents can still be scanned.
    pub fn from_bytes_multibyte(bytes: &[u8]) -> Self {
        let skip = bytes
            .iter()
            .take_while(|&&b| utf8_is_continuation(b))
            .count();

        let mut text = Vec::with_capacity(bytes.len() - skip);
        let mut offsets = Vec::with_capacity(bytes.len() - skip + 1);
        let mut pos = skip;

        for chunk in bytes[skip..].utf8_chunks() {
            let valid = chunk.valid();
            for (i, c) in valid.char_indices() {
                text.push(c);
                offsets.push(pos + i);
            }
            pos += valid.len();

            let invalid = chunk.invalid();
            if !invalid.is_empty() {
                text.push(char::REPLACEMENT_CHARACTER);
                offsets.push(pos);
                pos += invalid.len();
            }
        }
        offsets.push(bytes.len());

        Self {
            text,
            offsets: OffsetMap::Explicit(offsets),
        }
    }

    /// Decode `bytes` according to the document encoding.
    pub fn from_bytes(bytes: &[u8], codepage: Codepage) -> Self {
        match codepage {
            Codepage::Ansi => Self::from_bytes_identity(bytes),
            Codepage::Utf8 => Self::from_bytes_multibyte(bytes),
        }
    }

    /// Shift every original offset by `base`.
    ///
    /// Used when the decoded bytes were fetched from a range that does not start at the
    /// beginning of the document.
    pub fn with_base_offset(mut self, base: usize) -> Self {
        if base == 0 {
            return self;
        }
        let offsets = match self.offsets {
            OffsetMap::Identity => (0..=self.text.len()).map(|i| i + base).collect(),
            OffsetMap::Explicit(offsets) => offsets.into_iter().map(|o| o + base).collect(),
        };
        self.offsets = OffsetMap::Explicit(offsets);
        self
    }

    /// Normalized characters.
    pub fn as_chars(&self) -> &[char] {
        &self.text
    }

    /// Offset mapping.
    pub fn offsets(&self) -> &OffsetMap {
        &self.offsets
    }

    /// Number of normalized characters.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if there are no characters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Collect the characters in `start..end` into a `String`.
    pub fn substring(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }

    /// Original byte offset of the character at `index`.
    ///
    /// `index == len()` yields the end sentinel.
    pub fn to_original_index(&self, index: usize) -> usize {
        debug_assert!(index <= self.text.len(), "index {index} out of bounds");
        match &self.offsets {
            OffsetMap::Identity => index,
            OffsetMap::Explicit(offsets) => {
                let clamped = index.min(offsets.len() - 1);
                offsets[clamped]
            }
        }
    }

    /// Index of the first character whose original offset is `>= original`.
    pub fn from_original_index(&self, original: usize) -> usize {
        match &self.offsets {
            OffsetMap::Identity => original.min(self.text.len()),
            OffsetMap::Explicit(offsets) => offsets
                .partition_point(|&o| o < original)
                .min(self.text.len()),
        }
    }

    /// Original offset one past the last character.
    pub fn original_length(&self) -> usize {
        match &self.offsets {
            OffsetMap::Identity => self.text.len(),
            OffsetMap::Explicit(offsets) => offsets.last().copied().unwrap_or(0),
        }
    }

    /// Append another fragment.
    ///
    /// When both sides are non-empty a `'\n'` separator is inserted; it maps to this
    /// fragment's end offset. Offsets are concatenated as-is, so both fragments must already
    /// carry absolute offsets.
    pub fn append(&mut self, other: MappedText) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = other;
            return;
        }

        let mut offsets = self.take_explicit_offsets();
        let other_len = other.text.len();
        self.text.push('\n');
        self.text.extend(other.text);
        match other.offsets {
            OffsetMap::Identity => offsets.extend(0..=other_len),
            OffsetMap::Explicit(other_offsets) => offsets.extend(other_offsets),
        }
        self.offsets = OffsetMap::Explicit(offsets);
    }

    fn take_explicit_offsets(&mut self) -> Vec<usize> {
        match std::mem::replace(&mut self.offsets, OffsetMap::Identity) {
            OffsetMap::Identity => (0..=self.text.len()).collect(),
            OffsetMap::Explicit(offsets) => offsets,
        }
    }
}

impl std::fmt::Display for MappedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        for &c in &self.text {
            f.write_char(c)?;
        }
        Ok(())
    }
}
