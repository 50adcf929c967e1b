//! Byte piece table backing the headless editor.
//!
//! Documents are stored exactly as the host would store them: raw bytes in the document
//! encoding, possibly invalid. Edits never copy the original buffer; inserted bytes go to an
//! append-only buffer and the document is described by a list of pieces.

/// Buffer a piece points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// Read-only original buffer.
    Original,
    /// Append-only add buffer.
    Add,
}

/// A fragment of one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// Buffer this piece refers to.
    pub buffer: BufferKind,
    /// Start offset in that buffer.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
}

impl Piece {
    fn split(self, at: usize) -> (Piece, Piece) {
        debug_assert!(at > 0 && at < self.len);
        (
            Piece { len: at, ..self },
            Piece {
                start: self.start + at,
                len: self.len - at,
                ..self
            },
        )
    }
}

/// Piece table over bytes.
#[derive(Debug, Clone, Default)]
pub struct PieceTable {
    original: Vec<u8>,
    add: Vec<u8>,
    pieces: Vec<Piece>,
    len: usize,
}

impl PieceTable {
    /// Create a table holding `bytes`.
    pub fn new(bytes: &[u8]) -> Self {
        let pieces = if bytes.is_empty() {
            Vec::new()
        } else {
            vec![Piece {
                buffer: BufferKind::Original,
                start: 0,
                len: bytes.len(),
            }]
        };
        Self {
            original: bytes.to_vec(),
            add: Vec::new(),
            pieces,
            len: bytes.len(),
        }
    }

    /// Document length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for an empty document.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of pieces (diagnostics).
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    fn buffer(&self, kind: BufferKind) -> &[u8] {
        match kind {
            BufferKind::Original => &self.original,
            BufferKind::Add => &self.add,
        }
    }

    /// Make sure a piece boundary exists at `offset` and return the index of the piece that
    /// starts there (or `pieces.len()` at the end).
    fn split_at(&mut self, offset: usize) -> usize {
        let mut acc = 0;
        for idx in 0..self.pieces.len() {
            let piece = self.pieces[idx];
            if offset == acc {
                return idx;
            }
            if offset < acc + piece.len {
                let (left, right) = piece.split(offset - acc);
                self.pieces.splice(idx..=idx, [left, right]);
                return idx + 1;
            }
            acc += piece.len;
        }
        self.pieces.len()
    }

    /// Insert `bytes` at `offset` (clamped to the end).
    pub fn insert(&mut self, offset: usize, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let offset = offset.min(self.len);
        let add_start = self.add.len();
        self.add.extend_from_slice(bytes);

        let idx = self.split_at(offset);

        // Consecutive typing extends the previous add piece instead of growing the list.
        if idx > 0 {
            let prev = &mut self.pieces[idx - 1];
            if prev.buffer == BufferKind::Add && prev.start + prev.len == add_start {
                prev.len += bytes.len();
                self.len += bytes.len();
                return;
            }
        }

        self.pieces.insert(
            idx,
            Piece {
                buffer: BufferKind::Add,
                start: add_start,
                len: bytes.len(),
            },
        );
        self.len += bytes.len();
    }

    /// Delete `len` bytes starting at `offset` (clamped to the end).
    pub fn delete(&mut self, offset: usize, len: usize) {
        let start = offset.min(self.len);
        let end = (offset + len).min(self.len);
        if start >= end {
            return;
        }
        let first = self.split_at(start);
        let last = self.split_at(end);
        self.pieces.drain(first..last);
        self.len -= end - start;
    }

    /// Bytes in `from..to` (clamped).
    pub fn get_range(&self, from: usize, to: usize) -> Vec<u8> {
        let to = to.min(self.len);
        let mut out = Vec::with_capacity(to.saturating_sub(from));
        let mut acc = 0;
        for piece in &self.pieces {
            let piece_end = acc + piece.len;
            if piece_end > from && acc < to {
                let lo = from.max(acc) - acc;
                let hi = to.min(piece_end) - acc;
                let buffer = self.buffer(piece.buffer);
                out.extend_from_slice(&buffer[piece.start + lo..piece.start + hi]);
            }
            if piece_end >= to {
                break;
            }
            acc = piece_end;
        }
        out
    }

    /// The whole document.
    pub fn get_bytes(&self) -> Vec<u8> {
        self.get_range(0, self.len)
    }

    /// Byte at `offset`.
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.get_range(offset, offset + 1).first().copied()
    }
}
