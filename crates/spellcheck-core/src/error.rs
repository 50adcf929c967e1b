//! Error type shared by the fallible parts of the crate.
//!
//! The scanner itself never fails: an unavailable speller is not an error and index
//! arithmetic is guarded by debug assertions. Errors come from the headless editor's
//! checked editing API and from compiling user-supplied file patterns.

use thiserror::Error;

/// Errors reported by `spellcheck-core`.
#[derive(Debug, Error)]
pub enum SpellCheckError {
    /// A byte range that is reversed or extends past the end of the document.
    #[error("invalid range: {start}..{end}")]
    InvalidRange {
        /// Start byte offset.
        start: usize,
        /// End byte offset (exclusive).
        end: usize,
    },

    /// A byte offset past the end of the document.
    #[error("invalid offset: {0}")]
    InvalidOffset(usize),

    /// A `file_types` entry that could not be turned into a matcher.
    #[error("invalid file pattern `{pattern}`")]
    InvalidFilePattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// Undo requested with an empty history.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Redo requested with an empty redo stack.
    #[error("nothing to redo")]
    NothingToRedo,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SpellCheckError>;
