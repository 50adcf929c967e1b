#![warn(missing_docs)]
//! Spellcheck Core - Headless Spell-Checking Overlay Engine
//!
//! # Overview
//!
//! `spellcheck-core` finds misspelled words in a document owned by a host editor and reports
//! them back in the editor's own byte coordinates. It never renders anything and never owns
//! a dictionary: the editor and the speller are reached through two small traits.
//!
//! # Core Features
//!
//! - **Position-Mapped Text**: decoded `char` buffers that remember the byte offset of every
//!   character, including documents with invalid UTF-8
//! - **Configurable Tokenization**: explicit delimiter sets, non-alphabetic or non-ANSI
//!   splitting, optional CamelCase splitting
//! - **Word Admission Filter**: skips code identifiers, URLs, acronyms, numbers and short words
//! - **Windowed Navigation**: find next / previous misspelling with a single wrap-around and
//!   without loading the whole document
//! - **Whole-Document Operations**: list, erase (one undo step), bookmark, replace all
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  SpellChecker (scan, navigate, underline)   │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Word Filter & Conversions                  │  ← Admission rules
//! ├─────────────────────────────────────────────┤
//! │  Tokenizer (delimiters, CamelCase)          │  ← Token boundaries
//! ├─────────────────────────────────────────────┤
//! │  MappedText (chars ↔ byte offsets)          │  ← Normalization
//! ├──────────────────────┬──────────────────────┤
//! │  EditorInterface     │  SpellerInterface    │  ← Host boundaries
//! └──────────────────────┴──────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use spellcheck_core::{
//!     HeadlessEditor, Settings, SpellChecker, SpellerInterface, WordForSpeller,
//! };
//!
//! struct Vowelless;
//!
//! impl SpellerInterface for Vowelless {
//!     fn check_words(&self, words: &[WordForSpeller]) -> Vec<bool> {
//!         words
//!             .iter()
//!             .map(|w| w.text.chars().any(|c| "aeiou".contains(c)))
//!             .collect()
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
//! let editor = HeadlessEditor::new("one tw three frth");
//! let checker = SpellChecker::new(editor, Vowelless, Settings::default());
//! assert_eq!(checker.get_all_misspellings_as_string(), "frth\ntw\n");
//! ```
//!
//! # Module Description
//!
//! - [`mapped_text`] - Normalized text with a mapping back to byte offsets
//! - [`tokenizer`] - Token boundaries and delimiter rules
//! - [`word`] - Word admission filter and speller-form conversions
//! - [`checker`] - The misspelling scanner
//! - [`replace`] - Case-aware replace all
//! - [`editor`] / [`speller`] - Host boundaries
//! - [`headless`] - In-memory editor used by tests and tools
//!
//! # Encodings
//!
//! - UTF-8 documents are decoded per character; malformed sequences become U+FFFD
//! - ANSI documents map one byte to one character (Latin-1)

pub mod checker;
pub mod editor;
pub mod encoding;
pub mod error;
pub mod headless;
pub mod intervals;
pub mod line_index;
pub mod mapped_text;
pub mod replace;
pub mod settings;
pub mod speller;
pub mod storage;
pub mod text;
pub mod tokenizer;
pub mod undo;
pub mod word;

pub use checker::{CheckedWord, Misspelling, SpellChecker, WordUnderCursor};
pub use editor::{EditorInterface, IndicatorId};
pub use encoding::Codepage;
pub use error::{Result, SpellCheckError};
pub use headless::HeadlessEditor;
pub use mapped_text::{MappedText, OffsetMap};
pub use settings::{Settings, TokenizationStyle};
pub use speller::{DummySpeller, SpellerInterface, Suggestions};
pub use text::StringCase;
pub use tokenizer::{DelimiterRule, IsDelimiter, Token, Tokenizer};
pub use word::{FileTypeFilter, WordForSpeller};

pub use spellcheck_core_lang::{Lexer, StyleCategory, StyleId};
