#![warn(missing_docs)]
//! `spellcheck-core-lang` - data-driven lexer/style classification for `spellcheck-core`.
//!
//! Host editors colour text with a lexer that assigns a numeric style to every position.
//! The spell checker does not care about colours; it only needs to know whether a word sits
//! in prose, a comment, a string literal, an identifier, or something it should never touch
//! (keywords, numbers, operators). This crate maps `(lexer, style)` pairs to that coarse
//! [`StyleCategory`] using small static tables, so supporting another lexer is a data change.
//!
//! Style numbers follow the Scintilla lexers the tables are named after.

/// Numeric style id as reported by the host lexer.
pub type StyleId = u32;

/// Coarse classification of a styled position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    /// Prose: always a spell-check candidate.
    Text,
    /// Comment body.
    Comment,
    /// String or character literal.
    String,
    /// Variable / function name.
    Identifier,
    /// Anything else (keywords, numbers, markup tags, ...). Never checked.
    Unknown,
}

/// Lexers the classifier knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexer {
    /// Styling provided by the host itself.
    Container,
    /// Plain text, no lexer.
    Null,
    /// Python.
    Python,
    /// C, C++, and the C-like family sharing its lexer.
    Cpp,
    /// HTML.
    Html,
    /// XML.
    Xml,
    /// SQL.
    Sql,
    /// Properties / INI files.
    Properties,
    /// YAML.
    Yaml,
    /// Markdown.
    Markdown,
    /// Rust.
    Rust,
    /// Search results panel.
    SearchResult,
    /// A lexer without a classification table; treated as plain text.
    Other(u32),
}

impl Lexer {
    /// Resolve a lexer from its numeric id.
    pub fn from_id(id: u32) -> Self {
        match id {
            0 => Lexer::Container,
            1 => Lexer::Null,
            2 => Lexer::Python,
            3 => Lexer::Cpp,
            4 => Lexer::Html,
            5 => Lexer::Xml,
            7 => Lexer::Sql,
            9 => Lexer::Properties,
            48 => Lexer::Yaml,
            98 => Lexer::Markdown,
            111 => Lexer::Rust,
            150 => Lexer::SearchResult,
            other => Lexer::Other(other),
        }
    }

    /// Numeric id of this lexer.
    pub fn id(self) -> u32 {
        match self {
            Lexer::Container => 0,
            Lexer::Null => 1,
            Lexer::Python => 2,
            Lexer::Cpp => 3,
            Lexer::Html => 4,
            Lexer::Xml => 5,
            Lexer::Sql => 7,
            Lexer::Properties => 9,
            Lexer::Yaml => 48,
            Lexer::Markdown => 98,
            Lexer::Rust => 111,
            Lexer::SearchResult => 150,
            Lexer::Other(id) => id,
        }
    }

    /// Returns `true` for lexers whose every style is prose.
    pub fn is_plain_text(self) -> bool {
        matches!(self, Lexer::Container | Lexer::Null | Lexer::Other(_))
    }
}

/// Classification table for one lexer.
struct StyleTable {
    entries: &'static [(StyleId, StyleCategory)],
    fallback: StyleCategory,
}

impl StyleTable {
    fn lookup(&self, style: StyleId) -> StyleCategory {
        self.entries
            .iter()
            .find(|(id, _)| *id == style)
            .map(|(_, category)| *category)
            .unwrap_or(self.fallback)
    }
}

use StyleCategory::{Comment, Identifier, String as Str, Text};

/// Style ids of the C/C++ lexer.
pub mod cpp {
    use super::StyleId;
    /// Whitespace and unstyled code.
    pub const DEFAULT: StyleId = 0;
    /// `/* ... */`
    pub const COMMENT: StyleId = 1;
    /// `// ...`
    pub const COMMENT_LINE: StyleId = 2;
    /// `/** ... */`
    pub const COMMENT_DOC: StyleId = 3;
    /// Numeric literal.
    pub const NUMBER: StyleId = 4;
    /// Keyword.
    pub const WORD: StyleId = 5;
    /// `"..."`
    pub const STRING: StyleId = 6;
    /// `'x'`
    pub const CHARACTER: StyleId = 7;
    /// Preprocessor directive.
    pub const PREPROCESSOR: StyleId = 9;
    /// Identifier.
    pub const IDENTIFIER: StyleId = 11;
    /// Unterminated string.
    pub const STRING_EOL: StyleId = 12;
    /// Verbatim string.
    pub const VERBATIM: StyleId = 13;
    /// `/// ...`
    pub const COMMENT_LINE_DOC: StyleId = 15;
    /// Keyword inside a doc comment.
    pub const COMMENT_DOC_KEYWORD: StyleId = 17;
}

/// Style ids of the Python lexer.
pub mod python {
    use super::StyleId;
    /// Whitespace and unstyled code.
    pub const DEFAULT: StyleId = 0;
    /// `# ...`
    pub const COMMENT_LINE: StyleId = 1;
    /// `"..."`
    pub const STRING: StyleId = 3;
    /// `'...'`
    pub const CHARACTER: StyleId = 4;
    /// Keyword.
    pub const WORD: StyleId = 5;
    /// `'''...'''`
    pub const TRIPLE: StyleId = 6;
    /// `"""..."""`
    pub const TRIPLE_DOUBLE: StyleId = 7;
    /// Identifier.
    pub const IDENTIFIER: StyleId = 11;
    /// `## ...`
    pub const COMMENT_BLOCK: StyleId = 12;
    /// Unterminated string.
    pub const STRING_EOL: StyleId = 13;
}

/// Style ids shared by the HTML and XML lexers.
pub mod html {
    use super::StyleId;
    /// Text between tags.
    pub const DEFAULT: StyleId = 0;
    /// Known tag.
    pub const TAG: StyleId = 1;
    /// Attribute name.
    pub const ATTRIBUTE: StyleId = 3;
    /// `"..."` attribute value.
    pub const DOUBLE_STRING: StyleId = 6;
    /// `'...'` attribute value.
    pub const SINGLE_STRING: StyleId = 7;
    /// `<!-- ... -->`
    pub const COMMENT: StyleId = 9;
    /// `&amp;`
    pub const ENTITY: StyleId = 10;
    /// `<![CDATA[ ... ]]>`
    pub const CDATA: StyleId = 17;
}

/// Style ids of the SQL lexer.
pub mod sql {
    use super::StyleId;
    /// Whitespace and unstyled code.
    pub const DEFAULT: StyleId = 0;
    /// `/* ... */`
    pub const COMMENT: StyleId = 1;
    /// `-- ...`
    pub const COMMENT_LINE: StyleId = 2;
    /// Doc comment.
    pub const COMMENT_DOC: StyleId = 3;
    /// Keyword.
    pub const WORD: StyleId = 5;
    /// `"..."`
    pub const STRING: StyleId = 6;
    /// `'...'`
    pub const CHARACTER: StyleId = 7;
    /// Identifier.
    pub const IDENTIFIER: StyleId = 11;
    /// `# ...`
    pub const COMMENT_LINE_DOC: StyleId = 15;
}

/// Style ids of the properties / INI lexer.
pub mod properties {
    use super::StyleId;
    /// Value text.
    pub const DEFAULT: StyleId = 0;
    /// `; ...` or `# ...`
    pub const COMMENT: StyleId = 1;
    /// `[section]`
    pub const SECTION: StyleId = 2;
    /// `=`
    pub const ASSIGNMENT: StyleId = 3;
    /// Key name.
    pub const KEY: StyleId = 5;
}

/// Style ids of the YAML lexer.
pub mod yaml {
    use super::StyleId;
    /// Plain scalar.
    pub const DEFAULT: StyleId = 0;
    /// `# ...`
    pub const COMMENT: StyleId = 1;
    /// Mapping key.
    pub const IDENTIFIER: StyleId = 2;
    /// Keyword (`true`, `null`, ...).
    pub const KEYWORD: StyleId = 3;
    /// Number.
    pub const NUMBER: StyleId = 4;
    /// Block text.
    pub const TEXT: StyleId = 7;
}

/// Style ids of the Markdown lexer.
pub mod markdown {
    use super::StyleId;
    /// Inline code.
    pub const CODE: StyleId = 19;
    /// Double-backtick inline code.
    pub const CODE2: StyleId = 20;
    /// Fenced code block.
    pub const CODE_BLOCK: StyleId = 21;
}

/// Style ids of the Rust lexer.
pub mod rust {
    use super::StyleId;
    /// Whitespace and unstyled code.
    pub const DEFAULT: StyleId = 0;
    /// `/* ... */`
    pub const COMMENT_BLOCK: StyleId = 1;
    /// `// ...`
    pub const COMMENT_LINE: StyleId = 2;
    /// `/** ... */`
    pub const COMMENT_BLOCK_DOC: StyleId = 3;
    /// `/// ...`
    pub const COMMENT_LINE_DOC: StyleId = 4;
    /// `"..."`
    pub const STRING: StyleId = 13;
    /// `r"..."`
    pub const STRING_RAW: StyleId = 14;
    /// `'x'`
    pub const CHARACTER: StyleId = 15;
    /// Identifier.
    pub const IDENTIFIER: StyleId = 17;
    /// `b"..."`
    pub const BYTE_STRING: StyleId = 21;
}

static CPP: StyleTable = StyleTable {
    entries: &[
        (cpp::COMMENT, Comment),
        (cpp::COMMENT_LINE, Comment),
        (cpp::COMMENT_DOC, Comment),
        (cpp::COMMENT_LINE_DOC, Comment),
        (cpp::COMMENT_DOC_KEYWORD, Comment),
        (cpp::STRING, Str),
        (cpp::CHARACTER, Str),
        (cpp::STRING_EOL, Str),
        (cpp::VERBATIM, Str),
        (cpp::IDENTIFIER, Identifier),
    ],
    fallback: StyleCategory::Unknown,
};

static PYTHON: StyleTable = StyleTable {
    entries: &[
        (python::COMMENT_LINE, Comment),
        (python::COMMENT_BLOCK, Comment),
        (python::STRING, Str),
        (python::CHARACTER, Str),
        (python::TRIPLE, Str),
        (python::TRIPLE_DOUBLE, Str),
        (python::STRING_EOL, Str),
        (python::IDENTIFIER, Identifier),
    ],
    fallback: StyleCategory::Unknown,
};

static HTML: StyleTable = StyleTable {
    entries: &[
        (html::DEFAULT, Text),
        (html::COMMENT, Comment),
        (html::CDATA, Text),
        (html::DOUBLE_STRING, Str),
        (html::SINGLE_STRING, Str),
    ],
    fallback: StyleCategory::Unknown,
};

static SQL: StyleTable = StyleTable {
    entries: &[
        (sql::COMMENT, Comment),
        (sql::COMMENT_LINE, Comment),
        (sql::COMMENT_DOC, Comment),
        (sql::COMMENT_LINE_DOC, Comment),
        (sql::STRING, Str),
        (sql::CHARACTER, Str),
        (sql::IDENTIFIER, Identifier),
    ],
    fallback: StyleCategory::Unknown,
};

static PROPERTIES: StyleTable = StyleTable {
    entries: &[
        (properties::DEFAULT, Text),
        (properties::COMMENT, Comment),
        (properties::KEY, Identifier),
    ],
    fallback: StyleCategory::Unknown,
};

static YAML: StyleTable = StyleTable {
    entries: &[
        (yaml::DEFAULT, Text),
        (yaml::TEXT, Text),
        (yaml::COMMENT, Comment),
        (yaml::IDENTIFIER, Identifier),
    ],
    fallback: StyleCategory::Unknown,
};

static MARKDOWN: StyleTable = StyleTable {
    entries: &[
        (markdown::CODE, StyleCategory::Unknown),
        (markdown::CODE2, StyleCategory::Unknown),
        (markdown::CODE_BLOCK, StyleCategory::Unknown),
    ],
    fallback: Text,
};

static RUST: StyleTable = StyleTable {
    entries: &[
        (rust::COMMENT_BLOCK, Comment),
        (rust::COMMENT_LINE, Comment),
        (rust::COMMENT_BLOCK_DOC, Comment),
        (rust::COMMENT_LINE_DOC, Comment),
        (rust::STRING, Str),
        (rust::STRING_RAW, Str),
        (rust::CHARACTER, Str),
        (rust::BYTE_STRING, Str),
        (rust::IDENTIFIER, Identifier),
    ],
    fallback: StyleCategory::Unknown,
};

fn table_for(lexer: Lexer) -> Option<&'static StyleTable> {
    match lexer {
        Lexer::Cpp => Some(&CPP),
        Lexer::Python => Some(&PYTHON),
        Lexer::Html | Lexer::Xml => Some(&HTML),
        Lexer::Sql => Some(&SQL),
        Lexer::Properties => Some(&PROPERTIES),
        Lexer::Yaml => Some(&YAML),
        Lexer::Markdown => Some(&MARKDOWN),
        Lexer::Rust => Some(&RUST),
        Lexer::Container | Lexer::Null | Lexer::SearchResult | Lexer::Other(_) => None,
    }
}

/// Classify the style at a position.
///
/// Plain-text lexers (and lexers without a table) report [`StyleCategory::Text`] for every
/// style; the search-results panel is never checked.
pub fn style_category(lexer: Lexer, style: StyleId) -> StyleCategory {
    if lexer == Lexer::SearchResult {
        return StyleCategory::Unknown;
    }
    match table_for(lexer) {
        Some(table) => table.lookup(style),
        None => Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_lexers_are_text() {
        assert_eq!(style_category(Lexer::Null, 0), StyleCategory::Text);
        assert_eq!(style_category(Lexer::Container, 42), StyleCategory::Text);
        assert_eq!(style_category(Lexer::from_id(77), 3), StyleCategory::Text);
    }

    #[test]
    fn test_cpp_styles() {
        assert_eq!(style_category(Lexer::Cpp, cpp::COMMENT_LINE), StyleCategory::Comment);
        assert_eq!(style_category(Lexer::Cpp, cpp::STRING), StyleCategory::String);
        assert_eq!(
            style_category(Lexer::Cpp, cpp::IDENTIFIER),
            StyleCategory::Identifier
        );
        assert_eq!(style_category(Lexer::Cpp, cpp::WORD), StyleCategory::Unknown);
        assert_eq!(style_category(Lexer::Cpp, cpp::NUMBER), StyleCategory::Unknown);
    }

    #[test]
    fn test_html_and_xml_share_table() {
        assert_eq!(style_category(Lexer::Html, html::DEFAULT), StyleCategory::Text);
        assert_eq!(style_category(Lexer::Xml, html::COMMENT), StyleCategory::Comment);
        assert_eq!(style_category(Lexer::Xml, html::TAG), StyleCategory::Unknown);
    }

    #[test]
    fn test_markdown_code_is_skipped() {
        assert_eq!(style_category(Lexer::Markdown, 0), StyleCategory::Text);
        assert_eq!(
            style_category(Lexer::Markdown, markdown::CODE_BLOCK),
            StyleCategory::Unknown
        );
    }

    #[test]
    fn test_search_results_never_checked() {
        assert_eq!(style_category(Lexer::SearchResult, 0), StyleCategory::Unknown);
    }

    #[test]
    fn test_lexer_id_roundtrip() {
        for lexer in [Lexer::Cpp, Lexer::Python, Lexer::Yaml, Lexer::Rust, Lexer::Other(300)] {
            assert_eq!(Lexer::from_id(lexer.id()), lexer);
        }
    }
}
