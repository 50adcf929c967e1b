//! Document encodings understood by the editor boundary.
//!
//! Editors keep text as bytes in either a single-byte code page or UTF-8. Single-byte
//! buffers are decoded as Latin-1 so that every byte maps to exactly one `char` and back.

/// Encoding of the active document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Codepage {
    /// One byte per character.
    Ansi,
    /// Variable width UTF-8.
    #[default]
    Utf8,
}

/// Returns `true` if `byte` starts a UTF-8 sequence (ASCII included).
pub fn utf8_is_lead(byte: u8) -> bool {
    !utf8_is_continuation(byte)
}

/// Returns `true` for `10xxxxxx` continuation bytes.
pub fn utf8_is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Length of the sequence introduced by `lead`.
///
/// Stray continuation bytes and invalid lead bytes count as a single byte so that callers
/// stepping through damaged text always make progress.
pub fn utf8_symbol_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Encode `text` the way the editor stores it.
///
/// Characters outside Latin-1 become `?` in single-byte documents.
pub fn encode(text: &str, codepage: Codepage) -> Vec<u8> {
    match codepage {
        Codepage::Utf8 => text.as_bytes().to_vec(),
        Codepage::Ansi => text
            .chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
            .collect(),
    }
}

/// Decode editor bytes into a `String`. Invalid UTF-8 is replaced, never rejected.
pub fn decode(bytes: &[u8], codepage: Codepage) -> String {
    match codepage {
        Codepage::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        Codepage::Ansi => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_len() {
        let text = "aд€😀";
        let bytes = text.as_bytes();
        assert_eq!(utf8_symbol_len(bytes[0]), 1);
        assert_eq!(utf8_symbol_len(bytes[1]), 2);
        assert_eq!(utf8_symbol_len(bytes[3]), 3);
        assert_eq!(utf8_symbol_len(bytes[6]), 4);
        assert!(utf8_is_continuation(bytes[2]));
        assert_eq!(utf8_symbol_len(bytes[2]), 1);
    }

    #[test]
    fn test_ansi_encode_replaces_unrepresentable() {
        assert_eq!(encode("café", Codepage::Ansi), b"caf\xE9".to_vec());
        assert_eq!(encode("дом", Codepage::Ansi), b"???".to_vec());
        assert_eq!(decode(b"caf\xE9", Codepage::Ansi), "café");
    }

    #[test]
    fn test_utf8_decode_is_lossy() {
        assert_eq!(decode(b"ab\xFFc", Codepage::Utf8), "ab\u{FFFD}c");
    }
}
