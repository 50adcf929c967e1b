//! Settings loaded from host configuration.

mod common;

use common::checker_with;
use pretty_assertions::assert_eq;
use spellcheck_core::{Settings, TokenizationStyle};

#[test]
fn test_partial_config_uses_defaults() {
    let settings: Settings = serde_json::from_str(
        r#"{
            "tokenization_style": "by_delimiters",
            "split_camel_case": true,
            "word_minimum_length": 3
        }"#,
    )
    .unwrap();

    assert_eq!(settings.tokenization_style, TokenizationStyle::ByDelimiters);
    assert!(settings.split_camel_case);
    assert_eq!(settings.word_minimum_length, 3);
    assert_eq!(settings.suggestion_count, 5);
    assert_eq!(settings.file_types, "*.*");
    assert!(settings.ignore_all_capital);
}

#[test]
fn test_empty_config_is_default() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_round_trip() {
    let settings = Settings {
        tokenization_style: TokenizationStyle::ByNonAnsi,
        ignore_yo: true,
        find_window_size: 128,
        ..Settings::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert!(json.contains(r#""tokenization_style":"by_non_ansi""#));
    let back: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);
}

#[test]
fn test_unknown_style_is_rejected() {
    let result = serde_json::from_str::<Settings>(r#"{"tokenization_style": "by_magic"}"#);
    assert!(result.is_err());
}

#[test]
fn test_loaded_settings_drive_the_scan() {
    let settings: Settings =
        serde_json::from_str(r#"{"word_minimum_length": 8, "ignore_yo": true}"#).unwrap();
    // Only `wrongword` reaches the minimum length.
    let sc = checker_with("wrongword badword ещё", settings);
    assert_eq!(sc.get_all_misspellings_as_string(), "wrongword\n");

    // `ещё` is looked up as `еще`.
    let settings: Settings = serde_json::from_str(r#"{"ignore_yo": true}"#).unwrap();
    let sc = checker_with("ещё", settings);
    assert_eq!(sc.get_all_misspellings_as_string(), "ещё\n");
}

#[test]
fn test_non_ansi_tokenization() {
    let settings = Settings {
        tokenization_style: TokenizationStyle::ByNonAnsi,
        ..Settings::default()
    };
    // Every Cyrillic letter is a delimiter here, so only ASCII words remain.
    let sc = checker_with("wrongword немнго", settings);
    assert_eq!(sc.get_all_misspellings_as_string(), "wrongword\n");
}
