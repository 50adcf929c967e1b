//! Replace-all through the scanner.

mod common;

use common::{TWO_MISTAKES, checker};
use pretty_assertions::assert_eq;
use spellcheck_core::{IndicatorId, Settings, replace::replace_all_tokens};

#[test]
fn test_replace_follows_case_and_rechecks() {
    let mut sc = checker("wrongword Wrongword WRONGWORD wrongwords");
    sc.recheck_visible();

    assert_eq!(sc.replace_all_tokens("WrongWord", "test", false), 3);
    assert_eq!(sc.editor().text(), "test Test TEST wrongwords");
    // `Test` is not in the dictionary, `TEST` is skipped as an acronym.
    assert_eq!(
        sc.editor().indicator_ranges(IndicatorId::SPELL_CHECK),
        vec![5..9, 15..25]
    );
}

#[test]
fn test_replace_proper_name() {
    let mut sc = checker("paris PARIS");
    assert_eq!(sc.replace_all_tokens("paris", "Paris", true), 2);
    assert_eq!(sc.editor().text(), "Paris Paris");
}

#[test]
fn test_replace_single_letter_tokens() {
    let mut sc = checker("a b A ab");
    sc.replace_all_tokens("a", "z", false);
    assert_eq!(sc.editor().text(), "z b Z ab");
}

#[test]
fn test_replace_undo_restores_everything() {
    let mut sc = checker(TWO_MISTAKES);
    sc.replace_all_tokens("badword", "document", false);
    sc.replace_all_tokens("wrongword", "слов", false);
    assert_eq!(
        sc.editor().text(),
        "\nслов\nThis is test document\ndocument\n"
    );

    sc.editor_mut().undo().unwrap();
    sc.editor_mut().undo().unwrap();
    assert_eq!(sc.editor().text(), TWO_MISTAKES);
}

#[test]
fn test_replace_respects_camel_case_splitting() {
    let mut editor = spellcheck_core::HeadlessEditor::new("wrongWord word");
    let settings = Settings {
        split_camel_case: true,
        ..Settings::default()
    };
    assert_eq!(replace_all_tokens(&mut editor, &settings, "word", "test", false), 2);
    assert_eq!(editor.text(), "wrongTest test");
}
