//! Underlining the visible text and reacting to settings / speller changes.

mod common;

use common::{BADWORD, TWO_MISTAKES, WRONGWORD, checker};
use pretty_assertions::assert_eq;
use spellcheck_core::{EditorInterface, IndicatorId};

const LINES: &str = "This\nwrongword\ntest\nbadword";

fn underlines(sc: &common::Checker) -> Vec<std::ops::Range<usize>> {
    sc.editor().indicator_ranges(IndicatorId::SPELL_CHECK)
}

#[test]
fn test_recheck_underlines_visible_misspellings() {
    let mut sc = checker(TWO_MISTAKES);
    sc.recheck_visible();
    assert_eq!(underlines(&sc), vec![WRONGWORD, BADWORD]);
}

#[test]
fn test_recheck_after_edit_clears_stale_underlines() {
    let mut sc = checker(TWO_MISTAKES);
    sc.recheck_visible();

    sc.editor_mut().replace_text(WRONGWORD.start, WRONGWORD.end, b"test");
    sc.recheck_visible();
    assert_eq!(underlines(&sc), vec![28..35]);
}

#[test]
fn test_only_viewport_lines_are_checked() {
    let mut sc = checker(LINES);
    sc.editor_mut().set_viewport(2, 2);
    sc.recheck_visible();
    assert_eq!(underlines(&sc), vec![20..27]);
}

#[test]
fn test_folded_lines_are_skipped() {
    let mut sc = checker(LINES);
    sc.editor_mut().fold_lines(3..4);
    sc.recheck_visible();
    assert_eq!(underlines(&sc), vec![5..14]);
}

#[test]
fn test_horizontal_clip_widens_to_whole_tokens() {
    let mut sc = checker("wrongword badword");
    sc.editor_mut().set_visible_columns(Some(2..4));
    sc.recheck_visible();
    assert_eq!(underlines(&sc), vec![0..9]);

    let text = sc.get_visible_text();
    assert_eq!(text.to_string(), "wrongword");
}

#[test]
fn test_visible_text_maps_back_to_document() {
    let mut sc = checker(LINES);
    sc.editor_mut().set_viewport(1, 2);
    let text = sc.get_visible_text();
    assert_eq!(text.to_string(), "wrongword\ntest");
    assert_eq!(text.to_original_index(0), 5);
    assert_eq!(text.to_original_index(10), 15);
    assert_eq!(text.original_length(), 19);
}

#[test]
fn test_auto_check_off_clears() {
    let mut sc = checker(TWO_MISTAKES);
    sc.recheck_visible();
    sc.modify_settings(|s| s.auto_check_text = false);
    assert!(underlines(&sc).is_empty());

    sc.modify_settings(|s| s.auto_check_text = true);
    assert_eq!(underlines(&sc), vec![WRONGWORD, BADWORD]);
}

#[test]
fn test_file_type_filter() {
    let mut sc = checker(TWO_MISTAKES);
    sc.editor_mut().set_path("/home/user/notes.TXT");

    sc.modify_settings(|s| s.file_types = "*.cpp;*.h".to_string());
    assert!(!sc.is_spellchecking_needed());
    assert!(underlines(&sc).is_empty());

    sc.modify_settings(|s| s.check_those = false);
    assert!(sc.is_spellchecking_needed());
    assert_eq!(underlines(&sc).len(), 2);

    sc.modify_settings(|s| {
        s.check_those = true;
        s.file_types = "*.txt".to_string();
    });
    assert_eq!(underlines(&sc).len(), 2);
}

#[test]
fn test_speller_status_change() {
    let mut sc = checker(TWO_MISTAKES);
    sc.recheck_visible();

    sc.speller_mut().disabled = true;
    sc.on_speller_status_changed();
    assert!(underlines(&sc).is_empty());

    sc.speller_mut().disabled = false;
    sc.on_speller_status_changed();
    assert_eq!(underlines(&sc).len(), 2);
}

#[test]
fn test_url_indicator_skips_word() {
    let mut sc = checker("test wrongword");
    sc.editor_mut()
        .indicator_fill_range(IndicatorId::URL, 5, 14);
    sc.recheck_visible();
    assert!(underlines(&sc).is_empty());
}

#[test]
fn test_underlines_use_byte_offsets() {
    let mut sc = checker("И ещё немнго");
    sc.recheck_visible();
    assert_eq!(underlines(&sc), vec![10..22]);
}
