//! Case-aware "replace all" over whole tokens.

use crate::editor::EditorInterface;
use crate::settings::Settings;
use crate::text::{apply_case, string_case};
use crate::tokenizer::{DelimiterRule, Tokenizer};
use crate::word::cut_apostrophes;

/// Replace every token equal to `from` (case-insensitively) with `to`.
///
/// Unless `is_proper_name` is set, the replacement takes the case pattern of the token it
/// replaces: `lower`, `UPPER` and `Title` are carried over, mixed-case tokens get `to`
/// verbatim. All replacements form a single undo step. Returns the number of tokens
/// replaced.
pub fn replace_all_tokens<E>(
    editor: &mut E,
    settings: &Settings,
    from: &str,
    to: &str,
    is_proper_name: bool,
) -> usize
where
    E: EditorInterface + ?Sized,
{
    if from.is_empty() {
        return 0;
    }

    let text = editor.get_mapped_text_range(0, editor.get_active_document_length());
    let chars = text.as_chars();
    let tokenizer = Tokenizer::new(
        chars,
        DelimiterRule::from_settings(settings),
        settings.split_camel_case,
    );
    let needle = from.to_lowercase();

    let mut edits = Vec::new();
    for token in tokenizer.get_all_tokens() {
        let token = cut_apostrophes(settings, chars, token);
        if token.is_empty() {
            continue;
        }
        let word = text.substring(token.start, token.end);
        if word.to_lowercase() != needle {
            continue;
        }
        let replacement = if is_proper_name {
            to.to_string()
        } else {
            apply_case(to, string_case(&word))
        };
        edits.push((
            text.to_original_index(token.start),
            text.to_original_index(token.end),
            editor.to_editor_encoding(&replacement),
        ));
    }

    if edits.is_empty() {
        return 0;
    }

    log::debug!("replacing {} occurrences of {from:?}", edits.len());
    editor.begin_undo_action();
    // Back to front so earlier offsets stay valid.
    for (start, end, bytes) in edits.iter().rev() {
        editor.replace_text(*start, *end, bytes);
    }
    editor.end_undo_action();
    edits.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeadlessEditor;

    fn replace(text: &str, from: &str, to: &str, is_proper_name: bool) -> String {
        let mut editor = HeadlessEditor::new(text);
        replace_all_tokens(&mut editor, &Settings::default(), from, to, is_proper_name);
        editor.text()
    }

    #[test]
    fn test_replace_keeps_case() {
        assert_eq!(
            replace("token Token TOKEN tokens", "token", "bar", false),
            "bar Bar BAR tokens"
        );
    }

    #[test]
    fn test_replace_single_letters() {
        assert_eq!(replace("a b A", "a", "z", false), "z b Z");
    }

    #[test]
    fn test_proper_name_is_verbatim() {
        assert_eq!(
            replace("london LONDON", "london", "London", true),
            "London London"
        );
    }

    #[test]
    fn test_mixed_case_gets_replacement_as_given() {
        assert_eq!(replace("ToKeN", "token", "word", false), "word");
    }

    #[test]
    fn test_replace_is_one_undo_step() {
        let mut editor = HeadlessEditor::new("тест и тест");
        let count =
            replace_all_tokens(&mut editor, &Settings::default(), "тест", "проверка", false);
        assert_eq!(count, 2);
        assert_eq!(editor.text(), "проверка и проверка");
        editor.undo().unwrap();
        assert_eq!(editor.text(), "тест и тест");
    }

    #[test]
    fn test_no_match_leaves_history_empty() {
        let mut editor = HeadlessEditor::new("nothing here");
        assert_eq!(
            replace_all_tokens(&mut editor, &Settings::default(), "absent", "x", false),
            0
        );
        assert!(!editor.can_undo());
    }
}
