use super::*;

fn none() -> Modifiers {
    map_modifiers(false, false, false, false)
}

#[test]
fn map_modifiers_preserves_flags() {
    let m = map_modifiers(true, false, true, false);
    assert!(m.shift && m.alt);
    assert!(!m.ctrl && !m.meta);
}

#[test]
fn shortcut_for_editor_keys() {
    assert_eq!(shortcut_for("Escape", none(), false), Some(Shortcut::Cancel));
    assert_eq!(shortcut_for("Enter", none(), false), Some(Shortcut::Save));
    assert_eq!(shortcut_for("z", map_modifiers(false, true, false, false), false), Some(Shortcut::UndoVertex));
}

#[test]
fn shortcut_ignored_in_text_inputs() {
    assert_eq!(shortcut_for("Backspace", none(), true), None);
    assert_eq!(shortcut_for("Enter", none(), true), None);
}

#[test]
fn bounds_for_large_window() {
    assert_eq!(bounds_for_window(1920.0, 1080.0, &EditorConfig::default()), (800.0, 600.0));
}

#[test]
fn bounds_for_small_window() {
    assert_eq!(bounds_for_window(700.0, 500.0, &EditorConfig::default()), (620.0, 420.0));
}
