//! Keymap system tests

use super::*;

#[test]
fn test_parse_plain_keystroke() {
    let ks = Keystroke::parse("ArrowRight").unwrap();
    assert_eq!(ks.key, KeyCode::Right);
    assert!(ks.modifiers.is_empty());
}

#[test]
fn test_parse_modified_keystroke() {
    let ks = Keystroke::parse("Shift+ArrowLeft").unwrap();
    assert_eq!(ks.key, KeyCode::Left);
    assert!(ks.modifiers.shift());
    assert!(!ks.modifiers.ctrl());
}

#[test]
fn test_parse_char_key_normalizes_case() {
    let upper = Keystroke::parse("Q").unwrap();
    let lower = Keystroke::parse("q").unwrap();
    assert_eq!(upper.key, lower.key);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(Keystroke::parse("NotAKey").is_none());
    assert!(Keystroke::parse("Shift+").is_none());
    assert!(Keystroke::parse("a+b").is_none());
}

#[test]
fn test_keystroke_display_round_trip() {
    for spec in ["ArrowRight", "Shift+ArrowLeft", "Home", "q"] {
        let ks = Keystroke::parse(spec).unwrap();
        let reparsed = Keystroke::parse(&ks.to_string()).unwrap();
        assert_eq!(ks, reparsed);
    }
}

#[test]
fn test_lookup_finds_bound_command() {
    let keymap = Keymap::with_bindings(default_bindings());
    let right = Keystroke::plain(KeyCode::Right);
    assert_eq!(keymap.handle_keystroke(right), Some(Command::NextSlide));
}

#[test]
fn test_lookup_misses_unbound_keystroke() {
    let keymap = Keymap::with_bindings(default_bindings());
    let ctrl_z = Keystroke::new(Modifiers::CTRL, KeyCode::Char('z'));
    assert_eq!(keymap.handle_keystroke(ctrl_z), None);
}

#[test]
fn test_later_bindings_override_earlier() {
    let mut keymap = Keymap::with_bindings(default_bindings());
    keymap.add_binding(Keybinding::new(
        Keystroke::plain(KeyCode::Space),
        Command::ToggleHelp,
    ));
    let space = Keystroke::plain(KeyCode::Space);
    assert_eq!(keymap.handle_keystroke(space), Some(Command::ToggleHelp));
}

#[test]
fn test_unbound_removes_binding() {
    let mut keymap = Keymap::with_bindings(default_bindings());
    keymap.add_binding(Keybinding::new(
        Keystroke::plain(KeyCode::Space),
        Command::Unbound,
    ));
    assert_eq!(keymap.handle_keystroke(Keystroke::plain(KeyCode::Space)), None);
}

#[test]
fn test_parse_keymap_yaml() {
    let yaml = r#"
bindings:
  - keys: ArrowRight
    command: NextSlide
  - keys: Shift+q
    command: Quit
"#;
    let bindings = parse_keymap_yaml(yaml).unwrap();
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].command, Command::NextSlide);
    assert!(bindings[1].keystroke.modifiers.shift());
}

#[test]
fn test_parse_keymap_yaml_skips_bad_keys() {
    let yaml = r#"
bindings:
  - keys: NotARealKey
    command: NextSlide
  - keys: ArrowLeft
    command: PrevSlide
"#;
    let bindings = parse_keymap_yaml(yaml).unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].command, Command::PrevSlide);
}
