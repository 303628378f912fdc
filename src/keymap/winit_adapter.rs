//! Adapter to convert winit key events to our Keystroke type

use winit::keyboard::{Key, NamedKey};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert winit key event data to our Keystroke type
///
/// Returns None if the key cannot be mapped (e.g., bare modifier presses)
pub fn keystroke_from_winit(
    logical_key: &Key,
    ctrl: bool,
    shift: bool,
    alt: bool,
    logo: bool,
) -> Option<Keystroke> {
    let mods = Modifiers::new(ctrl, shift, alt, logo);

    let key_code = match logical_key {
        Key::Named(named) => match named {
            NamedKey::Enter => Some(KeyCode::Enter),
            NamedKey::Escape => Some(KeyCode::Escape),
            NamedKey::Space => Some(KeyCode::Space),
            NamedKey::ArrowUp => Some(KeyCode::Up),
            NamedKey::ArrowDown => Some(KeyCode::Down),
            NamedKey::ArrowLeft => Some(KeyCode::Left),
            NamedKey::ArrowRight => Some(KeyCode::Right),
            NamedKey::Home => Some(KeyCode::Home),
            NamedKey::End => Some(KeyCode::End),
            NamedKey::PageUp => Some(KeyCode::PageUp),
            NamedKey::PageDown => Some(KeyCode::PageDown),
            _ => None,
        },

        // Character keys - normalize to lowercase
        Key::Character(s) => {
            let c = s.chars().next()?;
            Some(KeyCode::Char(c.to_ascii_lowercase()))
        }

        _ => None,
    };

    key_code.map(|key| Keystroke::new(mods, key))
}
