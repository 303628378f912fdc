//! Default keybindings for the viewer
//!
//! Loaded from the embedded keymap.yaml, with user overrides merged from
//! the config directory. Falls back to hardcoded bindings if the embedded
//! file fails to parse.

use super::binding::Keybinding;
use super::command::Command;
use super::config::load_keymap_file;
use super::types::{KeyCode, Keystroke};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Load the default keymap plus user overrides.
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. User keymap at `~/.config/showcase/keymap.yaml`
///
/// User bindings with `command: Unbound` remove matching defaults.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match super::config::parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Some(user_path) = crate::config_paths::keymap_file() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings.extend(user_bindings);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load user keymap from {}: {}",
                        user_path.display(),
                        e
                    );
                }
            }
        }
    }

    bindings
}

/// Hardcoded fallback bindings, matching keymap.yaml
pub fn default_bindings() -> Vec<Keybinding> {
    vec![
        Keybinding::new(Keystroke::plain(KeyCode::Right), Command::NextSlide),
        Keybinding::new(Keystroke::plain(KeyCode::Left), Command::PrevSlide),
        Keybinding::new(Keystroke::plain(KeyCode::Space), Command::NextSlide),
        Keybinding::new(Keystroke::plain(KeyCode::Home), Command::FirstSlide),
        Keybinding::new(Keystroke::plain(KeyCode::End), Command::LastSlide),
        Keybinding::new(Keystroke::plain(KeyCode::Char('h')), Command::ToggleHelp),
        Keybinding::new(Keystroke::plain(KeyCode::Char('q')), Command::Quit),
    ]
}
