//! Keymap system: declarative keystroke-to-command bindings
//!
//! The keymap decouples key dispatch from the state machine: winit events
//! are converted to `Keystroke`s, looked up to a `Command`, and the
//! command's `Msg` is fed to the update loop. Bindings are loaded from an
//! embedded YAML file with user overrides.

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
#[cfg(test)]
mod tests;
mod types;
mod winit_adapter;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_keymap_yaml};
pub use defaults::{default_bindings, load_default_keymap};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
pub use winit_adapter::keystroke_from_winit;
