//! Keybinding: a keystroke bound to a command

use super::command::Command;
use super::types::Keystroke;

/// A single keybinding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub const fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }

    /// Parse from a keymap file entry ("Shift+ArrowRight" + command)
    pub fn parse(keys: &str, command: Command) -> Option<Self> {
        Keystroke::parse(keys).map(|keystroke| Self { keystroke, command })
    }
}
