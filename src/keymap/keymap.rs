//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup.
///
/// Later bindings override earlier ones with the same keystroke, which is
/// how user keymap files replace the embedded defaults.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    lookup: HashMap<Keystroke, Command>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding, replacing any existing binding for the same keystroke.
    /// Binding a keystroke to `Command::Unbound` removes it.
    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.command == Command::Unbound {
            self.lookup.remove(&binding.keystroke);
        } else {
            self.lookup.insert(binding.keystroke, binding.command);
        }
    }

    /// Look up the command bound to a keystroke
    pub fn handle_keystroke(&self, keystroke: Keystroke) -> Option<Command> {
        self.lookup.get(&keystroke).copied()
    }

    /// All bindings sorted by command label, for the help overlay
    pub fn bindings_for_display(&self) -> Vec<(Keystroke, Command)> {
        let mut entries: Vec<(Keystroke, Command)> =
            self.lookup.iter().map(|(k, c)| (*k, *c)).collect();
        entries.sort_by_key(|(k, c)| (c.label(), k.to_string()));
        entries
    }
}
