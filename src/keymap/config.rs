//! Keymap file parsing (YAML)
//!
//! Format:
//! ```yaml
//! bindings:
//!   - keys: ArrowRight
//!     command: NextSlide
//!   - keys: Shift+q
//!     command: Quit
//! ```

use std::path::Path;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;

#[derive(Debug, Deserialize)]
struct KeymapFile {
    bindings: Vec<BindingEntry>,
}

#[derive(Debug, Deserialize)]
struct BindingEntry {
    keys: String,
    command: Command,
}

/// Parse keymap YAML content into bindings.
///
/// Entries with unparseable keystrokes are skipped with a warning rather
/// than failing the whole file.
pub fn parse_keymap_yaml(content: &str) -> Result<Vec<Keybinding>, String> {
    let file: KeymapFile =
        serde_yaml::from_str(content).map_err(|e| format!("invalid keymap yaml: {}", e))?;

    let mut bindings = Vec::with_capacity(file.bindings.len());
    for entry in file.bindings {
        match Keybinding::parse(&entry.keys, entry.command) {
            Some(binding) => bindings.push(binding),
            None => {
                tracing::warn!("Skipping unparseable keystroke {:?}", entry.keys);
            }
        }
    }
    Ok(bindings)
}

/// Load and parse a keymap file from disk
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_keymap_yaml(&content)
}
