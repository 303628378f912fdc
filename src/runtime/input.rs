//! Keyboard input handling
//!
//! Most keybindings are resolved by the declarative keymap in
//! `src/keymap/`. This file handles the one case that needs imperative
//! routing: an open modal captures the keyboard, so navigation keys must
//! not reach the carousel underneath it.

use winit::keyboard::{Key, NamedKey};

use crate::commands::Cmd;
use crate::messages::{Msg, UiMsg};
use crate::model::AppModel;
use crate::update::update;

/// Route a key press while a modal is active.
///
/// Escape closes the modal; so does the help toggle key, since toggling
/// an open modal shuts it. Every other key is swallowed.
pub fn handle_modal_key(model: &mut AppModel, key: &Key) -> Option<Cmd> {
    match key {
        Key::Named(NamedKey::Escape) => update(model, Msg::Ui(UiMsg::CloseModal)),
        Key::Character(ch) if ch.as_str().eq_ignore_ascii_case("h") => {
            update(model, Msg::Ui(UiMsg::ToggleHelp))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::SlideDeck;
    use crate::model::ModalState;
    use crate::theme::Theme;
    use std::path::PathBuf;

    fn test_model(slides: usize) -> AppModel {
        let paths: Vec<PathBuf> = (0..slides)
            .map(|i| PathBuf::from(format!("slide_{i}.png")))
            .collect();
        AppModel::new(800, 600, SlideDeck::from_paths(paths), 0, Theme::default())
    }

    #[test]
    fn test_escape_closes_modal() {
        let mut model = test_model(3);
        model.ui.open_modal(ModalState::Help);

        let cmd = handle_modal_key(&mut model, &Key::Named(NamedKey::Escape));
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert!(!model.ui.has_modal());
    }

    #[test]
    fn test_help_key_closes_open_modal() {
        let mut model = test_model(3);
        model.ui.open_modal(ModalState::Help);

        let cmd = handle_modal_key(&mut model, &Key::Character("h".into()));
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert!(!model.ui.has_modal());
    }

    #[test]
    fn test_navigation_keys_are_swallowed_while_modal_open() {
        let mut model = test_model(3);
        model.ui.open_modal(ModalState::Help);

        let cmd = handle_modal_key(&mut model, &Key::Named(NamedKey::ArrowRight));
        assert_eq!(cmd, None);
        assert_eq!(model.carousel.current(), 0);
        assert!(model.ui.has_modal());
    }
}
