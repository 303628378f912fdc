//! Application model - the complete state of the viewer
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. The carousel owns the only interesting mutable state; the
//! update functions in `crate::update` are its only writers.

pub mod carousel;
pub mod ui;

pub use carousel::{CarouselState, Dot};
pub use ui::{ModalId, ModalState, UiState};

use crate::image::SlideDeck;
use crate::theme::Theme;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Carousel state machine (active index, dot row)
    pub carousel: CarouselState,
    /// The fixed slide set with lazily decoded images
    pub deck: SlideDeck,
    /// UI state (modal, control fade)
    pub ui: UiState,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Window dimensions in physical pixels
    pub window_size: (u32, u32),
}

impl AppModel {
    /// Create a new application model.
    ///
    /// The deck must be non-empty; startup validates this before the model
    /// is built (`cli::StartupConfig::into_deck`).
    pub fn new(
        window_width: u32,
        window_height: u32,
        deck: SlideDeck,
        initial_slide: usize,
        theme: Theme,
    ) -> Self {
        let carousel = CarouselState::starting_at(deck.len(), initial_slide);
        Self {
            carousel,
            deck,
            ui: UiState::new(),
            theme,
            window_size: (window_width, window_height),
        }
    }

    /// Title for the window: position in the track plus the file name
    pub fn window_title(&self) -> String {
        let current = self.carousel.current();
        match self.deck.get(current) {
            Some(slot) => format!(
                "{} ({}/{}) - showcase",
                slot.display_name(),
                current + 1,
                self.carousel.count()
            ),
            None => "showcase".to_string(),
        }
    }
}
