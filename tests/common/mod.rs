//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::PathBuf;

use showcase::image::{DecodedImage, SlideDeck, SlideImage};
use showcase::model::AppModel;
use showcase::theme::Theme;

/// Create a test model with `slides` pending slides at 800x600
pub fn test_model(slides: usize) -> AppModel {
    let paths: Vec<PathBuf> = (0..slides)
        .map(|i| PathBuf::from(format!("slide_{i:02}.png")))
        .collect();
    AppModel::new(800, 600, SlideDeck::from_paths(paths), 0, Theme::default())
}

/// Create a test model where every slide is already decoded
pub fn loaded_model(slides: usize) -> AppModel {
    let mut model = test_model(slides);
    for i in 0..slides {
        mark_loaded(&mut model, i);
    }
    model
}

/// Mark one slide as decoded with a tiny opaque image
pub fn mark_loaded(model: &mut AppModel, index: usize) {
    if let Some(slot) = model.deck.get_mut(index) {
        slot.image = SlideImage::Loaded(DecodedImage {
            pixels: vec![0xFF; 4 * 4],
            width: 2,
            height: 2,
        });
    }
}
