use anyhow::Result;
use clap::Parser;

use showcase::cli::CliArgs;
use showcase::config::ViewerConfig;
use showcase::image::SlideDeck;
use showcase::keymap::{load_default_keymap, Keymap};
use showcase::model::AppModel;
use showcase::runtime;
use showcase::theme::{self, Theme};

const DEFAULT_WINDOW_WIDTH: u32 = 900;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;

fn main() -> Result<()> {
    showcase::tracing::init();

    let startup = CliArgs::parse().into_config()?;
    let mut config = ViewerConfig::load();

    // A CLI theme becomes the new persisted selection, like switching
    // themes in-app would; a broken theme falls back to the built-in
    // default rather than aborting startup
    if let Some(theme_id) = &startup.theme {
        if *theme_id != config.theme {
            config.theme = theme_id.clone();
            if let Err(e) = config.save() {
                tracing::warn!("Could not persist theme selection: {}", e);
            }
        }
    }
    let theme = match theme::load_theme(&config.theme) {
        Ok(theme) => theme,
        Err(e) => {
            tracing::warn!("Could not load theme '{}': {}", config.theme, e);
            Theme::default()
        }
    };

    let deck = SlideDeck::from_paths(startup.slide_paths);
    tracing::info!("Opening {} slide(s)", deck.len());

    let keymap = Keymap::with_bindings(load_default_keymap());
    let model = AppModel::new(
        DEFAULT_WINDOW_WIDTH,
        DEFAULT_WINDOW_HEIGHT,
        deck,
        startup.initial_slide,
        theme,
    );

    runtime::run(model, keymap)
}
