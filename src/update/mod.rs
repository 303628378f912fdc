//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod carousel;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use app::update_app;
pub use carousel::update_carousel;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Carousel(m) => update_carousel(model, m),
        Msg::Ui(m) => update_ui(model, m),
        Msg::App(m) => update_app(model, m),
    }
}
