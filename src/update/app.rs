//! Handlers for application messages (window events, load results)

use crate::commands::Cmd;
use crate::image::SlideImage;
use crate::messages::AppMsg;
use crate::model::AppModel;

pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::SlideLoaded { index, result } => {
            let Some(slot) = model.deck.get_mut(index) else {
                tracing::warn!("Load result for unknown slide {}", index);
                return None;
            };
            slot.image = match result {
                Ok(decoded) => SlideImage::Loaded(decoded),
                Err(e) => {
                    tracing::warn!("Failed to load slide {}: {}", index, e);
                    SlideImage::Failed(e)
                }
            };
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
