//! Handlers for UI messages (modal, control fade)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{AppModel, ModalState};

pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::ToggleHelp => {
            if model.ui.has_modal() {
                model.ui.close_modal();
            } else {
                model.ui.open_modal(ModalState::Help);
            }
            Some(Cmd::Redraw)
        }

        UiMsg::CloseModal => {
            if model.ui.has_modal() {
                model.ui.close_modal();
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        UiMsg::SetControlsHot(hot) => {
            if model.ui.controls_hot == hot {
                return None;
            }
            model.ui.controls_hot = hot;
            Some(Cmd::Redraw)
        }
    }
}
