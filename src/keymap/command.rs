//! Command enum representing all executable viewer actions
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to a `Msg` for the Elm-style update loop.

use serde::Deserialize;

use crate::messages::{AppMsg, CarouselMsg, Msg, UiMsg};

/// All executable commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Command {
    /// Advance to the next slide (wraps)
    NextSlide,
    /// Go back to the previous slide (wraps)
    PrevSlide,
    /// Jump to the first slide
    FirstSlide,
    /// Jump to the last slide
    LastSlide,
    /// Toggle the keyboard help overlay
    ToggleHelp,
    /// Quit the viewer
    Quit,
    /// Remove a default binding (only meaningful in user keymap files)
    Unbound,
}

impl Command {
    /// Convert this command to its message, if it produces one
    pub fn to_msg(self) -> Option<Msg> {
        match self {
            Command::NextSlide => Some(Msg::Carousel(CarouselMsg::Next)),
            Command::PrevSlide => Some(Msg::Carousel(CarouselMsg::Prev)),
            Command::FirstSlide => Some(Msg::Carousel(CarouselMsg::First)),
            Command::LastSlide => Some(Msg::Carousel(CarouselMsg::Last)),
            Command::ToggleHelp => Some(Msg::Ui(UiMsg::ToggleHelp)),
            Command::Quit => Some(Msg::App(AppMsg::Quit)),
            Command::Unbound => None,
        }
    }

    /// Human-readable label for the help overlay
    pub fn label(self) -> &'static str {
        match self {
            Command::NextSlide => "Next slide",
            Command::PrevSlide => "Previous slide",
            Command::FirstSlide => "First slide",
            Command::LastSlide => "Last slide",
            Command::ToggleHelp => "Toggle this help",
            Command::Quit => "Quit",
            Command::Unbound => "",
        }
    }
}
