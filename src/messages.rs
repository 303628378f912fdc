//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::image::DecodedImage;

/// Carousel messages (slide transitions)
#[derive(Debug, Clone)]
pub enum CarouselMsg {
    /// Advance one slide, wrapping forward (right button, ArrowRight)
    Next,
    /// Go back one slide, wrapping backward (left button, ArrowLeft)
    Prev,
    /// Jump to a specific slide (dot click, carries the dot's slide index)
    GoTo(usize),
    /// Jump to the first slide (Home)
    First,
    /// Jump to the last slide (End)
    Last,
}

/// UI messages (modal, control fade)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Toggle the help modal (open if closed, close if open)
    ToggleHelp,
    /// Close the active modal (Escape, click outside)
    CloseModal,
    /// Pointer entered or left the controls region (hover fade)
    SetControlsHot(bool),
}

/// Application-level messages (window events, load results)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// A slide decode finished
    SlideLoaded {
        index: usize,
        result: Result<DecodedImage, String>,
    },
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Carousel messages (transitions)
    Carousel(CarouselMsg),
    /// UI messages (modal, fade)
    Ui(UiMsg),
    /// App messages (window, load results)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a go-to-slide message
    pub fn go_to(slide: usize) -> Self {
        Msg::Carousel(CarouselMsg::GoTo(slide))
    }

    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
