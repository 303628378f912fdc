//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the viewer:
//! - `app` - ApplicationHandler and window management
//! - `input` - Modal keyboard routing

pub mod app;
pub mod input;

pub use app::App;

use anyhow::Result;
use winit::event_loop::EventLoop;

use crate::keymap::Keymap;
use crate::model::AppModel;

/// Run the viewer until the window is closed or the quit command fires
pub fn run(model: AppModel, keymap: Keymap) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(model, keymap);
    event_loop.run_app(&mut app)?;
    Ok(())
}
