//! Showcase - an Elm-style image carousel viewer
//!
//! This crate provides the core types and logic for a minimal carousel
//! viewer following the Elm Architecture pattern: messages describe state
//! changes, `update` applies them, commands carry side effects back to
//! the runtime.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod image;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewerConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
