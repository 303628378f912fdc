//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an
//! update. The runtime executes them; the update functions stay pure.

/// Side effect requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Repaint the window
    Redraw,
    /// Decode the given slides, then repaint.
    /// Indices come from `SlideDeck::preload_targets` and are in-range.
    LoadSlides(Vec<usize>),
    /// Exit the event loop
    Quit,
}
