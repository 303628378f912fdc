//! Centralized geometry helpers for rendering and hit-testing
//!
//! This module is the single source of truth for layout calculations
//! shared between the view (rendering) and runtime (input handling)
//! layers. All functions here are pure and can be tested without a
//! window.

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the bottom controls strip holding the dot row (pixels)
pub const CONTROLS_HEIGHT: u32 = 48;
/// Chevron button square size (pixels)
pub const BUTTON_SIZE: f32 = 44.0;
/// Margin between a chevron button and the window edge (pixels)
pub const BUTTON_MARGIN: f32 = 16.0;
/// Dot diameter (pixels)
pub const DOT_DIAMETER: f32 = 10.0;
/// Gap between adjacent dots (pixels)
pub const DOT_GAP: f32 = 8.0;
/// Extra clickable padding around each dot (pixels)
pub const DOT_HIT_PADDING: f32 = 4.0;
/// Row height inside the help modal (pixels)
pub const MODAL_ROW_HEIGHT: f32 = 24.0;
/// Inner padding of the help modal panel (pixels)
pub const MODAL_PADDING: f32 = 20.0;

/// A rectangle in window coordinates (physical pixels)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Grow the rect by `amount` on every side
    pub fn inflated(&self, amount: f32) -> Rect {
        Rect {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + 2.0 * amount,
            height: self.height + 2.0 * amount,
        }
    }

    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

// ============================================================================
// Stage and Slides
// ============================================================================

/// The stage: the slide display area above the controls strip
pub fn stage_rect(window_width: u32, window_height: u32) -> Rect {
    let controls = CONTROLS_HEIGHT.min(window_height);
    Rect::new(
        0.0,
        0.0,
        window_width as f32,
        (window_height - controls) as f32,
    )
}

/// Position of slide `offset_percent` relative to the stage.
///
/// Applies the carousel projection: a slide at offset 0 fills the stage,
/// +100 sits one full stage-width to the right, -100 one to the left.
pub fn slide_rect(stage: Rect, offset_percent: i32) -> Rect {
    Rect::new(
        stage.x + stage.width * offset_percent as f32 / 100.0,
        stage.y,
        stage.width,
        stage.height,
    )
}

/// Fit an image inside a slide, preserving aspect ratio and centering
pub fn image_rect(slide: Rect, img_width: u32, img_height: u32) -> Rect {
    if img_width == 0 || img_height == 0 || slide.width <= 0.0 || slide.height <= 0.0 {
        return Rect::new(slide.x, slide.y, 0.0, 0.0);
    }
    let scale_x = slide.width / img_width as f32;
    let scale_y = slide.height / img_height as f32;
    let scale = scale_x.min(scale_y).min(1.0);
    let width = img_width as f32 * scale;
    let height = img_height as f32 * scale;
    Rect::new(
        slide.x + (slide.width - width) / 2.0,
        slide.y + (slide.height - height) / 2.0,
        width,
        height,
    )
}

// ============================================================================
// Controls
// ============================================================================

/// Left chevron button, vertically centered on the stage
pub fn prev_button_rect(window_width: u32, window_height: u32) -> Rect {
    let stage = stage_rect(window_width, window_height);
    Rect::new(
        BUTTON_MARGIN,
        stage.y + (stage.height - BUTTON_SIZE) / 2.0,
        BUTTON_SIZE,
        BUTTON_SIZE,
    )
}

/// Right chevron button, vertically centered on the stage
pub fn next_button_rect(window_width: u32, window_height: u32) -> Rect {
    let stage = stage_rect(window_width, window_height);
    Rect::new(
        window_width as f32 - BUTTON_MARGIN - BUTTON_SIZE,
        stage.y + (stage.height - BUTTON_SIZE) / 2.0,
        BUTTON_SIZE,
        BUTTON_SIZE,
    )
}

/// Rect of dot `index` out of `count`, centered in the controls strip
pub fn dot_rect(window_width: u32, window_height: u32, index: usize, count: usize) -> Rect {
    let row_width = count as f32 * DOT_DIAMETER + count.saturating_sub(1) as f32 * DOT_GAP;
    let row_x = (window_width as f32 - row_width) / 2.0;
    let row_y = window_height as f32 - CONTROLS_HEIGHT as f32 / 2.0 - DOT_DIAMETER / 2.0;
    Rect::new(
        row_x + index as f32 * (DOT_DIAMETER + DOT_GAP),
        row_y,
        DOT_DIAMETER,
        DOT_DIAMETER,
    )
}

/// Whether a point is over the controls region (buttons or dot strip).
/// Drives the hover fade: controls render at full opacity only while the
/// pointer is here.
pub fn in_controls_region(window_width: u32, window_height: u32, x: f32, y: f32) -> bool {
    let strip = Rect::new(
        0.0,
        (window_height.saturating_sub(CONTROLS_HEIGHT)) as f32,
        window_width as f32,
        CONTROLS_HEIGHT as f32,
    );
    strip.contains(x, y)
        || prev_button_rect(window_width, window_height)
            .inflated(8.0)
            .contains(x, y)
        || next_button_rect(window_width, window_height)
            .inflated(8.0)
            .contains(x, y)
}

// ============================================================================
// Modal
// ============================================================================

/// Help modal panel rect for `rows` content rows, centered in the window
pub fn help_modal_rect(window_width: u32, window_height: u32, rows: usize) -> Rect {
    let width = (window_width as f32 - 80.0).clamp(200.0, 420.0);
    // Title row plus content rows plus padding
    let height = MODAL_PADDING * 2.0 + MODAL_ROW_HEIGHT * (rows as f32 + 1.5);
    let height = height.min(window_height as f32 - 40.0);
    Rect::new(
        (window_width as f32 - width) / 2.0,
        (window_height as f32 - height) / 2.0,
        width,
        height,
    )
}

/// Caption baseline position (bottom-left corner of the stage)
pub fn caption_origin(window_width: u32, window_height: u32) -> (f32, f32) {
    let stage = stage_rect(window_width, window_height);
    (12.0, stage.y + stage.height - 12.0)
}
