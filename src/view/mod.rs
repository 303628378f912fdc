//! View module - rendering for the carousel window
//!
//! The renderer is a pure consumer of the model: every frame it projects
//! the carousel state (slide offsets, dot activation) onto the pixel
//! buffer. It never mutates the model and never tracks animation - render
//! is fire-and-forget state projection.

pub mod font;
pub mod frame;
pub mod geometry;

pub use font::TextPainter;
pub use frame::{blend_colors, Frame};
pub use geometry::Rect;
pub use hit_test::{hit_test_dots, hit_test_modal, hit_test_ui, HitTarget, Point};

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use softbuffer::{Context, Surface};
use winit::window::Window;

use crate::image::SlideImage;
use crate::keymap::Keymap;
use crate::model::AppModel;

/// Opacity of the controls when the pointer is away from them
const FADED_ALPHA: f32 = 0.5;
/// Caption / help body text size in pixels
const TEXT_SIZE: f32 = 14.0;
/// Help modal title text size in pixels
const TITLE_SIZE: f32 = 17.0;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    text: TextPainter,
}

impl Renderer {
    pub fn new(context: &Context<Rc<Window>>, window: Rc<Window>) -> Result<Self> {
        let surface = Surface::new(context, window)
            .map_err(|e| anyhow!("failed to create render surface: {}", e))?;
        Ok(Self {
            surface,
            text: TextPainter::new(),
        })
    }

    /// Render one frame of the model and present it
    pub fn render(&mut self, model: &AppModel, keymap: &Keymap) -> Result<()> {
        let (width, height) = model.window_size;
        let (Some(nz_width), Some(nz_height)) = (NonZeroU32::new(width), NonZeroU32::new(height))
        else {
            return Ok(()); // minimized
        };

        self.surface
            .resize(nz_width, nz_height)
            .map_err(|e| anyhow!("surface resize failed: {}", e))?;
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("buffer access failed: {}", e))?;

        let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
        let colors = &model.theme.colors;

        frame.clear(colors.background.to_argb_u32());

        draw_slides(&mut frame, model);
        draw_caption(&mut frame, &mut self.text, model);
        draw_controls(&mut frame, model);

        if model.ui.has_modal() {
            draw_help_modal(&mut frame, &mut self.text, model, keymap);
        }

        buffer
            .present()
            .map_err(|e| anyhow!("present failed: {}", e))?;
        Ok(())
    }
}

/// Draw every slide that intersects the stage at its projected offset
fn draw_slides(frame: &mut Frame<'_>, model: &AppModel) {
    let (w, h) = model.window_size;
    let stage = geometry::stage_rect(w, h);
    let colors = &model.theme.colors;

    for (i, slot) in model.deck.slots().iter().enumerate() {
        let offset = model.carousel.offset_percent(i);
        let rect = geometry::slide_rect(stage, offset);

        // Off-stage slides cost nothing to skip
        if rect.x >= stage.x + stage.width || rect.x + rect.width <= stage.x {
            continue;
        }

        match &slot.image {
            SlideImage::Loaded(img) => {
                let dst = geometry::image_rect(rect, img.width, img.height);
                frame.blit_scaled_rgba(&img.pixels, img.width, img.height, dst);
            }
            SlideImage::Pending | SlideImage::Failed(_) => {
                frame.fill_rect(rect, colors.placeholder.to_argb_u32());
            }
        }
    }
}

/// File name and position caption at the bottom-left of the stage
fn draw_caption(frame: &mut Frame<'_>, text: &mut TextPainter, model: &AppModel) {
    if !text.has_font() {
        return;
    }
    let Some(slot) = model.deck.get(model.carousel.current()) else {
        return;
    };
    let (w, h) = model.window_size;
    let (x, y) = geometry::caption_origin(w, h);
    let caption = format!(
        "{}  {}/{}",
        slot.display_name(),
        model.carousel.current() + 1,
        model.carousel.count()
    );
    text.draw_text(
        frame,
        &caption,
        x,
        y,
        TEXT_SIZE,
        model.theme.colors.text_dim.to_argb_u32(),
    );
}

/// Chevron buttons and the dot row, faded unless the pointer is over them
fn draw_controls(frame: &mut Frame<'_>, model: &AppModel) {
    let (w, h) = model.window_size;
    let colors = &model.theme.colors;
    let alpha = if model.ui.controls_hot {
        1.0
    } else {
        FADED_ALPHA
    };

    for (rect, left) in [
        (geometry::prev_button_rect(w, h), true),
        (geometry::next_button_rect(w, h), false),
    ] {
        frame.fill_rect_blend(rect, colors.button.to_argb_u32(), alpha * 0.9);
        frame.fill_chevron(rect, left, colors.chevron.to_argb_u32(), alpha);
    }

    let count = model.carousel.count();
    for dot in model.carousel.dots() {
        let rect = geometry::dot_rect(w, h, dot.slide_index, count);
        let (cx, cy) = rect.center();
        let color = if dot.active {
            colors.dot_active
        } else {
            colors.dot
        };
        frame.fill_disc(
            cx,
            cy,
            geometry::DOT_DIAMETER / 2.0,
            color.to_argb_u32(),
            alpha,
        );
    }
}

/// Dimming overlay plus the keyboard shortcut panel
fn draw_help_modal(
    frame: &mut Frame<'_>,
    text: &mut TextPainter,
    model: &AppModel,
    keymap: &Keymap,
) {
    let (w, h) = model.window_size;
    let colors = &model.theme.colors;
    let bindings = keymap.bindings_for_display();

    frame.fill_rect_blend(
        Rect::new(0.0, 0.0, w as f32, h as f32),
        colors.overlay.to_argb_u32(),
        colors.overlay.alpha_f32(),
    );

    let panel = geometry::help_modal_rect(w, h, bindings.len());
    frame.fill_rect(panel, colors.panel.to_argb_u32());

    let mut y = panel.y + geometry::MODAL_PADDING + TITLE_SIZE;
    text.draw_text(
        frame,
        "Keyboard shortcuts",
        panel.x + geometry::MODAL_PADDING,
        y,
        TITLE_SIZE,
        colors.text.to_argb_u32(),
    );
    y += geometry::MODAL_ROW_HEIGHT * 1.5;

    for (keystroke, command) in bindings {
        if y > panel.y + panel.height - geometry::MODAL_PADDING {
            break;
        }
        text.draw_text(
            frame,
            &keystroke.to_string(),
            panel.x + geometry::MODAL_PADDING,
            y,
            TEXT_SIZE,
            colors.text.to_argb_u32(),
        );
        // Command labels right-aligned against the panel edge
        let label_width = text.measure(command.label(), TEXT_SIZE);
        text.draw_text(
            frame,
            command.label(),
            panel.x + panel.width - geometry::MODAL_PADDING - label_width,
            y,
            TEXT_SIZE,
            colors.text_dim.to_argb_u32(),
        );
        y += geometry::MODAL_ROW_HEIGHT;
    }
}
