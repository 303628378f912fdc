//! Text rendering via fontdue
//!
//! The viewer does not bundle a font; it picks up a system font at
//! startup (overridable with the SHOWCASE_FONT environment variable).
//! When no font can be found, text drawing degrades to a no-op - the
//! carousel itself needs no text to function.

use std::collections::HashMap;
use std::path::PathBuf;

use fontdue::{Font, FontSettings, Metrics};

use super::frame::{blend_colors, Frame};

// Glyph cache key: (character, font_size as bits)
type GlyphCacheKey = (char, u32);

/// Common system font locations, tried in order
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/ubuntu/Ubuntu-R.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Locate a usable font file
fn locate_font() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("SHOWCASE_FONT") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        tracing::warn!("SHOWCASE_FONT points at {}, which does not exist", path.display());
    }

    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Rasterizes and caches glyphs for UI text
pub struct TextPainter {
    font: Option<Font>,
    cache: HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>,
}

impl TextPainter {
    /// Load the system font. Logs and degrades to no-op text if none found.
    pub fn new() -> Self {
        let font = locate_font().and_then(|path| {
            let bytes = std::fs::read(&path).ok()?;
            match Font::from_bytes(bytes, FontSettings::default()) {
                Ok(font) => {
                    tracing::info!("Loaded UI font from {}", path.display());
                    Some(font)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse font {}: {}", path.display(), e);
                    None
                }
            }
        });
        if font.is_none() {
            tracing::warn!("No usable UI font found; captions and help text disabled");
        }
        Self {
            font,
            cache: HashMap::new(),
        }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Width of `text` at `size` in pixels (0.0 without a font)
    pub fn measure(&mut self, text: &str, size: f32) -> f32 {
        let Some(font) = &self.font else {
            return 0.0;
        };
        text.chars()
            .map(|ch| font.metrics(ch, size).advance_width)
            .sum()
    }

    /// Draw `text` with its baseline at (x, y). Returns the advance width.
    pub fn draw_text(
        &mut self,
        frame: &mut Frame<'_>,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: u32,
    ) -> f32 {
        let Some(font) = &self.font else {
            return 0.0;
        };

        let mut pen_x = x;
        for ch in text.chars() {
            let key = (ch, size.to_bits());
            let (metrics, bitmap) = self
                .cache
                .entry(key)
                .or_insert_with(|| font.rasterize(ch, size));

            let glyph_x = pen_x + metrics.xmin as f32;
            let glyph_y = y - metrics.height as f32 - metrics.ymin as f32;

            for (row, chunk) in bitmap.chunks(metrics.width).enumerate() {
                let py = glyph_y + row as f32;
                if py < 0.0 || py >= frame.height() as f32 {
                    continue;
                }
                for (col, &coverage) in chunk.iter().enumerate() {
                    if coverage == 0 {
                        continue;
                    }
                    let px = glyph_x + col as f32;
                    if px < 0.0 || px >= frame.width() as f32 {
                        continue;
                    }
                    let alpha = coverage as f32 / 255.0;
                    let idx_x = px as usize;
                    let idx_y = py as usize;
                    let w = frame.width();
                    let buffer = frame.buffer_mut();
                    let idx = idx_y * w + idx_x;
                    buffer[idx] = blend_colors(buffer[idx], color, alpha);
                }
            }

            pen_x += metrics.advance_width;
        }
        pen_x - x
    }
}

impl Default for TextPainter {
    fn default() -> Self {
        Self::new()
    }
}
