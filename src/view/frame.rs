//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code. All
//! coordinates are in pixels; out-of-bounds operations are clipped.

use super::geometry::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The `alpha` parameter
/// determines the blend ratio. Returns the blended color with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer.
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected = width * height;
        let (width, height) = if buffer.len() < expected && width > 0 {
            (width, buffer.len() / width)
        } else {
            (width, height)
        };
        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get mutable access to the underlying pixel buffer.
    /// Prefer the drawing methods when possible.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u32] {
        self.buffer
    }

    /// Fill the entire frame with a color
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Clip a rect to the frame, returning integer pixel bounds
    fn clip(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        let x0 = rect.x.max(0.0) as usize;
        let y0 = rect.y.max(0.0) as usize;
        let x1 = ((rect.x + rect.width).min(self.width as f32)).max(0.0) as usize;
        let y1 = ((rect.y + rect.height).min(self.height as f32)).max(0.0) as usize;
        if x0 >= x1 || y0 >= y1 {
            None
        } else {
            Some((x0, y0, x1, y1))
        }
    }

    /// Fill a rectangle with an opaque color
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            let row = &mut self.buffer[y * self.width + x0..y * self.width + x1];
            row.fill(color);
        }
    }

    /// Blend a rectangle onto the existing pixels with the given alpha
    pub fn fill_rect_blend(&mut self, rect: Rect, color: u32, alpha: f32) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let idx = y * self.width + x;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Fill a disc centered at (cx, cy), blended at `alpha`.
    /// Edges are antialiased over one pixel.
    pub fn fill_disc(&mut self, cx: f32, cy: f32, radius: f32, color: u32, alpha: f32) {
        let bounds = Rect::new(
            cx - radius - 1.0,
            cy - radius - 1.0,
            2.0 * radius + 2.0,
            2.0 * radius + 2.0,
        );
        let Some((x0, y0, x1, y1)) = self.clip(bounds) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let idx = y * self.width + x;
                    self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha * coverage);
                }
            }
        }
    }

    /// Draw a chevron (`<` when `left`, `>` otherwise) centered in `rect`
    pub fn fill_chevron(&mut self, rect: Rect, left: bool, color: u32, alpha: f32) {
        let (cx, cy) = rect.center();
        let half = rect.height * 0.22;
        let thickness = 2.0;
        let steps = half as usize * 2;
        for i in 0..=steps {
            let t = i as f32 / steps.max(1) as f32;
            let dy = half * (t - 0.5) * 2.0;
            let dx = if left {
                dy.abs() - half / 2.0
            } else {
                half / 2.0 - dy.abs()
            };
            self.fill_rect_blend(
                Rect::new(cx + dx - thickness / 2.0, cy + dy, thickness, 1.5),
                color,
                alpha,
            );
        }
    }

    /// Blit RGBA pixels scaled to `dst` with nearest-neighbor sampling.
    ///
    /// The source is the full image; `dst` may extend beyond the frame and
    /// is clipped.
    pub fn blit_scaled_rgba(
        &mut self,
        pixels: &[u8],
        img_width: u32,
        img_height: u32,
        dst: Rect,
    ) {
        if img_width == 0 || img_height == 0 || dst.width <= 0.0 || dst.height <= 0.0 {
            return;
        }
        if pixels.len() < (img_width as usize * img_height as usize) * 4 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip(dst) else {
            return;
        };
        let scale_x = img_width as f32 / dst.width;
        let scale_y = img_height as f32 / dst.height;

        for y in y0..y1 {
            let src_y = (((y as f32 - dst.y) * scale_y) as u32).min(img_height - 1);
            for x in x0..x1 {
                let src_x = (((x as f32 - dst.x) * scale_x) as u32).min(img_width - 1);
                let src_idx = (src_y as usize * img_width as usize + src_x as usize) * 4;
                let r = pixels[src_idx] as u32;
                let g = pixels[src_idx + 1] as u32;
                let b = pixels[src_idx + 2] as u32;
                let a = pixels[src_idx + 3] as f32 / 255.0;
                let fg = 0xFF000000 | (r << 16) | (g << 8) | b;
                let idx = y * self.width + x;
                self.buffer[idx] = if a >= 1.0 {
                    fg
                } else {
                    blend_colors(self.buffer[idx], fg, a)
                };
            }
        }
    }

    /// Read a pixel (for tests)
    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.buffer[y * self.width + x]
    }
}
