//! Drawing primitives for [`RasterBuffer`].
//!
//! Only the shapes the preview composition actually needs: solid
//! fills, axis-aligned rectangles, filled circles and rings for the
//! location marker and compass motif, and bitmap-font captions.

use super::font;
use super::{Color, RasterBuffer, BYTES_PER_PIXEL};

impl RasterBuffer {
    /// Fills the entire buffer with a solid color.
    pub fn fill(&mut self, color: Color) {
        for pixel in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[0] = color.b;
            pixel[1] = color.g;
            pixel[2] = color.r;
            pixel[3] = color.a;
        }
    }

    /// Fills an axis-aligned rectangle, clipped to the buffer bounds.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let x0 = x.max(0) as u32;
        let y0 = y.max(0) as u32;
        let x1 = (x as i64 + width as i64).clamp(0, self.width as i64) as u32;
        let y1 = (y as i64 + height as i64).clamp(0, self.height as i64) as u32;

        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Draws a filled circle centered at `(cx, cy)`.
    pub fn draw_filled_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let r_sq = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r_sq {
                    let px = cx + dx;
                    let py = cy + dy;
                    if px >= 0 && py >= 0 {
                        self.set_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }

    /// Draws a circle outline of the given stroke thickness.
    pub fn draw_ring(&mut self, cx: i32, cy: i32, radius: i32, thickness: i32, color: Color) {
        let outer_sq = radius * radius;
        let inner = (radius - thickness).max(0);
        let inner_sq = inner * inner;

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d_sq = dx * dx + dy * dy;
                if d_sq <= outer_sq && d_sq >= inner_sq {
                    let px = cx + dx;
                    let py = cy + dy;
                    if px >= 0 && py >= 0 {
                        self.set_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }

    /// Draws a horizontal line segment of the given thickness.
    pub fn draw_hline(&mut self, x0: i32, x1: i32, y: i32, thickness: u32, color: Color) {
        let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.fill_rect(left, y, (right - left).max(0) as u32 + 1, thickness, color);
    }

    /// Draws a vertical line segment of the given thickness.
    pub fn draw_vline(&mut self, x: i32, y0: i32, y1: i32, thickness: u32, color: Color) {
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        self.fill_rect(x, top, thickness, (bottom - top).max(0) as u32 + 1, color);
    }

    /// Draws a text caption with the embedded 5x7 bitmap font.
    ///
    /// `(x, y)` is the top-left corner of the first glyph; `scale`
    /// multiplies the glyph cell size. Characters without a glyph
    /// render as blank space. The font covers digits, punctuation and
    /// the uppercase letters used by the preview captions.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, scale: u32, color: Color) {
        let mut pen_x = x;
        for ch in text.chars() {
            if let Some(glyph) = font::glyph(ch) {
                for (row, bits) in glyph.iter().enumerate() {
                    for col in 0..font::GLYPH_WIDTH {
                        if bits & (0b1_0000 >> col) != 0 {
                            self.fill_rect(
                                pen_x + (col * scale) as i32,
                                y + (row as u32 * scale) as i32,
                                scale,
                                scale,
                                color,
                            );
                        }
                    }
                }
            }
            pen_x += font::advance(scale) as i32;
        }
    }

    /// Draws a text caption horizontally centered around `center_x`.
    pub fn draw_text_centered(&mut self, center_x: i32, y: i32, text: &str, scale: u32, color: Color) {
        let width = font::text_width(text, scale) as i32;
        self.draw_text(center_x - width / 2, y, text, scale, color);
    }
}
