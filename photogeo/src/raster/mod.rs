//! Raster buffer model for preview composition.
//!
//! Every decoded photo, every downloaded map tile, the composed map and
//! the final preview surface are instances of [`RasterBuffer`]: a
//! contiguous 32-bit BGRA pixel array in top-down row order. Ownership
//! is exclusive per buffer; composition always copies pixel blocks from
//! a source buffer into a destination buffer, never aliases.
//!
//! Decoding and resampling are delegated to the `image` crate; the BGRA
//! byte order matches what a bitmap-based display host consumes
//! directly.

mod draw;
mod font;

use image::imageops::FilterType;
use image::{ImageBuffer, ImageReader, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Bytes per pixel in the fixed 32-bit BGRA format.
pub const BYTES_PER_PIXEL: usize = 4;

/// Pixel height of one caption line at the given font scale.
pub fn font_height(scale: u32) -> u32 {
    font::GLYPH_HEIGHT * scale
}

/// A color in the buffer's native BGRA byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Color {
    /// Creates an opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
}

/// Errors from raster decoding and allocation.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// File could not be read
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),
    /// Payload could not be decoded as an image
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Owned 32-bit BGRA pixel buffer, top-down row order.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Allocates a zeroed (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    /// Allocates a buffer filled with a solid color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut buffer = Self::new(width, height);
        buffer.fill(color);
        buffer
    }

    /// Decodes compressed image bytes (PNG, JPEG, ...) into a buffer.
    ///
    /// The container format is sniffed from the payload, matching how
    /// tile servers deliver raster tiles without reliable content types.
    pub fn decode(bytes: &[u8]) -> Result<Self, RasterError> {
        let decoded = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(image::ImageError::IoError)?
            .decode()?;
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    /// Loads and decodes an image file from disk.
    pub fn open(path: &Path) -> Result<Self, RasterError> {
        let bytes = std::fs::read(path)?;
        Ok(Self::decode(&bytes)?)
    }

    /// Converts an RGBA image into the native BGRA layout.
    pub fn from_rgba(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let mut data = image.into_raw();
        for pixel in data.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.swap(0, 2);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Exports a copy of the buffer as an RGBA image (for PNG encoding).
    pub fn to_rgba(&self) -> RgbaImage {
        let mut data = self.data.clone();
        for pixel in data.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.swap(0, 2);
        }
        RgbaImage::from_raw(self.width, self.height, data)
            .expect("buffer length matches dimensions by construction")
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw BGRA bytes, top-down rows.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Reads a single pixel. Out-of-bounds reads return black.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        if x >= self.width || y >= self.height {
            return Color::BLACK;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Color {
            b: self.data[i],
            g: self.data[i + 1],
            r: self.data[i + 2],
            a: self.data[i + 3],
        }
    }

    /// Writes a single pixel. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.data[i] = color.b;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.r;
        self.data[i + 3] = color.a;
    }

    /// Copies `src` into this buffer with its top-left corner at
    /// `(dest_x, dest_y)`, clipped to the destination bounds.
    pub fn blit(&mut self, src: &RasterBuffer, dest_x: i32, dest_y: i32) {
        for sy in 0..src.height {
            let dy = dest_y as i64 + sy as i64;
            if dy < 0 || dy >= self.height as i64 {
                continue;
            }

            // Clip the source row to the destination width
            let sx_start = (-dest_x).clamp(0, src.width as i32) as u32;
            let sx_end = (self.width as i64 - dest_x as i64).clamp(0, src.width as i64) as u32;
            if sx_start >= sx_end {
                continue;
            }

            let src_offset =
                (sy as usize * src.width as usize + sx_start as usize) * BYTES_PER_PIXEL;
            let dst_x = (dest_x + sx_start as i32) as usize;
            let dst_offset = (dy as usize * self.width as usize + dst_x) * BYTES_PER_PIXEL;
            let len = (sx_end - sx_start) as usize * BYTES_PER_PIXEL;

            self.data[dst_offset..dst_offset + len]
                .copy_from_slice(&src.data[src_offset..src_offset + len]);
        }
    }

    /// Produces a resampled copy at the given dimensions.
    ///
    /// Uses a triangle (bilinear/area) filter: downscaling photographic
    /// content with nearest-neighbor produces visible banding, which is
    /// unacceptable for the preview surface. Resampling is per-channel
    /// and therefore channel-order agnostic, so the BGRA bytes pass
    /// through the RGBA-typed resize unchanged.
    pub fn scaled(&self, width: u32, height: u32) -> RasterBuffer {
        if width == 0 || height == 0 || self.width == 0 || self.height == 0 {
            return RasterBuffer::new(width, height);
        }

        let source: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.data.clone())
                .expect("buffer length matches dimensions by construction");
        let resized = image::imageops::resize(&source, width, height, FilterType::Triangle);

        RasterBuffer {
            width,
            height,
            data: resized.into_raw(),
        }
    }
}
