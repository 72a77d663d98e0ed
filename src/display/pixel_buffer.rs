//! RGB24 pixel buffer for software rendering
//!
//! This is the canvas: the rasterizer writes here, and `Display::present`
//! streams the bytes to the window. `dot` is the sole per-pixel write path;
//! anything outside the raster is silently dropped.

use crate::color::Color;

/// Row-major RGB24 pixel buffer, 3 bytes per pixel
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a buffer with the given resolution, cleared to black
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width * height * 3) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((x + y * self.width) * 3) as usize
    }

    /// Clear every pixel to a solid color
    pub fn clear(&mut self, color: Color) {
        let rgb = color.to_rgb8();
        for px in self.pixels.chunks_exact_mut(3) {
            px.copy_from_slice(&rgb);
        }
    }

    /// Write a single pixel (bounds checked; out-of-range writes are dropped)
    #[inline]
    pub fn dot(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx..idx + 3].copy_from_slice(&color.to_rgb8());
        }
    }

    /// Read a pixel (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<(u8, u8, u8)> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some((
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
            ))
        } else {
            None
        }
    }

    /// Raw bytes for streaming to the display texture
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}
