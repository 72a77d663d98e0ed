//! Texture storage and sampling
//!
//! Textures are immutable RGB8 texel stores, loaded once at startup and
//! borrowed by the rasterizer. Sampling wraps out-of-range coordinates the
//! same way the classic renderer did: `abs(c) % (dim - 1)`. That formula
//! never reaches the last texel row/column and folds negative coordinates
//! onto positive ones; it is kept as documented behavior and pinned by the
//! tests below. Because the modulus is `dim - 1`, textures must be at least
//! 2x2, enforced at construction.

use std::path::Path;

use crate::color::Color;

/// Smallest accepted texture dimension (the wrap modulus is `dim - 1`)
const MIN_DIM: u32 = 2;

/// An RGB texture, 3 bytes per texel
#[derive(Clone, Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    texels: Vec<u8>,
}

impl Texture {
    /// Load and decode an image file, converting to RGB8.
    ///
    /// Fails with a diagnostic carrying the path if the file is missing or
    /// corrupt, or if the image is smaller than 2x2.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        Self::from_rgb(width, height, rgb.into_raw()).ok_or_else(|| {
            format!(
                "Texture {} is {}x{}; textures must be at least {}x{}",
                path.display(),
                width,
                height,
                MIN_DIM,
                MIN_DIM
            )
        })
    }

    /// Create a texture from raw RGB data.
    /// Returns None if the buffer length does not match the dimensions or
    /// either dimension is below the 2x2 minimum.
    pub fn from_rgb(width: u32, height: u32, texels: Vec<u8>) -> Option<Self> {
        if width < MIN_DIM || height < MIN_DIM {
            return None;
        }
        if texels.len() != (width * height * 3) as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            texels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fetch the texel at integer coordinates, wrapping any input into range.
    ///
    /// Wrap formula: `abs(c) % (dim - 1)`. Texel column `width - 1` and row
    /// `height - 1` are never returned.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Color {
        let x = x.unsigned_abs() % (self.width - 1);
        let y = y.unsigned_abs() % (self.height - 1);
        let i = ((x + y * self.width) * 3) as usize;
        Color::from_rgb8(self.texels[i], self.texels[i + 1], self.texels[i + 2])
    }

    /// Nearest-neighbor sample at UV coordinates.
    /// Rounds to the closest texel via `floor(c + 0.5)`, then wraps.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Color {
        self.get(
            (u * self.width as f32 + 0.5).floor() as i32,
            (v * self.height as f32 + 0.5).floor() as i32,
        )
    }

    /// Generate a checkerboard pattern (fallback when no image is available)
    pub fn checkerboard(size: u32, tile_size: u32, c1: Color, c2: Color) -> Self {
        let size = size.max(MIN_DIM);
        let b1 = c1.to_rgb8();
        let b2 = c2.to_rgb8();
        let mut texels = Vec::with_capacity((size * size * 3) as usize);
        for y in 0..size {
            for x in 0..size {
                let checker = ((x / tile_size) + (y / tile_size)) % 2 == 0;
                texels.extend_from_slice(if checker { &b1 } else { &b2 });
            }
        }
        Self {
            width: size,
            height: size,
            texels,
        }
    }
}
