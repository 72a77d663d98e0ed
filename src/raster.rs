//! Edge-function triangle rasterization
//!
//! Fills triangles by evaluating three edge functions over the integer
//! bounding box and interpolating vertex attributes with barycentric
//! weights. A pixel is inside when all three edge values are >= 0, which
//! requires a consistent winding order: a triangle wound the other way
//! draws nothing at all. The cube renderer leans on that — back faces are
//! never culled explicitly, they simply fail the edge test.
//!
//! Texture coordinates are interpolated affinely in screen space. That is
//! exact under orthographic projection, so no perspective correction
//! exists here.

use crate::color::Color;
use crate::display::PixelBuffer;
use crate::math3d::Vec2;
use crate::texture::Texture;

/// Signed areas from integer vertices are whole numbers; anything below
/// this is a zero-area triangle
const AREA_EPSILON: f32 = 1e-6;

/// A screen-space vertex: integer pixel position, color, UV
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub u: f32,
    pub v: f32,
}

impl Vertex {
    #[inline]
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self {
            x,
            y,
            color,
            u: 0.0,
            v: 0.0,
        }
    }

    #[inline]
    pub fn textured(x: i32, y: i32, color: Color, u: f32, v: f32) -> Self {
        Self { x, y, color, u, v }
    }

    #[inline]
    fn pos(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Edge function: signed parallelogram area of (b - a) and (c - a).
/// The sign tells which side of the directed edge a->b the point c lies on.
#[inline]
pub fn edge_function(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (c.x - a.x) * (b.y - a.y) - (c.y - a.y) * (b.x - a.x)
}

/// Fill one triangle, interpolating vertex colors and, when a texture is
/// supplied, modulating by the sampled texel.
///
/// Degenerate (zero-area) triangles are skipped entirely.
pub fn fill_triangle(
    buffer: &mut PixelBuffer,
    v1: Vertex,
    v2: Vertex,
    v3: Vertex,
    texture: Option<&Texture>,
) {
    let min_x = v1.x.min(v2.x).min(v3.x);
    let max_x = v1.x.max(v2.x).max(v3.x);
    let min_y = v1.y.min(v2.y).min(v3.y);
    let max_y = v1.y.max(v2.y).max(v3.y);

    let p1 = v1.pos();
    let p2 = v2.pos();
    let p3 = v3.pos();
    let k = edge_function(p1, p2, p3);
    if k.abs() < AREA_EPSILON {
        return;
    }

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x as f32, y as f32);
            let w1 = edge_function(p2, p3, p);
            let w2 = edge_function(p3, p1, p);
            let w3 = edge_function(p1, p2, p);

            if w1 >= 0.0 && w2 >= 0.0 && w3 >= 0.0 {
                let w1 = w1 / k;
                let w2 = w2 / k;
                let w3 = w3 / k;

                let mut color = Color::new(
                    w1 * v1.color.r + w2 * v2.color.r + w3 * v3.color.r,
                    w1 * v1.color.g + w2 * v2.color.g + w3 * v3.color.g,
                    w1 * v1.color.b + w2 * v2.color.b + w3 * v3.color.b,
                );

                if let Some(tex) = texture {
                    let u = w1 * v1.u + w2 * v2.u + w3 * v3.u;
                    let v = w1 * v1.v + w2 * v2.v + w3 * v3.v;
                    color = color.modulate(tex.sample(u, v));
                }

                // Off-buffer pixels fail the bounds check in dot; the
                // bounding box itself is never clipped
                buffer.dot(x, y, color);
            }
        }
    }
}

/// Fill a quadrilateral by splitting along the v1-v3 diagonal.
/// Corners must arrive in the winding that makes both halves front-facing.
pub fn fill_quad(
    buffer: &mut PixelBuffer,
    v1: Vertex,
    v2: Vertex,
    v3: Vertex,
    v4: Vertex,
    texture: Option<&Texture>,
) {
    fill_triangle(buffer, v3, v2, v1, texture);
    fill_triangle(buffer, v1, v4, v3, texture);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat white comes out of interpolation as the barycentric weight sum,
    /// which can round one quantization step under 255
    fn is_white(px: (u8, u8, u8)) -> bool {
        px.0 >= 254 && px.1 >= 254 && px.2 >= 254
    }

    #[test]
    fn test_triangle_covers_half_plane() {
        let mut buf = PixelBuffer::with_size(20, 20);
        buf.clear(Color::BLACK);
        fill_triangle(
            &mut buf,
            Vertex::new(0, 0, Color::WHITE),
            Vertex::new(0, 10, Color::WHITE),
            Vertex::new(10, 0, Color::WHITE),
            None,
        );
        for y in 0..20 {
            for x in 0..20 {
                let px = buf.get_pixel(x, y).unwrap();
                if x + y <= 10 {
                    assert!(is_white(px), "pixel ({}, {}) should be filled", x, y);
                } else {
                    assert_eq!(px, (0, 0, 0), "pixel ({}, {}) should be black", x, y);
                }
            }
        }
    }

    #[test]
    fn test_opposite_winding_draws_nothing() {
        // Same triangle, reversed winding: every edge test fails, nothing
        // is written. Cube faces rely on this in place of back-face culling.
        let mut buf = PixelBuffer::with_size(20, 20);
        fill_triangle(
            &mut buf,
            Vertex::new(0, 0, Color::WHITE),
            Vertex::new(10, 0, Color::WHITE),
            Vertex::new(0, 10, Color::WHITE),
            None,
        );
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_degenerate_triangle_is_skipped() {
        let mut buf = PixelBuffer::with_size(20, 20);
        fill_triangle(
            &mut buf,
            Vertex::new(0, 0, Color::WHITE),
            Vertex::new(5, 5, Color::WHITE),
            Vertex::new(10, 10, Color::WHITE),
            None,
        );
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_barycentric_weights_sum_to_one() {
        // With pure red/green/blue vertices the written channels are the
        // barycentric weights themselves, so r+g+b recovers w1+w2+w3.
        // Truncation drops up to one step per channel.
        let mut buf = PixelBuffer::with_size(20, 20);
        fill_triangle(
            &mut buf,
            Vertex::new(0, 0, Color::new(1.0, 0.0, 0.0)),
            Vertex::new(0, 15, Color::new(0.0, 1.0, 0.0)),
            Vertex::new(15, 0, Color::new(0.0, 0.0, 1.0)),
            None,
        );
        let mut checked = 0;
        for y in 0..20 {
            for x in 0..20 {
                let (r, g, b) = buf.get_pixel(x, y).unwrap();
                if (r, g, b) == (0, 0, 0) {
                    continue;
                }
                let sum = r as u32 + g as u32 + b as u32;
                assert!(
                    (252..=255).contains(&sum),
                    "weights at ({}, {}) sum to {}/255",
                    x,
                    y,
                    sum
                );
                checked += 1;
            }
        }
        assert!(checked > 100);
    }

    #[test]
    fn test_quad_covers_rect_without_gaps() {
        // Both halves of the diagonal split must tile the rectangle: no gap
        // along the shared diagonal, and overwrites there are identical.
        let mut buf = PixelBuffer::with_size(20, 20);
        fill_quad(
            &mut buf,
            Vertex::new(0, 0, Color::WHITE),
            Vertex::new(10, 0, Color::WHITE),
            Vertex::new(10, 10, Color::WHITE),
            Vertex::new(0, 10, Color::WHITE),
            None,
        );
        for y in 0..20 {
            for x in 0..20 {
                let px = buf.get_pixel(x, y).unwrap();
                if x <= 10 && y <= 10 {
                    assert!(is_white(px), "gap at ({}, {})", x, y);
                } else {
                    assert_eq!(px, (0, 0, 0));
                }
            }
        }
    }

    #[test]
    fn test_textured_quad_shows_distinct_quadrants() {
        // 5x5 texture colored by quadrant. The wrap formula reaches texels
        // 0..=3, so probes sit well inside each quadrant; a 2x2 texture
        // would collapse to a single texel under the wrap quirk.
        let mut texels = Vec::new();
        for y in 0..5u32 {
            for x in 0..5u32 {
                let rgb: [u8; 3] = match (x >= 2, y >= 2) {
                    (false, false) => [255, 0, 0],
                    (true, false) => [0, 255, 0],
                    (false, true) => [0, 0, 255],
                    (true, true) => [255, 255, 0],
                };
                texels.extend_from_slice(&rgb);
            }
        }
        let tex = Texture::from_rgb(5, 5, texels).unwrap();

        let mut buf = PixelBuffer::with_size(20, 20);
        fill_quad(
            &mut buf,
            Vertex::textured(0, 0, Color::WHITE, 0.0, 0.0),
            Vertex::textured(10, 0, Color::WHITE, 1.0, 0.0),
            Vertex::textured(10, 10, Color::WHITE, 1.0, 1.0),
            Vertex::textured(0, 10, Color::WHITE, 0.0, 1.0),
            Some(&tex),
        );

        let classify = |x: i32, y: i32| {
            let (r, g, b) = buf.get_pixel(x, y).unwrap();
            (r > 200, g > 200, b > 200)
        };
        assert_eq!(classify(1, 1), (true, false, false)); // red
        assert_eq!(classify(5, 1), (false, true, false)); // green
        assert_eq!(classify(1, 5), (false, false, true)); // blue
        assert_eq!(classify(5, 5), (true, true, false)); // yellow
    }

    #[test]
    fn test_color_interpolation_matches_vertex_at_corner() {
        let mut buf = PixelBuffer::with_size(20, 20);
        fill_triangle(
            &mut buf,
            Vertex::new(0, 0, Color::new(1.0, 0.0, 0.0)),
            Vertex::new(0, 10, Color::new(0.0, 1.0, 0.0)),
            Vertex::new(10, 0, Color::new(0.0, 0.0, 1.0)),
            None,
        );
        // At the v1 corner the weights are (1, 0, 0)
        assert_eq!(buf.get_pixel(0, 0), Some((255, 0, 0)));
        assert_eq!(buf.get_pixel(0, 10), Some((0, 255, 0)));
        assert_eq!(buf.get_pixel(10, 0), Some((0, 0, 255)));
    }

    #[test]
    fn test_off_buffer_geometry_is_clipped_by_dot() {
        // Bounding box extends past the buffer; out-of-range pixels are
        // dropped by the bounds check, in-range ones still fill.
        let mut buf = PixelBuffer::with_size(8, 8);
        fill_triangle(
            &mut buf,
            Vertex::new(-4, -4, Color::WHITE),
            Vertex::new(-4, 12, Color::WHITE),
            Vertex::new(12, -4, Color::WHITE),
            None,
        );
        assert!(is_white(buf.get_pixel(0, 0).unwrap()));
        assert!(is_white(buf.get_pixel(3, 3).unwrap()));
        assert_eq!(buf.get_pixel(7, 7), Some((0, 0, 0)));
    }
}
