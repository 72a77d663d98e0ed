//! Cube projection
//!
//! Builds a cube from a grid position, orientation, and the active camera,
//! then emits its six faces as screen-space quads for the rasterizer.
//! Faces are drawn in a fixed order; later faces overwrite earlier ones,
//! and back-wound faces fail the rasterizer's edge test. There is no depth
//! buffer — a fixed-order painter's pass is enough for one convex cube
//! seen from outside.

use crate::color::Color;
use crate::display::PixelBuffer;
use crate::math3d::{Vec2, Vec3};
use crate::raster::{self, Vertex};
use crate::texture::Texture;

/// Camera pose applied to all rendered geometry.
/// Mutated by the frame loop, read by the projector.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::zero(),
            yaw: 0.0,
            pitch: 5.5,
            zoom: 1.0,
        }
    }
}

/// Unit-cube corners. The numbering is load-bearing: the face table below
/// indexes into it.
const CORNERS: [Vec3; 8] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(0.0, 1.0, 1.0),
];

/// Corner indices of the six faces, in draw order. Each face assigns its
/// four corners the UVs (0,0), (1,0), (1,1), (0,1) in listed order.
const FACES: [[usize; 4]; 6] = [
    [7, 6, 2, 3],
    [0, 1, 2, 3],
    [7, 6, 5, 4],
    [3, 7, 4, 0],
    [1, 5, 6, 2],
    [4, 5, 1, 0],
];

const FACE_UVS: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

/// Run the transform chain for all eight corners: scale, translate into
/// camera-relative space, rotate about Y then X, project orthographically
/// to screen coordinates. Z is carried through but never tested.
pub fn project_corners(
    camera: &Camera,
    grid_pos: Vec2,
    yaw: f32,
    pitch: f32,
    scale: f32,
    buffer_width: u32,
    buffer_height: u32,
) -> [Vec3; 8] {
    let yaw = yaw - camera.yaw;
    let pitch = pitch - camera.pitch;
    let scale = scale * camera.zoom;

    // Grid position lands on the XZ plane; the camera is subtracted on all
    // three axes
    let offset = Vec3::new(
        grid_pos.x * scale - camera.position.x,
        -camera.position.y,
        grid_pos.y * scale - camera.position.z,
    );
    let center = Vec3::new(
        buffer_width as f32 * 0.5,
        buffer_height as f32 * 0.5,
        0.0,
    );

    let mut projected = [Vec3::zero(); 8];
    for (out, corner) in projected.iter_mut().zip(CORNERS.iter()) {
        let world = (*corner * scale + offset).rotate_y(yaw).rotate_x(pitch);
        *out = world + center;
    }
    projected
}

/// Draw one textured cube.
///
/// `grid_pos` places the cube on a scale-sized XZ grid; `yaw`/`pitch` are
/// the object's own orientation, offset by the camera pose inside the
/// transform chain. Geometry is recomputed from scratch every call.
pub fn draw_cube(
    buffer: &mut PixelBuffer,
    texture: Option<&Texture>,
    camera: &Camera,
    grid_pos: Vec2,
    yaw: f32,
    pitch: f32,
    scale: f32,
) {
    let corners = project_corners(
        camera,
        grid_pos,
        yaw,
        pitch,
        scale,
        buffer.width(),
        buffer.height(),
    );

    for face in &FACES {
        let mut quad = [Vertex::new(0, 0, Color::WHITE); 4];
        for (slot, (&ci, &(u, v))) in quad.iter_mut().zip(face.iter().zip(FACE_UVS.iter())) {
            let p = corners[ci];
            *slot = Vertex::textured(p.x as i32, p.y as i32, Color::WHITE, u, v);
        }
        raster::fill_quad(buffer, quad[0], quad[1], quad[2], quad[3], texture);
    }
}
