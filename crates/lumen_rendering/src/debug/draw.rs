//! Wireframe producers.
//!
//! Each function appends a fixed number of segments to a [`DebugLines`]
//! buffer. None of them allocate.

use glam::Vec3;
use lumen_shared::{Color, Transform};

use super::DebugLines;
use crate::culling::{Aabb, Frustum, FrustumPlane};

/// Draws a square grid on the XZ plane: `2 * half_extent + 1` lines along
/// each axis, one unit apart, spanning `[-half_extent, half_extent]`.
pub fn draw_grid(lines: &mut DebugLines, half_extent: i32, color: Color) {
    #[allow(clippy::cast_precision_loss)]
    let edge = half_extent as f32;

    for i in -half_extent..=half_extent {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f32;
        lines.add_line(Vec3::new(edge, 0.0, t), Vec3::new(-edge, 0.0, t), color);
    }
    for i in -half_extent..=half_extent {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f32;
        lines.add_line(Vec3::new(t, 0.0, edge), Vec3::new(t, 0.0, -edge), color);
    }
}

/// Draws a transform's unit axes from its translation: right in red, up in
/// green, forward in blue.
pub fn draw_axes(lines: &mut DebugLines, transform: &Transform) {
    let origin = transform.translation();
    lines.add_line(origin, transform.transform_point(Vec3::X), Color::RED);
    lines.add_line(origin, transform.transform_point(Vec3::Y), Color::GREEN);
    lines.add_line(origin, transform.transform_point(Vec3::Z), Color::BLUE);
}

/// Draws the twelve frustum edges.
pub fn draw_frustum(lines: &mut DebugLines, frustum: &Frustum, color: Color) {
    for (a, b) in frustum.edges() {
        lines.add_line(a, b, color);
    }
}

/// Draws each plane's unit normal from the center of its face, fading from
/// [`Color::NORMAL_BASE`] at the face to white at the tip.
pub fn draw_frustum_normals(lines: &mut DebugLines, frustum: &Frustum) {
    for which in FrustumPlane::ALL {
        let base = frustum.face_center(which);
        let tip = base + frustum.plane(which).normal;
        lines.add_gradient_line(base, tip, Color::NORMAL_BASE, Color::WHITE);
    }
}

/// Draws the twelve box edges.
pub fn draw_aabb(lines: &mut DebugLines, aabb: &Aabb, color: Color) {
    for (a, b) in aabb.edges() {
        lines.add_line(a, b, color);
    }
}
