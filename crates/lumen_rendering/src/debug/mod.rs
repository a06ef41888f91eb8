//! Immediate-mode debug geometry.
//!
//! Producers append colored segments to a [`DebugLines`] buffer owned by the
//! frame; the renderer uploads the buffer once and draws it as a line list.

mod draw;
mod lines;

pub use draw::{draw_aabb, draw_axes, draw_frustum, draw_frustum_normals, draw_grid};
pub use lines::{DebugLines, LineVertex};
