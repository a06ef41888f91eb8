//! Bounded per-frame line-list buffer.
//!
//! Pre-allocates the whole vertex budget once and reuses it every frame.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use lumen_shared::{Color, DEFAULT_LINE_VERT_CAPACITY};

/// A debug line vertex: position + color.
///
/// Every pair of consecutive vertices forms one line segment.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Homogeneous position, `w = 1`.
    pub position: [f32; 4],
    /// RGBA color.
    pub color: [f32; 4],
}

impl LineVertex {
    /// Size of a vertex in bytes (the upload stride).
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Creates a vertex from a point and a color.
    #[inline]
    #[must_use]
    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position: [position.x, position.y, position.z, 1.0],
            color: color.to_array(),
        }
    }

    /// The position without its `w` component.
    #[inline]
    #[must_use]
    pub fn point(&self) -> Vec3 {
        Vec3::new(self.position[0], self.position[1], self.position[2])
    }
}

/// Fixed-capacity, append-only buffer of colored line segments.
///
/// Lifecycle per frame: [`clear`](Self::clear), any number of `add_*` calls,
/// one read of [`verts`](Self::verts) by the renderer.
///
/// Lines that do not fit are dropped whole; the buffer never grows and never
/// writes half a segment.
pub struct DebugLines {
    /// Vertex storage. Only `[0, count)` is meaningful.
    verts: Box<[LineVertex]>,
    /// Number of valid vertices.
    count: usize,
    /// Lines rejected since the last clear.
    dropped: usize,
}

impl DebugLines {
    /// Creates a buffer holding up to `capacity` vertices.
    ///
    /// # Panics
    ///
    /// Panics if capacity is smaller than one segment.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "Capacity must hold at least one line");
        Self {
            verts: vec![LineVertex::default(); capacity].into_boxed_slice(),
            count: 0,
            dropped: 0,
        }
    }

    /// Appends a segment whose endpoints have their own colors.
    ///
    /// Returns false if the segment was dropped for lack of space.
    #[inline]
    pub fn add_gradient_line(&mut self, a: Vec3, b: Vec3, color_a: Color, color_b: Color) -> bool {
        if self.count + 2 > self.verts.len() {
            if self.dropped == 0 {
                tracing::debug!(
                    capacity = self.verts.len(),
                    "debug line buffer full; dropping lines until next clear"
                );
            }
            self.dropped += 1;
            return false;
        }

        self.verts[self.count] = LineVertex::new(a, color_a);
        self.verts[self.count + 1] = LineVertex::new(b, color_b);
        self.count += 2;
        true
    }

    /// Appends a single-color segment.
    ///
    /// Returns false if the segment was dropped for lack of space.
    #[inline]
    pub fn add_line(&mut self, a: Vec3, b: Vec3, color: Color) -> bool {
        self.add_gradient_line(a, b, color, color)
    }

    /// Resets the buffer for a new frame. Storage is kept, not zeroed.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
        self.dropped = 0;
    }

    /// The valid vertices, in append order.
    #[inline]
    #[must_use]
    pub fn verts(&self) -> &[LineVertex] {
        &self.verts[..self.count]
    }

    /// Number of valid vertices.
    #[inline]
    #[must_use]
    pub const fn vert_count(&self) -> usize {
        self.count
    }

    /// Number of complete segments.
    #[inline]
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.count / 2
    }

    /// Maximum number of vertices.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.verts.len()
    }

    /// Segments dropped since the last clear.
    #[inline]
    #[must_use]
    pub const fn dropped_lines(&self) -> usize {
        self.dropped
    }

    /// Returns true if no vertex has been added since the last clear.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the valid vertices as bytes for GPU upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.verts())
    }
}

impl Default for DebugLines {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_VERT_CAPACITY)
    }
}

impl std::fmt::Debug for DebugLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugLines")
            .field("count", &self.count)
            .field("capacity", &self.verts.len())
            .field("dropped", &self.dropped)
            .finish()
    }
}
