//! Per-frame render context.
//!
//! Owns the debug line buffer for the frame loop. Producers borrow it for
//! the duration of one frame; the renderer reads it once at the end.

use lumen_shared::Transform;

use super::{LineSink, RenderStats};
use crate::debug::{DebugLines, LineVertex};

/// Everything the renderer needs to draw one frame.
///
/// Borrowed from a [`FrameContext`] and handed to a [`LineSink`].
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    /// Frame counter, starting at 1.
    pub frame_number: u64,
    /// Camera transform (camera to world).
    pub view: &'a Transform,
    /// Line-list vertices, two per segment.
    pub vertices: &'a [LineVertex],
    /// Frame statistics.
    pub stats: RenderStats,
}

impl RenderFrame<'_> {
    /// Returns the vertices as bytes for GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Returns the view transform as bytes.
    #[must_use]
    pub fn view_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self.view)
    }

    /// Returns true if there's anything to draw.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Frame-scoped state: the line buffer, the camera and the running stats.
#[derive(Debug)]
pub struct FrameContext {
    lines: DebugLines,
    view: Transform,
    frame_number: u64,
    delta_time: f32,
    stats: RenderStats,
}

impl FrameContext {
    /// Creates a context with a line buffer of `line_capacity` vertices.
    #[must_use]
    pub fn new(line_capacity: usize, view: Transform) -> Self {
        Self {
            lines: DebugLines::new(line_capacity),
            view,
            frame_number: 0,
            delta_time: 0.0,
            stats: RenderStats::default(),
        }
    }

    /// Starts a new frame: clears the lines and resets the stats.
    pub fn begin(&mut self, delta_time: f32) {
        self.lines.clear();
        self.frame_number += 1;
        self.delta_time = delta_time;
        self.stats = RenderStats::default();
    }

    /// Seals the frame and hands it to `sink`.
    ///
    /// `frame_time_ms` is the CPU time the caller measured for this frame.
    pub fn submit(&mut self, sink: &mut dyn LineSink, frame_time_ms: f32) -> RenderStats {
        self.stats.line_vertices = saturate(self.lines.vert_count());
        self.stats.line_capacity = saturate(self.lines.capacity());
        self.stats.dropped_lines = saturate(self.lines.dropped_lines());
        self.stats.frame_time_ms = frame_time_ms;

        sink.submit(&RenderFrame {
            frame_number: self.frame_number,
            view: &self.view,
            vertices: self.lines.verts(),
            stats: self.stats,
        });
        self.stats
    }

    /// The line buffer.
    #[must_use]
    pub const fn lines(&self) -> &DebugLines {
        &self.lines
    }

    /// The line buffer, for producers.
    pub fn lines_mut(&mut self) -> &mut DebugLines {
        &mut self.lines
    }

    /// The camera transform.
    #[must_use]
    pub const fn view(&self) -> &Transform {
        &self.view
    }

    /// The camera transform, for controllers.
    pub fn view_mut(&mut self) -> &mut Transform {
        &mut self.view
    }

    /// Current frame counter; zero before the first frame.
    #[must_use]
    pub const fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Delta time of the current frame in seconds.
    #[must_use]
    pub const fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Statistics gathered so far this frame.
    #[must_use]
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Statistics, for producers that count things.
    pub fn stats_mut(&mut self) -> &mut RenderStats {
        &mut self.stats
    }
}

fn saturate(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use lumen_shared::Color;

    #[derive(Default)]
    struct Capture {
        frames: Vec<(u64, usize)>,
    }

    impl LineSink for Capture {
        fn submit(&mut self, frame: &RenderFrame<'_>) {
            self.frames.push((frame.frame_number, frame.vertex_count()));
        }
    }

    #[test]
    fn test_begin_clears_previous_frame() {
        let mut ctx = FrameContext::new(8, Transform::IDENTITY);
        let mut sink = Capture::default();

        ctx.begin(0.016);
        ctx.lines_mut().add_line(Vec3::ZERO, Vec3::ONE, Color::WHITE);
        ctx.submit(&mut sink, 1.0);

        ctx.begin(0.016);
        let stats = ctx.submit(&mut sink, 1.0);

        assert_eq!(sink.frames, vec![(1, 2), (2, 0)]);
        assert_eq!(stats.line_vertices, 0);
        assert_eq!(stats.line_capacity, 8);
    }

    #[test]
    fn test_submit_reports_drops() {
        let mut ctx = FrameContext::new(2, Transform::IDENTITY);
        let mut sink = Capture::default();

        ctx.begin(0.016);
        for _ in 0..3 {
            ctx.lines_mut().add_line(Vec3::ZERO, Vec3::ONE, Color::WHITE);
        }
        let stats = ctx.submit(&mut sink, 2.0);

        assert_eq!(stats.line_vertices, 2);
        assert_eq!(stats.dropped_lines, 2);
        assert!((stats.frame_time_ms - 2.0).abs() < f32::EPSILON);
    }
}
