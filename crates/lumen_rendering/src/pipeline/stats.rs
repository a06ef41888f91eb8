//! Rendering statistics.

/// Statistics from a render frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderStats {
    /// Line vertices submitted.
    pub line_vertices: u32,
    /// Vertex capacity of the line buffer.
    pub line_capacity: u32,
    /// Lines dropped because the buffer was full.
    pub dropped_lines: u32,
    /// Boxes that passed the frustum test.
    pub boxes_visible: u32,
    /// Boxes rejected by the frustum test.
    pub boxes_culled: u32,
    /// Live particles after the update.
    pub particles_alive: u32,
    /// CPU time spent producing the frame, in milliseconds.
    pub frame_time_ms: f32,
}

impl RenderStats {
    /// Returns FPS calculated from frame time.
    #[must_use]
    pub fn fps(&self) -> f32 {
        if self.frame_time_ms > 0.0 {
            1000.0 / self.frame_time_ms
        } else {
            0.0
        }
    }

    /// Returns true if the frame fits a `target_fps` budget.
    #[must_use]
    pub fn meets_target(&self, target_fps: f32) -> bool {
        target_fps <= 0.0 || self.frame_time_ms <= 1000.0 / target_fps
    }

    /// Fraction of the line buffer in use, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn line_budget_used(&self) -> f32 {
        if self.line_capacity == 0 {
            0.0
        } else {
            self.line_vertices as f32 / self.line_capacity as f32
        }
    }
}
