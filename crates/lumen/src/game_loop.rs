//! # LUMEN Frame Loop
//!
//! One frame, start to finish:
//! ```text
//! Frame N:
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. BEGIN FRAME                                                      │
//! │    └─ Clear the line buffer, reset the frame's stats                │
//! │                                                                     │
//! │ 2. GRID                                                             │
//! │    └─ 21 + 21 white lines over [-10, 10] on the XZ plane            │
//! │                                                                     │
//! │ 3. VIEW CAMERA                                                      │
//! │    ├─ Keyboard-style controller                                     │
//! │    └─ Mouse look (when held)                                        │
//! │                                                                     │
//! │ 4. DEMO                                                             │
//! │    └─ FrameUpdate::update appends its lines and stats               │
//! │                                                                     │
//! │ 5. SUBMIT                                                           │
//! │    └─ Hand the vertex slice and view to the LineSink (one draw)     │
//! │                                                                     │
//! │ 6. END FRAME                                                        │
//! │    └─ Record timing, report budget overruns                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs on the calling thread; the loop owns the line buffer,
//! the pools inside the demo, and the camera state.

use std::time::{Duration, Instant};

use glam::Vec3;
use lumen_rendering::debug::draw_grid;
use lumen_rendering::{
    look_at, mouse_look, FrameContext, LineSink, MatrixController, RenderFrame, RenderStats,
};
use lumen_shared::{Color, Transform, WORLD_ORIGIN};

use crate::config::LumenConfig;
use crate::demo::{build_demo, FrameInput, FrameUpdate};

/// Target frame time for 60 FPS.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_666);

/// Longest delta time a single frame may simulate, in seconds.
pub const MAX_DELTA_TIME: f32 = 0.1;

/// Half the side length of the ground grid.
pub const GRID_HALF_EXTENT: i32 = 10;

/// Where the view camera starts. It faces the world origin.
pub const VIEW_EYE: Vec3 = Vec3::new(0.0, 15.0, -15.0);

/// The view camera's starting transform.
#[must_use]
pub fn default_view() -> Transform {
    let mut view = Transform::from_translation(VIEW_EYE);
    look_at(&mut view, WORLD_ORIGIN);
    view
}

/// The frame loop orchestrator.
///
/// Owns the frame context, the selected demo and the view controller.
pub struct FrameLoop {
    /// Line buffer, view and per-frame stats.
    ctx: FrameContext,
    /// The selected demo.
    demo: Box<dyn FrameUpdate>,
    /// Drives the view camera.
    controller: MatrixController,
    /// Mouse-look sensitivity.
    mouse_sensitivity: f32,
    /// Frames slower than this are reported.
    max_frame_ms: f32,
    /// Accumulated frame statistics.
    stats_accumulator: FrameStatsAccumulator,
}

impl FrameLoop {
    /// Creates a loop running the demo selected in `config`.
    #[must_use]
    pub fn new(config: &LumenConfig) -> Self {
        Self::with_demo(config, build_demo(config))
    }

    /// Creates a loop running a caller-supplied demo.
    ///
    /// # Arguments
    ///
    /// * `config` - line capacity, camera tuning and frame budget
    /// * `demo` - the per-frame behavior
    #[must_use]
    pub fn with_demo(config: &LumenConfig, demo: Box<dyn FrameUpdate>) -> Self {
        Self {
            ctx: FrameContext::new(config.lines.capacity, default_view()),
            demo,
            controller: config.controller(),
            mouse_sensitivity: config.camera.mouse_sensitivity,
            max_frame_ms: config.frame.max_frame_ms,
            stats_accumulator: FrameStatsAccumulator::new(1000.0 / config.frame.target_fps),
        }
    }

    /// Runs one frame and submits it to `sink`.
    ///
    /// `delta_time` is clamped to [`MAX_DELTA_TIME`] so a stall never turns
    /// into one huge simulation step.
    pub fn run_frame(
        &mut self,
        delta_time: f32,
        input: &FrameInput,
        sink: &mut dyn LineSink,
    ) -> RenderStats {
        let started = Instant::now();
        let dt = delta_time.clamp(0.0, MAX_DELTA_TIME);

        self.ctx.begin(dt);
        draw_grid(self.ctx.lines_mut(), GRID_HALF_EXTENT, Color::WHITE);

        self.controller.apply(self.ctx.view_mut(), &input.camera, dt);
        if input.mouse_look {
            mouse_look(
                self.ctx.view_mut(),
                input.mouse_delta,
                self.mouse_sensitivity,
                dt,
            );
        }

        self.demo.update(&mut self.ctx, input);

        let frame_ms = started.elapsed().as_secs_f32() * 1000.0;
        let stats = self.ctx.submit(sink, frame_ms);
        self.end_frame(&stats);
        stats
    }

    /// Runs up to `frames` frames, one per item of `inputs`.
    ///
    /// Stops early if `inputs` runs dry.
    pub fn run<I>(
        &mut self,
        frames: u64,
        delta_time: f32,
        inputs: I,
        sink: &mut dyn LineSink,
    ) -> &FrameStatsAccumulator
    where
        I: IntoIterator<Item = FrameInput>,
    {
        for (_, input) in (0..frames).zip(inputs) {
            self.run_frame(delta_time, &input, sink);
        }
        self.stats_accumulator.log_summary(self.demo.name());
        &self.stats_accumulator
    }

    fn end_frame(&mut self, stats: &RenderStats) {
        self.stats_accumulator.record(stats);

        if stats.frame_time_ms > self.max_frame_ms {
            tracing::warn!(
                frame = self.ctx.frame_number(),
                frame_ms = stats.frame_time_ms,
                budget_ms = self.max_frame_ms,
                "frame exceeded budget"
            );
        }
    }

    /// Frames run so far.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.ctx.frame_number()
    }

    /// The frame context as the last frame left it.
    #[must_use]
    pub const fn context(&self) -> &FrameContext {
        &self.ctx
    }

    /// Name of the running demo.
    #[must_use]
    pub fn demo_name(&self) -> &'static str {
        self.demo.name()
    }

    /// Returns the accumulated statistics.
    #[must_use]
    pub const fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats_accumulator
    }
}

/// Accumulator for frame statistics.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Frame time above which a frame counts as over budget.
    pub budget_ms: f32,
    /// Total frames recorded.
    pub frames_recorded: u64,
    /// Sum of frame times.
    pub total_ms_sum: f64,
    /// Min frame time.
    pub min_frame_ms: f32,
    /// Max frame time.
    pub max_frame_ms: f32,
    /// Frames that exceeded budget.
    pub frames_over_budget: u64,
    /// Most line vertices submitted in one frame.
    pub peak_line_vertices: u32,
    /// Lines dropped over the whole run.
    pub dropped_lines: u64,
    /// Frames that dropped at least one line.
    pub frames_with_drops: u64,
    /// Most particles alive in one frame.
    pub peak_particles: u32,
    /// Visible boxes in the last frame.
    pub last_boxes_visible: u32,
    /// Culled boxes in the last frame.
    pub last_boxes_culled: u32,
}

impl FrameStatsAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new(budget_ms: f32) -> Self {
        Self {
            budget_ms,
            frames_recorded: 0,
            total_ms_sum: 0.0,
            min_frame_ms: f32::MAX,
            max_frame_ms: 0.0,
            frames_over_budget: 0,
            peak_line_vertices: 0,
            dropped_lines: 0,
            frames_with_drops: 0,
            peak_particles: 0,
            last_boxes_visible: 0,
            last_boxes_culled: 0,
        }
    }

    /// Records a frame's statistics.
    pub fn record(&mut self, stats: &RenderStats) {
        self.frames_recorded += 1;
        self.total_ms_sum += f64::from(stats.frame_time_ms);
        self.min_frame_ms = self.min_frame_ms.min(stats.frame_time_ms);
        self.max_frame_ms = self.max_frame_ms.max(stats.frame_time_ms);

        if stats.frame_time_ms > self.budget_ms {
            self.frames_over_budget += 1;
        }

        self.peak_line_vertices = self.peak_line_vertices.max(stats.line_vertices);
        self.dropped_lines += u64::from(stats.dropped_lines);
        if stats.dropped_lines > 0 {
            self.frames_with_drops += 1;
        }
        self.peak_particles = self.peak_particles.max(stats.particles_alive);
        self.last_boxes_visible = stats.boxes_visible;
        self.last_boxes_culled = stats.boxes_culled;
    }

    /// Returns average frame time in milliseconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.total_ms_sum / self.frames_recorded as f64
    }

    /// Returns average FPS.
    #[must_use]
    pub fn avg_fps(&self) -> f64 {
        let avg_ms = self.avg_frame_ms();
        if avg_ms <= 0.0 {
            return 0.0;
        }
        1000.0 / avg_ms
    }

    /// Returns the fraction of frames over budget.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.frames_over_budget as f64 / self.frames_recorded as f64
    }

    /// Emits the summary as one structured log event.
    pub fn log_summary(&self, demo: &str) {
        tracing::info!(
            demo,
            frames = self.frames_recorded,
            avg_frame_ms = self.avg_frame_ms(),
            over_budget = self.frames_over_budget,
            peak_line_vertices = self.peak_line_vertices,
            dropped_lines = self.dropped_lines,
            peak_particles = self.peak_particles,
            "frame loop finished"
        );
    }

    /// Prints a summary of the statistics.
    pub fn print_summary(&self) {
        let min_ms = if self.frames_recorded == 0 { 0.0 } else { self.min_frame_ms };

        println!("╔══════════════════════════════════════════════════════════════════╗");
        println!("║                    FRAME STATISTICS SUMMARY                      ║");
        println!("╚══════════════════════════════════════════════════════════════════╝");
        println!();
        println!("┌─ TIMING ───────────────────────────────────────────────────────┐");
        println!("│ Frames Recorded:    {}", self.frames_recorded);
        println!(
            "│ Average Frame:      {:.3} ms ({:.1} FPS)",
            self.avg_frame_ms(),
            self.avg_fps()
        );
        println!("│ Min Frame:          {min_ms:.3} ms");
        println!("│ Max Frame:          {:.3} ms", self.max_frame_ms);
        println!("└──────────────────────────────────────────────────────────────────┘");
        println!();
        println!("┌─ BUDGET ───────────────────────────────────────────────────────┐");
        println!("│ Target:             {:.3} ms", self.budget_ms);
        println!(
            "│ Over Budget:        {} frames ({:.1}%)",
            self.frames_over_budget,
            self.over_budget_ratio() * 100.0
        );
        println!("└──────────────────────────────────────────────────────────────────┘");
        println!();
        println!("┌─ GEOMETRY ─────────────────────────────────────────────────────┐");
        println!("│ Peak Line Verts:    {}", self.peak_line_vertices);
        println!(
            "│ Dropped Lines:      {} ({} frames)",
            self.dropped_lines, self.frames_with_drops
        );
        println!("│ Peak Particles:     {}", self.peak_particles);
        println!(
            "│ Boxes (last):       {} visible, {} culled",
            self.last_boxes_visible, self.last_boxes_culled
        );
        println!("└──────────────────────────────────────────────────────────────────┘");
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        #[allow(clippy::cast_precision_loss)]
        let budget_ms = TARGET_FRAME_TIME.as_micros() as f32 / 1000.0;
        Self::new(budget_ms)
    }
}

/// A [`LineSink`] that uploads nowhere and counts what it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessSink {
    /// Frames submitted.
    pub submissions: u64,
    /// Frames that carried at least one line.
    pub uploads: u64,
    /// Vertices across all uploads.
    pub vertices_uploaded: u64,
    /// Vertex bytes across all uploads.
    pub bytes_uploaded: u64,
    /// Frame number of the last submission.
    pub last_frame: u64,
    /// Vertex count of the last submission.
    pub last_vertex_count: usize,
}

impl LineSink for HeadlessSink {
    fn submit(&mut self, frame: &RenderFrame<'_>) {
        self.submissions += 1;
        self.last_frame = frame.frame_number;
        self.last_vertex_count = frame.vertex_count();

        if frame.has_content() {
            self.uploads += 1;
            self.vertices_uploaded += frame.vertex_count() as u64;
            self.bytes_uploaded += (frame.vertex_bytes().len() + frame.view_bytes().len()) as u64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoMode;

    /// Draws nothing.
    struct Idle;

    impl FrameUpdate for Idle {
        fn name(&self) -> &'static str {
            "idle"
        }

        fn update(&mut self, _ctx: &mut FrameContext, _input: &FrameInput) {}
    }

    #[test]
    fn test_frame_loop_creation() {
        let frame_loop = FrameLoop::new(&LumenConfig::default());
        assert_eq!(frame_loop.frame_count(), 0);
        assert_eq!(frame_loop.demo_name(), "frustum");
    }

    #[test]
    fn test_default_view_faces_origin() {
        let view = default_view();
        let expected = (WORLD_ORIGIN - VIEW_EYE).normalize();
        assert!((view.forward() - expected).length() < 1e-5);
        assert!(view.right().y.abs() < 1e-6);
    }

    #[test]
    fn test_grid_only_frame() {
        let config = LumenConfig::default();
        let mut frame_loop = FrameLoop::with_demo(&config, Box::new(Idle));
        let mut sink = HeadlessSink::default();

        let stats = frame_loop.run_frame(1.0 / 60.0, &FrameInput::default(), &mut sink);

        assert_eq!(stats.line_vertices, 84);
        assert_eq!(stats.dropped_lines, 0);
        assert_eq!(sink.uploads, 1);
        assert_eq!(sink.last_frame, 1);
        assert_eq!(sink.bytes_uploaded, 84 * 32 + 64);
    }

    #[test]
    fn test_delta_time_is_clamped() {
        let mut frame_loop = FrameLoop::new(&LumenConfig::default());
        let mut sink = HeadlessSink::default();
        frame_loop.run_frame(5.0, &FrameInput::default(), &mut sink);
        assert!((frame_loop.context().delta_time() - MAX_DELTA_TIME).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tiny_line_budget_drops_but_keeps_running() {
        let mut config = LumenConfig::default();
        config.lines.capacity = 40;
        config.demo.mode = DemoMode::Frustum;
        let mut frame_loop = FrameLoop::new(&config);
        let mut sink = HeadlessSink::default();

        let stats = frame_loop.run(3, 1.0 / 60.0, std::iter::repeat(FrameInput::default()), &mut sink);

        assert_eq!(stats.frames_recorded, 3);
        assert_eq!(stats.peak_line_vertices, 40);
        assert!(stats.dropped_lines > 0);
        assert_eq!(stats.frames_with_drops, 3);
        assert_eq!(sink.submissions, 3);
    }

    #[test]
    fn test_accumulator_budget() {
        let mut acc = FrameStatsAccumulator::new(10.0);
        for ms in [5.0, 15.0, 5.0, 15.0] {
            acc.record(&RenderStats {
                frame_time_ms: ms,
                ..RenderStats::default()
            });
        }
        assert_eq!(acc.frames_over_budget, 2);
        assert!((acc.over_budget_ratio() - 0.5).abs() < 1e-9);
        assert!((acc.avg_frame_ms() - 10.0).abs() < 1e-9);
        assert!((acc.avg_fps() - 100.0).abs() < 1e-6);
    }
}
