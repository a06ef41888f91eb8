//! Frame pipeline.
//!
//! A [`FrameContext`] collects one frame of debug geometry; a [`LineSink`]
//! takes it from there. Device, swapchain and shaders live behind the sink.

mod frame;
mod stats;

pub use frame::{FrameContext, RenderFrame};
pub use stats::RenderStats;

/// Consumer of finished frames: the boundary to the GPU layer.
///
/// Implementations upload `frame.vertices` as a line list and draw it with
/// `frame.view` as the camera.
pub trait LineSink {
    /// Receives one finished frame. Called exactly once per frame.
    fn submit(&mut self, frame: &RenderFrame<'_>);
}
