//! # LUMEN Rendering
//!
//! CPU side of a debug-line renderer designed for:
//! - One line-list draw call per frame
//! - A fixed vertex budget, decided at startup
//! - Deterministic, allocation-free frame updates
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      ONE FRAME                           │
//! ├──────────────────────────────────────────────────────────┤
//! │  FrameContext::begin → clear DebugLines                  │
//! │       ↓                                                  │
//! │  camera controllers → Frustum::build → cull Aabbs        │
//! │       ↓                                                  │
//! │  ParticleSystem::step → trail lines                      │
//! │       ↓                                                  │
//! │  FrameContext::submit → LineSink (GPU layer)             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mandate
//!
//! - No allocations in the frame path
//! - A full line buffer drops lines, it never grows
//! - The GPU device lives behind [`LineSink`]

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod camera;
pub mod culling;
pub mod debug;
pub mod effects;
pub mod pipeline;

pub use camera::{look_at, mouse_look, stabilize, turn_to, ControllerInput, MatrixController};
pub use culling::{
    build_frustum, Aabb, Classification, CullStats, Frustum, FrustumCuller, FrustumParams, Plane,
};
pub use debug::{DebugLines, LineVertex};
pub use effects::{Emitter, Particle, ParticleConfig, ParticleStats, ParticleSystem};
pub use pipeline::{FrameContext, LineSink, RenderFrame, RenderStats};
