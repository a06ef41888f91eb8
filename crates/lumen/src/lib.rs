//! # LUMEN
//!
//! The top-level crate: configuration, demo selection and the frame loop.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                               LUMEN                                     │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐   │
//! │  │  lumen_core     │     │ lumen_rendering │     │  lumen          │   │
//! │  │                 │────>│                 │<────│                 │   │
//! │  │  • FreeListPool │     │  • DebugLines   │     │  • LumenConfig  │   │
//! │  │  • SortedPool   │     │  • Frustum/Aabb │     │  • Demo modes   │   │
//! │  │                 │     │  • Camera math  │     │  • FrameLoop    │   │
//! │  │                 │     │  • Particles    │     │  • Headless bin │   │
//! │  └─────────────────┘     └────────┬────────┘     └─────────────────┘   │
//! │                                   │                                     │
//! │                          ┌────────┴────────┐                            │
//! │                          │  lumen_shared   │                            │
//! │                          │  • Transform    │                            │
//! │                          │  • Color        │                            │
//! │                          └─────────────────┘                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: TOML configuration and validation
//! - `demo`: the closed set of demo modes behind [`FrameUpdate`]
//! - `error`: setup errors
//! - `game_loop`: frame orchestration and timing
//! - `script`: deterministic input for headless runs

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod demo;
pub mod error;
pub mod game_loop;
pub mod script;

pub use lumen_core as core;
pub use lumen_rendering as rendering;
pub use lumen_shared as shared;

pub use config::LumenConfig;
pub use demo::{build_demo, DemoMode, FrameInput, FrameUpdate};
pub use error::{LumenError, LumenResult};
pub use game_loop::{FrameLoop, FrameStatsAccumulator, HeadlessSink};
pub use script::ScriptedInput;
