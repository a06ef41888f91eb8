//! # LUMEN Shared
//!
//! Common types used by the pools, the culling and camera code, and the
//! frame loop.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on a graphics API. Transforms come in as
//! plain matrices and line vertices go out as plain data.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod constants;
pub mod math;

pub use color::Color;
pub use constants::{
    DEFAULT_LINE_VERT_CAPACITY, NUM_EMITTERS, PARTICLES_PER_EMITTER, WORLD_ORIGIN, WORLD_UP,
};
pub use math::Transform;
