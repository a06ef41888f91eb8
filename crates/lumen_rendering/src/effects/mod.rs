//! # Visual Effects
//!
//! CPU particles rendered as debug-line trails.
//!
//! - `ParticleSystem` - shared particle pool plus emitters
//! - `Emitter` - origin, color, and the pool slots it owns

mod particle_system;

pub use particle_system::{Emitter, Particle, ParticleConfig, ParticleStats, ParticleSystem};
