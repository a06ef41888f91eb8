//! # World & Budget Constants
//!
//! Fixed conventions and default capacities.
//!
//! **NOTE:** Capacities here are defaults only. The frame loop reads the
//! real values from configuration at startup.

use glam::Vec3;

// =============================================================================
// WORLD CONVENTIONS
// =============================================================================

/// World origin.
pub const WORLD_ORIGIN: Vec3 = Vec3::ZERO;

/// World up axis. Basis stabilization derives "right" from this.
pub const WORLD_UP: Vec3 = Vec3::Y;

// =============================================================================
// FRAME BUDGETS
// =============================================================================

/// Default debug-line vertex budget (2048 segments).
pub const DEFAULT_LINE_VERT_CAPACITY: usize = 4096;

/// Default number of particle emitters.
pub const NUM_EMITTERS: usize = 3;

/// Default particle capacity per emitter.
pub const PARTICLES_PER_EMITTER: usize = 100;
