//! # Memory Management
//!
//! Pre-allocated pools for zero-allocation frames.
//!
//! ## Design Philosophy
//!
//! All memory is allocated once at startup. During a frame:
//! - No heap allocations
//! - No growth, ever; running out of slots is reported, not fixed
//! - Slot indices are the only handle type
//!
//! Two strategies are provided:
//! - [`FreeListPool`]: indices stay stable until freed
//! - [`SortedPool`]: live values stay packed, a free may relocate another value

mod pool;
mod sorted_pool;

pub use pool::FreeListPool;
pub use sorted_pool::SortedPool;
