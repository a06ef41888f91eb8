//! # LUMEN Core
//!
//! Fixed-capacity object pools designed for:
//! - O(1) allocate and free
//! - Zero heap traffic after construction
//! - Flat, predictable frame times
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocations in hot path** - All memory is pre-allocated
//! 2. **No resizing** - Capacity is fixed at construction
//! 3. **Silent exhaustion** - A full pool answers `None`, never panics
//!
//! ## Example
//!
//! ```rust
//! use lumen_core::{FreeListPool, SortedPool};
//!
//! let mut particles: FreeListPool<f32> = FreeListPool::new(300);
//! let mut owned: SortedPool<usize> = SortedPool::new(100);
//!
//! if let Some(slot) = particles.insert(0.0) {
//!     owned.push(slot);
//! }
//! assert_eq!(owned.size(), 1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod memory;

pub use memory::{FreeListPool, SortedPool};
