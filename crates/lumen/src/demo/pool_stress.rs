//! Pool churn demos.
//!
//! Both demos spawn one test particle per frame, drift every live particle a
//! little, draw its trail and free it once it is [`STRESS_LIFETIME`] seconds
//! old. Run long enough, the pools settle at a steady live count; make the
//! frames short enough and they saturate at [`STRESS_CAPACITY`] and keep
//! running.

use glam::Vec3;
use lumen_core::{FreeListPool, SortedPool};
use lumen_rendering::{DebugLines, FrameContext, Particle};
use lumen_shared::Color;

use super::{FrameInput, FrameUpdate};

/// Capacity of each stress pool.
pub const STRESS_CAPACITY: usize = 100;

/// Seconds a test particle lives.
pub const STRESS_LIFETIME: f32 = 2.0;

/// Per-update displacement of the particle at `index`.
#[inline]
fn drift(index: usize, dt: f32) -> Vec3 {
    #[allow(clippy::cast_precision_loss)]
    let i = index as f32;
    Vec3::new(dt.sin() * i.sin(), 0.001 * i, (i * 0.01).sin())
}

#[inline]
fn test_particle(base: Vec3, color: Color) -> Particle {
    Particle {
        position: base + Vec3::Y,
        prev_position: base,
        velocity: Vec3::ZERO,
        color,
        age: 0.0,
    }
}

/// Ages `p`, returning false once it has expired; otherwise drifts it and
/// draws its trail.
#[inline]
fn advance(p: &mut Particle, index: usize, dt: f32, lines: &mut DebugLines) -> bool {
    p.age += dt;
    if p.age >= STRESS_LIFETIME {
        return false;
    }
    p.prev_position = p.position;
    p.position += drift(index, dt);
    lines.add_line(p.prev_position, p.position, p.color);
    true
}

/// Churn on a [`FreeListPool`]. Slots never move; updates walk every slot
/// and skip the free ones.
pub struct FreePoolStress {
    pool: FreeListPool<Particle>,
}

impl FreePoolStress {
    /// Spawn point. Particles start one unit above it.
    pub const BASE: Vec3 = Vec3::new(-10.0, 0.0, -10.0);

    /// Creates an empty stress pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool: FreeListPool::new(STRESS_CAPACITY),
        }
    }

    /// Live test particles.
    #[must_use]
    pub const fn live_count(&self) -> usize {
        self.pool.live_count()
    }
}

impl Default for FreePoolStress {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameUpdate for FreePoolStress {
    fn name(&self) -> &'static str {
        "free_pool_stress"
    }

    fn update(&mut self, ctx: &mut FrameContext, _input: &FrameInput) {
        let dt = ctx.delta_time();
        // A full pool skips this frame's spawn.
        let _ = self.pool.insert(test_particle(Self::BASE, Color::RED));

        let lines = ctx.lines_mut();
        for slot in 0..self.pool.capacity() {
            let Some(p) = self.pool.get_mut(slot) else {
                continue;
            };
            if !advance(p, slot, dt, lines) {
                self.pool.free(slot);
            }
        }

        ctx.stats_mut().particles_alive = u32::try_from(self.live_count()).unwrap_or(u32::MAX);
    }
}

/// Churn on a [`SortedPool`]. Live particles stay dense; freeing one moves
/// the last live particle into its place, which is then updated in the same
/// pass.
pub struct SortedPoolStress {
    pool: SortedPool<Particle>,
}

impl SortedPoolStress {
    /// Spawn point. Particles start one unit above it.
    pub const BASE: Vec3 = Vec3::new(10.0, 0.0, -10.0);

    /// Creates an empty stress pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool: SortedPool::new(STRESS_CAPACITY),
        }
    }

    /// Live test particles.
    #[must_use]
    pub const fn live_count(&self) -> usize {
        self.pool.size()
    }
}

impl Default for SortedPoolStress {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameUpdate for SortedPoolStress {
    fn name(&self) -> &'static str {
        "sorted_pool_stress"
    }

    fn update(&mut self, ctx: &mut FrameContext, _input: &FrameInput) {
        let dt = ctx.delta_time();
        let _ = self.pool.push(test_particle(Self::BASE, Color::BLUE));

        let lines = ctx.lines_mut();
        let mut i = 0;
        while i < self.pool.size() {
            if advance(&mut self.pool[i], i, dt, lines) {
                i += 1;
            } else {
                // The last live particle now sits at `i`; visit it next.
                self.pool.free(i);
            }
        }

        ctx.stats_mut().particles_alive = u32::try_from(self.live_count()).unwrap_or(u32::MAX);
    }
}
