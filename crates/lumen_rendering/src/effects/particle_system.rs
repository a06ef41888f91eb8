//! CPU Particle System
//!
//! Emitters share one particle pool:
//! 1. The shared [`FreeListPool`] owns every particle. Slot indices are stable.
//! 2. Each [`Emitter`] records the slots it owns in its own [`SortedPool`],
//!    so walking an emitter's particles is a dense slice walk.
//! 3. Each particle draws a trail segment from its previous to its current
//!    position into the frame's [`DebugLines`].
//!
//! Zero heap allocations per frame. Pools are sized once at construction.

use std::f32::consts::TAU;

use glam::Vec3;
use lumen_core::{FreeListPool, SortedPool};
use lumen_shared::{Color, NUM_EMITTERS, PARTICLES_PER_EMITTER};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::debug::DebugLines;

/// A single particle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    /// Current position.
    pub position: Vec3,
    /// Position one update ago; the trail segment starts here.
    pub prev_position: Vec3,
    /// Velocity in units per second.
    pub velocity: Vec3,
    /// Trail color.
    pub color: Color,
    /// Seconds since spawn.
    pub age: f32,
}

impl Particle {
    /// A fresh particle at `origin`.
    #[must_use]
    pub fn launch(origin: Vec3, velocity: Vec3, color: Color) -> Self {
        Self {
            position: origin,
            prev_position: origin,
            velocity,
            color,
            age: 0.0,
        }
    }
}

/// Configuration for particle spawning and motion
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    /// Capacity of the shared particle pool
    pub pool_capacity: usize,
    /// Capacity of each emitter's index pool
    pub per_emitter: usize,
    /// Particles each emitter tries to spawn per frame
    pub spawn_per_frame: usize,
    /// Lifetime in seconds
    pub lifetime: f32,
    /// Vertical acceleration (negative = down)
    pub gravity: f32,
    /// Minimum initial upward speed
    pub speed_min: f32,
    /// Maximum initial upward speed
    pub speed_max: f32,
    /// Maximum initial horizontal speed
    pub spread: f32,
    /// RNG seed for initial velocities
    pub seed: u64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            pool_capacity: NUM_EMITTERS * PARTICLES_PER_EMITTER,
            per_emitter: PARTICLES_PER_EMITTER,
            spawn_per_frame: 1,
            lifetime: 1.0,
            gravity: -9.8,
            speed_min: 4.0,
            speed_max: 6.0,
            spread: 1.5,
            seed: 0x4C55_4D45_4E00_0001,
        }
    }
}

/// A particle source.
///
/// Owns a subset of the shared pool's slots through its index pool; it never
/// owns particles directly.
#[derive(Debug, Clone)]
pub struct Emitter {
    /// World position new particles start from
    pub origin: Vec3,
    /// Color given to new particles
    pub color: Color,
    /// Slots of the shared pool owned by this emitter
    indices: SortedPool<usize>,
}

impl Emitter {
    /// Creates an emitter that can own up to `capacity` particles.
    #[must_use]
    pub fn new(origin: Vec3, color: Color, capacity: usize) -> Self {
        Self {
            origin,
            color,
            indices: SortedPool::new(capacity),
        }
    }

    /// Number of particles this emitter owns
    #[must_use]
    pub const fn live_count(&self) -> usize {
        self.indices.size()
    }

    /// Shared-pool slots owned by this emitter
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        self.indices.as_slice()
    }
}

/// Statistics from the particle system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticleStats {
    /// Capacity of the shared pool
    pub pool_capacity: u32,
    /// Currently alive particles
    pub alive_count: u32,
    /// Particles spawned this frame
    pub spawned_this_frame: u32,
    /// Particles died this frame
    pub died_this_frame: u32,
    /// Emitters with at least one particle
    pub active_emitters: u32,
    /// Frames on which the shared pool ran out
    pub exhausted_frames: u32,
}

/// Emitters plus the particle pool they share
pub struct ParticleSystem {
    /// Every particle, owned by slot
    particles: FreeListPool<Particle>,
    /// Emitters, fixed at construction
    emitters: Vec<Emitter>,
    /// Spawn and motion parameters
    config: ParticleConfig,
    /// Initial velocity source
    rng: ChaCha8Rng,
    /// Current statistics
    stats: ParticleStats,
}

impl ParticleSystem {
    /// Creates a system with one emitter per `(origin, color)` pair.
    ///
    /// # Panics
    ///
    /// Panics if `config.pool_capacity` or `config.per_emitter` is zero.
    #[must_use]
    pub fn new(config: ParticleConfig, emitters: &[(Vec3, Color)]) -> Self {
        let emitters = emitters
            .iter()
            .map(|&(origin, color)| Emitter::new(origin, color, config.per_emitter))
            .collect();

        Self {
            particles: FreeListPool::new(config.pool_capacity),
            emitters,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            stats: ParticleStats {
                pool_capacity: u32::try_from(config.pool_capacity).unwrap_or(u32::MAX),
                ..ParticleStats::default()
            },
            config,
        }
    }

    /// Runs one frame: spawn, then update.
    ///
    /// Call this once per frame after the line buffer was cleared.
    pub fn step(&mut self, dt: f32, lines: &mut DebugLines) -> ParticleStats {
        self.stats.spawned_this_frame = 0;
        self.stats.died_this_frame = 0;
        self.spawn();
        self.update(dt, lines);
        self.stats
    }

    /// Spawns up to `spawn_per_frame` particles per emitter.
    ///
    /// Each spawn takes a particle slot, then an index slot in the emitter.
    /// If the emitter is full the particle slot is handed back and the next
    /// emitter is tried. If the shared pool is exhausted spawning stops until
    /// the next call.
    ///
    /// # Returns
    ///
    /// Number of particles spawned.
    pub fn spawn(&mut self) -> u32 {
        let mut spawned = 0;

        'emitters: for emitter in &mut self.emitters {
            for _ in 0..self.config.spawn_per_frame {
                let velocity = launch_velocity(&mut self.rng, &self.config);
                let particle = Particle::launch(emitter.origin, velocity, emitter.color);

                let Some(slot) = self.particles.insert(particle) else {
                    tracing::debug!(
                        capacity = self.particles.capacity(),
                        "particle pool exhausted; spawning stops for this frame"
                    );
                    self.stats.exhausted_frames += 1;
                    break 'emitters;
                };

                if emitter.indices.push(slot).is_none() {
                    self.particles.free(slot);
                    continue 'emitters;
                }
                spawned += 1;
            }
        }

        self.stats.spawned_this_frame += spawned;
        self.refresh_counts();
        spawned
    }

    /// Ages and moves every particle, kills the expired ones, and appends one
    /// trail segment per survivor.
    ///
    /// A particle is killed on the first update after its age exceeds the
    /// lifetime. Killing swaps the emitter's last index into the current
    /// position, so that position is visited again before moving on.
    ///
    /// # Returns
    ///
    /// Number of particles killed.
    pub fn update(&mut self, dt: f32, lines: &mut DebugLines) -> u32 {
        let lifetime = self.config.lifetime;
        let gravity = self.config.gravity;
        let mut died = 0;

        for emitter in &mut self.emitters {
            let mut i = 0;
            while i < emitter.indices.size() {
                let slot = emitter.indices[i];
                let Some(p) = self.particles.get_mut(slot) else {
                    // Slot no longer live; forget it.
                    emitter.indices.free(i);
                    continue;
                };

                if p.age > lifetime {
                    self.particles.free(slot);
                    emitter.indices.free(i);
                    died += 1;
                    continue;
                }

                p.prev_position = p.position;
                p.velocity.y += gravity * dt;
                p.position += p.velocity * dt;
                p.age += dt;

                let fade = 1.0 - (p.age / lifetime).clamp(0.0, 1.0);
                lines.add_line(p.prev_position, p.position, p.color.with_alpha(fade));
                i += 1;
            }
        }

        self.stats.died_this_frame += died;
        self.refresh_counts();
        died
    }

    /// Kills the particle at position `index` of an emitter's index pool.
    ///
    /// Returns false if either index is out of range.
    pub fn kill(&mut self, emitter: usize, index: usize) -> bool {
        let Some(e) = self.emitters.get_mut(emitter) else {
            return false;
        };
        let Some(&slot) = e.indices.get(index) else {
            return false;
        };
        self.particles.free(slot);
        e.indices.free(index);
        self.refresh_counts();
        true
    }

    /// Returns every slot owned by one emitter to the shared pool.
    pub fn clear_emitter(&mut self, emitter: usize) {
        let Some(e) = self.emitters.get_mut(emitter) else {
            return;
        };
        while let Some(&slot) = e.indices.as_slice().last() {
            self.particles.free(slot);
            e.indices.free(e.indices.size() - 1);
        }
        self.refresh_counts();
    }

    /// Clears every emitter.
    pub fn clear(&mut self) {
        for index in 0..self.emitters.len() {
            self.clear_emitter(index);
        }
    }

    /// The emitters.
    #[must_use]
    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    /// A live particle by shared-pool slot.
    #[must_use]
    pub fn particle(&self, slot: usize) -> Option<&Particle> {
        self.particles.get(slot)
    }

    /// Number of live particles in the shared pool.
    #[must_use]
    pub const fn alive_count(&self) -> usize {
        self.particles.live_count()
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Returns current statistics
    #[must_use]
    pub const fn stats(&self) -> ParticleStats {
        self.stats
    }

    fn refresh_counts(&mut self) {
        self.stats.alive_count = u32::try_from(self.particles.live_count()).unwrap_or(u32::MAX);
        let active = self.emitters.iter().filter(|e| !e.indices.is_empty()).count();
        self.stats.active_emitters = u32::try_from(active).unwrap_or(u32::MAX);
    }
}

impl std::fmt::Debug for ParticleSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSystem")
            .field("emitters", &self.emitters.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Upward fountain velocity with a random horizontal component.
fn launch_velocity(rng: &mut ChaCha8Rng, config: &ParticleConfig) -> Vec3 {
    let angle = rng.gen::<f32>() * TAU;
    let radial = rng.gen::<f32>() * config.spread;
    let lift = config.speed_min + rng.gen::<f32>() * (config.speed_max - config.speed_min);
    Vec3::new(angle.cos() * radial, lift, angle.sin() * radial)
}
