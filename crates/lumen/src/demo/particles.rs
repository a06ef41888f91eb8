//! Emitter demo over a shared particle pool.

use glam::Vec3;
use lumen_rendering::{FrameContext, ParticleConfig, ParticleSystem};
use lumen_shared::{Color, WORLD_ORIGIN};

use super::{FrameInput, FrameUpdate};

/// Distance between neighboring emitters along X.
const EMITTER_SPACING: f32 = 10.0;

/// Emitter placement: the first at the origin, the rest alternating right
/// and left along X. Colors cycle red, green, blue.
#[must_use]
pub fn emitter_layout(count: usize) -> Vec<(Vec3, Color)> {
    const PALETTE: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let ring = i.div_ceil(2) as f32;
            let side = if i % 2 == 1 { 1.0 } else { -1.0 };
            let origin = WORLD_ORIGIN + Vec3::X * (ring * side * EMITTER_SPACING);
            (origin, PALETTE[i % PALETTE.len()])
        })
        .collect()
}

/// Runs a [`ParticleSystem`] and reports its live count.
pub struct ParticleDemo {
    system: ParticleSystem,
}

impl ParticleDemo {
    /// Creates `emitters` emitters laid out by [`emitter_layout`].
    #[must_use]
    pub fn new(config: ParticleConfig, emitters: usize) -> Self {
        Self {
            system: ParticleSystem::new(config, &emitter_layout(emitters)),
        }
    }

    /// The underlying system.
    #[must_use]
    pub const fn system(&self) -> &ParticleSystem {
        &self.system
    }
}

impl FrameUpdate for ParticleDemo {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn update(&mut self, ctx: &mut FrameContext, _input: &FrameInput) {
        let dt = ctx.delta_time();
        let stats = self.system.step(dt, ctx.lines_mut());
        ctx.stats_mut().particles_alive = stats.alive_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_shared::Transform;

    #[test]
    fn test_layout_matches_three_emitter_scene() {
        let layout = emitter_layout(3);
        assert_eq!(layout[0], (Vec3::ZERO, Color::RED));
        assert_eq!(layout[1], (Vec3::new(10.0, 0.0, 0.0), Color::GREEN));
        assert_eq!(layout[2], (Vec3::new(-10.0, 0.0, 0.0), Color::BLUE));
    }

    #[test]
    fn test_demo_reports_alive_particles() {
        let mut demo = ParticleDemo::new(ParticleConfig::default(), 3);
        let mut ctx = FrameContext::new(4096, Transform::IDENTITY);

        for _ in 0..10 {
            ctx.begin(1.0 / 60.0);
            demo.update(&mut ctx, &FrameInput::default());
        }

        assert_eq!(ctx.stats().particles_alive, 30);
        assert_eq!(demo.system().alive_count(), 30);
        assert_eq!(ctx.lines().line_count(), 30);
    }
}
