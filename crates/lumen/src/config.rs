//! # LUMEN Configuration
//!
//! Everything tunable about a run lives in one TOML file, read once before
//! the first frame. Every section and every field is optional:
//!
//! ```toml
//! [frame]
//! frames = 600
//! delta_time = 0.016666668
//!
//! [lines]
//! capacity = 4096
//!
//! [demo]
//! mode = "frustum"
//!
//! [frustum]
//! fov_degrees = 60.0
//! near = 1.0
//! far = 10.0
//! ```
//!
//! Values are checked by [`LumenConfig::validate`] after parsing, so a file
//! that parses is not yet a file the renderer accepts.

use std::path::Path;

use lumen_rendering::{FrustumParams, MatrixController, ParticleConfig};
use lumen_shared::{DEFAULT_LINE_VERT_CAPACITY, NUM_EMITTERS, PARTICLES_PER_EMITTER};
use serde::Deserialize;

use crate::demo::DemoMode;
use crate::error::{LumenError, LumenResult};

/// Largest accepted line buffer, in vertices.
pub const MAX_LINE_VERTS: usize = 1 << 20;

/// Largest accepted shared particle pool.
pub const MAX_PARTICLES: usize = 1 << 20;

/// Largest accepted number of demo boxes.
pub const MAX_BOXES: usize = 4096;

/// Frame pacing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameSection {
    /// Frames the headless driver runs.
    pub frames: u64,
    /// Fixed delta time fed to every frame, in seconds.
    pub delta_time: f32,
    /// Frame rate the budget is derived from.
    pub target_fps: f32,
    /// Frame time in milliseconds above which a frame is reported.
    pub max_frame_ms: f32,
}

impl Default for FrameSection {
    fn default() -> Self {
        Self {
            frames: 600,
            delta_time: 1.0 / 60.0,
            target_fps: 60.0,
            max_frame_ms: 33.0,
        }
    }
}

/// Debug line buffer sizing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinesSection {
    /// Vertex capacity. Two vertices per line.
    pub capacity: usize,
}

impl Default for LinesSection {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_LINE_VERT_CAPACITY,
        }
    }
}

/// Demo selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoSection {
    /// Which demo runs each frame.
    pub mode: DemoMode,
}

/// Frustum shape, shared by the frustum demo and its culler.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrustumSection {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Viewport width in pixels.
    pub view_width: f32,
    /// Viewport height in pixels.
    pub view_height: f32,
    /// Near plane distance.
    pub near: f32,
    /// Far plane distance.
    pub far: f32,
}

impl Default for FrustumSection {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            view_width: 1280.0,
            view_height: 720.0,
            near: 1.0,
            far: 10.0,
        }
    }
}

/// Camera and controller tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSection {
    /// Radians per unit of misalignment per second for `turn_to`.
    pub turn_rate: f32,
    /// Controller movement speed in units per second.
    pub move_speed: f32,
    /// Controller turn speed in radians per second.
    pub turn_speed: f32,
    /// Mouse-look radians per pixel per second.
    pub mouse_sensitivity: f32,
    /// Re-orthonormalize controlled transforms every frame.
    pub stabilize: bool,
}

impl Default for CameraSection {
    fn default() -> Self {
        Self {
            turn_rate: 1.0,
            move_speed: 10.0,
            turn_speed: 1.0,
            mouse_sensitivity: 0.05,
            stabilize: true,
        }
    }
}

/// Particle emitters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticlesSection {
    /// Number of emitters.
    pub emitters: usize,
    /// Particles each emitter may own.
    pub per_emitter: usize,
    /// Particles each emitter spawns per frame.
    pub spawn_per_frame: usize,
    /// Lifetime in seconds.
    pub lifetime: f32,
    /// Vertical acceleration.
    pub gravity: f32,
    /// Minimum launch speed.
    pub speed_min: f32,
    /// Maximum launch speed.
    pub speed_max: f32,
    /// Maximum horizontal launch speed.
    pub spread: f32,
    /// RNG seed.
    pub seed: u64,
}

impl Default for ParticlesSection {
    fn default() -> Self {
        let base = ParticleConfig::default();
        Self {
            emitters: NUM_EMITTERS,
            per_emitter: PARTICLES_PER_EMITTER,
            spawn_per_frame: base.spawn_per_frame,
            lifetime: base.lifetime,
            gravity: base.gravity,
            speed_min: base.speed_min,
            speed_max: base.speed_max,
            spread: base.spread,
            seed: base.seed,
        }
    }
}

/// Demo boxes for the frustum demo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxesSection {
    /// Number of boxes.
    pub count: usize,
    /// RNG seed for box placement.
    pub seed: u64,
    /// Distance between grid cells a box may snap to.
    pub spacing: f32,
}

impl Default for BoxesSection {
    fn default() -> Self {
        Self {
            count: 4,
            seed: 0x4C55_4D45_4E00_0002,
            spacing: 2.0,
        }
    }
}

/// Complete run configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LumenConfig {
    /// Frame pacing.
    pub frame: FrameSection,
    /// Line buffer.
    pub lines: LinesSection,
    /// Demo selection.
    pub demo: DemoSection,
    /// Frustum shape.
    pub frustum: FrustumSection,
    /// Camera tuning.
    pub camera: CameraSection,
    /// Particle emitters.
    pub particles: ParticlesSection,
    /// Demo boxes.
    pub boxes: BoxesSection,
}

impl LumenConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Parse`] for malformed TOML or unknown keys, and
    /// [`LumenError::InvalidConfig`] for values that fail validation.
    pub fn from_toml_str(content: &str) -> LumenResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`LumenConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> LumenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            mode = %config.demo.mode,
            frames = config.frame.frames,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Checks every value the frame path relies on.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> LumenResult<()> {
        let lines = self.lines.capacity;
        ensure(lines >= 2, "lines.capacity must hold at least one line")?;
        ensure(lines % 2 == 0, "lines.capacity must be even")?;
        ensure(
            lines <= MAX_LINE_VERTS,
            "lines.capacity exceeds the largest supported buffer",
        )?;

        let frame = &self.frame;
        ensure(
            frame.delta_time.is_finite() && frame.delta_time > 0.0,
            "frame.delta_time must be positive",
        )?;
        ensure(frame.target_fps > 0.0, "frame.target_fps must be positive")?;
        ensure(frame.max_frame_ms > 0.0, "frame.max_frame_ms must be positive")?;

        let frustum = &self.frustum;
        ensure(
            frustum.fov_degrees > 0.0 && frustum.fov_degrees < 180.0,
            "frustum.fov_degrees must be in (0, 180)",
        )?;
        ensure(
            frustum.view_width > 0.0 && frustum.view_height > 0.0,
            "frustum.view_width and frustum.view_height must be positive",
        )?;
        ensure(frustum.near > 0.0, "frustum.near must be positive")?;
        ensure(frustum.far > frustum.near, "frustum.far must exceed frustum.near")?;

        let particles = &self.particles;
        ensure(particles.emitters > 0, "particles.emitters must be positive")?;
        ensure(particles.per_emitter > 0, "particles.per_emitter must be positive")?;
        ensure(
            particles
                .emitters
                .checked_mul(particles.per_emitter)
                .is_some_and(|total| total <= MAX_PARTICLES),
            "particles.emitters * particles.per_emitter exceeds the largest supported pool",
        )?;
        ensure(particles.lifetime > 0.0, "particles.lifetime must be positive")?;
        ensure(particles.gravity.is_finite(), "particles.gravity must be finite")?;
        ensure(
            particles.spread.is_finite() && particles.spread >= 0.0,
            "particles.spread must be finite and not negative",
        )?;
        ensure(
            particles.speed_min.is_finite() && particles.speed_max.is_finite(),
            "particles.speed_min and particles.speed_max must be finite",
        )?;
        ensure(
            particles.speed_min <= particles.speed_max,
            "particles.speed_min must not exceed particles.speed_max",
        )?;

        ensure(self.boxes.count <= MAX_BOXES, "boxes.count exceeds the supported maximum")?;
        ensure(self.boxes.spacing > 0.0, "boxes.spacing must be positive")?;
        ensure(self.camera.turn_rate >= 0.0, "camera.turn_rate must not be negative")?;

        Ok(())
    }

    /// Frustum parameters in the units the culler expects.
    #[must_use]
    pub fn frustum_params(&self) -> FrustumParams {
        FrustumParams {
            fov_y: self.frustum.fov_degrees.to_radians(),
            view_width: self.frustum.view_width,
            view_height: self.frustum.view_height,
            near: self.frustum.near,
            far: self.frustum.far,
        }
    }

    /// Particle system configuration. The shared pool holds exactly one
    /// full set of particles per emitter.
    ///
    /// Expects a validated configuration, which bounds the pool size.
    #[must_use]
    pub fn particle_config(&self) -> ParticleConfig {
        let p = &self.particles;
        ParticleConfig {
            pool_capacity: p.emitters.saturating_mul(p.per_emitter),
            per_emitter: p.per_emitter,
            spawn_per_frame: p.spawn_per_frame,
            lifetime: p.lifetime,
            gravity: p.gravity,
            speed_min: p.speed_min,
            speed_max: p.speed_max,
            spread: p.spread,
            seed: p.seed,
        }
    }

    /// Keyboard-style controller built from `[camera]`.
    #[must_use]
    pub fn controller(&self) -> MatrixController {
        MatrixController::new(
            self.camera.move_speed,
            self.camera.turn_speed,
            self.camera.stabilize,
        )
    }
}

#[inline]
fn ensure(condition: bool, message: &str) -> LumenResult<()> {
    if condition {
        Ok(())
    } else {
        Err(LumenError::InvalidConfig(message.to_string()))
    }
}
