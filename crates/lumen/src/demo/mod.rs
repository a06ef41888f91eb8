//! # Demo Modes
//!
//! A closed set of per-frame behaviors, selected at runtime by
//! [`DemoMode`]. Each mode implements [`FrameUpdate`]; the frame loop owns
//! exactly one of them and never needs to know which.
//!
//! | Mode                 | Draws                                          |
//! |----------------------|------------------------------------------------|
//! | `free_pool_stress`   | one test particle per frame from a free list   |
//! | `sorted_pool_stress` | the same churn on a swap-compacting pool       |
//! | `particles`          | emitters sharing one particle pool             |
//! | `orientation`        | `look_at` and `turn_to` tracking a target      |
//! | `frustum`            | a controlled frustum culling demo boxes        |

mod frustum;
mod orientation;
mod particles;
mod pool_stress;

use std::fmt;

use glam::Vec2;
use lumen_rendering::{ControllerInput, FrameContext};
use serde::Deserialize;

use crate::config::LumenConfig;

pub use frustum::{demo_boxes, FrustumDemo};
pub use orientation::{OrientationDemo, LOOK_AT_ORIGIN, TURN_TO_ORIGIN};
pub use particles::{emitter_layout, ParticleDemo};
pub use pool_stress::{FreePoolStress, SortedPoolStress, STRESS_CAPACITY, STRESS_LIFETIME};

/// Which demo runs each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoMode {
    /// Free-list pool churn.
    FreePoolStress,
    /// Sorted pool churn.
    SortedPoolStress,
    /// Emitters over a shared particle pool.
    Particles,
    /// Look-at and turn-to transforms following a target.
    Orientation,
    /// Frustum construction and box culling.
    #[default]
    Frustum,
}

impl DemoMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::FreePoolStress,
        Self::SortedPoolStress,
        Self::Particles,
        Self::Orientation,
        Self::Frustum,
    ];

    /// The name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FreePoolStress => "free_pool_stress",
            Self::SortedPoolStress => "sorted_pool_stress",
            Self::Particles => "particles",
            Self::Orientation => "orientation",
            Self::Frustum => "frustum",
        }
    }
}

impl fmt::Display for DemoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input sampled by the host for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Drives the view camera.
    pub camera: ControllerInput,
    /// Drives the demo's own controlled transform (the frustum, or the
    /// target the orientation demo tracks).
    pub target: ControllerInput,
    /// Cursor movement in pixels since the last frame.
    pub mouse_delta: Vec2,
    /// Apply `mouse_delta` to the view camera.
    pub mouse_look: bool,
    /// `Some(true)` starts tracking, `Some(false)` stops it.
    pub track: Option<bool>,
}

/// One frame of demo work.
///
/// Called after the frame's line buffer has been cleared and the grid drawn,
/// and before the frame is submitted.
pub trait FrameUpdate {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Advances the demo by `ctx.delta_time()` and appends its lines.
    fn update(&mut self, ctx: &mut FrameContext, input: &FrameInput);
}

/// Builds the demo selected by `config.demo.mode`.
#[must_use]
pub fn build_demo(config: &LumenConfig) -> Box<dyn FrameUpdate> {
    let mode = config.demo.mode;
    tracing::info!(%mode, "demo mode selected");

    match mode {
        DemoMode::FreePoolStress => Box::new(FreePoolStress::new()),
        DemoMode::SortedPoolStress => Box::new(SortedPoolStress::new()),
        DemoMode::Particles => Box::new(ParticleDemo::new(
            config.particle_config(),
            config.particles.emitters,
        )),
        DemoMode::Orientation => Box::new(OrientationDemo::new(
            config.controller(),
            config.camera.turn_rate,
        )),
        DemoMode::Frustum => Box::new(FrustumDemo::new(
            config.frustum_params(),
            config.controller(),
            demo_boxes(config.boxes.count, config.boxes.seed, config.boxes.spacing),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_name_parses() {
        for mode in DemoMode::ALL {
            let text = format!("[demo]\nmode = \"{mode}\"\n");
            let config = LumenConfig::from_toml_str(&text).unwrap();
            assert_eq!(config.demo.mode, mode);
        }
    }

    #[test]
    fn test_build_demo_names() {
        let mut config = LumenConfig::default();
        let names: Vec<&str> = DemoMode::ALL
            .iter()
            .map(|&mode| {
                config.demo.mode = mode;
                build_demo(&config).name()
            })
            .collect();
        assert_eq!(
            names,
            vec![
                "free_pool_stress",
                "sorted_pool_stress",
                "particles",
                "orientation",
                "frustum"
            ]
        );
    }
}
