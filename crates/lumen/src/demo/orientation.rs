//! Look-at and turn-to demo.
//!
//! Two transforms watch a third. The target is driven by
//! [`FrameInput::target`]; while tracking is on, one watcher snaps to face
//! it every frame and the other turns toward it gradually.

use glam::Vec3;
use lumen_rendering::debug::draw_axes;
use lumen_rendering::{look_at, turn_to, FrameContext, MatrixController};
use lumen_shared::Transform;

use super::{FrameInput, FrameUpdate};

/// Where the snapping watcher stands.
pub const LOOK_AT_ORIGIN: Vec3 = Vec3::new(-5.0, 5.0, 2.0);

/// Where the turning watcher stands.
pub const TURN_TO_ORIGIN: Vec3 = Vec3::new(5.0, 5.0, 2.0);

/// Watchers plus the target they follow.
pub struct OrientationDemo {
    looker: Transform,
    turner: Transform,
    target: Transform,
    controller: MatrixController,
    turn_rate: f32,
    tracking: bool,
}

impl OrientationDemo {
    /// Creates the demo with tracking off.
    ///
    /// # Arguments
    ///
    /// * `controller` - moves the target
    /// * `turn_rate` - passed to [`turn_to`]
    #[must_use]
    pub fn new(controller: MatrixController, turn_rate: f32) -> Self {
        Self {
            looker: Transform::from_translation(LOOK_AT_ORIGIN),
            turner: Transform::from_translation(TURN_TO_ORIGIN),
            target: Transform::IDENTITY,
            controller,
            turn_rate,
            tracking: false,
        }
    }

    /// The transform that snaps to face the target.
    #[must_use]
    pub const fn looker(&self) -> &Transform {
        &self.looker
    }

    /// The transform that turns toward the target over time.
    #[must_use]
    pub const fn turner(&self) -> &Transform {
        &self.turner
    }

    /// The tracked transform.
    #[must_use]
    pub const fn target(&self) -> &Transform {
        &self.target
    }

    /// Whether the watchers currently follow the target.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.tracking
    }
}

impl FrameUpdate for OrientationDemo {
    fn name(&self) -> &'static str {
        "orientation"
    }

    fn update(&mut self, ctx: &mut FrameContext, input: &FrameInput) {
        let dt = ctx.delta_time();

        if let Some(track) = input.track {
            if track != self.tracking {
                tracing::debug!(track, "orientation tracking toggled");
            }
            self.tracking = track;
        }

        self.controller.apply(&mut self.target, &input.target, dt);

        if self.tracking {
            let goal = self.target.translation();
            look_at(&mut self.looker, goal);
            turn_to(&mut self.turner, goal, self.turn_rate, dt);
        }

        let lines = ctx.lines_mut();
        draw_axes(lines, &self.looker);
        draw_axes(lines, &self.turner);
        draw_axes(lines, &self.target);
    }
}
