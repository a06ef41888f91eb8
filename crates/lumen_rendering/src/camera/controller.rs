//! Keyboard-style and mouse-look transform controllers.
//!
//! Input polling is the host's job. Controllers consume an already-sampled
//! [`ControllerInput`] or cursor delta and the frame's delta time.

use glam::{Vec2, Vec3};
use lumen_shared::{Transform, WORLD_UP};

use super::stabilize;

/// Digital input state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ControllerInput {
    /// Move along local forward.
    pub forward: bool,
    /// Move along local backward.
    pub back: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
    /// Rise along world up.
    pub up: bool,
    /// Sink along world down.
    pub down: bool,
    /// Turn left about local up.
    pub yaw_left: bool,
    /// Turn right about local up.
    pub yaw_right: bool,
    /// Tilt up about local right.
    pub pitch_up: bool,
    /// Tilt down about local right.
    pub pitch_down: bool,
}

impl ControllerInput {
    /// Returns true if nothing is pressed.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Translates and rotates a transform from digital input.
///
/// Horizontal movement follows the local axes; vertical movement follows the
/// world up axis so the controlled object never drifts while climbing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixController {
    /// Units per second.
    pub move_speed: f32,
    /// Radians per second.
    pub turn_speed: f32,
    /// Re-orthonormalize after every update.
    pub stabilize: bool,
}

impl MatrixController {
    /// Creates a controller.
    #[must_use]
    pub const fn new(move_speed: f32, turn_speed: f32, stabilize: bool) -> Self {
        Self {
            move_speed,
            turn_speed,
            stabilize,
        }
    }

    /// Applies one frame of input.
    pub fn apply(&self, transform: &mut Transform, input: &ControllerInput, dt: f32) {
        let step = self.move_speed * dt;
        let axis = |pos: bool, neg: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));

        let local = Vec3::new(
            axis(input.right, input.left),
            0.0,
            axis(input.forward, input.back),
        ) * step;
        if local != Vec3::ZERO {
            transform.translate_local(local);
        }

        let rise = axis(input.up, input.down) * step;
        if rise != 0.0 {
            transform.set_translation(transform.translation() + WORLD_UP * rise);
        }

        let turn = self.turn_speed * dt;
        let yaw = axis(input.yaw_right, input.yaw_left) * turn;
        if yaw != 0.0 {
            transform.rotate_axes(transform.up(), yaw);
        }
        let pitch = axis(input.pitch_up, input.pitch_down) * turn;
        if pitch != 0.0 {
            transform.rotate_axes(transform.right(), -pitch);
        }

        if self.stabilize {
            stabilize(transform);
        }
    }
}

impl Default for MatrixController {
    fn default() -> Self {
        Self::new(10.0, 1.0, true)
    }
}

/// Yaws about the world up axis and pitches about the local right axis from
/// a cursor delta in pixels, then stabilizes.
///
/// Moving the cursor right turns right; moving it down tilts down.
pub fn mouse_look(transform: &mut Transform, delta: Vec2, sensitivity: f32, dt: f32) {
    let scale = sensitivity * dt;
    transform.rotate_axes(WORLD_UP, delta.x * scale);
    transform.rotate_axes(transform.right(), delta.y * scale);
    stabilize(transform);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_moves_along_local_forward() {
        let mut t = Transform::from_axes(Vec3::NEG_Z, Vec3::Y, Vec3::X, Vec3::ZERO);
        let input = ControllerInput {
            forward: true,
            ..ControllerInput::default()
        };
        MatrixController::new(10.0, 1.0, false).apply(&mut t, &input, 0.5);

        assert!((t.translation() - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut t = Transform::IDENTITY;
        let input = ControllerInput {
            left: true,
            right: true,
            yaw_left: true,
            yaw_right: true,
            ..ControllerInput::default()
        };
        MatrixController::default().apply(&mut t, &input, 1.0);
        assert!(t.0.abs_diff_eq(Transform::IDENTITY.0, 1e-6));
    }

    #[test]
    fn test_vertical_uses_world_up() {
        let mut t = Transform::IDENTITY;
        t.rotate_axes(Vec3::X, 0.5);
        let input = ControllerInput {
            up: true,
            ..ControllerInput::default()
        };
        MatrixController::new(2.0, 1.0, false).apply(&mut t, &input, 1.0);

        assert!((t.translation() - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_yaw_right_turns_right() {
        let mut t = Transform::IDENTITY;
        let input = ControllerInput {
            yaw_right: true,
            ..ControllerInput::default()
        };
        MatrixController::default().apply(&mut t, &input, 0.1);

        assert!(t.forward().x > 0.0);
        assert!(t.right().y.abs() < 1e-6);
    }

    #[test]
    fn test_pitch_up_tilts_up() {
        let mut t = Transform::IDENTITY;
        let input = ControllerInput {
            pitch_up: true,
            ..ControllerInput::default()
        };
        MatrixController::default().apply(&mut t, &input, 0.1);
        assert!(t.forward().y > 0.0);
    }

    #[test]
    fn test_mouse_look() {
        let mut t = Transform::IDENTITY;
        mouse_look(&mut t, Vec2::new(100.0, 0.0), 0.05, 0.1);
        assert!(t.forward().x > 0.0);

        let mut t = Transform::IDENTITY;
        mouse_look(&mut t, Vec2::new(0.0, 100.0), 0.05, 0.1);
        assert!(t.forward().y < 0.0);
    }

    #[test]
    fn test_idle_input() {
        assert!(ControllerInput::default().is_idle());
    }
}
