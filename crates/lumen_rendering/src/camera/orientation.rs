//! Basis re-orthonormalization and target tracking.
//!
//! All functions edit a [`Transform`] in place and leave its translation
//! alone.

use std::f32::consts::FRAC_PI_4;

use glam::Vec3;
use lumen_shared::{Transform, WORLD_UP};

/// Largest rotation [`turn_to`] applies per axis in one call.
pub const MAX_TURN_STEP: f32 = FRAC_PI_4;

/// Rebuilds an orthonormal basis from the forward axis alone.
///
/// Forward is normalized, right becomes `WORLD_UP x forward`, and up becomes
/// `forward x right`. The result has no roll relative to the world.
///
/// When forward is parallel to `WORLD_UP` the old right axis is projected off
/// forward and reused. A zero forward axis leaves the transform unchanged.
pub fn stabilize(transform: &mut Transform) {
    let Some(forward) = transform.forward().try_normalize() else {
        return;
    };

    let right = WORLD_UP
        .cross(forward)
        .try_normalize()
        .or_else(|| {
            let old = transform.right();
            (old - forward * old.dot(forward)).try_normalize()
        })
        .unwrap_or_else(|| forward.any_orthonormal_vector());

    let up = forward.cross(right).normalize();
    transform.set_axes(right, up, forward);
}

/// Snaps `transform` to face `target`, then stabilizes.
///
/// Does nothing if the target sits exactly at the transform's position.
pub fn look_at(transform: &mut Transform, target: Vec3) {
    let Some(forward) = (target - transform.translation()).try_normalize() else {
        return;
    };
    transform.set_forward(forward);
    stabilize(transform);
}

/// Turns `transform` part of the way toward `target`.
///
/// The offset to the target is projected onto the right axis and the
/// projection, scaled by `rate * dt`, becomes a yaw about the local up axis.
/// The same offset projected onto the (new) up axis becomes a pitch about the
/// local right axis. Each step is clamped to [`MAX_TURN_STEP`]. The basis is
/// stabilized afterwards.
///
/// # Arguments
///
/// * `rate` - radians turned per unit of misalignment per second
/// * `dt` - frame delta time in seconds
pub fn turn_to(transform: &mut Transform, target: Vec3, rate: f32, dt: f32) {
    let to_target = target - transform.translation();
    if to_target.length_squared() <= f32::EPSILON {
        return;
    }

    let scale = rate * dt;

    let yaw = to_target.dot(transform.right().normalize_or_zero()) * scale;
    transform.rotate_axes(transform.up(), yaw.clamp(-MAX_TURN_STEP, MAX_TURN_STEP));

    // A positive turn about right tips forward toward -up.
    let pitch = to_target.dot(transform.up().normalize_or_zero()) * scale;
    transform.rotate_axes(transform.right(), -pitch.clamp(-MAX_TURN_STEP, MAX_TURN_STEP));

    stabilize(transform);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_orthonormal(t: &Transform) -> bool {
        let (r, u, f) = (t.right(), t.up(), t.forward());
        (r.length() - 1.0).abs() < 1e-5
            && (u.length() - 1.0).abs() < 1e-5
            && (f.length() - 1.0).abs() < 1e-5
            && r.dot(u).abs() < 1e-5
            && r.dot(f).abs() < 1e-5
            && u.dot(f).abs() < 1e-5
    }

    #[test]
    fn test_stabilize_removes_drift() {
        let mut t = Transform::from_axes(
            Vec3::new(1.1, 0.2, 0.0),
            Vec3::new(0.1, 0.9, 0.3),
            Vec3::new(0.2, -0.1, 2.0),
            Vec3::new(4.0, 5.0, 6.0),
        );
        stabilize(&mut t);

        assert!(is_orthonormal(&t));
        assert!(t.right().y.abs() < 1e-6, "stabilized basis has no roll");
        assert_eq!(t.translation(), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_stabilize_is_idempotent() {
        let mut t = Transform::from_axes(Vec3::X, Vec3::Y, Vec3::new(1.0, 0.5, 1.0), Vec3::ZERO);
        stabilize(&mut t);
        let once = t;
        stabilize(&mut t);

        assert!(t.0.abs_diff_eq(once.0, 1e-6));
    }

    #[test]
    fn test_stabilize_looking_straight_up() {
        let mut t = Transform::from_axes(Vec3::X, Vec3::NEG_Z, Vec3::Y, Vec3::ZERO);
        stabilize(&mut t);

        assert!(is_orthonormal(&t));
        assert!((t.forward() - Vec3::Y).length() < 1e-6);
        assert!(!t.0.is_nan());
    }

    #[test]
    fn test_look_at_faces_target() {
        let mut t = Transform::from_translation(Vec3::new(-5.0, 5.0, 2.0));
        let target = Vec3::new(3.0, 0.0, 7.0);
        look_at(&mut t, target);

        let expected = (target - t.translation()).normalize();
        assert!((t.forward() - expected).length() < 1e-5);
        assert!(is_orthonormal(&t));
    }

    #[test]
    fn test_look_at_own_position_is_noop() {
        let mut t = Transform::from_translation(Vec3::ONE);
        look_at(&mut t, Vec3::ONE);
        assert_eq!(t, Transform::from_translation(Vec3::ONE));
    }

    #[test]
    fn test_turn_to_converges() {
        let mut t = Transform::from_translation(Vec3::new(5.0, 5.0, 2.0));
        let target = Vec3::new(0.0, 0.0, 10.0);

        let start = t.forward().dot((target - t.translation()).normalize());
        for _ in 0..600 {
            turn_to(&mut t, target, 1.0, 1.0 / 60.0);
        }
        let end = t.forward().dot((target - t.translation()).normalize());

        assert!(end > start);
        assert!(end > 0.99, "alignment after turning: {end}");
        assert!(is_orthonormal(&t));
    }

    #[test]
    fn test_turn_to_is_gradual() {
        let mut t = Transform::IDENTITY;
        turn_to(&mut t, Vec3::new(10.0, 0.0, 0.0), 1.0, 1.0 / 60.0);

        // Turned toward +X but nowhere near facing it.
        assert!(t.forward().x > 0.0);
        assert!(t.forward().z > 0.9);
    }

    #[test]
    fn test_turn_to_pitches_up_toward_raised_target() {
        let mut t = Transform::IDENTITY;
        turn_to(&mut t, Vec3::new(0.0, 5.0, 5.0), 1.0, 1.0 / 60.0);
        assert!(t.forward().y > 0.0);
    }
}
