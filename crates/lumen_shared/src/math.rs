//! Affine transforms with named basis axes.
//!
//! A [`Transform`] wraps a `glam::Mat4` whose columns are read as
//! right (X), up (Y), forward (Z) and translation (W). Points are mapped as
//! `p.x * right + p.y * up + p.z * forward + translation`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// An affine 4x4 transform: rotation basis plus translation.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Transform(pub Mat4);

impl Transform {
    /// Identity transform
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    /// Identity rotation placed at `position`
    #[must_use]
    pub fn from_translation(position: Vec3) -> Self {
        Self(Mat4::from_translation(position))
    }

    /// Builds a transform from explicit axes and a position.
    #[must_use]
    pub fn from_axes(right: Vec3, up: Vec3, forward: Vec3, position: Vec3) -> Self {
        Self(Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            forward.extend(0.0),
            position.extend(1.0),
        ))
    }

    /// Right (X) axis
    #[inline]
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.0.x_axis.truncate()
    }

    /// Up (Y) axis
    #[inline]
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.0.y_axis.truncate()
    }

    /// Forward (Z) axis
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.0.z_axis.truncate()
    }

    /// Translation (W column)
    #[inline]
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.0.w_axis.truncate()
    }

    /// Replaces the three basis axes, keeping the translation.
    #[inline]
    pub fn set_axes(&mut self, right: Vec3, up: Vec3, forward: Vec3) {
        self.0.x_axis = right.extend(0.0);
        self.0.y_axis = up.extend(0.0);
        self.0.z_axis = forward.extend(0.0);
    }

    /// Replaces only the forward axis.
    #[inline]
    pub fn set_forward(&mut self, forward: Vec3) {
        self.0.z_axis = forward.extend(0.0);
    }

    /// Replaces the translation.
    #[inline]
    pub fn set_translation(&mut self, position: Vec3) {
        self.0.w_axis = Vec4::new(position.x, position.y, position.z, 1.0);
    }

    /// Rotates the basis axes about a world-space `axis`; translation is kept.
    pub fn rotate_axes(&mut self, axis: Vec3, angle: f32) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        let rotation = Quat::from_axis_angle(axis, angle);
        let (right, up, forward) = (self.right(), self.up(), self.forward());
        self.set_axes(rotation * right, rotation * up, rotation * forward);
    }

    /// Moves along the local axes: `local.x` along right, `.y` along up,
    /// `.z` along forward.
    pub fn translate_local(&mut self, local: Vec3) {
        let offset = self.right() * local.x + self.up() * local.y + self.forward() * local.z;
        self.set_translation(self.translation() + offset);
    }

    /// Maps a local-space point into world space.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.0.transform_point3(point)
    }

    /// The raw matrix.
    #[inline]
    #[must_use]
    pub const fn matrix(&self) -> &Mat4 {
        &self.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Mat4> for Transform {
    fn from(matrix: Mat4) -> Self {
        Self(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_axes() {
        let t = Transform::IDENTITY;
        assert_eq!(t.right(), Vec3::X);
        assert_eq!(t.up(), Vec3::Y);
        assert_eq!(t.forward(), Vec3::Z);
        assert_eq!(t.translation(), Vec3::ZERO);
    }

    #[test]
    fn test_transform_point_uses_axes() {
        let t = Transform::from_axes(Vec3::Z, Vec3::Y, -Vec3::X, Vec3::new(1.0, 2.0, 3.0));
        let p = t.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(1.0, 2.0, 4.0)).length() < 1e-6);
    }

    #[test]
    fn test_translate_local() {
        let mut t = Transform::from_axes(Vec3::Z, Vec3::Y, -Vec3::X, Vec3::ZERO);
        t.translate_local(Vec3::new(0.0, 0.0, 2.0));
        assert!((t.translation() - Vec3::new(-2.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_rotate_axes_keeps_translation() {
        let mut t = Transform::from_translation(Vec3::new(5.0, 0.0, 0.0));
        t.rotate_axes(Vec3::Y, std::f32::consts::FRAC_PI_2);
        assert!((t.forward() - Vec3::X).length() < 1e-6);
        assert_eq!(t.translation(), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_transform_bytemuck() {
        let t = Transform::IDENTITY;
        assert_eq!(bytemuck::bytes_of(&t).len(), 64);
    }
}
