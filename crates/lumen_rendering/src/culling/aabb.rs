//! Axis-aligned bounding boxes.

use glam::Vec3;

/// Axis-aligned bounding box.
///
/// Immutable once built: center, extents and corners are derived on access,
/// so they can never go stale. Moving a box produces a new value through
/// [`translated`](Self::translated).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Creates a box spanning two opposite corners, in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a box from its center and half-extents.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// A zero-size box at `point`.
    #[must_use]
    pub fn from_point(point: Vec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Minimum corner.
    #[inline]
    #[must_use]
    pub const fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum corner.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> Vec3 {
        self.max
    }

    /// Returns the center of the box.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the half-extents of the box.
    #[inline]
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Corner `index` in `0..8`: bit 0 selects max X, bit 1 max Y, bit 2 max Z.
    #[inline]
    #[must_use]
    pub fn corner(&self, index: usize) -> Vec3 {
        Vec3::new(
            if index & 1 == 0 { self.min.x } else { self.max.x },
            if index & 2 == 0 { self.min.y } else { self.max.y },
            if index & 4 == 0 { self.min.z } else { self.max.z },
        )
    }

    /// All eight corners, ordered as [`corner`](Self::corner).
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| self.corner(i))
    }

    /// The twelve edges as corner pairs.
    #[must_use]
    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        let mut edges = [(Vec3::ZERO, Vec3::ZERO); 12];
        let mut n = 0;
        for i in 0..8 {
            for bit in [1, 2, 4] {
                if i & bit == 0 {
                    edges[n] = (self.corner(i), self.corner(i | bit));
                    n += 1;
                }
            }
        }
        edges
    }

    /// Returns true if `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// The same box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_center() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(32.0));
        assert_eq!(aabb.center(), Vec3::splat(16.0));
        assert_eq!(aabb.half_extents(), Vec3::splat(16.0));
    }

    #[test]
    fn test_new_orders_corners() {
        let aabb = Aabb::new(Vec3::new(1.0, -1.0, 4.0), Vec3::new(-1.0, 2.0, 0.0));
        assert_eq!(aabb.min(), Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max(), Vec3::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn test_corners_and_edges() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(aabb.corner(0), Vec3::ZERO);
        assert_eq!(aabb.corner(7), Vec3::ONE);

        for (a, b) in aabb.edges() {
            assert!(((a - b).length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_translated_leaves_original() {
        let aabb = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(0.5));
        let moved = aabb.translated(Vec3::new(3.0, 0.0, 0.0));

        assert_eq!(aabb.center(), Vec3::ZERO);
        assert_eq!(moved.center(), Vec3::new(3.0, 0.0, 0.0));
        assert!(moved.contains_point(Vec3::new(3.4, 0.4, -0.4)));
        assert!(!moved.contains_point(Vec3::ZERO));
    }
}
