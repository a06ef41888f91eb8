//! Frustum culling for view-dependent rendering.
//!
//! Builds the six frustum planes from a camera transform and tests
//! bounding volumes against them.

use glam::Vec3;
use lumen_shared::Transform;

use super::Aabb;

/// Which side of a plane a volume lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Classification {
    /// Entirely on the normal's side.
    Front = 1,
    /// Crosses the plane.
    Straddling = 0,
    /// Entirely on the opposite side.
    Back = -1,
}

impl Classification {
    /// Numeric form: `+1`, `0` or `-1`.
    #[inline]
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }
}

/// A plane: `dot(p, normal) = offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed distance of the plane from the origin along `normal`.
    pub offset: f32,
}

impl Plane {
    /// Creates a plane from a normal and offset.
    #[must_use]
    pub const fn new(normal: Vec3, offset: f32) -> Self {
        Self { normal, offset }
    }

    /// Plane through three points. The normal is `(b - a) x (c - a)`,
    /// so the winding of the points picks its direction.
    ///
    /// Collinear points give a zero normal.
    #[must_use]
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize_or_zero();
        Self {
            normal,
            offset: a.dot(normal),
        }
    }

    /// Returns the signed distance from a point to the plane.
    #[inline]
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        point.dot(self.normal) - self.offset
    }

    /// Classifies a sphere against the plane.
    #[inline]
    #[must_use]
    pub fn classify_sphere(&self, center: Vec3, radius: f32) -> Classification {
        Self::classify_distance(self.signed_distance(center), radius)
    }

    /// Classifies a box against the plane.
    ///
    /// The half-extents are projected onto the absolute normal to get the
    /// box's radius along the normal.
    #[inline]
    #[must_use]
    pub fn classify_aabb(&self, aabb: &Aabb) -> Classification {
        let radius = aabb.half_extents().dot(self.normal.abs());
        Self::classify_distance(self.signed_distance(aabb.center()), radius)
    }

    #[inline]
    fn classify_distance(distance: f32, radius: f32) -> Classification {
        if distance > radius {
            Classification::Front
        } else if distance < -radius {
            Classification::Back
        } else {
            Classification::Straddling
        }
    }
}

/// Frustum plane names, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    /// Near plane.
    Near = 0,
    /// Far plane.
    Far = 1,
    /// Left plane.
    Left = 2,
    /// Right plane.
    Right = 3,
    /// Top plane.
    Top = 4,
    /// Bottom plane.
    Bottom = 5,
}

impl FrustumPlane {
    /// Every plane, in storage order.
    pub const ALL: [Self; 6] = [
        Self::Near,
        Self::Far,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
    ];
}

/// Frustum corner names: near/far, top/bottom, left/right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum FrustumCorner {
    /// Far top right.
    FTR = 0,
    /// Far top left.
    FTL = 1,
    /// Near top left.
    NTL = 2,
    /// Near top right.
    NTR = 3,
    /// Far bottom right.
    FBR = 4,
    /// Far bottom left.
    FBL = 5,
    /// Near bottom left.
    NBL = 6,
    /// Near bottom right.
    NBR = 7,
}

/// Camera parameters that shape a frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumParams {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width; only the aspect ratio matters.
    pub view_width: f32,
    /// Viewport height.
    pub view_height: f32,
    /// Distance to the near plane.
    pub near: f32,
    /// Distance to the far plane.
    pub far: f32,
}

impl FrustumParams {
    /// Width over height.
    #[inline]
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.view_width / self.view_height
    }
}

impl Default for FrustumParams {
    fn default() -> Self {
        Self {
            fov_y: 45.0_f32.to_radians(),
            view_width: 1280.0,
            view_height: 720.0,
            near: 1.0,
            far: 10.0,
        }
    }
}

/// View frustum: six planes and eight corners.
///
/// Rebuilt from scratch whenever the camera moves; never updated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
    corners: [Vec3; 8],
}

impl Frustum {
    /// Builds the frustum of a camera placed at `transform`.
    ///
    /// The frustum opens along the transform's forward axis; its right and up
    /// axes orient the rectangle at each distance. The plane normals face the
    /// frustum interior.
    #[must_use]
    pub fn build(transform: &Transform, params: &FrustumParams) -> Self {
        use FrustumCorner::{FBL, FBR, FTL, FTR, NBL, NBR, NTL, NTR};

        let origin = transform.translation();
        let forward = transform.forward();
        let right = transform.right();
        let up = transform.up();

        let tan_half_fov = (params.fov_y * 0.5).tan();
        let aspect = params.aspect();

        let rect = |distance: f32| {
            let center = origin + forward * distance;
            let height = 2.0 * tan_half_fov * distance;
            let width = height * aspect;
            (center, up * (height * 0.5), right * (width * 0.5))
        };

        let mut corners = [Vec3::ZERO; 8];
        let (nc, nh, nw) = rect(params.near);
        corners[NTL as usize] = nc + nh - nw;
        corners[NTR as usize] = nc + nh + nw;
        corners[NBL as usize] = nc - nh - nw;
        corners[NBR as usize] = nc - nh + nw;

        let (fc, fh, fw) = rect(params.far);
        corners[FTL as usize] = fc + fh - fw;
        corners[FTR as usize] = fc + fh + fw;
        corners[FBL as usize] = fc - fh - fw;
        corners[FBR as usize] = fc - fh + fw;

        let p = |c: FrustumCorner| corners[c as usize];
        let mut planes = [Plane::new(Vec3::ZERO, 0.0); 6];
        planes[FrustumPlane::Near as usize] = Plane::from_points(p(NTR), p(NTL), p(NBL));
        planes[FrustumPlane::Far as usize] = Plane::from_points(p(FTL), p(FTR), p(FBL));
        planes[FrustumPlane::Left as usize] = Plane::from_points(p(NTL), p(FTL), p(NBL));
        planes[FrustumPlane::Right as usize] = Plane::from_points(p(FTR), p(NTR), p(FBR));
        planes[FrustumPlane::Top as usize] = Plane::from_points(p(FTL), p(NTL), p(FTR));
        planes[FrustumPlane::Bottom as usize] = Plane::from_points(p(FBL), p(FBR), p(NBL));

        Self { planes, corners }
    }

    /// One plane by name.
    #[inline]
    #[must_use]
    pub fn plane(&self, which: FrustumPlane) -> &Plane {
        &self.planes[which as usize]
    }

    /// All six planes in [`FrustumPlane`] order.
    #[inline]
    #[must_use]
    pub const fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// One corner by name.
    #[inline]
    #[must_use]
    pub fn corner(&self, which: FrustumCorner) -> Vec3 {
        self.corners[which as usize]
    }

    /// All eight corners in [`FrustumCorner`] order.
    #[inline]
    #[must_use]
    pub const fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    /// Centroid of the four corners bounding a face.
    #[must_use]
    pub fn face_center(&self, which: FrustumPlane) -> Vec3 {
        use FrustumCorner::{FBL, FBR, FTL, FTR, NBL, NBR, NTL, NTR};

        let quad = match which {
            FrustumPlane::Near => [NTL, NTR, NBL, NBR],
            FrustumPlane::Far => [FTL, FTR, FBL, FBR],
            FrustumPlane::Left => [NTL, FTL, NBL, FBL],
            FrustumPlane::Right => [NTR, FTR, NBR, FBR],
            FrustumPlane::Top => [NTL, NTR, FTL, FTR],
            FrustumPlane::Bottom => [NBL, NBR, FBL, FBR],
        };
        quad.iter().map(|&c| self.corner(c)).sum::<Vec3>() * 0.25
    }

    /// The twelve edges as corner pairs: near ring, far ring, then the four
    /// side edges.
    #[must_use]
    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        use FrustumCorner::{FBL, FBR, FTL, FTR, NBL, NBR, NTL, NTR};

        let pairs = [
            (NTL, NTR),
            (NTR, NBR),
            (NBR, NBL),
            (NBL, NTL),
            (FTL, FTR),
            (FTR, FBR),
            (FBR, FBL),
            (FBL, FTL),
            (NTL, FTL),
            (NTR, FTR),
            (NBL, FBL),
            (NBR, FBR),
        ];
        pairs.map(|(a, b)| (self.corner(a), self.corner(b)))
    }

    /// Tests if an AABB is visible (not fully behind any plane).
    ///
    /// Conservative: may report boxes just outside a frustum corner as
    /// visible, never the reverse.
    #[must_use]
    pub fn test_aabb(&self, aabb: &Aabb) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.classify_aabb(aabb) != Classification::Back)
    }

    /// Tests if a sphere is visible (not fully behind any plane).
    #[must_use]
    pub fn test_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.classify_sphere(center, radius) != Classification::Back)
    }
}

/// Builds a frustum from loose camera parameters.
///
/// `fov` is the vertical field of view in radians.
#[must_use]
pub fn build_frustum(
    transform: &Transform,
    fov: f32,
    view_width: f32,
    view_height: f32,
    near: f32,
    far: f32,
) -> Frustum {
    Frustum::build(
        transform,
        &FrustumParams {
            fov_y: fov,
            view_width,
            view_height,
            near,
            far,
        },
    )
}

/// Visibility counters for one culling pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullStats {
    /// Volumes that passed.
    pub visible: u32,
    /// Volumes that were rejected.
    pub culled: u32,
}

impl CullStats {
    /// Fraction of tested volumes that were culled, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cull_ratio(&self) -> f32 {
        let total = self.visible + self.culled;
        if total == 0 {
            0.0
        } else {
            self.culled as f32 / total as f32
        }
    }
}

/// Frustum culler: the current frustum plus per-pass statistics.
pub struct FrustumCuller {
    /// Current frustum.
    frustum: Frustum,
    /// Camera parameters used on every update.
    params: FrustumParams,
    /// Counters since the last update.
    stats: CullStats,
}

impl FrustumCuller {
    /// Creates a culler looking down +Z from the origin.
    #[must_use]
    pub fn new(params: FrustumParams) -> Self {
        Self {
            frustum: Frustum::build(&Transform::IDENTITY, &params),
            params,
            stats: CullStats::default(),
        }
    }

    /// Rebuilds the frustum for a new camera transform and resets the
    /// counters.
    pub fn update(&mut self, transform: &Transform) {
        self.frustum = Frustum::build(transform, &self.params);
        self.stats = CullStats::default();
    }

    /// The current frustum.
    #[must_use]
    pub const fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// The camera parameters.
    #[must_use]
    pub const fn params(&self) -> &FrustumParams {
        &self.params
    }

    /// Tests an AABB and counts the result.
    pub fn test_aabb(&mut self, aabb: &Aabb) -> bool {
        let visible = self.frustum.test_aabb(aabb);
        if visible {
            self.stats.visible += 1;
        } else {
            self.stats.culled += 1;
        }
        visible
    }

    /// Tests a sphere and counts the result.
    pub fn test_sphere(&mut self, center: Vec3, radius: f32) -> bool {
        let visible = self.frustum.test_sphere(center, radius);
        if visible {
            self.stats.visible += 1;
        } else {
            self.stats.culled += 1;
        }
        visible
    }

    /// Counters since the last [`update`](Self::update).
    #[must_use]
    pub const fn stats(&self) -> CullStats {
        self.stats
    }
}

impl Default for FrustumCuller {
    fn default() -> Self {
        Self::new(FrustumParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_frustum() -> Frustum {
        build_frustum(
            &Transform::IDENTITY,
            90.0_f32.to_radians(),
            100.0,
            100.0,
            1.0,
            10.0,
        )
    }

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!((plane.normal - Vec3::Z).length() < 1e-6);
        assert!(plane.offset.abs() < 1e-6);
        assert!((plane.signed_distance(Vec3::new(4.0, 4.0, 3.0)) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_corners_span_near_and_far_rects() {
        let f = square_frustum();
        assert!((f.corner(FrustumCorner::NTL) - Vec3::new(-1.0, 1.0, 1.0)).length() < 1e-5);
        assert!((f.corner(FrustumCorner::NBR) - Vec3::new(1.0, -1.0, 1.0)).length() < 1e-5);
        assert!((f.corner(FrustumCorner::FTR) - Vec3::new(10.0, 10.0, 10.0)).length() < 1e-4);
        assert!((f.corner(FrustumCorner::FBL) - Vec3::new(-10.0, -10.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn test_normals_face_interior() {
        let f = square_frustum();
        let inside = Vec3::new(0.0, 0.0, 5.0);
        for which in FrustumPlane::ALL {
            assert!(
                f.plane(which).signed_distance(inside) > 0.0,
                "{which:?} normal points away from the interior"
            );
        }
        assert!((f.plane(FrustumPlane::Near).normal - Vec3::Z).length() < 1e-6);
        assert!((f.plane(FrustumPlane::Far).normal + Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_classify_aabb_against_plane() {
        let plane = Plane::new(Vec3::Y, 0.0);
        let above = Aabb::from_center_half_extents(Vec3::new(0.0, 2.0, 0.0), Vec3::ONE);
        let below = above.translated(Vec3::new(0.0, -4.0, 0.0));
        let across = above.translated(Vec3::new(0.0, -2.0, 0.0));

        assert_eq!(plane.classify_aabb(&above), Classification::Front);
        assert_eq!(plane.classify_aabb(&below), Classification::Back);
        assert_eq!(plane.classify_aabb(&across).as_i8(), 0);
    }

    #[test]
    fn test_culled_iff_behind_any_plane() {
        let f = square_frustum();
        let inside = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, 5.0), Vec3::splat(0.5));
        let beside = inside.translated(Vec3::new(20.0, 0.0, 0.0));
        let behind = inside.translated(Vec3::new(0.0, 0.0, -10.0));
        let crossing_near = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, 1.0), Vec3::splat(0.5));

        assert!(f.test_aabb(&inside));
        assert!(!f.test_aabb(&beside));
        assert!(!f.test_aabb(&behind));
        assert!(f.test_aabb(&crossing_near));
    }

    #[test]
    fn test_sphere() {
        let f = square_frustum();
        assert!(f.test_sphere(Vec3::new(0.0, 0.0, 5.0), 0.1));
        assert!(f.test_sphere(Vec3::new(0.0, 0.0, 10.5), 1.0));
        assert!(!f.test_sphere(Vec3::new(0.0, 0.0, 12.0), 1.0));
    }

    #[test]
    fn test_face_centers() {
        let f = square_frustum();
        assert!((f.face_center(FrustumPlane::Near) - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
        assert!((f.face_center(FrustumPlane::Far) - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn test_culler_counts() {
        let mut culler = FrustumCuller::default();
        culler.update(&Transform::IDENTITY);

        let near_box = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, 5.0), Vec3::splat(0.5));
        let far_box = near_box.translated(Vec3::new(0.0, 0.0, 50.0));
        assert!(culler.test_aabb(&near_box));
        assert!(!culler.test_aabb(&far_box));

        let stats = culler.stats();
        assert_eq!(stats, CullStats { visible: 1, culled: 1 });
        assert!((stats.cull_ratio() - 0.5).abs() < 1e-6);

        culler.update(&Transform::IDENTITY);
        assert_eq!(culler.stats(), CullStats::default());
    }
}
