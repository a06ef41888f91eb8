//! Visibility culling against the camera frustum.
//!
//! Boxes and spheres are tested on the CPU each frame before their debug
//! geometry is emitted.

mod aabb;
mod frustum;

pub use aabb::Aabb;
pub use frustum::{
    build_frustum, Classification, CullStats, Frustum, FrustumCorner, FrustumCuller,
    FrustumParams, FrustumPlane, Plane,
};
