//! Frustum culling demo.
//!
//! A controlled transform carries a frustum through a handful of unit
//! boxes. Every frame the frustum is rebuilt, drawn with its plane normals,
//! and every box is drawn red if visible and blue if culled.

use glam::Vec3;
use lumen_rendering::culling::{Aabb, FrustumCuller, FrustumParams};
use lumen_rendering::debug::{draw_aabb, draw_axes, draw_frustum, draw_frustum_normals};
use lumen_rendering::{FrameContext, MatrixController};
use lumen_shared::{Color, Transform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{FrameInput, FrameUpdate};

/// Grid cells per axis a demo box may snap to.
const BOX_GRID_CELLS: u32 = 5;

/// Deterministic unit boxes whose minimum corners sit on a coarse grid of
/// `spacing`-sized cells starting at the origin.
#[must_use]
pub fn demo_boxes(count: usize, seed: u64, spacing: f32) -> Vec<Aabb> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cell = || {
        #[allow(clippy::cast_precision_loss)]
        let c = rng.gen_range(0..BOX_GRID_CELLS) as f32;
        c * spacing
    };

    (0..count)
        .map(|_| {
            let min = Vec3::new(cell(), cell(), cell());
            Aabb::new(min, min + Vec3::ONE)
        })
        .collect()
}

/// A controlled frustum culling a fixed box set.
pub struct FrustumDemo {
    transform: Transform,
    controller: MatrixController,
    culler: FrustumCuller,
    boxes: Vec<Aabb>,
    visible: Vec<bool>,
}

impl FrustumDemo {
    /// Creates the demo with the frustum at the origin facing +Z.
    #[must_use]
    pub fn new(params: FrustumParams, controller: MatrixController, boxes: Vec<Aabb>) -> Self {
        let visible = vec![false; boxes.len()];
        Self {
            transform: Transform::IDENTITY,
            controller,
            culler: FrustumCuller::new(params),
            boxes,
            visible,
        }
    }

    /// The frustum's transform.
    #[must_use]
    pub const fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The culler, holding this frame's frustum and counts.
    #[must_use]
    pub const fn culler(&self) -> &FrustumCuller {
        &self.culler
    }

    /// The demo boxes.
    #[must_use]
    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }

    /// Per-box visibility from the last update.
    #[must_use]
    pub fn visible(&self) -> &[bool] {
        &self.visible
    }
}

impl FrameUpdate for FrustumDemo {
    fn name(&self) -> &'static str {
        "frustum"
    }

    fn update(&mut self, ctx: &mut FrameContext, input: &FrameInput) {
        self.controller
            .apply(&mut self.transform, &input.target, ctx.delta_time());
        self.culler.update(&self.transform);

        let lines = ctx.lines_mut();
        draw_frustum(lines, self.culler.frustum(), Color::WHITE);
        draw_frustum_normals(lines, self.culler.frustum());
        draw_axes(lines, &self.transform);

        for (aabb, seen) in self.boxes.iter().zip(self.visible.iter_mut()) {
            *seen = self.culler.test_aabb(aabb);
            let color = if *seen { Color::RED } else { Color::BLUE };
            draw_aabb(lines, aabb, color);
        }

        let cull = self.culler.stats();
        let stats = ctx.stats_mut();
        stats.boxes_visible = cull.visible;
        stats.boxes_culled = cull.culled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_rendering::ControllerInput;

    fn two_boxes() -> Vec<Aabb> {
        vec![
            Aabb::new(Vec3::new(0.0, 0.0, 4.0), Vec3::new(1.0, 1.0, 5.0)),
            Aabb::new(Vec3::new(0.0, 0.0, -3.0), Vec3::new(1.0, 1.0, -2.0)),
        ]
    }

    #[test]
    fn test_demo_boxes_deterministic_on_grid() {
        let a = demo_boxes(16, 7, 2.0);
        assert_eq!(a, demo_boxes(16, 7, 2.0));

        for aabb in &a {
            let min = aabb.min();
            for c in [min.x, min.y, min.z] {
                assert!((0.0..=8.0).contains(&c));
                assert!((c / 2.0).fract().abs() < f32::EPSILON);
            }
            assert_eq!(aabb.max() - min, Vec3::ONE);
        }
    }

    #[test]
    fn test_visible_red_culled_blue() {
        let mut demo = FrustumDemo::new(FrustumParams::default(), MatrixController::default(), two_boxes());
        let mut ctx = FrameContext::new(256, Transform::IDENTITY);

        ctx.begin(1.0 / 60.0);
        demo.update(&mut ctx, &FrameInput::default());

        assert_eq!(demo.visible(), &[true, false]);
        assert_eq!(ctx.stats().boxes_visible, 1);
        assert_eq!(ctx.stats().boxes_culled, 1);

        // Frustum edges, normals and axes come first.
        let verts = ctx.lines().verts();
        assert_eq!(verts.len(), (12 + 6 + 3 + 24) * 2);
        assert_eq!(verts[42].color, Color::RED.to_array());
        assert_eq!(verts[66].color, Color::BLUE.to_array());
    }

    #[test]
    fn test_turning_around_swaps_visibility() {
        let mut demo = FrustumDemo::new(FrustumParams::default(), MatrixController::default(), two_boxes());
        let mut ctx = FrameContext::new(256, Transform::IDENTITY);
        let turn = FrameInput {
            target: ControllerInput {
                yaw_left: true,
                ..ControllerInput::default()
            },
            ..FrameInput::default()
        };

        // Half a turn at one radian per second.
        for _ in 0..314 {
            ctx.begin(0.01);
            demo.update(&mut ctx, &turn);
        }

        assert!(demo.transform().forward().z < -0.99);
        assert_eq!(demo.visible(), &[false, true]);
    }
}
