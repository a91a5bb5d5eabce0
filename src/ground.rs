//! Visual ground plane.
//!
//! Collision against the ground is handled by particles using the shared
//! ground height; this type only tracks the level and draws a quad there.

use crate::float::Float;
use crate::render::{DrawParams, MeshRenderer, MeshView};
use crate::vec::Vec3;

/// How far below the collision height the quad is drawn.
const VISUAL_OFFSET: f32 = 1e-2;

const GROUND_COLOR: [f32; 3] = [1.0, 0.2, 0.2];
const GROUND_INDICES: [[u32; 3]; 2] = [[0, 2, 3], [0, 3, 1]];

/// A square quad spanning +x and +z from a corner, translated to the ground level.
#[derive(Clone, Debug)]
pub struct Ground<F: Float> {
    points: [Vec3<F>; 4],
    normals: [Vec3<F>; 4],
    level: F,
}

impl<F: Float> Ground<F> {
    /// Quad with corner `top_left` and edge length `size`; its level is `top_left.y`.
    pub fn new(top_left: Vec3<F>, size: F) -> Self {
        let corner = Vec3::new(top_left.x, F::zero(), top_left.z);
        let o = F::zero();
        let points = [
            corner,
            corner + Vec3::new(size, o, o),
            corner + Vec3::new(o, o, size),
            corner + Vec3::new(size, o, size),
        ];
        Ground {
            points,
            normals: [Vec3::up(); 4],
            level: top_left.y,
        }
    }

    pub fn level(&self) -> F {
        self.level
    }

    pub fn set_ground_level(&mut self, level: F) {
        self.level = level;
    }

    /// Model translation that puts the quad just under the collision height.
    pub fn model_offset(&self) -> Vec3<F> {
        Vec3::new(F::zero(), self.level - F::from_f32(VISUAL_OFFSET), F::zero())
    }

    /// Quad geometry in model space (y = 0).
    pub fn mesh(&self) -> MeshView<'_, F> {
        MeshView {
            positions: &self.points,
            normals: &self.normals,
            indices: &GROUND_INDICES,
        }
    }

    pub fn draw<R: MeshRenderer<F>>(&self, renderer: &mut R, view_proj: &R::ViewProj) {
        let params = DrawParams {
            translation: self.model_offset(),
            color: GROUND_COLOR,
        };
        renderer.draw(&self.mesh(), &params, view_proj);
    }
}
