//! Interface to whatever draws the simulation.
//!
//! The engine never touches GPU state. After every update it hands the
//! renderer a [`MeshView`] of its buffers; drawing is requested separately
//! with a camera transform the engine treats as opaque.

use crate::float::Float;
use crate::vec::Vec3;

/// Borrowed triangle mesh. `positions` and `normals` have one entry per
/// vertex; `indices` holds vertex triples.
#[derive(Copy, Clone, Debug)]
pub struct MeshView<'a, F: Float> {
    pub positions: &'a [Vec3<F>],
    pub normals: &'a [Vec3<F>],
    pub indices: &'a [[u32; 3]],
}

impl<'a, F: Float> MeshView<'a, F> {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}

/// Per-draw model translation and diffuse colour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawParams<F: Float> {
    pub translation: Vec3<F>,
    pub color: [f32; 3],
}

/// Renderer collaborator.
///
/// The buffers passed to `upload` are snapshots, valid until the next
/// simulation update.
pub trait MeshRenderer<F: Float> {
    /// Camera view-projection transform.
    type ViewProj: ?Sized;

    /// Receive freshly simulated vertex data.
    fn upload(&mut self, mesh: &MeshView<'_, F>);

    /// Draw a mesh.
    fn draw(&mut self, mesh: &MeshView<'_, F>, params: &DrawParams<F>, view_proj: &Self::ViewProj);
}
