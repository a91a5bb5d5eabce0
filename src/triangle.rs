//! Triangular faces: aerodynamic drag and vertex normal accumulation.

use crate::coefficients::ClothCoefficients;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::{Vec, Vec3};

/// A face over three particles, wound so that `(b - a) x (c - a)` faces out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Triangle { a, b, c }
    }

    /// Unnormalized face normal; its length is twice the area.
    pub fn normal<F: Float>(&self, positions: &[Vec3<F>]) -> Vec3<F> {
        let origin = positions[self.a];
        (positions[self.b] - origin).cross(positions[self.c] - origin)
    }

    pub fn area<F: Float>(&self, positions: &[Vec3<F>]) -> F {
        self.normal(positions).length() * F::half()
    }

    /// Drag force on the whole face, before it is split across the vertices.
    ///
    /// `F = -1/2 rho |v|^2 C_d (A n.v) n` with `v` the surface velocity
    /// relative to the wind. Zero for still air or a collapsed face.
    pub fn drag<F: Float>(
        &self,
        positions: &[Vec3<F>],
        particles: &[Particle<F>],
        coefficients: &ClothCoefficients<F>,
    ) -> Vec3<F> {
        let eps = coefficients.epsilon;
        let surface_velocity = (particles[self.a].velocity()
            + particles[self.b].velocity()
            + particles[self.c].velocity())
        .scale(F::one() / F::from_f32(3.0));

        let relative = surface_velocity - coefficients.wind_velocity;
        let speed = relative.length();
        if speed < eps {
            return Vec3::zero();
        }
        let direction = relative.scale(F::one() / speed);

        let n = self.normal(positions);
        let twice_area = n.length();
        if twice_area < eps {
            return Vec3::zero();
        }
        let unit_normal = n.scale(F::one() / twice_area);
        let cross_area = twice_area * F::half() * direction.dot(unit_normal);

        let magnitude = F::half()
            * coefficients.fluid_density
            * speed
            * speed
            * coefficients.drag_coeff
            * cross_area;
        unit_normal.scale(-magnitude)
    }

    /// Split the drag force evenly over the three vertices.
    pub fn compute_aerodynamic_force<F: Float>(
        &self,
        positions: &[Vec3<F>],
        particles: &mut [Particle<F>],
        coefficients: &ClothCoefficients<F>,
    ) {
        let share = self
            .drag(positions, particles, coefficients)
            .scale(F::one() / F::from_f32(3.0));
        particles[self.a].apply_force(share);
        particles[self.b].apply_force(share);
        particles[self.c].apply_force(share);
    }

    /// Add this face's unit normal to each vertex accumulator.
    pub fn compute_normal<F: Float>(
        &self,
        positions: &[Vec3<F>],
        particles: &[Particle<F>],
        normals: &mut [Vec3<F>],
        epsilon: F,
    ) {
        let n = self.normal(positions);
        let len = n.length();
        if len < epsilon {
            return;
        }
        let n = n.scale(F::one() / len);
        particles[self.a].add_normal(normals, n);
        particles[self.b].add_normal(normals, n);
        particles[self.c].add_normal(normals, n);
    }
}
