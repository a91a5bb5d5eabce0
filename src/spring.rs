//! Spring-damper edges between pairs of particles.

use crate::coefficients::ClothCoefficients;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::{Vec, Vec3};

/// Which rest length an edge uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Horizontal or vertical neighbour (rest = spacing).
    Structural,
    /// Quad diagonal (rest = spacing * sqrt(2)).
    Shear,
}

/// Hookean spring with a damper along the edge direction.
///
/// Stiffness, damping and rest lengths are read from the shared
/// [`ClothCoefficients`] on every evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringDamper {
    pub a: usize,
    pub b: usize,
    pub kind: EdgeKind,
}

impl SpringDamper {
    pub fn new(a: usize, b: usize, kind: EdgeKind) -> Self {
        SpringDamper { a, b, kind }
    }

    pub fn structural(a: usize, b: usize) -> Self {
        Self::new(a, b, EdgeKind::Structural)
    }

    pub fn shear(a: usize, b: usize) -> Self {
        Self::new(a, b, EdgeKind::Shear)
    }

    pub fn rest_length<F: Float>(&self, coefficients: &ClothCoefficients<F>) -> F {
        match self.kind {
            EdgeKind::Structural => coefficients.rest_length,
            EdgeKind::Shear => coefficients.shear_rest_length,
        }
    }

    /// Force this edge currently exerts on particle `a`; `b` receives the negation.
    ///
    /// Returns zero when the endpoints (nearly) coincide.
    pub fn force<F: Float>(
        &self,
        positions: &[Vec3<F>],
        particles: &[Particle<F>],
        coefficients: &ClothCoefficients<F>,
    ) -> Vec3<F> {
        let delta = positions[self.b] - positions[self.a];
        let len = delta.length();
        if len < coefficients.epsilon {
            return Vec3::zero();
        }
        let dir = delta.scale(F::one() / len);

        let stretch = len - self.rest_length(coefficients);
        let separating = (particles[self.b].velocity() - particles[self.a].velocity()).dot(dir);
        let magnitude = coefficients.spring_const * stretch + coefficients.damping_const * separating;
        dir.scale(magnitude)
    }

    /// Accumulate the edge force onto both endpoints.
    pub fn compute_force<F: Float>(
        &self,
        positions: &[Vec3<F>],
        particles: &mut [Particle<F>],
        coefficients: &ClothCoefficients<F>,
    ) {
        let f = self.force(positions, particles, coefficients);
        particles[self.a].apply_force(f);
        particles[self.b].apply_force(-f);
    }
}
