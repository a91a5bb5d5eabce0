//! Point masses integrated with explicit (semi-implicit) Euler.

use crate::coefficients::ClothCoefficients;
use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// A point mass of the cloth grid.
///
/// Position and normal live in the cloth's shared buffers and are addressed
/// through `index`; velocity and the force accumulator are owned here.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    index: usize,
    velocity: Vec3<F>,
    force: Vec3<F>,
    fixed: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(index: usize) -> Self {
        Particle {
            index,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            fixed: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn apply_force(&mut self, force: Vec3<F>) {
        self.force = self.force + force;
    }

    pub fn apply_gravity(&mut self, coefficients: &ClothCoefficients<F>) {
        let weight = coefficients.particle_mass * coefficients.gravity;
        self.apply_force(Vec3::new(F::zero(), -weight, F::zero()));
    }

    /// Advance one substep of `dt` seconds.
    ///
    /// Fixed particles keep their position and velocity; their accumulator is
    /// still cleared so forces never carry over into later substeps.
    pub fn integrate(
        &mut self,
        positions: &mut [Vec3<F>],
        coefficients: &ClothCoefficients<F>,
        dt: F,
    ) {
        if self.fixed {
            self.reset_force();
            return;
        }

        self.apply_gravity(coefficients);

        let eps = coefficients.epsilon;
        let acceleration = self.force.scale(F::one() / coefficients.particle_mass);
        if acceleration.length() > eps {
            self.velocity = self.velocity + acceleration.scale(dt);
            if self.velocity.length() < eps {
                self.velocity = Vec3::zero();
            }
            let pos = &mut positions[self.index];
            *pos = *pos + self.velocity.scale(dt);
        }
        self.ground_collision(positions, coefficients);

        self.reset_force();
    }

    /// Clamp the particle onto the ground plane and kill its vertical velocity.
    pub fn ground_collision(&mut self, positions: &mut [Vec3<F>], coefficients: &ClothCoefficients<F>) {
        let floor = coefficients.ground_height + coefficients.epsilon;
        let pos = &mut positions[self.index];
        if pos.y < floor {
            pos.y = floor;
            self.velocity.y = F::zero();
        }
    }

    pub fn reset_force(&mut self) {
        self.force = Vec3::zero();
    }

    pub fn add_normal(&self, normals: &mut [Vec3<F>], normal: Vec3<F>) {
        normals[self.index] = normals[self.index] + normal;
    }

    pub fn reset_normal(&self, normals: &mut [Vec3<F>]) {
        normals[self.index] = Vec3::zero();
    }

    pub fn position(&self, positions: &[Vec3<F>]) -> Vec3<F> {
        positions[self.index]
    }

    pub fn velocity(&self) -> Vec3<F> {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3<F>) {
        self.velocity = velocity;
    }

    /// Force accumulated since the last integration.
    pub fn force(&self) -> Vec3<F> {
        self.force
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn set_fixed(&mut self, fixed: bool) {
        self.fixed = fixed;
    }
}
