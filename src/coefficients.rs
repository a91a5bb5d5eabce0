//! The scalar coefficient set shared by every particle, spring and triangle.

use crate::config::ClothConfig;
use crate::float::Float;
use crate::vec::Vec3;

/// Physical coefficients of a cloth.
///
/// A single instance is owned by [`Cloth`](crate::cloth::Cloth) and handed by
/// reference to every force evaluation, so changing a value here affects the
/// whole network on the next substep without touching topology.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClothCoefficients<F: Float> {
    /// Mass of a single particle.
    pub particle_mass: F,
    /// Magnitude of gravitational acceleration, applied along -y.
    pub gravity: F,
    /// Height of the ground plane.
    pub ground_height: F,
    /// Hooke constant shared by all springs.
    pub spring_const: F,
    /// Damping constant shared by all springs.
    pub damping_const: F,
    /// Rest length of structural (horizontal/vertical) edges.
    pub rest_length: F,
    /// Rest length of shear (diagonal) edges.
    pub shear_rest_length: F,
    /// Density of the surrounding fluid (air).
    pub fluid_density: F,
    /// Aerodynamic drag coefficient.
    pub drag_coeff: F,
    /// Velocity of the surrounding fluid.
    pub wind_velocity: Vec3<F>,
    /// Threshold below which lengths, speeds and accelerations count as zero.
    pub epsilon: F,
}

impl<F: Float> ClothCoefficients<F> {
    /// Coefficients for particles of `particle_mass` on a grid of spacing `rest_length`.
    pub fn from_config(config: &ClothConfig<F>, particle_mass: F, rest_length: F) -> Self {
        ClothCoefficients {
            particle_mass,
            gravity: config.gravity,
            ground_height: config.ground_height,
            spring_const: config.spring_const,
            damping_const: config.damping_const,
            rest_length,
            shear_rest_length: rest_length * F::two().sqrt(),
            fluid_density: config.fluid_density,
            drag_coeff: config.drag_coeff,
            wind_velocity: config.wind_velocity,
            epsilon: config.epsilon,
        }
    }
}
