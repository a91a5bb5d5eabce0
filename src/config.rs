//! Configuration types for a cloth simulation.

use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// Initial coefficients and solver settings for a [`Cloth`](crate::cloth::Cloth).
///
/// # Builder Pattern
/// ```
/// use drape::config::ClothConfig;
/// use drape::vec::Vec3;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_oversamples(40)
///     .with_spring_const(500.0)
///     .with_wind_velocity(Vec3::new(0.0, 0.0, -4.0));
/// ```
#[derive(Clone, Debug)]
pub struct ClothConfig<F: Float> {
    /// Integration substeps per frame. Higher = more stable. Default: 20.
    pub oversamples: usize,
    /// Hooke constant of every spring. Default: 1000.
    pub spring_const: F,
    /// Damping constant of every spring. Default: 3.5.
    pub damping_const: F,
    /// Gravitational acceleration (magnitude, along -y). Default: 2.0.
    pub gravity: F,
    /// Ground height. Lowered below the cloth origin if needed. Default: 0.0.
    pub ground_height: F,
    /// Fluid density for drag. Default: 1.225 (air).
    pub fluid_density: F,
    /// Drag coefficient. Default: 1.0.
    pub drag_coeff: F,
    /// Wind velocity. Default: (0.5, 0.5, -2.5).
    pub wind_velocity: Vec3<F>,
    /// Zero threshold for guards and the ground offset. Default: 1e-4.
    pub epsilon: F,
    /// Upper bound on a single frame's time step, in seconds. Default: 0.1.
    pub max_frame_time: F,
    /// Horizontal corner (x, z) of the visual ground quad. Default: (-5, -5).
    pub ground_corner: (F, F),
    /// Edge length of the visual ground quad. Default: 10.
    pub ground_extent: F,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ClothConfig {
            oversamples: 20,
            spring_const: F::from_f32(1000.0),
            damping_const: F::from_f32(3.5),
            gravity: F::two(),
            ground_height: F::zero(),
            fluid_density: F::from_f32(1.225),
            drag_coeff: F::one(),
            wind_velocity: Vec3::new(F::half(), F::half(), F::from_f32(-2.5)),
            epsilon: F::from_f32(1e-4),
            max_frame_time: F::from_f32(0.1),
            ground_corner: (F::from_f32(-5.0), F::from_f32(-5.0)),
            ground_extent: F::from_f32(10.0),
        }
    }

    /// Set the number of substeps per frame.
    pub fn with_oversamples(mut self, oversamples: usize) -> Self {
        self.oversamples = oversamples.max(1);
        self
    }

    pub fn with_spring_const(mut self, spring_const: F) -> Self {
        self.spring_const = spring_const;
        self
    }

    pub fn with_damping_const(mut self, damping_const: F) -> Self {
        self.damping_const = damping_const;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_ground_height(mut self, ground_height: F) -> Self {
        self.ground_height = ground_height;
        self
    }

    pub fn with_fluid_density(mut self, fluid_density: F) -> Self {
        self.fluid_density = fluid_density;
        self
    }

    pub fn with_drag_coeff(mut self, drag_coeff: F) -> Self {
        self.drag_coeff = drag_coeff;
        self
    }

    pub fn with_wind_velocity(mut self, wind_velocity: Vec3<F>) -> Self {
        self.wind_velocity = wind_velocity;
        self
    }

    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    /// Set the frame time clamp in seconds.
    pub fn with_max_frame_time(mut self, max_frame_time: F) -> Self {
        self.max_frame_time = max_frame_time.max(F::zero());
        self
    }

    /// Place and size the visual ground quad.
    pub fn with_ground_quad(mut self, corner_x: F, corner_z: F, extent: F) -> Self {
        self.ground_corner = (corner_x, corner_z);
        self.ground_extent = extent;
        self
    }

    /// Disable gravity, wind and drag. Handy for equilibrium checks.
    pub fn still_air(self) -> Self {
        self.with_gravity(F::zero())
            .with_wind_velocity(Vec3::zero())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
