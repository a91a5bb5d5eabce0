//! Vector types and traits for physics calculations.

use crate::error::ClothError;
use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// Trait for vector types used in physics calculations.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(Self::Scalar::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(Self::Scalar::one() / len)
        }
    }

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }
}

/// Cartesian axis, used to pick the component a fixed-point edit acts on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl TryFrom<usize> for Axis {
    type Error = ClothError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            other => Err(ClothError::InvalidAxis(other)),
        }
    }
}

/// 3D vector for particle positions, velocities, forces and normals.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Unit vector pointing up (+y).
    pub fn up() -> Self { Vec3::new(F::zero(), F::one(), F::zero()) }

    /// 3D cross product.
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn component(self, axis: Axis) -> F {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy of `self` with one component replaced.
    pub fn with_component(mut self, axis: Axis, value: F) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }

    /// Unit vector along `axis` scaled by `amount`.
    pub fn along(axis: Axis, amount: F) -> Self {
        Self::zero().with_component(axis, amount)
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
}

/// Row-major 3x3 rotation matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotation3<F: Float> {
    rows: [Vec3<F>; 3],
}

impl<F: Float> Rotation3<F> {
    /// Elementary right-handed rotation of `angle` radians about a coordinate axis.
    pub fn about_axis(axis: Axis, angle: F) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let (o, l) = (F::zero(), F::one());
        let rows = match axis {
            Axis::X => [Vec3::new(l, o, o), Vec3::new(o, c, -s), Vec3::new(o, s, c)],
            Axis::Y => [Vec3::new(c, o, s), Vec3::new(o, l, o), Vec3::new(-s, o, c)],
            Axis::Z => [Vec3::new(c, -s, o), Vec3::new(s, c, o), Vec3::new(o, o, l)],
        };
        Rotation3 { rows }
    }

    pub fn rotate(&self, v: Vec3<F>) -> Vec3<F> {
        Vec3::new(self.rows[0].dot(v), self.rows[1].dot(v), self.rows[2].dot(v))
    }

    /// Rotate `point` rigidly about `pivot`.
    pub fn rotate_about(&self, point: Vec3<F>, pivot: Vec3<F>) -> Vec3<F> {
        pivot + self.rotate(point - pivot)
    }
}
