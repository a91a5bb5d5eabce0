//! Error types for cloth construction and editing.

use core::fmt;

/// Errors surfaced when a cloth is built or edited with invalid parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid must have at least 2 particles per side.
    InvalidGridDimensions,
    /// Cloth size must be positive and finite.
    InvalidSize,
    /// Mass must be positive and finite.
    InvalidMass,
    /// Horizontal and vertical directions must be non-zero and not parallel.
    DegenerateDirections,
    /// Axis index outside 0..=2.
    InvalidAxis(usize),
    /// Fixed particle index is out of bounds.
    FixedParticleOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions => write!(f, "grid must be at least 2x2 with u32-addressable vertices"),
            ClothError::InvalidSize => write!(f, "cloth size must be positive and finite"),
            ClothError::InvalidMass => write!(f, "mass must be positive and finite"),
            ClothError::DegenerateDirections => {
                write!(f, "grid directions must be non-zero and not parallel")
            }
            ClothError::InvalidAxis(axis) => write!(f, "axis {} is not one of 0, 1, 2", axis),
            ClothError::FixedParticleOutOfBounds { index, count } => {
                write!(f, "fixed particle index {} out of bounds (count: {})", index, count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClothError {}
