//! Mass-spring-damper cloth simulation.
//!
//! `drape` simulates a square sheet of cloth as an N x N grid of point masses
//! joined by spring-dampers, pushed around by gravity and aerodynamic drag and
//! kept above a horizontal ground plane. Each frame is advanced with explicit
//! Euler integration split into many small substeps, which keeps stiff springs
//! stable without an implicit solver.
//!
//! # Features
//!
//! - **Spring-damper network**: Structural and shear edges per grid quad
//! - **Aerodynamic drag**: Per-triangle drag against a configurable wind
//! - **Ground collision**: Particles clamp onto a horizontal plane
//! - **Live tuning**: One shared coefficient set, edited through `Cloth`
//! - **Fixed-point editing**: Translate, rotate or place the pinned first row
//! - **Renderer-agnostic**: Buffers are handed to a `MeshRenderer` you provide
//! - **Observable**: Monitor substeps via the `StepObserver` trait
//! - **`no_std` compatible**: Disable the default `std` feature and drive time yourself
//!
//! # Example
//!
//! ```
//! use drape::{Cloth, ClothConfig, ClothDesc, NoOpStepObserver, Vec3};
//!
//! let desc = ClothDesc {
//!     size: 4.0f32,
//!     total_mass: 100.0,
//!     resolution: 25,
//!     top_left: Vec3::new(-2.0, 3.0, 0.0),
//!     horizontal: Vec3::new(1.0, 0.0, 0.0),
//!     vertical: Vec3::new(0.0, -1.0, 0.0),
//! };
//! let mut cloth = Cloth::new(&desc, &ClothConfig::new()).unwrap();
//! cloth.step(1.0 / 60.0, &mut NoOpStepObserver);
//! assert_eq!(cloth.positions().len(), 25 * 25);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod coefficients;
pub mod config;
pub mod particle;
pub mod spring;
pub mod triangle;
pub mod ground;
pub mod render;
pub mod timer;
pub mod observer;
pub mod cloth;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec3, Axis, Rotation3};
pub use coefficients::ClothCoefficients;
pub use config::ClothConfig;
pub use particle::Particle;
pub use spring::{SpringDamper, EdgeKind};
pub use triangle::Triangle;
pub use ground::Ground;
pub use render::{MeshRenderer, MeshView, DrawParams};
pub use timer::FrameTimer;
pub use observer::{StepObserver, NoOpStepObserver};
pub use cloth::{Cloth, ClothDesc};
pub use error::ClothError;
