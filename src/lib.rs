//! Generic 3D vector and quaternion primitives.
//!
//! `geom-core` provides the value types used as building blocks for geometric
//! computation: a 3-component vector, a colour/alpha payload that travels with it,
//! and a quaternion for composing and applying rotations. Everything is generic
//! over the floating-point scalar ([`Scalar`]), so `f32` and `f64` share one
//! implementation.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vector`] | [`Vector3`], arithmetic operators, dot/cross/angle, axis-angle rotation |
//! | [`attributes`] | [`Rgba`] payload and [`AttributedVector`] |
//! | [`quaternion`] | [`Quaternion`]: Hamilton product, vector rotation |
//! | [`scalar`] | The [`Scalar`] bound |
//! | [`errors`] | [`GeomError`] and [`GeomResult`] |
//!
//! # Example
//!
//! ```
//! use geom_core::{Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(a.cross(&b), Vector3::new(0.0, 0.0, 1.0));
//! assert!((a.angle(&b)? - FRAC_PI_2).abs() < 1e-15);
//!
//! // The same quarter turn, two ways.
//! let by_matrix = a.rotated(FRAC_PI_2, &Vector3::z_axis());
//! let by_quaternion = Quaternion::from_axis_angle(Vector3::z_axis(), FRAC_PI_2).rotated_xyz(&a);
//! assert!(by_matrix.distance(&by_quaternion) < 1e-15);
//! # Ok::<(), geom_core::GeomError>(())
//! ```
//!
//! # Design Notes
//!
//! - **Radians throughout**: every angle argument and result is in radians.
//!
//! - **Unit operands are a precondition**: [`Vector3::rotate`] and
//!   [`Quaternion::rotate_xyz`] trust that their axis or quaternion is unit length.
//!   [`Vector3::rotate_about`] and [`Quaternion::normalize`] exist for inputs that
//!   are not known to be unit.
//!
//! - **Degenerate inputs are errors**: normalizing a zero vector or measuring its
//!   angle returns [`MathErrorKind::DivisionByZero`] rather than NaN.
//!
//! - **Pure values**: all types are `Copy`, hold no shared state, and are
//!   `Send + Sync`.

pub mod attributes;
pub mod errors;
pub mod quaternion;
pub mod scalar;
pub mod vector;

pub use attributes::{AttributedVector, Rgba};
pub use errors::{GeomError, GeomResult, MathErrorKind};
pub use quaternion::Quaternion;
pub use scalar::Scalar;
pub use vector::Vector3;

#[doc(hidden)]
pub mod test_helpers;
