//! 3D vectors and the free functions that operate on them.
//!
//! - [`Vector3`]: generic 3D Cartesian vector
//! - [`dot`], [`cross`], [`mag`], [`angle`], [`rotate`]: free-function forms of the
//!   corresponding methods

mod ops;
mod vector3;

pub use vector3::{angle, cross, dot, mag, rotate, Vector3};
