//! Colour/alpha payloads carried alongside vectors.
//!
//! [`Rgba`] holds four integer-like attributes that have no effect on vector
//! algebra. [`AttributedVector`] pairs a [`Vector3`] with an [`Rgba`] for call
//! sites (vertex buffers, point clouds) that need both:
//!
//! ```
//! use geom_core::{AttributedVector, Rgba, Vector3};
//!
//! let mut p = AttributedVector::from_xyz_rgb(1.0, 2.0, 3.0, 255, 128, 0);
//! p.position.rotate(std::f64::consts::PI, &Vector3::z_axis());
//! assert_eq!(p.attributes, Rgba::new(255, 128, 0, 0));
//!
//! // Attributes never take part in equality.
//! let q = AttributedVector::<f64, i32>::new(p.position, Rgba::default());
//! assert_eq!(p, q);
//! ```

use crate::{GeomError, GeomResult, Scalar, Vector3};
use core::fmt;

/// Red, green, blue and alpha attributes.
///
/// All fields default to zero (`U::default()`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba<U = i32> {
    pub r: U,
    pub g: U,
    pub b: U,
    pub a: U,
}

impl<U: Copy + Default> Rgba<U> {
    /// Creates attributes from all four channels.
    #[inline]
    pub fn new(r: U, g: U, b: U, a: U) -> Self {
        Self { r, g, b, a }
    }

    /// Colour without alpha; `a` is zero.
    #[inline]
    pub fn rgb(r: U, g: U, b: U) -> Self {
        Self::new(r, g, b, U::default())
    }

    /// Creates attributes from an `[r, g, b, a]` array.
    #[inline]
    pub fn from_array(rgba: [U; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Reads the first four elements of a slice.
    ///
    /// A slice with fewer than four elements is an
    /// [`InsufficientData`](GeomError::InsufficientData) error.
    pub fn from_slice(values: &[U]) -> GeomResult<Self> {
        match values {
            [r, g, b, a, ..] => Ok(Self::new(*r, *g, *b, *a)),
            _ => Err(GeomError::insufficient_data(
                "Rgba::from_slice",
                4,
                values.len(),
            )),
        }
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    pub fn to_array(&self) -> [U; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the colour channels as `[r, g, b]`.
    #[inline]
    pub fn rgb_array(&self) -> [U; 3] {
        [self.r, self.g, self.b]
    }

    /// Overwrites the colour channels, leaving alpha alone.
    #[inline]
    pub fn set_rgb(&mut self, rgb: [U; 3]) {
        self.r = rgb[0];
        self.g = rgb[1];
        self.b = rgb[2];
    }
}

/// A [`Vector3`] with an [`Rgba`] payload.
///
/// Equality compares `position` only.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributedVector<T = f64, U = i32> {
    pub position: Vector3<T>,
    pub attributes: Rgba<U>,
}

impl<T: Scalar, U: Copy + Default> AttributedVector<T, U> {
    /// Pairs a position with its attributes.
    #[inline]
    pub fn new(position: Vector3<T>, attributes: Rgba<U>) -> Self {
        Self {
            position,
            attributes,
        }
    }

    /// Zero position, zero attributes.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(Vector3::zeros(), Rgba::default())
    }

    /// Position from components, zero attributes.
    #[inline]
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        Self::new(Vector3::new(x, y, z), Rgba::default())
    }

    /// Position and colour; alpha is zero.
    #[inline]
    pub fn from_xyz_rgb(x: T, y: T, z: T, r: U, g: U, b: U) -> Self {
        Self::new(Vector3::new(x, y, z), Rgba::rgb(r, g, b))
    }

    /// Position and all four attribute channels.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn from_xyz_rgba(x: T, y: T, z: T, r: U, g: U, b: U, a: U) -> Self {
        Self::new(Vector3::new(x, y, z), Rgba::new(r, g, b, a))
    }

    /// Position from a coordinate slice (at least 3 elements), zero attributes.
    pub fn from_coordinates(xyz: &[T]) -> GeomResult<Self> {
        Ok(Self::new(Vector3::from_slice(xyz)?, Rgba::default()))
    }

    /// Position and attributes from a coordinate slice (at least 3 elements) and an
    /// attribute slice (at least 4 elements).
    pub fn from_slices(xyz: &[T], rgba: &[U]) -> GeomResult<Self> {
        Ok(Self::new(Vector3::from_slice(xyz)?, Rgba::from_slice(rgba)?))
    }

    /// X coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.position.x
    }

    /// Y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.position.y
    }

    /// Z coordinate.
    #[inline]
    pub fn z(&self) -> T {
        self.position.z
    }

    /// Red channel.
    #[inline]
    pub fn r(&self) -> U {
        self.attributes.r
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> U {
        self.attributes.g
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> U {
        self.attributes.b
    }

    /// Alpha channel.
    #[inline]
    pub fn a(&self) -> U {
        self.attributes.a
    }
}

impl<T: Scalar, U: Copy + Default> Default for AttributedVector<T, U> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, U: Copy + Default> From<Vector3<T>> for AttributedVector<T, U> {
    fn from(position: Vector3<T>) -> Self {
        Self::new(position, Rgba::default())
    }
}

impl<T: PartialEq, U> PartialEq for AttributedVector<T, U> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T: fmt::Display, U> fmt::Display for AttributedVector<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.position, f)
    }
}
