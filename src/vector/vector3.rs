//! 3D Cartesian vectors, generic over the scalar type.
//!
//! [`Vector3`] is a plain value type: three public components, `Copy` semantics,
//! and no hidden state. Anything that is not geometry (colour, alpha, tags) lives
//! in [`Rgba`](crate::Rgba) and is composed alongside the vector by
//! [`AttributedVector`](crate::AttributedVector).
//!
//! # Magnitude and Normalization
//!
//! [`normalize`](Vector3::normalize) always rescales to unit length and reports a
//! zero-length vector as an error instead of producing NaNs:
//!
//! ```
//! use geom_core::Vector3;
//!
//! let mut v = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.magnitude(), 5.0);
//! v.normalize().unwrap();
//! assert_eq!(v, Vector3::new(0.6, 0.8, 0.0));
//!
//! assert!(Vector3::<f64>::zeros().normalized().is_err());
//! ```
//!
//! [`normalize_if_oversized`](Vector3::normalize_if_oversized) keeps the older
//! conditional policy (rescale only when the length exceeds one) for callers that
//! depend on it.
//!
//! # Axis-Angle Rotation
//!
//! [`rotate`](Vector3::rotate) applies Rodrigues' formula, expanded into the 3x3
//! rotation matrix with `s = sin θ`, `c = cos θ`, `k = 1 - c`:
//!
//! ```text
//! | c + k·ax²         k·ax·ay - s·az    k·ax·az + s·ay |
//! | k·ax·ay + s·az    c + k·ay²         k·ay·az - s·ax |
//! | k·ax·az - s·ay    k·ay·az + s·ax    c + k·az²      |
//! ```
//!
//! The axis must already be unit length; a longer or shorter axis scales the result.
//! Use [`rotate_about`](Vector3::rotate_about) when the axis is not known to be unit.
//!
//! ```
//! use geom_core::Vector3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let v = Vector3::x_axis().rotated(FRAC_PI_2, &Vector3::z_axis());
//! assert!((v.y - 1.0).abs() < 1e-15);
//! ```

use crate::scalar::{euclidean_norm, max_abs};
use crate::{GeomError, GeomResult, Scalar};
use core::fmt;

/// A 3D Cartesian vector.
///
/// Components are public. Equality compares all three components exactly; use a
/// tolerance when comparing computed results.
///
/// ```
/// use geom_core::Vector3;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// let w = Vector3::from_array([1.0, 2.0, 3.0]);
/// let u = Vector3::from_slice(&[1.0, 2.0, 3.0, 99.0]).unwrap();
/// assert_eq!(v, w);
/// assert_eq!(v, u);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Creates a vector from a `[T; 3]` array.
    #[inline]
    pub fn from_array(arr: [T; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Creates a vector from the first three elements of a slice.
    ///
    /// Extra elements are ignored. A slice with fewer than three elements is an
    /// [`InsufficientData`](GeomError::InsufficientData) error.
    pub fn from_slice(values: &[T]) -> GeomResult<Self> {
        match values {
            [x, y, z, ..] => Ok(Self::new(*x, *y, *z)),
            _ => Err(GeomError::insufficient_data(
                "Vector3::from_slice",
                3,
                values.len(),
            )),
        }
    }

    /// Returns the components as a `[T; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Overwrites all three components at once.
    #[inline]
    pub fn set_xyz(&mut self, xyz: [T; 3]) {
        self.x = xyz[0];
        self.y = xyz[1];
        self.z = xyz[2];
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i]` or the public fields directly.
    pub fn get(&self, index: usize) -> GeomResult<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(GeomError::index_out_of_range("Vector3::get", index, 3)),
        }
    }

    /// Sets the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2 and leaves the vector unchanged.
    pub fn set(&mut self, index: usize, value: T) -> GeomResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(GeomError::index_out_of_range("Vector3::set", index, 3)),
        }
        Ok(())
    }

    /// Adds one to every component in place.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        *self = self.add_scalar(T::one());
        self
    }

    /// Subtracts one from every component in place.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        *self = self.sub_scalar(T::one());
        self
    }

    /// Returns `self + s` with the scalar broadcast to all three components.
    ///
    /// The `+` operator covers this for `f32` and `f64`; this method works for any
    /// [`Scalar`].
    #[inline]
    pub fn add_scalar(&self, s: T) -> Self {
        Self::new(self.x + s, self.y + s, self.z + s)
    }

    /// Returns `self - s` with the scalar broadcast to all three components.
    #[inline]
    pub fn sub_scalar(&self, s: T) -> Self {
        Self::new(self.x - s, self.y - s, self.z - s)
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    ///
    /// Stays finite and nonzero for finite, nonzero components whose squares
    /// would overflow or underflow:
    ///
    /// ```
    /// use geom_core::Vector3;
    ///
    /// assert_eq!(Vector3::new(1e200, 0.0, 0.0).magnitude(), 1e200);
    /// assert_eq!(Vector3::<f32>::new(1e-23, 0.0, 0.0).magnitude(), 1e-23);
    /// ```
    #[inline]
    pub fn magnitude(&self) -> T {
        euclidean_norm(&self.to_array())
    }

    /// Returns the squared magnitude.
    ///
    /// Cheaper than [`magnitude`](Self::magnitude) when only comparing lengths. The
    /// raw sum of squares can overflow to infinity or underflow to zero for extreme
    /// components.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Rescales the vector to unit length in place.
    ///
    /// Fails with [`MathErrorKind::DivisionByZero`](crate::MathErrorKind::DivisionByZero)
    /// for the zero vector (or `NotFinite` for a NaN/infinite magnitude) and leaves the
    /// vector unchanged in that case.
    pub fn normalize(&mut self) -> GeomResult<&mut Self> {
        let mut mag = self.magnitude();
        if mag == T::zero() || mag.is_nan() {
            return Err(GeomError::degenerate_magnitude(
                "Vector3::normalize",
                mag == T::zero(),
            ));
        }
        if !mag.is_finite() || mag < T::min_positive_value() {
            // The norm itself overflows or is subnormal: bring the largest
            // component to one first.
            let scale = max_abs(&self.to_array());
            if !scale.is_finite() {
                return Err(GeomError::degenerate_magnitude("Vector3::normalize", false));
            }
            *self /= scale;
            mag = self.magnitude();
        }
        *self /= mag;
        Ok(self)
    }

    /// Returns a unit vector pointing in the same direction.
    pub fn normalized(&self) -> GeomResult<Self> {
        let mut v = *self;
        v.normalize()?;
        Ok(v)
    }

    /// Rescales to unit length only when the squared magnitude exceeds one.
    ///
    /// Vectors already no longer than one are left as they are, so the result is
    /// guaranteed to have magnitude `<= 1`, not `== 1`.
    pub fn normalize_if_oversized(&mut self) -> &mut Self {
        let m2 = self.magnitude_squared();
        if m2 > T::one() {
            log::trace!("rescaling oversized vector, squared magnitude {:?}", m2);
            let mag = self.magnitude();
            *self /= mag;
        }
        self
    }

    /// Returns the Euclidean distance to another vector.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).magnitude()
    }

    /// Returns the squared distance to another vector.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Computes the dot product with another vector.
    ///
    /// ```
    /// use geom_core::Vector3;
    ///
    /// let c = Vector3::new(1.0, 2.0, 3.0);
    /// let d = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(c.dot(&d), 32.0);  // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product with another vector.
    ///
    /// ```
    /// use geom_core::Vector3;
    ///
    /// let z = Vector3::<f64>::x_axis().cross(&Vector3::y_axis());
    /// assert_eq!(z, Vector3::z_axis());  // X × Y = Z
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the angle between two vectors in radians, in `[0, π]`.
    ///
    /// Equal to `acos(a·b / (|a||b|))`, evaluated as `atan2(|a×b|, a·b)` which stays
    /// accurate for nearly parallel and antiparallel vectors. Either vector having
    /// zero length is a [`DivisionByZero`](crate::MathErrorKind::DivisionByZero) error;
    /// a NaN or infinite component is [`NotFinite`](crate::MathErrorKind::NotFinite).
    pub fn angle(&self, other: &Self) -> GeomResult<T> {
        let a = self.scaled_to_unit_max("Vector3::angle")?;
        let b = other.scaled_to_unit_max("Vector3::angle")?;
        Ok(a.cross(&b).magnitude().atan2(a.dot(&b)))
    }

    /// Divides by the largest absolute component, keeping the direction while
    /// moving every component into `[-1, 1]`.
    fn scaled_to_unit_max(&self, operation: &'static str) -> GeomResult<Self> {
        let scale = max_abs(&self.to_array());
        if scale == T::zero() || !scale.is_finite() {
            return Err(GeomError::degenerate_magnitude(operation, scale == T::zero()));
        }
        Ok(*self / scale)
    }

    /// Returns this vector rotated by `theta` radians about a unit `axis`.
    ///
    /// The axis is trusted to be unit length. Positive angles rotate
    /// counterclockwise when looking from the tip of the axis toward the origin.
    pub fn rotated(&self, theta: T, axis: &Self) -> Self {
        let (s, c) = theta.sin_cos();
        let k = T::one() - c;
        let (ax, ay, az) = (axis.x, axis.y, axis.z);

        Self::new(
            self.x * (c + k * ax * ax)
                + self.y * (k * ax * ay - s * az)
                + self.z * (k * ax * az + s * ay),
            self.x * (k * ax * ay + s * az)
                + self.y * (c + k * ay * ay)
                + self.z * (k * ay * az - s * ax),
            self.x * (k * ax * az - s * ay)
                + self.y * (k * ay * az + s * ax)
                + self.z * (c + k * az * az),
        )
    }

    /// Rotates this vector in place by `theta` radians about a unit `axis`.
    pub fn rotate(&mut self, theta: T, axis: &Self) -> &mut Self {
        *self = self.rotated(theta, axis);
        self
    }

    /// Rotates in place about an axis of any nonzero length.
    ///
    /// The axis is normalized first; a zero axis is an error and leaves the vector
    /// unchanged.
    pub fn rotate_about(&mut self, theta: T, axis: &Self) -> GeomResult<&mut Self> {
        let unit = axis.normalized()?;
        Ok(self.rotate(theta, &unit))
    }
}

impl<T: Scalar> Default for Vector3<T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    fn from(arr: [T; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        v.to_array()
    }
}

/// Dot product of two vectors.
#[inline]
pub fn dot<T: Scalar>(lhs: &Vector3<T>, rhs: &Vector3<T>) -> T {
    lhs.dot(rhs)
}

/// Cross product of two vectors.
#[inline]
pub fn cross<T: Scalar>(lhs: &Vector3<T>, rhs: &Vector3<T>) -> Vector3<T> {
    lhs.cross(rhs)
}

/// Magnitude of a vector.
#[inline]
pub fn mag<T: Scalar>(v: &Vector3<T>) -> T {
    v.magnitude()
}

/// Angle between two vectors in radians. See [`Vector3::angle`].
#[inline]
pub fn angle<T: Scalar>(lhs: &Vector3<T>, rhs: &Vector3<T>) -> GeomResult<T> {
    lhs.angle(rhs)
}

/// Returns `v` rotated by `theta` radians about a unit `axis`. See [`Vector3::rotated`].
#[inline]
pub fn rotate<T: Scalar>(theta: T, axis: &Vector3<T>, v: &Vector3<T>) -> Vector3<T> {
    v.rotated(theta, axis)
}

/// v[i] indexing (panics if i > 2)
impl<T> core::ops::Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

/// v[i] = value mutable indexing (panics if i > 2)
impl<T> core::ops::IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
