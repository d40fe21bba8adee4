//! Quaternions for composing and applying 3D rotations.
//!
//! A [`Quaternion`] stores `(x, y, z, w)` with the scalar part last. Only unit
//! quaternions represent rotations; the rotation routines assume unit norm and do
//! not check it, so normalize first when the input is not already known to be unit.
//!
//! # Composition
//!
//! The Hamilton product composes rotations right to left: rotating by
//! `q1.mult(&q2)` is the same as rotating by `q2` and then by `q1`.
//!
//! ```
//! use geom_core::{Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let about_z = Quaternion::from_axis_angle(Vector3::z_axis(), FRAC_PI_2);
//! let about_x = Quaternion::from_axis_angle(Vector3::x_axis(), FRAC_PI_2);
//!
//! let v = Vector3::new(1.0, 0.0, 0.0);
//! let step_by_step = about_x.rotated_xyz(&about_z.rotated_xyz(&v));
//! let composed = about_x.mult(&about_z).rotated_xyz(&v);
//!
//! assert!(step_by_step.distance(&composed) < 1e-15);
//! assert!(composed.distance(&Vector3::new(0.0, 0.0, 1.0)) < 1e-15);
//! ```
//!
//! # Applying to Vectors
//!
//! [`rotate_xyz`](Quaternion::rotate_xyz) and [`rotated_xyz`](Quaternion::rotated_xyz)
//! evaluate `q·v·q⁻¹` through its closed-form rotation matrix:
//!
//! ```text
//! | 1 - 2y² - 2z²    2xy - 2wz        2xz + 2wy     |
//! | 2xy + 2wz        1 - 2x² - 2z²    2yz - 2wx     |
//! | 2xz - 2wy        2yz + 2wx        1 - 2x² - 2y² |
//! ```

use crate::scalar::{euclidean_norm, max_abs};
use crate::{GeomError, GeomResult, Scalar, Vector3};
use core::fmt;

/// A quaternion `x·i + y·j + z·k + w`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Quaternion<T> {
    /// Creates a quaternion from raw components.
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The identity rotation `(0, 0, 0, 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Rotation of `theta` radians about `axis`.
    ///
    /// The axis is rescaled only when it is longer than one. An axis shorter than
    /// one is used as given and yields a quaternion of norm below one, which is not
    /// a pure rotation; normalize such axes first or use
    /// [`from_unit_axis_angle`](Self::from_unit_axis_angle) with a known-unit axis.
    pub fn from_axis_angle(axis: Vector3<T>, theta: T) -> Self {
        let mut axis = axis;
        axis.normalize_if_oversized();
        Self::from_unit_axis_angle(axis, theta)
    }

    /// Rotation of `theta` radians about an axis already known to be unit length.
    ///
    /// Skips the length check done by [`from_axis_angle`](Self::from_axis_angle).
    #[inline]
    pub fn from_unit_axis_angle(axis: Vector3<T>, theta: T) -> Self {
        let (s, c) = (theta / T::two()).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Hamilton product `self * q`.
    ///
    /// Associative but not commutative. The product of two unit quaternions is the
    /// rotation that applies `q` first, then `self`.
    pub fn mult(&self, q: &Self) -> Self {
        Self::new(
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y - self.x * q.z + self.y * q.w + self.z * q.x,
            self.w * q.z + self.x * q.y - self.y * q.x + self.z * q.w,
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
        )
    }

    /// Returns `v` rotated by this (unit) quaternion.
    pub fn rotated_xyz(&self, v: &Vector3<T>) -> Vector3<T> {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let one = T::one();
        let two = T::two();

        Vector3::new(
            v.x * (one - two * y * y - two * z * z)
                + v.y * (two * x * y - two * w * z)
                + v.z * (two * x * z + two * w * y),
            v.x * (two * x * y + two * w * z)
                + v.y * (one - two * x * x - two * z * z)
                + v.z * (two * y * z - two * w * x),
            v.x * (two * x * z - two * w * y)
                + v.y * (two * y * z + two * w * x)
                + v.z * (one - two * x * x - two * y * y),
        )
    }

    /// Rotates `v` in place by this (unit) quaternion.
    ///
    /// All three input components are read before any is written.
    pub fn rotate_xyz(&self, v: &mut Vector3<T>) {
        *v = self.rotated_xyz(v);
    }

    /// Returns the conjugate `(-x, -y, -z, w)`, the inverse of a unit quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the norm `√(x² + y² + z² + w²)`.
    ///
    /// Like [`Vector3::magnitude`], stays finite and nonzero when the component
    /// squares would overflow or underflow.
    #[inline]
    pub fn magnitude(&self) -> T {
        euclidean_norm(&self.to_array())
    }

    /// Returns the squared norm, without guarding against overflow or underflow.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Returns the components as `[x, y, z, w]`.
    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Rescales to unit norm in place.
    ///
    /// A zero norm is [`DivisionByZero`](crate::MathErrorKind::DivisionByZero), a NaN
    /// or infinite component is [`NotFinite`](crate::MathErrorKind::NotFinite), and in
    /// both cases the quaternion is left unchanged.
    pub fn normalize(&mut self) -> GeomResult<&mut Self> {
        let mut mag = self.magnitude();
        if mag == T::zero() || mag.is_nan() {
            return Err(GeomError::degenerate_magnitude(
                "Quaternion::normalize",
                mag == T::zero(),
            ));
        }
        if !mag.is_finite() || mag < T::min_positive_value() {
            let scale = max_abs(&self.to_array());
            if !scale.is_finite() {
                return Err(GeomError::degenerate_magnitude("Quaternion::normalize", false));
            }
            self.divide(scale);
            mag = self.magnitude();
        }
        self.divide(mag);
        Ok(self)
    }

    /// Returns a unit-norm copy. See [`normalize`](Self::normalize).
    pub fn normalized(&self) -> GeomResult<Self> {
        let mut q = *self;
        q.normalize()?;
        Ok(q)
    }

    /// Rescales only when the squared norm exceeds one; shorter quaternions are
    /// left untouched.
    pub fn normalize_if_oversized(&mut self) -> &mut Self {
        let m2 = self.magnitude_squared();
        if m2 > T::one() {
            log::trace!("rescaling oversized quaternion, squared norm {:?}", m2);
            let mag = self.magnitude();
            self.divide(mag);
        }
        self
    }

    fn divide(&mut self, divisor: T) {
        self.x = self.x / divisor;
        self.y = self.y / divisor;
        self.z = self.z / divisor;
        self.w = self.w / divisor;
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Quaternion * Quaternion (Hamilton product)
impl<T: Scalar> core::ops::Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mult(&rhs)
    }
}

/// Quaternion * Vector3 (rotation)
impl<T: Scalar> core::ops::Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.rotated_xyz(&v)
    }
}

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{assert_quat_near, assert_vec3_near};
    use crate::MathErrorKind;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_construction() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((q.x, q.y, q.z, q.w), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(Quaternion::<f64>::default(), Quaternion::identity());
    }

    #[test]
    fn test_from_axis_angle_components() {
        let q = Quaternion::from_axis_angle(Vector3::z_axis(), FRAC_PI_2);
        let h = (0.5_f64).sqrt();
        assert_quat_near(&q, &Quaternion::new(0.0, 0.0, h, h), 1e-15);
        assert!((q.magnitude() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_from_axis_angle_rescales_long_axis() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 4.0), PI);
        assert_quat_near(&q, &Quaternion::new(0.0, 0.0, 1.0, 0.0), 1e-15);
    }

    #[test]
    fn test_from_axis_angle_keeps_short_axis() {
        // Sub-unit axes pass through unscaled, giving a non-unit quaternion.
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 0.5), PI);
        assert_quat_near(&q, &Quaternion::new(0.0, 0.0, 0.5, 0.0), 1e-15);
        assert!(q.magnitude() < 1.0);
    }

    #[test]
    fn test_from_unit_axis_angle_matches_checked() {
        let axis = Vector3::y_axis();
        assert_eq!(
            Quaternion::from_unit_axis_angle(axis, 0.4),
            Quaternion::from_axis_angle(axis, 0.4)
        );
    }

    #[test]
    fn test_half_turn_about_x() {
        let q = Quaternion::from_axis_angle(Vector3::new(1.0, 0.0, 0.0), PI);
        let r = q.rotated_xyz(&Vector3::new(0.0, 1.0, 0.0));
        assert_vec3_near(&r, &Vector3::new(0.0, -1.0, 0.0), 1e-15);
    }

    #[test]
    fn test_rotate_in_place_matches_pure() {
        let q = Quaternion::from_axis_angle(Vector3::new(1.0, -1.0, 0.5), 1.1)
            .normalized()
            .unwrap();
        let v = Vector3::new(2.0, 3.0, -1.0);
        let mut w = v;
        q.rotate_xyz(&mut w);
        assert_eq!(w, q.rotated_xyz(&v));
        assert_eq!(w, q * v);
    }

    #[test]
    fn test_identity_rotation() {
        let v = Vector3::new(2.0, 3.0, -1.0);
        assert_eq!(Quaternion::identity().rotated_xyz(&v), v);
    }

    #[test]
    fn test_mult_basis_units() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let minus_one = Quaternion::new(0.0, 0.0, 0.0, -1.0);

        assert_eq!(i.mult(&j), k);
        assert_eq!(j.mult(&k), i);
        assert_eq!(k.mult(&i), j);
        assert_eq!(j.mult(&i), Quaternion::new(0.0, 0.0, -1.0, 0.0));
        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i.mult(&j).mult(&k), minus_one);
    }

    #[test]
    fn test_mult_not_commutative() {
        let a: Quaternion = Quaternion::from_axis_angle(Vector3::x_axis(), 0.3);
        let b = Quaternion::from_axis_angle(Vector3::y_axis(), 0.5);
        let ab = a.mult(&b);
        let ba = b.mult(&a);
        assert!((ab.z - ba.z).abs() > 1e-3);
    }

    #[test]
    fn test_mult_identity() {
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        assert_eq!(q.mult(&Quaternion::identity()), q);
        assert_eq!(Quaternion::identity().mult(&q), q);
    }

    #[test]
    fn test_conjugate_inverts_unit_quaternion() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.6, 0.8), 1.3);
        assert_quat_near(&q.mult(&q.conjugate()), &Quaternion::identity(), 1e-15);
    }

    #[test]
    fn test_magnitude() {
        let q = Quaternion::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(q.magnitude_squared(), 25.0);
        assert_eq!(q.magnitude(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let mut q = Quaternion::new(0.0, 0.0, 0.0, 0.5);
        q.normalize().unwrap();
        assert_eq!(q, Quaternion::identity());

        let q: Quaternion = Quaternion::new(1.0, 2.0, 2.0, 4.0).normalized().unwrap();
        assert!((q.magnitude() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_normalize_matches_vector_rounding() {
        let q = Quaternion::new(0.3, -1.7, 2.9, 0.0).normalized().unwrap();
        let v = Vector3::new(0.3, -1.7, 2.9).normalized().unwrap();
        assert_eq!((q.x, q.y, q.z), (v.x, v.y, v.z));
        assert_eq!(q.w, 0.0);
    }

    #[test]
    fn test_magnitude_of_extreme_components() {
        assert_eq!(Quaternion::<f32>::new(0.0, 0.0, 0.0, 2.0e19).magnitude(), 2.0e19);
        assert_eq!(Quaternion::<f32>::new(1.0e-23, 0.0, 0.0, 0.0).magnitude(), 1.0e-23);
        assert_eq!(Quaternion::new(0.0, 1.0e200, 0.0, 0.0).magnitude(), 1.0e200);
    }

    #[test]
    fn test_normalize_extreme_components() {
        let big = Quaternion::<f32>::new(0.0, 0.0, 0.0, 2.0e19).normalized().unwrap();
        assert_eq!(big, Quaternion::identity());

        let tiny = Quaternion::<f32>::new(0.0, 0.0, 0.0, 1.0e-23).normalized().unwrap();
        assert_eq!(tiny, Quaternion::identity());

        let huge = Quaternion::<f32>::new(3.0e38, 0.0, 0.0, 3.0e38).normalized().unwrap();
        let h = core::f32::consts::FRAC_1_SQRT_2;
        assert!((huge.x - h).abs() < 1e-6);
        assert!((huge.w - h).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_non_finite_is_error() {
        let mut q = Quaternion::new(f64::INFINITY, 0.0, 0.0, 1.0);
        let err = q.normalize().unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::NotFinite));
        assert_eq!(q.x, f64::INFINITY);

        let err = Quaternion::new(f64::NAN, 0.0, 0.0, 1.0).normalized().unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::NotFinite));
    }

    #[test]
    fn test_normalize_zero_is_error() {
        let mut q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        let err = q.normalize().unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::DivisionByZero));
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_normalize_if_oversized() {
        let mut long = Quaternion::new(0.0, 0.0, 0.0, 2.0);
        long.normalize_if_oversized();
        assert_eq!(long, Quaternion::identity());

        let mut short = Quaternion::new(0.0, 0.0, 0.0, 0.5);
        short.normalize_if_oversized();
        assert_eq!(short, Quaternion::new(0.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_display() {
        let q = Quaternion::new(0.5, -1.0, 0.0, 2.0);
        assert_eq!(q.to_string(), "(0.5, -1, 0, 2)");
    }
}
