//! The scalar bound shared by [`Vector3`](crate::Vector3) and
//! [`Quaternion`](crate::Quaternion).
//!
//! Any `num_traits::Float` type qualifies, so `f32` and `f64` both work out of the
//! box. Transcendental functions (`sqrt`, `sin_cos`, `atan2`) route through `libm`
//! via the `num-traits` `libm` backend, giving the same results with or without `std`.

use core::fmt::Debug;
use num_traits::Float;

/// Floating-point scalar usable as a vector or quaternion component.
pub trait Scalar: Float + Debug {
    /// `2`, needed by the half-angle and rotation-matrix expansions.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T: Float + Debug> Scalar for T {}

/// Largest absolute value in `parts`. NaN propagates.
pub(crate) fn max_abs<T: Scalar>(parts: &[T]) -> T {
    parts.iter().fold(T::zero(), |m, &p| {
        let a = p.abs();
        if a > m || a.is_nan() {
            a
        } else {
            m
        }
    })
}

/// Euclidean norm of `parts`.
///
/// Sums raw squares when that sum is a normal finite number. Otherwise the squares
/// overflowed or lost precision to underflow, and the components are divided by
/// the largest of them before squaring.
pub(crate) fn euclidean_norm<T: Scalar>(parts: &[T]) -> T {
    let sum_sq = parts.iter().fold(T::zero(), |acc, &p| acc + p * p);
    if sum_sq.is_finite() && sum_sq >= T::min_positive_value() {
        return sum_sq.sqrt();
    }

    let scale = max_abs(parts);
    if scale == T::zero() || !scale.is_finite() {
        return scale;
    }
    let scaled_sq = parts.iter().fold(T::zero(), |acc, &p| {
        let q = p / scale;
        acc + q * q
    });
    scale * scaled_sq.sqrt()
}
