//! Error types for vector and quaternion operations.
//!
//! Every fallible operation in the crate returns [`GeomResult<T>`], which is
//! `Result<T, GeomError>`. Failures are always local to a single call: nothing is
//! retried and there is no deferred error channel.
//!
//! # Error Categories
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`IndexOutOfRange`](GeomError::IndexOutOfRange) | [`Vector3::get`](crate::Vector3::get), [`Vector3::set`](crate::Vector3::set) |
//! | [`InsufficientData`](GeomError::InsufficientData) | slice constructors |
//! | [`MathError`](GeomError::MathError) | normalizing or measuring angles of zero-length values |
//!
//! # Usage
//!
//! ```
//! use geom_core::{GeomError, MathErrorKind, Vector3};
//!
//! let mut v = Vector3::<f64>::zeros();
//! match v.normalize() {
//!     Err(GeomError::MathError { kind, .. }) => assert_eq!(kind, MathErrorKind::DivisionByZero),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Classification of numerical failures.
///
/// Used with [`GeomError::MathError`] to tell the failure modes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Division by a zero magnitude (normalizing or measuring the angle of a zero vector).
    DivisionByZero,
    /// Magnitude is NaN or infinite, so no finite rescaling exists.
    NotFinite,
}

/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Component index outside the valid range.
    #[error("Index error in {operation}: index {index} out of bounds (length {len})")]
    IndexOutOfRange {
        operation: &'static str,
        index: usize,
        len: usize,
    },

    /// A buffer holds fewer elements than the constructor reads.
    #[error("Insufficient data in {operation}: expected at least {expected} elements, got {actual}")]
    InsufficientData {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: &'static str,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, GeomError>`.
pub type GeomResult<T> = Result<T, GeomError>;

impl GeomError {
    /// Creates an [`IndexOutOfRange`](Self::IndexOutOfRange) error.
    pub fn index_out_of_range(operation: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            operation,
            index,
            len,
        }
    }

    /// Creates an [`InsufficientData`](Self::InsufficientData) error.
    pub fn insufficient_data(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::InsufficientData {
            operation,
            expected,
            actual,
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &'static str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation,
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates the error for a zero or non-finite magnitude used as a divisor.
    pub(crate) fn degenerate_magnitude(operation: &'static str, magnitude_is_zero: bool) -> Self {
        log::debug!(
            "{}: refusing to divide by a {} magnitude",
            operation,
            if magnitude_is_zero { "zero" } else { "non-finite" }
        );
        if magnitude_is_zero {
            Self::math_error(operation, MathErrorKind::DivisionByZero, "magnitude is zero")
        } else {
            Self::math_error(operation, MathErrorKind::NotFinite, "magnitude is not finite")
        }
    }

    /// Returns the [`MathErrorKind`] for math errors, `None` otherwise.
    pub fn math_kind(&self) -> Option<MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_error() {
        let err = GeomError::index_out_of_range("Vector3::get", 3, 3);
        assert_eq!(
            err.to_string(),
            "Index error in Vector3::get: index 3 out of bounds (length 3)"
        );
    }

    #[test]
    fn test_insufficient_data_error() {
        let err = GeomError::insufficient_data("Rgba::from_slice", 4, 2);
        assert_eq!(
            err.to_string(),
            "Insufficient data in Rgba::from_slice: expected at least 4 elements, got 2"
        );
    }

    #[test]
    fn test_math_error_with_kind() {
        let err = GeomError::math_error(
            "Vector3::angle",
            MathErrorKind::DivisionByZero,
            "magnitude is zero",
        );
        assert!(err.to_string().contains("Math error"));
        assert!(err.to_string().contains("DivisionByZero"));
        assert_eq!(err.math_kind(), Some(MathErrorKind::DivisionByZero));
    }

    #[test]
    fn test_degenerate_magnitude_kinds() {
        let zero = GeomError::degenerate_magnitude("Quaternion::normalize", true);
        assert_eq!(zero.math_kind(), Some(MathErrorKind::DivisionByZero));

        let nan = GeomError::degenerate_magnitude("Quaternion::normalize", false);
        assert_eq!(nan.math_kind(), Some(MathErrorKind::NotFinite));
    }

    #[test]
    fn test_math_kind_on_other_variants() {
        assert_eq!(GeomError::insufficient_data("x", 3, 1).math_kind(), None);
        assert_eq!(GeomError::index_out_of_range("x", 9, 3).math_kind(), None);
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<GeomError>();
        _assert_sync::<GeomError>();
    }
}
