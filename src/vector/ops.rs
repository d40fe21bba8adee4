//! Arithmetic operators for [`Vector3`].
//!
//! Vector ± vector, vector × scalar, vector ÷ scalar, unary `-`, and their
//! compound-assignment forms are generic over [`Scalar`]. Scalar broadcast
//! (`v + s`, `s - v`, ...) and scalar-on-the-left forms are implemented for `f32`
//! and `f64`; other scalars use [`Vector3::add_scalar`] / [`Vector3::sub_scalar`].

use super::Vector3;
use crate::Scalar;
use core::ops::*;

/// Vector + Vector
impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector
impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector * scalar
impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// Vector / scalar
impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;
    #[inline]
    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// -Vector
impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Vector += Vector
impl<T: Scalar> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
        self.z = self.z + rhs.z;
    }
}

/// Vector -= Vector
impl<T: Scalar> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
        self.z = self.z - rhs.z;
    }
}

/// Vector *= scalar
impl<T: Scalar> MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
        self.z = self.z * scalar;
    }
}

/// Vector /= scalar
impl<T: Scalar> DivAssign<T> for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        self.x = self.x / scalar;
        self.y = self.y / scalar;
        self.z = self.z / scalar;
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        /// Vector + scalar
        impl Add<$t> for Vector3<$t> {
            type Output = Self;
            #[inline]
            fn add(self, s: $t) -> Self {
                self.add_scalar(s)
            }
        }

        /// scalar + Vector
        impl Add<Vector3<$t>> for $t {
            type Output = Vector3<$t>;
            #[inline]
            fn add(self, v: Vector3<$t>) -> Vector3<$t> {
                v.add_scalar(self)
            }
        }

        /// Vector - scalar
        impl Sub<$t> for Vector3<$t> {
            type Output = Self;
            #[inline]
            fn sub(self, s: $t) -> Self {
                self.sub_scalar(s)
            }
        }

        /// scalar - Vector
        impl Sub<Vector3<$t>> for $t {
            type Output = Vector3<$t>;
            #[inline]
            fn sub(self, v: Vector3<$t>) -> Vector3<$t> {
                Vector3::new(self - v.x, self - v.y, self - v.z)
            }
        }

        /// scalar * Vector
        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;
            #[inline]
            fn mul(self, v: Vector3<$t>) -> Vector3<$t> {
                v * self
            }
        }

        /// Vector += scalar
        impl AddAssign<$t> for Vector3<$t> {
            #[inline]
            fn add_assign(&mut self, s: $t) {
                *self = self.add_scalar(s);
            }
        }

        /// Vector -= scalar
        impl SubAssign<$t> for Vector3<$t> {
            #[inline]
            fn sub_assign(&mut self, s: $t) {
                *self = self.sub_scalar(s);
            }
        }
    )*};
}

impl_scalar_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_add_sub() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        // operands are untouched
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(b, Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_scalar_broadcast() {
        let a = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(a + 1.0, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(1.0 + a, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(10.0 - a, Vector3::new(9.0, 8.0, 7.0));
    }

    #[test]
    fn test_mul_div() {
        let a = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(3.0 * a, Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_neg() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        assert_eq!(-a, Vector3::new(-1.0, 2.0, -3.0));
        assert_eq!(-(-a), a);
    }

    #[test]
    fn test_compound_assignment_mutates_receiver() {
        let mut v = Vector3::new(10.0, 20.0, 30.0);

        v += Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3::new(11.0, 21.0, 31.0));

        v -= Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3::new(10.0, 20.0, 30.0));

        v += 5.0;
        assert_eq!(v, Vector3::new(15.0, 25.0, 35.0));

        v -= 5.0;
        assert_eq!(v, Vector3::new(10.0, 20.0, 30.0));

        v *= 3.0;
        assert_eq!(v, Vector3::new(30.0, 60.0, 90.0));

        v /= 2.0;
        assert_eq!(v, Vector3::new(15.0, 30.0, 45.0));
    }

    #[test]
    fn test_single_precision_ops() {
        let a = Vector3::<f32>::new(1.0, 2.0, 3.0);
        assert_eq!(2.0_f32 * a + 1.0, Vector3::new(3.0, 5.0, 7.0));
        let mut b = a;
        b -= 1.0_f32;
        assert_eq!(b, Vector3::new(0.0, 1.0, 2.0));
    }
}
