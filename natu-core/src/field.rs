//! Scalar field abstraction for quantity values.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Numeric field backing a [`Quantity`](crate::Quantity).
///
/// Implemented for `f32` and `f64`. This abstracts the handful of scalar
/// operations the quantity type needs; `abs`, `sqrt` and `powf` route
/// through `std` when available and through `libm` in `no_std` builds.
pub trait Field:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// The multiplicative identity.
    const ONE: Self;
    /// The additive identity.
    const ZERO: Self;
    /// Not-a-number.
    const NAN: Self;

    /// Absolute value.
    fn abs(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Raises `self` to the real exponent `exp`.
    fn powf(self, exp: f64) -> Self;
    /// The smaller of two values.
    fn min(self, other: Self) -> Self;
    /// The larger of two values.
    fn max(self, other: Self) -> Self;
}

impl Field for f64 {
    const ONE: Self = 1.0;
    const ZERO: Self = 0.0;
    const NAN: Self = f64::NAN;

    #[inline]
    fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::abs(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::fabs(self)
        }
    }

    #[inline]
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrt(self)
        }
    }

    #[inline]
    fn powf(self, exp: f64) -> Self {
        #[cfg(feature = "std")]
        {
            f64::powf(self, exp)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::pow(self, exp)
        }
    }

    #[inline]
    fn min(self, other: Self) -> Self {
        f64::min(self, other)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        f64::max(self, other)
    }
}

impl Field for f32 {
    const ONE: Self = 1.0;
    const ZERO: Self = 0.0;
    const NAN: Self = f32::NAN;

    #[inline]
    fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::abs(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::fabsf(self)
        }
    }

    #[inline]
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrtf(self)
        }
    }

    #[inline]
    fn powf(self, exp: f64) -> Self {
        #[cfg(feature = "std")]
        {
            f32::powf(self, exp as f32)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::powf(self, exp as f32)
        }
    }

    #[inline]
    fn min(self, other: Self) -> Self {
        f32::min(self, other)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        f32::max(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities() {
        assert_eq!(f64::ONE, 1.0);
        assert_eq!(f64::ZERO, 0.0);
        assert!(<f64 as Field>::NAN.is_nan());
    }

    #[test]
    fn abs_sqrt_powf() {
        assert_eq!(Field::abs(-3.5f64), 3.5);
        assert_eq!(Field::sqrt(9.0f64), 3.0);
        assert!((Field::powf(2.0f64, 0.5) - core::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn f32_mirrors_f64() {
        assert_eq!(Field::abs(-3.5f32), 3.5);
        assert_eq!(Field::sqrt(4.0f32), 2.0);
        assert_eq!(Field::min(1.0f32, 2.0), 1.0);
        assert_eq!(Field::max(1.0f32, 2.0), 2.0);
    }
}
