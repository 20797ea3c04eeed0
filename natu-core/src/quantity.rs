//! Quantity type and its operator surface.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use typenum::{Integer, NonZero, Unsigned, P1, U1, U2};

use crate::dimension::{
    BaseDimension, Dim, DimInv, DimMul, DimPow, Dimensionless, Inverse, MakeDimension, Multiply,
    Power,
};
use crate::field::Field;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A scalar tagged, at the type level, with a composite dimension.
///
/// `Quantity<D, F>` wraps a single `F` value together with phantom type
/// information about its dimension `D`. Dimensional bookkeeping happens
/// entirely at compile time; the runtime footprint is the bare scalar.
///
/// Arithmetic delegates the result dimension to the algebra: multiplying
/// quantities multiplies their dimensions, dividing multiplies by the
/// inverse, and addition demands the identical canonical dimension.
///
/// # Examples
///
/// ```rust
/// use natu_core::units::length::M;
/// use natu_core::units::mass::KG;
/// use natu_core::units::time::S;
/// use natu_core::units::mechanics::Joules;
///
/// // E = ½ m v²; the result dimension is computed, not declared.
/// let v = 3.0 * M / S;
/// let kinetic: Joules = 0.5 * KG * v * v;
/// assert!((kinetic.value() - 4.5).abs() < 1e-12);
/// ```
///
/// Mismatched dimensions are rejected before the program runs:
///
/// ```compile_fail
/// use natu_core::units::length::M;
/// use natu_core::units::time::S;
///
/// let _ = M + S; // cannot add length to time
/// ```
pub struct Quantity<D: Dim, F = f64>(F, PhantomData<D>);

/// Alias: the quantity type of the one-axis dimension of `B`, value backed
/// by `F`.
pub type MakeUnit<B, F = f64> = Quantity<MakeDimension<B>, F>;

/// The natural unit (value one) of axis `B`.
///
/// ```rust
/// use natu_core::units::time::Seconds;
/// use natu_core::make_unit;
///
/// let s: Seconds = make_unit();
/// assert_eq!(s.value(), 1.0);
/// ```
#[inline]
pub fn make_unit<B, F>() -> MakeUnit<B, F>
where
    B: BaseDimension,
    F: Field,
{
    Quantity::one()
}

impl<D: Dim, F: Field> Quantity<D, F> {
    /// A NaN-valued quantity.
    pub const NAN: Self = Self::new(F::NAN);

    /// Creates a quantity with the given value.
    #[inline]
    pub const fn new(value: F) -> Self {
        Self(value, PhantomData)
    }

    /// The quantity with value one, the natural unit of dimension `D`.
    #[inline]
    pub const fn one() -> Self {
        Self::new(F::ONE)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(&self) -> F {
        self.0
    }

    /// Absolute value; the dimension is unchanged.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// The smaller of two same-dimension quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// The larger of two same-dimension quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// Raises to the rational power `N/M`: the value through a real-valued
    /// power function, the dimension through [`Power`].
    ///
    /// ```rust
    /// use natu_core::typenum::{P3, U1};
    /// use natu_core::units::length::M;
    ///
    /// let volume = (2.0 * M).pow::<P3, U1>();
    /// assert_eq!(volume.value(), 8.0);
    /// ```
    #[inline]
    pub fn pow<N, M>(self) -> Quantity<Power<D, N, M>, F>
    where
        N: Integer,
        M: Unsigned + NonZero,
        D: DimPow<N, M>,
        Power<D, N, M>: Dim,
    {
        Quantity::new(self.0.powf(N::I64 as f64 / M::U64 as f64))
    }

    /// Raises to the integer power `N`; shorthand for `pow::<N, U1>()`.
    #[inline]
    pub fn powi<N>(self) -> Quantity<Power<D, N>, F>
    where
        N: Integer,
        D: DimPow<N>,
        Power<D, N>: Dim,
    {
        self.pow::<N, U1>()
    }

    /// Square root: the scalar square root paired with halved exponents.
    ///
    /// ```rust
    /// use natu_core::units::length::{Meters, M};
    ///
    /// let area = (9.0 * M) * M;
    /// let side: Meters = area.sqrt();
    /// assert!((side.value() - 3.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<Power<D, P1, U2>, F>
    where
        D: DimPow<P1, U2>,
        Power<D, P1, U2>: Dim,
    {
        Quantity::new(self.0.sqrt())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Copy / comparison / formatting
//
// Manual impls: derives would demand the phantom dimension parameter itself
// implement Clone/PartialEq/…, which marker types never do.
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dim, F: Field> Clone for Quantity<D, F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dim, F: Field> Copy for Quantity<D, F> {}

impl<D: Dim, F: Field + fmt::Debug> fmt::Debug for Quantity<D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quantity").field(&self.0).finish()
    }
}

impl<D: Dim, F: Field> PartialEq for Quantity<D, F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<D: Dim, F: Field> PartialOrd for Quantity<D, F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<D: Dim, F: Field> Default for Quantity<D, F> {
    /// Defaults to the natural unit (value one), like [`Quantity::one`].
    #[inline]
    fn default() -> Self {
        Self::one()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-dimension arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dim, F: Field> Add for Quantity<D, F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<D: Dim, F: Field> AddAssign for Quantity<D, F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<D: Dim, F: Field> Sub for Quantity<D, F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<D: Dim, F: Field> SubAssign for Quantity<D, F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<D: Dim, F: Field> Neg for Quantity<D, F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension-combining arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<D1, D2, F> Mul<Quantity<D2, F>> for Quantity<D1, F>
where
    D1: Dim + DimMul<D2>,
    D2: Dim,
    F: Field,
    Multiply<D1, D2>: Dim,
{
    type Output = Quantity<Multiply<D1, D2>, F>;
    #[inline]
    fn mul(self, rhs: Quantity<D2, F>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<D1, D2, F> Div<Quantity<D2, F>> for Quantity<D1, F>
where
    D1: Dim + DimMul<Inverse<D2>>,
    D2: Dim + DimInv,
    F: Field,
    Multiply<D1, Inverse<D2>>: Dim,
{
    type Output = Quantity<Multiply<D1, Inverse<D2>>, F>;
    #[inline]
    fn div(self, rhs: Quantity<D2, F>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar arithmetic and the dimensionless capability
//
// Per float type rather than generic over `Field`: a generic scalar-side
// impl would collide with the quantity×quantity impls under coherence.
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_scalar_ops {
    ($($f:ty),* $(,)?) => {
        $(
            impl<D: Dim> Mul<$f> for Quantity<D, $f> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $f) -> Self {
                    Self::new(self.0 * rhs)
                }
            }

            impl<D: Dim> Mul<Quantity<D, $f>> for $f {
                type Output = Quantity<D, $f>;
                #[inline]
                fn mul(self, rhs: Quantity<D, $f>) -> Self::Output {
                    Quantity::new(self * rhs.0)
                }
            }

            impl<D: Dim> Div<$f> for Quantity<D, $f> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $f) -> Self {
                    Self::new(self.0 / rhs)
                }
            }

            // A scalar divided by a quantity inverts the dimension:
            // `1.0 / s` is a frequency.
            impl<D> Div<Quantity<D, $f>> for $f
            where
                D: Dim + DimInv,
                Inverse<D>: Dim,
            {
                type Output = Quantity<Inverse<D>, $f>;
                #[inline]
                fn div(self, rhs: Quantity<D, $f>) -> Self::Output {
                    Quantity::new(self / rhs.0)
                }
            }

            impl<D: Dim> MulAssign<$f> for Quantity<D, $f> {
                #[inline]
                fn mul_assign(&mut self, rhs: $f) {
                    self.0 *= rhs;
                }
            }

            impl<D: Dim> DivAssign<$f> for Quantity<D, $f> {
                #[inline]
                fn div_assign(&mut self, rhs: $f) {
                    self.0 /= rhs;
                }
            }

            // Only the empty dimension is interchangeable with a bare
            // scalar; every other dimension has no such conversion.
            impl From<Quantity<Dimensionless, $f>> for $f {
                #[inline]
                fn from(q: Quantity<Dimensionless, $f>) -> Self {
                    q.0
                }
            }

            impl PartialEq<$f> for Quantity<Dimensionless, $f> {
                #[inline]
                fn eq(&self, other: &$f) -> bool {
                    self.0 == *other
                }
            }

            impl PartialOrd<$f> for Quantity<Dimensionless, $f> {
                #[inline]
                fn partial_cmp(&self, other: &$f) -> Option<Ordering> {
                    self.0.partial_cmp(other)
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64);

impl<F: Field> Quantity<Dimensionless, F> {
    /// Unwraps the bare scalar.
    ///
    /// Only dimensionless quantities expose this; to strip the units from
    /// any other quantity, divide by a same-dimension unit first.
    ///
    /// ```rust
    /// use natu_core::units::length::M;
    ///
    /// let ratio = (500.0 * M) / (2.0 * M);
    /// assert_eq!(ratio.into_scalar(), 250.0);
    /// ```
    #[inline]
    pub const fn into_scalar(self) -> F {
        self.0
    }
}

impl<F: Field + fmt::Display> fmt::Display for Quantity<Dimensionless, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free-function forms
// ─────────────────────────────────────────────────────────────────────────────

/// Absolute value of a quantity; free-function form of [`Quantity::abs`].
#[inline]
pub fn abs<D: Dim, F: Field>(q: Quantity<D, F>) -> Quantity<D, F> {
    q.abs()
}

/// Square root of a quantity; free-function form of [`Quantity::sqrt`].
#[inline]
pub fn sqrt<D, F>(q: Quantity<D, F>) -> Quantity<Power<D, P1, U2>, F>
where
    D: Dim + DimPow<P1, U2>,
    F: Field,
    Power<D, P1, U2>: Dim,
{
    q.sqrt()
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dim, F: Field + Serialize> Serialize for Quantity<D, F> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dim, F: Field + Deserialize<'de>> Deserialize<'de> for Quantity<D, F> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = F::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}
