//! Type-level rational exponents.
//!
//! Every axis inside a composite dimension carries a rational power, so that
//! square roots and other fractional powers of a dimension stay expressible
//! (`Length^(1/2)` is a perfectly good dimension). The exponents live purely
//! at the type level: a [`Ratio`] is never instantiated, only computed with.
//!
//! All arithmetic here reduces its result to lowest terms. That is what makes
//! structural type equality a correct equality test for exponents: `2/4` and
//! `1/2` never coexist, and a zero numerator is always paired with a
//! denominator of one.

use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg};

use typenum::{
    Bit, Gcd, Gcf, Integer, NInt, Negate, NonZero, PInt, Prod, Quot, Sum, Unsigned, B0, B1, U0,
    U1, Z0,
};

/// A type-level rational number `N / D`.
///
/// `N` is a `typenum` [`Integer`] and `D` a non-zero `typenum` [`Unsigned`];
/// the sign always lives in the numerator. Canonical form is fully reduced,
/// with zero spelled `Ratio<Z0, U1>`.
pub struct Ratio<N, D = U1>(PhantomData<(N, D)>);

/// Runtime view of a type-level rational.
pub trait Rational {
    /// Numerator, in lowest terms.
    const NUM: i64;
    /// Denominator, in lowest terms; always positive.
    const DEN: u64;

    /// The rational as an `f64`, used when raising scalar values to this
    /// power.
    fn as_f64() -> f64 {
        Self::NUM as f64 / Self::DEN as f64
    }
}

impl<N: Integer, D: Unsigned + NonZero> Rational for Ratio<N, D> {
    const NUM: i64 = N::I64;
    const DEN: u64 = D::U64;
}

// ─────────────────────────────────────────────────────────────────────────────
// Structural helpers on type-level integers
// ─────────────────────────────────────────────────────────────────────────────

/// Magnitude of a type-level integer, as a type-level unsigned.
pub trait Magnitude: Integer {
    /// `|Self|`.
    type Mag: Unsigned;
}

impl Magnitude for Z0 {
    type Mag = U0;
}
impl<U: Unsigned + NonZero> Magnitude for PInt<U> {
    type Mag = U;
}
impl<U: Unsigned + NonZero> Magnitude for NInt<U> {
    type Mag = U;
}

/// Zero test on a type-level integer, answered as a type-level bit.
pub trait IsZero: Integer {
    /// `B1` iff `Self` is `Z0`.
    type Output: Bit;
}

/// Alias for the zero flag of `N`.
pub type ZeroFlag<N> = <N as IsZero>::Output;

impl IsZero for Z0 {
    type Output = B1;
}
impl<U: Unsigned + NonZero> IsZero for PInt<U> {
    type Output = B0;
}
impl<U: Unsigned + NonZero> IsZero for NInt<U> {
    type Output = B0;
}

// ─────────────────────────────────────────────────────────────────────────────
// Reduction
// ─────────────────────────────────────────────────────────────────────────────

/// Reduction of a rational to lowest terms.
pub trait Reduce {
    /// The reduced rational.
    type Output;
}

/// Alias for the reduced form of `R`.
pub type Reduced<R> = <R as Reduce>::Output;

impl<N, D> Reduce for Ratio<N, D>
where
    N: Integer + IsZero,
    D: Unsigned + NonZero,
    Ratio<N, D>: ReduceIf<ZeroFlag<N>>,
{
    type Output = <Ratio<N, D> as ReduceIf<ZeroFlag<N>>>::Output;
}

/// [`Reduce`] dispatched on whether the numerator is zero.
pub trait ReduceIf<Z: Bit> {
    /// The reduced rational.
    type Output;
}

// 0/d reduces to 0/1.
impl<N: Integer, D: Unsigned + NonZero> ReduceIf<B1> for Ratio<N, D> {
    type Output = Ratio<Z0, U1>;
}

// n/d with n != 0: divide both by gcd(|n|, d).
impl<N, D> ReduceIf<B0> for Ratio<N, D>
where
    N: Integer + Magnitude,
    D: Unsigned + NonZero,
    <N as Magnitude>::Mag: Gcd<D>,
    Gcf<<N as Magnitude>::Mag, D>: Unsigned + NonZero,
    N: Div<PInt<Gcf<<N as Magnitude>::Mag, D>>>,
    D: Div<Gcf<<N as Magnitude>::Mag, D>>,
    Quot<N, PInt<Gcf<<N as Magnitude>::Mag, D>>>: Integer,
    Quot<D, Gcf<<N as Magnitude>::Mag, D>>: Unsigned + NonZero,
{
    type Output = Ratio<
        Quot<N, PInt<Gcf<<N as Magnitude>::Mag, D>>>,
        Quot<D, Gcf<<N as Magnitude>::Mag, D>>,
    >;
}

// ─────────────────────────────────────────────────────────────────────────────
// Arithmetic
// ─────────────────────────────────────────────────────────────────────────────

/// Rational addition, `n1/d1 + n2/d2`, reduced.
pub trait RatAdd<Rhs> {
    /// The reduced sum.
    type Output;
}

/// Alias for the reduced sum of two rationals.
pub type RatSum<A, B> = <A as RatAdd<B>>::Output;

impl<N1, D1, N2, D2> RatAdd<Ratio<N2, D2>> for Ratio<N1, D1>
where
    D1: Unsigned + NonZero + Mul<D2>,
    D2: Unsigned + NonZero,
    N1: Integer + Mul<PInt<D2>>,
    N2: Integer + Mul<PInt<D1>>,
    Prod<N1, PInt<D2>>: Add<Prod<N2, PInt<D1>>>,
    Sum<Prod<N1, PInt<D2>>, Prod<N2, PInt<D1>>>: Integer,
    Prod<D1, D2>: Unsigned + NonZero,
    Ratio<Sum<Prod<N1, PInt<D2>>, Prod<N2, PInt<D1>>>, Prod<D1, D2>>: Reduce,
{
    type Output = Reduced<Ratio<Sum<Prod<N1, PInt<D2>>, Prod<N2, PInt<D1>>>, Prod<D1, D2>>>;
}

/// Rational multiplication, `(n1 n2) / (d1 d2)`, reduced.
pub trait RatMul<Rhs> {
    /// The reduced product.
    type Output;
}

/// Alias for the reduced product of two rationals.
pub type RatProd<A, B> = <A as RatMul<B>>::Output;

impl<N1, D1, N2, D2> RatMul<Ratio<N2, D2>> for Ratio<N1, D1>
where
    N1: Integer + Mul<N2>,
    N2: Integer,
    D1: Unsigned + NonZero + Mul<D2>,
    D2: Unsigned + NonZero,
    Prod<N1, N2>: Integer,
    Prod<D1, D2>: Unsigned + NonZero,
    Ratio<Prod<N1, N2>, Prod<D1, D2>>: Reduce,
{
    type Output = Reduced<Ratio<Prod<N1, N2>, Prod<D1, D2>>>;
}

/// Rational negation.
pub trait RatNeg {
    /// `-Self`.
    type Output;
}

/// Alias for the negation of a rational.
pub type Negated<A> = <A as RatNeg>::Output;

impl<N, D> RatNeg for Ratio<N, D>
where
    N: Integer + Neg,
    D: Unsigned + NonZero,
    Negate<N>: Integer,
{
    type Output = Ratio<Negate<N>, D>;
}
