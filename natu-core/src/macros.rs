//! Macros for declaring axes and combining dimensions.

/// Declares a base-dimension axis: an empty enum implementing
/// [`BaseDimension`](crate::BaseDimension) with the given canonicalization
/// key.
///
/// The key is a `typenum` unsigned type and must be unique per axis. It is
/// only ever used to sort and merge composites.
///
/// ```rust
/// natu_core::base_dimension!(
///     /// Amount of substance.
///     pub Amount, key = natu_core::typenum::U7
/// );
///
/// let mole = natu_core::make_unit::<Amount, f64>();
/// assert_eq!(mole.value(), 1.0);
/// ```
#[macro_export]
macro_rules! base_dimension {
    ($(#[$meta:meta])* $vis:vis $name:ident, key = $key:ty) => {
        $(#[$meta])*
        $vis enum $name {}

        impl $crate::BaseDimension for $name {
            type Key = $key;
        }
    };
}

/// Variadic canonical product of composite dimensions.
///
/// Reduces pairwise, right to left: `multiply!(A, B, C)` expands to
/// `Multiply<A, Multiply<B, C>>`. The result is the same canonical composite
/// for any grouping.
///
/// ```rust
/// use natu_core::units::length::LengthDim;
/// use natu_core::units::mass::MassDim;
/// use natu_core::units::time::TimeDim;
/// use natu_core::typenum::{N2, P2};
/// use natu_core::{assert_dim_eq, multiply, Power};
///
/// type Energy = multiply!(MassDim, Power<LengthDim, P2>, Power<TimeDim, N2>);
/// assert_dim_eq::<Energy, natu_core::units::mechanics::EnergyDim>();
/// ```
#[macro_export]
macro_rules! multiply {
    ($d:ty $(,)?) => { $d };
    ($d1:ty, $($rest:ty),+ $(,)?) => {
        $crate::Multiply<$d1, $crate::multiply!($($rest),+)>
    };
}
