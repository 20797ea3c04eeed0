//! Core type system for compile-time dimensional analysis over natural
//! units.
//!
//! `natu-core` tags numeric values with a physical dimension at the type
//! level:
//!
//! - A *base dimension* (length, mass, time, …) is a marker type
//!   implementing [`BaseDimension`], carrying a stable canonicalization key.
//! - A *composite dimension* is a canonical type-level list of axes raised
//!   to rational powers; the algebra ([`Multiply`], [`Inverse`], [`Power`],
//!   [`is_dimensionless`]) combines composites entirely at compile time.
//! - A value tagged with a dimension is a [`Quantity<D, F>`], backed by a
//!   single float.
//!
//! Dimensionally inconsistent operations (adding a length to a mass,
//! assigning a velocity where an energy is expected) are build errors;
//! consistent operations produce the correctly-combined result dimension
//! automatically. At run time nothing of the dimension remains; only the
//! scalar arithmetic executes.
//!
//! Most users should depend on `natu` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimension mismatches, with zero runtime cost.
//! - Canonical dimensions: `kg·m²/s²` built in any operand order is the
//!   *same type*, so derived dimensions can be compared structurally.
//! - Rational exponents: square roots of dimensions are first-class
//!   (`sqrt(area)` is exactly a length).
//! - An open axis set: declare your own base dimensions at any time; they
//!   participate fully in the algebra.
//!
//! # What this crate does not try to solve
//!
//! - Conversion between differently-scaled units of one dimension (metres
//!   vs feet). Every unit here is the *natural* unit of its dimension, with
//!   value one; scaled units are ordinary quantities (`let km = 1e3 * M;`).
//! - Parsing or printing unit names. There is no registry of symbols.
//! - Run-time-decided dimensions. The dimension of every expression is
//!   fixed while the program is being built.
//!
//! # Quick start
//!
//! ```rust
//! use natu_core::units::length::M;
//! use natu_core::units::mass::KG;
//! use natu_core::units::time::S;
//! use natu_core::units::mechanics::Joules;
//!
//! // An energy *derived* from base units, never separately asserted.
//! let j = KG * M * M / S / S;
//! let _typecheck: Joules = j;
//!
//! // Results are read back as dimensionless ratios against a unit.
//! let kinetic: Joules = 0.5 * KG * (3.0 * M / S) * (3.0 * M / S);
//! assert!(((kinetic / j).into_scalar() - 4.5).abs() < 1e-12);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `natu-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! natu-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in
//! `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for [`Quantity`]; serialization is the
//!   raw scalar value only.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result`
//! from its core operations. Dimension mismatches are build-time rejections;
//! the remaining arithmetic is pure float computation following IEEE-754
//! behavior (NaN and infinities propagate according to the underlying
//! operation).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod field;
mod macros;
mod quantity;
mod ratio;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{
    assert_dim_eq, is_dimensionless, Axis, BaseDimension, Concat, Concatenate, DCons, DNil, Dim,
    DimInv, DimMul, DimPow, Dimensionless, Inverse, KeyCompare, MakeDimension, MergeDispatch,
    MergeInto, Multiply, Power, PrependIf, PrependNonZero,
};
pub use field::Field;
pub use quantity::{abs, make_unit, sqrt, MakeUnit, Quantity};
pub use ratio::{
    IsZero, Magnitude, Negated, RatAdd, RatMul, RatNeg, RatProd, RatSum, Ratio, Rational, Reduce,
    ReduceIf, Reduced, ZeroFlag,
};

/// Re-export of the `typenum` crate, whose integers name exponents and
/// canonicalization keys.
pub use typenum;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined axes and natural units (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::charge;
pub use units::electromagnetic;
pub use units::length;
pub use units::mass;
pub use units::mechanics;
pub use units::time;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{LengthDim, M};
    use crate::units::mass::{MassDim, KG};
    use crate::units::mechanics::{EnergyDim, Joules, J};
    use crate::units::time::{TimeDim, S};
    use typenum::{N2, P2};

    // ─────────────────────────────────────────────────────────────────────────
    // End-to-end: derived dimensions agree with the algebra
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn energy_three_ways() {
        type ViaMacro = crate::multiply!(MassDim, Power<LengthDim, P2>, Power<TimeDim, N2>);
        type ViaPairs = Multiply<MassDim, Multiply<Power<LengthDim, P2>, Power<TimeDim, N2>>>;
        assert_dim_eq::<ViaMacro, EnergyDim>();
        assert_dim_eq::<ViaPairs, EnergyDim>();

        let j = KG * M * M / S / S;
        let _typecheck: Joules = j;
        assert_eq!(j.value(), 1.0);
    }

    #[test]
    fn dimensionless_round_trip() {
        let q = 12.5 * J;
        let ratio = q / J;
        let scalar = ratio.into_scalar();
        assert!((scalar - 12.5).abs() < 1e-12);
        let back: Joules = scalar * J;
        assert_eq!(back, q);
    }

    #[test]
    fn unit_values_are_one() {
        assert_eq!(M.value(), 1.0);
        assert_eq!(KG.value(), 1.0);
        assert_eq!(S.value(), 1.0);
        assert_eq!(J.value(), 1.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serialize_quantity_as_raw_value() {
            let q = 42.5 * J;
            let json = serde_json::to_string(&q).unwrap();
            assert_eq!(json, "42.5");
        }

        #[test]
        fn deserialize_quantity_from_raw_value() {
            let q: Joules = serde_json::from_str("42.5").unwrap();
            assert_eq!(q.value(), 42.5);
        }

        #[test]
        fn serde_round_trip() {
            let original = 123.456 * J;
            let json = serde_json::to_string(&original).unwrap();
            let restored: Joules = serde_json::from_str(&json).unwrap();
            assert!((restored.value() - original.value()).abs() < 1e-12);
        }
    }
}
