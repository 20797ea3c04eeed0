//! Compile-time dimensional analysis over natural units.
//!
//! `natu` is the user-facing crate in this workspace. It re-exports the full
//! API from `natu-core` plus the predefined axes and natural units (length,
//! mass, time, charge, and the derived mechanical/electromagnetic
//! dimensions).
//!
//! The core idea: a value is always a `Quantity<D>`, where `D` is a
//! canonical, type-level composite dimension. Dimensions combine through a
//! compile-time algebra, so `kg·m²/s²` built in any operand order is the
//! identical type, and mixing incompatible dimensions refuses to build. The
//! runtime footprint of any quantity is a single float.
//!
//! Every unit is a *natural* unit: the value one of its dimension. Scaled
//! units are ordinary quantities (`let km = 1e3 * M;`), and results are read
//! out as dimensionless ratios against a unit (`(d / km).into_scalar()`).
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to
//!   seconds, or assign a velocity to an energy).
//! - Derived dimensions are *computed*, never asserted: an energy is
//!   whatever `mass · length² · time⁻²` canonicalizes to, so a
//!   "declared-but-wrong" derived unit cannot exist.
//! - Fractional powers: `sqrt(area)` is exactly a length.
//!
//! # What this crate does not try to solve
//!
//! - Conversion between differently-scaled units of the same dimension
//!   (metres vs feet); there is no conversion-factor registry.
//! - Parsing or formatting unit symbols.
//!
//! # Quick start
//!
//! ```rust
//! use natu::{Joules, J, KG, M, S};
//!
//! // Energy derived operator-by-operator from base units.
//! let e = KG * M * M / S / S;
//! let _typecheck: Joules = e;
//!
//! // v·t is a length; lengths divided by lengths are bare numbers.
//! let v = 12.0 * M / S;
//! let d = v * (3.0 * S);
//! assert!(((d / M).into_scalar() - 36.0).abs() < 1e-12);
//! ```
//!
//! Declare your own axes with [`base_dimension!`]:
//!
//! ```rust
//! natu::base_dimension!(
//!     /// Amount of substance.
//!     pub Amount, key = natu::typenum::U7
//! );
//!
//! let mol = natu::make_unit::<Amount, f64>();
//! let concentration = 2.5 * mol / (natu::M * natu::M * natu::M);
//! assert_eq!((concentration * (natu::M * natu::M * natu::M) / mol).into_scalar(), 2.5);
//! ```
//!
//! # Incorrect usage (build errors)
//!
//! Adding across dimensions:
//!
//! ```compile_fail
//! use natu::{M, S};
//!
//! let _ = M + S; // cannot add length to time
//! ```
//!
//! Comparing across dimensions:
//!
//! ```compile_fail
//! use natu::{KG, M};
//!
//! assert!(M < KG); // no ordering across dimensions
//! ```
//!
//! Treating a dimensioned quantity as a bare number:
//!
//! ```compile_fail
//! use natu::M;
//!
//! let x: f64 = (2.0 * M).into(); // only dimensionless quantities convert
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `natu-core`.
//! - `serde`: enables `serde` support for `Quantity`; serialization is the
//!   raw scalar value only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! natu = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result`
//! from its core operations. Dimension mismatches are build-time
//! rejections; the remaining arithmetic is pure float computation following
//! IEEE-754 behavior (NaN and infinities propagate according to the
//! underlying operation).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use natu_core::*;
pub use natu_core::{base_dimension, multiply};

/// Derive macro used by `natu-core` to declare axis marker types.
///
/// This macro expands in terms of `crate::BaseDimension`, so it is intended
/// for use inside `natu-core` (or crates exposing the same crate-root API).
/// Downstream code should use [`base_dimension!`] instead.
pub use natu_derive::BaseDimension;

pub use natu_core::units::charge;
pub use natu_core::units::electromagnetic;
pub use natu_core::units::length;
pub use natu_core::units::mass;
pub use natu_core::units::mechanics;
pub use natu_core::units::time;

pub use natu_core::units::charge::*;
pub use natu_core::units::electromagnetic::*;
pub use natu_core::units::length::*;
pub use natu_core::units::mass::*;
pub use natu_core::units::mechanics::*;
pub use natu_core::units::time::*;
