//! Predefined axes and natural units, grouped by dimension.
//!
//! `natu-core` ships a small set of built-in axes so that common physics can
//! be written out of the box. Every unit here is a *natural* unit: the value
//! one of its dimension. Scaled units (kilometres, electron-volts, …) are
//! plain quantities built by multiplying a natural unit by a scalar.
//!
//! ## Modules
//!
//! - [`length`]: the length axis, natural metre, area.
//! - [`mass`]: the mass axis, natural kilogram.
//! - [`time`]: the time axis, natural second, frequency.
//! - [`charge`]: the charge axis, natural coulomb, electric current.
//! - [`mechanics`]: cross-axis dimensions: velocity, acceleration,
//!   momentum, force, energy, power.
//! - [`electromagnetic`]: cross-axis dimensions: voltage, magnetic flux
//!   density.
//!
//! Every derived dimension is *computed* through the algebra rather than
//! declared, so a mistyped derivation cannot silently disagree with its
//! definition.

pub mod charge;
pub mod electromagnetic;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod time;
