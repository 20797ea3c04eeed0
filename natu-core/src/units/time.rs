//! The time axis, its natural unit, and frequency.

use crate::{Inverse, MakeDimension, Quantity};
use natu_derive::BaseDimension;

/// Axis tag for time.
#[derive(BaseDimension)]
#[dimension(key = 2)]
pub enum Time {}

/// The time dimension.
pub type TimeDim = MakeDimension<Time>;
/// The frequency dimension, `Time⁻¹`.
pub type FrequencyDim = Inverse<TimeDim>;

/// A quantity measured in natural time units.
pub type Seconds<F = f64> = Quantity<TimeDim, F>;
/// A quantity measured in natural frequency units.
pub type Hertz<F = f64> = Quantity<FrequencyDim, F>;

/// One second.
pub const S: Seconds = Seconds::new(1.0);
/// One hertz.
pub const HZ: Hertz = Hertz::new(1.0);
