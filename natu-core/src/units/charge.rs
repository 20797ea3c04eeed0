//! The electric-charge axis, its natural unit, and current.
//!
//! Current is derived as charge per time rather than declared as its own
//! axis; the natural system here is charge-based.

use crate::units::time::TimeDim;
use crate::{Inverse, MakeDimension, Multiply, Quantity};
use natu_derive::BaseDimension;

/// Axis tag for electric charge.
#[derive(BaseDimension)]
#[dimension(key = 3)]
pub enum Charge {}

/// The charge dimension.
pub type ChargeDim = MakeDimension<Charge>;
/// The electric-current dimension, `Charge · Time⁻¹`.
pub type CurrentDim = Multiply<ChargeDim, Inverse<TimeDim>>;

/// A quantity measured in natural charge units.
pub type Coulombs<F = f64> = Quantity<ChargeDim, F>;
/// A quantity measured in natural current units.
pub type Amperes<F = f64> = Quantity<CurrentDim, F>;

/// One coulomb.
pub const C: Coulombs = Coulombs::new(1.0);
/// One ampere.
pub const A: Amperes = Amperes::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::time::S;

    #[test]
    fn current_is_charge_per_time() {
        let i = (3.0 * C) / (2.0 * S);
        let _typecheck: Amperes = i;
        assert_eq!(i.value(), 1.5);
    }

    #[test]
    fn current_times_time_recovers_charge() {
        let q: Coulombs = A * (5.0 * S);
        assert_eq!(q.value(), 5.0);
    }
}
