//! The mass axis and its natural unit.

use crate::{MakeDimension, Quantity};
use natu_derive::BaseDimension;

/// Axis tag for mass.
#[derive(BaseDimension)]
#[dimension(key = 1)]
pub enum Mass {}

/// The mass dimension.
pub type MassDim = MakeDimension<Mass>;

/// A quantity measured in natural mass units.
pub type Kilograms<F = f64> = Quantity<MassDim, F>;

/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masses_accumulate() {
        let mut total = 0.0 * KG;
        total += 2.5 * KG;
        total += 1.5 * KG;
        assert_eq!(total.value(), 4.0);
        assert_eq!((total / KG).into_scalar(), 4.0);
    }
}
