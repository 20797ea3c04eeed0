//! The length axis and its natural unit.

use crate::{MakeDimension, Power, Quantity};
use natu_derive::BaseDimension;
use typenum::P2;

/// Axis tag for length.
#[derive(BaseDimension)]
#[dimension(key = 0)]
pub enum Length {}

/// The length dimension.
pub type LengthDim = MakeDimension<Length>;
/// The area dimension, `Length²`.
pub type AreaDim = Power<LengthDim, P2>;

/// A quantity measured in natural length units.
pub type Meters<F = f64> = Quantity<LengthDim, F>;
/// A quantity measured in natural area units.
pub type SquareMeters<F = f64> = Quantity<AreaDim, F>;

/// One metre.
pub const M: Meters = Meters::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_dim_eq, Multiply};

    #[test]
    fn area_is_length_squared() {
        assert_dim_eq::<AreaDim, Multiply<LengthDim, LengthDim>>();
        let a: SquareMeters = (2.0 * M) * (3.0 * M);
        assert_eq!(a.value(), 6.0);
    }

    #[test]
    fn sqrt_of_area_is_a_length() {
        let a: SquareMeters = (4.0 * M) * (4.0 * M);
        let side: Meters = a.sqrt();
        assert!((side.value() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn natural_unit_is_one() {
        assert_eq!(M.value(), 1.0);
    }
}
