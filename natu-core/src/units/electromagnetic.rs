//! Cross-axis electromagnetic dimensions.

use crate::units::charge::{ChargeDim, CurrentDim};
use crate::units::mass::MassDim;
use crate::units::mechanics::EnergyDim;
use crate::units::time::TimeDim;
use crate::{multiply, Inverse, Multiply, Power, Quantity};
use typenum::P2;

/// The voltage dimension, `Energy · Charge⁻¹`.
pub type VoltageDim = Multiply<EnergyDim, Inverse<ChargeDim>>;
/// The magnetic-flux-density dimension, `Mass · Time⁻² · Current⁻¹`.
pub type MagneticFluxDensityDim =
    multiply!(MassDim, Inverse<Power<TimeDim, P2>>, Inverse<CurrentDim>);

/// A quantity measured in natural voltage units.
pub type Volts<F = f64> = Quantity<VoltageDim, F>;
/// A quantity measured in natural magnetic-flux-density units.
pub type Teslas<F = f64> = Quantity<MagneticFluxDensityDim, F>;

/// One volt.
pub const V: Volts = Volts::new(1.0);
/// One tesla.
pub const T: Teslas = Teslas::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::charge::{A, C};
    use crate::units::mass::KG;
    use crate::units::mechanics::{Joules, J};
    use crate::units::time::S;

    #[test]
    fn volt_is_energy_per_charge() {
        let v = J / C;
        let _typecheck: Volts = v;
        assert_eq!(v.value(), 1.0);
    }

    #[test]
    fn charge_times_voltage_is_energy() {
        // The electron-volt construction: e · V has the energy dimension.
        let e_charge = 1.602_176_634e-19 * C;
        let ev: Joules = e_charge * V;
        assert!((ev.value() - 1.602_176_634e-19).abs() < 1e-31);
    }

    #[test]
    fn tesla_from_operators_matches_the_alias() {
        let t = KG / (S * S * A);
        let _typecheck: Teslas = t;
        assert_eq!(t.value(), 1.0);
    }
}
