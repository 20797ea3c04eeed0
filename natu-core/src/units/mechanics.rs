//! Cross-axis mechanical dimensions.
//!
//! Everything here is a *derived* dimension: each alias is defined through
//! the algebra, never asserted, so `Joules` is whatever `Mass · Length² ·
//! Time⁻²` canonicalizes to. A quantity built operator-by-operator (`KG * M
//! * M / S / S`) lands on the identical type.

use crate::units::length::LengthDim;
use crate::units::mass::MassDim;
use crate::units::time::TimeDim;
use crate::{multiply, Inverse, Multiply, Power, Quantity};
use typenum::{N2, P2};

/// The velocity dimension, `Length · Time⁻¹`.
pub type VelocityDim = Multiply<LengthDim, Inverse<TimeDim>>;
/// The acceleration dimension, `Velocity · Time⁻¹`.
pub type AccelerationDim = Multiply<VelocityDim, Inverse<TimeDim>>;
/// The momentum dimension, `Mass · Velocity`.
pub type MomentumDim = Multiply<MassDim, VelocityDim>;
/// The force dimension, `Mass · Length · Time⁻²`.
pub type ForceDim = multiply!(MassDim, LengthDim, Power<TimeDim, N2>);
/// The energy dimension, `Mass · Length² · Time⁻²`.
pub type EnergyDim = multiply!(MassDim, Power<LengthDim, P2>, Power<TimeDim, N2>);
/// The power dimension, `Energy · Time⁻¹`.
pub type PowerDim = Multiply<EnergyDim, Inverse<TimeDim>>;

/// A quantity measured in natural velocity units.
pub type MetersPerSecond<F = f64> = Quantity<VelocityDim, F>;
/// A quantity measured in natural force units.
pub type Newtons<F = f64> = Quantity<ForceDim, F>;
/// A quantity measured in natural energy units.
pub type Joules<F = f64> = Quantity<EnergyDim, F>;
/// A quantity measured in natural power units.
pub type Watts<F = f64> = Quantity<PowerDim, F>;

/// One newton.
pub const N: Newtons = Newtons::new(1.0);
/// One joule.
pub const J: Joules = Joules::new(1.0);
/// One watt.
pub const W: Watts = Watts::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::M;
    use crate::units::mass::KG;
    use crate::units::time::S;
    use crate::assert_dim_eq;
    use proptest::prelude::*;

    #[test]
    fn energy_from_operators_matches_the_alias() {
        // J = kg·m²/s², built one operator at a time.
        let j = KG * M * M / S / S;
        let _typecheck: Joules = j;
        assert_eq!(j.value(), 1.0);
    }

    #[test]
    fn force_times_distance_is_energy() {
        assert_dim_eq::<Multiply<ForceDim, LengthDim>, EnergyDim>();
        let work: Joules = (3.0 * N) * (2.0 * M);
        assert_eq!(work.value(), 6.0);
    }

    #[test]
    fn power_is_energy_per_time() {
        let p = (10.0 * J) / (2.0 * S);
        let _typecheck: Watts = p;
        assert_eq!(p.value(), 5.0);
    }

    #[test]
    fn momentum_is_mass_times_velocity() {
        let v = 4.0 * M / S;
        let p = (2.0 * KG) * v;
        let _typecheck: Quantity<MomentumDim> = p;
        assert_eq!(p.value(), 8.0);
    }

    #[test]
    fn kinetic_energy() {
        let v = 3.0 * M / S;
        let e: Joules = 0.5 * KG * v * v;
        assert!((e.value() - 4.5).abs() < 1e-12);
    }

    #[test]
    fn acceleration_integrates_to_velocity() {
        let a = 9.8 * M / S / S;
        let _typecheck: Quantity<AccelerationDim> = a;
        let v: MetersPerSecond = a * (2.0 * S);
        assert!((v.value() - 19.6).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_velocity_time_round_trip(
            v_val in 1e-3..1e3f64,
            t_val in 1e-3..1e3f64
        ) {
            let v: MetersPerSecond = v_val * M / S;
            let t = t_val * S;
            let d = v * t;
            let v_back: MetersPerSecond = d / t;
            prop_assert!((v_back.value() - v.value()).abs() / v.value() < 1e-12);
        }

        #[test]
        fn prop_work_ratio_is_dimensionless(f_val in 1e-3..1e3f64, d_val in 1e-3..1e3f64) {
            let work = (f_val * N) * (d_val * M);
            let ratio = work / J;
            prop_assert!((ratio.into_scalar() - f_val * d_val).abs() < 1e-9 * (f_val * d_val));
        }
    }
}
