//! Minimal end-to-end example: derive an energy from base units and read
//! results back as dimensionless ratios.

use natu::{Joules, J, KG, M, S};

fn main() {
    // A derived unit is *defined* by arithmetic on base units; its
    // dimension is whatever the algebra computes.
    let joule = KG * M * M / S / S;
    let _typecheck: Joules = joule;

    // Kinetic energy of 2 kg moving at 3 m/s.
    let m = 2.0 * KG;
    let v = 3.0 * M / S;
    let e = 0.5 * m * v * v;

    // Quantities only become bare numbers as ratios against a unit.
    println!("E = {} J", (e / J).into_scalar());
    assert!(((e / J).into_scalar() - 9.0).abs() < 1e-12);

    // Scaled units are ordinary quantities.
    let km = 1e3 * M;
    let marathon = 42.195 * km;
    println!("marathon = {} m", (marathon / M).into_scalar());
}
