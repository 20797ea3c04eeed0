//! Fundamental constants computed in natural units.
//!
//! Walks through a chain of textbook electrodynamics: starting from the
//! exact SI defining constants, derive the electron-volt, the electron mass,
//! ħc, the vacuum permittivity, the classical electron radius, the Thomson
//! cross section, and the Bohr magneton, each with the dimension checked by
//! the compiler along the way.

use std::f64::consts::PI;

use natu::{Joules, Meters, Volts, C, J, KG, M, S};

fn main() {
    // Exact SI defining constants.
    let c = 299_792_458.0 * M / S;
    let e = 1.602_176_634e-19 * C;
    let h = 6.626_070_15e-34 * J * S;

    // Volts and electron-volts derive from charge and energy.
    let volt: Volts = J / C;
    let ev: Joules = e * volt;
    println!("1 eV = {:e} J", (ev / J).into_scalar());

    let mev = 1e6 * ev;

    // Electron mass, given in energy units.
    let me = 0.510_998_950_0 * mev;
    println!(
        "electron mass = {} MeV = {:e} kg",
        (me / mev).into_scalar(),
        (me / (c * c) / KG).into_scalar()
    );

    // Planck constant and ħc.
    let hbar = h / (2.0 * PI);
    let hc = hbar * c;
    let fm = 1e-15 * M;
    println!("hbar*c = {} MeV*fm", (hc / mev / fm).into_scalar());

    // Force and current units.
    let newton = J / M;
    let ampere = C / S;

    // Permeability and permittivity of free space (2018 CODATA).
    let mu0 = 4.0 * PI * 1e-7 * 1.000_000_000_55 * newton / ampere / ampere;
    let eps0 = 1.0 / (mu0 * c * c);

    // Classical electron radius: e²/(4π·me·eps0), with me as an energy.
    let re: Meters = e * e / (4.0 * PI * me * eps0);
    println!("classical electron radius = {:e} m", (re / M).into_scalar());

    // Thomson cross section, printed in barns.
    let sigma_t = 8.0 * PI / 3.0 * re * re;
    let barn = 1e-28 * M * M;
    println!("Thomson cross section = {} barn", (sigma_t / barn).into_scalar());

    // Bohr magneton, printed in MeV/T.
    let tesla = KG / (S * S * ampere);
    let mu_b = e * hbar / (2.0 * (me / (c * c)));
    println!(
        "Bohr magneton = {:e} MeV/T",
        (mu_b / mev * tesla).into_scalar()
    );
}
