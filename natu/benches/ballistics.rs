//! Zero-cost check: a projectile integration loop written with quantities
//! against the identical loop over bare `f64`s.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use natu::{abs, Joules, Meters, Seconds, J, KG, M, S};

/// Integrates a vertical launch until the projectile returns to the ground,
/// accumulating |dA| like the reference simulation. Returns the step count,
/// apex height, flight time, and accumulated work.
fn simulate_quantities(v0: f64) -> (usize, Meters, Seconds, Joules) {
    let a = -9.86 * M / S / S;
    let dt = 1e-5 * S;

    let mut x = 0.0 * M;
    let mut t = 0.0 * S;
    let mut v = v0 * M / S;

    let mut count = 0usize;
    let mut xmax = x;
    let mut work = 0.0 * J;

    while (x / M).into_scalar() >= 0.0 {
        x += v * dt;
        v += a * dt;
        t += dt;
        if x > xmax {
            xmax = x;
        }
        work += abs(a * KG * v * dt);
        count += 1;
    }

    (count, xmax, t, work)
}

/// The same integration over bare floats.
fn simulate_f64(v0: f64) -> (usize, f64, f64, f64) {
    let a = -9.86;
    let dt = 1e-5;

    let mut x = 0.0;
    let mut t = 0.0;
    let mut v = v0;

    let mut count = 0usize;
    let mut xmax = x;
    let mut work = 0.0;

    while x >= 0.0 {
        x += v * dt;
        v += a * dt;
        t += dt;
        if x > xmax {
            xmax = x;
        }
        work += f64::abs(a * v * dt);
        count += 1;
    }

    (count, xmax, t, work)
}

fn bench_ballistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("projectile");

    group.bench_function("quantities", |b| {
        b.iter(|| simulate_quantities(black_box(10.0)))
    });

    group.bench_function("f64", |b| b.iter(|| simulate_f64(black_box(10.0))));

    group.finish();
}

criterion_group!(benches, bench_ballistics);
criterion_main!(benches);
