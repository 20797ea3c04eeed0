//! Serde round-trip for quantities.
//!
//! Quantities serialize as their raw scalar value: the dimension is a
//! compile-time fact recorded in the field's type, not in the payload.
//!
//! Run with: `cargo run --example serialization --features serde`

use natu::{Joules, Meters, Seconds};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct Measurement {
    distance: Meters,
    elapsed: Seconds,
    energy: Joules,
}

fn main() {
    let reading = Measurement {
        distance: Meters::new(125.0),
        elapsed: Seconds::new(2.5),
        energy: Joules::new(9.81),
    };

    let json = serde_json::to_string_pretty(&reading).unwrap();
    println!("{json}");

    let back: Measurement = serde_json::from_str(&json).unwrap();
    assert_eq!(back.distance, reading.distance);
    assert_eq!(back.elapsed, reading.elapsed);
    assert_eq!(back.energy, reading.energy);
}
