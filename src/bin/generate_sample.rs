//! Writes a sample `data.json` with yearly discharge maxima so the viewer
//! can be tried without real gauge data.
//!
//! Usage: `cargo run --bin generate_sample [output.json]`

use std::env;

use serde::Serialize;

#[derive(Serialize)]
struct RawRecord {
    column1: String,
    column2: f64,
}

/// Minimal deterministic PRNG (SplitMix64), enough for plausible noise.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() -> anyhow::Result<()> {
    let output = env::args().nth(1).unwrap_or_else(|| "data.json".to_string());

    let mut rng = SimpleRng::new(42);
    let records: Vec<RawRecord> = (2015..=2024)
        .map(|year| {
            // Base flood peak around 400 m³/s with year-to-year scatter,
            // rounded to a tenth as a gauge would report it.
            let peak = 400.0 + 250.0 * rng.next_f64();
            RawRecord {
                column1: year.to_string(),
                column2: (peak * 10.0).round() / 10.0,
            }
        })
        .collect();

    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(&output, json)?;
    println!("wrote {} records to {output}", records.len());
    Ok(())
}
