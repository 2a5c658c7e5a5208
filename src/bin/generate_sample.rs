use std::fs::File;
use std::io::{BufWriter, Write};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Reading noise, °C.
const NOISE: f64 = 0.15;

/// Samples the controller keeps before its buffer is full.
const MAX_SAMPLES: usize = 100;

const AMBIENT: f64 = 24.0;

/// Controller output for one temperature reading: `(heater, fan)`.
///
/// Bands around the midpoint `pm`:
/// `<= pm-8` heater high, `<= pm-1` heater medium, `<= pm+3` idle,
/// `<= pm+10` fan low, `<= pm+20` fan medium, above that fan high.
fn control(temp: f64, pm: u8) -> (u8, u8) {
    let pm = f64::from(pm);
    if temp <= pm - 8.0 {
        (2, 0)
    } else if temp <= pm - 1.0 {
        (1, 0)
    } else if temp <= pm + 3.0 {
        (0, 0)
    } else if temp <= pm + 10.0 {
        (0, 1)
    } else if temp <= pm + 20.0 {
        (0, 2)
    } else {
        (0, 3)
    }
}

/// One second of the thermal model: heater and fan push the temperature,
/// losses pull it back towards ambient.
fn step(temp: f64, heater: u8, fan: u8) -> f64 {
    let heating = [0.0, 0.45, 0.9][heater as usize];
    let cooling = [0.0, 0.35, 0.6, 0.9][fan as usize];
    temp + heating - cooling - 0.02 * (temp - AMBIENT)
}

/// Run the controller for `MAX_SAMPLES` seconds. The midpoint starts at
/// 27 °C and is raised to 35 °C after 60 samples.
fn simulate(rng: &mut ChaCha8Rng) -> Vec<(f64, u8, u8, u8)> {
    let mut temp = 48.0;
    let mut records = Vec::with_capacity(MAX_SAMPLES);
    for i in 0..MAX_SAMPLES {
        let pm = if i < 60 { 27 } else { 35 };
        let reading = temp + rng.gen_range(-NOISE..NOISE);
        let (heater, fan) = control(reading, pm);
        records.push((reading, heater, fan, pm));
        temp = step(temp, heater, fan);
    }
    records
}

fn main() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let records = simulate(&mut rng);

    let output_path = "datos.txt";
    let file = File::create(output_path).expect("Failed to create output file");
    let mut out = BufWriter::new(file);

    // Same framing as the UART dump, banners included.
    writeln!(out).expect("Failed to write header");
    writeln!(out, "=== DATOS GUARDADOS ===").expect("Failed to write header");
    for (temp, heater, fan, pm) in &records {
        write!(out, "{temp:.2},{heater},{fan},{pm}\r\n").expect("Failed to write sample");
    }
    writeln!(out, "=======================").expect("Failed to write footer");
    out.flush().expect("Failed to flush output");

    println!("Wrote {} samples to {output_path}", records.len());
}
