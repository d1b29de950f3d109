use std::error::Error;
use std::path::Path;

use playdata::generate_datasets;

/// Directory the dataset files are written to. Must exist before a run.
const OUT_DIR: &str = "data/saved";
const NUM_SAMPLES: usize = 100;
const NOISE: f64 = 0.5;

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = rand::rng();
    generate_datasets(Path::new(OUT_DIR), NUM_SAMPLES, NOISE, &mut rng)?;
    println!("Done!");
    Ok(())
}
