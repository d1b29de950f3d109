mod chart;

use std::error::Error;
use std::path::Path;

/// Directory the generator saved its dataset files to.
const DATA_DIR: &str = "data/saved";
/// Directory the rendered charts land in. Must exist before a run.
const CHART_DIR: &str = "data/saved/charts";

fn main() -> Result<(), Box<dyn Error>> {
    chart::render_all(Path::new(DATA_DIR), Path::new(CHART_DIR))?;
    println!("Done!");
    println!("Saved charts to {}", CHART_DIR);
    Ok(())
}
