//! Scatter-chart rendering for saved dataset files.

use std::error::Error;
use std::fs;
use std::ops::Range;
use std::path::Path;

use playdata::{DataPoint, read_dataset};
use plotters::prelude::*;

const CHART_SIZE: (u32, u32) = (640, 480);
const POINT_RADIUS: i32 = 3;

/// Chart color for a point label.
///
/// Label -1 is not produced by any generator; every generated point draws
/// in the second color.
fn label_color(label: i32) -> RGBColor {
    if label == -1 {
        // purple
        RGBColor(0x80, 0x00, 0x80)
    } else {
        // #f52ce4
        RGBColor(0xf5, 0x2c, 0xe4)
    }
}

/// Renders one chart per `.json` dataset under `data_dir` into `chart_dir`.
///
/// Chart files keep the full dataset file name with a `.png` suffix
/// appended (`gaussian.json` becomes `gaussian.json.png`). Files are
/// processed in name order. Returns the number of charts written.
pub fn render_all(data_dir: &Path, chart_dir: &Path) -> Result<usize, Box<dyn Error>> {
    if !data_dir.is_dir() {
        return Err(format!("Dataset directory {} does not exist", data_dir.display()).into());
    }
    if !chart_dir.is_dir() {
        return Err(format!("Chart directory {} does not exist", chart_dir.display()).into());
    }

    let mut dataset_files = Vec::new();
    for entry in fs::read_dir(data_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            dataset_files.push(path);
        }
    }
    dataset_files.sort();

    for path in &dataset_files {
        let file_name = path
            .file_name()
            .ok_or_else(|| format!("Dataset path {} has no file name", path.display()))?
            .to_string_lossy();
        println!("Plotting {} data...", file_name);

        let points = read_dataset(path)?;
        let chart_path = chart_dir.join(format!("{}.png", file_name));
        render_chart(&points, &chart_path)?;
    }
    Ok(dataset_files.len())
}

/// Draws `points` as a scatter chart and writes it to `out_path`.
pub fn render_chart(points: &[DataPoint], out_path: &Path) -> Result<(), Box<dyn Error>> {
    let (x_range, y_range) = axis_ranges(points);

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(x_range, y_range)?;

    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.x(), p.y()), POINT_RADIUS, label_color(p.label).filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Data-driven axis ranges with a proportional margin on each side.
///
/// An empty dataset falls back to a unit window so the chart backend
/// never sees a degenerate range.
fn axis_ranges(points: &[DataPoint]) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in points {
        x_min = x_min.min(p.x());
        x_max = x_max.max(p.x());
        y_min = y_min.min(p.y());
        y_max = y_max.max(p.y());
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        return (-1.0..1.0, -1.0..1.0);
    }

    let pad = |min: f64, max: f64| {
        let margin = (0.05 * (max - min)).max(0.5);
        (min - margin)..(max + margin)
    };
    (pad(x_min, x_max), pad(y_min, y_max))
}
