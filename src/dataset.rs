//! Dataset persistence: sample, shuffle, and store one JSON array per shape.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use playdata_helpers::{DataPoint, fisher_yates};
use rand::Rng;
use shape_gen::{Shape, ShapeError};

/// Errors that can occur while generating or persisting datasets.
#[derive(Debug)]
pub enum DatasetError {
    /// The output directory does not exist
    MissingOutputDir(PathBuf),
    /// Sampling the shape failed
    Shape(ShapeError),
    /// Reading or writing a dataset file failed
    Io(std::io::Error),
    /// A dataset file did not hold a JSON array of points
    Json(serde_json::Error),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::MissingOutputDir(dir) => {
                write!(f, "Output directory {} does not exist", dir.display())
            }
            DatasetError::Shape(err) => write!(f, "{}", err),
            DatasetError::Io(err) => write!(f, "Dataset file error: {}", err),
            DatasetError::Json(err) => write!(f, "Malformed dataset file: {}", err),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DatasetError::MissingOutputDir(_) => None,
            DatasetError::Shape(err) => Some(err),
            DatasetError::Io(err) => Some(err),
            DatasetError::Json(err) => Some(err),
        }
    }
}

impl From<ShapeError> for DatasetError {
    fn from(err: ShapeError) -> Self {
        DatasetError::Shape(err)
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::Io(err)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Json(err)
    }
}

/// Path of the dataset file for `shape` under `dir`.
pub fn dataset_path(dir: &Path, shape: Shape) -> PathBuf {
    dir.join(format!("{}.json", shape.name()))
}

/// Writes `points` as a JSON array to `<dir>/<shape>.json`.
///
/// Replaces any previous file with the same name. The directory itself is
/// never created here; a missing directory is reported as
/// `DatasetError::MissingOutputDir`.
pub fn write_dataset(dir: &Path, shape: Shape, points: &[DataPoint]) -> Result<(), DatasetError> {
    if !dir.is_dir() {
        return Err(DatasetError::MissingOutputDir(dir.to_path_buf()));
    }
    let file = File::create(dataset_path(dir, shape))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, points)?;
    writer.flush()?;
    Ok(())
}

/// Reads a JSON array of points from `path`, order preserved.
pub fn read_dataset(path: &Path) -> Result<Vec<DataPoint>, DatasetError> {
    let file = File::open(path)?;
    let points = serde_json::from_reader(BufReader::new(file))?;
    Ok(points)
}

/// Samples one dataset, shuffles it, and writes it under `dir`.
///
/// The shuffle carries no meaning beyond de-correlating label order in
/// the saved file. Returns the points exactly as written.
pub fn generate_dataset<R: Rng>(
    dir: &Path,
    shape: Shape,
    num_samples: usize,
    noise: f64,
    rng: &mut R,
) -> Result<Vec<DataPoint>, DatasetError> {
    let mut points = shape.sample(num_samples, noise, rng)?;
    fisher_yates(&mut points, rng);
    write_dataset(dir, shape, &points)?;
    Ok(points)
}

/// Runs every shape generator with the same sample count and noise.
pub fn generate_datasets<R: Rng>(
    dir: &Path,
    num_samples: usize,
    noise: f64,
    rng: &mut R,
) -> Result<(), DatasetError> {
    for shape in Shape::ALL {
        println!("Generating {} data...", shape);
        generate_dataset(dir, shape, num_samples, noise, rng)?;
    }
    Ok(())
}
