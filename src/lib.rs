//! Synthetic 2D classification datasets.
//!
//! Four shape samplers (Gaussian blobs, concentric circles, interleaved
//! spirals, XOR quadrants) feed a shuffle-and-persist pipeline that
//! writes one JSON array of points per shape. The companion
//! `dataset-visualizer` binary turns the saved files into scatter-plot
//! images.

pub mod dataset;

// Re-export the member-crate types so downstream code only needs `playdata`.
pub use dataset::{
    DatasetError, dataset_path, generate_dataset, generate_datasets, read_dataset, write_dataset,
};
pub use playdata_helpers::{DataPoint, fisher_yates};
pub use shape_gen::{Shape, ShapeError};
