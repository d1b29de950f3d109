// Include submodules
mod common;
mod shuffle;

// Re-export types from submodules
pub use common::DataPoint;
pub use shuffle::fisher_yates;
