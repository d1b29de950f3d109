use serde::{Deserialize, Serialize};

/// Represents a single observation: two coordinates and a binary class label.
///
/// Serializes as `{"features":[x,y],"label":n}`, which is the on-disk
/// dataset format. Generators only ever emit labels 0 and 1; the
/// visualizer additionally recognizes -1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub features: [f64; 2],
    pub label: i32,
}

impl DataPoint {
    pub fn new(features: [f64; 2], label: i32) -> Self {
        DataPoint { features, label }
    }

    pub fn x(&self) -> f64 {
        self.features[0]
    }

    pub fn y(&self) -> f64 {
        self.features[1]
    }
}
