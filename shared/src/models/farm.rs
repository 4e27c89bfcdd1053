//! Farm attributes entered by the grower

use serde::{Deserialize, Serialize};

use super::Crop;

/// The farm being assessed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmInput {
    pub crop: Crop,
    pub area_hectares: f64,
}

impl FarmInput {
    pub fn new(crop: impl Into<Crop>, area_hectares: f64) -> Self {
        Self {
            crop: crop.into(),
            area_hectares,
        }
    }
}
