//! Soil measurements

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single soil reading for the farm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SoilSample {
    #[validate(range(min = 0.0, max = 14.0, message = "pH must be between 0 and 14"))]
    pub ph: f64,
    #[validate(range(min = 0.0, message = "Organic matter cannot be negative"))]
    pub organic_matter_percent: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Moisture must be between 0 and 100%"))]
    pub moisture_percent: f64,
}

impl SoilSample {
    pub fn new(ph: f64, organic_matter_percent: f64, moisture_percent: f64) -> Self {
        Self {
            ph,
            organic_matter_percent,
            moisture_percent,
        }
    }

    /// Reading shown until a soil sensor feed is connected
    pub fn placeholder() -> Self {
        Self::new(6.4, 1.9, 23.0)
    }
}
