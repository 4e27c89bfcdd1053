//! Yield estimate models

use serde::{Deserialize, Serialize};

/// Estimated harvest for the whole farm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    /// Tons, rounded to two decimals
    pub yield_tons: f64,
    pub confidence: f64,
}

/// The multipliers behind one estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldBreakdown {
    pub base_yield_per_hectare: f64,
    pub moisture_factor: f64,
    pub ph_factor: f64,
    pub weather_factor: f64,
    pub area_hectares: f64,
}

impl YieldBreakdown {
    /// Unrounded product of all factors, in tons
    pub fn raw_yield_tons(&self) -> f64 {
        self.base_yield_per_hectare
            * self.moisture_factor
            * self.ph_factor
            * self.weather_factor
            * self.area_hectares
    }
}
