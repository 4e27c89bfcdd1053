//! Weather data models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Current conditions and short-range rain outlook for the farm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WeatherSnapshot {
    pub temperature_celsius: f64,
    #[validate(range(min = 0.0, message = "Rainfall cannot be negative"))]
    pub rain_next_7_days_mm: f64,
    #[serde(default)]
    pub condition: String,
}

impl WeatherSnapshot {
    pub fn new(temperature_celsius: f64, rain_next_7_days_mm: f64, condition: impl Into<String>) -> Self {
        Self {
            temperature_celsius,
            rain_next_7_days_mm,
            condition: condition.into(),
        }
    }

    /// Reading shown until a weather feed is connected
    pub fn placeholder() -> Self {
        Self::new(28.5, 15.0, "Partly cloudy")
    }
}
