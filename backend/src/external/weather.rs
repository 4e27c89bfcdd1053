//! Weather feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::GpsCoordinates;

use crate::config::MockWeatherConfig;
use crate::error::AppResult;
use crate::models::WeatherSnapshot;

/// Source of current weather for a farm
pub trait WeatherSource: Send + Sync {
    /// Label reported in readings
    fn name(&self) -> &'static str;

    /// Current conditions, optionally for a specific location
    fn current(&self, location: Option<GpsCoordinates>) -> AppResult<WeatherReading>;
}

/// Weather snapshot with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    #[serde(flatten)]
    pub snapshot: WeatherSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GpsCoordinates>,
    pub observed_at: DateTime<Utc>,
    pub source: String,
}

/// Feed returning a fixed snapshot
#[derive(Debug, Clone)]
pub struct MockWeatherSource {
    snapshot: WeatherSnapshot,
}

impl MockWeatherSource {
    pub fn new(snapshot: WeatherSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_config(config: &MockWeatherConfig) -> Self {
        Self::new(WeatherSnapshot::from(config))
    }
}

impl WeatherSource for MockWeatherSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn current(&self, location: Option<GpsCoordinates>) -> AppResult<WeatherReading> {
        Ok(WeatherReading {
            snapshot: self.snapshot.clone(),
            location,
            observed_at: Utc::now(),
            source: self.name().to_string(),
        })
    }
}
