//! Soil feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::MockSoilConfig;
use crate::error::AppResult;
use crate::models::SoilSample;

/// Source of soil readings for a plot
pub trait SoilSource: Send + Sync {
    /// Label reported in readings
    fn name(&self) -> &'static str;

    /// Latest reading, optionally for a specific plot
    fn current(&self, plot_id: Option<Uuid>) -> AppResult<SoilReading>;
}

/// Soil sample with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilReading {
    #[serde(flatten)]
    pub sample: SoilSample,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_id: Option<Uuid>,
    pub observed_at: DateTime<Utc>,
    pub source: String,
}

/// Feed returning a fixed sample
#[derive(Debug, Clone)]
pub struct MockSoilSource {
    sample: SoilSample,
}

impl MockSoilSource {
    pub fn new(sample: SoilSample) -> Self {
        Self { sample }
    }

    pub fn from_config(config: &MockSoilConfig) -> Self {
        Self::new(SoilSample::from(config))
    }
}

impl SoilSource for MockSoilSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn current(&self, plot_id: Option<Uuid>) -> AppResult<SoilReading> {
        Ok(SoilReading {
            sample: self.sample.clone(),
            plot_id,
            observed_at: Utc::now(),
            source: self.name().to_string(),
        })
    }
}
