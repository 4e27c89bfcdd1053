//! Prediction service combining the yield estimator and advisory rules
//!
//! Requests may omit the soil or weather reading; the missing one is taken
//! from the configured feed before the inputs are validated and scored.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::AppResult;
use crate::external::{SoilSource, WeatherSource};
use crate::models::{Advisory, FarmInput, SoilSample, WeatherSnapshot, YieldBreakdown, YieldEstimate};

const EXPLANATION: &str = "Prediction combines crop baseline and current soil + recent weather";

/// Input for prediction, advisory and assessment requests
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentInput {
    pub farm: FarmInput,
    pub soil: Option<SoilSample>,
    pub weather: Option<WeatherSnapshot>,
}

/// Yield prediction with its explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub yield_tons: f64,
    pub confidence: f64,
    pub explanation: Explanation,
}

/// Human-readable account of a prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    pub why: String,
    pub key_factors: YieldBreakdown,
}

/// Estimate and advisories computed from the same inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub farm: FarmInput,
    pub soil: SoilSample,
    pub weather: WeatherSnapshot,
    pub estimate: YieldEstimate,
    pub advisories: Vec<Advisory>,
}

/// Fully resolved, validated inputs
struct ResolvedInputs {
    farm: FarmInput,
    soil: SoilSample,
    weather: WeatherSnapshot,
}

/// Prediction service
#[derive(Clone)]
pub struct PredictionService {
    weather_source: Arc<dyn WeatherSource>,
    soil_source: Arc<dyn SoilSource>,
}

impl PredictionService {
    /// Create a new PredictionService instance
    pub fn new(weather_source: Arc<dyn WeatherSource>, soil_source: Arc<dyn SoilSource>) -> Self {
        Self {
            weather_source,
            soil_source,
        }
    }

    fn resolve(&self, input: AssessmentInput) -> AppResult<ResolvedInputs> {
        let soil = match input.soil {
            Some(soil) => soil,
            None => {
                tracing::debug!(source = self.soil_source.name(), "No soil reading supplied, using feed");
                self.soil_source.current(None)?.sample
            }
        };

        let weather = match input.weather {
            Some(weather) => weather,
            None => {
                tracing::debug!(source = self.weather_source.name(), "No weather supplied, using feed");
                self.weather_source.current(None)?.snapshot
            }
        };

        shared::validate_inputs(&input.farm, &soil, &weather)?;

        Ok(ResolvedInputs {
            farm: input.farm,
            soil,
            weather,
        })
    }

    /// Predict the farm's yield and explain the factors behind it
    pub fn predict(&self, input: AssessmentInput) -> AppResult<PredictResponse> {
        let ResolvedInputs { farm, soil, weather } = self.resolve(input)?;

        let estimate = shared::estimate_yield(&farm, &soil, &weather);
        let key_factors = shared::explain(&farm.crop, farm.area_hectares, &soil, &weather);

        tracing::info!(
            crop = %farm.crop,
            area_hectares = farm.area_hectares,
            yield_tons = estimate.yield_tons,
            "Yield predicted"
        );

        Ok(PredictResponse {
            yield_tons: estimate.yield_tons,
            confidence: estimate.confidence,
            explanation: Explanation {
                why: EXPLANATION.to_string(),
                key_factors,
            },
        })
    }

    /// Produce the ordered advisories for the farm
    pub fn advisories(&self, input: AssessmentInput) -> AppResult<Vec<Advisory>> {
        let ResolvedInputs { farm, soil, weather } = self.resolve(input)?;

        let advisories = shared::recommend_advisories(&farm, &soil, &weather);
        tracing::info!(crop = %farm.crop, count = advisories.len(), "Advisories generated");

        Ok(advisories)
    }

    /// Estimate and advise in one pass over the same inputs
    pub fn assess(&self, input: AssessmentInput) -> AppResult<AssessmentResponse> {
        let ResolvedInputs { farm, soil, weather } = self.resolve(input)?;

        let estimate = shared::estimate_yield(&farm, &soil, &weather);
        let advisories = shared::recommend_advisories(&farm, &soil, &weather);

        tracing::info!(
            crop = %farm.crop,
            yield_tons = estimate.yield_tons,
            advisories = advisories.len(),
            "Assessment completed"
        );

        Ok(AssessmentResponse {
            farm,
            soil,
            weather,
            estimate,
            advisories,
        })
    }
}
