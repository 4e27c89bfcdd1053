//! Advisory rules
//!
//! Three fixed rules evaluated in order. The output always starts with one
//! irrigation advisory and ends with one pest advisory, with at most one
//! fertilizer advisory between them.

use crate::models::{Advisory, AdvisoryKind, Crop, FarmInput, SoilSample, WeatherSnapshot};

/// Soil moisture below this needs irrigation (%)
pub const IRRIGATION_MOISTURE_THRESHOLD: f64 = 20.0;

/// Organic matter below this calls for compost (%)
pub const COMPOST_ORGANIC_MATTER_THRESHOLD: f64 = 2.0;

/// Produce the ordered advisories for the current soil reading.
///
/// `crop` and `weather` are accepted so callers pass the same inputs as to
/// the estimator; none of the current rules consult them.
pub fn recommend(_crop: &Crop, soil: &SoilSample, _weather: &WeatherSnapshot) -> Vec<Advisory> {
    let mut advisories = Vec::with_capacity(3);

    let irrigation = if soil.moisture_percent < IRRIGATION_MOISTURE_THRESHOLD {
        AdvisoryKind::IrrigationNeeded
    } else {
        AdvisoryKind::MoistureSufficient
    };
    advisories.push(Advisory::new(irrigation));

    if soil.organic_matter_percent < COMPOST_ORGANIC_MATTER_THRESHOLD {
        advisories.push(Advisory::new(AdvisoryKind::CompostRecommended));
    }

    advisories.push(Advisory::new(AdvisoryKind::PestMonitoring));
    advisories
}

/// Produce the ordered advisories for a farm record
pub fn recommend_advisories(
    farm: &FarmInput,
    soil: &SoilSample,
    weather: &WeatherSnapshot,
) -> Vec<Advisory> {
    recommend(&farm.crop, soil, weather)
}
