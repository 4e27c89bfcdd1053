//! Yield estimation
//!
//! A closed-form stand-in for a trained yield model: the crop's base yield
//! per hectare scaled by soil moisture, soil pH and temperature multipliers,
//! then by the farm area. The function is total over `f64` inputs and keeps
//! no state, so identical inputs always give bit-identical estimates.

use crate::models::{Crop, FarmInput, SoilSample, WeatherSnapshot, YieldBreakdown, YieldEstimate};

/// Fixed confidence reported with every estimate
pub const ESTIMATE_CONFIDENCE: f64 = 0.82;

/// Name reported by the health endpoint for this estimator
pub const ESTIMATOR_NAME: &str = "rule-based-v1";

const MOISTURE_FACTOR_MIN: f64 = 0.8;
const MOISTURE_FACTOR_MAX: f64 = 1.2;
const IDEAL_PH: f64 = 6.5;
const IDEAL_TEMPERATURE_CELSIUS: f64 = 25.0;
const MAX_TEMPERATURE_PENALTY: f64 = 0.3;

/// Soil moisture multiplier, clamped to [0.8, 1.2]
pub fn moisture_factor(moisture_percent: f64) -> f64 {
    (0.5 + moisture_percent / 50.0).clamp(MOISTURE_FACTOR_MIN, MOISTURE_FACTOR_MAX)
}

/// Soil pH multiplier. Not clamped: it turns negative beyond 10 units from 6.5.
pub fn ph_factor(ph: f64) -> f64 {
    1.0 - (IDEAL_PH - ph).abs() / 10.0
}

/// Temperature multiplier, never below 0.7
pub fn weather_factor(temperature_celsius: f64) -> f64 {
    1.0 - ((temperature_celsius - IDEAL_TEMPERATURE_CELSIUS).abs() / 50.0)
        .min(MAX_TEMPERATURE_PENALTY)
}

/// Round to two decimal places
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute every factor of an estimate without combining them
pub fn explain(
    crop: &Crop,
    area_hectares: f64,
    soil: &SoilSample,
    weather: &WeatherSnapshot,
) -> YieldBreakdown {
    YieldBreakdown {
        base_yield_per_hectare: crop.base_yield_per_hectare(),
        moisture_factor: moisture_factor(soil.moisture_percent),
        ph_factor: ph_factor(soil.ph),
        weather_factor: weather_factor(weather.temperature_celsius),
        area_hectares,
    }
}

/// Estimate the farm's yield from its crop, area and current conditions
pub fn estimate(
    crop: &Crop,
    area_hectares: f64,
    soil: &SoilSample,
    weather: &WeatherSnapshot,
) -> YieldEstimate {
    let breakdown = explain(crop, area_hectares, soil, weather);
    YieldEstimate {
        yield_tons: round_to_hundredths(breakdown.raw_yield_tons()),
        confidence: ESTIMATE_CONFIDENCE,
    }
}

/// Estimate the yield for a farm record
pub fn estimate_yield(farm: &FarmInput, soil: &SoilSample, weather: &WeatherSnapshot) -> YieldEstimate {
    estimate(&farm.crop, farm.area_hectares, soil, weather)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn soil(ph: f64, moisture: f64) -> SoilSample {
        SoilSample::new(ph, 2.5, moisture)
    }

    fn weather(temp: f64) -> WeatherSnapshot {
        WeatherSnapshot::new(temp, 10.0, "Clear")
    }

    #[test]
    fn test_moisture_factor_linear_region() {
        assert!(close(moisture_factor(24.0), 0.98));
        assert!(close(moisture_factor(25.0), 1.0));
        assert!(close(moisture_factor(30.0), 1.1));
    }

    #[test]
    fn test_moisture_factor_clamped() {
        assert_eq!(moisture_factor(0.0), 0.8);
        assert_eq!(moisture_factor(15.0), 0.8);
        assert_eq!(moisture_factor(35.0), 1.2);
        assert_eq!(moisture_factor(100.0), 1.2);
    }

    #[test]
    fn test_ph_factor() {
        assert_eq!(ph_factor(6.5), 1.0);
        assert!(close(ph_factor(5.5), 0.9));
        assert!(close(ph_factor(7.5), 0.9));
        assert!(close(ph_factor(0.0), 0.35));
    }

    #[test]
    fn test_ph_factor_goes_negative() {
        assert!(ph_factor(20.0) < 0.0);
        assert!(close(ph_factor(20.0), -0.35));
    }

    #[test]
    fn test_weather_factor() {
        assert_eq!(weather_factor(25.0), 1.0);
        assert!(close(weather_factor(29.0), 0.92));
        assert!(close(weather_factor(21.0), 0.92));
        assert!(close(weather_factor(40.0), 0.7));
        assert!(close(weather_factor(-30.0), 0.7));
        assert!(close(weather_factor(1000.0), 0.7));
    }

    #[test]
    fn test_round_to_hundredths() {
        assert!(close(round_to_hundredths(2.88512), 2.89));
        assert!(close(round_to_hundredths(2.884), 2.88));
        assert_eq!(round_to_hundredths(4.0), 4.0);
    }

    #[test]
    fn test_reference_wheat_estimate() {
        let farm = FarmInput::new(Crop::Wheat, 1.0);
        let soil = SoilSample::new(6.5, 1.8, 24.0);
        let estimate = estimate_yield(&farm, &soil, &weather(29.0));

        // 3.2 * 0.98 * 1.0 * 0.92 = 2.88512
        assert!(close(estimate.yield_tons, 2.89));
        assert_eq!(estimate.confidence, 0.82);
    }

    #[test]
    fn test_estimate_scales_with_area() {
        let one = estimate(&Crop::Maize, 1.0, &soil(6.5, 25.0), &weather(25.0));
        let ten = estimate(&Crop::Maize, 10.0, &soil(6.5, 25.0), &weather(25.0));
        assert!(close(one.yield_tons, 5.0));
        assert!(close(ten.yield_tons, 50.0));
    }

    #[test]
    fn test_explain_matches_estimate() {
        let breakdown = explain(&Crop::Rice, 2.0, &soil(6.0, 30.0), &weather(20.0));
        assert_eq!(breakdown.base_yield_per_hectare, 4.0);
        assert!(close(breakdown.moisture_factor, 1.1));
        assert!(close(breakdown.ph_factor, 0.95));
        assert!(close(breakdown.weather_factor, 0.9));

        let estimate = estimate(&Crop::Rice, 2.0, &soil(6.0, 30.0), &weather(20.0));
        assert_eq!(estimate.yield_tons, round_to_hundredths(breakdown.raw_yield_tons()));
    }

    #[test]
    fn test_confidence_is_constant() {
        for temp in [-10.0, 25.0, 60.0] {
            let estimate = estimate(&Crop::Cotton, 3.0, &soil(4.0, 5.0), &weather(temp));
            assert_eq!(estimate.confidence, ESTIMATE_CONFIDENCE);
        }
    }
}
