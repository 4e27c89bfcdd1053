//! Validation utilities for farm inputs
//!
//! The estimator and the advisory rules accept any numbers. These checks are
//! the boundary policy applied before calling them with user-entered values.

use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{FarmInput, SoilSample, WeatherSnapshot};

/// Rejected input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },
}

impl ValidationError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidInput { field, .. } => field,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ValidationError::InvalidInput { message, .. } => message,
        }
    }
}

// ============================================================================
// Field Validations
// ============================================================================

/// Validate farm area is a positive number of hectares
pub fn validate_area(area_hectares: f64) -> Result<(), &'static str> {
    if !area_hectares.is_finite() {
        return Err("Area must be a number");
    }
    if area_hectares <= 0.0 {
        return Err("Area must be greater than zero");
    }
    Ok(())
}

/// Validate soil pH is on the 0-14 scale
pub fn validate_ph(ph: f64) -> Result<(), &'static str> {
    if !ph.is_finite() {
        return Err("pH must be a number");
    }
    if !(0.0..=14.0).contains(&ph) {
        return Err("pH must be between 0 and 14");
    }
    Ok(())
}

/// Validate a value is a percentage between 0 and 100
pub fn validate_percentage(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Percentage must be a number");
    }
    if !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

fn require_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::invalid(field, "Value must be a finite number"))
    }
}

/// Turn derive-based errors into the first failing field, by name
fn first_field_error(record: &str, errors: &ValidationErrors) -> ValidationError {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.into_iter().collect();
    fields.sort_by_key(|(name, _)| *name);

    match fields.first() {
        Some((name, errors)) => {
            let message = errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Value out of range".to_string());
            ValidationError::invalid(format!("{}.{}", record, name), message)
        }
        None => ValidationError::invalid(record, "Invalid record"),
    }
}

// ============================================================================
// Record Validations
// ============================================================================

pub fn validate_farm(farm: &FarmInput) -> Result<(), ValidationError> {
    validate_area(farm.area_hectares).map_err(|m| ValidationError::invalid("farm.area_hectares", m))
}

pub fn validate_soil(soil: &SoilSample) -> Result<(), ValidationError> {
    require_finite("soil.ph", soil.ph)?;
    require_finite("soil.organic_matter_percent", soil.organic_matter_percent)?;
    require_finite("soil.moisture_percent", soil.moisture_percent)?;
    soil.validate().map_err(|e| first_field_error("soil", &e))
}

pub fn validate_weather(weather: &WeatherSnapshot) -> Result<(), ValidationError> {
    require_finite("weather.temperature_celsius", weather.temperature_celsius)?;
    require_finite("weather.rain_next_7_days_mm", weather.rain_next_7_days_mm)?;
    weather.validate().map_err(|e| first_field_error("weather", &e))
}

/// Validate the inputs of one assessment, farm first, then soil, then weather
pub fn validate_inputs(
    farm: &FarmInput,
    soil: &SoilSample,
    weather: &WeatherSnapshot,
) -> Result<(), ValidationError> {
    validate_farm(farm)?;
    validate_soil(soil)?;
    validate_weather(weather)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_inputs() -> (FarmInput, SoilSample, WeatherSnapshot) {
        (
            FarmInput::new("wheat", 1.5),
            SoilSample::placeholder(),
            WeatherSnapshot::placeholder(),
        )
    }

    #[test]
    fn test_validate_area() {
        assert!(validate_area(0.1).is_ok());
        assert!(validate_area(250.0).is_ok());
        assert!(validate_area(0.0).is_err());
        assert!(validate_area(-1.0).is_err());
        assert!(validate_area(f64::NAN).is_err());
        assert!(validate_area(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_ph() {
        assert!(validate_ph(0.0).is_ok());
        assert!(validate_ph(6.5).is_ok());
        assert!(validate_ph(14.0).is_ok());
        assert!(validate_ph(-0.1).is_err());
        assert!(validate_ph(14.1).is_err());
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage(0.0).is_ok());
        assert!(validate_percentage(100.0).is_ok());
        assert!(validate_percentage(100.5).is_err());
        assert!(validate_percentage(-3.0).is_err());
    }

    #[test]
    fn test_valid_inputs_pass() {
        let (farm, soil, weather) = valid_inputs();
        assert!(validate_inputs(&farm, &soil, &weather).is_ok());
    }

    #[test]
    fn test_negative_area_rejected() {
        let (mut farm, soil, weather) = valid_inputs();
        farm.area_hectares = -2.0;
        let err = validate_inputs(&farm, &soil, &weather).unwrap_err();
        assert_eq!(err.field(), "farm.area_hectares");
    }

    #[test]
    fn test_soil_ranges_rejected() {
        let (farm, mut soil, weather) = valid_inputs();
        soil.moisture_percent = 120.0;
        let err = validate_inputs(&farm, &soil, &weather).unwrap_err();
        assert_eq!(err.field(), "soil.moisture_percent");
        assert_eq!(err.message(), "Moisture must be between 0 and 100%");

        let (farm, mut soil, weather) = valid_inputs();
        soil.ph = 15.0;
        let err = validate_inputs(&farm, &soil, &weather).unwrap_err();
        assert_eq!(err.field(), "soil.ph");

        let (farm, mut soil, weather) = valid_inputs();
        soil.organic_matter_percent = -0.5;
        let err = validate_inputs(&farm, &soil, &weather).unwrap_err();
        assert_eq!(err.field(), "soil.organic_matter_percent");
    }

    #[test]
    fn test_nan_rejected() {
        let (farm, mut soil, weather) = valid_inputs();
        soil.ph = f64::NAN;
        let err = validate_inputs(&farm, &soil, &weather).unwrap_err();
        assert_eq!(err.field(), "soil.ph");
    }

    #[test]
    fn test_weather_rejected() {
        let (farm, soil, mut weather) = valid_inputs();
        weather.rain_next_7_days_mm = -1.0;
        let err = validate_inputs(&farm, &soil, &weather).unwrap_err();
        assert_eq!(err.field(), "weather.rain_next_7_days_mm");

        let (farm, soil, mut weather) = valid_inputs();
        weather.temperature_celsius = f64::NEG_INFINITY;
        assert!(validate_inputs(&farm, &soil, &weather).is_err());
    }

    #[test]
    fn test_extreme_temperature_allowed() {
        let (farm, soil, mut weather) = valid_inputs();
        weather.temperature_celsius = -40.0;
        assert!(validate_inputs(&farm, &soil, &weather).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::invalid("farm.area_hectares", "Area must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid input for farm.area_hectares: Area must be greater than zero"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Inputs that pass validation always score to a finite estimate
        #[test]
        fn prop_valid_inputs_give_finite_estimates(
            area in 0.001f64..=10_000.0,
            ph in 0.0f64..=14.0,
            organic in 0.0f64..=50.0,
            moisture in 0.0f64..=100.0,
            temp in -60.0f64..=60.0,
            rain in 0.0f64..=1000.0
        ) {
            let farm = FarmInput::new("maize", area);
            let soil = SoilSample::new(ph, organic, moisture);
            let weather = WeatherSnapshot::new(temp, rain, "");
            prop_assert!(validate_inputs(&farm, &soil, &weather).is_ok());

            let estimate = crate::estimator::estimate_yield(&farm, &soil, &weather);
            prop_assert!(estimate.yield_tons.is_finite());
            prop_assert!(estimate.yield_tons >= 0.0);
        }
    }
}
