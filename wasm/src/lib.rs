//! WebAssembly module for the farm advisory dashboard
//!
//! Provides client-side computation for:
//! - Yield estimates and their factors
//! - Advisory recommendations
//! - Form validation
//! - Display text lookup

use serde::Deserialize;
use wasm_bindgen::prelude::*;

pub mod dashboard;
pub mod i18n;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

pub use dashboard::Dashboard;
use i18n::{StaticCatalog, Translator};

/// Form inputs as sent by the page
#[derive(Debug, Deserialize)]
struct FarmInputs {
    farm: FarmInput,
    soil: SoilSample,
    weather: WeatherSnapshot,
}

fn parse_inputs(inputs_json: &str) -> Result<FarmInputs, String> {
    serde_json::from_str(inputs_json).map_err(|e| format!("Invalid inputs JSON: {}", e))
}

fn estimate_json(inputs_json: &str) -> Result<String, String> {
    let inputs = parse_inputs(inputs_json)?;
    let estimate = shared::estimate_yield(&inputs.farm, &inputs.soil, &inputs.weather);
    serde_json::to_string(&estimate).map_err(|e| e.to_string())
}

fn advisories_json(inputs_json: &str) -> Result<String, String> {
    let inputs = parse_inputs(inputs_json)?;
    let advisories = shared::recommend_advisories(&inputs.farm, &inputs.soil, &inputs.weather);
    serde_json::to_string(&advisories).map_err(|e| e.to_string())
}

fn validate_json(inputs_json: &str) -> Result<(), String> {
    let inputs = parse_inputs(inputs_json)?;
    shared::validate_inputs(&inputs.farm, &inputs.soil, &inputs.weather).map_err(|e| e.to_string())
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"Farm advisory module loaded".into());
}

/// Estimate the yield from `{farm, soil, weather}` JSON
#[wasm_bindgen]
pub fn estimate_yield(inputs_json: &str) -> Result<String, JsValue> {
    estimate_json(inputs_json).map_err(|e| JsValue::from_str(&e))
}

/// Recommend advisories from `{farm, soil, weather}` JSON
#[wasm_bindgen]
pub fn recommend_advisories(inputs_json: &str) -> Result<String, JsValue> {
    advisories_json(inputs_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate `{farm, soil, weather}` JSON, failing with the first invalid field
#[wasm_bindgen]
pub fn validate_farm_inputs(inputs_json: &str) -> Result<(), JsValue> {
    validate_json(inputs_json).map_err(|e| JsValue::from_str(&e))
}

/// Display text for a key in the given locale
#[wasm_bindgen]
pub fn translate(key: &str, locale: &str) -> String {
    StaticCatalog.translate(key, Locale::from_code(locale))
}

/// Soil moisture multiplier
#[wasm_bindgen]
pub fn calculate_moisture_factor(moisture_percent: f64) -> f64 {
    shared::moisture_factor(moisture_percent)
}

/// Soil pH multiplier
#[wasm_bindgen]
pub fn calculate_ph_factor(ph: f64) -> f64 {
    shared::ph_factor(ph)
}

/// Temperature multiplier
#[wasm_bindgen]
pub fn calculate_weather_factor(temperature_celsius: f64) -> f64 {
    shared::weather_factor(temperature_celsius)
}

/// Base yield per hectare for a crop name
#[wasm_bindgen]
pub fn base_yield_per_hectare(crop: &str) -> f64 {
    Crop::parse(crop).base_yield_per_hectare()
}
