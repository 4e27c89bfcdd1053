//! Dashboard state owned by the page
//!
//! The page holds one `Dashboard` and pushes form changes into it. Every
//! render runs the estimator and the advisory rules on the same inputs.

use serde::Serialize;
use shared::{
    estimate_yield, recommend_advisories, AdvisoryCategory, AdvisoryKind, Crop, FarmInput, Locale,
    SoilSample, WeatherSnapshot, YieldEstimate,
};
use wasm_bindgen::prelude::*;

use crate::i18n::{advisory_text, StaticCatalog, Translator};

/// Advisory as shown on screen
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryView {
    pub category: AdvisoryCategory,
    pub kind: AdvisoryKind,
    pub title: String,
    pub message: String,
}

/// Everything the page needs to draw the results panel
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub locale: Locale,
    pub farm: FarmInput,
    pub soil: SoilSample,
    pub weather: WeatherSnapshot,
    pub estimate: YieldEstimate,
    pub advisories: Vec<AdvisoryView>,
}

/// Form state for one dashboard page
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Dashboard {
    farm: FarmInput,
    soil: SoilSample,
    weather: WeatherSnapshot,
    locale: Locale,
}

#[wasm_bindgen]
impl Dashboard {
    /// Start with one hectare of wheat and the placeholder readings
    #[wasm_bindgen(constructor)]
    pub fn new(locale: &str) -> Dashboard {
        Dashboard {
            farm: FarmInput::new(Crop::default(), 1.0),
            soil: SoilSample::placeholder(),
            weather: WeatherSnapshot::placeholder(),
            locale: Locale::from_code(locale),
        }
    }

    pub fn set_farm(&mut self, crop: &str, area_hectares: f64) {
        self.farm = FarmInput::new(crop, area_hectares);
    }

    pub fn set_soil(&mut self, ph: f64, organic_matter_percent: f64, moisture_percent: f64) {
        self.soil = SoilSample::new(ph, organic_matter_percent, moisture_percent);
    }

    pub fn set_weather(&mut self, temperature_celsius: f64, rain_next_7_days_mm: f64, condition: &str) {
        self.weather = WeatherSnapshot::new(temperature_celsius, rain_next_7_days_mm, condition);
    }

    pub fn set_locale(&mut self, locale: &str) {
        self.locale = Locale::from_code(locale);
    }

    #[wasm_bindgen(getter)]
    pub fn locale(&self) -> String {
        self.locale.code().to_string()
    }

    /// Validation message for the current form, if any field is out of range
    pub fn validation_error(&self) -> Option<String> {
        shared::validate_inputs(&self.farm, &self.soil, &self.weather)
            .err()
            .map(|e| e.to_string())
    }

    /// Results panel as JSON
    pub fn render(&self) -> String {
        serde_json::to_string(&self.view()).unwrap_or_default()
    }
}

impl Dashboard {
    pub fn view(&self) -> DashboardView {
        let catalog = StaticCatalog;
        let estimate = estimate_yield(&self.farm, &self.soil, &self.weather);
        let advisories = recommend_advisories(&self.farm, &self.soil, &self.weather)
            .into_iter()
            .map(|advisory| AdvisoryView {
                category: advisory.category,
                kind: advisory.kind,
                title: catalog.translate(&category_key(advisory.category), self.locale),
                message: advisory_text(&catalog, advisory.kind, self.locale),
            })
            .collect();

        DashboardView {
            locale: self.locale,
            farm: self.farm.clone(),
            soil: self.soil.clone(),
            weather: self.weather.clone(),
            estimate,
            advisories,
        }
    }
}

fn category_key(category: AdvisoryCategory) -> String {
    format!("category.{}", category.to_string().to_lowercase())
}
