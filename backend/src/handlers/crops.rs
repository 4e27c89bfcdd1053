//! HTTP handlers for the crop catalog

use axum::Json;
use serde::Serialize;

use crate::models::{Crop, FALLBACK_BASE_YIELD};

#[derive(Debug, Serialize)]
pub struct CropInfo {
    pub crop: Crop,
    pub base_yield_per_hectare: f64,
}

#[derive(Debug, Serialize)]
pub struct CropCatalog {
    pub crops: Vec<CropInfo>,
    /// Base yield applied to crops not listed
    pub fallback_base_yield_per_hectare: f64,
}

/// List the crops offered by the entry form
pub async fn list_crops() -> Json<CropCatalog> {
    let crops = Crop::KNOWN
        .into_iter()
        .map(|crop| CropInfo {
            base_yield_per_hectare: crop.base_yield_per_hectare(),
            crop,
        })
        .collect();

    Json(CropCatalog {
        crops,
        fallback_base_yield_per_hectare: FALLBACK_BASE_YIELD,
    })
}
