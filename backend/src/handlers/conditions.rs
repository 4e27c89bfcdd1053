//! HTTP handlers for current weather and soil readings

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::GpsCoordinates;
use std::time::Duration;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::{SoilReading, WeatherReading};
use crate::AppState;

/// Query parameters for the weather reading
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl LocationQuery {
    fn coordinates(&self) -> AppResult<Option<GpsCoordinates>> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                    return Err(AppError::ValidationError(
                        "Coordinates out of range".to_string(),
                    ));
                }
                Ok(Some(GpsCoordinates::new(lat, lon)))
            }
            (None, None) => Ok(None),
            _ => Err(AppError::ValidationError(
                "lat and lon must be given together".to_string(),
            )),
        }
    }
}

/// Query parameters for the soil reading
#[derive(Debug, Deserialize)]
pub struct SoilQuery {
    pub plot_id: Option<Uuid>,
}

async fn simulate_latency(state: &AppState) {
    let latency_ms = state.config.mock.latency_ms;
    if latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(latency_ms)).await;
    }
}

/// Get the current weather reading
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<WeatherReading>> {
    let location = query.coordinates()?;
    simulate_latency(&state).await;

    let reading = state.weather_source.current(location)?;
    Ok(Json(reading))
}

/// Get the latest soil reading
pub async fn get_soil(
    State(state): State<AppState>,
    Query(query): Query<SoilQuery>,
) -> AppResult<Json<SoilReading>> {
    simulate_latency(&state).await;

    let reading = state.soil_source.current(query.plot_id)?;
    Ok(Json(reading))
}
