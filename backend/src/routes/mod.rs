//! Route definitions for the farm advisory server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Crop catalog
        .route("/crops", get(handlers::list_crops))
        // Current conditions (mocked feeds)
        .merge(condition_routes())
        // Yield prediction and advisories
        .merge(prediction_routes())
}

/// Weather and soil reading routes
fn condition_routes() -> Router<AppState> {
    Router::new()
        .route("/weather", get(handlers::get_weather))
        .route("/soil", get(handlers::get_soil))
}

/// Prediction and advisory routes
fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(handlers::predict))
        .route("/advisories", post(handlers::recommend))
        .route("/assessment", post(handlers::assess))
}
