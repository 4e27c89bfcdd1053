//! HTTP handlers for yield prediction and advisories

use axum::{extract::State, Json};

use crate::error::{AppJson, AppResult};
use crate::models::Advisory;
use crate::services::prediction::{AssessmentInput, AssessmentResponse, PredictResponse};
use crate::AppState;

/// Predict the yield for a farm
pub async fn predict(
    State(state): State<AppState>,
    AppJson(input): AppJson<AssessmentInput>,
) -> AppResult<Json<PredictResponse>> {
    let response = state.prediction_service().predict(input)?;
    Ok(Json(response))
}

/// Recommend advisories for a farm
pub async fn recommend(
    State(state): State<AppState>,
    AppJson(input): AppJson<AssessmentInput>,
) -> AppResult<Json<Vec<Advisory>>> {
    let advisories = state.prediction_service().advisories(input)?;
    Ok(Json(advisories))
}

/// Estimate and advise in one request
pub async fn assess(
    State(state): State<AppState>,
    AppJson(input): AppJson<AssessmentInput>,
) -> AppResult<Json<AssessmentResponse>> {
    let assessment = state.prediction_service().assess(input)?;
    Ok(Json(assessment))
}
