use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ImproveSummaryRequest {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImproveSummaryResponse {
    pub improved: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImproveExperienceRequest {
    pub description: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImproveExperienceResponse {
    pub improved: Vec<String>,
}

/// POST /api/improve/summary
pub async fn handle_improve_summary(
    State(state): State<AppState>,
    payload: Result<Json<ImproveSummaryRequest>, JsonRejection>,
) -> Result<Json<ImproveSummaryResponse>, AppError> {
    let Json(request) = payload?;
    let improved = state.improver.improve_summary(&request.summary).await?;
    Ok(Json(ImproveSummaryResponse { improved }))
}

/// POST /api/improve/experience
pub async fn handle_improve_experience(
    State(state): State<AppState>,
    payload: Result<Json<ImproveExperienceRequest>, JsonRejection>,
) -> Result<Json<ImproveExperienceResponse>, AppError> {
    let Json(request) = payload?;
    let improved = state
        .improver
        .improve_experience(&request.description)
        .await?;
    Ok(Json(ImproveExperienceResponse { improved }))
}
