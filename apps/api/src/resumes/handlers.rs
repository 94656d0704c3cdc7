use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeDocument};
use crate::state::AppState;
use crate::validation::Validate;

/// Ids are positive integers; anything else names no resume.
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

fn not_found(raw: &str) -> AppError {
    AppError::NotFound(format!("Resume {raw} not found"))
}

/// POST /api/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeDocument>, JsonRejection>,
) -> Result<Json<Resume>, AppError> {
    let Json(document) = payload?;
    let document = document.validated()?;

    let resume = state.store.create(document).await?;
    info!("Created resume {}", resume.id);
    Ok(Json(resume))
}

/// GET /api/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let id = parse_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;
    let resume = state.store.get(id).await?.ok_or_else(|| not_found(&raw_id))?;
    Ok(Json(resume))
}

/// GET /api/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(state.store.list_all().await?))
}

/// PUT /api/resumes/:id
///
/// Replaces the whole document. Unknown ids are rejected with 404 rather than
/// created under the caller's key.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ResumeDocument>, JsonRejection>,
) -> Result<Json<Resume>, AppError> {
    let Json(document) = payload?;
    let document = document.validated()?;
    let id = parse_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;

    let resume = state.store.update(id, document).await?;
    info!("Updated resume {id}");
    Ok(Json(resume))
}

/// DELETE /api/resumes/:id
///
/// Always 204: deleting an id that does not exist (or cannot exist) is not an
/// error.
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if let Some(id) = parse_id(&raw_id) {
        state.store.delete(id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
