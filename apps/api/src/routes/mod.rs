pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::improve::handlers as improve;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume CRUD
        .route(
            "/api/resumes",
            get(resumes::handle_list_resumes).post(resumes::handle_create_resume),
        )
        .route(
            "/api/resumes/:id",
            get(resumes::handle_get_resume)
                .put(resumes::handle_update_resume)
                .delete(resumes::handle_delete_resume),
        )
        // AI improvement
        .route("/api/improve/summary", post(improve::handle_improve_summary))
        .route(
            "/api/improve/experience",
            post(improve::handle_improve_experience),
        )
        .with_state(state)
}
