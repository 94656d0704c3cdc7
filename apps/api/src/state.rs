use std::sync::Arc;

use crate::improve::Improver;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Resume table. `MemoryStore` in production; any `ResumeStore` plugs in here.
    pub store: Arc<dyn ResumeStore>,
    pub improver: Improver,
}
