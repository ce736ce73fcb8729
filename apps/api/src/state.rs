use std::sync::Arc;

use crate::llm_client::Completion;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn Completion>,
}
