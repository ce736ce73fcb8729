use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::errors::{require_non_blank, AppError};
use crate::llm_client::CompletionResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub prompt: String,
}

/// POST /analyze
///
/// Sends the prompt as-is and returns the raw completion with its metadata.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<CompletionResult>, AppError> {
    let Json(request) = payload?;
    require_non_blank("prompt", &request.prompt)?;

    let completion = state
        .llm
        .complete(&request.prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(completion))
}
