//! Axum route handler for the bullet optimizer.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::errors::{require_non_blank, AppError};
use crate::optimizer::rewrite::{optimize_resume_text, BulletAnalysis, SectionType};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeResumeRequest {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub text: String,
}

/// POST /optimize-resume
///
/// Rewrites the submitted text into 2–3 bullets and returns the model's feedback.
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeResumeRequest>, JsonRejection>,
) -> Result<Json<BulletAnalysis>, AppError> {
    let Json(request) = payload?;
    require_non_blank("text", &request.text)?;

    let analysis =
        optimize_resume_text(&request.text, request.section_type, state.llm.as_ref()).await?;

    Ok(Json(analysis))
}
