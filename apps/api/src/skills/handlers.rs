//! Axum route handler for skill extraction.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::errors::{require_non_blank, AppError};
use crate::skills::extract::{extract_skills, SkillCategories};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub resume_text: String,
}

/// POST /extract-skills
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    payload: Result<Json<ExtractSkillsRequest>, JsonRejection>,
) -> Result<Json<SkillCategories>, AppError> {
    let Json(request) = payload?;
    require_non_blank("resume_text", &request.resume_text)?;

    let skills = extract_skills(&request.resume_text, state.llm.as_ref()).await?;

    Ok(Json(skills))
}
