//! Bullet rewrite pipeline: build prompt → complete → parse.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::{Completion, CompletionMetadata};
use crate::optimizer::parser::parse_bullet_reply;
use crate::optimizer::prompts::build_bullet_prompt;

/// Which resume section the text came from. Echoed back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Experience,
    Project,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletAnalysis {
    pub bullet_points: Vec<String>,
    pub feedback: Vec<String>,
    pub section_type: SectionType,
    pub original_text: String,
    pub metadata: CompletionMetadata,
}

pub async fn optimize_resume_text(
    text: &str,
    section_type: SectionType,
    llm: &dyn Completion,
) -> Result<BulletAnalysis, AppError> {
    let prompt = build_bullet_prompt(text);
    let completion = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let parsed = parse_bullet_reply(&completion.text);
    debug!(
        "Parsed {} bullet(s) and {} feedback line(s) for {:?}",
        parsed.bullet_points.len(),
        parsed.feedback.len(),
        section_type
    );

    Ok(BulletAnalysis {
        bullet_points: parsed.bullet_points,
        feedback: parsed.feedback,
        section_type,
        original_text: text.to_string(),
        metadata: completion.metadata,
    })
}
