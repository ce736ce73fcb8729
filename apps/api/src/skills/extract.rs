//! Skill extraction pipeline: build prompt → complete → parse.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::{Completion, CompletionMetadata};
use crate::skills::parser::{parse_skill_reply, render_categories, CategoryMap};
use crate::skills::prompts::build_skill_prompt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategories {
    pub categories: CategoryMap,
    pub metadata: CompletionMetadata,
}

pub async fn extract_skills(
    resume_text: &str,
    llm: &dyn Completion,
) -> Result<SkillCategories, AppError> {
    let prompt = build_skill_prompt(resume_text);
    let completion = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let categories = parse_skill_reply(&completion.text);
    debug!("Extracted skills:\n{}", render_categories(&categories));

    Ok(SkillCategories {
        categories,
        metadata: completion.metadata,
    })
}
