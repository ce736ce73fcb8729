// Prompt template for skill extraction. The category lines requested here must
// match the labels in `parser::SkillCategory` exactly.

/// Skill extraction prompt template. Replace `{resume_text}` before sending.
pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = r#"
You are an ATS-style resume parser and technical resume expert.

TASK
Extract only the technical skills that are clearly and explicitly mentioned in the resume below. Do NOT guess or assume skills that are not stated. If something is mentioned only once in passing, include it only if it clearly reflects a skill or tool the candidate used.

GUIDELINES
• Include a skill only if it is explicitly written or clearly referenced in projects, experience, or education.
• Do NOT hallucinate or infer skills that are absent from the resume.
• Treat the resume content as the only source of truth.

FORMAT
Output the skills grouped exactly like this (write a dash "—" when a group is empty):

Languages: <comma-separated list or —>
Frameworks/Tools: <comma-separated list or —>
Concepts / Topics: <comma-separated list or —>
Others: <comma-separated list or —>

RESUME
{resume_text}
"#;

/// Embeds the resume text verbatim into the extraction template.
pub fn build_skill_prompt(resume_text: &str) -> String {
    SKILL_EXTRACTION_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}
