// Skill extraction: pulls explicitly mentioned technical skills out of a resume
// and groups them under four fixed category labels.

pub mod extract;
pub mod handlers;
pub mod parser;
pub mod prompts;
