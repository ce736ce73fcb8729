// Resume bullet optimizer: rewrites an experience or project blurb into
// recruiter-style bullets and collects the model's feedback on the rewrite.

pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod rewrite;
