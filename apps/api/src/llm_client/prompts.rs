// Shared prompt constants.
// Each feature that needs completions defines its own prompts.rs alongside it.

/// System message sent ahead of every user prompt.
pub const ASSISTANT_SYSTEM: &str = "You are a helpful AI assistant.";
