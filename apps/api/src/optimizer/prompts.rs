// Prompt template for rewriting a resume section into bullet points.
// The formatting rules are requests to the model; the parser does not enforce them.

/// Bullet rewrite prompt template. Replace `{user_text}` before sending.
pub const BULLET_REWRITE_PROMPT_TEMPLATE: &str = r#"
You are a senior technical recruiter and professional resume writer.

TASK
Rewrite the **Input** below into **2–3 bullet points** that follow EVERY rule:

1. **Action-verb start** – open each bullet with a strong verb (Designed, Implemented, Optimized…)
2. **Quantify or qualify impact** – add numbers, scale, speed, %, or "X users" where the input allows; if no data is given, infer a reasonable scope
3. **Highlight tech & domain** – name the key tools, frameworks, languages, clouds, databases, or research focus
4. **Format** – one clean sentence per bullet, no period at the end, each bullet on its own line
5. **Length** – at most 25 words per bullet. No headers, no summaries, no blank line at the end
6. **Voice & tone** – concise, professional, third-person (no "I", "my"), past tense unless the input contains the word "currently" (then use present tense)
7. **ATS-friendly** – no first-person pronouns, fluff, or generic adjectives; keep the keywords

OUTPUT FORMAT:
- Bullet 1
- Bullet 2
- Optional Bullet 3

Then write a **Feedback** section (3–4 lines max) covering:
- Tips and suggestions
- Which improvements were made
- Why the new bullet points are stronger
- How the wording improves clarity, professionalism, or technical depth

INPUT
{user_text}
"#;

/// Embeds the caller's text verbatim into the rewrite template.
pub fn build_bullet_prompt(user_text: &str) -> String {
    BULLET_REWRITE_PROMPT_TEMPLATE.replace("{user_text}", user_text)
}
