// Shared system prompts. Each module that calls the model keeps its own
// prompt templates in a prompts.rs alongside it.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for free-text email drafting.
pub const EMAIL_SYSTEM: &str = "You are a professional recruiter writing to candidates. \
    Respond with the email body only. \
    Do NOT include a subject line, JSON, or commentary about the email.";
