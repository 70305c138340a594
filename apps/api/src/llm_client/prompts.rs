// Shared prompt constants. Each flow that calls the generator keeps its own
// prompts.rs alongside it; only cross-cutting fragments live here.

/// Appended to every JSON generation prompt.
pub const JSON_RESPONSE_INSTRUCTION: &str = "IMPORTANT: Respond with a single valid JSON object \
    matching the requested shape. No markdown, no code blocks, no commentary.";
