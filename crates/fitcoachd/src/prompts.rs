//! Prompt building for the analysis request.

use serde_json::Value;

/// Reply shape the model is told to use. The extractor is tolerant, but the
/// instruction keeps well-behaved models on the happy path.
const REPLY_EXAMPLE: &str = r#"{"analysis": "Your personalized analysis here"}"#;

/// Build the analysis prompt. Both records are embedded verbatim as compact
/// JSON; nothing is inspected or rewritten, so the same inputs always yield
/// the same prompt.
pub fn build_analysis_prompt(user_data: &Value, exercise_data: &Value) -> String {
    format!(
        r#"You are a professional fitness and health coach. Analyze the user profile and the exercise data below, then give personalized, actionable advice.

User data:
{user_data}

Exercise data:
{exercise_data}

Respond ONLY with a valid JSON object containing a single key "analysis", like this:
{REPLY_EXAMPLE}

No markdown fences, no text outside the JSON object."#
    )
}
