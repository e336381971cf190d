//! Best-effort extraction of the analysis text from a raw generate response.
//!
//! The upstream model is asked for a bare `{"analysis": "..."}` object but
//! does not reliably comply: answers arrive wrapped in markdown fences,
//! buried in prose, or truncated mid-object. This module never fails. It
//! walks an ordered fallback chain and returns the best text it can find,
//! degrading from the clean answer to cleaned text to the raw body.

use serde_json::Value;

/// Extract the analysis answer from a raw upstream response body.
///
/// Fallback order:
/// 1. locate `candidates[0].content.parts[0].text`, empty if absent
/// 2. strip an enclosing markdown code fence and trim
/// 3. take the first `{` through the last `}` and parse it as JSON,
///    returning the string under `"analysis"` if present
/// 4. otherwise return the cleaned text
///
/// A body that is not JSON at all comes back unchanged.
pub fn extract_analysis(raw_body: &str) -> String {
    let Ok(body) = serde_json::from_str::<Value>(raw_body) else {
        return raw_body.to_string();
    };

    let fragment = generated_text(&body).unwrap_or_default();
    let cleaned = strip_code_fence(fragment);

    if let Some(span) = json_object_span(cleaned) {
        if let Ok(parsed) = serde_json::from_str::<Value>(span) {
            if let Some(analysis) = parsed.get("analysis").and_then(|v| v.as_str()) {
                return analysis.to_string();
            }
        }
    }

    cleaned.to_string()
}

/// First generated text fragment at the expected response path.
fn generated_text(body: &Value) -> Option<&str> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// Strip one enclosing markdown code fence, language tag included.
fn strip_code_fence(text: &str) -> &str {
    let mut t = text.trim();
    if let Some(rest) = t.strip_prefix("```") {
        // Drop the language tag line when the fence opens one
        t = match rest.find('\n') {
            Some(idx) => &rest[idx + 1..],
            None => rest,
        };
        t = t.trim_end();
        if let Some(inner) = t.strip_suffix("```") {
            t = inner;
        }
        t = t.trim();
    }
    t
}

/// First `{` through last `}` in the text, when both exist in that order.
fn json_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}
