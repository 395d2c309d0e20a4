use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::{QuizError, QuizResult};

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json|JSON)?\s*(.*?)```").expect("CODE_FENCE is a valid regex pattern")
});

/// Pull the JSON payload out of a chat completion. Models often wrap it in
/// a Markdown fence or add a sentence before and after it.
pub fn parse_model_output(text: &str) -> QuizResult<Value> {
    let body = CODE_FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text);

    let start = body.find('{');
    let end = body.rfind('}');
    let candidate = match (start, end) {
        (Some(start), Some(end)) if start < end => &body[start..=end],
        _ => {
            return Err(QuizError::MalformedModelOutput(
                "no JSON object found".to_string(),
            ))
        }
    };

    serde_json::from_str(candidate).map_err(|e| QuizError::MalformedModelOutput(e.to_string()))
}
