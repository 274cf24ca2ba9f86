//! Pull a structured document out of a model reply.
//!
//! Models asked for "JSON only" still wrap it in code fences or a sentence
//! of preamble now and then. These helpers find the first balanced JSON
//! object in the reply and deserialize it.

use serde::de::DeserializeOwned;

use crate::error::GenerationError;

/// Deserialize the first JSON object found in `reply` as `T`.
pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, GenerationError> {
    let json = extract_json_object(reply)
        .ok_or_else(|| GenerationError::ResponseParse(format!("no JSON object in reply: {reply}")))?;
    serde_json::from_str(json)
        .map_err(|e| GenerationError::SchemaViolation(format!("{e}. Response: {reply}")))
}

/// Locate the JSON object in a reply, preferring a fenced code block.
pub fn extract_json_object(reply: &str) -> Option<&str> {
    let trimmed = reply.trim();
    let body = fenced_block(trimmed).unwrap_or(trimmed);
    let start = body.find('{')?;
    balanced_object(body, start)
}

fn fenced_block(s: &str) -> Option<&str> {
    for fence in ["```json", "```"] {
        if let Some(start) = s.find(fence) {
            let rest = &s[start + fence.len()..];
            if let Some(end) = rest.find("```") {
                return Some(rest[..end].trim());
            }
        }
    }
    None
}

fn balanced_object(s: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, c) in s[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&s[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
