//! Node-type helpers over the decoded value tree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonNodeType {
    String,
    Number,
    Boolean,
    Null,
    Array,
    Object,
}

pub fn node_type(value: &Value) -> JsonNodeType {
    match value {
        Value::Null => JsonNodeType::Null,
        Value::Bool(_) => JsonNodeType::Boolean,
        Value::Number(_) => JsonNodeType::Number,
        Value::String(_) => JsonNodeType::String,
        Value::Array(_) => JsonNodeType::Array,
        Value::Object(_) => JsonNodeType::Object,
    }
}

pub fn is_container(node_type: JsonNodeType) -> bool {
    matches!(node_type, JsonNodeType::Array | JsonNodeType::Object)
}

/// `array(n)` / `object(n)` summary for a collapsed container, `None` for
/// leaves.
pub fn container_summary(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => Some(format!("array({})", items.len())),
        Value::Object(members) => Some(format!("object({})", members.len())),
        _ => None,
    }
}

/// Head…tail truncation for long string display.
pub fn middle_ellipsis(text: &str, max_len: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_len {
        return text.to_string();
    }

    let keep = (max_len.saturating_sub(1) / 2).max(10).min(chars.len());
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}…{}", head, tail)
}
