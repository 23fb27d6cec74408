//! Loose value semantics shared by the existence and equality tests.

use serde_json::{Number, Value};

/// Whether a property value counts as empty.
///
/// `null`, `false`, zero, `""`, `"0"` and `[]` are empty. Objects never are.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

/// Case-insensitive loose equality between a property value and a literal.
///
/// Both sides are rendered as lowercase strings; when both renderings are
/// numeric they are compared as numbers, so `3`, `"3"` and `"3.0"` are all
/// equal. Arrays and objects never equal anything.
pub fn loose_eq(value: &Value, literal: &Value) -> bool {
    let (Some(left), Some(right)) = (render(value), render(literal)) else {
        return false;
    };
    match (numeric(&left), numeric(&right)) {
        (Some(a), Some(b)) => a == b,
        _ => left == right,
    }
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => Some(String::new()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Number(n) => Some(render_number(n)),
        Value::String(s) => Some(s.to_lowercase()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

fn numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}
