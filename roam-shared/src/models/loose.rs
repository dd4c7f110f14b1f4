//! Normalizing readers for loosely-shaped JSON.
//!
//! Upstream package documents are not validated by the backend: any field
//! may be missing, `null`, or of the wrong type. Every read goes through one
//! of these functions so that "absent", "null", "wrong shape" and "empty"
//! collapse into a single `None` / empty case.

use serde_json::Value;

/// Look up `key` on a value that may not be an object.
pub fn field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.as_object()?.get(key)
}

/// Display text for a scalar field.
///
/// Strings are returned verbatim unless empty, numbers in their raw JSON
/// form (`5000`, `4.5`). Anything else is treated as absent.
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Elements of a sequence field; empty for anything that is not a non-empty array.
pub fn sequence(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}
