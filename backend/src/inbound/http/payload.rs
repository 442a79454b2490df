//! Lenient readers for loosely typed JSON request fields.
//!
//! Clients may send any JSON value for a field. Presence rules live in the
//! domain, so values that cannot stand in for text are passed on as absent
//! rather than failing the whole body.

use serde_json::Value;

/// Keep JSON strings; every other value counts as absent.
pub(crate) fn string_only(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

/// Render any non-null value as text.
///
/// Numbers become their decimal form, so `1` and `"1"` read the same.
pub(crate) fn scalar_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
