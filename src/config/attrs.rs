// SPDX-License-Identifier: MPL-2.0
//! Lenient readers for JSON configuration attributes.
//!
//! Gallery and item attributes come from markup authored by hand, so every
//! reader here recovers instead of failing: an unparsable attribute becomes an
//! empty object (with a warning), and each field is validated on its own so
//! one bad value never invalidates its neighbours.

use serde_json::{Map, Value};

/// A parsed attribute object. Missing or malformed input yields an empty map.
pub type Attributes = Map<String, Value>;

/// Parses a raw attribute string into an object.
///
/// `what` names the attribute in the warning emitted on failure.
#[must_use]
pub fn parse_object(raw: Option<&str>, what: &str) -> Attributes {
    let Some(raw) = raw else {
        return Attributes::new();
    };
    if raw.trim().is_empty() {
        return Attributes::new();
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::warn!(attribute = what, found = %type_name(&other), "expected a JSON object");
            Attributes::new()
        }
        Err(err) => {
            tracing::warn!(attribute = what, error = %err, "invalid JSON attribute");
            Attributes::new()
        }
    }
}

/// Reads an integer field. Accepts JSON numbers (truncated toward zero) and
/// strings with a leading integer prefix such as `"20px"`.
#[must_use]
pub fn int_field(attrs: &Attributes, key: &str) -> Option<i64> {
    match attrs.get(key)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|v| v.is_finite()).map(|v| v.trunc() as i64)),
        Value::String(text) => parse_int_prefix(text),
        _ => None,
    }
}

/// Reads a non-negative integer field that fits in `u32`.
#[must_use]
pub fn non_negative_field(attrs: &Attributes, key: &str) -> Option<u32> {
    int_field(attrs, key).and_then(|v| u32::try_from(v).ok())
}

/// Reads a string field. Non-string values are treated as missing.
#[must_use]
pub fn string_field(attrs: &Attributes, key: &str) -> Option<String> {
    match attrs.get(key)? {
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}

/// Reads a boolean field. Only JSON booleans are accepted.
#[must_use]
pub fn bool_field(attrs: &Attributes, key: &str) -> Option<bool> {
    attrs.get(key)?.as_bool()
}

/// Parses the leading integer of `text`, ignoring leading whitespace and any
/// trailing garbage. Returns `None` when no digit follows the optional sign.
fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
