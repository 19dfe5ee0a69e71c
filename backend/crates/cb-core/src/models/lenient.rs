//! Field deserializers that coerce loosely typed values instead of failing.
//!
//! Records are hand-editable JSON. A wrongly typed field falls back to a
//! usable value so that the rest of the project still loads and is written
//! back on the next save.

use crate::FileLink;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings as-is; numbers and booleans as their JSON text; anything else empty.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Booleans as-is; non-zero numbers and "true"/"1" strings are `true`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => matches!(text.trim().to_lowercase().as_str(), "true" | "1"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    })
}

/// Integers, floats (truncated), numeric strings and booleans; values past
/// the `i32` range saturate, anything unparseable is 0.
pub(crate) fn completion<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::Bool(flag) => Some(i64::from(flag)),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    Ok(parsed
        .map(|n| n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
        .unwrap_or(0))
}

/// Object entries of an array become links; other entries are dropped and a
/// non-array is an empty list.
pub(crate) fn file_links<'de, D>(deserializer: D) -> Result<Vec<FileLink>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| FileLink::from_value(item).ok())
        .collect())
}
