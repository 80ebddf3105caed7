//! Parse/serialize façade over the delegated codec.
//!
//! Every function here forwards to `serde_json` and re-surfaces failures as
//! [`JsonError`]. The façade adds no syntax handling of its own; the brace
//! heuristics (`is_json*`) are deliberately shallow, matching how callers
//! cheaply route text before committing to a full parse.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::document::{JsonArray, JsonObject};
use crate::error::JsonError;

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parses text into an untyped JSON value.
pub fn parse(text: &str) -> Result<Value, JsonError> {
    serde_json::from_str(text).map_err(JsonError::codec)
}

/// Parses text whose root must be a JSON object.
pub fn parse_object(text: &str) -> Result<JsonObject, JsonError> {
    match parse(text)? {
        Value::Object(map) => Ok(JsonObject::from_map(map)),
        other => Err(JsonError::NotAnObject {
            found: value_kind(&other),
        }),
    }
}

/// Parses text whose root must be a JSON array.
pub fn parse_array(text: &str) -> Result<JsonArray, JsonError> {
    match parse(text)? {
        Value::Array(items) => Ok(JsonArray::from_vec(items)),
        other => Err(JsonError::NotAnArray {
            found: value_kind(&other),
        }),
    }
}

/// Binds text onto a concrete type via the codec.
pub fn from_str<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(JsonError::codec)
}

/// Serializes a value to compact JSON text.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::codec)
}

/// True when the trimmed text is brace- or bracket-delimited.
pub fn is_json(text: &str) -> bool {
    is_json_object(text) || is_json_array(text)
}

/// True when the trimmed text starts with `{` and ends with `}`.
pub fn is_json_object(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

/// True when the trimmed text starts with `[` and ends with `]`.
pub fn is_json_array(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}
