//! Embedded JSON object with typed accessors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::convert;
use crate::datetime::Timestamp;
use crate::document::JsonArray;
use crate::error::JsonError;

/// A JSON object: an insertion-ordered string-keyed map of JSON values.
///
/// Thin wrapper over the codec's map type. The typed accessors coerce
/// through [`convert`], so `get_i64("n")` reads `"1,234"` and `1234` alike;
/// an absent key or JSON `null` reads as `None`, a value of the wrong shape
/// is a [`JsonError::Cast`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonObject {
    map: Map<String, Value>,
}

impl JsonObject {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self { map: Map::new() }
    }

    /// Wraps an existing map.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self { map }
    }

    /// Consumes the wrapper, returning the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Raw value at `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Inserts a value, returning the previous one at that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.map.insert(key.into(), value.into())
    }

    /// Removes the value at `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.map.remove(key)
    }

    pub fn clear(&mut self) {
        self.map.clear()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.map.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.map.iter()
    }

    // =========================================================================
    // TYPED ACCESSORS
    // =========================================================================

    /// Nested object at `key`; `None` when absent or not an object.
    pub fn get_object(&self, key: &str) -> Option<JsonObject> {
        match self.map.get(key) {
            Some(Value::Object(map)) => Some(JsonObject { map: map.clone() }),
            _ => None,
        }
    }

    /// Nested array at `key`; `None` when absent or not an array.
    pub fn get_array(&self, key: &str) -> Option<JsonArray> {
        match self.map.get(key) {
            Some(Value::Array(items)) => Some(JsonArray::from_vec(items.clone())),
            _ => None,
        }
    }

    /// Borrowed string at `key`; `None` when absent or not a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.map.get(key).and_then(Value::as_str)
    }

    /// String rendering of the value at `key` (non-strings render as JSON
    /// text).
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.map.get(key).and_then(convert::cast_to_string)
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, JsonError> {
        match self.map.get(key) {
            Some(value) => convert::cast_to_bool(value),
            None => Ok(None),
        }
    }

    /// Like [`get_bool`](Self::get_bool), reading absent as `false`.
    pub fn get_bool_value(&self, key: &str) -> Result<bool, JsonError> {
        Ok(self.get_bool(key)?.unwrap_or(false))
    }

    pub fn get_char(&self, key: &str) -> Result<Option<char>, JsonError> {
        match self.map.get(key) {
            Some(value) => convert::cast_to_char(value),
            None => Ok(None),
        }
    }

    pub fn get_i32(&self, key: &str) -> Result<Option<i32>, JsonError> {
        match self.map.get(key) {
            Some(value) => convert::cast_to_i32(value),
            None => Ok(None),
        }
    }

    /// Like [`get_i32`](Self::get_i32), reading absent as `0`.
    pub fn get_i32_value(&self, key: &str) -> Result<i32, JsonError> {
        Ok(self.get_i32(key)?.unwrap_or(0))
    }

    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, JsonError> {
        match self.map.get(key) {
            Some(value) => convert::cast_to_i64(value),
            None => Ok(None),
        }
    }

    /// Like [`get_i64`](Self::get_i64), reading absent as `0`.
    pub fn get_i64_value(&self, key: &str) -> Result<i64, JsonError> {
        Ok(self.get_i64(key)?.unwrap_or(0))
    }

    pub fn get_f64(&self, key: &str) -> Result<Option<f64>, JsonError> {
        match self.map.get(key) {
            Some(value) => convert::cast_to_f64(value),
            None => Ok(None),
        }
    }

    /// Like [`get_f64`](Self::get_f64), reading absent as `0.0`.
    pub fn get_f64_value(&self, key: &str) -> Result<f64, JsonError> {
        Ok(self.get_f64(key)?.unwrap_or(0.0))
    }

    /// Date-valued field at `key`, through the full resolver pipeline.
    pub fn get_timestamp(&self, key: &str) -> Result<Option<Timestamp>, JsonError> {
        match self.map.get(key) {
            Some(value) => convert::cast_to_timestamp(value),
            None => Ok(None),
        }
    }

    /// Binds the object onto a concrete type via the codec.
    pub fn to_typed<T: serde::de::DeserializeOwned>(&self) -> Result<T, JsonError> {
        serde_json::from_value(Value::Object(self.map.clone())).map_err(JsonError::codec)
    }

    /// The object as compact JSON text.
    pub fn to_json_string(&self) -> String {
        Value::Object(self.map.clone()).to_string()
    }
}

impl std::fmt::Display for JsonObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl From<Map<String, Value>> for JsonObject {
    fn from(map: Map<String, Value>) -> Self {
        Self { map }
    }
}

impl From<JsonObject> for Value {
    fn from(object: JsonObject) -> Self {
        Value::Object(object.map)
    }
}

impl FromIterator<(String, Value)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}
