//! Embedded JSON array with typed accessors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::convert;
use crate::datetime::Timestamp;
use crate::document::JsonObject;
use crate::error::JsonError;

/// A JSON array: a list of JSON values with index-based typed accessors.
///
/// Coercion rules are identical to [`JsonObject`]'s; an out-of-range index
/// or JSON `null` element reads as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonArray {
    items: Vec<Value>,
}

impl JsonArray {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Wraps an existing list.
    pub fn from_vec(items: Vec<Value>) -> Self {
        Self { items }
    }

    /// Consumes the wrapper, returning the underlying list.
    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }

    /// Borrows the underlying list.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Raw value at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Appends a value.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Removes and returns the value at `index`, if in range.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    // =========================================================================
    // TYPED ACCESSORS
    // =========================================================================

    /// Nested object at `index`; `None` when out of range or not an object.
    pub fn get_object(&self, index: usize) -> Option<JsonObject> {
        match self.items.get(index) {
            Some(Value::Object(map)) => Some(JsonObject::from_map(map.clone())),
            _ => None,
        }
    }

    /// Nested array at `index`; `None` when out of range or not an array.
    pub fn get_array(&self, index: usize) -> Option<JsonArray> {
        match self.items.get(index) {
            Some(Value::Array(items)) => Some(JsonArray::from_vec(items.clone())),
            _ => None,
        }
    }

    /// Borrowed string at `index`; `None` when out of range or not a string.
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.items.get(index).and_then(Value::as_str)
    }

    /// String rendering of the value at `index`.
    pub fn get_string(&self, index: usize) -> Option<String> {
        self.items.get(index).and_then(convert::cast_to_string)
    }

    pub fn get_bool(&self, index: usize) -> Result<Option<bool>, JsonError> {
        match self.items.get(index) {
            Some(value) => convert::cast_to_bool(value),
            None => Ok(None),
        }
    }

    /// Like [`get_bool`](Self::get_bool), reading absent as `false`.
    pub fn get_bool_value(&self, index: usize) -> Result<bool, JsonError> {
        Ok(self.get_bool(index)?.unwrap_or(false))
    }

    pub fn get_i32(&self, index: usize) -> Result<Option<i32>, JsonError> {
        match self.items.get(index) {
            Some(value) => convert::cast_to_i32(value),
            None => Ok(None),
        }
    }

    /// Like [`get_i32`](Self::get_i32), reading absent as `0`.
    pub fn get_i32_value(&self, index: usize) -> Result<i32, JsonError> {
        Ok(self.get_i32(index)?.unwrap_or(0))
    }

    pub fn get_i64(&self, index: usize) -> Result<Option<i64>, JsonError> {
        match self.items.get(index) {
            Some(value) => convert::cast_to_i64(value),
            None => Ok(None),
        }
    }

    /// Like [`get_i64`](Self::get_i64), reading absent as `0`.
    pub fn get_i64_value(&self, index: usize) -> Result<i64, JsonError> {
        Ok(self.get_i64(index)?.unwrap_or(0))
    }

    pub fn get_f64(&self, index: usize) -> Result<Option<f64>, JsonError> {
        match self.items.get(index) {
            Some(value) => convert::cast_to_f64(value),
            None => Ok(None),
        }
    }

    /// Date-valued element at `index`, through the full resolver pipeline.
    pub fn get_timestamp(&self, index: usize) -> Result<Option<Timestamp>, JsonError> {
        match self.items.get(index) {
            Some(value) => convert::cast_to_timestamp(value),
            None => Ok(None),
        }
    }

    /// Binds every element onto a concrete type via the codec.
    pub fn to_typed_vec<T: serde::de::DeserializeOwned>(&self) -> Result<Vec<T>, JsonError> {
        serde_json::from_value(Value::Array(self.items.clone())).map_err(JsonError::codec)
    }

    /// The array as compact JSON text.
    pub fn to_json_string(&self) -> String {
        Value::Array(self.items.clone()).to_string()
    }
}

impl std::fmt::Display for JsonArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl From<Vec<Value>> for JsonArray {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl From<JsonArray> for Value {
    fn from(array: JsonArray) -> Self {
        Value::Array(array.items)
    }
}

impl FromIterator<Value> for JsonArray {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for JsonArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
