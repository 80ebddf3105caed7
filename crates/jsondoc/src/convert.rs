//! Type coercion from JSON values to primitives.
//!
//! The accessors on [`JsonObject`](crate::document::JsonObject) and
//! [`JsonArray`](crate::document::JsonArray) funnel through these helpers, so
//! all containers coerce identically: `null`, the empty string and the
//! literal strings `"null"`/`"NULL"` read as absent; numeric strings may
//! carry thousands-separator commas; booleans coerce to 0/1. A value that
//! cannot be coerced is a typed error, never a panic.

use serde_json::Value;

use crate::datetime::{resolve_datetime, Timestamp};
use crate::error::JsonError;

#[inline]
fn is_absent_text(text: &str) -> bool {
    text.is_empty() || text == "null" || text == "NULL"
}

/// Strips thousands-separator commas: `"1,234,567"` reads as `1234567`.
fn without_commas(text: &str) -> String {
    text.replace(',', "")
}

/// Strips a trailing `.0*` from an integer-valued decimal string, so
/// `"42.000"` casts to the integer `42` while `"42.5"` stays an error.
fn without_trailing_zero_fraction(text: &str) -> &str {
    match text.find('.') {
        Some(dot) if text[dot + 1..].bytes().all(|b| b == b'0') => &text[..dot],
        _ => text,
    }
}

/// Coerces to text. `null` is absent; non-string scalars and containers
/// render as their JSON text.
pub fn cast_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Coerces to a boolean: numbers compare against 1, and the string spellings
/// `true`/`false` (any case), `"1"`/`"0"`, `Y`/`T` and `F`/`N` are accepted.
pub fn cast_to_bool(value: &Value) -> Result<Option<bool>, JsonError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        Value::Number(n) => Ok(Some(n.as_i64() == Some(1))),
        Value::String(text) => {
            if is_absent_text(text) {
                return Ok(None);
            }
            if text.eq_ignore_ascii_case("true") || text == "1" {
                return Ok(Some(true));
            }
            if text.eq_ignore_ascii_case("false") || text == "0" {
                return Ok(Some(false));
            }
            if text.eq_ignore_ascii_case("y") || text == "T" {
                return Ok(Some(true));
            }
            if text.eq_ignore_ascii_case("f") || text == "N" {
                return Ok(Some(false));
            }
            Err(JsonError::cast("bool", value))
        }
        _ => Err(JsonError::cast("bool", value)),
    }
}

/// Coerces to a single character: only one-character strings qualify.
pub fn cast_to_char(value: &Value) -> Result<Option<char>, JsonError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (None, _) => Ok(None),
                (Some(c), None) => Ok(Some(c)),
                _ => Err(JsonError::cast("char", value)),
            }
        }
        _ => Err(JsonError::cast("char", value)),
    }
}

/// Coerces to `i64`. Floating-point numbers truncate; numeric strings may
/// carry commas.
pub fn cast_to_i64(value: &Value) -> Result<Option<i64>, JsonError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => match n.as_i64() {
            Some(v) => Ok(Some(v)),
            None => n
                .as_f64()
                .map(|f| Some(f as i64))
                .ok_or_else(|| JsonError::cast("i64", value)),
        },
        Value::String(text) => {
            if is_absent_text(text) {
                return Ok(None);
            }
            without_commas(text)
                .parse::<i64>()
                .map(Some)
                .map_err(|_| JsonError::cast("i64", value))
        }
        Value::Bool(b) => Ok(Some(i64::from(*b))),
        _ => Err(JsonError::cast("i64", value)),
    }
}

/// Coerces to `i32`. Besides the `i64` rules, integer-valued decimal strings
/// (`"42.0"`) are accepted.
pub fn cast_to_i32(value: &Value) -> Result<Option<i32>, JsonError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => match n.as_i64() {
            Some(v) => Ok(Some(v as i32)),
            None => n
                .as_f64()
                .map(|f| Some(f as i32))
                .ok_or_else(|| JsonError::cast("i32", value)),
        },
        Value::String(text) => {
            if is_absent_text(text) {
                return Ok(None);
            }
            let stripped = without_commas(text);
            without_trailing_zero_fraction(&stripped)
                .parse::<i32>()
                .map(Some)
                .map_err(|_| JsonError::cast("i32", value))
        }
        Value::Bool(b) => Ok(Some(i32::from(*b))),
        _ => Err(JsonError::cast("i32", value)),
    }
}

/// Coerces to `f64`. Numeric strings may carry commas.
pub fn cast_to_f64(value: &Value) -> Result<Option<f64>, JsonError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| JsonError::cast("f64", value)),
        Value::String(text) => {
            if is_absent_text(text) {
                return Ok(None);
            }
            without_commas(text)
                .parse::<f64>()
                .map(Some)
                .map_err(|_| JsonError::cast("f64", value))
        }
        Value::Bool(b) => Ok(Some(if *b { 1.0 } else { 0.0 })),
        _ => Err(JsonError::cast("f64", value)),
    }
}

/// Coerces to a [`Timestamp`]: integers read as epoch milliseconds, strings
/// go through the full resolver pipeline.
pub fn cast_to_timestamp(value: &Value) -> Result<Option<Timestamp>, JsonError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .map(|millis| Some(Timestamp::from_epoch_millis(millis)))
            .ok_or_else(|| JsonError::cast("timestamp", value)),
        Value::String(text) => resolve_datetime(text).map(Some).map_err(JsonError::from),
        _ => Err(JsonError::cast("timestamp", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_absent() {
        assert_eq!(cast_to_string(&Value::Null), None);
        assert_eq!(cast_to_bool(&Value::Null).unwrap(), None);
        assert_eq!(cast_to_i64(&Value::Null).unwrap(), None);
        assert_eq!(cast_to_f64(&Value::Null).unwrap(), None);
        assert_eq!(cast_to_timestamp(&Value::Null).unwrap(), None);
    }

    #[test]
    fn test_absent_strings() {
        for text in ["", "null", "NULL"] {
            assert_eq!(cast_to_i64(&json!(text)).unwrap(), None);
            assert_eq!(cast_to_i32(&json!(text)).unwrap(), None);
            assert_eq!(cast_to_f64(&json!(text)).unwrap(), None);
            assert_eq!(cast_to_bool(&json!(text)).unwrap(), None);
        }
    }

    #[test]
    fn test_string_renders_verbatim_others_as_json() {
        assert_eq!(cast_to_string(&json!("abc")).unwrap(), "abc");
        assert_eq!(cast_to_string(&json!(42)).unwrap(), "42");
        assert_eq!(cast_to_string(&json!(true)).unwrap(), "true");
        assert_eq!(cast_to_string(&json!([1, 2])).unwrap(), "[1,2]");
    }

    #[test]
    fn test_bool_spellings() {
        for text in ["true", "TRUE", "1", "y", "Y", "T"] {
            assert_eq!(cast_to_bool(&json!(text)).unwrap(), Some(true), "{text}");
        }
        for text in ["false", "FALSE", "0", "f", "F", "N"] {
            assert_eq!(cast_to_bool(&json!(text)).unwrap(), Some(false), "{text}");
        }
        assert_eq!(cast_to_bool(&json!(1)).unwrap(), Some(true));
        assert_eq!(cast_to_bool(&json!(0)).unwrap(), Some(false));
        assert!(cast_to_bool(&json!("maybe")).is_err());
        // lowercase t and uppercase n are not in the accepted set
        assert!(cast_to_bool(&json!("t")).is_err());
        assert!(cast_to_bool(&json!("n")).is_err());
    }

    #[test]
    fn test_char() {
        assert_eq!(cast_to_char(&json!("x")).unwrap(), Some('x'));
        assert_eq!(cast_to_char(&json!("")).unwrap(), None);
        assert!(cast_to_char(&json!("xy")).is_err());
        assert!(cast_to_char(&json!(7)).is_err());
    }

    #[test]
    fn test_integers() {
        assert_eq!(cast_to_i64(&json!(42)).unwrap(), Some(42));
        assert_eq!(cast_to_i64(&json!(4.9)).unwrap(), Some(4));
        assert_eq!(cast_to_i64(&json!("1,234,567")).unwrap(), Some(1_234_567));
        assert_eq!(cast_to_i64(&json!(true)).unwrap(), Some(1));
        assert!(cast_to_i64(&json!("abc")).is_err());
        assert!(cast_to_i64(&json!({})).is_err());
    }

    #[test]
    fn test_i32_trailing_zero_fraction() {
        assert_eq!(cast_to_i32(&json!("42.0")).unwrap(), Some(42));
        assert_eq!(cast_to_i32(&json!("42.000")).unwrap(), Some(42));
        assert_eq!(cast_to_i32(&json!("42.")).unwrap(), Some(42));
        assert!(cast_to_i32(&json!("42.5")).is_err());
    }

    #[test]
    fn test_floats() {
        assert_eq!(cast_to_f64(&json!(1.5)).unwrap(), Some(1.5));
        assert_eq!(cast_to_f64(&json!("2,000.25")).unwrap(), Some(2000.25));
        assert_eq!(cast_to_f64(&json!(false)).unwrap(), Some(0.0));
    }

    #[test]
    fn test_timestamp() {
        let ts = cast_to_timestamp(&json!("2018-05-31T19:13:42Z")).unwrap().unwrap();
        assert_eq!(ts.epoch_millis(), 1_527_794_022_000);
        let ts = cast_to_timestamp(&json!(1_527_794_022_000i64)).unwrap().unwrap();
        assert_eq!(ts.epoch_millis(), 1_527_794_022_000);
        assert!(cast_to_timestamp(&json!("")).is_err());
        assert!(cast_to_timestamp(&json!("not a date")).is_err());
    }
}
