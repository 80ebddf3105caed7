//! jsondoc: embedded JSON document API with multi-format date/time parsing.
//!
//! This crate wraps a general-purpose JSON codec (`serde_json`) with the
//! familiar embedded-document surface: object/array containers with typed,
//! coercion-backed accessors, and a parse/serialize façade. The one piece of
//! genuine machinery is the date/time pipeline: a character-level recognizer
//! for ISO-8601 and regional/legacy date spellings, with an ordered fallback
//! pattern list behind it.
//!
//! # Quick Start
//!
//! ```rust
//! use jsondoc::{parse_object, Timestamp};
//!
//! let order = parse_object(r#"{
//!     "id": 10001,
//!     "customer": "alice",
//!     "total": "1,234",
//!     "placed_at": "2021-07-01 12:01:00"
//! }"#).unwrap();
//!
//! assert_eq!(order.get_i64("id").unwrap(), Some(10001));
//! assert_eq!(order.get_i64("total").unwrap(), Some(1234));
//!
//! let placed_at = order.get_timestamp("placed_at").unwrap().unwrap();
//! assert_eq!(placed_at.to_string(), "2021-07-01 12:01:00");
//! ```
//!
//! Date-valued struct fields bind through the same pipeline:
//!
//! ```rust
//! use jsondoc::Timestamp;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Event {
//!     at: Timestamp,
//! }
//!
//! let event: Event = jsondoc::from_str(r#"{"at": "2018-05-31T19:13:42Z"}"#).unwrap();
//! assert_eq!(event.at.epoch_millis(), 1_527_794_022_000);
//! ```
//!
//! # Modules
//!
//! - [`document`]: `JsonObject` / `JsonArray` container wrappers
//! - [`facade`]: parse/serialize entry points
//! - [`datetime`]: the date/time scanner, resolver and fixed patterns
//! - [`convert`]: JSON-value-to-primitive coercions
//! - [`error`]: error types
//!
//! # Date handling
//!
//! Incoming date text is recognized by a single-pass character scanner (no
//! regular expressions, no date-parsing dependency) covering ISO-8601
//! extended and basic forms, `yyyy/MM/dd`, `dd.MM.yyyy`, CJK year/month/day
//! markers and the legacy `/Date(millis+zone)/` shape. Text the scanner
//! declines falls through an ordered pattern list
//! (`yyyy-MM-dd HH:mm:ss`, `yyyy-MM-dd`, `yyyyMMdd'T'HHmmss`). Outgoing
//! dates always format with the standard pattern.

pub mod convert;
pub mod datetime;
pub mod document;
pub mod error;
pub mod facade;

// Re-export commonly used types at crate root
pub use datetime::{
    resolve_datetime, resolve_datetime_with_offset, DateTimeScanner, RecognizedDateTime,
    ScanOutcome, Timestamp,
};
pub use document::{JsonArray, JsonObject};
pub use error::{DateParseError, JsonError};
pub use facade::{
    from_str, is_json, is_json_array, is_json_object, parse, parse_array, parse_object,
    to_json_string,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
