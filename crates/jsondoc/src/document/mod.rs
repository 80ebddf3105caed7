//! Embedded JSON document containers.
//!
//! [`JsonObject`] and [`JsonArray`] are thin wrappers over the codec's map
//! and list types. They add nothing to the representation — only typed,
//! coercion-backed accessors and conversions, so callers can walk untyped
//! documents without touching `serde_json` directly.

pub mod array;
pub mod object;

pub use array::JsonArray;
pub use object::JsonObject;
