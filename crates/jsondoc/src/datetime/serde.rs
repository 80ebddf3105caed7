//! Serde integration for [`Timestamp`].
//!
//! Wires the date pipeline into the delegated codec the same way on both
//! sides of the boundary: a `Timestamp` serializes as standard-pattern text,
//! and deserializes by running the string through the resolver. The binding
//! layer therefore hits the recognizer exactly once per date-valued field and
//! never during serialization.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::datetime::{format, resolver, Timestamp};

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format::format_standard(*self))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a date/time string")
    }

    fn visit_str<E>(self, text: &str) -> Result<Timestamp, E>
    where
        E: de::Error,
    {
        resolver::resolve_datetime(text).map_err(de::Error::custom)
    }
}
