//! Date/time recognition, resolution and formatting.
//!
//! Incoming date text flows through two stages:
//!
//! 1. [`DateTimeScanner`] — a character-level recognizer for ISO-8601 and the
//!    regional/legacy spellings, which either extracts calendar fields or
//!    declines without consuming anything.
//! 2. [`resolve_datetime`] — the fallback policy: when the scanner declines,
//!    a fixed, ordered list of textual patterns is tried; the first success
//!    wins, and exhausting the list is the only user-visible parse error.
//!
//! The outgoing direction is a single fixed pattern
//! (`yyyy-MM-dd HH:mm:ss`, see [`format`]); no locale-aware formatting.

pub mod civil;
pub mod format;
pub mod resolver;
pub mod scanner;
mod serde;

pub use format::{BASIC_DATETIME_PATTERN, DATE_PATTERN, STANDARD_PATTERN, TIME_PATTERN};
pub use resolver::{resolve_datetime, resolve_datetime_with_offset, supported_patterns};
pub use scanner::{DateTimeScanner, RecognizedDateTime, ScanOutcome, EOI};

/// A point in time with millisecond precision, as milliseconds since the
/// Unix epoch (UTC). The crate's currency for every date-valued field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Timestamp = Timestamp(0);

    /// Wraps an epoch-milliseconds value.
    pub fn from_epoch_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.0
    }

    /// UTC calendar fields: (year, month, day, hour, minute, second, millisecond).
    pub fn to_civil_utc(&self) -> (i32, u32, u32, u32, u32, u32, u32) {
        civil::epoch_millis_to_civil(self.0)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format::format_standard(*self))
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_display_uses_standard_pattern() {
        let ts = Timestamp::from_epoch_millis(1_625_140_800_000);
        assert_eq!(ts.to_string(), "2021-07-01 12:00:00");
    }

    #[test]
    fn test_timestamp_civil_fields() {
        let ts = Timestamp::from_epoch_millis(1_527_794_022_000);
        assert_eq!(ts.to_civil_utc(), (2018, 5, 31, 19, 13, 42, 0));
    }
}
