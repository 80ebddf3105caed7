//! Fixed textual date patterns.
//!
//! The parsing half backs the resolver's fallback list; each pattern is a
//! whole-string, fixed-position template checked byte by byte. The formatting
//! half is the serialization direction: one standard pattern, no locale
//! awareness.

use crate::datetime::civil;
use crate::datetime::scanner::RecognizedDateTime;
use crate::datetime::Timestamp;

/// The standard interchange pattern, used for formatting and tried first
/// when parsing.
pub const STANDARD_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

/// Date-only pattern.
pub const DATE_PATTERN: &str = "yyyy-MM-dd";

/// Time-only pattern.
pub const TIME_PATTERN: &str = "HH:mm:ss";

/// ISO-8601 basic (compact) date/time pattern.
pub const BASIC_DATETIME_PATTERN: &str = "yyyyMMdd'T'HHmmss";

// =============================================================================
// PARSING
// =============================================================================

#[inline]
fn two_digits(bytes: &[u8], at: usize) -> Option<u32> {
    let d0 = bytes[at];
    let d1 = bytes[at + 1];
    if d0.is_ascii_digit() && d1.is_ascii_digit() {
        Some(u32::from(d0 - b'0') * 10 + u32::from(d1 - b'0'))
    } else {
        None
    }
}

#[inline]
fn four_digits(bytes: &[u8], at: usize) -> Option<i32> {
    let high = two_digits(bytes, at)?;
    let low = two_digits(bytes, at + 2)?;
    Some((high * 100 + low) as i32)
}

fn date_fields(bytes: &[u8], year_at: usize, month_at: usize, day_at: usize) -> Option<(i32, u32, u32)> {
    let year = four_digits(bytes, year_at)?;
    let month = two_digits(bytes, month_at)?;
    let day = two_digits(bytes, day_at)?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

fn time_fields(bytes: &[u8], hour_at: usize, minute_at: usize, second_at: usize) -> Option<(u32, u32, u32)> {
    let hour = two_digits(bytes, hour_at)?;
    let minute = two_digits(bytes, minute_at)?;
    let second = two_digits(bytes, second_at)?;
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }
    Some((hour, minute, second))
}

fn zoneless(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> RecognizedDateTime {
    RecognizedDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
        millisecond: 0,
        offset_millis: None,
    }
}

/// `yyyy-MM-dd HH:mm:ss`, whole string.
pub(crate) fn parse_standard(text: &str) -> Option<RecognizedDateTime> {
    let bytes = text.as_bytes();
    if bytes.len() != 19 || !text.is_ascii() {
        return None;
    }
    if bytes[4] != b'-' || bytes[7] != b'-' || bytes[10] != b' ' || bytes[13] != b':' || bytes[16] != b':' {
        return None;
    }
    let (year, month, day) = date_fields(bytes, 0, 5, 8)?;
    let (hour, minute, second) = time_fields(bytes, 11, 14, 17)?;
    Some(zoneless(year, month, day, hour, minute, second))
}

/// `yyyy-MM-dd`, whole string; time fields default to zero.
pub(crate) fn parse_date_only(text: &str) -> Option<RecognizedDateTime> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || !text.is_ascii() {
        return None;
    }
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let (year, month, day) = date_fields(bytes, 0, 5, 8)?;
    Some(zoneless(year, month, day, 0, 0, 0))
}

/// `yyyyMMdd'T'HHmmss`, whole string.
pub(crate) fn parse_basic_datetime(text: &str) -> Option<RecognizedDateTime> {
    let bytes = text.as_bytes();
    if bytes.len() != 15 || !text.is_ascii() {
        return None;
    }
    if bytes[8] != b'T' {
        return None;
    }
    let (year, month, day) = date_fields(bytes, 0, 4, 6)?;
    let (hour, minute, second) = time_fields(bytes, 9, 11, 13)?;
    Some(zoneless(year, month, day, hour, minute, second))
}

// =============================================================================
// FORMATTING
// =============================================================================

/// Formats a timestamp with [`STANDARD_PATTERN`] on the UTC wall clock.
pub fn format_standard(ts: Timestamp) -> String {
    format_standard_with_offset(ts, 0)
}

/// Formats a timestamp with [`STANDARD_PATTERN`] on the wall clock of the
/// given UTC offset (milliseconds).
pub fn format_standard_with_offset(ts: Timestamp, offset_millis: i64) -> String {
    let (year, month, day, hour, minute, second, _) =
        civil::epoch_millis_to_civil(ts.epoch_millis() + offset_millis);
    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}

/// Formats the date part with [`DATE_PATTERN`] on the UTC wall clock.
pub fn format_date(ts: Timestamp) -> String {
    let (year, month, day, ..) = civil::epoch_millis_to_civil(ts.epoch_millis());
    format!("{year:04}-{month:02}-{day:02}")
}

/// Formats the time part with [`TIME_PATTERN`] on the UTC wall clock.
pub fn format_time(ts: Timestamp) -> String {
    let (_, _, _, hour, minute, second, _) = civil::epoch_millis_to_civil(ts.epoch_millis());
    format!("{hour:02}:{minute:02}:{second:02}")
}
