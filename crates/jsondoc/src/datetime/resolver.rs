//! Fallback policy for date text of unknown format.
//!
//! The scanner handles the common spellings in one pass; anything it declines
//! is retried against a fixed, ordered list of textual patterns. The order is
//! load-bearing: loosely-specified patterns can spuriously accept text meant
//! for another one, so the most common pattern is tried first and reordering
//! the list is a breaking change.

use lazy_static::lazy_static;

use crate::datetime::format;
use crate::datetime::scanner::{DateTimeScanner, RecognizedDateTime, ScanOutcome};
use crate::datetime::Timestamp;
use crate::error::DateParseError;

/// One entry in the fallback list: a pattern name and its parser.
struct FormatCandidate {
    name: &'static str,
    parse: fn(&str) -> Option<RecognizedDateTime>,
}

lazy_static! {
    // the sequence must change carefully, the best match must be the first one
    static ref DATE_FORMATS: Vec<FormatCandidate> = vec![
        FormatCandidate {
            name: format::STANDARD_PATTERN,
            parse: format::parse_standard,
        },
        FormatCandidate {
            name: format::DATE_PATTERN,
            parse: format::parse_date_only,
        },
        FormatCandidate {
            name: format::BASIC_DATETIME_PATTERN,
            parse: format::parse_basic_datetime,
        },
    ];
    static ref PATTERN_LIST: String = DATE_FORMATS
        .iter()
        .map(|candidate| candidate.name)
        .collect::<Vec<_>>()
        .join(", ");
}

/// The fallback pattern names, in the order they are attempted.
pub fn supported_patterns() -> Vec<&'static str> {
    DATE_FORMATS.iter().map(|candidate| candidate.name).collect()
}

/// Resolves date text against a UTC ambient zone.
pub fn resolve_datetime(text: &str) -> Result<Timestamp, DateParseError> {
    resolve_datetime_with_offset(text, 0)
}

/// Resolves date text of unknown format into a [`Timestamp`].
///
/// Zoneless spellings are read on the wall clock of `default_offset_millis`.
/// Blank input fails with [`DateParseError::EmptyValue`]; input no strategy
/// accepts fails with [`DateParseError::NoFormatMatched`] naming the text and
/// the attempted patterns.
pub fn resolve_datetime_with_offset(
    text: &str,
    default_offset_millis: i64,
) -> Result<Timestamp, DateParseError> {
    if text.trim().is_empty() {
        return Err(DateParseError::EmptyValue);
    }

    let mut scanner = DateTimeScanner::with_default_offset(text, default_offset_millis);
    if let ScanOutcome::Match { value, .. } = scanner.scan_datetime_if_match(false) {
        return Ok(Timestamp::from_epoch_millis(
            value.epoch_millis(default_offset_millis),
        ));
    }

    for candidate in DATE_FORMATS.iter() {
        if let Some(value) = (candidate.parse)(text) {
            return Ok(Timestamp::from_epoch_millis(
                value.epoch_millis(default_offset_millis),
            ));
        }
    }

    Err(DateParseError::NoFormatMatched {
        text: text.to_string(),
        patterns: PATTERN_LIST.clone(),
    })
}
