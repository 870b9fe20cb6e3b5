use chrono::{DateTime, Local, Utc};
use serde_json::Value;

use crate::error::{BookmarkError, Result};

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Seconds between 1601-01-01T00:00:00Z (Chromium's epoch) and the Unix epoch
const WEBKIT_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

/// Convert microseconds since 1601-01-01 UTC into a UTC datetime
///
/// Only values beyond chrono's representable range fail.
pub fn webkit_micros_to_utc(micros: i64) -> Result<DateTime<Utc>> {
    let secs = micros.div_euclid(MICROS_PER_SECOND) - WEBKIT_EPOCH_OFFSET_SECS;
    let nanos = (micros.rem_euclid(MICROS_PER_SECOND) * 1_000) as u32;
    DateTime::from_timestamp(secs, nanos).ok_or_else(|| BookmarkError::InvalidTimestamp {
        value: micros.to_string(),
        reason: "timestamp out of range".to_string(),
    })
}

/// Convert an integer-valued string of microseconds since 1601-01-01 UTC into
/// a datetime carrying the local timezone offset
///
/// # Examples
///
/// ```
/// use bookmark_parser::parsers::timestamps::webkit_timestamp_to_local;
/// use chrono::{TimeZone, Utc};
///
/// let local = webkit_timestamp_to_local("13272718800000000")?;
/// assert_eq!(local, Utc.with_ymd_and_hms(2021, 8, 6, 10, 20, 0).unwrap());
/// # Ok::<(), bookmark_parser::BookmarkError>(())
/// ```
pub fn webkit_timestamp_to_local(value: &str) -> Result<DateTime<Local>> {
    let micros = value.trim().parse::<i64>().map_err(|e| BookmarkError::InvalidTimestamp {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(webkit_micros_to_utc(micros)?.with_timezone(&Local))
}

/// Convert a JSON `date_added` value (string or integer number) into a local datetime
pub fn parse_webkit_value(value: &Value) -> Result<DateTime<Local>> {
    match value {
        Value::String(s) => webkit_timestamp_to_local(s),
        Value::Number(n) => {
            let micros = n.as_i64().ok_or_else(|| BookmarkError::InvalidTimestamp {
                value: n.to_string(),
                reason: "not an integer".to_string(),
            })?;
            Ok(webkit_micros_to_utc(micros)?.with_timezone(&Local))
        }
        other => Err(BookmarkError::InvalidTimestamp {
            value: other.to_string(),
            reason: "timestamp must be a string or integer".to_string(),
        }),
    }
}
