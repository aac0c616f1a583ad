use chrono::{FixedOffset, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use crate::error::ParseError;

// EDGAR records timestamps in US Eastern wall-clock time with no DST
// marker, so the whole archive is interpreted at a fixed -04:00.
static EASTERN: Lazy<FixedOffset> = Lazy::new(|| FixedOffset::west_opt(4 * 3600).unwrap());

/// Convert a compact SEC header timestamp to epoch seconds.
///
/// 14 digits are read as `YYYYMMDDHHMMSS`, 8 digits as `YYYYMMDD` at
/// midnight, both in `-04:00`. Any other length is a header the parser
/// fundamentally cannot interpret and fails hard.
pub fn sec_timestamp_to_unix(value: &str) -> Result<i64, ParseError> {
    let value = value.trim();
    let naive = match value.len() {
        14 => NaiveDateTime::parse_from_str(value, "%Y%m%d%H%M%S")
            .map_err(|_| ParseError::TimestampFormat(value.to_string()))?,
        8 => NaiveDate::parse_from_str(value, "%Y%m%d")
            .map_err(|_| ParseError::TimestampFormat(value.to_string()))?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ParseError::TimestampFormat(value.to_string()))?,
        _ => return Err(ParseError::TimestampFormat(value.to_string())),
    };
    let timestamp = naive
        .and_local_timezone(*EASTERN)
        .single()
        .ok_or_else(|| ParseError::TimestampFormat(value.to_string()))?
        .timestamp();
    Ok(timestamp)
}
