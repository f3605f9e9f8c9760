//! UTC instants from text.
//!
//! ```text
//! 2025-05-13T21:00:00Z          RFC 3339
//! 2025-05-13T23:00:00+02:00     RFC 3339 with offset, converted to UTC
//! 2025-05-13 21:00:00           taken as UTC
//! 2025-05-13T21:00:00.250       taken as UTC
//! ```

use crate::{TimeError, TimeResult};
use chrono::{DateTime, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

pub fn parse_utc(s: &str) -> TimeResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            TimeError::ParseError(format!(
                "Invalid datetime '{}'. Expected YYYY-MM-DDTHH:MM:SSZ",
                s
            ))
        })
}
