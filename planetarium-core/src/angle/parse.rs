//! Parsing sexagesimal angles typed by people.
//!
//! Catalog columns are sliced at fixed offsets by the catalog parser and never
//! reach this module. This is for observer input on the command line and in
//! configuration, where the same angle may arrive as any of:
//!
//! ```text
//! Colon-separated:  12:34:56.789   -0:30:00
//! Letter markers:   12h34m56.789s  or  45d30m15s
//! Symbol notation:  45° 30' 15"
//! Decimal:          51.4778
//! ```
//!
//! The sign is only valid at the front and applies to the whole angle, so
//! `-0:30:00` is -0.5° and `0:-30:00` is rejected.
//!
//! ```
//! use planetarium_core::angle::{parse_dms, parse_hms};
//!
//! assert!((parse_hms("6:00:00").unwrap() - 90.0).abs() < 1e-12);
//! assert!((parse_dms("-0:30:00").unwrap() + 0.5).abs() < 1e-12);
//! assert!((parse_dms("51.5").unwrap() - 51.5).abs() < 1e-12);
//! ```

use super::{hms_to_degrees, signed_dms_to_degrees};
use crate::{SkyError, SkyResult};
use once_cell::sync::Lazy;
use regex::Regex;

static COLON_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*([+-])?(\d{1,3})\s*:\s*(\d{1,2})\s*:\s*(\d{1,2}(?:\.\d+)?)\s*$"#)
        .expect("colon pattern compiles")
});

static HMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ^\s*
        ([+-])?                          # optional sign
        (\d{1,3})\s*h\s*                 # hours
        (\d{1,2})\s*m\s*                 # minutes
        (\d{1,2}(?:\.\d+)?)\s*s?         # seconds with optional decimal
        \s*$
        "#,
    )
    .expect("hms pattern compiles")
});

static DMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ^\s*
        ([+-])?                          # optional sign
        (\d{1,3})\s*[d°]\s*              # degrees
        (\d{1,2})\s*['m]\s*              # arcminutes
        (\d{1,2}(?:\.\d+)?)\s*(?:"|''|s)?  # arcseconds
        \s*$
        "#,
    )
    .expect("dms pattern compiles")
});

/// Parses right ascension text and returns degrees.
///
/// Accepts `12:34:56`, `12h34m56s`, or decimal hours (`12.5`).
pub fn parse_hms(s: &str) -> SkyResult<f64> {
    if let Some(caps) = COLON_REGEX
        .captures(s)
        .or_else(|| HMS_REGEX.captures(s))
    {
        let (negative, h, m, sec) = sexagesimal_fields(&caps, s)?;
        let deg = hms_to_degrees(h, m, sec);
        return Ok(if negative { -deg } else { deg });
    }

    parse_decimal(s, "parse_hms").map(|hours| hms_to_degrees(hours, 0.0, 0.0))
}

/// Parses declination, latitude or longitude text and returns degrees.
///
/// Accepts `-45:30:15`, `45d30m15s`, `45° 30' 15"`, or decimal degrees.
pub fn parse_dms(s: &str) -> SkyResult<f64> {
    if let Some(caps) = COLON_REGEX
        .captures(s)
        .or_else(|| DMS_REGEX.captures(s))
    {
        let (negative, d, m, sec) = sexagesimal_fields(&caps, s)?;
        return Ok(signed_dms_to_degrees(negative, d, m, sec));
    }

    parse_decimal(s, "parse_dms")
}

fn sexagesimal_fields(caps: &regex::Captures, original: &str) -> SkyResult<(bool, f64, f64, f64)> {
    let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
    let field = |idx: usize| -> SkyResult<f64> {
        caps[idx].parse::<f64>().map_err(|_| {
            SkyError::parse_error(
                "sexagesimal",
                &format!("Cannot parse field {} of '{}'", idx - 1, original),
            )
        })
    };
    let (whole, minutes, seconds) = (field(2)?, field(3)?, field(4)?);

    if minutes >= 60.0 || seconds >= 60.0 {
        return Err(SkyError::parse_error(
            "sexagesimal",
            &format!("Minutes and seconds must be below 60 in '{}'", original),
        ));
    }

    Ok((negative, whole, minutes, seconds))
}

fn parse_decimal(s: &str, context: &str) -> SkyResult<f64> {
    let value: f64 = s.trim().parse().map_err(|_| {
        SkyError::parse_error(context, &format!("Cannot parse '{}' as an angle", s))
    })?;
    if !value.is_finite() {
        return Err(SkyError::parse_error(
            context,
            &format!("'{}' is not a finite angle", s),
        ));
    }
    Ok(value)
}
