//! Deep-sky object list: `name,category,ra_hours,dec_degrees`, with a header
//! row. Columns past the fourth are ignored.

use super::csv_fields;
use planetarium_core::angle::hms_to_degrees;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeepSkyObject {
    pub name: String,
    /// Category label as written in the source, trimmed.
    pub category: String,
    /// Degrees, converted from the hours column.
    pub ra: f64,
    pub dec: f64,
}

pub fn parse_object_row(line: &str) -> Option<DeepSkyObject> {
    let fields = csv_fields(line, 4)?;
    let ra_hours: f64 = fields[2].parse().ok()?;
    let dec: f64 = fields[3].parse().ok()?;
    if !ra_hours.is_finite() || !dec.is_finite() || !(-90.0..=90.0).contains(&dec) {
        return None;
    }
    Some(DeepSkyObject {
        name: fields[0].to_string(),
        category: fields[1].to_string(),
        ra: hms_to_degrees(ra_hours, 0.0, 0.0),
        dec,
    })
}

/// Parses every row after the header.
pub fn parse_objects(text: &str) -> Vec<DeepSkyObject> {
    let objects: Vec<DeepSkyObject> = text
        .lines()
        .enumerate()
        .skip(1)
        .filter_map(|(idx, line)| {
            let parsed = parse_object_row(line);
            if parsed.is_none() {
                trace!(line = idx + 1, "no object on row");
            }
            parsed
        })
        .collect();
    debug!(objects = objects.len(), "parsed deep-sky objects");
    objects
}
