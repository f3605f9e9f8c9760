//! Proper star names: `name,<unused>,ra_degrees,dec_degrees`, with a header
//! row.

use super::csv_fields;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedStar {
    pub name: String,
    pub ra: f64,
    pub dec: f64,
}

pub fn parse_named_star_row(line: &str) -> Option<NamedStar> {
    let fields = csv_fields(line, 4)?;
    let ra: f64 = fields[2].parse().ok()?;
    let dec: f64 = fields[3].parse().ok()?;
    if fields[0].is_empty() || !ra.is_finite() || !(-90.0..=90.0).contains(&dec) {
        return None;
    }
    Some(NamedStar {
        name: fields[0].to_string(),
        ra,
        dec,
    })
}

pub fn parse_named_stars(text: &str) -> Vec<NamedStar> {
    let stars: Vec<NamedStar> = text
        .lines()
        .enumerate()
        .skip(1)
        .filter_map(|(idx, line)| {
            let parsed = parse_named_star_row(line);
            if parsed.is_none() {
                trace!(line = idx + 1, "no named star on row");
            }
            parsed
        })
        .collect();
    debug!(named_stars = stars.len(), "parsed star names");
    stars
}
