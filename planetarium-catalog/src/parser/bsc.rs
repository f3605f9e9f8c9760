//! Yale Bright Star Catalog, fixed-width text.
//!
//! Columns are 0-indexed half-open byte ranges:
//!
//! ```text
//! [0, 4)      HR number
//! [4, 14)     name; the last three characters are the constellation
//! [75, 77)    RA hours        [77, 79) RA minutes      [79, 83) RA seconds
//! [83, 86)    Dec degrees, signed    [86, 88) Dec minutes    [88, 90) Dec seconds
//! [102, 107)  visual magnitude
//! [129, 131)  spectral class, optional
//! ```
//!
//! The Dec sign is read from the text of the degree field so that `-00 30 00`
//! keeps its sign.

use super::col;
use planetarium_core::angle::{hms_to_degrees, signed_dms_to_degrees};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StarRecord {
    pub id: u32,
    /// Raw 10-character name field, trailing blanks removed.
    pub name: String,
    pub constellation: String,
    /// Degrees, [0, 360).
    pub ra: f64,
    /// Degrees, [-90, 90].
    pub dec: f64,
    pub magnitude: f64,
    pub spectral_class: Option<String>,
}

/// One catalog line, or `None` if any required field is missing or not a
/// number.
pub fn parse_star_line(line: &str) -> Option<StarRecord> {
    let bytes = line.as_bytes();

    let id: u32 = col(bytes, 0, 4)?.trim().parse().ok()?;
    let name_field = col(bytes, 4, 14)?;
    let constellation = name_field
        .get(name_field.len().saturating_sub(3)..)
        .unwrap_or("")
        .trim()
        .to_string();

    let ra_h: u32 = col(bytes, 75, 77)?.trim().parse().ok()?;
    let ra_m: u32 = col(bytes, 77, 79)?.trim().parse().ok()?;
    let ra_s: f64 = col(bytes, 79, 83)?.trim().parse().ok()?;
    if ra_h >= 24 || ra_m >= 60 || !(0.0..60.0).contains(&ra_s) {
        return None;
    }

    let dec_field = col(bytes, 83, 86)?.trim();
    let negative = dec_field.starts_with('-');
    let dec_d: u32 = dec_field
        .strip_prefix(['+', '-'])
        .unwrap_or(dec_field)
        .parse()
        .ok()?;
    let dec_m: u32 = col(bytes, 86, 88)?.trim().parse().ok()?;
    let dec_s: f64 = col(bytes, 88, 90)?.trim().parse().ok()?;
    let dec = signed_dms_to_degrees(negative, dec_d as f64, dec_m as f64, dec_s);
    if dec_m >= 60 || !(0.0..60.0).contains(&dec_s) || !(-90.0..=90.0).contains(&dec) {
        return None;
    }

    let magnitude: f64 = col(bytes, 102, 107)?.trim().parse().ok()?;
    if !magnitude.is_finite() {
        return None;
    }

    let spectral_class = bytes
        .get(129..bytes.len().min(131))
        .and_then(|b| std::str::from_utf8(b).ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Some(StarRecord {
        id,
        name: name_field.trim_end().to_string(),
        constellation,
        ra: hms_to_degrees(ra_h as f64, ra_m as f64, ra_s),
        dec,
        magnitude,
        spectral_class,
    })
}

/// Parsed catalog keyed by HR number, in first-seen order.
///
/// Inserting an id that is already present replaces the earlier record in
/// place, so table order follows the first occurrence of each id.
#[derive(Debug, Clone, Default)]
pub struct StarCatalog {
    records: Vec<StarRecord>,
    index: HashMap<u32, usize>,
}

impl StarCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, returning the one it replaced.
    pub fn insert(&mut self, record: StarRecord) -> Option<StarRecord> {
        match self.index.get(&record.id) {
            Some(&pos) => {
                warn!(id = record.id, "duplicate star id, keeping the later record");
                Some(std::mem::replace(&mut self.records[pos], record))
            }
            None => {
                self.index.insert(record.id, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, id: u32) -> Option<&StarRecord> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StarRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[StarRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<StarRecord> for StarCatalog {
    fn from_iter<I: IntoIterator<Item = StarRecord>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a StarCatalog {
    type Item = &'a StarRecord;
    type IntoIter = std::slice::Iter<'a, StarRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parses every line of a catalog file, skipping lines with no record.
pub fn parse_catalog(text: &str) -> StarCatalog {
    let mut catalog = StarCatalog::new();
    let mut skipped = 0usize;
    for (line_num, line) in text.lines().enumerate() {
        match parse_star_line(line) {
            Some(record) => {
                catalog.insert(record);
            }
            None => {
                skipped += 1;
                trace!(line = line_num + 1, "no star record on catalog line");
            }
        }
    }
    debug!(stars = catalog.len(), skipped, "parsed star catalog");
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bsc_line, BscLine};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parse_sirius() {
        let line = bsc_line(&BscLine {
            id: 2491,
            name: "  9Alp CMa",
            ra: (6, 45, 8.9),
            dec: ('-', 16, 42, 58),
            mag: -1.46,
            spectral: "A1",
        });
        let star = parse_star_line(&line).unwrap();
        assert_eq!(star.id, 2491);
        assert_eq!(star.name, "  9Alp CMa");
        assert_eq!(star.constellation, "CMa");
        assert_abs_diff_eq!(star.ra, hms_to_degrees(6.0, 45.0, 8.9), epsilon = 1e-12);
        assert_abs_diff_eq!(star.dec, -(16.0 + 42.0 / 60.0 + 58.0 / 3600.0), epsilon = 1e-12);
        assert_eq!(star.magnitude, -1.46);
        assert_eq!(star.spectral_class.as_deref(), Some("A1"));
    }

    #[test]
    fn test_negative_zero_declination() {
        let line = bsc_line(&BscLine {
            dec: ('-', 0, 30, 0),
            ..BscLine::default()
        });
        let star = parse_star_line(&line).unwrap();
        assert_abs_diff_eq!(star.dec, -0.5, epsilon = 1e-12);

        let line = bsc_line(&BscLine {
            dec: ('+', 0, 30, 0),
            ..BscLine::default()
        });
        assert_abs_diff_eq!(parse_star_line(&line).unwrap().dec, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_non_numeric_id_yields_no_record() {
        let mut line = bsc_line(&BscLine::default());
        line.replace_range(0..4, "HR  ");
        assert!(parse_star_line(&line).is_none());
    }

    #[test]
    fn test_blank_fields_yield_no_record() {
        let mut line = bsc_line(&BscLine::default());
        line.replace_range(102..107, "     ");
        assert!(parse_star_line(&line).is_none());

        let mut line = bsc_line(&BscLine::default());
        line.replace_range(75..83, "        ");
        assert!(parse_star_line(&line).is_none());

        assert!(parse_star_line("").is_none());
        assert!(parse_star_line("   1          BD+44 4550").is_none());
    }

    #[test]
    fn test_out_of_range_fields_yield_no_record() {
        let line = bsc_line(&BscLine {
            ra: (24, 0, 0.0),
            ..BscLine::default()
        });
        assert!(parse_star_line(&line).is_none());

        let line = bsc_line(&BscLine {
            dec: ('+', 91, 0, 0),
            ..BscLine::default()
        });
        assert!(parse_star_line(&line).is_none());
    }

    #[test]
    fn test_spectral_class_optional() {
        let line = bsc_line(&BscLine::default());
        let short = &line[..110];
        let star = parse_star_line(short).unwrap();
        assert_eq!(star.spectral_class, None);

        let line = bsc_line(&BscLine {
            spectral: "  ",
            ..BscLine::default()
        });
        assert_eq!(parse_star_line(&line).unwrap().spectral_class, None);
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let text = [
            bsc_line(&BscLine { id: 1, mag: 5.0, ..BscLine::default() }),
            bsc_line(&BscLine { id: 2, mag: 4.0, ..BscLine::default() }),
            bsc_line(&BscLine { id: 1, mag: 3.0, ..BscLine::default() }),
        ]
        .join("\n");
        let catalog = parse_catalog(&text);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].id, 1);
        assert_eq!(catalog.records()[0].magnitude, 3.0);
        assert_eq!(catalog.records()[1].id, 2);
        assert_eq!(catalog.get(1).unwrap().magnitude, 3.0);
    }

    #[test]
    fn test_parse_catalog_skips_noise() {
        let text = format!(
            "Yale Bright Star Catalog\n{}\n\n{}\n",
            bsc_line(&BscLine { id: 7, ..BscLine::default() }),
            bsc_line(&BscLine { id: 8, ..BscLine::default() }),
        );
        let catalog = parse_catalog(&text);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(7));
        assert!(catalog.contains(8));
        assert!(!catalog.contains(9));
    }
}
