//! Line parsers for the four source formats.
//!
//! | Module | Input | Record |
//! |--------|-------|--------|
//! | [`bsc`] | Fixed-width Bright Star Catalog | [`StarRecord`] in a [`StarCatalog`] |
//! | [`constellation`] | Whitespace-separated star id polylines | [`ConstellationLine`] |
//! | [`objects`] | `name,category,ra_hours,dec_deg` CSV | [`DeepSkyObject`] |
//! | [`names`] | `name,_,ra_deg,dec_deg` CSV | [`NamedStar`] |
//!
//! Every line parser returns `Option`: `None` means the line carried no
//! record (header, footer, blank or sparse entry) and is skipped. Nothing here
//! fails a whole file; cross-file integrity is checked by the compiler.

pub mod bsc;
pub mod constellation;
pub mod names;
pub mod objects;

pub use bsc::{parse_catalog, parse_star_line, StarCatalog, StarRecord};
pub use constellation::{parse_constellation_line, parse_constellations, ConstellationLine};
pub use names::{parse_named_star_row, parse_named_stars, NamedStar};
pub use objects::{parse_object_row, parse_objects, DeepSkyObject};

/// Byte range `[start, end)` of a fixed-width line, or `None` if the line is
/// too short or the range splits a UTF-8 sequence.
pub(crate) fn col(bytes: &[u8], start: usize, end: usize) -> Option<&str> {
    if end > bytes.len() {
        return None;
    }
    std::str::from_utf8(&bytes[start..end]).ok()
}

/// First `n` comma-separated fields of a CSV row, trimmed.
pub(crate) fn csv_fields(line: &str, n: usize) -> Option<Vec<&str>> {
    let fields: Vec<&str> = line.split(',').take(n).map(str::trim).collect();
    if fields.len() < n {
        return None;
    }
    Some(fields)
}
