//! Constellation stick figures.
//!
//! One polyline per line: a designator, a point count, then the HR numbers of
//! the stars in drawing order.
//!
//! ```text
//! Ori 5 1948 1903 1852 1790 1713
//! ```
//!
//! The first two tokens are not interpreted beyond keeping the designator for
//! labelling. The count is not checked against the ids that follow.

use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstellationLine {
    pub designator: String,
    /// 1-based line number in the source file.
    pub line: usize,
    pub star_ids: Vec<u32>,
}

impl ConstellationLine {
    /// Number of segments drawn for this polyline.
    pub fn segment_count(&self) -> usize {
        self.star_ids.len().saturating_sub(1)
    }
}

/// One polyline, or `None` unless there are at least two numeric star ids
/// after the designator and count.
pub fn parse_constellation_line(line: &str, line_num: usize) -> Option<ConstellationLine> {
    let mut tokens = line.split_whitespace();
    let designator = tokens.next()?.to_string();
    tokens.next()?;

    let star_ids = tokens
        .map(|t| t.parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;
    if star_ids.len() < 2 {
        return None;
    }

    Some(ConstellationLine {
        designator,
        line: line_num,
        star_ids,
    })
}

pub fn parse_constellations(text: &str) -> Vec<ConstellationLine> {
    let lines: Vec<ConstellationLine> = text
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let parsed = parse_constellation_line(line, idx + 1);
            if parsed.is_none() {
                trace!(line = idx + 1, "no polyline on constellation line");
            }
            parsed
        })
        .collect();
    debug!(polylines = lines.len(), "parsed constellation lines");
    lines
}
