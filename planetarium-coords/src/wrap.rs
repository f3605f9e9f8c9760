//! Right-ascension seam handling for equatorial charts.
//!
//! A polyline such as a constellation figure that crosses RA 0h would be drawn
//! across the whole chart if plotted as-is. [`split_ra_wrap`] detects that case
//! from the RA spread and returns two copies of the polyline, one pulled below
//! 0° and one pushed above 360°, so each can be drawn unbroken at its edge of
//! the chart.
//!
//! ```
//! use planetarium_coords::split_ra_wrap;
//!
//! let sets = split_ra_wrap(&[(350.0, 10.0), (10.0, 12.0)]);
//! assert_eq!(sets, vec![
//!     vec![(-10.0, 10.0), (10.0, 12.0)],
//!     vec![(350.0, 10.0), (370.0, 12.0)],
//! ]);
//! ```

/// Splits an ordered `(ra, dec)` polyline that straddles the 0°/360° seam.
///
/// If `max(ra) - min(ra) > 180`, returns two sets: the first with every
/// `ra >= 180` shifted by -360, the second with every `ra < 180` shifted by
/// +360. Otherwise returns the input as the only set. Point order is kept.
///
/// A second pass over a split output is a no-op only when the polyline fits
/// within a half-sky arc across the seam. A polyline that covers more than
/// 180° of RA on every side keeps a spread above 180° after either shift and
/// is split again.
pub fn split_ra_wrap(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    if ra_spread(points) <= 180.0 {
        return vec![points.to_vec()];
    }

    let left = points
        .iter()
        .map(|&(ra, dec)| if ra >= 180.0 { (ra - 360.0, dec) } else { (ra, dec) })
        .collect();
    let right = points
        .iter()
        .map(|&(ra, dec)| if ra < 180.0 { (ra + 360.0, dec) } else { (ra, dec) })
        .collect();
    vec![left, right]
}

/// `max(ra) - min(ra)`, or 0 for an empty set.
pub fn ra_spread(points: &[(f64, f64)]) -> f64 {
    let mut iter = points.iter().map(|&(ra, _)| ra);
    let Some(first) = iter.next() else {
        return 0.0;
    };
    let (min, max) = iter.fold((first, first), |(lo, hi), ra| (lo.min(ra), hi.max(ra)));
    max - min
}
