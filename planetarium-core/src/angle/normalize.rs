//! Angle normalization in degrees.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, azimuth, sidereal time | [0, 360) | [`wrap_0_360`] |
//! | Hour angle | [-180, 180] | [`normalize_hour_angle`] |
//!
//! The wrapping functions use `libm::fmod` (via [`crate::math::fmod`]) and then
//! shift negative remainders up, since `%` keeps the sign of the dividend.

use crate::math::fmod;

/// Wraps an angle in degrees to [0, 360).
///
/// ```
/// use planetarium_core::angle::wrap_0_360;
///
/// assert_eq!(wrap_0_360(370.0), 10.0);
/// assert_eq!(wrap_0_360(-10.0), 350.0);
/// assert_eq!(wrap_0_360(360.0), 0.0);
/// ```
#[inline]
pub fn wrap_0_360(deg: f64) -> f64 {
    let w = fmod(deg, 360.0);
    let w = if w < 0.0 { w + 360.0 } else { w };
    // -1e-17 + 360.0 rounds to 360.0
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

/// Brings an hour angle `lst - ra` into [-180, 180].
///
/// Negative values gain a turn first, then anything past 180 loses one, so
/// exactly +180 is kept as +180.
#[inline]
pub fn normalize_hour_angle(h: f64) -> f64 {
    let mut h = fmod(h, 360.0);
    if h < 0.0 {
        h += 360.0;
    }
    if h > 180.0 {
        h -= 360.0;
    }
    h
}
