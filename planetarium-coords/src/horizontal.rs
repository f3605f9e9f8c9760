//! Equatorial to horizontal (altitude/azimuth) conversion.
//!
//! ```text
//! H      = lst - ra, brought into [-180, 180]
//! az_raw = atan2(sin H, cos H · sin lat - tan dec · cos lat)
//! alt    = asin(sin lat · sin dec + cos lat · cos dec · cos H)
//! az     = az_raw - 180, wrapped to [0, 360)
//! ```
//!
//! `az_raw` is measured from the south meridian; subtracting 180 turns it into
//! the north-based convention used everywhere in this workspace: north is 0°,
//! east 90°, south 180°, west 270°.
//!
//! At a celestial pole (observer latitude ±90° or target declination ±90°)
//! the azimuth has no meaning. [`equatorial_to_horizontal`] reports that by
//! returning a NaN azimuth, and [`equatorial_to_horizontal_checked`] returns
//! [`CoordError::DegenerateGeometry`].

use crate::{CoordError, CoordResult};
use planetarium_core::angle::{normalize_hour_angle, wrap_0_360};
use planetarium_core::math::{asin_deg, atan2_deg, sincos_deg};
use planetarium_time::Observer;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How close to ±90° a latitude or declination may get before the azimuth is
/// treated as undefined.
pub const POLE_TOLERANCE_DEG: f64 = 1e-9;

/// Altitude in [-90, 90] and azimuth in [0, 360), both degrees.
///
/// Recomputed for each observer and instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizonCoordinate {
    pub altitude: f64,
    pub azimuth: f64,
}

impl HorizonCoordinate {
    pub fn new(altitude: f64, azimuth: f64) -> Self {
        Self { altitude, azimuth }
    }

    /// `false` for the NaN marker left by a degenerate conversion.
    pub fn is_valid(&self) -> bool {
        self.altitude.is_finite() && self.azimuth.is_finite()
    }

    pub fn zenith_distance(&self) -> f64 {
        90.0 - self.altitude
    }
}

impl fmt::Display for HorizonCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alt {:+.4}° Az {:.4}°", self.altitude, self.azimuth)
    }
}

fn at_pole(deg: f64) -> bool {
    (deg.abs() - 90.0).abs() <= POLE_TOLERANCE_DEG
}

/// Altitude and azimuth of `(ra, dec)` for a local sidereal time and latitude,
/// all in degrees.
///
/// The altitude is always computed. At a pole the azimuth is NaN and
/// [`HorizonCoordinate::is_valid`] is `false`.
pub fn equatorial_to_horizontal(
    ra_deg: f64,
    dec_deg: f64,
    lst_deg: f64,
    lat_deg: f64,
) -> HorizonCoordinate {
    let h = normalize_hour_angle(lst_deg - ra_deg);
    let (sin_h, cos_h) = sincos_deg(h);
    let (sin_lat, cos_lat) = sincos_deg(lat_deg);
    let (sin_dec, cos_dec) = sincos_deg(dec_deg);

    let altitude = asin_deg(sin_lat * sin_dec + cos_lat * cos_dec * cos_h);

    if at_pole(lat_deg) || at_pole(dec_deg) {
        return HorizonCoordinate::new(altitude, f64::NAN);
    }

    let tan_dec = sin_dec / cos_dec;
    let az_raw = atan2_deg(sin_h, cos_h * sin_lat - tan_dec * cos_lat);
    HorizonCoordinate::new(altitude, wrap_0_360(az_raw - 180.0))
}

/// Like [`equatorial_to_horizontal`], but fails instead of returning a NaN
/// azimuth.
pub fn equatorial_to_horizontal_checked(
    ra_deg: f64,
    dec_deg: f64,
    lst_deg: f64,
    lat_deg: f64,
) -> CoordResult<HorizonCoordinate> {
    for (name, value) in [
        ("right ascension", ra_deg),
        ("declination", dec_deg),
        ("sidereal time", lst_deg),
        ("latitude", lat_deg),
    ] {
        if !value.is_finite() {
            return Err(CoordError::invalid_coordinate(format!(
                "{} is not finite",
                name
            )));
        }
    }
    if lat_deg.abs() > 90.0 || dec_deg.abs() > 90.0 {
        return Err(CoordError::invalid_coordinate(format!(
            "latitude {} or declination {} outside [-90, 90]",
            lat_deg, dec_deg
        )));
    }
    if at_pole(lat_deg) {
        return Err(CoordError::degenerate(format!(
            "observer at latitude {}",
            lat_deg
        )));
    }
    if at_pole(dec_deg) {
        return Err(CoordError::degenerate(format!(
            "target at declination {}",
            dec_deg
        )));
    }
    Ok(equatorial_to_horizontal(ra_deg, dec_deg, lst_deg, lat_deg))
}

/// Horizontal position of `(ra, dec)` as seen by `observer`.
pub fn observe(ra_deg: f64, dec_deg: f64, observer: &Observer) -> HorizonCoordinate {
    equatorial_to_horizontal(
        ra_deg,
        dec_deg,
        observer.local_sidereal_time(),
        observer.latitude,
    )
}
