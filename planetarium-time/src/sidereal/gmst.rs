use crate::JulianDate;
use chrono::{DateTime, Utc};
use planetarium_core::angle::wrap_0_360;
use planetarium_core::constants::DEGREES_PER_HOUR;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Greenwich mean sidereal time, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GMST(f64);

impl GMST {
    pub fn from_julian_date(jd: &JulianDate) -> Self {
        let d = jd.days_since_j2000();
        let t = jd.centuries_since_j2000();
        let t2 = t * t;
        let raw = 280.46061837 + 360.98564736629 * d + 0.000387933 * t2 - t2 * t / 38_710_000.0;
        Self(wrap_0_360(raw))
    }

    pub fn from_utc(utc: &DateTime<Utc>) -> Self {
        Self::from_julian_date(&JulianDate::from_utc(utc))
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self(wrap_0_360(degrees))
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0 / DEGREES_PER_HOUR
    }

    /// Local mean sidereal time at an east-positive longitude.
    pub fn to_lmst(&self, longitude_deg: f64) -> super::LMST {
        super::LMST::from_gmst(self, longitude_deg)
    }
}

impl fmt::Display for GMST {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GMST {:.6}°", self.0)
    }
}

/// Greenwich mean sidereal time of a UTC instant, in degrees [0, 360).
pub fn gmst_degrees(utc: &DateTime<Utc>) -> f64 {
    GMST::from_utc(utc).degrees()
}
