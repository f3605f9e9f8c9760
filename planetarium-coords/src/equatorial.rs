use crate::cartesian::equatorial_to_cartesian;
use crate::{CoordError, CoordResult};
use planetarium_core::angle::{hms_to_degrees, wrap_0_360};
use planetarium_core::CelestialVector;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Right ascension and declination in degrees.
///
/// `ra` is kept in [0, 360) and `dec` in [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equatorial {
    ra: f64,
    dec: f64,
}

impl Equatorial {
    pub fn new(ra_deg: f64, dec_deg: f64) -> CoordResult<Self> {
        if !ra_deg.is_finite() || !dec_deg.is_finite() {
            return Err(CoordError::invalid_coordinate(format!(
                "non-finite position ({}, {})",
                ra_deg, dec_deg
            )));
        }
        if !(-90.0..=90.0).contains(&dec_deg) {
            return Err(CoordError::invalid_coordinate(format!(
                "declination {} outside [-90, 90]",
                dec_deg
            )));
        }
        Ok(Self {
            ra: wrap_0_360(ra_deg),
            dec: dec_deg,
        })
    }

    /// Right ascension given in decimal hours.
    pub fn from_hours(ra_hours: f64, dec_deg: f64) -> CoordResult<Self> {
        Self::new(hms_to_degrees(ra_hours, 0.0, 0.0), dec_deg)
    }

    pub fn ra(&self) -> f64 {
        self.ra
    }

    pub fn dec(&self) -> f64 {
        self.dec
    }

    pub fn to_vector(&self) -> CelestialVector {
        equatorial_to_cartesian(self.ra, self.dec)
    }
}

impl fmt::Display for Equatorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RA {:.4}° Dec {:+.4}°", self.ra, self.dec)
    }
}
