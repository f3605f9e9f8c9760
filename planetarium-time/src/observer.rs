//! Where and when the sky is seen from.

use crate::sidereal::{GMST, LMST};
use crate::{JulianDate, TimeError, TimeResult};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic latitude, east-positive longitude (both degrees) and a UTC
/// instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observer {
    pub latitude: f64,
    pub longitude: f64,
    pub utc: DateTime<Utc>,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64, utc: DateTime<Utc>) -> TimeResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(TimeError::InvalidObserver(format!(
                "latitude {} outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(TimeError::InvalidObserver(format!(
                "longitude {} outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
            utc,
        })
    }

    pub fn julian_date(&self) -> JulianDate {
        JulianDate::from_utc(&self.utc)
    }

    pub fn gmst(&self) -> GMST {
        GMST::from_utc(&self.utc)
    }

    pub fn lmst(&self) -> LMST {
        LMST::from_utc(&self.utc, self.longitude)
    }

    /// Local sidereal time in degrees [0, 360).
    pub fn local_sidereal_time(&self) -> f64 {
        self.lmst().degrees()
    }

    /// The same place at another instant.
    pub fn at(&self, utc: DateTime<Utc>) -> Self {
        Self { utc, ..*self }
    }
}
