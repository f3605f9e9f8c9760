use super::gmst::GMST;
use chrono::{DateTime, Utc};
use planetarium_core::angle::wrap_0_360;
use planetarium_core::constants::DEGREES_PER_HOUR;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Local mean sidereal time, with the east-positive longitude it was taken at.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LMST {
    degrees: f64,
    longitude: f64,
}

impl LMST {
    pub fn from_gmst(gmst: &GMST, longitude_deg: f64) -> Self {
        Self {
            degrees: wrap_0_360(gmst.degrees() + longitude_deg),
            longitude: longitude_deg,
        }
    }

    pub fn from_utc(utc: &DateTime<Utc>, longitude_deg: f64) -> Self {
        Self::from_gmst(&GMST::from_utc(utc), longitude_deg)
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn hours(&self) -> f64 {
        self.degrees / DEGREES_PER_HOUR
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for LMST {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LMST {:.6}° at {:+.4}°", self.degrees, self.longitude)
    }
}

/// Local sidereal time in degrees [0, 360) for an east-positive longitude.
pub fn local_sidereal_time(utc: &DateTime<Utc>, longitude_deg: f64) -> f64 {
    LMST::from_utc(utc, longitude_deg).degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gmst_degrees;
    use approx::assert_abs_diff_eq;
    use chrono::{Duration, TimeZone};
    use planetarium_core::constants::SIDEREAL_DAY_SECONDS;

    fn angular_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    #[test]
    fn test_greenwich_matches_gmst() {
        let utc = Utc.with_ymd_and_hms(2025, 5, 13, 21, 0, 0).unwrap();
        assert_abs_diff_eq!(local_sidereal_time(&utc, 0.0), gmst_degrees(&utc), epsilon = 1e-12);
    }

    #[test]
    fn test_longitude_offsets() {
        let utc = Utc.with_ymd_and_hms(1987, 4, 10, 0, 0, 0).unwrap();
        // 197.693195 + 180 wraps past 360
        assert_abs_diff_eq!(local_sidereal_time(&utc, 180.0), 17.693195, epsilon = 1e-6);
        assert_abs_diff_eq!(local_sidereal_time(&utc, -77.0), 120.693195, epsilon = 1e-6);
    }

    #[test]
    fn test_sidereal_day_periodicity() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap();
        let later = utc + Duration::milliseconds((SIDEREAL_DAY_SECONDS * 1000.0) as i64);
        for lon in [-122.4, 0.0, 2.3, 151.2] {
            let a = local_sidereal_time(&utc, lon);
            let b = local_sidereal_time(&later, lon);
            assert!(angular_diff(a, b) < 0.01, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_accessors() {
        let lmst = GMST::from_degrees(350.0).to_lmst(20.0);
        assert_abs_diff_eq!(lmst.degrees(), 10.0, epsilon = 1e-12);
        assert_eq!(lmst.longitude(), 20.0);
        assert!(lmst.to_string().starts_with("LMST 10.000000°"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_longitude() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 15, 22, 0, 0).unwrap();
        let lmst = LMST::from_utc(&utc, -0.1276);
        let json = serde_json::to_string(&lmst).unwrap();
        assert!(json.contains("\"longitude\":-0.1276"), "{}", json);
        let back: LMST = serde_json::from_str(&json).unwrap();
        assert_eq!(lmst, back);
    }
}
