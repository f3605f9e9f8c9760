//! Julian Date from the Gregorian calendar.
//!
//! Uses the Meeus (Astronomical Algorithms, ch. 7) formula:
//!
//! ```text
//! if M <= 2 { Y -= 1; M += 12 }
//! A  = floor(Y / 100)
//! B  = 2 - A + floor(A / 4)
//! JD = floor(365.25 (Y + 4716)) + floor(30.6001 (M + 1)) + D + B - 1524.5 + UT / 24
//! ```
//!
//! January and February are counted as months 13 and 14 of the previous year
//! so the leap day falls at the end of the year. Valid for Gregorian dates
//! only (after 1582-10-15).

use crate::{TimeError, TimeResult};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use planetarium_core::constants::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, NANOSECONDS_PER_SECOND_F64, SECONDS_PER_DAY_F64,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate(f64);

impl JulianDate {
    pub fn from_f64(jd: f64) -> Self {
        Self(jd)
    }

    pub fn j2000() -> Self {
        Self(J2000_JD)
    }

    /// Julian Date of a UTC instant, including sub-second precision.
    pub fn from_utc(utc: &DateTime<Utc>) -> Self {
        let seconds = utc.second() as f64 + utc.nanosecond() as f64 / NANOSECONDS_PER_SECOND_F64;
        let ut_hours = utc.hour() as f64 + utc.minute() as f64 / 60.0 + seconds / 3600.0;
        Self(meeus(utc.year(), utc.month(), utc.day(), ut_hours))
    }

    /// Julian Date of calendar fields, rejecting dates that do not exist.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> TimeResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TimeError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day))
        })?;
        if hour > 23 || minute > 59 || !(0.0..61.0).contains(&second) {
            return Err(TimeError::InvalidDate(format!(
                "{} {:02}:{:02}:{}",
                date, hour, minute, second
            )));
        }
        let ut_hours = hour as f64 + minute as f64 / 60.0 + second / 3600.0;
        Ok(Self(meeus(year, month, day, ut_hours)))
    }

    pub fn to_f64(&self) -> f64 {
        self.0
    }

    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000_JD
    }

    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// The UTC instant at this Julian Date, rounded to the nearest microsecond.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        // JD 2440587.5 is 1970-01-01T00:00:00Z
        let micros = libm::round((self.0 - 2_440_587.5) * SECONDS_PER_DAY_F64 * 1e6);
        if !micros.is_finite() {
            return None;
        }
        DateTime::from_timestamp_micros(micros as i64)
    }
}

fn meeus(year: i32, month: u32, day: u32, ut_hours: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = libm::floor(y / 100.0);
    let b = 2.0 - a + libm::floor(a / 4.0);
    libm::floor(365.25 * (y + 4716.0)) + libm::floor(30.6001 * (m + 1.0)) + day as f64 + b
        - 1524.5
        + ut_hours / 24.0
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

impl From<&DateTime<Utc>> for JulianDate {
    fn from(utc: &DateTime<Utc>) -> Self {
        Self::from_utc(utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_j2000_epoch() {
        let jd = JulianDate::from_utc(&utc(2000, 1, 1, 12, 0, 0));
        assert_eq!(jd.to_f64(), J2000_JD);
        assert_eq!(jd, JulianDate::j2000());
        assert_eq!(jd.days_since_j2000(), 0.0);
    }

    #[test]
    fn test_meeus_examples() {
        // Meeus example 7.a: 1957 October 4.81
        let jd = JulianDate::from_calendar(1957, 10, 4, 19, 26, 24.0).unwrap();
        assert_abs_diff_eq!(jd.to_f64(), 2436116.31, epsilon = 1e-6);

        // Meeus example 12.a: 1987 April 10, 0h UT
        let jd = JulianDate::from_utc(&utc(1987, 4, 10, 0, 0, 0));
        assert_eq!(jd.to_f64(), 2446895.5);
    }

    #[test]
    fn test_january_and_february_use_previous_year() {
        // 2024-02-29 and 2024-03-01 are one day apart across the leap day
        let feb = JulianDate::from_utc(&utc(2024, 2, 29, 0, 0, 0));
        let mar = JulianDate::from_utc(&utc(2024, 3, 1, 0, 0, 0));
        assert_eq!(mar.to_f64() - feb.to_f64(), 1.0);

        let dec = JulianDate::from_utc(&utc(1999, 12, 31, 0, 0, 0));
        let jan = JulianDate::from_utc(&utc(2000, 1, 1, 0, 0, 0));
        assert_eq!(jan.to_f64() - dec.to_f64(), 1.0);
    }

    #[test]
    fn test_sub_second_precision() {
        let base = utc(2025, 5, 13, 0, 0, 0);
        let later = base + chrono::Duration::milliseconds(500);
        let diff = JulianDate::from_utc(&later).to_f64() - JulianDate::from_utc(&base).to_f64();
        assert_abs_diff_eq!(diff * SECONDS_PER_DAY_F64, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_invalid_calendar_dates() {
        assert!(JulianDate::from_calendar(2025, 2, 30, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_calendar(2025, 13, 1, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_calendar(2025, 1, 1, 24, 0, 0.0).is_err());
        assert!(JulianDate::from_calendar(2025, 1, 1, 0, 0, -1.0).is_err());
    }

    #[test]
    fn test_to_utc_round_trip() {
        let t = utc(2025, 5, 13, 21, 30, 15);
        let back = JulianDate::from_utc(&t).to_utc().unwrap();
        assert!((back - t).num_milliseconds().abs() <= 1);
    }

    #[test]
    fn test_centuries() {
        let jd = JulianDate::j2000().add_days(DAYS_PER_JULIAN_CENTURY);
        assert_eq!(jd.centuries_since_j2000(), 1.0);
        assert!(jd.to_string().starts_with("JD 2488070.0"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let jd = JulianDate::from_utc(&utc(2024, 1, 15, 22, 0, 0));
        let json = serde_json::to_string(&jd).unwrap();
        let back: JulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(jd, back);
    }
}
