//! Sexagesimal value types and their display form.
//!
//! [`Hms`] displays as `HHh MMm SS.SSs`, [`Dms`] as `±DD° MM' SS.S"`. These
//! are for logs and debugging; the compiled tables store decimal degrees.
//!
//! Seconds are rounded to the displayed precision before formatting, and a
//! rounded 60 carries into the minutes, so `59.996s` prints as `00.00s` of the
//! next minute. Hours wrap at 24.

use super::{hms_to_degrees, signed_dms_to_degrees};
use core::fmt;

/// Right ascension split into hours, minutes and seconds of time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

/// Declination split into sign, degrees, arcminutes and arcseconds.
///
/// The sign is a separate field so that `-00° 30'` survives.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dms {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Hms {
    pub fn to_degrees(&self) -> f64 {
        hms_to_degrees(self.hours as f64, self.minutes as f64, self.seconds)
    }
}

impl Dms {
    pub fn to_degrees(&self) -> f64 {
        signed_dms_to_degrees(
            self.negative,
            self.degrees as f64,
            self.minutes as f64,
            self.seconds,
        )
    }
}

/// Rounds seconds to `decimals` places and carries a rounded 60 upwards.
fn carry_rounded(whole: u32, minutes: u32, seconds: f64, decimals: i32) -> (u32, u32, f64) {
    let scale = libm::pow(10.0, decimals as f64);
    let mut seconds = libm::round(seconds * scale) / scale;
    let mut minutes = minutes;
    let mut whole = whole;
    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        whole += 1;
    }
    (whole, minutes, seconds)
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, seconds) = carry_rounded(self.hours, self.minutes, self.seconds, 2);
        write!(f, "{:02}h {:02}m {:05.2}s", hours % 24, minutes, seconds)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        let (degrees, minutes, seconds) =
            carry_rounded(self.degrees, self.minutes, self.seconds, 1);
        write!(f, "{sign}{:02}° {:02}' {:04.1}\"", degrees, minutes, seconds)
    }
}
