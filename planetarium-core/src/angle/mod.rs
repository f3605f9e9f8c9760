//! Sexagesimal angle codec.
//!
//! Catalogs write right ascension as hours-minutes-seconds and declination as
//! degrees-minutes-seconds. Everything downstream of the parser works in
//! decimal degrees, so this module is the single place where the two meet.
//!
//! | Function | Direction |
//! |----------|-----------|
//! | [`hms_to_degrees`] | `h m s` → degrees (15° per hour) |
//! | [`dms_to_degrees`] | `d m s` → degrees, sign taken from `d` |
//! | [`signed_dms_to_degrees`] | `d m s` → degrees, sign passed separately |
//! | [`degrees_to_hms`] | degrees → [`Hms`] |
//! | [`degrees_to_dms`] | degrees → [`Dms`] |
//!
//! # The `-00` declination problem
//!
//! Fixed-column catalogs store the declination sign inside the degree field.
//! When the degree component is zero (`-00 30 00`), an integer parse of that
//! field yields `0` and the sign is gone. [`dms_to_degrees`] cannot recover it,
//! so callers that read text fields pass the sign through
//! [`signed_dms_to_degrees`] instead.
//!
//! ```
//! use planetarium_core::angle::{dms_to_degrees, hms_to_degrees, signed_dms_to_degrees};
//!
//! assert_eq!(hms_to_degrees(6.0, 0.0, 0.0), 90.0);
//! assert_eq!(dms_to_degrees(-38.0, 30.0, 0.0), -38.5);
//! assert_eq!(signed_dms_to_degrees(true, 0.0, 30.0, 0.0), -0.5);
//! ```

mod format;
mod normalize;
pub mod parse;

pub use format::{Dms, Hms};
pub use normalize::{normalize_hour_angle, wrap_0_360};
pub use parse::{parse_dms, parse_hms};

use crate::constants::{ARCMIN_PER_DEGREE, ARCSEC_PER_DEGREE, DEGREES_PER_HOUR};

/// Converts hours, minutes and seconds of right ascension to degrees.
#[inline]
pub fn hms_to_degrees(hours: f64, minutes: f64, seconds: f64) -> f64 {
    hours * DEGREES_PER_HOUR
        + minutes * DEGREES_PER_HOUR / ARCMIN_PER_DEGREE
        + seconds * DEGREES_PER_HOUR / ARCSEC_PER_DEGREE
}

/// Converts degrees, arcminutes and arcseconds to degrees.
///
/// The sign of `degrees` applies to the whole angle; minutes and seconds are
/// always added with positive magnitude away from zero. A negative angle with
/// a zero degree component cannot be expressed here; use
/// [`signed_dms_to_degrees`].
#[inline]
pub fn dms_to_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    signed_dms_to_degrees(degrees.is_sign_negative(), degrees.abs(), minutes, seconds)
}

/// Converts degrees, arcminutes and arcseconds to degrees with an explicit sign.
///
/// The magnitudes of all three components are used; `negative` alone decides
/// the sign of the result.
#[inline]
pub fn signed_dms_to_degrees(negative: bool, degrees: f64, minutes: f64, seconds: f64) -> f64 {
    let magnitude =
        degrees.abs() + minutes.abs() / ARCMIN_PER_DEGREE + seconds.abs() / ARCSEC_PER_DEGREE;
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Splits an angle in degrees into hours, minutes and seconds of time.
///
/// The input is wrapped to [0, 360) first, so the hour component is always in
/// [0, 24).
pub fn degrees_to_hms(deg: f64) -> Hms {
    let mut h = wrap_0_360(deg) / DEGREES_PER_HOUR;
    let hours = libm::trunc(h);
    h = (h - hours) * 60.0;
    let minutes = libm::trunc(h);
    let seconds = (h - minutes) * 60.0;
    Hms {
        hours: hours as u32,
        minutes: minutes as u32,
        seconds,
    }
}

/// Splits an angle in degrees into sign, degrees, arcminutes and arcseconds.
pub fn degrees_to_dms(deg: f64) -> Dms {
    let negative = deg < 0.0;
    let mut d = deg.abs();
    let degrees = libm::trunc(d);
    d = (d - degrees) * 60.0;
    let minutes = libm::trunc(d);
    let seconds = (d - minutes) * 60.0;
    Dms {
        negative,
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ONE_ARCSEC: f64 = 1.0 / 3600.0;

    #[test]
    fn test_hms_to_degrees() {
        assert_eq!(hms_to_degrees(0.0, 0.0, 0.0), 0.0);
        assert_eq!(hms_to_degrees(1.0, 0.0, 0.0), 15.0);
        assert_eq!(hms_to_degrees(0.0, 4.0, 0.0), 1.0);
        assert_abs_diff_eq!(hms_to_degrees(0.0, 0.0, 4.0), 1.0 / 60.0, epsilon = 1e-12);
        // Vega: 18h 36m 56.3s
        assert_abs_diff_eq!(hms_to_degrees(18.0, 36.0, 56.3), 279.234583, epsilon = 1e-6);
    }

    #[test]
    fn test_dms_to_degrees_keeps_sign_of_degrees() {
        assert_eq!(dms_to_degrees(38.0, 47.0, 0.0), 38.0 + 47.0 / 60.0);
        assert_eq!(dms_to_degrees(-38.0, 47.0, 0.0), -(38.0 + 47.0 / 60.0));
        assert_eq!(dms_to_degrees(-16.0, 42.0, 58.0), -(16.0 + 42.0 / 60.0 + 58.0 / 3600.0));
    }

    #[test]
    fn test_negative_zero_degree_declination() {
        // int("-00") loses the sign; the separate flag keeps it
        assert_eq!(dms_to_degrees(0.0, 30.0, 0.0), 0.5);
        assert_eq!(signed_dms_to_degrees(true, 0.0, 30.0, 0.0), -0.5);
        assert_eq!(dms_to_degrees(-0.0, 30.0, 0.0), -0.5);
    }

    #[test]
    fn test_degrees_to_hms() {
        let hms = degrees_to_hms(90.0);
        assert_eq!((hms.hours, hms.minutes), (6, 0));
        assert_abs_diff_eq!(hms.seconds, 0.0, epsilon = 1e-9);

        let hms = degrees_to_hms(-15.0);
        assert_eq!(hms.hours, 23);
    }

    #[test]
    fn test_hms_round_trip_within_one_arcsecond() {
        for h in 0..24 {
            for m in (0..60).step_by(7) {
                for s in [0.0, 0.25, 12.5, 33.3, 59.9] {
                    let deg = hms_to_degrees(h as f64, m as f64, s);
                    let back = degrees_to_hms(deg);
                    let deg_back = back.to_degrees();
                    assert!(
                        (deg_back - deg).abs() < ONE_ARCSEC,
                        "{}h{}m{}s -> {} -> {}",
                        h,
                        m,
                        s,
                        deg,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_dms_round_trip() {
        for deg in [-89.99, -45.5, -0.25, 0.0, 12.3456, 51.0, 89.5] {
            let dms = degrees_to_dms(deg);
            assert_abs_diff_eq!(dms.to_degrees(), deg, epsilon = 1e-9);
        }
        assert!(degrees_to_dms(-0.25).negative);
        assert_eq!(degrees_to_dms(-0.25).degrees, 0);
    }
}
