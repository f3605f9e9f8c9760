//! Mean sidereal time.
//!
//! ```text
//! d    = JD - 2451545.0
//! T    = d / 36525
//! GMST = 280.46061837 + 360.98564736629 d + 0.000387933 T² - T³ / 38710000   (mod 360)
//! LST  = GMST + longitude                                                     (mod 360)
//! ```
//!
//! Longitude is east-positive. Both quantities are returned in degrees in
//! [0, 360).

pub mod gmst;
pub mod lmst;

pub use gmst::{gmst_degrees, GMST};
pub use lmst::{local_sidereal_time, LMST};
