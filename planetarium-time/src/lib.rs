//! Time base for the planetarium: Julian Date and mean sidereal time.
//!
//! The model is the naive Earth-rotation one used by the embedded renderer:
//! UTC is treated as UT1, there is no nutation term, and sidereal time comes
//! straight from the IAU 1982 GMST polynomial in days since J2000.0. That is
//! good to about 0.01° over the 20th and 21st centuries, which is well under a
//! pixel on a 320×240 display.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`julian`] | [`JulianDate`] from a UTC instant or calendar fields |
//! | [`sidereal`] | [`GMST`], [`LMST`], and the free functions [`gmst_degrees`] / [`local_sidereal_time`] |
//! | [`observer`] | [`Observer`]: latitude, east-positive longitude, UTC instant |
//! | [`parsing`] | [`parse_utc`] for ISO 8601 text |

pub mod julian;
pub mod observer;
pub mod parsing;
pub mod sidereal;

pub use julian::JulianDate;
pub use observer::Observer;
pub use parsing::parse_utc;
pub use sidereal::{gmst_degrees, local_sidereal_time, GMST, LMST};

use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid observer: {0}")]
    InvalidObserver(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
