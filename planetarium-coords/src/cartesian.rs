//! Equatorial directions as unit vectors in the renderer's device frame.
//!
//! ```text
//! x = cos(dec) · (-sin(ra))
//! y = cos(dec) ·   cos(ra)
//! z = sin(dec)
//! ```
//!
//! +z is the north celestial pole and RA 0h lies on +y. RA increases towards
//! -x, so the frame is left-handed when viewed from outside the sphere, which
//! is how the sky looks from inside it.

use crate::{CoordError, CoordResult, Equatorial};
use planetarium_core::angle::wrap_0_360;
use planetarium_core::math::{asin_deg, atan2_deg, sincos_deg};
use planetarium_core::CelestialVector;

/// Unit vector for a right ascension and declination given in degrees.
///
/// Right ascension in hours must be multiplied by 15 first.
pub fn equatorial_to_cartesian(ra_deg: f64, dec_deg: f64) -> CelestialVector {
    let (sin_ra, cos_ra) = sincos_deg(ra_deg);
    let (sin_dec, cos_dec) = sincos_deg(dec_deg);
    CelestialVector::new(cos_dec * -sin_ra, cos_dec * cos_ra, sin_dec)
}

/// Recovers right ascension and declination from a direction vector.
///
/// The vector does not need to be unit length, but it must be finite and
/// non-zero. On the poles the right ascension comes back as 0.
pub fn cartesian_to_equatorial(v: &CelestialVector) -> CoordResult<Equatorial> {
    let r = v.magnitude();
    if !r.is_finite() || r == 0.0 {
        return Err(CoordError::invalid_coordinate(format!(
            "cannot take a direction from vector {}",
            v
        )));
    }
    let ra = wrap_0_360(atan2_deg(-v.x, v.y));
    let dec = asin_deg(v.z / r);
    Equatorial::new(ra, dec)
}
