use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// `(sin, cos)` of an angle given in degrees.
#[inline]
pub fn sincos_deg(deg: f64) -> (f64, f64) {
    libm::sincos(deg * DEG_TO_RAD)
}

/// `asin` in degrees with the argument clamped to [-1, 1].
///
/// Rounding can push `sin²φ + cos²φ` a few ulps past 1 when a star sits
/// exactly at the zenith.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    libm::asin(x.clamp(-1.0, 1.0)) * RAD_TO_DEG
}

#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    libm::atan2(y, x) * RAD_TO_DEG
}
