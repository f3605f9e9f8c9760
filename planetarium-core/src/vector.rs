//! Unit direction vectors on the celestial sphere.
//!
//! Every star, deep-sky object and named star is stored as a
//! [`CelestialVector`]: a unit 3-vector in a fixed equatorial frame whose +z
//! axis points at the north celestial pole. The embedded renderer rotates
//! these directly, so the vector is computed once per record and never
//! rescaled afterwards.
//!
//! ```
//! use planetarium_core::CelestialVector;
//!
//! let pole = CelestialVector::new(0.0, 0.0, 1.0);
//! assert!(pole.is_unit());
//! assert_eq!(pole.dot(&pole), 1.0);
//! ```

use crate::constants::{RAD_TO_DEG, UNIT_VECTOR_TOLERANCE};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CelestialVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CelestialVector {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// `true` when the length is within 1e-6 of one.
    #[inline]
    pub fn is_unit(&self) -> bool {
        (self.magnitude() - 1.0).abs() <= UNIT_VECTOR_TOLERANCE
    }

    /// Angle between two directions in degrees.
    ///
    /// Uses `atan2(|a × b|, a · b)`, which stays accurate for nearly
    /// parallel vectors where `acos` of the dot product loses precision.
    pub fn angular_separation(&self, other: &Self) -> f64 {
        let cx = self.y * other.z - self.z * other.y;
        let cy = self.z * other.x - self.x * other.z;
        let cz = self.x * other.y - self.y * other.x;
        let cross = libm::sqrt(cx * cx + cy * cy + cz * cz);
        libm::atan2(cross, self.dot(other)) * RAD_TO_DEG
    }
}

impl fmt::Display for CelestialVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7}, {:.7})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_check() {
        assert!(CelestialVector::new(1.0, 0.0, 0.0).is_unit());
        assert!(CelestialVector::new(0.6, 0.8, 0.0).is_unit());
        assert!(!CelestialVector::new(1.0, 1.0, 0.0).is_unit());
        assert!(!CelestialVector::new(0.0, 0.0, 0.0).is_unit());
    }

    #[test]
    fn test_angular_separation() {
        let x = CelestialVector::new(1.0, 0.0, 0.0);
        let y = CelestialVector::new(0.0, 1.0, 0.0);
        let neg_x = CelestialVector::new(-1.0, 0.0, 0.0);
        assert_abs_diff_eq!(x.angular_separation(&y), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x.angular_separation(&neg_x), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x.angular_separation(&x), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let v = CelestialVector::new(0.5, -0.25, 1.0);
        assert_eq!(v.to_string(), "(0.5000000, -0.2500000, 1.0000000)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let v = CelestialVector::new(0.1, 0.2, 0.9746794344808963);
        let json = serde_json::to_string(&v).unwrap();
        let back: CelestialVector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
