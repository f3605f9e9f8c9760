//! Zenith-centred plane for a bounded field of view.
//!
//! ```text
//! x =  (90 - alt) · sin(az - view_az)
//! y = -(90 - alt) · cos(az - view_az) + (90 - view_alt)
//! ```
//!
//! Distances on the plane are in degrees. The zenith sits at
//! `(0, 90 - view_alt)` and the view direction at the origin, so the plane is
//! a polar plot of zenith distance against azimuth, shifted down to put the
//! view centre at `(0, 0)`. For a zenith view it is the azimuthal equidistant
//! projection. Off the zenith it is neither equal-area nor conformal.

use crate::HorizonCoordinate;
use planetarium_core::math::sincos_deg;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the view is pointed, as altitude and azimuth in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewDirection {
    pub altitude: f64,
    pub azimuth: f64,
}

impl ViewDirection {
    pub fn new(altitude: f64, azimuth: f64) -> Self {
        Self { altitude, azimuth }
    }

    pub fn zenith() -> Self {
        Self::new(90.0, 0.0)
    }

    pub fn as_horizon(&self) -> HorizonCoordinate {
        HorizonCoordinate::new(self.altitude, self.azimuth)
    }
}

impl Default for ViewDirection {
    fn default() -> Self {
        Self::zenith()
    }
}

/// A point on the projection plane, in degrees from the view centre.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn radius(&self) -> f64 {
        libm::hypot(self.x, self.y)
    }
}

impl fmt::Display for PlanePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

pub fn project(target: &HorizonCoordinate, view: &ViewDirection) -> PlanePoint {
    let zenith_distance = target.zenith_distance();
    let (sin_d, cos_d) = sincos_deg(target.azimuth - view.azimuth);
    PlanePoint::new(
        zenith_distance * sin_d,
        -zenith_distance * cos_d + (90.0 - view.altitude),
    )
}
