//! Field-of-view clipping and pixel mapping for projected points.
//!
//! A square field `field_deg` wide is centred on the plane origin. It is
//! stretched onto a `width × height` pixel grid with +y pointing up on the
//! plane and down on the screen:
//!
//! ```text
//! px = round(width  · (x / field + 0.5))
//! py = round(height · (1 - (y / field + 0.5)))
//! ```

use crate::PlanePoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pixel dimensions of the output display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel position of a plane point in a field `field_deg` wide.
    ///
    /// Points outside the field map outside `[0, width] × [0, height]`; check
    /// [`in_field`] first when only visible points are wanted.
    pub fn to_pixel(&self, point: &PlanePoint, field_deg: f64) -> (i32, i32) {
        let w = self.width as f64;
        let h = self.height as f64;
        let px = libm::round(w * (point.x / field_deg + 0.5));
        let py = libm::round(h * (1.0 - (point.y / field_deg + 0.5)));
        (px as i32, py as i32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(320, 240)
    }
}

/// `true` when the point lies strictly inside the square field.
pub fn in_field(point: &PlanePoint, field_deg: f64) -> bool {
    let half = field_deg / 2.0;
    point.x.abs() < half && point.y.abs() < half
}
