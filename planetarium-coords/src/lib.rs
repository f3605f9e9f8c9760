//! Coordinate conversions for a small planetarium renderer.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`cartesian`] | RA/Dec ⇄ unit vector in the renderer's fixed frame |
//! | [`horizontal`] | RA/Dec → altitude/azimuth for an observer |
//! | [`wrap`] | Splitting chart polylines at the RA 0h seam |
//! | [`projection`] | Zenith-centred plane for a view direction |
//! | [`viewport`] | Field-of-view test and pixel mapping |
//!
//! All angles are degrees. Azimuth is north-based and increases through east.
//! Observer longitude is east-positive.
//!
//! ```
//! use planetarium_coords::{equatorial_to_horizontal, project, ViewDirection};
//!
//! let hc = equatorial_to_horizontal(0.0, 51.0, 0.0, 51.0);
//! assert!((hc.altitude - 90.0).abs() < 1e-9);
//!
//! let p = project(&hc, &ViewDirection::zenith());
//! assert!(p.radius() < 1e-9);
//! ```

pub mod cartesian;
pub mod equatorial;
pub mod errors;
pub mod horizontal;
pub mod projection;
pub mod viewport;
pub mod wrap;

pub use cartesian::{cartesian_to_equatorial, equatorial_to_cartesian};
pub use equatorial::Equatorial;
pub use errors::{CoordError, CoordResult};
pub use horizontal::{
    equatorial_to_horizontal, equatorial_to_horizontal_checked, observe, HorizonCoordinate,
};
pub use projection::{project, PlanePoint, ViewDirection};
pub use viewport::{in_field, Viewport};
pub use wrap::{ra_spread, split_ra_wrap};

pub use planetarium_core::CelestialVector;
pub use planetarium_time::Observer;
