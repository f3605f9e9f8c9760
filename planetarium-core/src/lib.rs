//! Numeric foundations for the planetarium catalog compiler.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Sexagesimal codec, angle wrapping, text parsing |
//! | [`constants`] | Epochs, unit conversions, tolerances |
//! | [`errors`] | [`SkyError`] and [`SkyResult`] |
//! | [`math`] | Degree-based trig helpers over `libm` |
//! | [`vector`] | [`CelestialVector`] unit directions |
//!
//! Every function here is a pure function of its numeric inputs.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod vector;

pub use errors::{SkyError, SkyResult};
pub use vector::CelestialVector;
