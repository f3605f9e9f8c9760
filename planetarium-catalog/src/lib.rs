//! Catalog compiler and live sky scene for a small planetarium display.
//!
//! Turns the Yale Bright Star Catalog, a constellation stick-figure list, a
//! deep-sky object CSV and a proper-name CSV into compact ordered tables for
//! an embedded renderer, and computes what that renderer shows for a given
//! observer.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`parser`] | Line parsers: [`StarCatalog`], [`ConstellationLine`], [`DeepSkyObject`], [`NamedStar`] |
//! | [`compiler`] | [`CatalogCompiler`] producing a [`CompiledCatalog`] |
//! | [`spectral`] | [`SpectralScale`] colour codes and the [`Rgb`] display ramp |
//! | [`category`] | [`CategoryMap`] object type codes |
//! | [`scene`] | [`Scene`] of plotted stars, segments and labels |
//! | [`sources`] | [`read_source`] and friends |
//!
//! # Quick Start
//!
//! ```ignore
//! use planetarium_catalog::{CatalogCompiler, CompileOptions, SourcePaths, SourceTexts};
//!
//! let texts = SourceTexts::read(&SourcePaths {
//!     catalog: "data/catalog".into(),
//!     constellations: "data/constellations".into(),
//!     objects: "data/messier_ngc_processed.csv".into(),
//!     named_stars: "data/star_names".into(),
//! })?;
//! let compiled = CatalogCompiler::new(CompileOptions::default()).compile(&texts.as_sources())?;
//! println!("{} stars, {} segments", compiled.stars.len(), compiled.segments.len());
//! ```
//!
//! # Features
//!
//! - **`serde`**: `Serialize` on compiled tables and scenes, and
//!   `Serialize`/`Deserialize` on option structs.
//! - **`cli`**: the `planetarium` binary.

pub mod category;
pub mod compiler;
pub mod error;
pub mod parser;
pub mod scene;
pub mod sources;
pub mod spectral;

#[cfg(test)]
mod test_support;

pub use category::CategoryMap;
pub use compiler::{
    CatalogCompiler, CatalogSources, ChartPolyline, CompileOptions, CompiledCatalog,
    EquatorialStar, NamedStarEntry, ObjectEntry, Segment, StarEntry, Table,
};
pub use error::{CatalogError, CatalogResult};
pub use parser::{ConstellationLine, DeepSkyObject, NamedStar, StarCatalog, StarRecord};
pub use scene::{PlottedLabel, PlottedSegment, PlottedStar, Scene, ViewSettings};
pub use sources::{read_source, SourcePaths, SourceTexts};
pub use spectral::{Rgb, SpectralScale};

pub use planetarium_coords::{ViewDirection, Viewport};
