//! Assembles parsed records into the ordered tables the renderer embeds.
//!
//! | Table | Row |
//! |-------|-----|
//! | `stars` | `(x, y, z, magnitude, color_code)` |
//! | `equatorial_stars` | `(ra, dec, magnitude, color_code)` |
//! | `segments` | `(ra1, dec1, ra2, dec2)` per constellation edge |
//! | `objects` | `(name, type_code, x, y, z)` |
//! | `named_stars` | `(name, x, y, z)` |
//!
//! Rows keep input order. Every table carries its row count.
//!
//! Malformed lines were already dropped by the parsers. A constellation that
//! references a star missing from the catalog stops compilation with
//! [`CatalogError::UnknownReference`].

use crate::category::CategoryMap;
use crate::parser::{
    parse_catalog, parse_constellations, parse_named_stars, parse_objects, ConstellationLine,
    DeepSkyObject, NamedStar, StarCatalog, StarRecord,
};
use crate::spectral::SpectralScale;
use crate::{CatalogError, CatalogResult};
use planetarium_coords::{equatorial_to_cartesian, split_ra_wrap, CelestialVector};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompileOptions {
    /// Stars fainter than this are left out of the star tables.
    pub magnitude_limit: Option<f64>,
    pub spectral_scale: SpectralScale,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            magnitude_limit: None,
            spectral_scale: SpectralScale::default(),
        }
    }
}

/// Rows plus their count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Table<T> {
    count: usize,
    rows: Vec<T>,
}

impl<T> Table<T> {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }
}

impl<T> From<Vec<T>> for Table<T> {
    fn from(rows: Vec<T>) -> Self {
        Self {
            count: rows.len(),
            rows,
        }
    }
}

impl<'a, T> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StarEntry {
    pub vector: CelestialVector,
    pub magnitude: f64,
    pub color: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EquatorialStar {
    pub ra: f64,
    pub dec: f64,
    pub magnitude: f64,
    pub color: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Segment {
    pub ra1: f64,
    pub dec1: f64,
    pub ra2: f64,
    pub dec2: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ObjectEntry {
    pub name: String,
    pub type_code: u32,
    pub vector: CelestialVector,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NamedStarEntry {
    pub name: String,
    pub vector: CelestialVector,
}

/// One constellation polyline in equatorial chart coordinates.
///
/// A polyline that crosses RA 0h appears twice, shifted to either side of
/// the chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChartPolyline {
    pub designator: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CompiledCatalog {
    pub stars: Table<StarEntry>,
    pub equatorial_stars: Table<EquatorialStar>,
    pub segments: Table<Segment>,
    pub chart: Vec<ChartPolyline>,
    pub categories: CategoryMap,
    pub objects: Table<ObjectEntry>,
    pub named_stars: Table<NamedStarEntry>,
}

/// The four source texts of one compilation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogSources<'a> {
    pub catalog: &'a str,
    pub constellations: &'a str,
    pub objects: &'a str,
    pub named_stars: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogCompiler {
    options: CompileOptions,
}

impl CatalogCompiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Parses and compiles all four sources.
    pub fn compile(&self, sources: &CatalogSources<'_>) -> CatalogResult<CompiledCatalog> {
        let catalog = parse_catalog(sources.catalog);
        let lines = parse_constellations(sources.constellations);
        let objects = parse_objects(sources.objects);
        let named = parse_named_stars(sources.named_stars);
        self.compile_records(&catalog, &lines, &objects, &named)
    }

    /// Compiles already-parsed records.
    pub fn compile_records(
        &self,
        catalog: &StarCatalog,
        lines: &[ConstellationLine],
        objects: &[DeepSkyObject],
        named: &[NamedStar],
    ) -> CatalogResult<CompiledCatalog> {
        let segments = self.segments(catalog, lines)?;
        let chart = self.chart(catalog, lines)?;
        let (categories, objects) = self.objects(objects);

        let compiled = CompiledCatalog {
            stars: self.stars(catalog).into(),
            equatorial_stars: self.equatorial_stars(catalog).into(),
            segments: segments.into(),
            chart,
            categories,
            objects: objects.into(),
            named_stars: self.named_stars(named).into(),
        };
        debug!(
            stars = compiled.stars.len(),
            segments = compiled.segments.len(),
            objects = compiled.objects.len(),
            categories = compiled.categories.len(),
            named_stars = compiled.named_stars.len(),
            "compiled catalog"
        );
        Ok(compiled)
    }

    fn visible<'a>(&'a self, catalog: &'a StarCatalog) -> impl Iterator<Item = &'a StarRecord> {
        catalog.iter().filter(move |star| match self.options.magnitude_limit {
            Some(limit) => star.magnitude <= limit,
            None => true,
        })
    }

    fn color(&self, star: &StarRecord) -> u8 {
        self.options
            .spectral_scale
            .color_code(star.spectral_class.as_deref())
    }

    pub fn stars(&self, catalog: &StarCatalog) -> Vec<StarEntry> {
        self.visible(catalog)
            .map(|star| StarEntry {
                vector: equatorial_to_cartesian(star.ra, star.dec),
                magnitude: star.magnitude,
                color: self.color(star),
            })
            .collect()
    }

    pub fn equatorial_stars(&self, catalog: &StarCatalog) -> Vec<EquatorialStar> {
        self.visible(catalog)
            .map(|star| EquatorialStar {
                ra: star.ra,
                dec: star.dec,
                magnitude: star.magnitude,
                color: self.color(star),
            })
            .collect()
    }

    /// N-point polylines become N-1 segments, in file order.
    pub fn segments(
        &self,
        catalog: &StarCatalog,
        lines: &[ConstellationLine],
    ) -> CatalogResult<Vec<Segment>> {
        let mut segments = Vec::new();
        for line in lines {
            let points = resolve(catalog, line)?;
            segments.extend(points.windows(2).map(|pair| Segment {
                ra1: pair[0].0,
                dec1: pair[0].1,
                ra2: pair[1].0,
                dec2: pair[1].1,
            }));
        }
        Ok(segments)
    }

    pub fn chart(
        &self,
        catalog: &StarCatalog,
        lines: &[ConstellationLine],
    ) -> CatalogResult<Vec<ChartPolyline>> {
        let mut chart = Vec::with_capacity(lines.len());
        for line in lines {
            let points = resolve(catalog, line)?;
            chart.extend(split_ra_wrap(&points).into_iter().map(|points| ChartPolyline {
                designator: line.designator.clone(),
                points,
            }));
        }
        Ok(chart)
    }

    pub fn objects(&self, objects: &[DeepSkyObject]) -> (CategoryMap, Vec<ObjectEntry>) {
        let mut categories = CategoryMap::new();
        let entries = objects
            .iter()
            .map(|obj| ObjectEntry {
                name: obj.name.clone(),
                type_code: categories.code_or_insert(&obj.category),
                vector: equatorial_to_cartesian(obj.ra, obj.dec),
            })
            .collect();
        debug!(categories = categories.len(), "assigned object type codes");
        (categories, entries)
    }

    pub fn named_stars(&self, named: &[NamedStar]) -> Vec<NamedStarEntry> {
        named
            .iter()
            .map(|star| NamedStarEntry {
                name: star.name.clone(),
                vector: equatorial_to_cartesian(star.ra, star.dec),
            })
            .collect()
    }
}

/// `(ra, dec)` of every star on a polyline.
fn resolve(catalog: &StarCatalog, line: &ConstellationLine) -> CatalogResult<Vec<(f64, f64)>> {
    line.star_ids
        .iter()
        .map(|&id| {
            catalog
                .get(id)
                .map(|star| (star.ra, star.dec))
                .ok_or_else(|| CatalogError::unknown_reference(id, line.line))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bsc_line, BscLine};
    use approx::assert_abs_diff_eq;

    fn catalog_text() -> String {
        [
            bsc_line(&BscLine { id: 1, ra: (23, 50, 0.0), mag: 4.0, spectral: "K0", ..BscLine::default() }),
            bsc_line(&BscLine { id: 2, ra: (0, 10, 0.0), mag: 2.0, spectral: "B9", ..BscLine::default() }),
            bsc_line(&BscLine { id: 3, ra: (1, 0, 0.0), mag: 6.5, spectral: "G2", ..BscLine::default() }),
        ]
        .join("\n")
    }

    fn sources<'a>(catalog: &'a str, constellations: &'a str) -> CatalogSources<'a> {
        CatalogSources {
            catalog,
            constellations,
            objects: "name,type,ra,dec\nM31,Galaxy,0.712,41.27\nM42,Nebula,5.588,-5.39\nM33,Galaxy,1.564,30.66\n",
            named_stars: "name,hr,ra,dec\nAlpheratz,15,2.097,29.09\n",
        }
    }

    #[test]
    fn test_compile_tables() {
        let text = catalog_text();
        let compiled = CatalogCompiler::default()
            .compile(&sources(&text, "And 3 1 2 3\n"))
            .unwrap();

        assert_eq!(compiled.stars.len(), 3);
        assert_eq!(compiled.stars.rows().len(), compiled.stars.len());
        assert_eq!(compiled.stars.rows()[0].color, 50);
        assert_eq!(compiled.stars.rows()[1].color, 19);
        for star in &compiled.stars {
            assert!(star.vector.is_unit());
        }
        assert_eq!(compiled.equatorial_stars.rows()[2].color, 42);

        assert_eq!(compiled.segments.len(), 2);
        let first = compiled.segments.rows()[0];
        assert_abs_diff_eq!(first.ra1, 357.5, epsilon = 1e-9);
        assert_abs_diff_eq!(first.ra2, 2.5, epsilon = 1e-9);

        assert_eq!(compiled.objects.len(), 3);
        assert_eq!(compiled.categories.len(), 2);
        let codes: Vec<u32> = compiled.objects.iter().map(|o| o.type_code).collect();
        assert_eq!(codes, vec![0, 1, 0]);

        assert_eq!(compiled.named_stars.len(), 1);
        assert_eq!(compiled.named_stars.rows()[0].name, "Alpheratz");
    }

    #[test]
    fn test_chart_splits_at_seam() {
        let text = catalog_text();
        let compiled = CatalogCompiler::default()
            .compile(&sources(&text, "And 3 1 2 3\n"))
            .unwrap();
        assert_eq!(compiled.chart.len(), 2);
        assert!(compiled.chart.iter().all(|p| p.designator == "And"));
        assert_abs_diff_eq!(compiled.chart[0].points[0].0, -2.5, epsilon = 1e-9);
        assert_abs_diff_eq!(compiled.chart[1].points[1].0, 362.5, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_reference_is_fatal() {
        let text = catalog_text();
        let err = CatalogCompiler::default()
            .compile(&sources(&text, "And 2 1 2\nPeg 2 3 9999\n"))
            .unwrap_err();
        match err {
            CatalogError::UnknownReference { star_id, line } => {
                assert_eq!(star_id, 9999);
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_magnitude_limit() {
        let text = catalog_text();
        let compiler = CatalogCompiler::new(CompileOptions {
            magnitude_limit: Some(5.0),
            ..CompileOptions::default()
        });
        let compiled = compiler.compile(&sources(&text, "And 3 1 2 3\n")).unwrap();
        assert_eq!(compiled.stars.len(), 2);
        assert_eq!(compiled.equatorial_stars.len(), 2);
        // faint stars still anchor constellation figures
        assert_eq!(compiled.segments.len(), 2);
    }

    #[test]
    fn test_repeated_runs_identical() {
        let text = catalog_text();
        let compiler = CatalogCompiler::default();
        let a = compiler.compile(&sources(&text, "And 3 1 2 3\n")).unwrap();
        let b = compiler.compile(&sources(&text, "And 3 1 2 3\n")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_sources() {
        let compiled = CatalogCompiler::default()
            .compile(&CatalogSources::default())
            .unwrap();
        assert!(compiled.stars.is_empty());
        assert!(compiled.segments.is_empty());
        assert!(compiled.categories.is_empty());
    }
}
