//! What a planetarium display shows for one observer at one instant.
//!
//! Each star and constellation endpoint is taken through
//! equatorial → horizontal → zenith-centred plane → pixels. Frames are
//! independent: nothing from one [`Scene`] is reused by the next.

use crate::compiler::CompiledCatalog;
use crate::CatalogResult;
use planetarium_coords::{
    cartesian_to_equatorial, equatorial_to_horizontal, in_field, project, CelestialVector,
    Observer, PlanePoint, ViewDirection, Viewport,
};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewSettings {
    pub direction: ViewDirection,
    /// Width of the square field, degrees.
    pub field_deg: f64,
    /// Faintest star plotted.
    pub magnitude_limit: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            direction: ViewDirection::zenith(),
            field_deg: 90.0,
            magnitude_limit: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlottedStar {
    pub x: i32,
    pub y: i32,
    pub magnitude: f64,
    pub color: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlottedSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlottedLabel {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Scene {
    /// Local sidereal time used for the frame, degrees.
    pub lst: f64,
    pub stars: Vec<PlottedStar>,
    pub segments: Vec<PlottedSegment>,
    pub objects: Vec<PlottedLabel>,
    pub named_stars: Vec<PlottedLabel>,
}

struct Frame<'a> {
    lst: f64,
    latitude: f64,
    settings: &'a ViewSettings,
    viewport: &'a Viewport,
}

impl Frame<'_> {
    fn plane(&self, ra: f64, dec: f64) -> PlanePoint {
        let hc = equatorial_to_horizontal(ra, dec, self.lst, self.latitude);
        project(&hc, &self.settings.direction)
    }

    fn visible(&self, point: &PlanePoint) -> bool {
        in_field(point, self.settings.field_deg)
    }

    fn pixel(&self, point: &PlanePoint) -> (i32, i32) {
        self.viewport.to_pixel(point, self.settings.field_deg)
    }

    fn label(&self, name: &str, vector: &CelestialVector) -> CatalogResult<Option<PlottedLabel>> {
        let eq = cartesian_to_equatorial(vector)?;
        let point = self.plane(eq.ra(), eq.dec());
        if !self.visible(&point) {
            return Ok(None);
        }
        let (x, y) = self.pixel(&point);
        Ok(Some(PlottedLabel {
            name: name.to_string(),
            x,
            y,
        }))
    }
}

impl Scene {
    pub fn compute(
        catalog: &CompiledCatalog,
        observer: &Observer,
        settings: &ViewSettings,
        viewport: &Viewport,
    ) -> CatalogResult<Self> {
        let frame = Frame {
            lst: observer.local_sidereal_time(),
            latitude: observer.latitude,
            settings,
            viewport,
        };

        let stars: Vec<PlottedStar> = catalog
            .equatorial_stars
            .iter()
            .filter(|star| star.magnitude <= settings.magnitude_limit)
            .filter_map(|star| {
                let point = frame.plane(star.ra, star.dec);
                frame.visible(&point).then(|| {
                    let (x, y) = frame.pixel(&point);
                    PlottedStar {
                        x,
                        y,
                        magnitude: star.magnitude,
                        color: star.color,
                    }
                })
            })
            .collect();

        let segments: Vec<PlottedSegment> = catalog
            .segments
            .iter()
            .filter_map(|seg| {
                let a = frame.plane(seg.ra1, seg.dec1);
                let b = frame.plane(seg.ra2, seg.dec2);
                if !(frame.visible(&a) || frame.visible(&b)) {
                    return None;
                }
                let (x1, y1) = frame.pixel(&a);
                let (x2, y2) = frame.pixel(&b);
                Some(PlottedSegment { x1, y1, x2, y2 })
            })
            .collect();

        let mut objects = Vec::new();
        for obj in &catalog.objects {
            objects.extend(frame.label(&obj.name, &obj.vector)?);
        }
        let mut named_stars = Vec::new();
        for star in &catalog.named_stars {
            named_stars.extend(frame.label(&star.name, &star.vector)?);
        }

        debug!(
            lst = frame.lst,
            stars = stars.len(),
            segments = segments.len(),
            objects = objects.len(),
            named_stars = named_stars.len(),
            "computed scene"
        );
        Ok(Self {
            lst: frame.lst,
            stars,
            segments,
            objects,
            named_stars,
        })
    }
}
