use std::path::PathBuf;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A constellation line names a star the catalog does not contain.
    #[error("Unknown star {star_id} referenced on constellation line {line}")]
    UnknownReference { star_id: u32, line: usize },

    #[error("Cannot read {}: {source}", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Coord(#[from] planetarium_coords::CoordError),
}

impl CatalogError {
    pub fn unknown_reference(star_id: u32, line: usize) -> Self {
        Self::UnknownReference { star_id, line }
    }

    pub fn input_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputAccess {
            path: path.into(),
            source,
        }
    }
}
