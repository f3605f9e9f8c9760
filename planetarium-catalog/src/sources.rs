//! Reading source files from disk.

use crate::compiler::CatalogSources;
use crate::{CatalogError, CatalogResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn read_source(path: impl AsRef<Path>) -> CatalogResult<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| CatalogError::input_access(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "read source");
    Ok(text)
}

/// Paths of the four inputs to a compilation run.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub catalog: PathBuf,
    pub constellations: PathBuf,
    pub objects: PathBuf,
    pub named_stars: PathBuf,
}

/// Owned text of the four inputs.
#[derive(Debug, Clone, Default)]
pub struct SourceTexts {
    pub catalog: String,
    pub constellations: String,
    pub objects: String,
    pub named_stars: String,
}

impl SourceTexts {
    pub fn read(paths: &SourcePaths) -> CatalogResult<Self> {
        Ok(Self {
            catalog: read_source(&paths.catalog)?,
            constellations: read_source(&paths.constellations)?,
            objects: read_source(&paths.objects)?,
            named_stars: read_source(&paths.named_stars)?,
        })
    }

    pub fn as_sources(&self) -> CatalogSources<'_> {
        CatalogSources {
            catalog: &self.catalog,
            constellations: &self.constellations,
            objects: &self.objects,
            named_stars: &self.named_stars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ori 2 1948 1903").unwrap();
        let text = read_source(file.path()).unwrap();
        assert_eq!(text, "Ori 2 1948 1903\n");
    }

    #[test]
    fn test_missing_file_is_input_access() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("catalog");
        match read_source(&missing) {
            Err(CatalogError::InputAccess { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected InputAccess, got {:?}", other),
        }
    }

    #[test]
    fn test_read_all_stops_at_first_missing() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog");
        std::fs::write(&catalog, "").unwrap();
        let paths = SourcePaths {
            catalog,
            constellations: dir.path().join("constellations"),
            objects: dir.path().join("objects.csv"),
            named_stars: dir.path().join("names.csv"),
        };
        let err = SourceTexts::read(&paths).unwrap_err();
        assert!(err.to_string().contains("constellations"));
    }
}
