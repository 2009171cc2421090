use crate::catalog::error::{CatalogError, CatalogResult};
use std::path::{Path, PathBuf};

/// Transport seam for the catalog payload.
///
/// Implementations return the raw JSON body; decoding and normalization stay
/// in core.
pub trait CatalogSource {
    /// Short label used in log events (`file`, `static`, ...).
    fn kind(&self) -> &'static str;
    /// Fetches the raw payload once.
    fn fetch(&self) -> CatalogResult<String>;
}

/// Reads the payload from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for FileCatalogSource {
    fn kind(&self) -> &'static str {
        "file"
    }

    fn fetch(&self) -> CatalogResult<String> {
        std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Serves a payload held in memory. Used by embedders and tests.
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    body: String,
}

impl StaticCatalogSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn kind(&self) -> &'static str {
        "static"
    }

    fn fetch(&self) -> CatalogResult<String> {
        Ok(self.body.clone())
    }
}
