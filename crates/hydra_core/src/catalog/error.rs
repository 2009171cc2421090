use crate::model::item::ItemId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Load-time error for fetching, decoding and normalizing a catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Source-specific transport failure.
    Transport(String),
    /// Payload is not valid catalog JSON.
    Parse(serde_json::Error),
    /// One sample record violates load-time normalization rules.
    InvalidItem { index: usize, message: String },
    /// Two samples share one id.
    DuplicateId(ItemId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Transport(message) => write!(f, "catalog transport failed: {message}"),
            Self::Parse(err) => write!(f, "invalid catalog payload: {err}"),
            Self::InvalidItem { index, message } => {
                write!(f, "invalid sample at index {index}: {message}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate sample id `{id}`"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Transport(_) | Self::InvalidItem { .. } | Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
