//! Gallery configuration.
//!
//! # Responsibility
//! - Provide defaults for page size, initial sort field and log level.
//! - Load overrides from a JSON file and from `HYDRA_*` environment variables.
//!
//! # Invariants
//! - A validated config always has a non-zero page size within bounds.
//! - Precedence is defaults < file < environment < explicit caller overrides.

use crate::logging::{default_log_level, normalize_level};
use crate::model::item::MODIFIED_AT_FIELD;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Items revealed per "load more" step unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Upper bound for a configured page size.
pub const PAGE_SIZE_MAX: usize = 500;
/// Initial sort field: most recently modified first.
pub const DEFAULT_SORT_FIELD: &str = MODIFIED_AT_FIELD;

pub const ENV_PAGE_SIZE: &str = "HYDRA_PAGE_SIZE";
pub const ENV_SORT_FIELD: &str = "HYDRA_SORT_FIELD";
pub const ENV_LOG_LEVEL: &str = "HYDRA_LOG_LEVEL";

/// Configuration error for file, environment and validation failures.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Environment variable holds an unusable value.
    InvalidEnv { name: &'static str, value: String },
    InvalidPageSize(usize),
    EmptySortField,
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::InvalidEnv { name, value } => write!(f, "invalid value `{value}` for {name}"),
            Self::InvalidPageSize(size) => {
                write!(f, "page size must be within 1..={PAGE_SIZE_MAX}, got {size}")
            }
            Self::EmptySortField => write!(f, "sort field cannot be empty"),
            Self::InvalidLogLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Items revealed per page step.
    pub page_size: usize,
    /// Sort field used before the user picks one.
    pub default_sort_field: String,
    /// `trace|debug|info|warn|error`.
    pub log_level: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort_field: DEFAULT_SORT_FIELD.to_string(),
            log_level: default_log_level().to_string(),
        }
    }
}

impl GalleryConfig {
    /// Reads a JSON config file; absent keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `HYDRA_*` overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from `lookup`, keyed by `HYDRA_*` variable name.
    ///
    /// Blank values are ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(raw) = read(ENV_PAGE_SIZE) {
            self.page_size = raw.parse().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_PAGE_SIZE,
                value: raw.clone(),
            })?;
        }
        if let Some(field) = read(ENV_SORT_FIELD) {
            self.default_sort_field = field;
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        Ok(self)
    }

    /// Checks bounds and normalizes the log level.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.page_size()?;
        if self.default_sort_field.trim().is_empty() {
            return Err(ConfigError::EmptySortField);
        }
        self.default_sort_field = self.default_sort_field.trim().to_string();
        let level = normalize_level(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.trim().to_string()))?;
        self.log_level = level.to_string();
        Ok(self)
    }

    /// Page size as the engine expects it.
    pub fn page_size(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.page_size)
            .filter(|size| size.get() <= PAGE_SIZE_MAX)
            .ok_or(ConfigError::InvalidPageSize(self.page_size))
    }
}
