//! Errors raised while loading data that feeds the simulation.
//!
//! The simulation itself never fails: bad subtypes clamp, missing services
//! skip their side effect. Only the loaders for configuration, level layouts
//! and animation scripts can return an error, and the caller decides whether
//! to fall back to defaults.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        LoadError::Json {
            path: path.into(),
            source,
        }
    }
}
