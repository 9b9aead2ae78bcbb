//! Error types for the watch tracker.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Break recommendations unlock at {threshold} hours, {hours:.1} watched so far")]
    BreakNotDue { hours: f64, threshold: f64 },

    #[error("{0} is not set")]
    MissingApiKey(&'static str),

    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type WatchResult<T> = Result<T, WatchError>;

impl WatchError {
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
