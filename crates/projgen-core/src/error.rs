//! Centralized error types for projgen.

use thiserror::Error;

/// Main error type for projgen core operations.
#[derive(Error, Debug)]
pub enum ProjgenError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown skill level: {0} (expected beginner, intermediate or advanced)")]
    UnknownSkillLevel(String),

    #[error("Unknown project type: {0}")]
    UnknownProjectType(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for projgen core operations.
pub type ProjgenResult<T> = Result<T, ProjgenError>;

impl ProjgenError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
