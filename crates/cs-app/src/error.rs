//! Error types for the cs-app service layer.

use std::path::PathBuf;

/// Unified error for the service layer, wrapping every backend crate.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Project(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write scenario file: {path}")]
    ScenarioFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cs-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<cs_project::ProjectError> for AppError {
    fn from(err: cs_project::ProjectError) -> Self {
        match err {
            cs_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<cs_project::ValidationError> for AppError {
    fn from(err: cs_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<cs_catalog::CatalogError> for AppError {
    fn from(err: cs_catalog::CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<cs_core::CoreError> for AppError {
    fn from(err: cs_core::CoreError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<cs_sim::SimError> for AppError {
    fn from(err: cs_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
