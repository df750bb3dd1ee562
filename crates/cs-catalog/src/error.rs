//! Error types for catalog lookups.

use thiserror::Error;

/// Errors raised when a key does not resolve in a reference table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Unknown breaker type: {key}")]
    UnknownBreakerType { key: String },

    #[error("Unknown wire gauge: {key}")]
    UnknownWireGauge { key: String },

    #[error("Unknown appliance: {name}")]
    UnknownAppliance { name: String },

    #[error("Appliance '{appliance}' has no power level '{level}'")]
    UnknownPowerLevel { appliance: String, level: String },

    #[error("Appliance '{appliance}' has no operating mode '{mode}'")]
    UnknownOperatingMode { appliance: String, mode: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
