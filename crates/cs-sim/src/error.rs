//! Error types for simulation setup.

use thiserror::Error;

/// Configuration problems detected before any instant is simulated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: String },

    #[error("Out of range: {what}")]
    OutOfRange { what: &'static str },
}

pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        SimError::InvalidConfiguration { what: what.into() }
    }
}

impl From<cs_core::CoreError> for SimError {
    fn from(e: cs_core::CoreError) -> Self {
        SimError::InvalidConfiguration {
            what: e.to_string(),
        }
    }
}

impl From<cs_catalog::CatalogError> for SimError {
    fn from(e: cs_catalog::CatalogError) -> Self {
        SimError::InvalidConfiguration {
            what: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SimError::invalid("cycle period must be positive");
        assert!(err.to_string().contains("cycle period"));
    }

    #[test]
    fn catalog_errors_become_invalid_configuration() {
        let err: SimError = cs_catalog::CatalogError::UnknownBreakerType { key: "Z".into() }.into();
        assert!(matches!(err, SimError::InvalidConfiguration { .. }));
    }
}
