//! Scenario validation logic.

use cs_catalog::{BreakerType, Catalog, STANDARD_RATINGS, is_standard_rating};

use crate::schema::{ConsumerDef, Scenario};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario, catalog: &Catalog) -> Result<(), ValidationError> {
    if scenario.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    let circuit = &scenario.circuit;
    if !is_standard_rating(circuit.rated_amps) {
        return Err(ValidationError::InvalidValue {
            field: "circuit rated_amps".to_string(),
            value: circuit.rated_amps.to_string(),
            reason: format!("must be one of {STANDARD_RATINGS:?}"),
        });
    }
    if circuit.breaker_type.parse::<BreakerType>().is_err() {
        return Err(ValidationError::MissingReference {
            id: circuit.breaker_type.clone(),
            context: "breaker catalog".to_string(),
        });
    }

    if scenario.horizon_minutes == 0 {
        return Err(ValidationError::InvalidValue {
            field: "horizon_minutes".to_string(),
            value: "0".to_string(),
            reason: "must be at least one minute".to_string(),
        });
    }

    for (idx, consumer) in scenario.consumers.iter().enumerate() {
        validate_consumer(idx, consumer, catalog)?;
    }

    Ok(())
}

fn validate_consumer(
    idx: usize,
    consumer: &ConsumerDef,
    catalog: &Catalog,
) -> Result<(), ValidationError> {
    match consumer {
        ConsumerDef::Appliance {
            appliance,
            power_level,
            operating_mode,
        } => {
            let spec = catalog
                .appliance(appliance)
                .map_err(|_| ValidationError::MissingReference {
                    id: appliance.clone(),
                    context: format!("consumer #{idx} appliance"),
                })?;
            if let Some(level) = power_level
                && !spec.has_power_level(level)
            {
                return Err(ValidationError::MissingReference {
                    id: level.clone(),
                    context: format!("'{}' power levels", spec.name),
                });
            }
            if let Some(mode) = operating_mode
                && spec.operating_mode(mode).is_err()
            {
                return Err(ValidationError::MissingReference {
                    id: mode.clone(),
                    context: format!("'{}' operating modes", spec.name),
                });
            }
            Ok(())
        }
        ConsumerDef::Custom {
            name,
            rated_amps,
            duty_percent,
            startup_multiplier,
            cycle_minutes,
            ..
        } => {
            if !rated_amps.is_finite() || *rated_amps <= 0.0 {
                return Err(invalid(name, "rated_amps", *rated_amps, "must be positive and finite"));
            }
            if !duty_percent.is_finite() || !(0.0..=100.0).contains(duty_percent) {
                return Err(invalid(name, "duty_percent", *duty_percent, "must be within 0..=100"));
            }
            if !startup_multiplier.is_finite() || *startup_multiplier < 1.0 {
                return Err(invalid(
                    name,
                    "startup_multiplier",
                    *startup_multiplier,
                    "must be at least 1",
                ));
            }
            if !cycle_minutes.is_finite() || *cycle_minutes <= 0.0 {
                return Err(invalid(
                    name,
                    "cycle_minutes",
                    *cycle_minutes,
                    "must be positive and finite",
                ));
            }
            Ok(())
        }
    }
}

fn invalid(consumer: &str, field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: format!("consumer '{consumer}' {field}"),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
