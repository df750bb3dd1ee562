//! Turn scenario consumer definitions into engine consumers.

use cs_catalog::{Catalog, CatalogError, power_level_current};
use cs_core::units::{DutyCycle, amps, minutes};
use cs_project::ConsumerDef;
use cs_sim::Consumer;

use crate::error::AppResult;

/// Build one engine consumer per definition, in definition order.
pub fn build_consumers(defs: &[ConsumerDef], catalog: &Catalog) -> AppResult<Vec<Consumer>> {
    defs.iter().map(|def| build_consumer(def, catalog)).collect()
}

pub fn build_consumer(def: &ConsumerDef, catalog: &Catalog) -> AppResult<Consumer> {
    match def {
        ConsumerDef::Appliance {
            appliance,
            power_level,
            operating_mode,
        } => {
            let spec = catalog.appliance(appliance)?;

            // The mode must exist, but it only labels the consumer.
            let mode_label = match operating_mode {
                Some(mode) => spec.operating_mode(mode)?.name.to_string(),
                None => String::new(),
            };

            let (rated, level_label) = match power_level {
                Some(level) => {
                    if !spec.has_power_level(level) {
                        return Err(CatalogError::UnknownPowerLevel {
                            appliance: spec.name.to_string(),
                            level: level.clone(),
                        }
                        .into());
                    }
                    let rated = match power_level_current(level) {
                        Some(a) => amps(a),
                        None => {
                            tracing::warn!(
                                appliance = spec.name,
                                level = %level,
                                "power level has no current figure; using typical current"
                            );
                            spec.typical_current()
                        }
                    };
                    (rated, level.clone())
                }
                None => {
                    tracing::warn!(
                        appliance = spec.name,
                        "no power level selected; using typical current"
                    );
                    (
                        spec.typical_current(),
                        format!("Typical ({}A)", spec.typical_current_a),
                    )
                }
            };

            let consumer = Consumer::new(
                spec.name,
                rated,
                DutyCycle::from_percent(spec.duty_typical_percent)?,
                spec.startup_multiplier,
                spec.cycle_period(),
            )
            .with_labels(level_label, mode_label);
            consumer.validate()?;
            Ok(consumer)
        }
        ConsumerDef::Custom {
            name,
            rated_amps,
            duty_percent,
            startup_multiplier,
            cycle_minutes,
            power_level,
            operating_mode,
        } => {
            let consumer = Consumer::new(
                name.clone(),
                amps(*rated_amps),
                DutyCycle::from_percent(*duty_percent)?,
                *startup_multiplier,
                minutes(*cycle_minutes),
            )
            .with_labels(power_level.clone(), operating_mode.clone());
            consumer.validate()?;
            Ok(consumer)
        }
    }
}
