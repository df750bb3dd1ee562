//! Schema migration framework.

use crate::ProjectError;
use crate::schema::Scenario;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    while scenario.version < LATEST_VERSION {
        scenario = migrate_one_version(scenario)?;
    }
    Ok(scenario)
}

fn migrate_one_version(scenario: Scenario) -> Result<Scenario, ProjectError> {
    match scenario.version {
        0 => migrate_v0_to_v1(scenario),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files spelled wire gauges as integers ("4", "10").
fn migrate_v0_to_v1(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    let gauge = scenario.circuit.wire_gauge.trim();
    if !gauge.is_empty() && !gauge.contains('.') && gauge.chars().all(|c| c.is_ascii_digit()) {
        scenario.circuit.wire_gauge = format!("{gauge}.0");
    }
    scenario.version = 1;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CircuitDef, OptionsDef};

    fn v0(gauge: &str) -> Scenario {
        Scenario {
            version: 0,
            name: "Old".into(),
            circuit: CircuitDef {
                rated_amps: 16,
                breaker_type: "C".into(),
                wire_gauge: gauge.into(),
            },
            horizon_minutes: 60,
            consumers: vec![],
            options: OptionsDef::default(),
        }
    }

    #[test]
    fn integer_gauges_gain_a_decimal() {
        let s = migrate_to_latest(v0("4")).unwrap();
        assert_eq!(s.version, LATEST_VERSION);
        assert_eq!(s.circuit.wire_gauge, "4.0");
    }

    #[test]
    fn decimal_gauges_are_untouched() {
        let s = migrate_to_latest(v0("2.5")).unwrap();
        assert_eq!(s.circuit.wire_gauge, "2.5");
    }
}
