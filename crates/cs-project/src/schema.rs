//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

fn default_horizon() -> u32 {
    60
}

fn default_wire_gauge() -> String {
    "2.5".to_string()
}

fn default_duty() -> f64 {
    100.0
}

fn default_startup() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub circuit: CircuitDef,
    #[serde(default = "default_horizon")]
    pub horizon_minutes: u32,
    #[serde(default)]
    pub consumers: Vec<ConsumerDef>,
    #[serde(default)]
    pub options: OptionsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircuitDef {
    pub rated_amps: u32,
    /// `"Type C"` or just `"C"`.
    pub breaker_type: String,
    /// Unknown gauges fall back to 2.5 mm² at run time.
    #[serde(default = "default_wire_gauge")]
    pub wire_gauge: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ConsumerDef {
    /// A load taken from the appliance catalog.
    Appliance {
        appliance: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        power_level: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        operating_mode: Option<String>,
    },
    /// A fully specified load.
    Custom {
        name: String,
        rated_amps: f64,
        #[serde(default = "default_duty")]
        duty_percent: f64,
        #[serde(default = "default_startup")]
        startup_multiplier: f64,
        cycle_minutes: f64,
        #[serde(default)]
        power_level: String,
        #[serde(default)]
        operating_mode: String,
    },
}

impl ConsumerDef {
    pub fn display_name(&self) -> &str {
        match self {
            ConsumerDef::Appliance { appliance, .. } => appliance,
            ConsumerDef::Custom { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OptionsDef {
    /// Attach absolute wire/breaker temperatures to every point.
    #[serde(default)]
    pub temperature_model: bool,
    #[serde(default)]
    pub parallel: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_per_variant() {
        let appliance = ConsumerDef::Appliance {
            appliance: "Electric Kettle".to_string(),
            power_level: None,
            operating_mode: None,
        };
        assert_eq!(appliance.display_name(), "Electric Kettle");

        let custom = ConsumerDef::Custom {
            name: "Workshop saw".to_string(),
            rated_amps: 8.0,
            duty_percent: 50.0,
            startup_multiplier: 4.0,
            cycle_minutes: 10.0,
            power_level: String::new(),
            operating_mode: String::new(),
        };
        assert_eq!(custom.display_name(), "Workshop saw");
    }
}
