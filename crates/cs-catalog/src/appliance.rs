//! Household appliance load profiles used to create consumers.

use cs_core::units::{Current, Time, amps, millis, minutes};

use crate::error::{CatalogError, CatalogResult};

/// Named usage mode of an appliance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingMode {
    pub name: &'static str,
    pub current_multiplier: f64,
    pub duty_multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplianceSpec {
    pub name: &'static str,
    pub min_current_a: f64,
    pub max_current_a: f64,
    /// Typical continuous usage current.
    pub typical_current_a: f64,
    /// Peak inrush current as a multiple of rated current.
    pub inrush_multiple: f64,
    pub inrush_duration_ms: f64,
    /// Base duty cycle percentage.
    pub duty_cycle_percent: f64,
    pub duty_typical_percent: f64,
    pub duty_peak_percent: f64,
    pub startup_multiplier: f64,
    pub cycle_minutes: f64,
    pub power_levels: &'static [&'static str],
    pub operating_modes: &'static [OperatingMode],
    pub description: &'static str,
}

impl ApplianceSpec {
    pub fn typical_current(&self) -> Current {
        amps(self.typical_current_a)
    }

    pub fn inrush_duration(&self) -> Time {
        millis(self.inrush_duration_ms)
    }

    pub fn cycle_period(&self) -> Time {
        minutes(self.cycle_minutes)
    }

    pub fn has_power_level(&self, level: &str) -> bool {
        self.power_levels.iter().any(|l| *l == level)
    }

    pub fn operating_mode(&self, name: &str) -> CatalogResult<&OperatingMode> {
        self.operating_modes
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| CatalogError::UnknownOperatingMode {
                appliance: self.name.to_string(),
                mode: name.to_string(),
            })
    }

    /// Current drawn at a power level.
    ///
    /// Falls back to the typical current when the label carries no `(xA)` figure.
    pub fn current_for_level(&self, level: &str) -> CatalogResult<Current> {
        if !self.has_power_level(level) {
            return Err(CatalogError::UnknownPowerLevel {
                appliance: self.name.to_string(),
                level: level.to_string(),
            });
        }
        Ok(power_level_current(level)
            .map(amps)
            .unwrap_or_else(|| self.typical_current()))
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_ascii_lowercase().contains(&query)
            || self.description.to_ascii_lowercase().contains(&query)
    }
}

/// Extracts the amp figure from a label such as `"Normal (1.5A)"`.
pub fn power_level_current(label: &str) -> Option<f64> {
    let open = label.rfind('(')?;
    let inner = label[open + 1..].strip_suffix(')')?;
    let number = inner.trim().strip_suffix('A')?;
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    number.parse().ok()
}

const APPLIANCES: [ApplianceSpec; 8] = [
    // High-power cooking
    ApplianceSpec {
        name: "Induction Hob",
        min_current_a: 5.0,
        max_current_a: 32.0,
        typical_current_a: 16.0,
        inrush_multiple: 1.2,
        inrush_duration_ms: 100.0,
        duty_cycle_percent: 70.0,
        duty_typical_percent: 50.0,
        duty_peak_percent: 90.0,
        startup_multiplier: 1.2,
        cycle_minutes: 30.0,
        power_levels: &["Low (5A)", "Medium (16A)", "High (32A)"],
        operating_modes: &[
            OperatingMode {
                name: "Keep Warm",
                current_multiplier: 0.2,
                duty_multiplier: 0.3,
            },
            OperatingMode {
                name: "Simmer",
                current_multiplier: 0.4,
                duty_multiplier: 0.6,
            },
            OperatingMode {
                name: "Normal Cooking",
                current_multiplier: 0.7,
                duty_multiplier: 1.0,
            },
            OperatingMode {
                name: "High Power",
                current_multiplier: 1.0,
                duty_multiplier: 1.0,
            },
        ],
        description: "Modern electric cooktop using magnetic induction",
    },
    ApplianceSpec {
        name: "Electric Oven",
        min_current_a: 8.0,
        max_current_a: 16.0,
        typical_current_a: 12.0,
        inrush_multiple: 1.5,
        inrush_duration_ms: 200.0,
        duty_cycle_percent: 70.0,
        duty_typical_percent: 60.0,
        duty_peak_percent: 100.0,
        startup_multiplier: 1.5,
        cycle_minutes: 60.0,
        power_levels: &["Low (8A)", "Medium (12A)", "High (16A)"],
        operating_modes: &[
            OperatingMode {
                name: "Light Baking",
                current_multiplier: 0.5,
                duty_multiplier: 0.5,
            },
            OperatingMode {
                name: "Normal Baking",
                current_multiplier: 0.75,
                duty_multiplier: 0.7,
            },
            OperatingMode {
                name: "High Temperature",
                current_multiplier: 1.0,
                duty_multiplier: 1.0,
            },
        ],
        description: "Standard electric oven",
    },
    // Motor-driven, high inrush
    ApplianceSpec {
        name: "Washing Machine",
        min_current_a: 6.0,
        max_current_a: 10.0,
        typical_current_a: 8.0,
        inrush_multiple: 6.0,
        inrush_duration_ms: 300.0,
        duty_cycle_percent: 60.0,
        duty_typical_percent: 40.0,
        duty_peak_percent: 80.0,
        startup_multiplier: 3.0,
        cycle_minutes: 120.0,
        power_levels: &["Eco (6A)", "Normal (8A)", "Intensive (10A)"],
        operating_modes: &[
            OperatingMode {
                name: "Eco Wash",
                current_multiplier: 0.6,
                duty_multiplier: 0.5,
            },
            OperatingMode {
                name: "Quick Wash",
                current_multiplier: 0.8,
                duty_multiplier: 0.8,
            },
            OperatingMode {
                name: "Heavy Duty",
                current_multiplier: 1.0,
                duty_multiplier: 1.0,
            },
        ],
        description: "Standard washing machine",
    },
    ApplianceSpec {
        name: "Air Conditioner",
        min_current_a: 6.0,
        max_current_a: 12.0,
        typical_current_a: 9.0,
        inrush_multiple: 8.0,
        inrush_duration_ms: 500.0,
        duty_cycle_percent: 80.0,
        duty_typical_percent: 60.0,
        duty_peak_percent: 100.0,
        startup_multiplier: 4.0,
        cycle_minutes: 30.0,
        power_levels: &["Low Cool (6A)", "Medium Cool (9A)", "High Cool (12A)"],
        operating_modes: &[
            OperatingMode {
                name: "Energy Saver",
                current_multiplier: 0.5,
                duty_multiplier: 0.4,
            },
            OperatingMode {
                name: "Normal Cooling",
                current_multiplier: 0.75,
                duty_multiplier: 0.6,
            },
            OperatingMode {
                name: "Maximum Cooling",
                current_multiplier: 1.0,
                duty_multiplier: 1.0,
            },
        ],
        description: "Split system air conditioner",
    },
    ApplianceSpec {
        name: "Heat Pump Dryer",
        min_current_a: 2.0,
        max_current_a: 8.0,
        typical_current_a: 4.0,
        inrush_multiple: 4.0,
        inrush_duration_ms: 200.0,
        duty_cycle_percent: 90.0,
        duty_typical_percent: 85.0,
        duty_peak_percent: 100.0,
        startup_multiplier: 2.0,
        cycle_minutes: 180.0,
        power_levels: &["Eco (2A)", "Normal (4A)", "Express (6A)", "Heavy Duty (8A)"],
        operating_modes: &[
            OperatingMode {
                name: "Eco Mode",
                current_multiplier: 0.5,
                duty_multiplier: 1.2,
            },
            OperatingMode {
                name: "Normal",
                current_multiplier: 1.0,
                duty_multiplier: 1.0,
            },
            OperatingMode {
                name: "Express",
                current_multiplier: 1.5,
                duty_multiplier: 0.7,
            },
            OperatingMode {
                name: "Heavy Duty",
                current_multiplier: 2.0,
                duty_multiplier: 1.1,
            },
            OperatingMode {
                name: "Air Refresh",
                current_multiplier: 0.3,
                duty_multiplier: 0.5,
            },
            OperatingMode {
                name: "Low Heat Delicate",
                current_multiplier: 0.6,
                duty_multiplier: 0.9,
            },
        ],
        description: "Energy-efficient heat pump clothes dryer with inverter-driven compressor",
    },
    // Resistive heating
    ApplianceSpec {
        name: "Electric Kettle",
        min_current_a: 8.0,
        max_current_a: 13.0,
        typical_current_a: 10.0,
        inrush_multiple: 1.1,
        inrush_duration_ms: 50.0,
        duty_cycle_percent: 100.0,
        duty_typical_percent: 100.0,
        duty_peak_percent: 100.0,
        startup_multiplier: 1.1,
        cycle_minutes: 3.0,
        power_levels: &["Low (8A)", "Medium (10A)", "High (13A)"],
        operating_modes: &[
            OperatingMode {
                name: "Keep Warm",
                current_multiplier: 0.3,
                duty_multiplier: 0.2,
            },
            OperatingMode {
                name: "Normal Boil",
                current_multiplier: 1.0,
                duty_multiplier: 1.0,
            },
        ],
        description: "Electric water kettle",
    },
    // Electronics
    ApplianceSpec {
        name: "Gaming PC",
        min_current_a: 2.0,
        max_current_a: 6.0,
        typical_current_a: 3.5,
        inrush_multiple: 2.0,
        inrush_duration_ms: 100.0,
        duty_cycle_percent: 80.0,
        duty_typical_percent: 60.0,
        duty_peak_percent: 100.0,
        startup_multiplier: 1.5,
        cycle_minutes: 240.0,
        power_levels: &["Idle (2A)", "Gaming (4A)", "Full Load (6A)"],
        operating_modes: &[
            OperatingMode {
                name: "Sleep",
                current_multiplier: 0.1,
                duty_multiplier: 0.1,
            },
            OperatingMode {
                name: "Office Work",
                current_multiplier: 0.4,
                duty_multiplier: 0.6,
            },
            OperatingMode {
                name: "Gaming",
                current_multiplier: 0.8,
                duty_multiplier: 1.0,
            },
            OperatingMode {
                name: "Heavy Rendering",
                current_multiplier: 1.0,
                duty_multiplier: 1.0,
            },
        ],
        description: "High-performance gaming computer",
    },
    ApplianceSpec {
        name: "Refrigerator",
        min_current_a: 1.0,
        max_current_a: 3.0,
        typical_current_a: 1.5,
        inrush_multiple: 5.0,
        inrush_duration_ms: 400.0,
        duty_cycle_percent: 30.0,
        duty_typical_percent: 25.0,
        duty_peak_percent: 40.0,
        startup_multiplier: 3.0,
        cycle_minutes: 20.0,
        power_levels: &["Eco (1A)", "Normal (1.5A)", "Max Cool (3A)"],
        operating_modes: &[
            OperatingMode {
                name: "Night Mode",
                current_multiplier: 0.6,
                duty_multiplier: 0.4,
            },
            OperatingMode {
                name: "Normal",
                current_multiplier: 1.0,
                duty_multiplier: 1.0,
            },
            OperatingMode {
                name: "Quick Cool",
                current_multiplier: 1.0,
                duty_multiplier: 1.5,
            },
        ],
        description: "Modern refrigerator with inverter compressor",
    },
];

pub fn appliance_catalog() -> &'static [ApplianceSpec] {
    &APPLIANCES
}

pub fn filter_appliances(query: &str) -> Vec<&'static ApplianceSpec> {
    appliance_catalog()
        .iter()
        .filter(|spec| spec.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for spec in appliance_catalog() {
            assert!(seen.insert(spec.name), "duplicate appliance: {}", spec.name);
        }
    }

    #[test]
    fn power_level_labels_parse() {
        assert_eq!(power_level_current("Normal (8A)"), Some(8.0));
        assert_eq!(power_level_current("Normal (1.5A)"), Some(1.5));
        assert_eq!(power_level_current("High Cool (12A)"), Some(12.0));
        assert_eq!(power_level_current("Turbo"), None);
        assert_eq!(power_level_current("Turbo (fast)"), None);
        assert_eq!(power_level_current("Odd (A)"), None);
    }

    #[test]
    fn every_power_level_carries_a_current() {
        for spec in appliance_catalog() {
            for level in spec.power_levels {
                let current = power_level_current(level);
                assert!(current.is_some(), "{}: {}", spec.name, level);
            }
        }
    }

    #[test]
    fn current_for_level_rejects_foreign_labels() {
        let fridge = appliance_catalog()
            .iter()
            .find(|s| s.name == "Refrigerator")
            .expect("refrigerator should be in catalog");
        assert_eq!(
            cs_core::units::as_amps(fridge.current_for_level("Max Cool (3A)").unwrap()),
            3.0
        );
        assert!(matches!(
            fridge.current_for_level("High (32A)"),
            Err(CatalogError::UnknownPowerLevel { .. })
        ));
        assert!(fridge.operating_mode("Quick Cool").is_ok());
        assert!(fridge.operating_mode("Defrost").is_err());
    }

    #[test]
    fn search_matches_name_and_description() {
        let hits = filter_appliances("compressor");
        assert!(hits.iter().any(|s| s.name == "Refrigerator"));
        assert!(hits.iter().any(|s| s.name == "Heat Pump Dryer"));
        assert_eq!(filter_appliances("").len(), appliance_catalog().len());
        assert!(filter_appliances("toaster").is_empty());
    }
}
