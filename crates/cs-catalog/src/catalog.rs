//! Immutable bundle of every reference table.

use crate::appliance::{ApplianceSpec, appliance_catalog};
use crate::breaker::{BreakerSpec, BreakerType};
use crate::error::{CatalogError, CatalogResult};
use crate::thermal_constants::{THERMAL_CONSTANTS, ThermalConstants};
use crate::wire::{WireGauge, WireSpec};

/// Reference data loaded once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Indexed by `WireGauge as usize`.
    wires: [WireSpec; WireGauge::ALL.len()],
    /// Indexed by `BreakerType as usize`.
    breakers: [BreakerSpec; BreakerType::ALL.len()],
    appliances: &'static [ApplianceSpec],
    thermal: ThermalConstants,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            wires: WireGauge::ALL.map(WireGauge::spec),
            breakers: BreakerType::ALL.map(BreakerType::spec),
            appliances: appliance_catalog(),
            thermal: THERMAL_CONSTANTS,
        }
    }

    pub fn wires(&self) -> &[WireSpec] {
        &self.wires
    }

    pub fn breakers(&self) -> &[BreakerSpec] {
        &self.breakers
    }

    pub fn appliances(&self) -> &[ApplianceSpec] {
        self.appliances
    }

    pub fn thermal_constants(&self) -> &ThermalConstants {
        &self.thermal
    }

    pub fn wire_spec(&self, gauge: WireGauge) -> &WireSpec {
        &self.wires[gauge as usize]
    }

    /// Lenient wire lookup: unknown keys resolve to the default gauge.
    pub fn wire(&self, key: &str) -> &WireSpec {
        self.wire_spec(WireGauge::resolve(key))
    }

    pub fn breaker(&self, breaker_type: BreakerType) -> &BreakerSpec {
        &self.breakers[breaker_type as usize]
    }

    /// Strict breaker lookup by label (`"Type C"`, `"C"`).
    pub fn breaker_by_key(&self, key: &str) -> CatalogResult<&BreakerSpec> {
        let breaker_type: BreakerType = key.parse()?;
        Ok(self.breaker(breaker_type))
    }

    pub fn appliance(&self, name: &str) -> CatalogResult<&ApplianceSpec> {
        self.appliances
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CatalogError::UnknownAppliance {
                name: name.to_string(),
            })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
