//! Degree-based thermal data for PVC-insulated copper wire and breakers.
//!
//! Only the alternate temperature model reads these; the primary engine works
//! on thermally-lagged current.

use crate::wire::WireGauge;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientConstants {
    pub temperature_c: f64,
    pub max_allowed_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireThermalConstants {
    /// °C/W, indexed like [`WireGauge::ALL`].
    pub thermal_resistance: [f64; 6],
    /// J/°C, indexed like [`WireGauge::ALL`].
    pub thermal_capacity: [f64; 6],
    /// PVC insulation limit.
    pub max_temperature_c: f64,
    pub rated_temperature_c: f64,
}

impl WireThermalConstants {
    fn index(gauge: WireGauge) -> usize {
        WireGauge::ALL
            .iter()
            .position(|g| *g == gauge)
            .unwrap_or(1)
    }

    pub fn resistance(&self, gauge: WireGauge) -> f64 {
        self.thermal_resistance[Self::index(gauge)]
    }

    pub fn capacity(&self, gauge: WireGauge) -> f64 {
        self.thermal_capacity[Self::index(gauge)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakerThermalConstants {
    /// °C/W
    pub thermal_resistance: f64,
    /// J/°C
    pub thermal_capacity: f64,
    pub trip_temperature_c: f64,
    pub warning_temperature_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalConstants {
    pub ambient: AmbientConstants,
    pub wire: WireThermalConstants,
    pub breaker: BreakerThermalConstants,
}

pub const THERMAL_CONSTANTS: ThermalConstants = ThermalConstants {
    ambient: AmbientConstants {
        temperature_c: 25.0,
        max_allowed_c: 40.0,
    },
    wire: WireThermalConstants {
        thermal_resistance: [3.8, 3.2, 2.8, 2.4, 2.0, 1.8],
        thermal_capacity: [385.0, 640.0, 1024.0, 1536.0, 2560.0, 4096.0],
        max_temperature_c: 70.0,
        rated_temperature_c: 50.0,
    },
    breaker: BreakerThermalConstants {
        thermal_resistance: 2.5,
        thermal_capacity: 850.0,
        trip_temperature_c: 60.0,
        warning_temperature_c: 45.0,
    },
};

impl Default for ThermalConstants {
    fn default() -> Self {
        THERMAL_CONSTANTS
    }
}
