//! cs-catalog: reference data the engine reads but does not own.
//!
//! Provides:
//! - wire gauges with continuous/short-term limits and thermal time constants
//! - breaker trip curves (Type B, C, D)
//! - standard breaker ratings
//! - household appliance load profiles
//! - degree-based thermal constants for the alternate temperature model
//!
//! All tables are immutable. Build a [`Catalog`] once and pass it by reference.

pub mod appliance;
pub mod breaker;
pub mod catalog;
pub mod error;
pub mod ratings;
pub mod thermal_constants;
pub mod wire;

// Re-exports
pub use appliance::{
    ApplianceSpec, OperatingMode, appliance_catalog, filter_appliances, power_level_current,
};
pub use breaker::{BreakerCharacteristics, BreakerSpec, BreakerType, Selectivity};
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use ratings::{STANDARD_RATINGS, is_standard_rating};
pub use thermal_constants::{
    AmbientConstants, BreakerThermalConstants, THERMAL_CONSTANTS, ThermalConstants,
    WireThermalConstants,
};
pub use wire::{WireGauge, WireSpec};
