//! Thermal/trip simulation engine for loads sharing one protected circuit.
//!
//! Provides:
//! - duty-cycle load model with inrush at cycle start
//! - non-recursive exponential thermal lag (plus an opt-in temperature model)
//! - breaker trip decision: magnetic, inrush window, thermal I²t
//! - per-minute simulation driver (lazy, restartable, optionally parallel)
//! - aggregate safety assessment
//!
//! Every run is a pure function of its inputs.

pub mod assess;
pub mod breaker;
pub mod consumer;
pub mod error;
pub mod events;
pub mod sim;
pub mod thermal;

// Re-exports for public API
pub use assess::{Assessment, Issue, IssueKind, assess};
pub use breaker::{TripDecision, TripReason, decide};
pub use consumer::{Consumer, ConsumerLoad};
pub use error::{SimError, SimResult};
pub use events::SimEvent;
pub use sim::{RiskLevel, SeriesIter, SimOptions, Simulation, SimulationPoint, run};
pub use thermal::{
    BreakerStatus, ExponentialLag, TemperatureModel, TemperatureSnapshot, ThermalEstimate,
    ThermalModel, thermal_load,
};
