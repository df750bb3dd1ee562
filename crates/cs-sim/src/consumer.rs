//! Duty-cycle load model for one attached consumer.

use cs_core::units::{Current, DutyCycle, Time, amps, as_amps, as_minutes};

use crate::error::{SimError, SimResult};
use crate::events::SimEvent;

/// One electrical load attached to the circuit.
///
/// `power_level` and `operating_mode` are display labels; their effect is
/// already folded into `rated_current` and `duty` when the consumer is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Consumer {
    pub name: String,
    pub rated_current: Current,
    pub duty: DutyCycle,
    /// Peak/rated current ratio during inrush, at least 1.
    pub startup_multiplier: f64,
    /// The load repeats every this many simulated minutes.
    pub cycle_period: Time,
    pub power_level: String,
    pub operating_mode: String,
}

/// Contribution of one consumer at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumerLoad {
    pub current: Current,
    pub inrush_current: Current,
    pub events: Vec<SimEvent>,
}

impl ConsumerLoad {
    fn idle() -> Self {
        Self {
            current: amps(0.0),
            inrush_current: amps(0.0),
            events: Vec::new(),
        }
    }

    pub fn is_on(&self) -> bool {
        self.current.value > 0.0
    }
}

impl Consumer {
    pub fn new(
        name: impl Into<String>,
        rated_current: Current,
        duty: DutyCycle,
        startup_multiplier: f64,
        cycle_period: Time,
    ) -> Self {
        Self {
            name: name.into(),
            rated_current,
            duty,
            startup_multiplier,
            cycle_period,
            power_level: String::new(),
            operating_mode: String::new(),
        }
    }

    pub fn with_labels(
        mut self,
        power_level: impl Into<String>,
        operating_mode: impl Into<String>,
    ) -> Self {
        self.power_level = power_level.into();
        self.operating_mode = operating_mode.into();
        self
    }

    fn check_cycle_period(&self) -> SimResult<()> {
        let period = as_minutes(self.cycle_period);
        if period.is_finite() && period > 0.0 {
            Ok(())
        } else {
            Err(SimError::invalid(format!(
                "consumer '{}': cycle period must be positive, got {period} min",
                self.name
            )))
        }
    }

    /// Full check of every numeric attribute.
    pub fn validate(&self) -> SimResult<()> {
        self.check_cycle_period()?;
        let rated = as_amps(self.rated_current);
        if !(rated.is_finite() && rated > 0.0) {
            return Err(SimError::invalid(format!(
                "consumer '{}': rated current must be positive, got {rated} A",
                self.name
            )));
        }
        if !(self.startup_multiplier.is_finite() && self.startup_multiplier >= 1.0) {
            return Err(SimError::invalid(format!(
                "consumer '{}': startup multiplier must be at least 1, got {}",
                self.name, self.startup_multiplier
            )));
        }
        Ok(())
    }

    /// Load drawn at an integer simulated minute.
    ///
    /// Fails only when the cycle period is not positive.
    pub fn evaluate(&self, minute: u32) -> SimResult<ConsumerLoad> {
        self.check_cycle_period()?;
        Ok(self.load_at(minute))
    }

    /// Caller guarantees a positive cycle period.
    pub(crate) fn load_at(&self, minute: u32) -> ConsumerLoad {
        let period = as_minutes(self.cycle_period);
        let position = f64::from(minute) % period;
        if position >= self.duty.on_span(period) {
            return ConsumerLoad::idle();
        }

        if position == 0.0 {
            ConsumerLoad {
                current: self.rated_current,
                inrush_current: self.rated_current * (self.startup_multiplier - 1.0),
                events: vec![SimEvent::Startup {
                    consumer: self.name.clone(),
                    power_level: self.power_level.clone(),
                }],
            }
        } else {
            ConsumerLoad {
                current: self.rated_current,
                inrush_current: amps(0.0),
                events: Vec::new(),
            }
        }
    }
}
