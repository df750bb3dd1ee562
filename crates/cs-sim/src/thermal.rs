//! Thermal models: lagged current (primary) and absolute temperature (opt-in).

use core::fmt;

use cs_catalog::{ThermalConstants, WireGauge};
use cs_core::ensure_positive;
use cs_core::units::{
    Current, TempInterval, Temperature, Time, as_amps, as_celsius, as_seconds, celsius,
    celsius_delta, seconds,
};

use crate::error::{SimError, SimResult};

/// Thermally-lagged equivalent of `raw` after `elapsed`.
///
/// `raw × (1 − e^(−elapsed/τ))`. Each sample is computed fresh from the total
/// elapsed time; it is not a recursive filter over earlier samples.
pub fn thermal_load(raw: Current, elapsed: Time, time_constant: Time) -> SimResult<Current> {
    Ok(ExponentialLag::new(time_constant)?.lagged(raw, elapsed))
}

/// Result of a [`ThermalModel`] evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThermalEstimate {
    LaggedCurrent(Current),
    Temperature(TemperatureSnapshot),
}

/// A strategy turning sustained current and elapsed time into a heat metric.
pub trait ThermalModel: Send + Sync {
    fn name(&self) -> &str;

    fn estimate(&self, current: Current, elapsed: Time) -> ThermalEstimate;
}

/// Single-pole exponential lag on current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialLag {
    time_constant: Time,
}

impl ExponentialLag {
    pub fn new(time_constant: Time) -> SimResult<Self> {
        ensure_positive(as_seconds(time_constant), "thermal time constant")?;
        Ok(Self { time_constant })
    }

    pub fn time_constant(&self) -> Time {
        self.time_constant
    }

    pub fn lagged(&self, raw: Current, elapsed: Time) -> Current {
        let ratio = elapsed.value / self.time_constant.value;
        raw * (1.0 - (-ratio).exp())
    }
}

impl ThermalModel for ExponentialLag {
    fn name(&self) -> &str {
        "exponential-lag"
    }

    fn estimate(&self, current: Current, elapsed: Time) -> ThermalEstimate {
        ThermalEstimate::LaggedCurrent(self.lagged(current, elapsed))
    }
}

/// Breaker condition derived from its estimated temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BreakerStatus {
    Normal,
    Warning,
    Critical,
}

impl fmt::Display for BreakerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BreakerStatus::Normal => "normal",
            BreakerStatus::Warning => "warning",
            BreakerStatus::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// Absolute temperatures and trip outlook at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSnapshot {
    pub ambient: Temperature,
    pub wire: Temperature,
    pub max_wire: Temperature,
    pub breaker: Temperature,
    /// Breaker trip temperature.
    pub max_breaker: Temperature,
    /// 0..=1
    pub trip_probability: f64,
    pub time_to_trip: Option<Time>,
    pub status: BreakerStatus,
}

/// Degree-based wire/breaker heating model.
///
/// Not used by the default simulation; enable it through
/// [`SimOptions::temperature_model`](crate::SimOptions).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureModel {
    constants: ThermalConstants,
    gauge: WireGauge,
    rated: Current,
}

impl TemperatureModel {
    pub fn new(constants: ThermalConstants, gauge: WireGauge, rated: Current) -> SimResult<Self> {
        ensure_positive(as_amps(rated), "rated current")?;
        let b = constants.breaker;
        if b.trip_temperature_c <= b.warning_temperature_c {
            return Err(SimError::invalid(
                "breaker trip temperature must exceed its warning temperature",
            ));
        }
        Ok(Self {
            constants,
            gauge,
            rated,
        })
    }

    fn first_order_rise(max_rise: f64, elapsed_s: f64, tau_s: f64) -> TempInterval {
        celsius_delta(max_rise * (1.0 - (-elapsed_s / tau_s).exp()))
    }

    pub fn ambient(&self) -> Temperature {
        celsius(self.constants.ambient.temperature_c)
    }

    /// Wire rise above ambient.
    pub fn wire_rise(&self, current: Current, elapsed: Time) -> TempInterval {
        let wire = &self.constants.wire;
        let resistance = wire.resistance(self.gauge);
        let capacity = wire.capacity(self.gauge);
        let i = as_amps(current);

        let power_loss = i * i * resistance;
        let max_rise = power_loss * resistance;
        let tau_s = capacity * resistance;
        Self::first_order_rise(max_rise, as_seconds(elapsed), tau_s)
    }

    pub fn wire_temperature(&self, current: Current, elapsed: Time) -> Temperature {
        self.ambient() + self.wire_rise(current, elapsed)
    }

    /// Breaker rise above ambient, driven by load relative to the rating.
    pub fn breaker_rise(&self, current: Current, elapsed: Time) -> TempInterval {
        let b = &self.constants.breaker;
        let load = as_amps(current) / as_amps(self.rated);

        let power_loss = load * load * b.thermal_resistance;
        let max_rise = power_loss * b.thermal_resistance;
        let tau_s = b.thermal_capacity * b.thermal_resistance;
        Self::first_order_rise(max_rise, as_seconds(elapsed), tau_s)
    }

    pub fn breaker_temperature(&self, current: Current, elapsed: Time) -> Temperature {
        self.ambient() + self.breaker_rise(current, elapsed)
    }

    /// Weighted blend of temperature and current pressure, capped at 1.
    pub fn trip_probability(&self, breaker: Temperature, current: Current) -> f64 {
        let b = &self.constants.breaker;
        let i = as_amps(current);
        let rated = as_amps(self.rated);

        let temp_factor = ((as_celsius(breaker) - b.warning_temperature_c)
            / (b.trip_temperature_c - b.warning_temperature_c))
            .max(0.0);
        let current_factor = ((i - rated * 0.8) / (rated * 0.4)).max(0.0);
        (temp_factor * 0.7 + current_factor * 0.3).min(1.0)
    }

    /// `None` while the current is within rating.
    pub fn time_to_trip(&self, current: Current, breaker: Temperature) -> Option<Time> {
        let trip_c = self.constants.breaker.trip_temperature_c;
        let breaker_c = as_celsius(breaker);
        let i = as_amps(current);
        let rated = as_amps(self.rated);

        if breaker >= celsius(trip_c) || i >= rated * 1.5 {
            return Some(seconds(0.0));
        }
        if i <= rated {
            return None;
        }
        // One hour at rated current, scaled by the remaining margin on the Celsius scale.
        let capacity = rated * rated * 3600.0;
        let remaining = capacity * (1.0 - breaker_c / trip_c);
        Some(seconds(remaining / (i * i)))
    }

    pub fn status(&self, breaker: Temperature) -> BreakerStatus {
        let b = &self.constants.breaker;
        if breaker >= celsius(b.trip_temperature_c) {
            BreakerStatus::Critical
        } else if breaker >= celsius(b.warning_temperature_c) {
            BreakerStatus::Warning
        } else {
            BreakerStatus::Normal
        }
    }

    pub fn snapshot(&self, current: Current, elapsed: Time) -> TemperatureSnapshot {
        let breaker = self.breaker_temperature(current, elapsed);
        TemperatureSnapshot {
            ambient: self.ambient(),
            wire: self.wire_temperature(current, elapsed),
            max_wire: celsius(self.constants.wire.max_temperature_c),
            breaker,
            max_breaker: celsius(self.constants.breaker.trip_temperature_c),
            trip_probability: self.trip_probability(breaker, current),
            time_to_trip: self.time_to_trip(current, breaker),
            status: self.status(breaker),
        }
    }
}

impl ThermalModel for TemperatureModel {
    fn name(&self) -> &str {
        "temperature"
    }

    fn estimate(&self, current: Current, elapsed: Time) -> ThermalEstimate {
        ThermalEstimate::Temperature(self.snapshot(current, elapsed))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use cs_core::units::{amps, minutes};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lag_never_overshoots(raw in 0.0_f64..100.0, t in 0u32..10_000, tau in 1u32..120) {
            let i = thermal_load(amps(raw), minutes(f64::from(t)), minutes(f64::from(tau))).unwrap();
            prop_assert!(as_amps(i) >= 0.0);
            prop_assert!(as_amps(i) <= raw);
        }

        #[test]
        fn lag_is_monotonic_in_time(raw in 0.1_f64..100.0, t in 0u32..1_000, tau in 1u32..120) {
            let lag = ExponentialLag::new(minutes(f64::from(tau))).unwrap();
            let a = lag.lagged(amps(raw), minutes(f64::from(t)));
            let b = lag.lagged(amps(raw), minutes(f64::from(t + 1)));
            prop_assert!(b >= a);
        }
    }
}
