//! Simulation driver: one point per simulated minute.

use core::fmt;
use core::iter::FusedIterator;

use cs_catalog::{BreakerSpec, THERMAL_CONSTANTS, ThermalConstants, WireSpec};
use cs_core::ensure_positive;
use cs_core::units::{Current, amps, as_amps, as_seconds, minutes};
use rayon::prelude::*;

use crate::breaker::{TripDecision, decide};
use crate::consumer::Consumer;
use crate::error::{SimError, SimResult};
use crate::events::SimEvent;
use crate::thermal::{ExponentialLag, TemperatureModel, TemperatureSnapshot};

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Number of simulated minutes; points cover `0..horizon_minutes`.
    pub horizon_minutes: u32,
    /// Attach degree-based temperature snapshots to every point.
    pub temperature_model: bool,
    /// Constants for the temperature model.
    pub thermal_constants: ThermalConstants,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            horizon_minutes: 60,
            temperature_model: false,
            thermal_constants: THERMAL_CONSTANTS,
        }
    }
}

impl SimOptions {
    pub fn with_horizon(horizon_minutes: u32) -> Self {
        Self {
            horizon_minutes,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Safe,
    Warning,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Warning => "warning",
            RiskLevel::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// One instant of the output series.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationPoint {
    pub time_minutes: u32,
    /// Lagged sustained current (inrush excluded).
    pub thermal_current: Current,
    /// Sustained plus inrush current.
    pub instant_current: Current,
    pub rated_current: Current,
    pub instant_trip_current: Current,
    pub thermal_trip_current: Current,
    pub wire_max_continuous: Current,
    pub wire_max_short_term: Current,
    pub trip: TripDecision,
    /// Consumer startups in consumer order, then threshold crossings.
    ///
    /// A breaker trip is reported on the first minute of a run of trips with
    /// the same reason; a wire overload on the first minute the lagged current
    /// exceeds the continuous rating.
    pub events: Vec<SimEvent>,
    pub risk: RiskLevel,
    pub temperature: Option<TemperatureSnapshot>,
}

impl SimulationPoint {
    pub fn event_messages(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

struct InstantState {
    sustained: Current,
    instant_current: Current,
    thermal_current: Current,
    trip: TripDecision,
    events: Vec<SimEvent>,
}

/// A validated circuit ready to be sampled at any minute.
///
/// Holds only read-only borrows of its inputs; sampling minute `t` never
/// depends on having sampled `t - 1`.
#[derive(Debug, Clone)]
pub struct Simulation<'a> {
    consumers: &'a [Consumer],
    breaker: &'a BreakerSpec,
    rated: Current,
    wire: &'a WireSpec,
    lag: ExponentialLag,
    temperature: Option<TemperatureModel>,
    horizon: u32,
}

impl<'a> Simulation<'a> {
    /// Validate every input up front; no partial series is ever produced.
    pub fn new(
        consumers: &'a [Consumer],
        breaker: &'a BreakerSpec,
        rated: Current,
        wire: &'a WireSpec,
        opts: &SimOptions,
    ) -> SimResult<Self> {
        if opts.horizon_minutes == 0 {
            return Err(SimError::OutOfRange {
                what: "horizon must be at least one minute",
            });
        }
        let rated_a = ensure_positive(as_amps(rated), "rated current")?;
        validate_breaker(breaker)?;
        if wire.max_continuous.value <= 0.0 || wire.max_short_term.value <= 0.0 {
            return Err(SimError::invalid(format!(
                "wire {} limits must be positive",
                wire.gauge
            )));
        }
        let lag = ExponentialLag::new(wire.thermal_time_constant)?;
        for consumer in consumers {
            consumer.validate()?;
        }
        let temperature = if opts.temperature_model {
            Some(TemperatureModel::new(
                opts.thermal_constants,
                wire.gauge,
                rated,
            )?)
        } else {
            None
        };

        tracing::debug!(
            consumers = consumers.len(),
            breaker = %breaker.breaker_type,
            rated_a,
            wire = %wire.gauge,
            horizon_minutes = opts.horizon_minutes,
            temperature_model = opts.temperature_model,
            "simulation configured"
        );

        Ok(Self {
            consumers,
            breaker,
            rated,
            wire,
            lag,
            temperature,
            horizon: opts.horizon_minutes,
        })
    }

    pub fn horizon_minutes(&self) -> u32 {
        self.horizon
    }

    pub fn breaker(&self) -> &BreakerSpec {
        self.breaker
    }

    pub fn wire(&self) -> &WireSpec {
        self.wire
    }

    pub fn rated_current(&self) -> Current {
        self.rated
    }

    /// Summed loads, lagged current and trip decision at minute `t`.
    fn state_at(&self, t: u32) -> InstantState {
        let mut sustained = amps(0.0);
        let mut inrush = amps(0.0);
        let mut events = Vec::new();
        for consumer in self.consumers {
            let load = consumer.load_at(t);
            sustained += load.current;
            inrush += load.inrush_current;
            events.extend(load.events);
        }

        let elapsed = minutes(f64::from(t));
        let instant_current = sustained + inrush;
        InstantState {
            sustained,
            instant_current,
            thermal_current: self.lag.lagged(sustained, elapsed),
            trip: decide(instant_current, elapsed, self.breaker, self.rated),
            events,
        }
    }

    /// Evaluate the circuit at minute `t`.
    ///
    /// Threshold events fire on the minute a threshold is crossed. The previous
    /// minute is recomputed from scratch rather than carried over, so any
    /// minute can still be sampled on its own.
    pub fn point(&self, t: u32) -> SimulationPoint {
        let InstantState {
            sustained,
            instant_current,
            thermal_current,
            trip,
            mut events,
        } = self.state_at(t);
        let previous = t.checked_sub(1).map(|prev| self.state_at(prev));
        let limit = self.wire.max_continuous;
        let overloaded = thermal_current > limit;

        let risk = if trip.will_trip() {
            RiskLevel::Critical
        } else if overloaded {
            RiskLevel::Warning
        } else {
            RiskLevel::Safe
        };

        if let TripDecision::Trip {
            reason,
            time_to_trip,
        } = trip
        {
            let previous_reason = previous.as_ref().and_then(|p| p.trip.reason());
            if previous_reason != Some(reason) {
                events.push(SimEvent::BreakerTrip {
                    reason,
                    time_to_trip,
                });
            }
        }
        let was_overloaded = previous
            .as_ref()
            .is_some_and(|p| p.thermal_current > limit);
        if overloaded && !was_overloaded {
            events.push(SimEvent::WireOverload {
                thermal_current,
                limit,
            });
        }

        let elapsed = minutes(f64::from(t));
        SimulationPoint {
            time_minutes: t,
            thermal_current,
            instant_current,
            rated_current: self.rated,
            instant_trip_current: self.breaker.instant_trip_current(self.rated),
            thermal_trip_current: self.breaker.thermal_trip_current(self.rated),
            wire_max_continuous: self.wire.max_continuous,
            wire_max_short_term: self.wire.max_short_term,
            trip,
            events,
            risk,
            temperature: self
                .temperature
                .as_ref()
                .map(|m| m.snapshot(sustained, elapsed)),
        }
    }

    /// Lazy series over `0..horizon`. Call again to restart.
    pub fn iter(&self) -> SeriesIter<'_, 'a> {
        SeriesIter {
            sim: self,
            next: 0,
            end: self.horizon,
        }
    }

    /// Evaluate the whole horizon sequentially.
    pub fn run(&self) -> Vec<SimulationPoint> {
        self.iter().collect()
    }

    /// Evaluate the whole horizon across the rayon pool.
    ///
    /// Instants are independent; the indexed collect keeps minute order.
    pub fn run_parallel(&self) -> Vec<SimulationPoint> {
        (0..self.horizon)
            .into_par_iter()
            .map(|t| self.point(t))
            .collect()
    }
}

fn validate_breaker(spec: &BreakerSpec) -> SimResult<()> {
    let multiples = [
        ("instantaneous multiple", spec.instantaneous_multiple),
        ("thermal multiple", spec.thermal_multiple),
        ("inrush tolerance multiple", spec.inrush_tolerance_multiple),
    ];
    for (what, value) in multiples {
        ensure_positive(value, what)?;
    }
    ensure_positive(as_seconds(spec.thermal_trip_time), "thermal trip time")?;
    if spec.inrush_tolerance_window.value < 0.0 {
        return Err(SimError::invalid(format!(
            "{} inrush tolerance window must not be negative",
            spec.breaker_type
        )));
    }
    Ok(())
}

/// Lazy, finite iterator over simulation points.
#[derive(Debug, Clone)]
pub struct SeriesIter<'s, 'a> {
    sim: &'s Simulation<'a>,
    next: u32,
    end: u32,
}

impl Iterator for SeriesIter<'_, '_> {
    type Item = SimulationPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let point = self.sim.point(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SeriesIter<'_, '_> {}

impl FusedIterator for SeriesIter<'_, '_> {}

/// Run a circuit over `0..horizon_minutes` with default options.
pub fn run(
    consumers: &[Consumer],
    breaker: &BreakerSpec,
    rated: Current,
    wire: &WireSpec,
    horizon_minutes: u32,
) -> SimResult<Vec<SimulationPoint>> {
    let opts = SimOptions::with_horizon(horizon_minutes);
    Ok(Simulation::new(consumers, breaker, rated, wire, &opts)?.run())
}
