//! Breaker trip decision combining magnetic, inrush-window and thermal release.

use core::fmt;

use cs_catalog::BreakerSpec;
use cs_core::units::{Current, Time, seconds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripReason {
    /// Magnetic release, near-zero delay.
    Instantaneous,
    /// Surge above the tolerated multiple inside the startup window.
    Inrush,
    /// Sustained overload, inverse-square time to trip.
    Thermal,
}

impl fmt::Display for TripReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TripReason::Instantaneous => "instantaneous",
            TripReason::Inrush => "inrush",
            TripReason::Thermal => "thermal",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TripDecision {
    Hold,
    Trip { reason: TripReason, time_to_trip: Time },
}

impl TripDecision {
    pub fn will_trip(&self) -> bool {
        matches!(self, TripDecision::Trip { .. })
    }

    pub fn reason(&self) -> Option<TripReason> {
        match self {
            TripDecision::Hold => None,
            TripDecision::Trip { reason, .. } => Some(*reason),
        }
    }

    pub fn time_to_trip(&self) -> Option<Time> {
        match self {
            TripDecision::Hold => None,
            TripDecision::Trip { time_to_trip, .. } => Some(*time_to_trip),
        }
    }
}

/// Decide whether `instant` trips the breaker `elapsed` after energization.
///
/// Rules are checked in priority order and the first match wins, so a current
/// above the magnetic threshold is never reported as a thermal trip.
/// `rated` must be positive.
pub fn decide(instant: Current, elapsed: Time, spec: &BreakerSpec, rated: Current) -> TripDecision {
    if instant > spec.instant_trip_current(rated) {
        return TripDecision::Trip {
            reason: TripReason::Instantaneous,
            time_to_trip: seconds(0.0),
        };
    }

    if elapsed <= spec.inrush_tolerance_window && instant > spec.inrush_tolerance_current(rated) {
        return TripDecision::Trip {
            reason: TripReason::Inrush,
            time_to_trip: elapsed,
        };
    }

    if instant > spec.thermal_trip_current(rated) {
        let load = instant.value / rated.value;
        let energy_ratio = load * load;
        return TripDecision::Trip {
            reason: TripReason::Thermal,
            time_to_trip: spec.thermal_trip_time / energy_ratio,
        };
    }

    TripDecision::Hold
}


#[cfg(test)]
mod proptests {
    use super::*;
    use cs_catalog::BreakerType;
    use cs_core::units::{amps, minutes};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn above_magnetic_is_always_instantaneous(
            rated in prop::sample::select(cs_catalog::STANDARD_RATINGS.to_vec()),
            excess in 0.001_f64..500.0,
            t in 0u32..600,
            kind in 0usize..3,
        ) {
            let spec = BreakerType::ALL[kind].spec();
            let rated = amps(f64::from(rated));
            let instant = spec.instant_trip_current(rated) + amps(excess);
            let d = decide(instant, minutes(f64::from(t)), &spec, rated);
            prop_assert_eq!(d.reason(), Some(TripReason::Instantaneous));
        }

        #[test]
        fn at_or_below_thermal_never_trips(
            rated in prop::sample::select(cs_catalog::STANDARD_RATINGS.to_vec()),
            share in 0.0_f64..=1.0,
            t in 0u32..600,
        ) {
            let spec = BreakerType::C.spec();
            let rated = amps(f64::from(rated));
            let instant = spec.thermal_trip_current(rated) * share;
            prop_assert!(!decide(instant, minutes(f64::from(t)), &spec, rated).will_trip());
        }
    }
}
