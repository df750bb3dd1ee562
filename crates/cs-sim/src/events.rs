//! Occurrences recorded at a simulated instant.

use core::fmt;

use cs_core::units::{Current, Time, as_amps, as_seconds};

use crate::breaker::TripReason;

#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// A consumer starts a new cycle and draws its inrush surge.
    Startup {
        consumer: String,
        power_level: String,
    },
    /// The trip decision fired at this instant.
    BreakerTrip {
        reason: TripReason,
        time_to_trip: Time,
    },
    /// Thermally-lagged current is above the wire's continuous rating.
    WireOverload { thermal_current: Current, limit: Current },
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Startup {
                consumer,
                power_level,
            } => write!(f, "{consumer} startup ({power_level})"),
            SimEvent::BreakerTrip {
                reason,
                time_to_trip,
            } => write!(
                f,
                "Breaker trip ({reason}) within {:.1} s",
                as_seconds(*time_to_trip)
            ),
            SimEvent::WireOverload {
                thermal_current,
                limit,
            } => write!(
                f,
                "Wire continuous rating exceeded ({:.1} A > {:.1} A)",
                as_amps(*thermal_current),
                as_amps(*limit)
            ),
        }
    }
}
