//! Aggregate safety assessment over a simulated series.

use core::fmt;

use cs_catalog::{BreakerSpec, WireSpec};
use cs_core::units::{Current, amps};

use crate::sim::SimulationPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    BreakerInstantTrip,
    BreakerThermalLimit,
    WireContinuous,
    WireShortTerm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// True iff no issue was raised.
    pub safe: bool,
    pub issues: Vec<Issue>,
    pub max_instant_current: Current,
    pub max_thermal_load: Current,
}

impl Assessment {
    pub fn issue_messages(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.message.clone()).collect()
    }

    pub fn has(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|i| i.kind == kind)
    }
}

/// Check a series against breaker and wire limits.
///
/// Every condition is evaluated independently. An empty series has 0 A maxima.
pub fn assess(
    series: &[SimulationPoint],
    breaker: &BreakerSpec,
    rated: Current,
    wire: &WireSpec,
) -> Assessment {
    let mut max_instant_current = amps(0.0);
    let mut max_thermal_load = amps(0.0);
    for p in series {
        if p.instant_current > max_instant_current {
            max_instant_current = p.instant_current;
        }
        if p.thermal_current > max_thermal_load {
            max_thermal_load = p.thermal_current;
        }
    }

    let mut issues = Vec::new();
    if max_instant_current > breaker.instant_trip_current(rated) {
        issues.push(Issue {
            kind: IssueKind::BreakerInstantTrip,
            message: format!(
                "Circuit breaker ({}) will trip on startup currents",
                breaker.breaker_type
            ),
        });
    }
    if max_thermal_load > breaker.thermal_trip_current(rated) {
        issues.push(Issue {
            kind: IssueKind::BreakerThermalLimit,
            message: format!(
                "Circuit breaker thermal limit exceeded ({} characteristics)",
                breaker.breaker_type
            ),
        });
    }
    if max_thermal_load > wire.max_continuous {
        issues.push(Issue {
            kind: IssueKind::WireContinuous,
            message: format!(
                "Wire thermal capacity ({}) exceeded for continuous operation",
                wire.gauge
            ),
        });
    }
    if max_thermal_load > wire.max_short_term {
        issues.push(Issue {
            kind: IssueKind::WireShortTerm,
            message: format!(
                "Wire thermal capacity ({}) exceeded for short-term operation",
                wire.gauge
            ),
        });
    }

    tracing::debug!(
        issues = issues.len(),
        max_instant_a = max_instant_current.value,
        max_thermal_a = max_thermal_load.value,
        "assessment complete"
    );

    Assessment {
        safe: issues.is_empty(),
        issues,
        max_instant_current,
        max_thermal_load,
    }
}
