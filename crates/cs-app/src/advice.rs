//! Recommendations derived from the same thresholds as the assessment.

use cs_catalog::BreakerSpec;
use cs_core::units::Current;
use cs_sim::Assessment;

pub const UPGRADE_BREAKER: &str =
    "Consider upgrading to a higher rated circuit breaker or stagger device startup times";
pub const REDUCE_LOAD: &str = "Reduce the continuous load or upgrade the circuit capacity";
pub const USE_TYPE_D: &str = "Consider using a Type D breaker for better inrush current handling";
pub const DERATE_HARMONICS: &str = "Consider derating the circuit due to harmonic-sensitive loads";

/// Advice for an unsafe circuit; empty when the assessment is safe.
pub fn recommendations(
    assessment: &Assessment,
    breaker: &BreakerSpec,
    rated: Current,
) -> Vec<&'static str> {
    if assessment.safe {
        return Vec::new();
    }

    let mut out = Vec::new();
    if assessment.max_instant_current > breaker.instant_trip_current(rated) {
        out.push(UPGRADE_BREAKER);
    }
    if assessment.max_thermal_load > breaker.thermal_trip_current(rated) {
        out.push(REDUCE_LOAD);
    }
    if assessment.max_instant_current > breaker.inrush_tolerance_current(rated) {
        out.push(USE_TYPE_D);
    }
    if breaker.characteristics.harmonic_sensitive && assessment.max_thermal_load > rated * 0.8 {
        out.push(DERATE_HARMONICS);
    }
    out
}
