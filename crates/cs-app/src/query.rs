//! Query helpers for extracting data from run reports.

use cs_core::units::{as_amps, as_celsius, as_seconds};
use cs_sim::{RiskLevel, SimulationPoint};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::run_service::RunReport;

/// Flat, serializable view of one simulation point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub time_min: u32,
    pub thermal_current_a: f64,
    pub instant_current_a: f64,
    pub rated_current_a: f64,
    pub instant_trip_a: f64,
    pub thermal_trip_a: f64,
    pub wire_max_continuous_a: f64,
    pub wire_max_short_term_a: f64,
    pub will_trip: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_trip_s: Option<f64>,
    pub risk: String,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wire_temperature_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breaker_temperature_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_probability: Option<f64>,
}

impl From<&SimulationPoint> for PointRecord {
    fn from(p: &SimulationPoint) -> Self {
        Self {
            time_min: p.time_minutes,
            thermal_current_a: as_amps(p.thermal_current),
            instant_current_a: as_amps(p.instant_current),
            rated_current_a: as_amps(p.rated_current),
            instant_trip_a: as_amps(p.instant_trip_current),
            thermal_trip_a: as_amps(p.thermal_trip_current),
            wire_max_continuous_a: as_amps(p.wire_max_continuous),
            wire_max_short_term_a: as_amps(p.wire_max_short_term),
            will_trip: p.trip.will_trip(),
            trip_reason: p.trip.reason().map(|r| r.to_string()),
            time_to_trip_s: p.trip.time_to_trip().map(as_seconds),
            risk: p.risk.to_string(),
            events: p.event_messages(),
            wire_temperature_c: p.temperature.map(|t| as_celsius(t.wire)),
            breaker_temperature_c: p.temperature.map(|t| as_celsius(t.breaker)),
            trip_probability: p.temperature.map(|t| t.trip_probability),
        }
    }
}

pub fn point_records(series: &[SimulationPoint]) -> Vec<PointRecord> {
    series.iter().map(PointRecord::from).collect()
}

/// Serializable digest of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,
    pub scenario_name: String,
    pub breaker: String,
    pub rated_current_a: f64,
    pub wire: String,
    pub point_count: usize,
    pub time_range: (u32, u32),
    pub safe_count: usize,
    pub warning_count: usize,
    pub critical_count: usize,
    pub first_critical_min: Option<u32>,
    pub max_instant_current_a: f64,
    pub max_thermal_load_a: f64,
    pub safe: bool,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn get_run_summary(report: &RunReport) -> AppResult<RunSummary> {
    let series = &report.series;
    if series.is_empty() {
        return Err(AppError::InvalidInput("No points in run".to_string()));
    }

    let t_min = series.first().map(|p| p.time_minutes).unwrap_or(0);
    let t_max = series.last().map(|p| p.time_minutes).unwrap_or(0);
    let count = |level: RiskLevel| series.iter().filter(|p| p.risk == level).count();

    Ok(RunSummary {
        run_id: report.run_id.clone(),
        scenario_name: report.scenario_name.clone(),
        breaker: report.breaker.breaker_type.to_string(),
        rated_current_a: as_amps(report.rated),
        wire: report.wire.gauge.to_string(),
        point_count: series.len(),
        time_range: (t_min, t_max),
        safe_count: count(RiskLevel::Safe),
        warning_count: count(RiskLevel::Warning),
        critical_count: count(RiskLevel::Critical),
        first_critical_min: series
            .iter()
            .find(|p| p.risk == RiskLevel::Critical)
            .map(|p| p.time_minutes),
        max_instant_current_a: as_amps(report.assessment.max_instant_current),
        max_thermal_load_a: as_amps(report.assessment.max_thermal_load),
        safe: report.assessment.safe,
        issues: report.assessment.issue_messages(),
        recommendations: report
            .recommendations
            .iter()
            .map(|r| r.to_string())
            .collect(),
    })
}

/// Variable names accepted by [`extract_series`].
pub const SERIES_VARIABLES: [&str; 7] = [
    "thermal_current",
    "instant_current",
    "time_to_trip",
    "risk",
    "wire_temperature",
    "breaker_temperature",
    "trip_probability",
];

/// Extract `(time_min, value)` pairs for one variable.
///
/// Points without a value (no trip, temperature model off) are skipped.
/// Risk is encoded as 0 safe, 1 warning, 2 critical.
pub fn extract_series(series: &[SimulationPoint], variable: &str) -> AppResult<Vec<(f64, f64)>> {
    let mut out = Vec::new();

    for p in series {
        let value = match variable {
            "thermal_current" | "thermal" => Some(as_amps(p.thermal_current)),
            "instant_current" | "instant" => Some(as_amps(p.instant_current)),
            "time_to_trip" => p.trip.time_to_trip().map(as_seconds),
            "risk" => Some(match p.risk {
                RiskLevel::Safe => 0.0,
                RiskLevel::Warning => 1.0,
                RiskLevel::Critical => 2.0,
            }),
            "wire_temperature" => p.temperature.map(|t| as_celsius(t.wire)),
            "breaker_temperature" => p.temperature.map(|t| as_celsius(t.breaker)),
            "trip_probability" => p.temperature.map(|t| t.trip_probability),
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "Unknown series variable: {} (expected one of {})",
                    variable,
                    SERIES_VARIABLES.join(", ")
                )));
            }
        };

        if let Some(v) = value {
            out.push((f64::from(p.time_minutes), v));
        }
    }

    Ok(out)
}

pub fn series_to_csv(series: &[(f64, f64)]) -> String {
    let mut csv = String::from("time_min,value\n");
    for (t, v) in series {
        csv.push_str(&format!("{},{}\n", t, v));
    }
    csv
}
