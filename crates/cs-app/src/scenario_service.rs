//! Scenario loading, saving, validation, and introspection.

use std::path::Path;

use cs_catalog::{BreakerType, Catalog, WireGauge};
use cs_project::Scenario;

use crate::error::{AppError, AppResult};

/// One-line view of a scenario for listings.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub name: String,
    pub rated_amps: u32,
    pub breaker: String,
    pub wire: String,
    /// Consumer display names in scenario order.
    pub consumers: Vec<String>,
    pub horizon_minutes: u32,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Load a scenario from YAML, or JSON when the extension says so.
///
/// Parsing also migrates and validates the scenario.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let scenario = if is_json(path) {
        cs_project::parse_json(&content)?
    } else {
        cs_project::parse_yaml(&content)?
    };
    tracing::info!(path = %path.display(), name = %scenario.name, "scenario loaded");
    Ok(scenario)
}

pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    validate_scenario(scenario, &Catalog::builtin())?;
    let content = if is_json(path) {
        serde_json::to_string_pretty(scenario)?
    } else {
        serde_yaml::to_string(scenario)
            .map_err(|e| AppError::Serialization(format!("Failed to serialize scenario: {}", e)))?
    };

    std::fs::write(path, content).map_err(|e| AppError::ScenarioFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

pub fn validate_scenario(scenario: &Scenario, catalog: &Catalog) -> AppResult<()> {
    cs_project::validate_scenario(scenario, catalog)?;
    Ok(())
}

pub fn summarize(scenario: &Scenario) -> ScenarioSummary {
    let breaker = scenario
        .circuit
        .breaker_type
        .parse::<BreakerType>()
        .map(|t| t.label().to_string())
        .unwrap_or_else(|_| scenario.circuit.breaker_type.clone());
    ScenarioSummary {
        name: scenario.name.clone(),
        rated_amps: scenario.circuit.rated_amps,
        breaker,
        wire: WireGauge::resolve(&scenario.circuit.wire_gauge).to_string(),
        consumers: scenario
            .consumers
            .iter()
            .map(|c| c.display_name().to_string())
            .collect(),
        horizon_minutes: scenario.horizon_minutes,
    }
}
