//! Scenario execution service.

use std::time::Instant;

use cs_catalog::{BreakerSpec, BreakerType, Catalog, WireSpec};
use cs_core::units::{Current, amps};
use cs_project::Scenario;
use cs_sim::{Assessment, Consumer, SimOptions, Simulation, SimulationPoint, assess};
use sha2::{Digest, Sha256};

use crate::advice;
use crate::consumers::build_consumers;
use crate::error::AppResult;

/// Version folded into every run id.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-run overrides of the scenario's own settings.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub horizon_minutes: Option<u32>,
    pub parallel: Option<bool>,
    pub temperature_model: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub build_time_s: f64,
    pub simulate_time_s: f64,
    pub assess_time_s: f64,
    pub total_time_s: f64,
}

/// Everything produced by one scenario run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: String,
    pub scenario_name: String,
    pub breaker: BreakerSpec,
    pub rated: Current,
    pub wire: WireSpec,
    pub consumers: Vec<Consumer>,
    pub horizon_minutes: u32,
    pub parallel: bool,
    pub series: Vec<SimulationPoint>,
    pub assessment: Assessment,
    pub recommendations: Vec<&'static str>,
    pub timing: RunTimingSummary,
}

/// Content hash of the effective scenario and engine version.
pub fn compute_run_id(scenario: &Scenario, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    let scenario_json = serde_json::to_string(scenario).unwrap_or_default();
    hasher.update(scenario_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

/// Apply overrides to a copy of the scenario.
pub fn effective_scenario(scenario: &Scenario, options: &RunOptions) -> Scenario {
    let mut effective = scenario.clone();
    if let Some(h) = options.horizon_minutes {
        effective.horizon_minutes = h;
    }
    if let Some(p) = options.parallel {
        effective.options.parallel = p;
    }
    if let Some(t) = options.temperature_model {
        effective.options.temperature_model = t;
    }
    effective
}

pub fn run_scenario(scenario: &Scenario, catalog: &Catalog) -> AppResult<RunReport> {
    run_scenario_with(scenario, catalog, &RunOptions::default())
}

pub fn run_scenario_with(
    scenario: &Scenario,
    catalog: &Catalog,
    options: &RunOptions,
) -> AppResult<RunReport> {
    let total_start = Instant::now();
    let scenario = effective_scenario(scenario, options);
    cs_project::validate_scenario(&scenario, catalog)?;

    let run_id = compute_run_id(&scenario, ENGINE_VERSION);
    tracing::info!(run_id = %run_id, name = %scenario.name, "run started");

    let build_start = Instant::now();
    let breaker_type: BreakerType = scenario.circuit.breaker_type.parse()?;
    let breaker = *catalog.breaker(breaker_type);
    let wire = *catalog.wire(&scenario.circuit.wire_gauge);
    let rated = amps(f64::from(scenario.circuit.rated_amps));
    let consumers = build_consumers(&scenario.consumers, catalog)?;
    let build_time_s = build_start.elapsed().as_secs_f64();

    tracing::debug!(
        breaker = %breaker.breaker_type,
        wire = %wire.gauge,
        consumers = consumers.len(),
        "circuit built"
    );

    let sim_opts = SimOptions {
        horizon_minutes: scenario.horizon_minutes,
        temperature_model: scenario.options.temperature_model,
        thermal_constants: *catalog.thermal_constants(),
    };

    let simulate_start = Instant::now();
    let sim = Simulation::new(&consumers, &breaker, rated, &wire, &sim_opts)?;
    let series = if scenario.options.parallel {
        sim.run_parallel()
    } else {
        sim.run()
    };
    let simulate_time_s = simulate_start.elapsed().as_secs_f64();

    let assess_start = Instant::now();
    let assessment = assess(&series, &breaker, rated, &wire);
    let recommendations = advice::recommendations(&assessment, &breaker, rated);
    let assess_time_s = assess_start.elapsed().as_secs_f64();

    if assessment.safe {
        tracing::info!(run_id = %run_id, points = series.len(), "run finished: safe");
    } else {
        tracing::info!(
            run_id = %run_id,
            points = series.len(),
            issues = assessment.issues.len(),
            "run finished: unsafe"
        );
    }

    Ok(RunReport {
        run_id,
        scenario_name: scenario.name.clone(),
        breaker,
        rated,
        wire,
        consumers,
        horizon_minutes: scenario.horizon_minutes,
        parallel: scenario.options.parallel,
        series,
        assessment,
        recommendations,
        timing: RunTimingSummary {
            build_time_s,
            simulate_time_s,
            assess_time_s,
            total_time_s: total_start.elapsed().as_secs_f64(),
        },
    })
}
