//! Application service layer for circuit safety runs.
//!
//! Shared by the CLI: scenario management, consumer construction,
//! simulation execution, recommendations, and result querying.

pub mod advice;
pub mod consumers;
pub mod error;
pub mod query;
pub mod run_service;
pub mod scenario_service;

// Re-export key types for convenience
pub use advice::recommendations;
pub use consumers::{build_consumer, build_consumers};
pub use error::{AppError, AppResult};
pub use query::{
    PointRecord, RunSummary, SERIES_VARIABLES, extract_series, get_run_summary, point_records,
    series_to_csv,
};
pub use run_service::{
    ENGINE_VERSION, RunOptions, RunReport, RunTimingSummary, compute_run_id, effective_scenario,
    run_scenario, run_scenario_with,
};
pub use scenario_service::{
    ScenarioSummary, load_scenario, save_scenario, summarize, validate_scenario,
};
