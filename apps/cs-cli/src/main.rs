use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use cs_app::{
    AppError, AppResult, PointRecord, RunOptions, RunSummary, query, run_service,
    scenario_service,
};
use cs_catalog::{Catalog, WireGauge, filter_appliances};
use cs_core::units::{as_amps, as_millis, as_minutes, as_seconds};

#[derive(Parser)]
#[command(name = "cs-cli")]
#[command(about = "CircuitSafe CLI - breaker and wire thermal trip simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and references
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Simulate a scenario and print its assessment
    Run {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Override the simulated horizon in minutes
        #[arg(long)]
        horizon: Option<u32>,
        /// Evaluate instants across all cores
        #[arg(long)]
        parallel: bool,
        /// Attach absolute wire/breaker temperatures
        #[arg(long)]
        temperature: bool,
        /// Print the summary and every point as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export one simulated variable as CSV
    ExportSeries {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Variable name (e.g., thermal_current, instant_current, risk)
        variable: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Browse the reference tables
    Catalog {
        table: CatalogTable,
        /// Case-insensitive filter (appliances only)
        #[arg(short, long)]
        query: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CatalogTable {
    Wires,
    Breakers,
    Appliances,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            horizon,
            parallel,
            temperature,
            json,
        } => {
            let options = RunOptions {
                horizon_minutes: horizon,
                parallel: parallel.then_some(true),
                temperature_model: temperature.then_some(true),
            };
            cmd_run(&scenario_path, &options, json)
        }
        Commands::ExportSeries {
            scenario_path,
            variable,
            output,
        } => cmd_export_series(&scenario_path, &variable, output.as_deref()),
        Commands::Catalog { table, query } => {
            cmd_catalog(table, query.as_deref());
            Ok(())
        }
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());

    let scenario = scenario_service::load_scenario(scenario_path)?;
    scenario_service::validate_scenario(&scenario, &Catalog::builtin())?;

    let summary = scenario_service::summarize(&scenario);
    println!("✓ Scenario is valid");
    println!(
        "  {} - {} A {} on {} ({} consumers, {} min)",
        summary.name,
        summary.rated_amps,
        summary.breaker,
        summary.wire,
        summary.consumers.len(),
        summary.horizon_minutes
    );
    for name in &summary.consumers {
        println!("    - {name}");
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport {
    summary: RunSummary,
    points: Vec<PointRecord>,
}

fn cmd_run(scenario_path: &Path, options: &RunOptions, json: bool) -> AppResult<()> {
    let scenario = scenario_service::load_scenario(scenario_path)?;
    let catalog = Catalog::builtin();
    let report = run_service::run_scenario_with(&scenario, &catalog, options)?;
    let summary = query::get_run_summary(&report)?;

    if json {
        let out = JsonReport {
            summary,
            points: query::point_records(&report.series),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("✓ Simulation completed: {}", report.run_id);
    println!(
        "  Circuit: {} A {} on {}",
        summary.rated_current_a, summary.breaker, summary.wire
    );
    println!("  Time points: {}", summary.point_count);
    println!(
        "  Risk: {} safe, {} warning, {} critical",
        summary.safe_count, summary.warning_count, summary.critical_count
    );
    if let Some(t) = summary.first_critical_min {
        println!("  First critical minute: {}", t);
    }
    println!("  Max instant current: {:.1} A", summary.max_instant_current_a);
    println!("  Max thermal load:    {:.1} A", summary.max_thermal_load_a);

    if summary.safe {
        println!("\n✓ Circuit is safe");
    } else {
        println!("\n✗ Circuit is not safe");
        for issue in &summary.issues {
            println!("  - {}", issue);
        }
        if !summary.recommendations.is_empty() {
            println!("\nRecommendations:");
            for rec in &summary.recommendations {
                println!("  -> {}", rec);
            }
        }
    }

    println!("\nTiming: {:.3}s total", report.timing.total_time_s);
    Ok(())
}

fn cmd_export_series(scenario_path: &Path, variable: &str, output: Option<&Path>) -> AppResult<()> {
    let scenario = scenario_service::load_scenario(scenario_path)?;
    let report = run_service::run_scenario(&scenario, &Catalog::builtin())?;
    let series = query::extract_series(&report.series, variable)?;
    let csv = query::series_to_csv(&series);

    if let Some(path) = output {
        std::fs::write(path, csv).map_err(|e| {
            AppError::InvalidInput(format!("Failed to write {}: {}", path.display(), e))
        })?;
        println!("✓ Exported {} points to {}", series.len(), path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_catalog(table: CatalogTable, filter: Option<&str>) {
    let catalog = Catalog::builtin();
    match table {
        CatalogTable::Wires => {
            println!("Wire gauges:");
            for w in catalog.wires() {
                let marker = if w.gauge == WireGauge::DEFAULT { " (default)" } else { "" };
                println!(
                    "  {:<8} continuous {:>4.0} A  short-term {:>4.0} A  tau {:>3.0} min{}",
                    w.gauge.to_string(),
                    as_amps(w.max_continuous),
                    as_amps(w.max_short_term),
                    as_minutes(w.thermal_time_constant),
                    marker
                );
            }
        }
        CatalogTable::Breakers => {
            println!("Breaker types:");
            for b in catalog.breakers() {
                println!(
                    "  {}  magnetic {}x  thermal {}x/{:.0}s  inrush {}x/{:.0}ms  {:?} selectivity",
                    b.breaker_type,
                    b.instantaneous_multiple,
                    b.thermal_multiple,
                    as_seconds(b.thermal_trip_time),
                    b.inrush_tolerance_multiple,
                    as_millis(b.inrush_tolerance_window),
                    b.characteristics.selectivity
                );
                println!("      {}", b.description);
            }
        }
        CatalogTable::Appliances => {
            let matches = filter_appliances(filter.unwrap_or(""));
            if matches.is_empty() {
                println!("No appliances match");
                return;
            }
            println!("Appliances:");
            for a in matches {
                println!(
                    "  {} - typical {} A, duty {}%, startup {}x, cycle {} min",
                    a.name,
                    a.typical_current_a,
                    a.duty_typical_percent,
                    a.startup_multiplier,
                    a.cycle_minutes
                );
                println!("      levels: {}", a.power_levels.join(", "));
                let modes: Vec<&str> = a.operating_modes.iter().map(|m| m.name).collect();
                println!("      modes:  {}", modes.join(", "));
            }
        }
    }
}
