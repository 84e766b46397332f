//! CLI entry point for the fleet telemetry monitor.
//!
//! Loads a vehicle telemetry CSV, reports fleet averages and lists
//! overheating and low-fuel alerts.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fleet_monitor::{
    output::{append_record, render_alerts, render_json, render_text},
    parser::load_fleet,
    stats::FleetSummary,
};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "fleet_monitor")]
#[command(about = "Fleet telemetry averages and threshold alerts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print fleet averages and alerts for a telemetry CSV
    Report {
        /// Path to the vehicle CSV (id,speed,temperature,fuel with a header row)
        #[arg(value_name = "FILE", default_value = "data/vehicles.csv")]
        input: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Also list every vehicle's telemetry
        #[arg(short, long, default_value_t = false)]
        status: bool,

        /// Optional: CSV file to append the run summary to
        #[arg(short, long)]
        append: Option<PathBuf>,
    },
    /// Print only the alerts for a telemetry CSV
    Alerts {
        /// Path to the vehicle CSV
        #[arg(value_name = "FILE", default_value = "data/vehicles.csv")]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = init_tracing()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            format,
            status,
            append,
        } => {
            let (fleet, rejected) = load_fleet(&input)?;
            let alerts = fleet.check_alerts();
            let summary = FleetSummary::from_fleet(&fleet, &alerts)
                .with_source(&input.display().to_string())
                .with_rejected(rejected);

            info!(
                vehicles = summary.vehicles,
                overheating = summary.overheating,
                low_fuel = summary.low_fuel,
                "Fleet report ready"
            );

            let report = match format {
                Format::Text => render_text(&summary, &alerts, status.then(|| fleet.vehicles())),
                Format::Json => render_json(&summary, &alerts)? + "\n",
            };
            std::io::stdout().lock().write_all(report.as_bytes())?;

            if let Some(path) = append {
                append_record(&path, &summary)?;
                info!(path = %path.display(), "Summary appended");
            }
        }
        Commands::Alerts { input } => {
            let (fleet, _) = load_fleet(&input)?;
            let alerts = fleet.check_alerts();
            std::io::stdout()
                .lock()
                .write_all(render_alerts(&alerts).as_bytes())?;
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/fleet_monitor.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("fleet_monitor.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}
