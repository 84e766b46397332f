//! Report rendering and persistence for fleet summaries.
//!
//! Supports a plain-text console report, JSON serialization, and CSV append.

use anyhow::Result;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;

use crate::fleet::{Alert, VehicleRecord};
use crate::stats::FleetSummary;
use csv::WriterBuilder;

#[derive(Serialize)]
struct FleetReport<'a> {
    summary: &'a FleetSummary,
    alerts: &'a [Alert],
}

/// Renders the console report: averages, an optional per-vehicle status
/// listing, then the alerts.
pub fn render_text(
    summary: &FleetSummary,
    alerts: &[Alert],
    status: Option<&[VehicleRecord]>,
) -> String {
    let mut out = String::from("--- Fleet Management System ---\n\n");

    out.push_str(&format!(
        "Vehicles: {} ({} rejected)\n",
        summary.vehicles, summary.rejected
    ));
    out.push_str(&format!("Average Speed: {:.2} km/h\n", summary.avg_speed));
    out.push_str(&format!(
        "Average Temperature: {:.2} °C\n",
        summary.avg_temperature
    ));
    out.push_str(&format!("Average Fuel: {:.2}%\n", summary.avg_fuel));
    out.push_str(&format!(
        "Overheating: {} ({:.2}%)\n",
        summary.overheating, summary.overheating_pct
    ));
    out.push_str(&format!(
        "Low Fuel: {} ({:.2}%)\n",
        summary.low_fuel, summary.low_fuel_pct
    ));

    if let Some(vehicles) = status {
        out.push_str("\n--- Fleet Status ---\n");
        for v in vehicles {
            out.push_str(&format!(
                "Vehicle {} Speed: {:.2} Temp: {:.2} Fuel: {:.2}\n",
                v.id(),
                v.speed(),
                v.temperature(),
                v.fuel()
            ));
        }
    }

    out.push_str("\n--- Alerts ---\n");
    if alerts.is_empty() {
        out.push_str("No alerts\n");
    }
    out.push_str(&render_alerts(alerts));

    out
}

/// One line per alert, in the order given.
pub fn render_alerts(alerts: &[Alert]) -> String {
    alerts
        .iter()
        .map(|a| format!("Vehicle ID {}: {}\n", a.vehicle_id, a.kind))
        .collect()
}

/// Serializes the summary and alerts as pretty-printed JSON.
pub fn render_json(summary: &FleetSummary, alerts: &[Alert]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&FleetReport { summary, alerts })?)
}

/// Appends a [`FleetSummary`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &Path, summary: &FleetSummary) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(summary)?;
    writer.flush()?;

    Ok(())
}
