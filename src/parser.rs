//! CSV ingestion for vehicle telemetry files.
//!
//! Expected layout is a header row followed by `id,speed,temperature,fuel`
//! lines. Rows that cannot be parsed or fail validation are collected as
//! [`RejectedRow`]s and the remaining rows are still loaded.

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::fleet::{FleetAggregator, VehicleRecord};

/// One tokenized row, before range validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawVehicleRow {
    pub line: u64,
    pub id: i32,
    pub speed: f64,
    pub temperature: f64,
    pub fuel: f64,
}

/// A row that was skipped during ingestion.
///
/// `id` is `None` when the first field is not an integer, and also whenever
/// the row could not be decoded as UTF-8, even if its id field was valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    pub line: u64,
    pub id: Option<i32>,
    pub reason: String,
}

/// Result of loading a telemetry source.
#[derive(Debug, Default)]
pub struct Ingestion {
    pub records: Vec<VehicleRecord>,
    pub rejected: Vec<RejectedRow>,
}

/// Opens `path` and reads vehicle rows from it.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read. Malformed rows are
/// not errors; they end up in [`Ingestion::rejected`].
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_vehicles(path: &Path) -> Result<Ingestion> {
    let file = File::open(path).with_context(|| format!("Unable to open file: {}", path.display()))?;
    let ingestion = read_vehicles(file)
        .with_context(|| format!("Failed to read vehicle data from {}", path.display()))?;

    info!(
        loaded = ingestion.records.len(),
        rejected = ingestion.rejected.len(),
        "Vehicle data loaded"
    );
    Ok(ingestion)
}

/// Loads `path` into a fleet with its averages computed. Returns the fleet
/// and the number of rejected rows.
///
/// # Errors
///
/// Fails like [`load_vehicles`], and also when not a single valid vehicle
/// was found.
pub fn load_fleet(path: &Path) -> Result<(FleetAggregator, usize)> {
    let ingestion = load_vehicles(path)?;
    if ingestion.records.is_empty() {
        bail!("No vehicles loaded from {}", path.display());
    }

    let rejected = ingestion.rejected.len();
    let mut fleet = FleetAggregator::new(ingestion.records);
    fleet.compute_averages();

    Ok((fleet, rejected))
}

/// Reads vehicle rows from any CSV source. The first line is always treated
/// as a header.
pub fn read_vehicles<R: Read>(reader: R) -> Result<Ingestion> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut rejected = Vec::new();

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                rejected.push(reject(line, None, e.to_string()));
                continue;
            }
        };

        if record.iter().all(str::is_empty) {
            continue;
        }

        match tokenize(&record) {
            Ok(row) => rows.push(row),
            Err(rejection) => rejected.push(rejection),
        }
    }

    let mut ingestion = ingest_rows(rows);
    rejected.append(&mut ingestion.rejected);
    rejected.sort_by_key(|r| r.line);
    ingestion.rejected = rejected;

    Ok(ingestion)
}

/// Validates already tokenized rows, keeping the valid ones in order.
pub fn ingest_rows(rows: impl IntoIterator<Item = RawVehicleRow>) -> Ingestion {
    let mut ingestion = Ingestion::default();

    for row in rows {
        match VehicleRecord::new(row.id, row.speed, row.temperature, row.fuel) {
            Ok(vehicle) => {
                debug!(line = row.line, vehicle_id = row.id, "Loaded vehicle");
                ingestion.records.push(vehicle);
            }
            Err(e) => ingestion
                .rejected
                .push(reject(row.line, Some(row.id), e.to_string())),
        }
    }

    ingestion
}

fn tokenize(record: &StringRecord) -> Result<RawVehicleRow, RejectedRow> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    let id = record.get(0).and_then(|s| s.parse::<i32>().ok());

    let (id_value, speed, temperature, fuel): (i32, f64, f64, f64) = record
        .deserialize(None)
        .map_err(|e| reject(line, id, e.to_string()))?;

    Ok(RawVehicleRow {
        line,
        id: id_value,
        speed,
        temperature,
        fuel,
    })
}

fn reject(line: u64, id: Option<i32>, reason: String) -> RejectedRow {
    warn!(line, vehicle_id = ?id, reason = %reason, "Skipping vehicle row");
    RejectedRow { line, id, reason }
}
