use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::fleet::{Alert, AlertKind, FleetAggregator};

/// Snapshot of one reporting run, suitable for JSON output or a CSV row.
#[derive(Debug, Default, Serialize)]
pub struct FleetSummary {
    pub timestamp: DateTime<Utc>,
    pub source: Option<String>,
    pub vehicles: usize,
    pub rejected: usize,

    // averages
    pub avg_speed: f64,
    pub avg_temperature: f64,
    pub avg_fuel: f64,

    // alert counts
    pub overheating: usize,
    pub overheating_pct: f64,
    pub low_fuel: usize,
    pub low_fuel_pct: f64,
}

impl FleetSummary {
    /// Builds a summary from the fleet's last computed averages and the
    /// alerts it raised.
    pub fn from_fleet(fleet: &FleetAggregator, alerts: &[Alert]) -> Self {
        let averages = fleet.averages();
        let count = |kind: AlertKind| alerts.iter().filter(|a| a.kind == kind).count();

        let vehicles = fleet.len();
        let overheating = count(AlertKind::Overheating);
        let low_fuel = count(AlertKind::LowFuel);

        FleetSummary {
            timestamp: Utc::now(),
            vehicles,
            avg_speed: averages.speed,
            avg_temperature: averages.temperature,
            avg_fuel: averages.fuel,
            overheating,
            overheating_pct: share_pct(overheating, vehicles),
            low_fuel,
            low_fuel_pct: share_pct(low_fuel, vehicles),
            ..Default::default()
        }
    }

    /// Set the file the vehicles were loaded from
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_rejected(mut self, rejected: usize) -> Self {
        self.rejected = rejected;
        self
    }
}

/// Percentage of the fleet that `part` vehicles represent; 0.0 for an empty fleet.
fn share_pct(part: usize, vehicles: usize) -> f64 {
    if vehicles == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / vehicles as f64
}
