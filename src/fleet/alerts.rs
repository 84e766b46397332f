//! Alert thresholds and the events raised when a vehicle crosses them.

use serde::Serialize;
use std::fmt;

/// Temperature (°C) above which a vehicle is reported as overheating.
pub const CRITICAL_TEMPERATURE: f64 = 110.0;

/// Fuel level (%) below which a vehicle is reported as running low.
pub const LOW_FUEL_THRESHOLD: f64 = 15.0;

/// The condition an [`Alert`] was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Overheating,
    LowFuel,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Overheating => f.write_str("Critical Overheating"),
            AlertKind::LowFuel => f.write_str("Low Fuel Warning"),
        }
    }
}

/// A single threshold violation for one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub vehicle_id: i32,
    pub kind: AlertKind,
}

impl Alert {
    pub fn new(vehicle_id: i32, kind: AlertKind) -> Self {
        Self { vehicle_id, kind }
    }
}
