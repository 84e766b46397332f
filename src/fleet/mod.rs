//! Vehicle telemetry model and fleet-wide aggregation.
//!
//! [`VehicleRecord`] validates a single snapshot, [`FleetAggregator`] owns a
//! list of them and computes averages and threshold alerts.

pub mod aggregator;
pub mod alerts;
pub mod utility;
pub mod vehicle;

pub use aggregator::{FleetAggregator, FleetAverages};
pub use alerts::{Alert, AlertKind};
pub use vehicle::{VehicleError, VehicleRecord};
