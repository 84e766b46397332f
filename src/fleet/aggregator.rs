use serde::Serialize;

use crate::fleet::alerts::Alert;
use crate::fleet::utility::mean_by;
use crate::fleet::vehicle::VehicleRecord;

/// Fleet-wide means, as of the last [`FleetAggregator::compute_averages`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FleetAverages {
    pub speed: f64,
    pub temperature: f64,
    pub fuel: f64,
}

/// Owns the loaded vehicles and answers average and alert queries over them.
///
/// Averages are not kept in sync with [`push`](Self::push); call
/// [`compute_averages`](Self::compute_averages) after changing the fleet.
#[derive(Debug, Clone, Default)]
pub struct FleetAggregator {
    vehicles: Vec<VehicleRecord>,
    averages: FleetAverages,
}

impl FleetAggregator {
    pub fn new(vehicles: Vec<VehicleRecord>) -> Self {
        Self {
            vehicles,
            averages: FleetAverages::default(),
        }
    }

    pub fn push(&mut self, vehicle: VehicleRecord) {
        self.vehicles.push(vehicle);
    }

    /// Recomputes and stores the mean speed, temperature and fuel level.
    pub fn compute_averages(&mut self) -> FleetAverages {
        self.averages = FleetAverages {
            speed: mean_by(&self.vehicles, VehicleRecord::speed),
            temperature: mean_by(&self.vehicles, VehicleRecord::temperature),
            fuel: mean_by(&self.vehicles, VehicleRecord::fuel),
        };
        self.averages
    }

    pub fn averages(&self) -> FleetAverages {
        self.averages
    }

    pub fn average_speed(&self) -> f64 {
        self.averages.speed
    }

    pub fn average_temperature(&self) -> f64 {
        self.averages.temperature
    }

    pub fn average_fuel(&self) -> f64 {
        self.averages.fuel
    }

    /// Lists every threshold violation in insertion order. A vehicle that
    /// is both overheating and low on fuel produces two alerts.
    pub fn check_alerts(&self) -> Vec<Alert> {
        self.vehicles
            .iter()
            .flat_map(|v| v.alerts().map(move |kind| Alert::new(v.id(), kind)))
            .collect()
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl FromIterator<VehicleRecord> for FleetAggregator {
    fn from_iter<I: IntoIterator<Item = VehicleRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
