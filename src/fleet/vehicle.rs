use serde::Serialize;

use crate::fleet::alerts::{AlertKind, CRITICAL_TEMPERATURE, LOW_FUEL_THRESHOLD};

/// Raised when a telemetry value falls outside its allowed range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VehicleError {
    #[error("invalid {field}: {value} (must be {constraint})")]
    InvalidArgument {
        field: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

/// One vehicle's telemetry snapshot.
///
/// Fields are private so a record can only be obtained through
/// [`VehicleRecord::new`], which enforces the value ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VehicleRecord {
    id: i32,
    speed: f64,
    temperature: f64,
    fuel: f64,
}

impl VehicleRecord {
    /// Validates and builds a record.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleError::InvalidArgument`] for the first field (speed,
    /// temperature, fuel) that is negative, NaN, or (fuel only) above 100.
    pub fn new(id: i32, speed: f64, temperature: f64, fuel: f64) -> Result<Self, VehicleError> {
        check("speed", speed, speed >= 0.0, ">= 0")?;
        check("temperature", temperature, temperature >= 0.0, ">= 0")?;
        check("fuel", fuel, (0.0..=100.0).contains(&fuel), "within 0..=100")?;

        Ok(Self {
            id,
            speed,
            temperature,
            fuel,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn is_overheating(&self) -> bool {
        self.temperature > CRITICAL_TEMPERATURE
    }

    pub fn has_low_fuel(&self) -> bool {
        self.fuel < LOW_FUEL_THRESHOLD
    }

    /// Alert kinds this record triggers, overheating first.
    pub fn alerts(&self) -> impl Iterator<Item = AlertKind> {
        [
            (self.is_overheating(), AlertKind::Overheating),
            (self.has_low_fuel(), AlertKind::LowFuel),
        ]
        .into_iter()
        .filter_map(|(triggered, kind)| triggered.then_some(kind))
    }
}

// NaN fails every comparison, so `ok` is false for it as well.
fn check(field: &'static str, value: f64, ok: bool, constraint: &'static str) -> Result<(), VehicleError> {
    if ok {
        Ok(())
    } else {
        Err(VehicleError::InvalidArgument {
            field,
            value,
            constraint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(temperature: f64, fuel: f64) -> VehicleRecord {
        VehicleRecord::new(1, 60.0, temperature, fuel).unwrap()
    }

    #[test]
    fn test_new_keeps_supplied_values() {
        let v = VehicleRecord::new(42, 77.5, 88.25, 99.0).unwrap();

        assert_eq!(v.id(), 42);
        assert_eq!(v.speed(), 77.5);
        assert_eq!(v.temperature(), 88.25);
        assert_eq!(v.fuel(), 99.0);
    }

    #[test]
    fn test_new_accepts_zero_and_negative_ids() {
        assert_eq!(VehicleRecord::new(0, 60.0, 90.0, 50.0).unwrap().id(), 0);
        assert_eq!(VehicleRecord::new(-1, 60.0, 90.0, 50.0).unwrap().id(), -1);
    }

    #[test]
    fn test_new_rejects_negative_speed() {
        let err = VehicleRecord::new(1, -10.0, 90.0, 50.0).unwrap_err();
        assert!(matches!(
            err,
            VehicleError::InvalidArgument { field: "speed", .. }
        ));
    }

    #[test]
    fn test_new_rejects_negative_temperature() {
        let err = VehicleRecord::new(1, 60.0, -20.0, 50.0).unwrap_err();
        assert!(matches!(
            err,
            VehicleError::InvalidArgument {
                field: "temperature",
                ..
            }
        ));
    }

    #[test]
    fn test_new_rejects_fuel_out_of_range() {
        for fuel in [-5.0, 101.0] {
            let err = VehicleRecord::new(1, 60.0, 90.0, fuel).unwrap_err();
            assert!(matches!(
                err,
                VehicleError::InvalidArgument { field: "fuel", .. }
            ));
        }
    }

    #[test]
    fn test_new_accepts_fuel_boundaries() {
        assert_eq!(vehicle(90.0, 0.0).fuel(), 0.0);
        assert_eq!(vehicle(90.0, 100.0).fuel(), 100.0);
    }

    #[test]
    fn test_new_rejects_nan() {
        assert!(VehicleRecord::new(1, f64::NAN, 90.0, 50.0).is_err());
        assert!(VehicleRecord::new(1, 60.0, f64::NAN, 50.0).is_err());
        assert!(VehicleRecord::new(1, 60.0, 90.0, f64::NAN).is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = VehicleRecord::new(1, 60.0, 90.0, 101.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid fuel: 101 (must be within 0..=100)");
    }

    #[test]
    fn test_overheating_threshold_is_exclusive() {
        assert!(!vehicle(109.99, 50.0).is_overheating());
        assert!(!vehicle(110.0, 50.0).is_overheating());
        assert!(vehicle(110.01, 50.0).is_overheating());
    }

    #[test]
    fn test_low_fuel_threshold_is_exclusive() {
        assert!(!vehicle(90.0, 15.0).has_low_fuel());
        assert!(!vehicle(90.0, 15.01).has_low_fuel());
        assert!(vehicle(90.0, 14.99).has_low_fuel());
    }

    #[test]
    fn test_alerts_order() {
        let both: Vec<_> = vehicle(120.0, 10.0).alerts().collect();
        assert_eq!(both, vec![AlertKind::Overheating, AlertKind::LowFuel]);

        assert_eq!(vehicle(90.0, 10.0).alerts().collect::<Vec<_>>(), vec![AlertKind::LowFuel]);
        assert_eq!(vehicle(90.0, 50.0).alerts().count(), 0);
    }
}
