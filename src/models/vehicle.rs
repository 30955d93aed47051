use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Scooter,
    Motorbike,
    Car,
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleType::Scooter => write!(f, "scooter"),
            VehicleType::Motorbike => write!(f, "motorbike"),
            VehicleType::Car => write!(f, "car"),
        }
    }
}

/// An electric vehicle listing as returned by the browse endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub brand: String,
    pub license_plate: Option<String>,
    pub vehicle_type: VehicleType,
    pub price_per_day: f64,
    pub battery_capacity_kwh: Option<f64>,
    pub range_km: Option<u32>,
    #[serde(default)]
    pub images: Vec<String>,
    pub station: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_deserializes_with_defaults() {
        let v: Vehicle = serde_json::from_value(serde_json::json!({
            "_id": "68a1b2c3d4e5f60718293a4d",
            "name": "VinFast Evo200",
            "brand": "VinFast",
            "licensePlate": "59X1-123.45",
            "vehicleType": "scooter",
            "pricePerDay": 150000.0,
            "batteryCapacityKwh": 3.5,
            "rangeKm": 200,
            "station": "Quận 1"
        }))
        .unwrap();
        assert_eq!(v.vehicle_type, VehicleType::Scooter);
        assert!(v.available);
        assert!(v.images.is_empty());
        assert_eq!(v.range_km, Some(200));
    }
}
