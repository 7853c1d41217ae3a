use serde::{Deserialize, Serialize};

/// Vehicle identity and dimensions, used to bias spot selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Type tag ("sedan", "truck", ...).
    pub id: String,
    pub name: String,
    /// Width in meters.
    pub width: f64,
    /// Length in meters.
    pub length: f64,
    /// Height in meters.
    pub height: f64,
    #[serde(default)]
    pub description: String,
}

impl VehicleProfile {
    pub fn new(id: &str, name: &str, width: f64, length: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            width,
            length,
            height,
            description: String::new(),
        }
    }

    /// Ground footprint in square meters.
    pub fn footprint(&self) -> f64 {
        self.width * self.length
    }
}

/// The stock vehicle catalog served to clients without a registered vehicle.
pub fn builtin_profiles() -> Vec<VehicleProfile> {
    vec![
        VehicleProfile {
            id: "sedan".to_string(),
            name: "Sedan".to_string(),
            width: 1.8,
            length: 4.5,
            height: 1.5,
            description: "Standard mid-size sedan, suitable for most parking spots.".to_string(),
        },
        VehicleProfile {
            id: "suv".to_string(),
            name: "SUV".to_string(),
            width: 2.0,
            length: 4.8,
            height: 1.8,
            description: "Sport utility vehicle with higher clearance, ideal for families."
                .to_string(),
        },
        VehicleProfile {
            id: "pickup".to_string(),
            name: "Pickup Truck".to_string(),
            width: 2.1,
            length: 5.5,
            height: 1.9,
            description: "Utility vehicle with open cargo area, requires larger parking space."
                .to_string(),
        },
        VehicleProfile {
            id: "van".to_string(),
            name: "Van".to_string(),
            width: 2.1,
            length: 5.2,
            height: 2.1,
            description: "Larger vehicle for transporting people or cargo, needs adequate clearance."
                .to_string(),
        },
    ]
}
