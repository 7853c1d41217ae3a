// src/communication/messages.rs
//
// Request and response shapes exchanged with the web layer. The routing
// framework itself lives outside this crate; these types pin down the wire
// contract it serves.

use crate::error::ParkingError;
use crate::models::destination::Destination;
use crate::models::preferences::UserPreferences;
use crate::models::vehicle::VehicleProfile;
use crate::simulator::parking_lot::ParkingLot;
use crate::simulator::position::CellPosition;
use crate::simulator::spot::Spot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `POST /allocate-spot` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocateSpotRequest {
    pub parking_id: String,
    pub vehicle_info: VehicleProfile,
    #[serde(default)]
    pub user_preferences: UserPreferences,
}

/// `POST /reroute-spot` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RerouteRequest {
    pub parking_id: String,
    pub vehicle_info: VehicleProfile,
    /// Continuous world position; `x` maps to columns, `z` to rows.
    pub current_position: [f64; 3],
    #[serde(default)]
    pub destination: Option<Destination>,
}

/// Successful body for both allocation and reroute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResponse {
    pub status: String,
    pub spot: Spot,
    pub reasoning: String,
    pub navigation_instructions: Vec<String>,
}

impl AllocationResponse {
    pub fn success(spot: Spot, reasoning: String, navigation_instructions: Vec<String>) -> Self {
        Self {
            status: "success".to_string(),
            spot,
            reasoning,
            navigation_instructions,
        }
    }
}

/// `GET /parking-lot/{lot_id}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotView {
    pub id: String,
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    pub entrance: CellPosition,
    pub exit: CellPosition,
    pub total_spots: usize,
    pub available_spots: usize,
    pub spots: HashMap<String, Spot>,
}

impl From<&ParkingLot> for LotView {
    fn from(lot: &ParkingLot) -> Self {
        Self {
            id: lot.id.clone(),
            name: lot.name.clone(),
            rows: lot.rows,
            cols: lot.cols,
            entrance: lot.entrance,
            exit: lot.exit,
            total_spots: lot.total_spots(),
            available_spots: lot.available_count(),
            spots: lot.spots.clone(),
        }
    }
}

/// Error body: `{"status": "error", "message": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    /// Renders a core error with the HTTP status the web layer should use.
    pub fn from_error(err: &ParkingError) -> (u16, Self) {
        (
            err.http_status(),
            Self {
                status: "error".to_string(),
                message: err.to_string(),
            },
        )
    }
}
