// src/error.rs

use thiserror::Error;

/// Failures the parking core reports to its callers.
///
/// Anything else raised inside the deterministic engines is a programming
/// defect and propagates to the caller's error boundary as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    /// The referenced lot id is unknown to the registry.
    #[error("parking lot `{0}` not found")]
    LotNotFound(String),

    /// The referenced spot id does not exist in the lot.
    #[error("spot `{spot_id}` not found in parking lot `{lot_id}`")]
    SpotNotFound { lot_id: String, spot_id: String },

    /// Every spot in the lot is already occupied.
    #[error("no available spots in parking lot `{0}`")]
    NoAvailableSpot(String),
}

impl ParkingError {
    /// HTTP status the web layer maps this error to.
    pub fn http_status(&self) -> u16 {
        match self {
            ParkingError::LotNotFound(_) | ParkingError::SpotNotFound { .. } => 404,
            ParkingError::NoAvailableSpot(_) => 400,
        }
    }
}
