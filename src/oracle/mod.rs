// oracle/mod.rs
//
// The optional external recommendation source. A real implementation would
// render the request into a prompt for a chat-completion API and parse the
// JSON it returns; this crate only defines the seam and a stand-in, and the
// assistant treats every failure as a cue to fall back to the rule-based
// engine.

use crate::models::destination::Destination;
use crate::models::preferences::UserPreferences;
use crate::models::vehicle::VehicleProfile;
use crate::simulator::position::CellPosition;
use crate::simulator::spot::Spot;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything an oracle gets to see for one recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct OracleRequest {
    pub lot_id: String,
    pub lot_name: String,
    pub total_spots: usize,
    pub entrance: CellPosition,
    pub exit: CellPosition,
    pub vehicle: VehicleProfile,
    pub preferences: UserPreferences,
    /// The currently-available spots; a valid suggestion must name one of
    /// these.
    pub candidates: Vec<Spot>,
    /// Discretized position of the vehicle, present on reroutes.
    pub current_cell: Option<CellPosition>,
    /// Where the rider is ultimately heading, present on reroutes.
    pub destination: Option<Destination>,
}

/// A recommendation as returned by the oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleSuggestion {
    pub spot_id: String,
    pub reasoning: String,
}

/// Ways an oracle consultation can fail. None of these ever reach the
/// caller of the assistant; they only steer it onto the deterministic path.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("recommendation oracle unavailable: {0}")]
    Unavailable(String),

    #[error("recommendation oracle timed out")]
    Timeout,

    #[error("malformed oracle response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("oracle rejected the request: {0}")]
    Rejected(String),
}

/// External recommendation source consulted before the deterministic
/// fallback. Implementations must not assume their answer is final: the
/// assistant re-validates the suggested spot id against the candidate set
/// and live occupancy before trusting it.
#[allow(async_fn_in_trait)]
pub trait RecommendationOracle: Send + Sync {
    async fn suggest(&self, request: OracleRequest) -> Result<OracleSuggestion, OracleError>;
}

/// Stand-in used when no external recommendation service is wired up;
/// reports unavailability so every request takes the rule-based path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOracle;

impl RecommendationOracle for NullOracle {
    async fn suggest(&self, _request: OracleRequest) -> Result<OracleSuggestion, OracleError> {
        Err(OracleError::Unavailable("no oracle configured".to_string()))
    }
}
