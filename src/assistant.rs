// src/assistant.rs
//
// Facade tying the lot registry, the optional recommendation oracle and the
// deterministic engines together. Allocation and reroute both run a
// two-stage pipeline: snapshot the candidates under the lot lock, consult
// the oracle with the lock released and a timeout armed, then retake the
// lock, re-validate the suggestion against live occupancy and claim a spot.

use crate::communication::messages::{AllocateSpotRequest, AllocationResponse, LotView, RerouteRequest};
use crate::config::AssistantConfig;
use crate::engine::{allocation, navigation, reroute};
use crate::error::ParkingError;
use crate::oracle::{OracleRequest, OracleSuggestion, RecommendationOracle};
use crate::simulator::parking_lot::ParkingLot;
use crate::simulator::registry::LotRegistry;
use crate::simulator::spot::Spot;
use std::collections::HashSet;
use std::sync::Arc;

pub struct ParkingAssistant<O> {
    registry: Arc<LotRegistry>,
    oracle: O,
    config: AssistantConfig,
}

impl<O: RecommendationOracle> ParkingAssistant<O> {
    pub fn new(registry: Arc<LotRegistry>, oracle: O, config: AssistantConfig) -> Self {
        Self {
            registry,
            oracle,
            config,
        }
    }

    /// Handles `POST /allocate-spot`: picks a spot for an arriving vehicle
    /// and routes it there from the entrance.
    pub async fn allocate_spot(
        &self,
        request: &AllocateSpotRequest,
    ) -> Result<AllocationResponse, ParkingError> {
        let lot_handle = self.registry.get_or_create(&request.parking_id);

        let oracle_request = {
            let lot = lot_handle.lock().unwrap();
            let candidates: Vec<Spot> =
                lot.available_spots().into_iter().cloned().collect();
            if candidates.is_empty() {
                return Err(ParkingError::NoAvailableSpot(lot.id.clone()));
            }
            OracleRequest {
                lot_id: lot.id.clone(),
                lot_name: lot.name.clone(),
                total_spots: lot.total_spots(),
                entrance: lot.entrance,
                exit: lot.exit,
                vehicle: request.vehicle_info.clone(),
                preferences: request.user_preferences.clone(),
                candidates,
                current_cell: None,
                destination: None,
            }
        };

        let suggestion = self.consult_oracle(oracle_request).await;

        let mut lot = lot_handle.lock().unwrap();
        let (spot, reasoning) = match suggestion {
            Some(suggestion) if spot_still_free(&lot, &suggestion.spot_id) => {
                lot.set_occupied(&suggestion.spot_id, true)?;
                (lot.spot(&suggestion.spot_id)?.clone(), suggestion.reasoning)
            }
            _ => {
                let large_class =
                    allocation::is_large_class(&request.vehicle_info, &self.config.engine);
                let spot =
                    allocation::claim_spot(&mut lot, &request.vehicle_info, &self.config.engine)?;
                let reasoning =
                    allocation::fallback_reasoning(&request.vehicle_info, &spot, large_class);
                (spot, reasoning)
            }
        };

        log::info!(
            "allocated spot {} in lot {} for vehicle {}",
            spot.id,
            lot.id,
            request.vehicle_info.id
        );
        let instructions = navigation::navigation_instructions(lot.entrance, &spot);
        Ok(AllocationResponse::success(spot, reasoning, instructions))
    }

    /// Handles `POST /reroute-spot`: re-picks a spot for a vehicle that has
    /// deviated from its path, routing from its current cell instead of the
    /// entrance.
    pub async fn reroute_spot(
        &self,
        request: &RerouteRequest,
    ) -> Result<AllocationResponse, ParkingError> {
        let lot_handle = self.registry.get_or_create(&request.parking_id);

        let (oracle_request, current_cell) = {
            let lot = lot_handle.lock().unwrap();
            let candidates: Vec<Spot> =
                lot.available_spots().into_iter().cloned().collect();
            if candidates.is_empty() {
                return Err(ParkingError::NoAvailableSpot(lot.id.clone()));
            }
            let current_cell = reroute::discretize_position(
                request.current_position,
                &lot,
                self.config.engine.cell_scale,
            );
            let oracle_request = OracleRequest {
                lot_id: lot.id.clone(),
                lot_name: lot.name.clone(),
                total_spots: lot.total_spots(),
                entrance: lot.entrance,
                exit: lot.exit,
                vehicle: request.vehicle_info.clone(),
                preferences: Default::default(),
                candidates,
                current_cell: Some(current_cell),
                destination: request.destination.clone(),
            };
            (oracle_request, current_cell)
        };

        let suggestion = self.consult_oracle(oracle_request).await;

        let mut lot = lot_handle.lock().unwrap();
        let (spot, reasoning) = match suggestion {
            Some(suggestion) if spot_still_free(&lot, &suggestion.spot_id) => {
                lot.set_occupied(&suggestion.spot_id, true)?;
                (lot.spot(&suggestion.spot_id)?.clone(), suggestion.reasoning)
            }
            _ => {
                let spot = reroute::claim_spot_near(&mut lot, current_cell)?;
                let reasoning = reroute::reroute_reasoning(&request.vehicle_info, &spot);
                (spot, reasoning)
            }
        };

        log::info!(
            "rerouted vehicle {} to spot {} in lot {} from cell ({}, {})",
            request.vehicle_info.id,
            spot.id,
            lot.id,
            current_cell.row,
            current_cell.col
        );
        let instructions = navigation::navigation_instructions(current_cell, &spot);
        Ok(AllocationResponse::success(spot, reasoning, instructions))
    }

    /// Handles `POST /reset-parking-lot/{lot_id}`.
    pub fn reset_lot(&self, lot_id: &str) -> Result<(), ParkingError> {
        self.registry.reset(lot_id)
    }

    /// Handles `GET /parking-lot/{lot_id}`; generates the lot on first
    /// reference like every other operation.
    pub fn lot_snapshot(&self, lot_id: &str) -> LotView {
        let lot_handle = self.registry.get_or_create(lot_id);
        let lot = lot_handle.lock().unwrap();
        LotView::from(&*lot)
    }

    /// Bounded-time oracle consultation. Any failure, timeout or suggestion
    /// outside the candidate set resolves to `None`, which sends the caller
    /// down the deterministic path.
    async fn consult_oracle(&self, request: OracleRequest) -> Option<OracleSuggestion> {
        let candidate_ids: HashSet<String> = request
            .candidates
            .iter()
            .map(|spot| spot.id.clone())
            .collect();
        let lot_id = request.lot_id.clone();

        match tokio::time::timeout(self.config.oracle_timeout, self.oracle.suggest(request)).await {
            Ok(Ok(suggestion)) if candidate_ids.contains(&suggestion.spot_id) => Some(suggestion),
            Ok(Ok(suggestion)) => {
                log::warn!(
                    "oracle suggested spot {} outside the candidate set for lot {}, using fallback",
                    suggestion.spot_id,
                    lot_id
                );
                None
            }
            Ok(Err(err)) => {
                log::warn!("oracle failed for lot {} ({}), using fallback", lot_id, err);
                None
            }
            Err(_) => {
                log::warn!(
                    "oracle timed out after {:?} for lot {}, using fallback",
                    self.config.oracle_timeout,
                    lot_id
                );
                None
            }
        }
    }
}

/// A suggestion is only honored while its spot is both known and free; a
/// racing allocation may have taken it while the oracle was thinking.
fn spot_still_free(lot: &ParkingLot, spot_id: &str) -> bool {
    lot.spot(spot_id).map(|spot| !spot.is_occupied).unwrap_or(false)
}
