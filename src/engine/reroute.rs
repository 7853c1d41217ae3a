// engine/reroute.rs
//
// Re-selection for a vehicle that has wandered off the path to its assigned
// spot. Proximity to the vehicle's current cell replaces proximity to the
// entrance; the rider's destination hint is advisory and deliberately
// ignored here.

use crate::error::ParkingError;
use crate::models::vehicle::VehicleProfile;
use crate::simulator::parking_lot::ParkingLot;
use crate::simulator::position::CellPosition;
use crate::simulator::spot::Spot;

/// Maps a continuous world position onto the lot grid.
///
/// One grid cell spans `cell_scale` distance units; `x` maps to columns and
/// `z` to rows. The result is clamped into the lot bounds since cells are
/// never negative.
pub fn discretize_position(position: [f64; 3], lot: &ParkingLot, cell_scale: f64) -> CellPosition {
    let row = (position[2] / cell_scale).floor().max(0.0) as usize;
    let col = (position[0] / cell_scale).floor().max(0.0) as usize;
    CellPosition::new(row.min(lot.rows - 1), col.min(lot.cols - 1))
}

/// Picks the available spot closest to `cell` by Manhattan distance, ties
/// broken by lexicographically smallest id.
pub fn select_spot_near<'a>(
    lot: &'a ParkingLot,
    cell: CellPosition,
) -> Result<&'a Spot, ParkingError> {
    lot.available_spots()
        .into_iter()
        .min_by_key(|spot| (spot.position().manhattan_distance(cell), spot.id.clone()))
        .ok_or_else(|| ParkingError::NoAvailableSpot(lot.id.clone()))
}

/// Runs the proximity rule and flips the winner's occupancy flag. Callers
/// must hold the lot exclusively for the whole call.
pub fn claim_spot_near(lot: &mut ParkingLot, cell: CellPosition) -> Result<Spot, ParkingError> {
    let spot_id = select_spot_near(lot, cell)?.id.clone();
    lot.set_occupied(&spot_id, true)?;
    Ok(lot.spot(&spot_id)?.clone())
}

/// Justification for a proximity-based re-selection.
pub fn reroute_reasoning(vehicle: &VehicleProfile, spot: &Spot) -> String {
    format!(
        "Based on your current position, spot {} is the closest available spot for your {}.",
        spot.id, vehicle.name
    )
}
