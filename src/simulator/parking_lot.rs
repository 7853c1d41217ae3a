use crate::error::ParkingError;
use crate::simulator::position::CellPosition;
use crate::simulator::spot::Spot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A rectangular grid of spots plus one entrance and one exit cell.
///
/// The entrance sits at row 0 and the exit at the last row, in the same
/// column; those two cells never carry a spot, so the map always holds
/// exactly `rows * cols - 2` entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingLot {
    pub id: String,
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    pub entrance: CellPosition,
    pub exit: CellPosition,
    /// All spots keyed by their positional id.
    pub spots: HashMap<String, Spot>,
}

impl ParkingLot {
    /// Looks a spot up by id.
    pub fn spot(&self, spot_id: &str) -> Result<&Spot, ParkingError> {
        self.spots.get(spot_id).ok_or_else(|| ParkingError::SpotNotFound {
            lot_id: self.id.clone(),
            spot_id: spot_id.to_string(),
        })
    }

    /// All spots whose occupancy flag is currently false.
    pub fn available_spots(&self) -> Vec<&Spot> {
        self.spots.values().filter(|spot| !spot.is_occupied).collect()
    }

    pub fn total_spots(&self) -> usize {
        self.spots.len()
    }

    pub fn available_count(&self) -> usize {
        self.spots.values().filter(|spot| !spot.is_occupied).count()
    }

    /// Flips a spot's occupancy flag.
    pub fn set_occupied(&mut self, spot_id: &str, occupied: bool) -> Result<(), ParkingError> {
        let lot_id = self.id.clone();
        let spot = self
            .spots
            .get_mut(spot_id)
            .ok_or_else(|| ParkingError::SpotNotFound {
                lot_id,
                spot_id: spot_id.to_string(),
            })?;
        spot.is_occupied = occupied;
        Ok(())
    }

    /// Clears every occupancy flag, regardless of prior allocation history.
    pub fn reset(&mut self) {
        for spot in self.spots.values_mut() {
            spot.is_occupied = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::spot::SpotType;

    fn small_lot() -> ParkingLot {
        let entrance = CellPosition::new(0, 1);
        let exit = CellPosition::new(2, 1);
        let mut spots = HashMap::new();
        for row in 0..3 {
            for col in 0..3 {
                let position = CellPosition::new(row, col);
                if position == entrance || position == exit {
                    continue;
                }
                let spot = Spot::new(position, SpotType::Standard, entrance, exit);
                spots.insert(spot.id.clone(), spot);
            }
        }
        ParkingLot {
            id: "parking_test".to_string(),
            name: "Test Lot".to_string(),
            rows: 3,
            cols: 3,
            entrance,
            exit,
            spots,
        }
    }

    #[test]
    fn unknown_spot_lookup_fails() {
        let lot = small_lot();
        let err = lot.spot("Z9").unwrap_err();
        assert_eq!(
            err,
            ParkingError::SpotNotFound {
                lot_id: "parking_test".to_string(),
                spot_id: "Z9".to_string(),
            }
        );
        assert_eq!(err.http_status(), 404);
    }

    #[test]
    fn set_occupied_changes_only_the_named_spot() {
        let mut lot = small_lot();
        lot.set_occupied("B2", true).unwrap();
        assert!(lot.spot("B2").unwrap().is_occupied);
        let occupied: Vec<_> = lot
            .spots
            .values()
            .filter(|spot| spot.is_occupied)
            .collect();
        assert_eq!(occupied.len(), 1);
    }

    #[test]
    fn reset_clears_every_flag() {
        let mut lot = small_lot();
        lot.set_occupied("A1", true).unwrap();
        lot.set_occupied("C3", true).unwrap();
        lot.reset();
        assert!(lot.spots.values().all(|spot| !spot.is_occupied));
        assert_eq!(lot.available_count(), lot.total_spots());
    }
}
