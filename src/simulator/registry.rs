use crate::config::GeneratorConfig;
use crate::error::ParkingError;
use crate::simulator::generator;
use crate::simulator::parking_lot::ParkingLot;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Owns every generated lot for the lifetime of the process.
///
/// Lots materialize lazily on first reference and are never deleted, so the
/// map only grows. Each lot sits behind its own mutex; holding that lock
/// across the whole select-candidate-then-flip-occupancy sequence is what
/// keeps two concurrent allocations from claiming the same spot.
pub struct LotRegistry {
    config: GeneratorConfig,
    lots: Mutex<HashMap<String, Arc<Mutex<ParkingLot>>>>,
}

impl LotRegistry {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            lots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the lot for `lot_id`, generating and caching it on first use.
    pub fn get_or_create(&self, lot_id: &str) -> Arc<Mutex<ParkingLot>> {
        let mut lots = self.lots.lock().unwrap();
        lots.entry(lot_id.to_string())
            .or_insert_with(|| {
                let mut rng = match self.config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                let name = format!("Parking Lot {}", lot_id);
                let lot = generator::generate_lot_with_random_dims(
                    lot_id,
                    &name,
                    &self.config,
                    &mut rng,
                );
                log::info!(
                    "created lot {} ({} x {}, {} of {} spots available)",
                    lot_id,
                    lot.rows,
                    lot.cols,
                    lot.available_count(),
                    lot.total_spots()
                );
                Arc::new(Mutex::new(lot))
            })
            .clone()
    }

    /// Returns an already-generated lot.
    pub fn get(&self, lot_id: &str) -> Result<Arc<Mutex<ParkingLot>>, ParkingError> {
        let lots = self.lots.lock().unwrap();
        lots.get(lot_id)
            .cloned()
            .ok_or_else(|| ParkingError::LotNotFound(lot_id.to_string()))
    }

    /// Clears every occupancy flag of an existing lot.
    pub fn reset(&self, lot_id: &str) -> Result<(), ParkingError> {
        let lot = self.get(lot_id)?;
        lot.lock().unwrap().reset();
        log::info!("reset lot {}", lot_id);
        Ok(())
    }
}
