// engine/allocation.rs
//
// Rule-based spot selection. This path never consults anything external and
// always succeeds given a non-empty candidate list, which makes it the
// guaranteed fallback behind the optional recommendation oracle.

use crate::config::EngineConfig;
use crate::error::ParkingError;
use crate::models::vehicle::VehicleProfile;
use crate::simulator::parking_lot::ParkingLot;
use crate::simulator::spot::{Spot, SpotType};

/// Type tags that always take large-class treatment.
const LARGE_CLASS_IDS: [&str; 2] = ["truck", "rv"];

/// Whether a vehicle gets the large-class rule: a large-class type tag, or
/// a footprint above the configured threshold.
pub fn is_large_class(vehicle: &VehicleProfile, config: &EngineConfig) -> bool {
    LARGE_CLASS_IDS.contains(&vehicle.id.as_str())
        || vehicle.footprint() > config.large_footprint_threshold
}

/// Picks the best available spot for the vehicle.
///
/// Large-class vehicles take an available large-type spot when one exists
/// and otherwise the spot closest to the exit; everything else takes the
/// spot closest to the entrance. Every tie resolves to the
/// lexicographically smallest spot id, so repeated runs over identical
/// state pick identically.
pub fn select_spot<'a>(
    lot: &'a ParkingLot,
    vehicle: &VehicleProfile,
    config: &EngineConfig,
) -> Result<&'a Spot, ParkingError> {
    let available = lot.available_spots();
    if available.is_empty() {
        return Err(ParkingError::NoAvailableSpot(lot.id.clone()));
    }

    let chosen = if is_large_class(vehicle, config) {
        available
            .iter()
            .copied()
            .filter(|spot| spot.spot_type == SpotType::Large)
            .min_by_key(|spot| (spot.distance_to_exit, spot.id.clone()))
            .or_else(|| {
                available
                    .iter()
                    .copied()
                    .min_by_key(|spot| (spot.distance_to_exit, spot.id.clone()))
            })
    } else {
        available
            .iter()
            .copied()
            .min_by_key(|spot| (spot.distance_to_entrance, spot.id.clone()))
    };

    // The emptiness check above guarantees a winner.
    Ok(chosen.unwrap())
}

/// Runs the selection rule and flips the winner's occupancy flag.
///
/// Callers must hold the lot exclusively for the whole call so the decision
/// and the flip stay atomic.
pub fn claim_spot(
    lot: &mut ParkingLot,
    vehicle: &VehicleProfile,
    config: &EngineConfig,
) -> Result<Spot, ParkingError> {
    let spot_id = select_spot(lot, vehicle, config)?.id.clone();
    lot.set_occupied(&spot_id, true)?;
    Ok(lot.spot(&spot_id)?.clone())
}

/// Justification for a rule-based choice, naming the vehicle and the spot.
pub fn fallback_reasoning(vehicle: &VehicleProfile, spot: &Spot, large_class: bool) -> String {
    let type_note = match spot.spot_type {
        SpotType::Standard => String::new(),
        other => format!(" ({} spot)", other.label()),
    };
    if large_class {
        format!(
            "Recommended spot {}{} for your {}: positioned for an easy exit with a large vehicle.",
            spot.id, type_note, vehicle.name
        )
    } else {
        format!(
            "Recommended spot {}{} for your {}: the closest available spot to the entrance.",
            spot.id, type_note, vehicle.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::simulator::generator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn empty_ratio_config() -> GeneratorConfig {
        GeneratorConfig {
            occupancy_ratio: 0.0,
            standard_ratio: 1.0,
            ..GeneratorConfig::default()
        }
    }

    /// 3x3 lot, entrance (0,1), exit (2,1), all seven spots free.
    fn tiny_lot() -> ParkingLot {
        let mut rng = StdRng::seed_from_u64(0);
        generator::generate_lot("parking_1", "Lot 1", 3, 3, &empty_ratio_config(), &mut rng)
    }

    fn sedan() -> VehicleProfile {
        VehicleProfile::new("sedan", "Sedan", 1.8, 4.5, 1.5)
    }

    fn truck() -> VehicleProfile {
        VehicleProfile::new("truck", "Truck", 2.5, 7.0, 2.8)
    }

    #[test]
    fn sedan_takes_the_entrance_proximity_tie_by_smallest_id() {
        let lot = tiny_lot();
        // A1, A3 and B2 all sit one step from the entrance; A1 sorts first.
        let spot = select_spot(&lot, &sedan(), &EngineConfig::default()).unwrap();
        assert_eq!(spot.distance_to_entrance, 1);
        assert_eq!(spot.id, "A1");
    }

    #[test]
    fn truck_without_large_spots_takes_exit_proximity() {
        let lot = tiny_lot();
        // B2, C1 and C3 all sit one step from the exit; B2 sorts first.
        let spot = select_spot(&lot, &truck(), &EngineConfig::default()).unwrap();
        assert_eq!(spot.distance_to_exit, 1);
        assert_eq!(spot.id, "B2");
    }

    #[test]
    fn truck_prefers_a_large_spot_even_far_from_the_exit() {
        let mut lot = tiny_lot();
        let far_from_exit = lot.spots.get_mut("A1").unwrap();
        far_from_exit.spot_type = SpotType::Large;
        let spot = select_spot(&lot, &truck(), &EngineConfig::default()).unwrap();
        assert_eq!(spot.id, "A1");
    }

    #[test]
    fn oversized_footprint_is_large_class_without_the_type_tag() {
        let config = EngineConfig::default();
        let rv_sized = VehicleProfile::new("camper", "Camper", 2.4, 6.5, 2.9);
        assert!(is_large_class(&rv_sized, &config));
        assert!(is_large_class(&truck(), &config));
        assert!(!is_large_class(&sedan(), &config));
        // The stock pickup stays small-class under the default threshold.
        let pickup = VehicleProfile::new("pickup", "Pickup Truck", 2.1, 5.5, 1.9);
        assert!(!is_large_class(&pickup, &config));
    }

    #[test]
    fn claim_flips_exactly_one_flag() {
        let mut lot = tiny_lot();
        let spot = claim_spot(&mut lot, &sedan(), &EngineConfig::default()).unwrap();
        assert!(spot.is_occupied);
        assert_eq!(lot.available_count(), lot.total_spots() - 1);
        assert!(lot.spot(&spot.id).unwrap().is_occupied);
    }

    #[test]
    fn full_lot_fails_without_mutation() {
        let mut lot = tiny_lot();
        for id in lot.spots.keys().cloned().collect::<Vec<_>>() {
            lot.set_occupied(&id, true).unwrap();
        }
        let before = lot.clone();
        let err = claim_spot(&mut lot, &sedan(), &EngineConfig::default()).unwrap_err();
        assert_eq!(err, ParkingError::NoAvailableSpot("parking_1".to_string()));
        assert_eq!(err.http_status(), 400);
        for (id, spot) in &before.spots {
            assert_eq!(spot.is_occupied, lot.spot(id).unwrap().is_occupied);
        }
    }

    #[test]
    fn allocation_never_returns_an_occupied_spot() {
        let mut lot = tiny_lot();
        let mut seen = Vec::new();
        for _ in 0..lot.total_spots() {
            let spot = claim_spot(&mut lot, &sedan(), &EngineConfig::default()).unwrap();
            assert!(!seen.contains(&spot.id));
            seen.push(spot.id);
        }
        assert!(select_spot(&lot, &sedan(), &EngineConfig::default()).is_err());
    }

    #[test]
    fn selection_is_reproducible_across_runs() {
        let first = select_spot(&tiny_lot(), &sedan(), &EngineConfig::default())
            .unwrap()
            .id
            .clone();
        for _ in 0..10 {
            let again = select_spot(&tiny_lot(), &sedan(), &EngineConfig::default())
                .unwrap()
                .id
                .clone();
            assert_eq!(first, again);
        }
    }
}
