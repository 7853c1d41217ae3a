// simulator/generator.rs
//
// Populates a fresh parking lot: picks dimensions, places the entrance and
// exit facing each other in the middle column, fills every other cell with a
// spot, pre-occupies a fixed share of them and sprinkles in special spot
// types. Type assignment draws from the caller's random source so a pinned
// seed reproduces the exact layout.

use crate::config::GeneratorConfig;
use crate::simulator::parking_lot::ParkingLot;
use crate::simulator::position::CellPosition;
use crate::simulator::spot::{Spot, SpotType};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;

/// Generates a lot with the given dimensions.
///
/// The occupancy budget is `floor(occupancy_ratio * spot_count)` and is
/// spent one spot at a time in row-major generation order, so occupancy
/// needs no randomness at all. Spot types roll `standard_ratio` for a
/// standard spot and otherwise pick uniformly from the special types.
pub fn generate_lot<R: Rng + ?Sized>(
    lot_id: &str,
    name: &str,
    rows: usize,
    cols: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> ParkingLot {
    assert!(rows >= 2, "a lot needs at least two rows for distinct entrance and exit");
    assert!(cols >= 1, "a lot needs at least one column");

    let entrance = CellPosition::new(0, cols / 2);
    let exit = CellPosition::new(rows - 1, cols / 2);

    let spot_count = rows * cols - 2;
    let occupancy_ratio = config.occupancy_ratio.clamp(0.0, 1.0);
    let standard_ratio = config.standard_ratio.clamp(0.0, 1.0);
    let mut occupied_budget = (occupancy_ratio * spot_count as f64).floor() as usize;

    let mut spots = HashMap::with_capacity(spot_count);
    for row in 0..rows {
        for col in 0..cols {
            let position = CellPosition::new(row, col);
            if position == entrance || position == exit {
                continue;
            }

            let spot_type = if rng.random_bool(standard_ratio) {
                SpotType::Standard
            } else {
                *SpotType::SPECIAL.choose(rng).unwrap()
            };

            let mut spot = Spot::new(position, spot_type, entrance, exit);
            if occupied_budget > 0 {
                spot.is_occupied = true;
                occupied_budget -= 1;
            }
            spots.insert(spot.id.clone(), spot);
        }
    }

    log::debug!(
        "generated lot {} ({} x {}, {} spots, {} available)",
        lot_id,
        rows,
        cols,
        spots.len(),
        spots.values().filter(|spot| !spot.is_occupied).count()
    );

    ParkingLot {
        id: lot_id.to_string(),
        name: name.to_string(),
        rows,
        cols,
        entrance,
        exit,
        spots,
    }
}

/// Generates a lot with dimensions drawn from the configured ranges.
pub fn generate_lot_with_random_dims<R: Rng + ?Sized>(
    lot_id: &str,
    name: &str,
    config: &GeneratorConfig,
    rng: &mut R,
) -> ParkingLot {
    let rows = rng.random_range(config.row_range.0..=config.row_range.1);
    let cols = rng.random_range(config.col_range.0..=config.col_range.1);
    generate_lot(lot_id, name, rows, cols, config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::spot::spot_id;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lot_holds_exactly_grid_minus_entrance_and_exit() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let lot = generate_lot("parking_1", "Lot 1", 6, 8, &config, &mut rng);
        assert_eq!(lot.total_spots(), 6 * 8 - 2);
        assert_eq!(lot.entrance, CellPosition::new(0, 4));
        assert_eq!(lot.exit, CellPosition::new(5, 4));
        assert!(!lot.spots.contains_key(&spot_id(lot.entrance)));
        assert!(!lot.spots.contains_key(&spot_id(lot.exit)));
    }

    #[test]
    fn every_spot_distance_matches_the_invariant() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let lot = generate_lot("parking_1", "Lot 1", 10, 12, &config, &mut rng);
        for spot in lot.spots.values() {
            assert_eq!(
                spot.distance_to_entrance,
                spot.position().manhattan_distance(lot.entrance),
                "entrance distance of {}",
                spot.id
            );
            assert_eq!(
                spot.distance_to_exit,
                spot.position().manhattan_distance(lot.exit),
                "exit distance of {}",
                spot.id
            );
        }
    }

    #[test]
    fn occupancy_count_is_the_floor_of_the_ratio() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let lot = generate_lot("parking_1", "Lot 1", 7, 9, &config, &mut rng);
        let spot_count = 7 * 9 - 2;
        let expected = (0.7 * spot_count as f64).floor() as usize;
        let occupied = lot.spots.values().filter(|spot| spot.is_occupied).count();
        assert_eq!(occupied, expected);
    }

    #[test]
    fn occupancy_ratio_is_tunable() {
        let config = GeneratorConfig {
            occupancy_ratio: 0.0,
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let lot = generate_lot("parking_1", "Lot 1", 6, 8, &config, &mut rng);
        assert_eq!(lot.available_count(), lot.total_spots());
    }

    #[test]
    fn pinned_seed_reproduces_the_exact_layout() {
        let config = GeneratorConfig::default();
        let mut first_rng = StdRng::seed_from_u64(99);
        let mut second_rng = StdRng::seed_from_u64(99);
        let first = generate_lot("parking_1", "Lot 1", 8, 10, &config, &mut first_rng);
        let second = generate_lot("parking_1", "Lot 1", 8, 10, &config, &mut second_rng);
        for (id, spot) in &first.spots {
            let twin = &second.spots[id];
            assert_eq!(spot.spot_type, twin.spot_type);
            assert_eq!(spot.is_occupied, twin.is_occupied);
        }
    }

    #[test]
    fn random_dims_stay_in_the_configured_ranges() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let lot = generate_lot_with_random_dims("parking_1", "Lot 1", &config, &mut rng);
            assert!((6..=10).contains(&lot.rows));
            assert!((8..=12).contains(&lot.cols));
        }
    }
}
