// engine/navigation.rs

use crate::simulator::position::CellPosition;
use crate::simulator::spot::{Spot, SpotType};

/// Composes turn-by-turn text from a start cell to a target spot.
///
/// Rows are covered before columns, singular phrasing at a difference of
/// one, and a caution line pads short routes. Total function: any pair of
/// cells yields between two and five instructions.
pub fn navigation_instructions(start: CellPosition, target: &Spot) -> Vec<String> {
    let mut instructions = vec!["Start from your current position".to_string()];

    if target.row > start.row {
        let diff = target.row - start.row;
        instructions.push(if diff == 1 {
            "Drive forward 1 row".to_string()
        } else {
            format!("Drive forward {} rows", diff)
        });
    } else if target.row < start.row {
        let diff = start.row - target.row;
        instructions.push(if diff == 1 {
            "Drive backward 1 row".to_string()
        } else {
            format!("Drive backward {} rows", diff)
        });
    }

    if target.col > start.col {
        let diff = target.col - start.col;
        instructions.push(if diff == 1 {
            "Drive right 1 column".to_string()
        } else {
            format!("Drive right {} columns", diff)
        });
    } else if target.col < start.col {
        let diff = start.col - target.col;
        instructions.push(if diff == 1 {
            "Drive left 1 column".to_string()
        } else {
            format!("Drive left {} columns", diff)
        });
    }

    instructions.push(match target.spot_type {
        SpotType::Standard => format!("Your target spot is {}", target.id),
        other => format!("Your target spot is {} ({} spot)", target.id, other.label()),
    });

    if instructions.len() < 4 {
        instructions.push("Drive carefully and watch for surrounding vehicles".to_string());
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot_at(row: usize, col: usize, spot_type: SpotType) -> Spot {
        Spot::new(
            CellPosition::new(row, col),
            spot_type,
            CellPosition::new(0, 1),
            CellPosition::new(2, 1),
        )
    }

    #[test]
    fn route_with_both_axes_needs_no_caution_line() {
        let target = spot_at(2, 0, SpotType::Disabled);
        let instructions = navigation_instructions(CellPosition::new(0, 1), &target);
        assert_eq!(
            instructions,
            vec![
                "Start from your current position".to_string(),
                "Drive forward 2 rows".to_string(),
                "Drive left 1 column".to_string(),
                "Your target spot is C1 (disabled spot)".to_string(),
            ]
        );
    }

    #[test]
    fn same_cell_route_gets_the_caution_line() {
        let target = spot_at(1, 1, SpotType::Standard);
        let instructions = navigation_instructions(CellPosition::new(1, 1), &target);
        assert_eq!(
            instructions,
            vec![
                "Start from your current position".to_string(),
                "Your target spot is B2".to_string(),
                "Drive carefully and watch for surrounding vehicles".to_string(),
            ]
        );
    }

    #[test]
    fn backward_and_right_phrasing_is_singular_at_one() {
        let target = spot_at(0, 2, SpotType::EvCharging);
        let instructions = navigation_instructions(CellPosition::new(1, 1), &target);
        assert_eq!(
            instructions,
            vec![
                "Start from your current position".to_string(),
                "Drive backward 1 row".to_string(),
                "Drive right 1 column".to_string(),
                "Your target spot is A3 (EV charging spot)".to_string(),
            ]
        );
    }

    #[test]
    fn instruction_count_stays_within_bounds() {
        for start_row in 0..3 {
            for start_col in 0..3 {
                for target_row in 0..3 {
                    for target_col in 0..3 {
                        let target = spot_at(target_row, target_col, SpotType::Standard);
                        let instructions = navigation_instructions(
                            CellPosition::new(start_row, start_col),
                            &target,
                        );
                        assert!(
                            (2..=5).contains(&instructions.len()),
                            "{} instructions from ({},{}) to ({},{})",
                            instructions.len(),
                            start_row,
                            start_col,
                            target_row,
                            target_col
                        );
                    }
                }
            }
        }
    }
}
