use crate::simulator::position::CellPosition;
use serde::{Deserialize, Serialize};

/// Spot categories a lot can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotType {
    Standard,
    Disabled,
    EvCharging,
    Compact,
    Large,
}

impl SpotType {
    /// The non-standard types, used when the generator rolls a special spot.
    pub const SPECIAL: [SpotType; 4] = [
        SpotType::Disabled,
        SpotType::EvCharging,
        SpotType::Compact,
        SpotType::Large,
    ];

    /// Rider-facing label used in navigation and reasoning text.
    pub fn label(&self) -> &'static str {
        match self {
            SpotType::Standard => "standard",
            SpotType::Disabled => "disabled",
            SpotType::EvCharging => "EV charging",
            SpotType::Compact => "compact",
            SpotType::Large => "large vehicle",
        }
    }
}

/// A single parking cell, occupiable by one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spot {
    /// Stable positional id: row letter plus 1-based column ("A1", "C7").
    pub id: String,
    pub row: usize,
    pub col: usize,
    #[serde(rename = "type")]
    pub spot_type: SpotType,
    pub is_occupied: bool,
    /// Manhattan distance to the lot entrance. Entrance and exit never move
    /// after creation, so this is computed once.
    pub distance_to_entrance: usize,
    /// Manhattan distance to the lot exit.
    pub distance_to_exit: usize,
}

impl Spot {
    pub fn new(
        position: CellPosition,
        spot_type: SpotType,
        entrance: CellPosition,
        exit: CellPosition,
    ) -> Self {
        Self {
            id: spot_id(position),
            row: position.row,
            col: position.col,
            spot_type,
            is_occupied: false,
            distance_to_entrance: position.manhattan_distance(entrance),
            distance_to_exit: position.manhattan_distance(exit),
        }
    }

    pub fn position(&self) -> CellPosition {
        CellPosition::new(self.row, self.col)
    }
}

/// Derives the stable spot id from a grid position.
pub fn spot_id(position: CellPosition) -> String {
    let row_letter = (b'A' + position.row as u8) as char;
    format!("{}{}", row_letter, position.col + 1)
}
