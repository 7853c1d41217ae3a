use serde::{Deserialize, Serialize};

/// Grid cell address inside a parking lot.
///
/// Row 0 is the entrance side and rows grow toward the exit; columns grow
/// rightward. Neither coordinate is ever negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell: |delta row| + |delta col|.
    pub fn manhattan_distance(&self, other: CellPosition) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}
