//! Cube geometry and cell addressing

use serde::{Deserialize, Serialize};

/// Cells per layer (3×3)
pub const LAYER_CELLS: usize = 9;

/// Number of stacked layers
pub const LAYER_COUNT: usize = 3;

/// Total cells in the cube
pub const CELL_COUNT: usize = LAYER_CELLS * LAYER_COUNT;

/// Player mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X = 0,
    O = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell: empty or marked
pub type Cell = Option<Player>;

/// The full cube. Index `i = x + y*3 + z*9`, with `z` selecting the layer.
pub type Board = [Cell; CELL_COUNT];

/// Cell index from cube coordinates (each in 0..3)
pub const fn index_of(x: usize, y: usize, z: usize) -> usize {
    x + y * 3 + z * LAYER_CELLS
}

/// Layer containing a cell index
pub const fn layer_of(index: usize) -> usize {
    index / LAYER_CELLS
}

/// Cube coordinates `(x, y, z)` of a cell index
pub const fn coords_of(index: usize) -> (usize, usize, usize) {
    (index % 3, (index / 3) % 3, index / LAYER_CELLS)
}

/// Check if an index addresses a cell of the cube
pub const fn in_cube(index: usize) -> bool {
    index < CELL_COUNT
}
