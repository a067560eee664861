//! Winning line catalogs
//!
//! Two disjoint sets of triples, fixed for the life of the process:
//! - 8 lines inside each layer (3 rows, 3 columns, 2 diagonals)
//! - 25 lines crossing all three layers (9 verticals, 6 XZ-plane
//!   diagonals, 6 YZ-plane diagonals, 4 space diagonals)
//!
//! Generation order is part of the contract: the opponent heuristic breaks
//! ties by first match in catalog order, and renderers highlight lines by
//! the indices stored here.

use crate::board::{LAYER_CELLS, LAYER_COUNT};

/// An ordered triple of cell indices; a win when all three hold one mark
pub type Line = [usize; 3];

/// Lines inside a single layer
pub const LINES_PER_LAYER: usize = 8;

/// Lines spanning all three layers
pub const CROSS_LINE_COUNT: usize = 25;

const fn layer_lines(z: usize) -> [Line; LINES_PER_LAYER] {
    let o = z * LAYER_CELLS;
    [
        // Rows
        [o, o + 1, o + 2],
        [o + 3, o + 4, o + 5],
        [o + 6, o + 7, o + 8],
        // Columns
        [o, o + 3, o + 6],
        [o + 1, o + 4, o + 7],
        [o + 2, o + 5, o + 8],
        // Diagonals
        [o, o + 4, o + 8],
        [o + 2, o + 4, o + 6],
    ]
}

const fn cross_lines() -> [Line; CROSS_LINE_COUNT] {
    let mut lines = [[0usize; 3]; CROSS_LINE_COUNT];
    let mut n = 0;

    // Verticals: one per (x, y) column of the cube
    let mut x = 0;
    while x < 3 {
        let mut y = 0;
        while y < 3 {
            let base = y * 3 + x;
            lines[n] = [base, LAYER_CELLS + base, 2 * LAYER_CELLS + base];
            n += 1;
            y += 1;
        }
        x += 1;
    }

    // XZ-plane diagonals (constant y), forward then backward
    let mut y = 0;
    while y < 3 {
        lines[n] = [y * 3, LAYER_CELLS + y * 3 + 1, 2 * LAYER_CELLS + y * 3 + 2];
        lines[n + 1] = [y * 3 + 2, LAYER_CELLS + y * 3 + 1, 2 * LAYER_CELLS + y * 3];
        n += 2;
        y += 1;
    }

    // YZ-plane diagonals (constant x), forward then backward
    let mut x = 0;
    while x < 3 {
        lines[n] = [x, LAYER_CELLS + 3 + x, 2 * LAYER_CELLS + 6 + x];
        lines[n + 1] = [6 + x, LAYER_CELLS + 3 + x, 2 * LAYER_CELLS + x];
        n += 2;
        x += 1;
    }

    // Space diagonals, corner to opposite corner through the cube center
    lines[n] = [0, 13, 26];
    lines[n + 1] = [2, 13, 24];
    lines[n + 2] = [6, 13, 20];
    lines[n + 3] = [8, 13, 18];

    lines
}

/// Per-layer catalogs, indexed by layer
pub static LAYER_LINES: [[Line; LINES_PER_LAYER]; LAYER_COUNT] =
    [layer_lines(0), layer_lines(1), layer_lines(2)];

/// Cross-layer catalog
pub static CROSS_LINES: [Line; CROSS_LINE_COUNT] = cross_lines();
