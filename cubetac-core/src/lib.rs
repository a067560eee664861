//! CUBETAC Core - 3×3×3 tic-tac-toe match engine
//!
//! This crate provides the full game logic:
//! - Cube geometry (27 cells across three stacked 3×3 layers)
//! - Winning-line catalogs (per-layer and cross-layer)
//! - Match state machine (layer freeze, 2-of-3 scoring, instant wins, draw)
//! - Priority-cascade computer opponent
//!
//! Everything is synchronous and self-contained; rendering and input
//! belong to the callers (`cubetac-server`, `cubetac-cli`).

pub mod ai;
pub mod board;
pub mod game;
pub mod lines;

// Re-exports for convenient access
pub use ai::HeuristicAi;
pub use board::{Board, Cell, Player, CELL_COUNT, LAYER_CELLS, LAYER_COUNT};
pub use game::{GameResult, GameState, LayerOutcome, MoveError};
pub use lines::{Line, CROSS_LINES, CROSS_LINE_COUNT, LAYER_LINES, LINES_PER_LAYER};
