//! Match state and move application
//!
//! `GameState` owns the board and is the single mutation path for both
//! human and computer moves. A move is applied in a fixed order: place the
//! mark, check the cross-layer catalog (an instant match win, recorded with
//! its line), otherwise check only the affected layer (a layer win freezes
//! that layer), then the 2-of-3 layer score, then the draw condition, and
//! only then hand the turn over.

use crate::board::{layer_of, Board, Cell, Player, CELL_COUNT, LAYER_COUNT};
use crate::lines::{Line, CROSS_LINES, LAYER_LINES};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Match result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Won(Player),
    Draw,
}

/// Why a move was rejected. Rejected moves change nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell index {0} is outside the cube")]
    OutOfRange(usize),
    #[error("cell {0} is already marked")]
    Occupied(usize),
    #[error("layer {0} is frozen")]
    LayerFrozen(usize),
    #[error("the match is already over")]
    GameOver,
}

/// Outcome of a single layer. Set at most once; a winner freezes the layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerOutcome {
    pub winner: Option<Player>,
    pub line: Option<Line>,
}

/// First line in `lines` fully held by one player
fn completed_line(board: &Board, lines: &[Line]) -> Option<(Player, Line)> {
    for &line in lines {
        let [a, b, c] = line;
        if let Some(mark) = board[a] {
            if board[b] == Some(mark) && board[c] == Some(mark) {
                return Some((mark, line));
            }
        }
    }
    None
}

/// Scan the cross-layer catalog for a completed triple
pub fn cross_layer_winner(board: &Board) -> Option<(Player, Line)> {
    completed_line(board, &CROSS_LINES)
}

/// Scan one layer's catalog for a completed triple
pub fn layer_winner(board: &Board, layer: usize) -> Option<(Player, Line)> {
    completed_line(board, &LAYER_LINES[layer])
}

// ============================================================================
// GAME STATE
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    layers: [LayerOutcome; LAYER_COUNT],
    current_player: Player,
    result: GameResult,
    /// Set only by a cross-layer instant win; a match taken on layers
    /// carries no line
    winning_line: Option<Line>,
}

impl GameState {
    /// Fresh match: empty cube, X to move
    pub fn new() -> Self {
        Self {
            board: [None; CELL_COUNT],
            layers: [LayerOutcome::default(); LAYER_COUNT],
            current_player: Player::X,
            result: GameResult::Ongoing,
            winning_line: None,
        }
    }

    /// Restore the fresh-match state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Read-only board snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at `index`; out-of-range reads as empty
    pub fn cell(&self, index: usize) -> Cell {
        self.board.get(index).copied().flatten()
    }

    /// All three layer outcomes
    pub fn layer_outcomes(&self) -> &[LayerOutcome; LAYER_COUNT] {
        &self.layers
    }

    /// Outcome of one layer
    pub fn layer_outcome(&self, layer: usize) -> LayerOutcome {
        self.layers[layer]
    }

    /// Winner of one layer, if any
    pub fn winner_at(&self, layer: usize) -> Option<Player> {
        self.layers[layer].winner
    }

    /// Whose turn it is
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Match result
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Line of a cross-layer instant win, if the match ended that way
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Whether the match has ended (won or drawn)
    pub fn is_terminal(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    /// Layers won by X and by O
    pub fn score(&self) -> (u8, u8) {
        let count =
            |p: Player| self.layers.iter().filter(|l| l.winner == Some(p)).count() as u8;
        (count(Player::X), count(Player::O))
    }

    /// An eligible cell is empty and sits in an unfrozen layer
    pub fn is_eligible(&self, index: usize) -> bool {
        index < CELL_COUNT
            && self.board[index].is_none()
            && self.layers[layer_of(index)].winner.is_none()
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(|cell| cell.is_some())
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    /// Place the current player's mark at `index` and advance the match
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.result != GameResult::Ongoing {
            return Err(MoveError::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        let layer = layer_of(index);
        if self.layers[layer].winner.is_some() {
            return Err(MoveError::LayerFrozen(layer));
        }
        if self.board[index].is_some() {
            return Err(MoveError::Occupied(index));
        }

        let mark = self.current_player;
        self.board[index] = Some(mark);

        // A line through the cube ends the match immediately; layer
        // bookkeeping for this move is skipped entirely.
        if let Some((winner, line)) = cross_layer_winner(&self.board) {
            self.result = GameResult::Won(winner);
            self.winning_line = Some(line);
            return Ok(());
        }

        // Only the affected layer can have been completed by this move
        if let Some((winner, line)) = layer_winner(&self.board, layer) {
            self.layers[layer] = LayerOutcome {
                winner: Some(winner),
                line: Some(line),
            };
        }

        let (x_layers, o_layers) = self.score();
        if x_layers >= 2 {
            self.result = GameResult::Won(Player::X);
        } else if o_layers >= 2 {
            self.result = GameResult::Won(Player::O);
        } else if self.is_full() {
            self.result = GameResult::Draw;
        } else {
            self.current_player = mark.opponent();
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
