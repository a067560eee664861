//! Server state management
//!
//! One engine instance per named session. Sessions never share state, so a
//! single map behind a lock is all the coordination the server needs.

use cubetac_core::{GameState, HeuristicAi};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// Who plays O: a second human or the computer opponent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Pvp,
    #[default]
    Pve,
}

/// A single match: engine, opponent and mode
pub struct GameSession {
    pub game: GameState,
    pub ai: HeuristicAi,
    pub mode: GameMode,
}

impl GameSession {
    pub fn new(mode: GameMode, seed: Option<u64>) -> Self {
        let ai = match seed {
            Some(seed) => HeuristicAi::with_seed(seed),
            None => HeuristicAi::new(),
        };
        Self {
            game: GameState::new(),
            ai,
            mode,
        }
    }
}

/// Server-wide shared state
pub struct ServerState {
    pub sessions: RwLock<HashMap<String, GameSession>>,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
