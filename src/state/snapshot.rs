//! Transmission form of a game state.
//!
//! A snapshot carries only what a remote party needs: the board as position
//! lists and the players in turn order. Deck and pool are rebuilt on load
//! from the tile-partition and stock-conservation rules, so a snapshot can
//! never describe a state that breaks them.

use serde::{Deserialize, Serialize};

use super::game_state::GameState;
use super::player::Player;
use crate::board::{Board, BoardSnapshot};
use crate::error::StateError;

/// Board plus players in turn order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub board: BoardSnapshot,
    pub players: Vec<Player>,
}

impl StateSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StateError> {
        bincode::serialize(self).map_err(|e| StateError::Codec(e.to_string()))
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        bincode::deserialize(bytes).map_err(|e| StateError::Codec(e.to_string()))
    }
}

impl GameState {
    /// Capture this state for transmission.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            board: self.board.snapshot(),
            players: self.players.iter().cloned().collect(),
        }
    }

    /// Rebuild a state from a snapshot.
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Result<Self, StateError> {
        let board = Board::from_snapshot(&snapshot.board)?;
        GameState::from_parts(snapshot.players.clone(), board)
    }
}
