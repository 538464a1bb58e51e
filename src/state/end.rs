//! End-of-game detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::game_state::GameState;
use crate::board::MoveKind;
use crate::core::config::MAX_CHAIN_SIZE;

/// Why a game ended.
///
/// Variants are listed in checking priority: when several hold, the first
/// one is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameOverReason {
    /// Every chain on the board is safe.
    #[display("all chains on the board are safe")]
    AllChainsSafe,
    /// A chain reached the maximum size.
    #[display("a chain reached maximum size")]
    ChainTooBig,
    /// The player to move cannot place any tile.
    #[display("the current player has no playable tile")]
    NoPlayableTile,
    /// No tiles are left to deal.
    #[display("the tile deck is empty")]
    DeckEmpty,
    /// Every player has left the game.
    #[display("no players remain")]
    NoPlayers,
}

impl GameState {
    /// Check whether the game is over, and why.
    ///
    /// The playable-tile check only makes sense before the current player
    /// has moved, so it runs only when `at_turn_start` is set.
    #[must_use]
    pub fn game_over(&self, at_turn_start: bool) -> Option<GameOverReason> {
        let reason = self.end_reason(at_turn_start);
        if let Some(reason) = reason {
            debug!(%reason, "game over");
        }
        reason
    }

    fn end_reason(&self, at_turn_start: bool) -> Option<GameOverReason> {
        let in_play = self.board.chains_in_play();
        if !in_play.is_empty() && in_play.iter().all(|c| self.board.is_safe(*c)) {
            return Some(GameOverReason::AllChainsSafe);
        }
        if self.board.chain_sizes().values().any(|size| *size >= MAX_CHAIN_SIZE) {
            return Some(GameOverReason::ChainTooBig);
        }
        if at_turn_start {
            if let Some(player) = self.current_player() {
                let stuck = player
                    .tiles()
                    .iter()
                    .all(|tile| self.board.query(*tile) == MoveKind::Invalid);
                if stuck {
                    return Some(GameOverReason::NoPlayableTile);
                }
            }
        }
        if self.deck.is_empty() {
            return Some(GameOverReason::DeckEmpty);
        }
        if self.players.is_empty() {
            return Some(GameOverReason::NoPlayers);
        }
        None
    }
}
