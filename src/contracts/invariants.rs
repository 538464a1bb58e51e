//! The invariants of a game state.

use rustc_hash::FxHashSet;

use super::Invariant;
use crate::board::Board;
use crate::core::config::SHARES_PER_CHAIN;
use crate::core::{Chain, Position, POSITION_COUNT};
use crate::state::GameState;

/// Deck, hands and board together cover every position exactly once.
pub struct TilePartition;

impl Invariant<GameState> for TilePartition {
    fn holds(state: &GameState) -> bool {
        let mut seen: FxHashSet<Position> = FxHashSet::default();
        let placed = state.board.placed().map(|(pos, _)| pos);
        let held = state.players.iter().flat_map(|p| p.tiles().iter().copied());
        let dealt = state.deck.iter().copied();
        for pos in placed.chain(held).chain(dealt) {
            if !seen.insert(pos) {
                return false;
            }
        }
        seen.len() == POSITION_COUNT
    }

    fn description() -> &'static str {
        "deck, hands and board must partition the tile set"
    }
}

/// Shares held plus shares in the pool total 25 for every chain.
pub struct StockConservation;

impl Invariant<GameState> for StockConservation {
    fn holds(state: &GameState) -> bool {
        Chain::ALL.iter().all(|&chain| {
            let held: u32 = state.players.iter().map(|p| p.shares(chain)).sum();
            held + state.pool[chain] == SHARES_PER_CHAIN
        })
    }

    fn description() -> &'static str {
        "held and pooled shares of each chain must total 25"
    }
}

/// Each chain's tiles form one orthogonally connected region.
pub struct ChainsConnected;

impl ChainsConnected {
    fn connected(board: &Board, chain: Chain) -> bool {
        let tiles = board.chain_positions(chain);
        let Some(&start) = tiles.first() else {
            return true;
        };
        let mut reached = FxHashSet::default();
        let mut frontier = vec![start];
        reached.insert(start);
        while let Some(pos) = frontier.pop() {
            for next in pos.adjacent() {
                if board.square_at(next).chain() == Some(chain) && reached.insert(next) {
                    frontier.push(next);
                }
            }
        }
        reached.len() == tiles.len()
    }
}

impl Invariant<Board> for ChainsConnected {
    fn holds(board: &Board) -> bool {
        Chain::ALL.iter().all(|&chain| Self::connected(board, chain))
    }

    fn description() -> &'static str {
        "each chain must occupy one connected region"
    }
}

impl Invariant<GameState> for ChainsConnected {
    fn holds(state: &GameState) -> bool {
        <Self as Invariant<Board>>::holds(&state.board)
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
