//! Advisory legality checks for players and for the code refereeing them.
//!
//! Nothing here mutates a state. Strategies use these helpers to pick a
//! move; the referee uses [`validate_turn`] to catch an illegal one before
//! applying it.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::board::MoveKind;
use crate::core::{Chain, Purchase, Sellbacks, TileMove};
use crate::error::StateError;
use crate::state::{GameOverReason, GameState};
use crate::tree::GameTree;

/// The first rule a proposed turn breaks.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum Violation {
    /// The mover does not hold the tile.
    #[display("tile {_0} is not in the mover's hand")]
    TileNotHeld(#[error(not(source))] TileMove),

    /// The tile cannot be placed with this chain argument. For merges the
    /// chain must be one of the largest adjacent chains.
    #[display("tile move {_0} is not legal")]
    IllegalTileMove(#[error(not(source))] TileMove),

    /// A sell-back names an unknown player or a chain that is not acquired.
    #[display("sell-backs do not match the merge")]
    IllegalSellback,

    /// The purchase is not available after the placement and sell-backs.
    #[display("purchase of {_0} is not allowed")]
    IllegalPurchase(#[error(not(source))] Purchase),

    /// Simulating the turn failed.
    #[display("{_0}")]
    #[from]
    State(StateError),
}

/// Every placement the current player may make, with what it does.
///
/// Foundings are listed once per chain not in play, merges once per
/// acquirer, in tile order.
#[must_use]
pub fn valid_tile_moves(state: &GameState) -> Vec<(TileMove, MoveKind)> {
    let Some(player) = state.current_player() else {
        return Vec::new();
    };
    let board = state.board();
    let mut moves = Vec::new();
    for &tile in player.tiles() {
        let kind = board.query(tile);
        match kind {
            MoveKind::Invalid => {}
            MoveKind::Singleton | MoveKind::Grow => moves.push((TileMove::plain(tile), kind)),
            MoveKind::Found => moves.extend(
                board
                    .chains_not_in_play()
                    .into_iter()
                    .map(|chain| (TileMove::with_chain(tile, chain), kind)),
            ),
            MoveKind::Merge => moves.extend(
                board
                    .acquirers(tile)
                    .into_iter()
                    .map(|chain| (TileMove::with_chain(tile, chain), kind)),
            ),
        }
    }
    moves
}

/// Purchases the current player could make right now.
#[must_use]
pub fn valid_buy_orders(state: &GameState) -> Vec<Purchase> {
    Purchase::catalog()
        .filter(|p| state.is_valid_buy(p.shares()))
        .collect()
}

/// Check that `sellbacks` fits `tile_move`.
///
/// Without a merge nobody may sell anything. With one, each entry must name
/// a player in the game and only chains the merge acquires, each once.
#[must_use]
pub fn is_valid_sellback(state: &GameState, tile_move: TileMove, sellbacks: &Sellbacks) -> bool {
    let board = state.board();
    let acquirees = match tile_move.chain {
        Some(acquirer) if board.valid_merge(tile_move.tile, acquirer) => {
            board.acquirees(tile_move.tile, acquirer)
        }
        _ => return sellbacks.is_empty(),
    };

    let mut seen_players = FxHashSet::default();
    sellbacks.iter().all(|(name, chains)| {
        let mut seen_chains: FxHashSet<Chain> = FxHashSet::default();
        seen_players.insert(name)
            && state.player(name).is_some()
            && chains
                .iter()
                .all(|chain| acquirees.contains(chain) && seen_chains.insert(*chain))
    })
}

/// Check a proposed turn (everything but the dealt tile) against the rules.
pub fn validate_turn(
    tree: &GameTree,
    tile_move: TileMove,
    sellbacks: &Sellbacks,
    purchase: &Purchase,
) -> Result<(), Violation> {
    let state = tree.state();
    let holds = state
        .current_player()
        .is_some_and(|p| p.holds_tile(tile_move.tile));
    if !holds {
        return Err(Violation::TileNotHeld(tile_move));
    }
    if !valid_tile_moves(state).iter().any(|(m, _)| *m == tile_move) {
        return Err(Violation::IllegalTileMove(tile_move));
    }
    if !is_valid_sellback(state, tile_move, sellbacks) {
        return Err(Violation::IllegalSellback);
    }
    if !tree.share_purchase_options(tile_move, sellbacks)?.contains(purchase) {
        return Err(Violation::IllegalPurchase(purchase.clone()));
    }
    Ok(())
}

/// Check whether the game is over. See [`GameState::game_over`].
#[must_use]
pub fn is_game_over(state: &GameState, at_turn_start: bool) -> Option<GameOverReason> {
    let reason = state.game_over(at_turn_start);
    if reason.is_none() {
        debug!(players = state.player_count(), deck = state.deck().len(), "game continues");
    }
    reason
}
