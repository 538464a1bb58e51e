//! One node of the game tree: a state plus the options leaving it.

use tracing::{debug, instrument};

use super::moves::Moves;
use super::sellback::SellbackOptions;
use crate::core::{Chain, GameRng, Move, Position, Purchase, Sellbacks, TileMove};
use crate::error::StateError;
use crate::state::GameState;

/// A game state seen as a node with enumerable successors.
///
/// Every transition works on a copy, so a tree can be explored along many
/// branches without disturbing its own state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameTree {
    state: GameState,
}

impl GameTree {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Every legal placement from the current player's hand.
    ///
    /// For each held tile, in order, every chain argument is tried and then
    /// no chain at all.
    #[must_use]
    pub fn tile_moves(&self) -> Vec<TileMove> {
        let Some(player) = self.state.current_player() else {
            return Vec::new();
        };
        player
            .tiles()
            .iter()
            .flat_map(|&tile| {
                Chain::ALL
                    .iter()
                    .map(move |&chain| TileMove::with_chain(tile, chain))
                    .chain(std::iter::once(TileMove::plain(tile)))
            })
            .filter(|m| self.state.is_valid_move(m.tile, m.chain))
            .collect()
    }

    /// Sell-back assignments available after `tile_move`.
    ///
    /// For a merge, every player picks any subset of the acquired chains;
    /// otherwise the only assignment is the empty one.
    pub fn sellback_options(&self, tile_move: TileMove) -> SellbackOptions {
        let board = self.state.board();
        match tile_move.chain {
            Some(acquirer) if board.valid_merge(tile_move.tile, acquirer) => {
                let acquirees = board.acquirees(tile_move.tile, acquirer);
                let players = self.state.players().map(|p| p.name().to_string()).collect();
                SellbackOptions::new(players, &acquirees)
            }
            _ => SellbackOptions::none(),
        }
    }

    /// Purchases the mover could make after `tile_move` and `sellbacks`.
    ///
    /// Fails if the placement or the sell-backs themselves fail.
    pub fn share_purchase_options(
        &self,
        tile_move: TileMove,
        sellbacks: &Sellbacks,
    ) -> Result<Vec<Purchase>, StateError> {
        let mut scratch = self.state.clone();
        scratch.place_a_tile(tile_move.tile, tile_move.chain)?;
        apply_sellbacks(&mut scratch, sellbacks, &self.state)?;
        Ok(Purchase::catalog()
            .filter(|p| scratch.is_valid_buy(p.shares()))
            .collect())
    }

    /// Candidate tiles to deal at the end of the turn: the whole deck.
    #[must_use]
    pub fn next_tiles(&self) -> Vec<Position> {
        self.state.deck().iter().copied().collect()
    }

    /// Pick a next tile uniformly from the deck.
    pub fn random_next_tile(&self, rng: &mut GameRng) -> Option<Position> {
        let tiles = self.next_tiles();
        rng.pick(&tiles).copied()
    }

    /// Lazy enumeration of complete moves from this node.
    pub fn moves(&self) -> Moves<'_> {
        Moves::new(self)
    }

    /// Play a full turn on a copy of the state.
    ///
    /// Sell-backs and the merger payout are priced on the state before the
    /// placement.
    #[instrument(level = "debug", skip(self, tile_move, sellbacks, purchase), fields(%tile_move, %purchase))]
    pub fn apply(
        &self,
        tile_move: TileMove,
        sellbacks: &Sellbacks,
        purchase: &Purchase,
        next_tile: Position,
    ) -> Result<GameTree, StateError> {
        let before = &self.state;
        let mut next = before.clone();

        next.place_a_tile(tile_move.tile, tile_move.chain)?;
        apply_sellbacks(&mut next, sellbacks, before)?;
        let allowed = next.is_valid_buy(purchase.shares());
        for &chain in purchase.shares() {
            next.buy_stock(chain)?;
        }
        if !allowed {
            return Err(StateError::IllegalPurchase(purchase.clone()));
        }
        next.merge_payout(tile_move.tile, tile_move.chain, before)?;
        next.done(next_tile)?;

        debug!(%next_tile, "applied move");
        Ok(GameTree::new(next))
    }

    /// [`GameTree::apply`] for a bundled move.
    pub fn apply_move(&self, mv: &Move) -> Result<GameTree, StateError> {
        self.apply(mv.tile, &mv.sellbacks, &mv.purchase, mv.next_tile)
    }
}

impl From<GameState> for GameTree {
    fn from(state: GameState) -> Self {
        Self::new(state)
    }
}

fn apply_sellbacks(
    state: &mut GameState,
    sellbacks: &Sellbacks,
    reference: &GameState,
) -> Result<(), StateError> {
    for (name, chains) in sellbacks.iter() {
        if !chains.is_empty() {
            state.sellback(name, chains, reference)?;
        }
    }
    Ok(())
}
