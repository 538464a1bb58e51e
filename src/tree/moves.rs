//! Lazy enumeration of complete moves.
//!
//! A move is a tile move, a sell-back assignment, a purchase and a next
//! tile. [`Moves`] walks that cross product one level at a time, so only the
//! options of the branch being visited are ever held in memory. Each level
//! can be narrowed by a predicate; a predicate can only drop options, never
//! add them.
//!
//! ```
//! use rust_acquire::state::GameState;
//! use rust_acquire::tree::GameTree;
//!
//! let tree = GameTree::new(GameState::new(["ann", "bob", "cat"]).unwrap());
//! let first_row = tree
//!     .moves()
//!     .filter_next_tiles(|tile| tile.row() == 'B')
//!     .iter()
//!     .count();
//! assert_eq!(first_row, 6 * 6);
//! ```

use std::rc::Rc;

use tracing::warn;

use super::game_tree::GameTree;
use crate::core::{Move, Position, Purchase, Sellbacks, TileMove};
use crate::error::StateError;

type Filter<'t, T> = Box<dyn Fn(&T) -> bool + 't>;

/// Enumeration of the moves leaving a [`GameTree`], with optional filters.
pub struct Moves<'t> {
    tree: &'t GameTree,
    tiles: Filter<'t, TileMove>,
    sellbacks: Filter<'t, Sellbacks>,
    purchases: Filter<'t, Purchase>,
    next_tiles: Filter<'t, Position>,
}

impl<'t> Moves<'t> {
    pub fn new(tree: &'t GameTree) -> Self {
        Self {
            tree,
            tiles: Box::new(|_| true),
            sellbacks: Box::new(|_| true),
            purchases: Box::new(|_| true),
            next_tiles: Box::new(|_| true),
        }
    }

    pub fn filter_tiles(mut self, keep: impl Fn(&TileMove) -> bool + 't) -> Self {
        self.tiles = Box::new(keep);
        self
    }

    pub fn filter_sellbacks(mut self, keep: impl Fn(&Sellbacks) -> bool + 't) -> Self {
        self.sellbacks = Box::new(keep);
        self
    }

    pub fn filter_purchases(mut self, keep: impl Fn(&Purchase) -> bool + 't) -> Self {
        self.purchases = Box::new(keep);
        self
    }

    pub fn filter_next_tiles(mut self, keep: impl Fn(&Position) -> bool + 't) -> Self {
        self.next_tiles = Box::new(keep);
        self
    }

    /// Iterate over every move, tile moves outermost and next tiles
    /// innermost. Each call starts over from the tree's state.
    pub fn iter(&self) -> Box<dyn Iterator<Item = Move> + '_> {
        let next_tiles: Rc<[Position]> = self
            .tree
            .next_tiles()
            .into_iter()
            .filter(|tile| (self.next_tiles)(tile))
            .collect();

        let moves = self
            .tree
            .tile_moves()
            .into_iter()
            .filter(move |tile_move| (self.tiles)(tile_move))
            .flat_map(move |tile_move| {
                let next_tiles = Rc::clone(&next_tiles);
                self.tree
                    .sellback_options(tile_move)
                    .filter(move |sellbacks| (self.sellbacks)(sellbacks))
                    .flat_map(move |sellbacks| {
                        let next_tiles = Rc::clone(&next_tiles);
                        self.purchase_options(tile_move, &sellbacks)
                            .into_iter()
                            .flat_map(move |purchase| {
                                let sellbacks = sellbacks.clone();
                                let next_tiles = Rc::clone(&next_tiles);
                                (0..next_tiles.len()).map(move |i| Move {
                                    tile: tile_move,
                                    sellbacks: sellbacks.clone(),
                                    purchase: purchase.clone(),
                                    next_tile: next_tiles[i],
                                })
                            })
                    })
            });
        Box::new(moves)
    }

    /// Iterate over the successor trees of every move.
    pub fn successors(&self) -> Box<dyn Iterator<Item = Result<GameTree, StateError>> + '_> {
        Box::new(self.iter().map(move |mv| self.tree.apply_move(&mv)))
    }

    fn purchase_options(&self, tile_move: TileMove, sellbacks: &Sellbacks) -> Vec<Purchase> {
        match self.tree.share_purchase_options(tile_move, sellbacks) {
            Ok(purchases) => purchases.into_iter().filter(|p| (self.purchases)(p)).collect(),
            // Unreachable from enumeration: tile moves come from `tile_moves`
            // and sell-backs from `sellback_options`, both legal by construction.
            Err(err) => {
                warn!(%tile_move, %err, "enumerated branch failed to simulate");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Square};
    use crate::core::{Chain, ChainMap};
    use crate::state::{GameState, Player};

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn start() -> GameTree {
        GameTree::new(GameState::new(["a", "b", "c"]).unwrap())
    }

    #[test]
    fn test_initial_move_count() {
        let tree = start();
        assert_eq!(tree.moves().iter().count(), 540);
    }

    #[test]
    fn test_enumeration_is_restartable() {
        let tree = start();
        let moves = tree.moves();
        let first: Vec<_> = moves.iter().take(10).collect();
        let again: Vec<_> = moves.iter().take(10).collect();
        assert_eq!(first, again);
        assert_eq!(first[0].tile, TileMove::plain(pos("1A")));
        assert_eq!(first[0].next_tile, pos("7B"));
    }

    #[test]
    fn test_filters_narrow() {
        let tree = start();
        let one_tile = pos("3A");
        let count = tree
            .moves()
            .filter_tiles(|m| m.tile == one_tile)
            .filter_next_tiles(|t| t.column() <= 2)
            .iter()
            .count();
        // Columns 1-2 of rows B to I, less 1B and 2B which are dealt.
        assert_eq!(count, 2 * 8 - 2);

        let none = tree.moves().filter_purchases(|p| p.shares().contains(&Chain::Tower));
        assert_eq!(none.iter().count(), 0);
    }

    #[test]
    fn test_successors_apply_each_move() {
        let tree = start();
        let moves = tree.moves().filter_next_tiles(|t| *t == pos("12I"));
        let successors: Vec<_> = moves.successors().collect::<Result<_, _>>().unwrap();
        assert_eq!(successors.len(), 6);
        for next in &successors {
            assert_eq!(next.state().current_player().unwrap().name(), "b");
            assert!(next.state().player("a").unwrap().holds_tile(pos("12I")));
            assert_eq!(next.state().board().placed_count(), 1);
        }
    }

    #[test]
    fn test_every_merge_branch_simulates() {
        let board = Board::from_squares(
            [
                ("2A", Chain::Tower),
                ("3A", Chain::Tower),
                ("5A", Chain::Festival),
                ("6A", Chain::Festival),
            ]
            .map(|(t, c)| (pos(t), Square::Chain(c))),
        )
        .unwrap();
        let mut shares = ChainMap::default();
        shares[Chain::Festival] = 3;
        let players = vec![
            Player::new("ann", 500, shares.clone(), [pos("4A"), pos("9I")]),
            Player::new("bob", 0, shares, []),
            Player::with_cash("cat", 0),
        ];
        let tree = GameTree::new(GameState::from_parts(players, board).unwrap());

        let moves = tree.moves();
        let mut branches = 0;
        for tile_move in tree.tile_moves() {
            for sellbacks in tree.sellback_options(tile_move) {
                let purchases = tree.share_purchase_options(tile_move, &sellbacks).unwrap();
                assert!(purchases.contains(&Purchase::none()));
                assert!(!moves.purchase_options(tile_move, &sellbacks).is_empty());
                branches += 1;
            }
        }
        // 9I is a singleton; 4A merges either way with 2^3 sell-backs each.
        assert_eq!(branches, 1 + 2 * 8);
    }
}
