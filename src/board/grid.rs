//! The board grid and its pure queries.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

use super::square::Square;
use crate::core::config::SAFE_CHAIN_SIZE;
use crate::core::{Chain, ChainMap, Position};
use crate::error::StateError;

/// Sparse map from position to square. Absent positions are empty.
///
/// Chain membership is never stored anywhere else: sizes, in-play sets and
/// prices are all derived by scanning the map. Backed by `im::OrdMap` so
/// cloning a board for a successor state is O(1) and iteration is row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    squares: OrdMap<Position, Square>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit squares.
    ///
    /// `Square::Empty` entries are ignored. A position listed twice is an
    /// error. No legality checks are made: this is for restoring states, not
    /// for playing tiles.
    pub fn from_squares<I>(squares: I) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = (Position, Square)>,
    {
        let mut board = Self::new();
        for (pos, square) in squares {
            if square.is_empty() {
                continue;
            }
            if board.squares.insert(pos, square).is_some() {
                return Err(StateError::TileReused(pos));
            }
        }
        Ok(board)
    }

    /// Current square at `pos`.
    #[must_use]
    pub fn square_at(&self, pos: Position) -> Square {
        self.squares.get(&pos).copied().unwrap_or_default()
    }

    /// Check whether no tile is at `pos`.
    #[must_use]
    pub fn is_free(&self, pos: Position) -> bool {
        !self.squares.contains_key(&pos)
    }

    /// Every placed tile with its square, in row-major order.
    pub fn placed(&self) -> impl Iterator<Item = (Position, Square)> + '_ {
        self.squares.iter().map(|(pos, square)| (*pos, *square))
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.squares.len()
    }

    /// Positions adjacent to `pos`, in row-major order.
    #[must_use]
    pub fn adjacent_positions(&self, pos: Position) -> SmallVec<[Position; 4]> {
        pos.adjacent()
    }

    /// Squares adjacent to `pos`, in the order of [`Board::adjacent_positions`].
    #[must_use]
    pub fn adjacent_squares(&self, pos: Position) -> SmallVec<[Square; 4]> {
        pos.adjacent().into_iter().map(|p| self.square_at(p)).collect()
    }

    /// Distinct chains adjacent to `pos`, in chain order.
    #[must_use]
    pub fn adjacent_chains(&self, pos: Position) -> SmallVec<[Chain; 4]> {
        let mut chains: SmallVec<[Chain; 4]> = pos
            .adjacent()
            .into_iter()
            .filter_map(|p| self.square_at(p).chain())
            .collect();
        chains.sort_unstable();
        chains.dedup();
        chains
    }

    /// Adjacent positions holding an unclaimed tile, in row-major order.
    #[must_use]
    pub fn adjacent_unclaimed(&self, pos: Position) -> SmallVec<[Position; 4]> {
        pos.adjacent()
            .into_iter()
            .filter(|p| self.square_at(*p).is_unclaimed())
            .collect()
    }

    /// Size of every chain in one pass.
    #[must_use]
    pub fn chain_sizes(&self) -> ChainMap<usize> {
        let mut sizes = ChainMap::with_value(0);
        for chain in self.squares.values().filter_map(|s| s.chain()) {
            sizes[chain] += 1;
        }
        sizes
    }

    /// Number of positions owned by `chain`.
    #[must_use]
    pub fn chain_size(&self, chain: Chain) -> usize {
        self.squares
            .values()
            .filter(|s| **s == Square::Chain(chain))
            .count()
    }

    /// Positions owned by `chain`, in row-major order.
    #[must_use]
    pub fn chain_positions(&self, chain: Chain) -> Vec<Position> {
        self.squares
            .iter()
            .filter(|(_, s)| **s == Square::Chain(chain))
            .map(|(pos, _)| *pos)
            .collect()
    }

    /// Positions holding an unclaimed tile, in row-major order.
    #[must_use]
    pub fn unclaimed_positions(&self) -> Vec<Position> {
        self.squares
            .iter()
            .filter(|(_, s)| s.is_unclaimed())
            .map(|(pos, _)| *pos)
            .collect()
    }

    /// Chains with at least one tile on the board, in chain order.
    #[must_use]
    pub fn chains_in_play(&self) -> Vec<Chain> {
        self.chain_sizes()
            .iter()
            .filter(|(_, size)| **size > 0)
            .map(|(chain, _)| chain)
            .collect()
    }

    /// Chains with no tiles on the board, in chain order.
    #[must_use]
    pub fn chains_not_in_play(&self) -> Vec<Chain> {
        self.chain_sizes()
            .iter()
            .filter(|(_, size)| **size == 0)
            .map(|(chain, _)| chain)
            .collect()
    }

    /// In-play chains with their sizes, largest first. Equal sizes keep
    /// chain order.
    #[must_use]
    pub fn chains_by_size_desc(&self) -> Vec<(Chain, usize)> {
        let mut chains: Vec<_> = self
            .chain_sizes()
            .iter()
            .filter(|(_, size)| **size > 0)
            .map(|(chain, size)| (chain, *size))
            .collect();
        chains.sort_by(|a, b| b.1.cmp(&a.1));
        chains
    }

    /// Current share price of `chain`, or `None` if it cannot be bought.
    #[must_use]
    pub fn stock_price(&self, chain: Chain) -> Option<u32> {
        chain.stock_price(self.chain_size(chain))
    }

    /// Check whether `chain` is large enough to be immune to acquisition.
    #[must_use]
    pub fn is_safe(&self, chain: Chain) -> bool {
        self.chain_size(chain) >= SAFE_CHAIN_SIZE
    }

    /// Adjacent chains tied for the largest size. Empty when no chain is
    /// adjacent.
    #[must_use]
    pub fn acquirers(&self, pos: Position) -> SmallVec<[Chain; 4]> {
        let sizes = self.chain_sizes();
        let adjacent = self.adjacent_chains(pos);
        let Some(largest) = adjacent.iter().map(|c| sizes[*c]).max() else {
            return SmallVec::new();
        };
        adjacent.into_iter().filter(|c| sizes[*c] == largest).collect()
    }

    /// Adjacent chains other than `acquirer`.
    ///
    /// Only meaningful when `(pos, acquirer)` is a legal merge.
    #[must_use]
    pub fn acquirees(&self, pos: Position, acquirer: Chain) -> SmallVec<[Chain; 4]> {
        self.adjacent_chains(pos)
            .into_iter()
            .filter(|c| *c != acquirer)
            .collect()
    }

    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        if square.is_empty() {
            self.squares.remove(&pos);
        } else {
            self.squares.insert(pos, square);
        }
    }

    /// Capture the board as position lists.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snapshot = BoardSnapshot::default();
        for (pos, square) in self.placed() {
            match square {
                Square::Unclaimed => snapshot.unclaimed.push(pos),
                Square::Chain(chain) => snapshot.chains.entry(chain).or_default().push(pos),
                Square::Empty => {}
            }
        }
        snapshot
    }

    /// Rebuild a board from a snapshot.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, StateError> {
        let unclaimed = snapshot.unclaimed.iter().map(|p| (*p, Square::Unclaimed));
        let chains = snapshot
            .chains
            .iter()
            .flat_map(|(chain, tiles)| tiles.iter().map(move |p| (*p, Square::Chain(*chain))));
        Self::from_squares(unclaimed.chain(chains))
    }
}

/// Transmission form of a board: unclaimed tiles plus per-chain tile lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Tiles on the board that belong to no chain.
    pub unclaimed: Vec<Position>,
    /// Tiles owned by each in-play chain.
    pub chains: BTreeMap<Chain, Vec<Position>>,
}
