//! Per-player record: name, cash, shares, tiles.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::{Chain, ChainMap, Position};

/// One player's private holdings.
///
/// Fields are read through accessors; only `GameState` mutates a player so
/// the stock and tile invariants stay in one place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    cash: u32,
    holdings: ChainMap<u32>,
    tiles: OrdSet<Position>,
}

impl Player {
    /// Create a player with the given cash, holdings and hand.
    pub fn new(
        name: impl Into<String>,
        cash: u32,
        holdings: ChainMap<u32>,
        tiles: impl IntoIterator<Item = Position>,
    ) -> Self {
        Self {
            name: name.into(),
            cash,
            holdings,
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Create a player with cash only.
    pub fn with_cash(name: impl Into<String>, cash: u32) -> Self {
        Self::new(name, cash, ChainMap::default(), [])
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cash(&self) -> u32 {
        self.cash
    }

    /// Shares held of `chain`.
    #[must_use]
    pub fn shares(&self, chain: Chain) -> u32 {
        self.holdings[chain]
    }

    /// Shares held of every chain.
    #[must_use]
    pub fn holdings(&self) -> &ChainMap<u32> {
        &self.holdings
    }

    /// Tiles in hand, in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &OrdSet<Position> {
        &self.tiles
    }

    /// Check whether `tile` is in hand.
    #[must_use]
    pub fn holds_tile(&self, tile: Position) -> bool {
        self.tiles.contains(&tile)
    }

    pub(crate) fn credit(&mut self, amount: u32) {
        self.cash += amount;
    }

    pub(crate) fn debit(&mut self, amount: u32) {
        self.cash -= amount;
    }

    pub(crate) fn holdings_mut(&mut self) -> &mut ChainMap<u32> {
        &mut self.holdings
    }

    pub(crate) fn take_tile(&mut self, tile: Position) -> bool {
        self.tiles.remove(&tile).is_some()
    }

    pub(crate) fn give_tile(&mut self, tile: Position) {
        self.tiles.insert(tile);
    }

    pub(crate) fn drain_tiles(&mut self) -> OrdSet<Position> {
        std::mem::take(&mut self.tiles)
    }
}
