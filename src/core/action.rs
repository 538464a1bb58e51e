//! Move representation.
//!
//! A full turn is four decisions made in order:
//! - a [`TileMove`]: which tile to place, plus the chain to found or the
//!   acquirer of a merge
//! - [`Sellbacks`]: which acquired chains each player cashes out after a merge
//! - a [`Purchase`]: up to two shares of one chain
//! - the next tile dealt from the deck
//!
//! [`Move`] bundles all four. These are plain values; the game tree decides
//! which ones are legal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::chain::Chain;
use super::config::BUYS_PER_TURN;
use super::position::Position;

/// Tile placement: the tile, and the chain argument when the placement
/// founds a chain (the new chain) or merges (the acquirer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileMove {
    /// Tile being placed.
    pub tile: Position,
    /// Founded chain or merge acquirer. `None` for singletons and growth.
    pub chain: Option<Chain>,
}

impl TileMove {
    /// A placement with no chain argument.
    #[must_use]
    pub const fn plain(tile: Position) -> Self {
        Self { tile, chain: None }
    }

    /// A placement that founds `chain` or merges into it.
    #[must_use]
    pub const fn with_chain(tile: Position, chain: Chain) -> Self {
        Self {
            tile,
            chain: Some(chain),
        }
    }
}

impl fmt::Display for TileMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chain {
            Some(chain) => write!(f, "{} ({})", self.tile, chain),
            None => write!(f, "{}", self.tile),
        }
    }
}

/// Shares bought in one turn, in purchase order.
///
/// SmallVec keeps the common 0-2 share case off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Purchase(SmallVec<[Chain; BUYS_PER_TURN]>);

impl Purchase {
    /// Buy nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Buy one share.
    #[must_use]
    pub fn single(chain: Chain) -> Self {
        Self(SmallVec::from_slice(&[chain]))
    }

    /// Buy two shares of the same chain.
    #[must_use]
    pub fn double(chain: Chain) -> Self {
        Self(SmallVec::from_slice(&[chain, chain]))
    }

    /// Build from an arbitrary share list (used when checking player requests).
    #[must_use]
    pub fn from_shares(shares: &[Chain]) -> Self {
        Self(SmallVec::from_slice(shares))
    }

    /// The purchase catalog: nothing, then one share of each chain, then two
    /// shares of each chain. Every legal purchase is one of these 15.
    pub fn catalog() -> impl Iterator<Item = Purchase> {
        std::iter::once(Purchase::none())
            .chain(Chain::ALL.into_iter().map(Purchase::single))
            .chain(Chain::ALL.into_iter().map(Purchase::double))
    }

    /// Shares in purchase order.
    #[must_use]
    pub fn shares(&self) -> &[Chain] {
        &self.0
    }

    /// Number of shares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing is bought.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("no shares");
        }
        let names: Vec<_> = self.0.iter().map(|c| c.name()).collect();
        f.write_str(&names.join(", "))
    }
}

/// Chains a single player sells back. At most three chains can be acquired
/// in one merge, so this never spills.
pub type SellbackChoice = SmallVec<[Chain; 3]>;

/// Sell-back decisions after a merge, one entry per player.
///
/// Empty when the tile move is not a merge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sellbacks(Vec<(String, SellbackChoice)>);

impl Sellbacks {
    /// No sell-backs.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from `(player name, chains)` entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, SellbackChoice)>,
        S: Into<String>,
    {
        Self(entries.into_iter().map(|(name, chains)| (name.into(), chains)).collect())
    }

    /// Set `player`'s choice, replacing any earlier entry.
    pub fn insert(&mut self, player: impl Into<String>, chains: SellbackChoice) {
        let player = player.into();
        match self.0.iter_mut().find(|(name, _)| *name == player) {
            Some(entry) => entry.1 = chains,
            None => self.0.push((player, chains)),
        }
    }

    /// Chains `player` sells back (empty if the player has no entry).
    #[must_use]
    pub fn for_player(&self, player: &str) -> &[Chain] {
        self.0
            .iter()
            .find(|(name, _)| name == player)
            .map_or(&[][..], |(_, chains)| chains.as_slice())
    }

    /// Iterate over `(player name, chains)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Chain])> {
        self.0.iter().map(|(name, chains)| (name.as_str(), chains.as_slice()))
    }

    /// Check if no player sells anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|(_, chains)| chains.is_empty())
    }
}

/// One complete turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Tile placement.
    pub tile: TileMove,
    /// Merger sell-backs.
    pub sellbacks: Sellbacks,
    /// Stock purchase.
    pub purchase: Purchase,
    /// Tile dealt to the mover at the end of the turn.
    pub next_tile: Position,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "place {}, buy {}, draw {}", self.tile, self.purchase, self.next_tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_catalog_has_fifteen_purchases() {
        let catalog: Vec<_> = Purchase::catalog().collect();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog[0], Purchase::none());
        assert!(catalog.iter().all(|p| p.len() <= BUYS_PER_TURN));
        assert!(catalog.contains(&Purchase::double(Chain::Tower)));
    }

    #[test]
    fn test_purchase_display() {
        assert_eq!(Purchase::none().to_string(), "no shares");
        assert_eq!(Purchase::double(Chain::Sackson).to_string(), "Sackson, Sackson");
    }

    #[test]
    fn test_tile_move_display() {
        assert_eq!(TileMove::plain(pos("3B")).to_string(), "3B");
        assert_eq!(TileMove::with_chain(pos("3B"), Chain::Tower).to_string(), "3B (Tower)");
    }

    #[test]
    fn test_sellbacks_lookup() {
        let mut sellbacks = Sellbacks::none();
        assert!(sellbacks.is_empty());

        sellbacks.insert("ann", smallvec![Chain::Festival]);
        sellbacks.insert("bob", SellbackChoice::new());
        assert_eq!(sellbacks.for_player("ann"), &[Chain::Festival]);
        assert!(sellbacks.for_player("bob").is_empty());
        assert!(sellbacks.for_player("cat").is_empty());
        assert!(!sellbacks.is_empty());

        sellbacks.insert("ann", SellbackChoice::new());
        assert!(sellbacks.is_empty());
        assert_eq!(sellbacks.iter().count(), 2);
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move {
            tile: TileMove::with_chain(pos("5A"), Chain::American),
            sellbacks: Sellbacks::from_entries([("ann", smallvec![Chain::Sackson])]),
            purchase: Purchase::single(Chain::American),
            next_tile: pos("9I"),
        };
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}
