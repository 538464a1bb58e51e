//! Placement legality and placement mutations.
//!
//! ## Classification
//!
//! [`Board::query`] decides what a tile would do, first match wins:
//!
//! 1. `Invalid` if the position is occupied
//! 2. `Found` if some chain not in play could be founded there
//! 3. `Grow` if exactly one chain is adjacent
//! 4. `Merge` if every acquirer could legally merge there
//! 5. `Singleton` if a lone tile is allowed there
//! 6. `Invalid` otherwise
//!
//! ## Founding next to unclaimed tiles
//!
//! A founding tile must touch at least one unclaimed tile, and the first of
//! those (row-major) must have no other neighbour than empty squares. When
//! that first neighbour is itself part of a larger unclaimed cluster the
//! founding is refused and, if nothing else applies, the tile is placed as
//! another unclaimed singleton. This leaves unclaimed clusters of three or
//! more tiles possible; it is the long-standing behaviour of the rules
//! engine and is pinned down by tests.

use tracing::trace;

use super::grid::Board;
use super::square::{MoveKind, Square};
use crate::core::{Chain, Position};
use crate::error::StateError;

impl Board {
    /// Check whether a lone unclaimed tile may be placed at `pos`.
    ///
    /// The position must be free, touch no chain, and not be a legal
    /// founding spot (founding takes priority).
    #[must_use]
    pub fn valid_singleton(&self, pos: Position) -> bool {
        if !self.is_free(pos) {
            return false;
        }
        if self.adjacent_squares(pos).iter().any(|s| s.chain().is_some()) {
            return false;
        }
        match self.chains_not_in_play().first() {
            Some(available) => !self.valid_found(pos, *available),
            None => true,
        }
    }

    /// Check whether placing at `pos` may found `chain`.
    #[must_use]
    pub fn valid_found(&self, pos: Position, chain: Chain) -> bool {
        if !self.is_free(pos) {
            return false;
        }
        let available = self.chains_not_in_play();
        if available.is_empty() || !available.contains(&chain) {
            return false;
        }
        if !self.adjacent_chains(pos).is_empty() {
            return false;
        }
        match self.adjacent_unclaimed(pos).first() {
            Some(first) => self.adjacent_squares(*first).iter().all(|s| s.is_empty()),
            None => false,
        }
    }

    /// Check whether placing at `pos` may merge the adjacent chains into
    /// `acquirer`.
    ///
    /// Acquirer size is not checked here; [`Board::acquirers`] lists the
    /// chains a player is expected to pick from.
    #[must_use]
    pub fn valid_merge(&self, pos: Position, acquirer: Chain) -> bool {
        if !self.is_free(pos) {
            return false;
        }
        let adjacent = self.adjacent_chains(pos);
        if adjacent.len() < 2 || !adjacent.contains(&acquirer) {
            return false;
        }
        if adjacent.iter().any(|c| self.is_safe(*c)) {
            return false;
        }
        self.adjacent_unclaimed(pos).is_empty()
    }

    /// Check whether placing at `pos` extends a single adjacent chain.
    #[must_use]
    pub fn valid_grow(&self, pos: Position) -> bool {
        self.is_free(pos) && self.adjacent_chains(pos).len() == 1
    }

    /// Classify what placing a tile at `pos` would do.
    #[must_use]
    pub fn query(&self, pos: Position) -> MoveKind {
        if !self.is_free(pos) {
            return MoveKind::Invalid;
        }
        if self
            .chains_not_in_play()
            .into_iter()
            .any(|chain| self.valid_found(pos, chain))
        {
            return MoveKind::Found;
        }
        if self.valid_grow(pos) {
            return MoveKind::Grow;
        }
        let acquirers = self.acquirers(pos);
        if !acquirers.is_empty() && acquirers.iter().all(|c| self.valid_merge(pos, *c)) {
            return MoveKind::Merge;
        }
        if self.valid_singleton(pos) {
            return MoveKind::Singleton;
        }
        MoveKind::Invalid
    }

    /// Place an unclaimed tile.
    pub fn place_singleton(&mut self, pos: Position) -> Result<(), StateError> {
        if !self.valid_singleton(pos) {
            return Err(StateError::IllegalPlacement { tile: pos, kind: MoveKind::Singleton });
        }
        trace!(%pos, "singleton");
        self.set(pos, Square::Unclaimed);
        Ok(())
    }

    /// Found `chain` at `pos`, absorbing the adjacent unclaimed tiles.
    pub fn found(&mut self, pos: Position, chain: Chain) -> Result<(), StateError> {
        if !self.valid_found(pos, chain) {
            return Err(StateError::IllegalPlacement { tile: pos, kind: MoveKind::Found });
        }
        let absorbed = self.adjacent_unclaimed(pos);
        trace!(%pos, %chain, absorbed = absorbed.len(), "found");
        self.set(pos, Square::Chain(chain));
        for p in absorbed {
            self.set(p, Square::Chain(chain));
        }
        Ok(())
    }

    /// Extend the single adjacent chain to `pos`.
    pub fn grow(&mut self, pos: Position) -> Result<(), StateError> {
        let chain = match self.adjacent_chains(pos).as_slice() {
            [chain] if self.is_free(pos) => *chain,
            _ => return Err(StateError::IllegalPlacement { tile: pos, kind: MoveKind::Grow }),
        };
        trace!(%pos, %chain, "grow");
        self.set(pos, Square::Chain(chain));
        Ok(())
    }

    /// Merge every chain adjacent to `pos` into `acquirer`.
    pub fn merge(&mut self, pos: Position, acquirer: Chain) -> Result<(), StateError> {
        if !self.valid_merge(pos, acquirer) {
            return Err(StateError::IllegalPlacement { tile: pos, kind: MoveKind::Merge });
        }
        let acquirees = self.acquirees(pos, acquirer);
        trace!(%pos, %acquirer, ?acquirees, "merge");
        self.set(pos, Square::Chain(acquirer));
        for chain in acquirees {
            for p in self.chain_positions(chain) {
                self.set(p, Square::Chain(acquirer));
            }
        }
        Ok(())
    }
}
