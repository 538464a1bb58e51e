//! Square contents and placement classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Chain;

/// State of one board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No tile.
    #[default]
    Empty,
    /// A placed tile that belongs to no chain.
    Unclaimed,
    /// A tile owned by a chain.
    Chain(Chain),
}

impl Square {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    #[must_use]
    pub const fn is_unclaimed(self) -> bool {
        matches!(self, Square::Unclaimed)
    }

    /// The owning chain, if any.
    #[must_use]
    pub const fn chain(self) -> Option<Chain> {
        match self {
            Square::Chain(chain) => Some(chain),
            _ => None,
        }
    }
}

/// What placing a tile at a position would do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// The tile stays unclaimed.
    Singleton,
    /// The tile founds a new chain.
    Found,
    /// The tile extends the one adjacent chain.
    Grow,
    /// The tile joins two or more chains.
    Merge,
    /// The tile cannot be placed.
    Invalid,
}

impl MoveKind {
    /// Check whether the placement needs a chain argument.
    #[must_use]
    pub const fn takes_chain(self) -> bool {
        matches!(self, MoveKind::Found | MoveKind::Merge)
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveKind::Singleton => "singleton",
            MoveKind::Found => "found",
            MoveKind::Grow => "grow",
            MoveKind::Merge => "merge",
            MoveKind::Invalid => "invalid",
        })
    }
}
