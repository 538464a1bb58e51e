//! Errors raised by state mutations.
//!
//! Legality predicates never fail; they return `bool`. Mutators check the
//! matching predicate and report a [`StateError`] when it does not hold.
//! Callers driving a game treat any `StateError` coming from a player's
//! request as an illegal move.

use crate::board::MoveKind;
use crate::core::{Chain, Position, Purchase};

/// Error raised when a mutation is not allowed by the rules.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StateError {
    /// The tile cannot be placed the requested way.
    #[display("illegal {kind} placement at {tile}")]
    IllegalPlacement { tile: Position, kind: MoveKind },

    /// A chain argument was given for a placement that takes none.
    #[display("{kind} placement at {tile} takes no chain")]
    UnexpectedChain { tile: Position, kind: MoveKind },

    /// A founding or merging placement was given no chain.
    #[display("{kind} placement at {tile} needs a chain")]
    MissingChain { tile: Position, kind: MoveKind },

    /// Attempt to found a chain that is already on the board.
    #[display("{_0} is already in play")]
    ChainInPlay(#[error(not(source))] Chain),

    /// The current player does not hold the tile.
    #[display("{player} does not hold tile {tile}")]
    TileNotHeld { player: String, tile: Position },

    /// Stock of a chain that is not in play has no price.
    #[display("{_0} is not in play and has no price")]
    Unpriced(#[error(not(source))] Chain),

    /// The pool has no shares left.
    #[display("no {_0} shares left")]
    SoldOut(#[error(not(source))] Chain),

    /// The buyer cannot pay for the share.
    #[display("{player} has {cash} but {chain} costs {price}")]
    InsufficientFunds {
        player: String,
        chain: Chain,
        price: u32,
        cash: u32,
    },

    /// More than two shares, or shares of more than one chain.
    #[display("illegal purchase: {_0}")]
    IllegalPurchase(#[error(not(source))] Purchase),

    /// No player has this name.
    #[display("no player named {_0:?}")]
    UnknownPlayer(#[error(not(source))] String),

    /// Two players share a name.
    #[display("duplicate player name {_0:?}")]
    DuplicatePlayer(#[error(not(source))] String),

    /// The number of players is outside the configured range.
    #[display("{count} players, expected {min} to {max}")]
    PlayerCount { count: usize, min: usize, max: usize },

    /// The operation needs a current player but none remain.
    #[display("no players remain")]
    NoPlayers,

    /// Not enough tiles remain to deal.
    #[display("deck is empty")]
    DeckEmpty,

    /// The tile to deal is not in the deck.
    #[display("tile {_0} is not in the deck")]
    TileNotInDeck(#[error(not(source))] Position),

    /// A tile appears twice across the board and the players' hands.
    #[display("tile {_0} is used more than once")]
    TileReused(#[error(not(source))] Position),

    /// More shares of a chain are held than exist.
    #[display("{held} {chain} shares held, only 25 exist")]
    TooManyShares { chain: Chain, held: u32 },

    /// A state invariant failed after a mutation.
    #[display("invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),

    /// A snapshot could not be encoded or decoded.
    #[display("snapshot codec error: {_0}")]
    Codec(#[error(not(source))] String),
}
