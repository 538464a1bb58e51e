//! # rust-acquire
//!
//! Rules engine and game-tree enumeration for the board game Acquire.
//!
//! ## Design Principles
//!
//! 1. **Derived, Not Stored**: Chains are not entities. Size, price and
//!    safety are computed from the board squares whenever asked.
//!
//! 2. **Predicates Never Fail**: Legality checks return `bool`. Mutators
//!    check the same predicates and return a `StateError` when they fail.
//!
//! 3. **Value Semantics**: Every transition produces a new state. States are
//!    built on `im-rs` persistent collections so cloning is O(1).
//!
//! ## Architecture
//!
//! - **Lazy Enumeration**: The move space (tile × sell-backs × purchase ×
//!   next tile) can run to five figures per turn. `GameTree::moves` walks it
//!   one branch at a time and can be restarted at will.
//!
//! - **Contracts**: With the `contracts` feature (on by default) every state
//!   mutation re-checks the tile-partition and stock-conservation
//!   invariants. Turn the feature off for search-heavy workloads.
//!
//! ## Modules
//!
//! - `core`: Positions, chains, prices, moves, RNG, configuration
//! - `board`: Board squares and placement rules
//! - `state`: Players, stock pool, deck, turn mutations, payouts, game end
//! - `tree`: Option sets per turn level, lazy move enumeration, transitions
//! - `rules`: Strategy and referee helpers
//! - `contracts`: Invariants and their feature-gated checking
//! - `error`: `StateError`
//!
//! ## Example
//!
//! ```
//! use rust_acquire::{GameState, GameTree};
//!
//! let tree = GameTree::new(GameState::new(["ann", "bob", "cat"]).unwrap());
//! let first = tree.moves().iter().next().unwrap();
//! let next = tree.apply_move(&first).unwrap();
//! assert_eq!(next.state().current_player().unwrap().name(), "bob");
//! ```

pub mod core;
pub mod board;
pub mod state;
pub mod tree;
pub mod rules;
pub mod contracts;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Chain, ChainMap, Tier,
    Position, COLUMNS, ROWS, POSITION_COUNT,
    GameRng, GameRngState,
    GameConfig, Handout,
    Move, Purchase, SellbackChoice, Sellbacks, TileMove,
};

pub use crate::board::{Board, BoardSnapshot, MoveKind, Square};

pub use crate::state::{GameOverReason, GameState, GameStateBuilder, Player, Scores, StateSnapshot};

pub use crate::tree::{GameTree, Moves, SellbackOptions};

pub use crate::rules::Violation;

pub use crate::error::StateError;
