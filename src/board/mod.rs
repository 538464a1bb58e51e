//! The Acquire board: squares, chain membership, placement rules.
//!
//! ## Structure
//!
//! - `square`: `Square` contents and the `MoveKind` classification
//! - `grid`: `Board` storage, pure queries and snapshots
//! - `placement`: legality predicates, `query`, and placement mutators
//!
//! Chains are never stored as entities. Every chain fact (size, positions,
//! price, safety) is derived from the squares on demand.

pub mod square;
pub mod grid;
pub mod placement;

pub use square::{MoveKind, Square};
pub use grid::{Board, BoardSnapshot};
