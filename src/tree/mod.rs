//! The game tree: legal options from a state and the transitions between
//! states.
//!
//! - `game_tree`: `GameTree`, per-level option sets and `apply`
//! - `sellback`: lazy cross product of merger sell-back choices
//! - `moves`: lazy, filterable enumeration of complete moves

pub mod game_tree;
pub mod sellback;
pub mod moves;

pub use game_tree::GameTree;
pub use sellback::SellbackOptions;
pub use moves::Moves;
