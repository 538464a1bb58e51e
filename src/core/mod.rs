//! Core value types: positions, chains, moves, RNG, configuration.
//!
//! Everything here is a plain value with no knowledge of a running game.
//! Board and game state build on these.

pub mod position;
pub mod chain;
pub mod rng;
pub mod config;
pub mod action;

pub use position::{Position, ParsePositionError, COLUMNS, ROWS, POSITION_COUNT};
pub use chain::{Chain, ChainMap, Tier, ParseChainError, CHAIN_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, Handout};
pub use action::{Move, Purchase, SellbackChoice, Sellbacks, TileMove};
