//! Rule helpers built on top of the state queries.
//!
//! - Listing legal tile moves and purchases for a strategy
//! - Checking a whole proposed turn for a referee
//! - End-of-game detection

pub mod validation;

pub use validation::{
    is_game_over, is_valid_sellback, valid_buy_orders, valid_tile_moves, validate_turn, Violation,
};
