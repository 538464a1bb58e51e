//! Game state: players, stock pool, deck, and every turn mutation.
//!
//! ## Structure
//!
//! - `player`: the per-player record
//! - `game_state`: `GameState` itself, placement, buying, selling, dealing
//! - `payout`: stockholder rankings, merger bonuses, final scores
//! - `end`: end-of-game conditions
//! - `snapshot`: transmission form (serde, bincode)
//! - `builder`: opening deal

pub mod player;
pub mod game_state;
pub mod payout;
pub mod end;
pub mod snapshot;
pub mod builder;

pub use player::Player;
pub use game_state::GameState;
pub use payout::Scores;
pub use end::GameOverReason;
pub use snapshot::StateSnapshot;
pub use builder::GameStateBuilder;
