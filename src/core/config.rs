//! Rule constants and per-game configuration.
//!
//! The constants below are the fixed rules of Acquire. `GameConfig` carries
//! the knobs an orchestrator may vary between games (starting cash, hand
//! size, player limits, and how the opening tiles are handed out).

use serde::{Deserialize, Serialize};

/// Cash each player starts with.
pub const STARTING_CASH: u32 = 8000;

/// Tiles dealt to each player at game start.
pub const STARTING_TILES: usize = 6;

/// Shares issued per chain.
pub const SHARES_PER_CHAIN: u32 = 25;

/// Free shares granted to the player who founds a chain.
pub const FOUNDER_SHARES: u32 = 1;

/// Maximum shares bought in one turn.
pub const BUYS_PER_TURN: usize = 2;

/// A chain of at least this size cannot be acquired.
pub const SAFE_CHAIN_SIZE: usize = 12;

/// A chain of at least this size ends the game.
pub const MAX_CHAIN_SIZE: usize = 40;

/// Majority bonus is this multiple of the share price.
pub const MAJORITY_BONUS_SCALE: u32 = 10;

/// Minority bonus is this multiple of the share price.
pub const MINORITY_BONUS_SCALE: u32 = 5;

/// Cheapest share price.
pub const MINIMUM_PRICE: u32 = 200;

/// Most expensive share price.
pub const MAXIMUM_PRICE: u32 = 1200;

/// Distance between adjacent rungs of the price ladder.
pub const PRICE_STEP: u32 = 100;

/// Fewest players in a standard game.
pub const MIN_PLAYERS: usize = 3;

/// Most players in a standard game.
pub const MAX_PLAYERS: usize = 6;

/// How opening tiles are handed out from the deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handout {
    /// Smallest remaining position first. Fully deterministic.
    #[default]
    Ordered,
    /// Uniformly random draws from a `GameRng` with this seed.
    Seeded(u64),
}

/// Per-game configuration.
///
/// ## Example
///
/// ```
/// use rust_acquire::core::{GameConfig, Handout};
///
/// let config = GameConfig::default()
///     .with_starting_cash(6000)
///     .with_handout(Handout::Seeded(7));
///
/// assert_eq!(config.starting_cash, 6000);
/// assert_eq!(config.starting_tiles, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cash dealt to every player.
    pub starting_cash: u32,

    /// Tiles dealt to every player.
    pub starting_tiles: usize,

    /// Fewest players accepted.
    pub min_players: usize,

    /// Most players accepted.
    pub max_players: usize,

    /// Opening tile handout policy.
    pub handout: Handout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_cash: STARTING_CASH,
            starting_tiles: STARTING_TILES,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            handout: Handout::Ordered,
        }
    }
}

impl GameConfig {
    /// Set starting cash.
    #[must_use]
    pub fn with_starting_cash(mut self, cash: u32) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Set the number of tiles dealt to each player.
    #[must_use]
    pub fn with_starting_tiles(mut self, tiles: usize) -> Self {
        self.starting_tiles = tiles;
        self
    }

    /// Set the accepted player-count range.
    #[must_use]
    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the tile handout policy.
    #[must_use]
    pub fn with_handout(mut self, handout: Handout) -> Self {
        self.handout = handout;
        self
    }

    /// Check whether `count` players are accepted.
    #[must_use]
    pub fn accepts_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_rules() {
        let config = GameConfig::default();
        assert_eq!(config.starting_cash, STARTING_CASH);
        assert_eq!(config.starting_tiles, STARTING_TILES);
        assert_eq!(config.handout, Handout::Ordered);
        assert!(config.accepts_player_count(3));
        assert!(config.accepts_player_count(6));
        assert!(!config.accepts_player_count(2));
        assert!(!config.accepts_player_count(7));
    }

    #[test]
    fn test_builder_methods() {
        let config = GameConfig::default()
            .with_starting_cash(100)
            .with_starting_tiles(3)
            .with_player_limits(1, 2)
            .with_handout(Handout::Seeded(9));

        assert_eq!(config.starting_cash, 100);
        assert_eq!(config.starting_tiles, 3);
        assert!(config.accepts_player_count(1));
        assert_eq!(config.handout, Handout::Seeded(9));
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default().with_handout(Handout::Seeded(42));
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
