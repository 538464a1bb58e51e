//! Builder for the opening state of a game.

use tracing::debug;

use super::game_state::GameState;
use super::player::Player;
use crate::board::Board;
use crate::core::{ChainMap, GameConfig, GameRng, Handout, Position, POSITION_COUNT};
use crate::error::StateError;

/// Builder for creating a fresh `GameState`.
///
/// ```
/// use rust_acquire::core::{GameConfig, Handout};
/// use rust_acquire::state::GameStateBuilder;
///
/// let state = GameStateBuilder::new()
///     .config(GameConfig::default().with_handout(Handout::Seeded(3)))
///     .players(["ann", "bob", "cat"])
///     .build()
///     .unwrap();
///
/// assert_eq!(state.player_count(), 3);
/// assert_eq!(state.deck().len(), 108 - 18);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameStateBuilder {
    config: GameConfig,
    names: Vec<String>,
}

impl GameStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Add players in turn order.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add one player at the end of the turn order.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Deal the opening hands and build the state.
    pub fn build(self) -> Result<GameState, StateError> {
        let count = self.names.len();
        if !self.config.accepts_player_count(count) {
            return Err(StateError::PlayerCount {
                count,
                min: self.config.min_players,
                max: self.config.max_players,
            });
        }
        let hand_size = self.config.starting_tiles;
        if count * hand_size > POSITION_COUNT {
            return Err(StateError::DeckEmpty);
        }

        let mut deck: Vec<Position> = Position::all().collect();
        let mut rng = match self.config.handout {
            Handout::Ordered => None,
            Handout::Seeded(seed) => Some(GameRng::new(seed)),
        };

        let mut players = Vec::with_capacity(count);
        for name in self.names {
            let hand: Vec<Position> = match rng.as_mut() {
                None => deck.drain(..hand_size).collect(),
                Some(rng) => (0..hand_size).filter_map(|_| rng.draw(&mut deck)).collect(),
            };
            players.push(Player::new(name, self.config.starting_cash, ChainMap::default(), hand));
        }

        debug!(players = count, handout = ?self.config.handout, "dealt opening hands");
        GameState::from_parts(players, Board::new())
    }
}
