//! Game state: board, turn queue, stock pool, deck.
//!
//! ## Value Semantics
//!
//! `GameState` is built from persistent collections (`im::Vector`,
//! `im::OrdSet`, `im::OrdMap` inside `Board`), so `clone()` is O(1) and
//! every what-if exploration works on its own copy.
//!
//! ## Mutation Order Within a Turn
//!
//! 1. `place_a_tile`
//! 2. `sellback` for each player (merges only, priced on the pre-turn state)
//! 3. `buy_stock` up to twice
//! 4. `merge_payout` (merges only, priced on the pre-turn state)
//! 5. `done`: deal the next tile and rotate the turn queue
//!
//! `GameTree::apply` runs this sequence; the individual steps are public so
//! an orchestrator can drive a turn interactively.

use im::{OrdSet, Vector};
use rustc_hash::FxHashSet;
use tracing::{debug, instrument};

use super::player::Player;
use crate::board::{Board, MoveKind};
use crate::contracts;
use crate::core::config::{BUYS_PER_TURN, FOUNDER_SHARES, SHARES_PER_CHAIN};
use crate::core::{Chain, ChainMap, Position};
use crate::error::StateError;

/// Complete state of a game between player actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    /// Turn queue. The front is the current player.
    pub(crate) players: Vector<Player>,
    pub(crate) pool: ChainMap<u32>,
    pub(crate) deck: OrdSet<Position>,
}

impl GameState {
    /// Start a game with the default configuration.
    ///
    /// Players take turns in the given order. Shorthand for
    /// `GameStateBuilder::new().players(names).build()`.
    pub fn new<I, S>(names: I) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        super::GameStateBuilder::new().players(names).build()
    }

    /// Assemble a game already in progress.
    ///
    /// The deck is every position neither on the board nor in a hand; the
    /// pool is whatever stock the players do not hold. Fails if a tile is
    /// used twice, a name repeats, or more than 25 shares of a chain are held.
    pub fn from_parts(players: Vec<Player>, board: Board) -> Result<Self, StateError> {
        let mut names = FxHashSet::default();
        let mut used: FxHashSet<Position> = board.placed().map(|(pos, _)| pos).collect();

        for player in &players {
            if !names.insert(player.name()) {
                return Err(StateError::DuplicatePlayer(player.name().to_string()));
            }
            for tile in player.tiles() {
                if !used.insert(*tile) {
                    return Err(StateError::TileReused(*tile));
                }
            }
        }

        let mut pool = ChainMap::with_value(SHARES_PER_CHAIN);
        for chain in Chain::ALL {
            let held: u32 = players.iter().map(|p| p.shares(chain)).sum();
            if held > SHARES_PER_CHAIN {
                return Err(StateError::TooManyShares { chain, held });
            }
            pool[chain] -= held;
        }

        let deck = Position::all().filter(|p| !used.contains(p)).collect();
        let state = Self {
            board,
            players: players.into_iter().collect(),
            pool,
            deck,
        };
        contracts::verify(&state)?;
        Ok(state)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is, or `None` once every player is gone.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.front()
    }

    /// Players in turn order, current player first.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Shares of `chain` left in the pool.
    #[must_use]
    pub fn pool(&self, chain: Chain) -> u32 {
        self.pool[chain]
    }

    /// Tiles not yet dealt or placed, in row-major order.
    #[must_use]
    pub fn deck(&self) -> &OrdSet<Position> {
        &self.deck
    }

    fn player_index(&self, name: &str) -> Result<usize, StateError> {
        self.players
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| StateError::UnknownPlayer(name.to_string()))
    }

    pub(crate) fn player_mut(&mut self, name: &str) -> Result<&mut Player, StateError> {
        let index = self.player_index(name)?;
        Ok(&mut self.players[index])
    }

    fn current_mut(&mut self) -> Result<&mut Player, StateError> {
        self.players.front_mut().ok_or(StateError::NoPlayers)
    }

    /// Place one of the current player's tiles.
    ///
    /// `chain` names the chain to found, or the acquirer of a merge, and must
    /// be `None` for singletons and growth. Returns what the placement did.
    /// The founder of a chain receives one free share if the pool has any.
    #[instrument(level = "debug", skip(self))]
    pub fn place_a_tile(
        &mut self,
        tile: Position,
        chain: Option<Chain>,
    ) -> Result<MoveKind, StateError> {
        let player = self.current_player().ok_or(StateError::NoPlayers)?;
        if !player.holds_tile(tile) {
            return Err(StateError::TileNotHeld {
                player: player.name().to_string(),
                tile,
            });
        }

        let kind = self.board.query(tile);
        let mut founded = None;
        match (kind, chain) {
            (MoveKind::Invalid, _) => {
                return Err(StateError::IllegalPlacement { tile, kind });
            }
            (MoveKind::Singleton | MoveKind::Grow, Some(_)) => {
                return Err(StateError::UnexpectedChain { tile, kind });
            }
            (MoveKind::Found | MoveKind::Merge, None) => {
                return Err(StateError::MissingChain { tile, kind });
            }
            (MoveKind::Singleton, None) => self.board.place_singleton(tile)?,
            (MoveKind::Grow, None) => self.board.grow(tile)?,
            (MoveKind::Found, Some(chain)) => {
                if self.board.chain_size(chain) > 0 {
                    return Err(StateError::ChainInPlay(chain));
                }
                self.board.found(tile, chain)?;
                founded = Some(chain);
            }
            (MoveKind::Merge, Some(acquirer)) => self.board.merge(tile, acquirer)?,
        }

        let bonus = match founded {
            Some(chain) if self.pool[chain] >= FOUNDER_SHARES => {
                self.pool[chain] -= FOUNDER_SHARES;
                Some(chain)
            }
            _ => None,
        };

        let current = self.current_mut()?;
        current.take_tile(tile);
        if let Some(chain) = bonus {
            current.holdings_mut()[chain] += FOUNDER_SHARES;
        }
        debug!(player = current.name(), %tile, %kind, "placed tile");

        contracts::verify(self)?;
        Ok(kind)
    }

    /// Sell one share of `chain` to the current player.
    #[instrument(level = "debug", skip(self))]
    pub fn buy_stock(&mut self, chain: Chain) -> Result<(), StateError> {
        let price = self
            .board
            .stock_price(chain)
            .ok_or(StateError::Unpriced(chain))?;
        if self.pool[chain] == 0 {
            return Err(StateError::SoldOut(chain));
        }
        let player = self.current_player().ok_or(StateError::NoPlayers)?;
        if player.cash() < price {
            return Err(StateError::InsufficientFunds {
                player: player.name().to_string(),
                chain,
                price,
                cash: player.cash(),
            });
        }

        self.pool[chain] -= 1;
        let current = self.current_mut()?;
        current.debit(price);
        current.holdings_mut()[chain] += 1;
        debug!(player = current.name(), %chain, price, "bought share");

        contracts::verify(self)
    }

    /// Cash out all of `name`'s shares in each of `chains`.
    ///
    /// Shares are priced on `reference`, normally the state before the merge
    /// that retired the chains (after the merge they have no price). Chains
    /// the player holds none of are skipped.
    #[instrument(level = "debug", skip(self, reference))]
    pub fn sellback(
        &mut self,
        name: &str,
        chains: &[Chain],
        reference: &GameState,
    ) -> Result<(), StateError> {
        let index = self.player_index(name)?;
        for &chain in chains {
            let held = self.players[index].shares(chain);
            if held == 0 {
                continue;
            }
            let price = reference
                .board
                .stock_price(chain)
                .ok_or(StateError::Unpriced(chain))?;

            self.pool[chain] += held;
            let player = &mut self.players[index];
            player.holdings_mut()[chain] = 0;
            player.credit(price * held);
            debug!(player = name, %chain, held, price, "sold back shares");
        }

        contracts::verify(self)
    }

    /// Deal `next_tile` to the current player and pass the turn.
    #[instrument(level = "debug", skip(self))]
    pub fn done(&mut self, next_tile: Position) -> Result<(), StateError> {
        if self.deck.is_empty() {
            return Err(StateError::DeckEmpty);
        }
        if !self.deck.contains(&next_tile) {
            return Err(StateError::TileNotInDeck(next_tile));
        }
        let mut current = self.players.pop_front().ok_or(StateError::NoPlayers)?;

        self.deck.remove(&next_tile);
        current.give_tile(next_tile);
        debug!(player = current.name(), %next_tile, "turn done");
        self.players.push_back(current);

        contracts::verify(self)
    }

    /// Remove a player from the game.
    ///
    /// Their shares return to the pool and their tiles to the deck. Returns
    /// the removed player as they were.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_player(&mut self, name: &str) -> Result<Player, StateError> {
        let index = self.player_index(name)?;
        let mut removed = self.players.remove(index);
        let snapshot = removed.clone();

        for (chain, held) in removed.holdings_mut().iter_mut() {
            self.pool[chain] += *held;
            *held = 0;
        }
        for tile in removed.drain_tiles() {
            self.deck.insert(tile);
        }
        debug!(player = name, remaining = self.players.len(), "removed player");

        contracts::verify(self)?;
        Ok(snapshot)
    }

    /// Check whether placing `tile` with the given chain argument is legal.
    ///
    /// Does not check that the current player holds the tile.
    #[must_use]
    pub fn is_valid_move(&self, tile: Position, chain: Option<Chain>) -> bool {
        match chain {
            None => self.board.valid_singleton(tile) || self.board.valid_grow(tile),
            Some(chain) => self.board.valid_found(tile, chain) || self.board.valid_merge(tile, chain),
        }
    }

    /// Check whether the current player may buy `shares` this turn.
    ///
    /// At most two shares, all of one chain, enough left in the pool, each
    /// affordable from what remains after the previous one.
    #[must_use]
    pub fn is_valid_buy(&self, shares: &[Chain]) -> bool {
        if shares.len() > BUYS_PER_TURN || shares.windows(2).any(|w| w[0] != w[1]) {
            return false;
        }
        let Some(first) = shares.first() else {
            return true;
        };
        let Some(player) = self.current_player() else {
            return false;
        };
        if shares.len() as u32 > self.pool[*first] {
            return false;
        }
        let Some(price) = self.board.stock_price(*first) else {
            return false;
        };

        let mut cash = player.cash();
        for _ in shares {
            if price > cash {
                return false;
            }
            cash -= price;
        }
        true
    }
}
