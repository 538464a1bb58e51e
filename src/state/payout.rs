//! Stockholder bonuses and final scoring.
//!
//! ## Bonus Rules
//!
//! When a chain is acquired (or the game ends) its stockholders are paid
//! `10 × price` (majority) and `5 × price` (minority):
//!
//! - A sole majority holder takes the majority bonus. A sole minority holder
//!   takes the minority bonus; tied minority holders split it. With no
//!   minority holder at all the majority holder takes both.
//! - Tied majority holders split both bonuses combined; nobody else is paid.
//!
//! Splits round to the nearest dollar, halves up.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::game_state::GameState;
use super::player::Player;
use crate::core::config::{MAJORITY_BONUS_SCALE, MINORITY_BONUS_SCALE, SHARES_PER_CHAIN};
use crate::core::{Chain, Position};
use crate::error::StateError;

/// Final score per player name.
pub type Scores = FxHashMap<String, u32>;

/// Split `total` evenly among `ways` recipients, rounding to nearest.
fn split(total: u32, ways: usize) -> u32 {
    let ways = ways as u32;
    (total + ways / 2) / ways
}

impl GameState {
    /// Players holding `chain`, with their share counts, in turn order.
    #[must_use]
    pub fn players_with_stock(&self, chain: Chain) -> Vec<(&Player, u32)> {
        self.players
            .iter()
            .map(|p| (p, p.shares(chain)))
            .filter(|(_, held)| *held > 0)
            .collect()
    }

    /// Players tied for the most shares of `chain`. Empty if nobody holds any.
    #[must_use]
    pub fn majority_stockholders(&self, chain: Chain) -> Vec<&Player> {
        let holders = self.players_with_stock(chain);
        let Some(most) = holders.iter().map(|(_, held)| *held).max() else {
            return Vec::new();
        };
        holders
            .into_iter()
            .filter(|(_, held)| *held == most)
            .map(|(p, _)| p)
            .collect()
    }

    /// Players tied for the most shares of `chain` among those outside the
    /// majority. Empty if every holder is a majority holder.
    #[must_use]
    pub fn minority_stockholders(&self, chain: Chain) -> Vec<&Player> {
        let holders = self.players_with_stock(chain);
        let Some(most) = holders.iter().map(|(_, held)| *held).max() else {
            return Vec::new();
        };
        let rest: Vec<_> = holders.into_iter().filter(|(_, held)| *held < most).collect();
        let Some(second) = rest.iter().map(|(_, held)| *held).max() else {
            return Vec::new();
        };
        rest.into_iter()
            .filter(|(_, held)| *held == second)
            .map(|(p, _)| p)
            .collect()
    }

    /// Bonuses owed for `chain` at `price`, by player name.
    ///
    /// Holder rankings come from `self`.
    #[must_use]
    pub fn bonuses(&self, chain: Chain, price: u32) -> Vec<(String, u32)> {
        let majority = self.majority_stockholders(chain);
        let minority = self.minority_stockholders(chain);
        let majority_bonus = MAJORITY_BONUS_SCALE * price;
        let minority_bonus = MINORITY_BONUS_SCALE * price;

        let name = |p: &&Player| p.name().to_string();
        match (majority.as_slice(), minority.as_slice()) {
            ([], _) => Vec::new(),
            ([sole], []) => vec![(name(sole), majority_bonus + minority_bonus)],
            ([sole], [second]) => vec![(name(sole), majority_bonus), (name(second), minority_bonus)],
            ([sole], seconds) => {
                let share = split(minority_bonus, seconds.len());
                std::iter::once((name(sole), majority_bonus))
                    .chain(seconds.iter().map(|p| (name(p), share)))
                    .collect()
            }
            (tied, _) => {
                let share = split(majority_bonus + minority_bonus, tied.len());
                tied.iter().map(|p| (name(p), share)).collect()
            }
        }
    }

    /// Pay the stockholder bonuses of `chain` at `price`.
    ///
    /// Holders are ranked on `reference`; the money goes to the players of
    /// the same name in `self`.
    pub fn payout(&mut self, chain: Chain, price: u32, reference: &GameState) -> Result<(), StateError> {
        for (name, amount) in reference.bonuses(chain, price) {
            self.player_mut(&name)?.credit(amount);
            debug!(player = %name, %chain, amount, "paid bonus");
        }
        Ok(())
    }

    /// Pay the bonuses of every chain acquired by placing `tile` as a merge
    /// into `acquirer`.
    ///
    /// Does nothing unless that is a legal merge on `reference`, which is
    /// also where prices and holdings are read. Only cash changes.
    pub fn merge_payout(
        &mut self,
        tile: Position,
        acquirer: Option<Chain>,
        reference: &GameState,
    ) -> Result<(), StateError> {
        let Some(acquirer) = acquirer else {
            return Ok(());
        };
        if !reference.board.valid_merge(tile, acquirer) {
            return Ok(());
        }
        for chain in reference.board.acquirees(tile, acquirer) {
            if let Some(price) = reference.board.stock_price(chain) {
                self.payout(chain, price, reference)?;
            }
        }
        Ok(())
    }

    /// Final score of every player.
    ///
    /// Every priced chain whose stock is not all in the pool pays its
    /// bonuses once, then each share is valued at its current price. The
    /// state itself is not changed.
    #[must_use]
    pub fn final_scores(&self) -> Scores {
        let mut scores: Scores = self
            .players
            .iter()
            .map(|p| (p.name().to_string(), p.cash()))
            .collect();

        for chain in Chain::ALL {
            let Some(price) = self.board.stock_price(chain) else {
                continue;
            };
            if self.pool[chain] < SHARES_PER_CHAIN {
                for (name, amount) in self.bonuses(chain, price) {
                    *scores.entry(name).or_default() += amount;
                }
            }
            for player in &self.players {
                *scores.entry(player.name().to_string()).or_default() += player.shares(chain) * price;
            }
        }
        scores
    }
}
