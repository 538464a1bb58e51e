//! Seeded randomness for dealing tiles.
//!
//! Tile handout and random next-tile selection both go through [`GameRng`],
//! so a game dealt from a seed can be replayed exactly. A draw position can
//! be checkpointed and resumed later without replaying earlier draws.
//!
//! ```
//! use rust_acquire::core::{GameRng, Position};
//!
//! let deck: Vec<Position> = Position::all().collect();
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick(&deck), b.pick(&deck));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8-backed random source for tile draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    chacha: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            chacha: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn below(&mut self, len: usize) -> usize {
        self.chacha.gen_range(0..len)
    }

    /// Uniform element of `items`, or `None` if it is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.chacha)
    }

    /// Remove a uniform element from `pile`. The pile's order is not kept.
    pub fn draw<T>(&mut self, pile: &mut Vec<T>) -> Option<T> {
        if pile.is_empty() {
            return None;
        }
        let index = self.below(pile.len());
        Some(pile.swap_remove(index))
    }

    /// Capture the current draw position.
    #[must_use]
    pub fn checkpoint(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.chacha.get_word_pos(),
        }
    }

    /// Continue drawing from a captured position.
    #[must_use]
    pub fn resume(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.chacha.set_word_pos(state.word_pos);
        rng
    }
}

/// Seed plus ChaCha word position; enough to resume a [`GameRng`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
