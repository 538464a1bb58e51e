//! Hotel chains and per-chain storage.
//!
//! ## Chain
//!
//! The seven hotel chains, each with a fixed price [`Tier`] and color.
//! Chain order (declaration order) is the deterministic order used for
//! tie-breaking and iteration.
//!
//! ## ChainMap
//!
//! Fixed-size per-chain data storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Chain`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::config::{MAXIMUM_PRICE, MINIMUM_PRICE, PRICE_STEP};

/// Number of hotel chains.
pub const CHAIN_COUNT: usize = 7;

/// A hotel chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Chain {
    American,
    Continental,
    Festival,
    Imperial,
    Sackson,
    Tower,
    Worldwide,
}

/// Price tier of a chain. Higher tiers start their price ladder higher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Worldwide, Sackson.
    Value,
    /// Festival, Imperial, American.
    Mid,
    /// Tower, Continental.
    Premium,
}

impl Chain {
    /// All chains in declaration order.
    pub const ALL: [Chain; CHAIN_COUNT] = [
        Chain::American,
        Chain::Continental,
        Chain::Festival,
        Chain::Imperial,
        Chain::Sackson,
        Chain::Tower,
        Chain::Worldwide,
    ];

    /// Index into [`Chain::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Chain name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Chain::American => "American",
            Chain::Continental => "Continental",
            Chain::Festival => "Festival",
            Chain::Imperial => "Imperial",
            Chain::Sackson => "Sackson",
            Chain::Tower => "Tower",
            Chain::Worldwide => "Worldwide",
        }
    }

    /// Display color used by renderers.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Chain::American => "red",
            Chain::Continental => "blue",
            Chain::Festival => "green",
            Chain::Imperial => "yellow",
            Chain::Sackson => "purple",
            Chain::Tower => "brown",
            Chain::Worldwide => "orange",
        }
    }

    /// Price tier.
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            Chain::Worldwide | Chain::Sackson => Tier::Value,
            Chain::Festival | Chain::Imperial | Chain::American => Tier::Mid,
            Chain::Tower | Chain::Continental => Tier::Premium,
        }
    }

    /// Share price for a chain of the given size.
    ///
    /// Returns `None` below two tiles (the chain is not in play and its
    /// stock cannot be bought). Above that the price climbs in steps of 100
    /// through the size brackets 2, 3, 4, 5, 6-10, 11-20, 21-30, 31-40, 41+,
    /// starting at 200, 300 or 400 depending on tier.
    ///
    /// ```
    /// use rust_acquire::core::Chain;
    ///
    /// assert_eq!(Chain::Worldwide.stock_price(1), None);
    /// assert_eq!(Chain::American.stock_price(4), Some(500));
    /// assert_eq!(Chain::Tower.stock_price(12), Some(900));
    /// ```
    #[must_use]
    pub const fn stock_price(self, size: usize) -> Option<u32> {
        let bracket: u32 = match size {
            0 | 1 => return None,
            2 => 0,
            3 => 1,
            4 => 2,
            5 => 3,
            6..=10 => 4,
            11..=20 => 5,
            21..=30 => 6,
            31..=40 => 7,
            _ => 8,
        };
        let offset: u32 = match self.tier() {
            Tier::Value => 0,
            Tier::Mid => 1,
            Tier::Premium => 2,
        };
        let price = MINIMUM_PRICE + PRICE_STEP * (bracket + offset);
        if price > MAXIMUM_PRICE {
            Some(MAXIMUM_PRICE)
        } else {
            Some(price)
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a chain name.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown hotel chain: {_0:?}")]
pub struct ParseChainError(#[error(not(source))] pub String);

impl FromStr for Chain {
    type Err = ParseChainError;

    /// Accepts the full name (case-insensitive) or its initial letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Chain::ALL
            .into_iter()
            .find(|chain| {
                chain.name().eq_ignore_ascii_case(needle)
                    || (needle.len() == 1 && chain.name()[..1].eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| ParseChainError(s.to_string()))
    }
}

/// Per-chain data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_acquire::core::{Chain, ChainMap};
///
/// let mut pool: ChainMap<u32> = ChainMap::with_value(25);
/// pool[Chain::Tower] -= 1;
/// assert_eq!(pool[Chain::Tower], 24);
/// assert_eq!(pool[Chain::Sackson], 25);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainMap<T> {
    data: [T; CHAIN_COUNT],
}

impl<T> ChainMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Chain) -> T) -> Self {
        Self {
            data: Chain::ALL.map(factory),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over `(Chain, &T)` pairs in chain order.
    pub fn iter(&self) -> impl Iterator<Item = (Chain, &T)> {
        Chain::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over `(Chain, &mut T)` pairs in chain order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Chain, &mut T)> {
        Chain::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over values in chain order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Chain> for ChainMap<T> {
    type Output = T;

    fn index(&self, chain: Chain) -> &Self::Output {
        &self.data[chain.index()]
    }
}

impl<T> IndexMut<Chain> for ChainMap<T> {
    fn index_mut(&mut self, chain: Chain) -> &mut Self::Output {
        &mut self.data[chain.index()]
    }
}
