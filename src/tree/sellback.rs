//! Lazy enumeration of merger sell-back assignments.
//!
//! Every player independently picks a subset of the acquired chains to cash
//! out, so an assignment is a number in base `2^k` with one digit per player
//! (`k` acquired chains). [`SellbackOptions`] steps an odometer through those
//! numbers and decodes each one on demand. The digits are kept separately,
//! so any number of players can be walked even when the count of
//! assignments does not fit in a `usize`.

use smallvec::SmallVec;

use crate::core::{Chain, SellbackChoice, Sellbacks};

/// Iterator over every sell-back assignment for one merge.
///
/// Yields a single empty assignment when there is nothing to sell.
#[derive(Clone, Debug)]
pub struct SellbackOptions {
    players: Vec<String>,
    subsets: Vec<SellbackChoice>,
    /// One digit per player, least significant first.
    digits: Vec<usize>,
    taken: usize,
    total: Option<usize>,
    done: bool,
}

impl SellbackOptions {
    /// Assignments over `players` choosing among `acquirees`.
    pub fn new(players: Vec<String>, acquirees: &[Chain]) -> Self {
        let subsets = power_set(acquirees);
        let total = u32::try_from(players.len())
            .ok()
            .and_then(|exp| subsets.len().checked_pow(exp));
        Self {
            digits: vec![0; players.len()],
            players,
            subsets,
            taken: 0,
            total,
            done: false,
        }
    }

    /// The single empty assignment.
    pub fn none() -> Self {
        Self::new(Vec::new(), &[])
    }

    /// Number of assignments in a fresh walk, or `None` if it overflows `usize`.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    fn current(&self) -> Sellbacks {
        let mut sellbacks = Sellbacks::none();
        for (name, &digit) in self.players.iter().zip(&self.digits) {
            let choice = &self.subsets[digit];
            if !choice.is_empty() {
                sellbacks.insert(name.clone(), choice.clone());
            }
        }
        sellbacks
    }

    /// Move the odometer forward by `steps`, marking the walk done when it
    /// rolls over.
    fn advance(&mut self, steps: usize) {
        let radix = self.subsets.len();
        let mut carry = steps;
        for digit in &mut self.digits {
            if carry == 0 {
                return;
            }
            let sum = *digit + carry % radix;
            carry = carry / radix + sum / radix;
            *digit = sum % radix;
        }
        if carry > 0 {
            self.done = true;
        }
    }
}

impl Iterator for SellbackOptions {
    type Item = Sellbacks;

    fn next(&mut self) -> Option<Sellbacks> {
        if self.done {
            return None;
        }
        let sellbacks = self.current();
        self.taken = self.taken.saturating_add(1);
        self.advance(1);
        Some(sellbacks)
    }

    fn nth(&mut self, n: usize) -> Option<Sellbacks> {
        if self.done {
            return None;
        }
        self.taken = self.taken.saturating_add(n);
        self.advance(n);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.total {
            Some(total) => {
                let left = total.saturating_sub(self.taken);
                (left, Some(left))
            }
            None => (usize::MAX, None),
        }
    }
}

/// Every subset of `chains`, the empty set first.
fn power_set(chains: &[Chain]) -> Vec<SellbackChoice> {
    (0..1usize << chains.len())
        .map(|mask| {
            chains
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, chain)| *chain)
                .collect::<SmallVec<_>>()
        })
        .collect()
}
