//! Invariant checking for game states.
//!
//! Invariants are logical properties every reachable `GameState` satisfies.
//! With the `contracts` feature on (the default) each state mutation checks
//! them afterwards and turns a violation into
//! [`StateError::InvariantViolation`]. Without the feature [`verify`] is a
//! no-op and the checks cost nothing.

pub mod invariants;

pub use invariants::{ChainsConnected, StockConservation, TilePartition};

#[cfg(feature = "contracts")]
use tracing::warn;

use crate::error::StateError;
use crate::state::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    pub description: String,
}

impl InvariantViolation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

/// Invariants checked after every state mutation.
pub type StateInvariants = (TilePartition, StockConservation);

/// Every invariant of a reachable game state, including the board-shape
/// check that is too costly to run on each mutation.
pub type AllInvariants = (TilePartition, StockConservation, ChainsConnected);

/// Check [`StateInvariants`] on `state`.
#[cfg(feature = "contracts")]
pub fn verify(state: &GameState) -> Result<(), StateError> {
    StateInvariants::check_all(state).map_err(|violations| {
        let joined = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(violations = %joined, "invariant violated");
        StateError::InvariantViolation(joined)
    })
}

/// Invariant checking is compiled out.
#[cfg(not(feature = "contracts"))]
#[inline(always)]
pub fn verify(_state: &GameState) -> Result<(), StateError> {
    Ok(())
}
