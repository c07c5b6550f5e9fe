//! Simulation time.
//!
//! The simulation advances in discrete rounds.  Within a round, message
//! dispatch completes before any robot acts, so a `Round` stamp is enough to
//! reason about message latency and observation freshness.
//!
//! `Round::ZERO` is reserved for world setup: initial observations carry it,
//! and the first simulated round is `Round(1)`.

use std::fmt;

/// An absolute round counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u64);

impl Round {
    pub const ZERO: Round = Round(0);

    /// The round after `self`.
    #[inline]
    pub fn next(self) -> Round {
        Round(self.0 + 1)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
