//! Top-level world configuration.

use crate::{WrError, WrResult, ZoneLayout};

/// Parameters of one simulation run.
///
/// Typically built with `..WorldConfig::default()` or loaded from JSON by the
/// driver (with the `serde` feature), then validated by the simulation
/// builder before any round runs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Grid width in cells.  Must be a positive multiple of 3.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Wastes of the zone's colour scattered in each zone at start.
    pub wastes_per_zone: u32,

    /// Robots of the zone's colour placed in each zone at start.
    pub robots_per_zone: u32,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Rounds simulated by `Sim::run`.
    pub total_rounds: u64,

    /// Call `SimObserver::on_snapshot` every N rounds.  0 disables snapshots.
    pub snapshot_interval_rounds: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width:                    21,
            height:                   5,
            wastes_per_zone:          6,
            robots_per_zone:          1,
            seed:                     42,
            total_rounds:             200,
            snapshot_interval_rounds: 1,
        }
    }
}

impl WorldConfig {
    /// Check the configuration and return the zone layout it implies.
    ///
    /// # Errors
    ///
    /// [`WrError::WidthNotDivisible`] for a width that is not a multiple of
    /// 3, [`WrError::Config`] for an empty grid.
    pub fn validate(&self) -> WrResult<ZoneLayout> {
        if self.height == 0 {
            return Err(WrError::Config("grid height must be positive".into()));
        }
        ZoneLayout::new(self.width)
    }

    /// The last round `Sim::run` simulates.  Rounds are numbered from 1;
    /// round 0 is world setup and initial perception.
    #[inline]
    pub fn last_round(&self) -> crate::Round {
        crate::Round(self.total_rounds)
    }
}
