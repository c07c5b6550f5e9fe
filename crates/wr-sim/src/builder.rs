//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use wr_agent::RobotStoreBuilder;
use wr_behavior::BehaviorModel;
use wr_core::{Color, Pos, SimRng, WorldConfig};

use crate::{ActivationOrder, Environment, Sim, SimResult};

/// Fluent builder for [`Sim<B, S>`].
///
/// # Required inputs
///
/// - [`WorldConfig`]: grid size, population, seed, round count
/// - `B: BehaviorModel`: usually [`wr_behavior::ZonePolicy`]
/// - `S: ActivationOrder`: [`RandomOrder`][crate::RandomOrder] or
///   [`FixedOrder`][crate::FixedOrder]
///
/// # Optional inputs
///
/// | Method               | Default                                  |
/// |----------------------|------------------------------------------|
/// | `.populate(bool)`    | `true`: random wastes and robots per zone |
/// | `.waste(color, pos)` | none                                     |
/// | `.robot(color, pos)` | none                                     |
///
/// Explicit wastes and robots are placed after the random population.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, ZonePolicy, FixedOrder)
///     .populate(false)
///     .robot(Color::Green, Pos::new(3, 2))
///     .waste(Color::Green, Pos::new(4, 2))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel, S: ActivationOrder> {
    config:   WorldConfig,
    behavior: B,
    order:    S,
    populate: bool,
    wastes:   Vec<(Color, Pos)>,
    robots:   Vec<(Color, Pos)>,
}

impl<B: BehaviorModel, S: ActivationOrder> SimBuilder<B, S> {
    pub fn new(config: WorldConfig, behavior: B, order: S) -> Self {
        Self {
            config,
            behavior,
            order,
            populate: true,
            wastes:   Vec::new(),
            robots:   Vec::new(),
        }
    }

    /// Scatter `wastes_per_zone` wastes and `robots_per_zone` robots in each
    /// zone at random.  Turn off for hand-built scenarios.
    pub fn populate(mut self, populate: bool) -> Self {
        self.populate = populate;
        self
    }

    /// Place a waste of `color` at `pos`.
    pub fn waste(mut self, color: Color, pos: Pos) -> Self {
        self.wastes.push((color, pos));
        self
    }

    /// Add a robot of `color` starting at `pos`.
    pub fn robot(mut self, color: Color, pos: Pos) -> Self {
        self.robots.push((color, pos));
        self
    }

    /// Validate the configuration, lay tiles, place wastes and robots, and
    /// hand every robot its initial observation.
    pub fn build(self) -> SimResult<Sim<B, S>> {
        let layout = self.config.validate()?;
        let height = self.config.height as i32;
        let mut env = Environment::new(layout, self.config.height)?;
        let mut rng = SimRng::new(self.config.seed);
        let mut robots = RobotStoreBuilder::new(self.config.seed);

        // ── Random population, zone by zone ───────────────────────────────
        if self.populate {
            for zone in *layout.zones() {
                for _ in 0..self.config.wastes_per_zone {
                    let pos = Pos::new(rng.gen_range(zone.x_min..zone.x_max), rng.gen_range(0..height));
                    env.place_waste(zone.color, pos)?;
                }
                for _ in 0..self.config.robots_per_zone {
                    let pos = Pos::new(rng.gen_range(zone.x_min..zone.x_max), rng.gen_range(0..height));
                    robots.add(zone, pos);
                }
            }
        }

        // ── Explicit placements ───────────────────────────────────────────
        for (color, pos) in self.wastes {
            env.place_waste(color, pos)?;
        }
        for (color, pos) in self.robots {
            robots.add(layout.zone(color), pos);
        }

        let (store, rngs) = robots.build();
        env.install_robots(store)?;
        info!(
            width = self.config.width,
            height = self.config.height,
            robots = env.robots().len(),
            wastes = env.ledger().placed_len(),
            "world built"
        );

        Ok(Sim {
            config:   self.config,
            env,
            rngs,
            behavior: self.behavior,
            order:    self.order,
        })
    }
}
