//! `wr-sim`: round loop orchestrator for the waste-relay simulation.
//!
//! # Round loop
//!
//! ```text
//! for round in 1..=config.total_rounds:
//!   ① Dispatch  every message sent in an earlier round is copied into the
//!               inbox of each robot of the recipient colour.
//!   ② Decide    each robot merges its cached observation into its
//!               knowledge base and calls BehaviorModel::decide
//!               (parallel with the `parallel` feature).
//!   ③ Apply     in activation order, Environment::apply mutates grid,
//!               ledger, carry-lists and mailbox, and returns the robot's
//!               next observation, cached until the next round.
//! ```
//!
//! Splitting ② from ③ does not change what any robot decides: a decision
//! reads only the robot's own knowledge, which was fixed by its previous
//! round's observation.  Messages sent in ③ land in the mailbox after ①
//! already ran, so they are delivered one round later.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decide phase on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wr_behavior::ZonePolicy;
//! use wr_core::WorldConfig;
//! use wr_sim::{NoopObserver, RandomOrder, SimBuilder};
//!
//! let config = WorldConfig::default();
//! let order = RandomOrder::seeded(config.seed);
//! let mut sim = SimBuilder::new(config, ZonePolicy, order).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod environment;
pub mod error;
pub mod mailbox;
pub mod observer;
pub mod schedule;
pub mod sim;


pub use builder::SimBuilder;
pub use environment::Environment;
pub use error::{SimError, SimResult};
pub use mailbox::MessageService;
pub use observer::{NoopObserver, RoundSummary, SimObserver, StepRecord, TracingObserver};
pub use schedule::{ActivationOrder, FixedOrder, RandomOrder};
pub use sim::Sim;
