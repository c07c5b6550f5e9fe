//! `wr-behavior`: how a robot turns beliefs into one action per round.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`action`] | `Action` (`Move` xor `Handle`), `HandleWaste`                   |
//! | [`policy`] | `decide`, `step_right`, `look_for_waste`, `waste_available`     |
//! | [`model`]  | `BehaviorModel` trait, `ZonePolicy`                             |
//! | [`error`]  | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! Deliberation is a pure function of a robot's [`KnowledgeBase`] plus its
//! own RNG.  It never touches the grid, the ledger, or the mailbox, so the
//! decide half of a round can run for every robot before (or in parallel
//! with) any action being applied.
//!
//! [`KnowledgeBase`]: wr_agent::KnowledgeBase

pub mod action;
pub mod error;
pub mod model;
pub mod policy;

#[cfg(test)]
mod tests;

pub use action::{Action, HandleWaste};
pub use error::{BehaviorError, BehaviorResult};
pub use model::{BehaviorModel, ZonePolicy};
