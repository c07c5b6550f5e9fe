//! `wr-agent`: robot state and the value types that flow through a round.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`waste`]       | `Waste`, `WasteLedger`, `compact` (the Transform rule)      |
//! | [`observation`] | `Observation`, `CellView`, `CellContent`                    |
//! | [`knowledge`]   | `KnowledgeBase`: per-robot beliefs and hand-off hints      |
//! | [`message`]     | `Message`, `Performative`                                   |
//! | [`robot`]       | `Robot`: zone, carry-list, inbox, cached observation       |
//! | [`store`]       | `RobotStore` (dense robot storage), `AgentRngs`             |
//! | [`builder`]     | `RobotStoreBuilder`                                         |
//!
//! # Waste ownership
//!
//! A waste unit is a plain value that is *moved* between exactly two homes:
//! the ledger's placed map (visible on the grid) or one robot's carry-list
//! (held, invisible).  Ownership transfer is how the "placed xor held"
//! invariant is kept; there is no shared handle to get out of sync.

pub mod builder;
pub mod knowledge;
pub mod message;
pub mod observation;
pub mod robot;
pub mod store;
pub mod waste;

#[cfg(test)]
mod tests;

pub use builder::RobotStoreBuilder;
pub use knowledge::KnowledgeBase;
pub use message::{Message, Performative};
pub use observation::{CellContent, CellView, Observation};
pub use robot::Robot;
pub use store::{AgentRngs, RobotStore};
pub use waste::{Waste, WasteLedger, compact};
