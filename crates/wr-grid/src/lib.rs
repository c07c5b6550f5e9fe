//! `wr-grid`: bounded multi-occupancy grid.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`grid`]  | `MultiGrid`: per-cell entity lists, Moore neighbourhoods   |
//! | [`error`] | `GridError`, `GridResult<T>`                                |
//!
//! The grid is a plain storage collaborator: it knows where entities sit, not
//! what they mean.  Zone restrictions, pick-up rules and visibility are
//! enforced one layer up, in `wr-sim`'s environment transition.

pub mod error;
pub mod grid;


pub use error::{GridError, GridResult};
pub use grid::MultiGrid;
