//! Grid error type.

use thiserror::Error;

use wr_core::{Entity, Pos};

/// Errors produced by `wr-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell {pos} lies outside the {width}x{height} grid")]
    OutOfBounds { pos: Pos, width: u32, height: u32 },

    #[error("{entity} is not at {pos}")]
    NotAt { entity: Entity, pos: Pos },
}

pub type GridResult<T> = Result<T, GridError>;
