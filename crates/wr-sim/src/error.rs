use thiserror::Error;

use wr_behavior::BehaviorError;
use wr_core::{AgentId, Color, Pos, WrError};
use wr_grid::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world configuration error: {0}")]
    Config(#[from] WrError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("a {color} robot cannot start at {pos}")]
    Placement { color: Color, pos: Pos },

    #[error("{agent} failed to decide: {source}")]
    Behavior {
        agent:  AgentId,
        #[source]
        source: BehaviorError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
