use thiserror::Error;

use wr_core::Pos;

#[derive(Debug, Error)]
pub enum BehaviorError {
    /// The robot sees no cell at all: only possible on a malformed grid.
    #[error("no candidate move from {position}: neighbourhood is empty")]
    NoCandidateMove { position: Pos },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
