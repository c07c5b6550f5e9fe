//! Framework error type.
//!
//! Only recoverable setup failures live here.  Broken simulation invariants
//! (a policy asking for an impossible action) are assertion panics at the
//! call site, not error values.

use thiserror::Error;

/// The top-level error type for `wr-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WrError {
    #[error("grid width {0} is not divisible by 3")]
    WidthNotDivisible(u32),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `wr-*` crates.
pub type WrResult<T> = Result<T, WrError>;
