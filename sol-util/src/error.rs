//! Error types shared by the arena allocator.
//!
//! Per-phase errors (lexical, syntactic, emission) live in their owning
//! crates; this module only covers the allocator both phases share.

use thiserror::Error;

/// Error type for arena allocation failures.
#[derive(Debug, Error)]
pub enum ArenaError {
    /// The arena has exhausted its backing storage.
    #[error("arena exhausted: requested {requested} bytes, {available} available")]
    Exhausted { requested: usize, available: usize },
}

/// Result type alias for arena operations.
pub type ArenaResult<T> = std::result::Result<T, ArenaError>;
