//! Error types for chess engine
//!
//! Covers the few ways a collaborator can hand the engine bad input. Internal
//! invariant violations (an unpaired `pop`) panic instead.

use crate::types::Square;
use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board snapshot does not hold exactly one character per square
    #[error("Invalid snapshot length: {len} characters (expected 64)")]
    InvalidSnapshotLength { len: usize },

    /// Invalid square index (out of bounds)
    #[error("Invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: Square },

    /// Move is not in the side to move's generated move list
    #[error("Illegal move: from square {from} to square {to}")]
    IllegalMove { from: Square, to: Square },

    /// Requested search depth exceeds the supported maximum
    #[error("Invalid search depth: {depth} (maximum is {max})")]
    InvalidDepth { depth: u32, max: u32 },
}

/// Result type alias for chess engine operations
pub type EngineResult<T> = Result<T, EngineError>;
