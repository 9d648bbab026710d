//! Error types for the command-line collaborator layer
//!
//! Engine errors pass through unchanged; everything else here is about text the
//! user typed or files on disk.

use pawnking_engine::EngineError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// FEN piece placement that does not describe 8 ranks of 8 squares
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Square name outside `a1`..`h8`
    #[error("Invalid square name '{name}' (expected a1-h8)")]
    InvalidSquareName { name: String },

    /// Move text that is not two square names, e.g. `e2e4`
    #[error("Invalid move text '{text}' (expected e.g. e2e4)")]
    InvalidMoveText { text: String },

    #[error("Settings file {path:?}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type AppResult<T> = Result<T, AppError>;
