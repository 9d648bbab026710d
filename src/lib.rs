//! # Pawnking
//!
//! Command-line front end for the `pawnking_engine` crate: FEN conversion,
//! board printing, persisted settings and the `pawnking` subcommands.

pub mod cli;
pub mod error;
pub mod fen;
pub mod render;
pub mod settings;

pub use error::{AppError, AppResult};
pub use settings::Settings;
