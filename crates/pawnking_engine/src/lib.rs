//! # Pawnking engine
//!
//! Bitboard move generation and negamax search for a chess variant where only
//! pawns, knights and kings move. Bishops, rooks and queens take part in
//! evaluation but stand still unless
//! [`EngineConfig::sliding_pieces`] is switched on.
//!
//! ## Module Organization
//!
//! - `bitset` - [`BitBoard`] 64-bit square sets
//! - `move_gen` - Attack tables and pseudo-legal move generation
//! - `state` - [`GameState`] with in-place push/pop
//! - `evaluation` - Material plus piece-square scoring
//! - `search` - Alpha-beta negamax and root move selection
//! - `api` - [`Game`], the collaborator-facing facade
//!
//! ## Example
//!
//! ```rust
//! use pawnking_engine::{EngineConfig, Game, Tables};
//! use std::sync::Arc;
//!
//! let tables = Arc::new(Tables::new());
//! let mut game = Game::new(tables, EngineConfig::default());
//!
//! game.apply_move(12, 28).unwrap(); // e2e4
//! let reply = game.choose_and_apply_best_move(1);
//! assert!(reply.is_some());
//! ```

pub mod api;
pub mod bitset;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod state;
pub mod tables;
pub mod types;

pub use api::Game;
pub use bitset::{BitBoard, BitIter};
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use search::{find_best_move, SearchStats, Searcher};
pub use state::GameState;
pub use tables::Tables;
pub use types::{Board, Color, Move, Piece, PieceKind, Square};
