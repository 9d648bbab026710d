//! Move generation over occupancy bitboards
//!
//! This module generates all pseudo-legal moves for one side from an
//! [`Occupancy`] snapshot, using the precomputed [`AttackTables`]. Nothing here
//! checks whether the mover's king is left capturable.
//!
//! ## Module Organization
//!
//! - `tables` - Knight and king reach per square, built once
//! - `pawn` - Bit-parallel pushes, double pushes and captures
//! - `knight` / `king` - Table lookup minus own occupancy
//! - `sliding` - Ray casting for bishops, rooks and queens (opt-in)
//!
//! ## Ordering
//!
//! Moves come out grouped by piece kind (pawns, knights, sliders when enabled,
//! king) and in bit-scan order inside each group. Callers must not rely on the
//! order; it is only guaranteed to be the same for the same position.

mod king;
mod knight;
mod pawn;
mod sliding;
mod tables;

pub use king::generate_king_moves;
pub use knight::generate_knight_moves;
pub use pawn::generate_pawn_moves;
pub use sliding::{generate_sliding_moves, sliding_targets};
pub use tables::AttackTables;

use crate::bitset::BitBoard;
use crate::types::{Board, Color, Move, Piece, PieceKind, Square};

/// Switches for optional generator behaviour
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Generate bishop, rook and queen moves.
    ///
    /// Off by default: sliders sit on the board but never move, matching the
    /// pawn/knight/king rule set.
    pub sliding_pieces: bool,
}

/// Which squares hold which pieces, as bitboards
///
/// Derived from a [`Board`] whenever moves are generated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    by_color: [BitBoard; 2],
    by_piece: [[BitBoard; 6]; 2],
}

impl Occupancy {
    pub fn from_board(board: &Board) -> Self {
        let mut occupancy = Occupancy::default();
        for (square, piece) in board.iter().enumerate() {
            if let Some(piece) = piece {
                let color = piece.color.index();
                occupancy.by_color[color].set(square as u8);
                occupancy.by_piece[color][piece.kind.index()].set(square as u8);
            }
        }
        occupancy
    }

    /// All squares holding a piece of `color`
    #[inline]
    pub fn side(&self, color: Color) -> BitBoard {
        self.by_color[color.index()]
    }

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> BitBoard {
        self.by_piece[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupied(&self) -> BitBoard {
        self.by_color[0] | self.by_color[1]
    }

    #[inline]
    pub fn empty(&self) -> BitBoard {
        !self.occupied()
    }
}

/// Generate all pseudo-legal moves for `side`
///
/// # Arguments
///
/// * `occupancy` - Piece placement as bitboards
/// * `side` - Color to generate moves for
/// * `attacks` - Precomputed knight/king tables
/// * `config` - Optional generator behaviour
///
/// # Examples
///
/// ```rust
/// use pawnking_engine::move_gen::{generate_pseudo_legal_moves, AttackTables, GeneratorConfig, Occupancy};
/// use pawnking_engine::{Color, GameState};
///
/// let state = GameState::default();
/// let moves = generate_pseudo_legal_moves(
///     &Occupancy::from_board(state.board()),
///     Color::White,
///     &AttackTables::new(),
///     GeneratorConfig::default(),
/// );
/// assert_eq!(moves.len(), 20);
/// ```
pub fn generate_pseudo_legal_moves(
    occupancy: &Occupancy,
    side: Color,
    attacks: &AttackTables,
    config: GeneratorConfig,
) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);

    generate_pawn_moves(occupancy, side, &mut moves);
    generate_knight_moves(occupancy, side, attacks, &mut moves);
    if config.sliding_pieces {
        generate_sliding_moves(occupancy, side, &mut moves);
    }
    generate_king_moves(occupancy, side, attacks, &mut moves);

    moves
}

/// Push one move per set bit of `targets`, all starting from `from`
#[inline]
pub(crate) fn push_targets(from: Square, targets: BitBoard, piece: Piece, moves: &mut Vec<Move>) {
    moves.extend(targets.iter().map(|to| Move::new(from, to, piece)));
}
