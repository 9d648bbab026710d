//! Pawn move generation
//!
//! Pawns are generated for the whole side at once with set operations, never
//! square by square:
//!
//! - **Single push**: pawns shifted one rank forward, masked by empty squares
//! - **Double push**: single-push targets on the third rank (from the mover's
//!   side) shifted one more rank, masked by empty squares again. A pawn can only
//!   land on its third rank by a single push from its home rank, and the first
//!   mask already guarantees the square it passes over is empty.
//! - **Captures**: pawns shifted one rank forward and one file sideways. The
//!   a-file (or h-file) pawns are masked out before the shift so nothing wraps
//!   onto the opposite edge. The result is intersected with enemy occupancy.
//!
//! Each of the four target sets is expanded into moves by subtracting the fixed
//! shift from every destination to recover its origin.
//!
//! Promotion and en passant are not part of this rule set: a pawn that reaches
//! the last rank stays a pawn and simply has no forward moves.

use crate::bitset::BitBoard;
use crate::constants::{NOT_FILE_A, NOT_FILE_H, RANK_3, RANK_6};
use crate::move_gen::Occupancy;
use crate::types::{Color, Move, Piece, PieceKind, Square};

/// Shift a bitboard by a signed square delta (positive = towards rank 8)
#[inline]
fn shift(bb: BitBoard, delta: i8) -> BitBoard {
    if delta >= 0 {
        bb << delta as u32
    } else {
        bb >> delta.unsigned_abs() as u32
    }
}

/// Square delta of one step forward for `side`
#[inline]
const fn forward(side: Color) -> i8 {
    match side {
        Color::White => 8,
        Color::Black => -8,
    }
}

/// Rank a single push from the home rank lands on
#[inline]
const fn double_push_rank(side: Color) -> BitBoard {
    match side {
        Color::White => RANK_3,
        Color::Black => RANK_6,
    }
}

/// Generate all pawn moves for `side`
///
/// # Arguments
///
/// * `occupancy` - Piece placement as bitboards
/// * `side` - Color of the pawns to move
/// * `moves` - Output vector to append moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&occupancy, Color::White, &mut moves);
/// // From the initial setup: 8 single and 8 double pushes
/// ```
pub fn generate_pawn_moves(occupancy: &Occupancy, side: Color, moves: &mut Vec<Move>) {
    let pawns = occupancy.pieces(side, PieceKind::Pawn);
    if pawns.is_empty() {
        return;
    }

    let empty = occupancy.empty();
    let enemy = occupancy.side(side.opponent());
    let piece = Piece::new(PieceKind::Pawn, side);
    let step = forward(side);

    let single = shift(pawns, step) & empty;
    let double = shift(single & double_push_rank(side), step) & empty;
    let toward_a = shift(pawns & NOT_FILE_A, step - 1) & enemy;
    let toward_h = shift(pawns & NOT_FILE_H, step + 1) & enemy;

    expand(single, step, piece, moves);
    expand(double, 2 * step, piece, moves);
    expand(toward_a, step - 1, piece, moves);
    expand(toward_h, step + 1, piece, moves);
}

/// Turn a set of destinations into moves whose origin is `to - delta`
#[inline]
fn expand(targets: BitBoard, delta: i8, piece: Piece, moves: &mut Vec<Move>) {
    moves.extend(
        targets
            .iter()
            .map(|to| Move::new((to as i8 - delta) as Square, to, piece)),
    );
}
