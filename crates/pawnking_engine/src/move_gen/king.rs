//! King move generation
//!
//! One step in any of the eight directions onto an empty or enemy square.
//! There is no castling, and a king may step onto an attacked square: the
//! engine never tests for check.

use crate::move_gen::{push_targets, AttackTables, Occupancy};
use crate::types::{Color, Move, Piece, PieceKind};

/// Generate king moves for `side`
///
/// Usually there is exactly one king, but a position with none (or several)
/// is handled the same way as any other piece set.
///
/// # Arguments
///
/// * `occupancy` - Piece placement as bitboards
/// * `side` - Color of the king to move
/// * `attacks` - Precomputed king reach per square
/// * `moves` - Output vector to append moves to
pub fn generate_king_moves(
    occupancy: &Occupancy,
    side: Color,
    attacks: &AttackTables,
    moves: &mut Vec<Move>,
) {
    let own = occupancy.side(side);
    let piece = Piece::new(PieceKind::King, side);

    for from in occupancy.pieces(side, PieceKind::King) {
        push_targets(from, attacks.king(from) & !own, piece, moves);
    }
}
