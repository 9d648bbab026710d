//! Knight move generation
//!
//! Knights move in an L-shape: 2 squares in one direction, then 1 square
//! perpendicular. They jump over pieces, so the only occupancy that matters is
//! the destination square.
//!
//! ## Knight Movement Rules
//!
//! - 8 possible destinations from most squares (fewer near edges)
//! - Cannot move to squares occupied by own pieces
//! - Quiet moves and captures come from the same mask: empty or enemy

use crate::move_gen::{push_targets, AttackTables, Occupancy};
use crate::types::{Color, Move, Piece, PieceKind};

/// Generate knight moves for every knight of `side`
///
/// Each knight's precomputed reach is masked with "not own pieces".
///
/// # Arguments
///
/// * `occupancy` - Piece placement as bitboards
/// * `side` - Color of the knights to move
/// * `attacks` - Precomputed knight reach per square
/// * `moves` - Output vector to append moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_knight_moves(&occupancy, Color::White, &attacks, &mut moves);
/// // From the initial setup: Na3, Nc3, Nf3, Nh3
/// ```
pub fn generate_knight_moves(
    occupancy: &Occupancy,
    side: Color,
    attacks: &AttackTables,
    moves: &mut Vec<Move>,
) {
    let own = occupancy.side(side);
    let piece = Piece::new(PieceKind::Knight, side);

    for from in occupancy.pieces(side, PieceKind::Knight) {
        push_targets(from, attacks.knight(from) & !own, piece, moves);
    }
}
