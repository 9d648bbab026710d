//! Sliding piece move generation
//!
//! Bishops, rooks and queens move any number of squares along a ray until
//! blocked. The basic rule set leaves them standing on the board without
//! moving; this generator only runs when
//! [`GeneratorConfig::sliding_pieces`](super::GeneratorConfig) is enabled.
//!
//! ## Algorithm
//!
//! For every ray of the piece:
//! 1. Step square by square from the origin
//! 2. Stop at the board edge
//! 3. At the first occupied square, include it if it holds an enemy piece
//!    (capture) and stop

use crate::bitset::BitBoard;
use crate::board::offset_square;
use crate::constants::{BISHOP_RAYS, ROOK_RAYS};
use crate::move_gen::{push_targets, Occupancy};
use crate::types::{Color, Move, Piece, PieceKind, Square};

/// Destinations of a slider on `from` along `rays`
///
/// # Arguments
///
/// * `from` - Origin square
/// * `rays` - `(file delta, rank delta)` step of each ray
/// * `occupied` - All pieces on the board
/// * `own` - Pieces of the mover's color
///
/// # Examples
///
/// ```rust
/// use pawnking_engine::constants::ROOK_RAYS;
/// use pawnking_engine::move_gen::sliding_targets;
/// use pawnking_engine::BitBoard;
///
/// // Rook on a1 of an empty board: the whole a-file and first rank
/// let targets = sliding_targets(0, &ROOK_RAYS, BitBoard::EMPTY, BitBoard::EMPTY);
/// assert_eq!(targets.count(), 14);
/// ```
pub fn sliding_targets(
    from: Square,
    rays: &[(i8, i8)],
    occupied: BitBoard,
    own: BitBoard,
) -> BitBoard {
    let mut targets = BitBoard::EMPTY;

    for &step in rays {
        let mut current = from;
        while let Some(next) = offset_square(current, step) {
            if occupied.test(next) {
                if !own.test(next) {
                    targets.set(next);
                }
                break;
            }
            targets.set(next);
            current = next;
        }
    }

    targets
}

/// Generate bishop, rook and queen moves for `side`
pub fn generate_sliding_moves(occupancy: &Occupancy, side: Color, moves: &mut Vec<Move>) {
    let occupied = occupancy.occupied();
    let own = occupancy.side(side);

    for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
        let piece = Piece::new(kind, side);
        for from in occupancy.pieces(side, kind) {
            let targets = match kind {
                PieceKind::Bishop => sliding_targets(from, &BISHOP_RAYS, occupied, own),
                PieceKind::Rook => sliding_targets(from, &ROOK_RAYS, occupied, own),
                _ => {
                    sliding_targets(from, &BISHOP_RAYS, occupied, own)
                        | sliding_targets(from, &ROOK_RAYS, occupied, own)
                }
            };
            push_targets(from, targets, piece, moves);
        }
    }
}
