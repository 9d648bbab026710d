//! Static position evaluation
//!
//! The score is a sum over all 64 squares of one combined value per
//! (color, piece, square): material plus piece-square bonus. White entries are
//! positive, Black entries are the negated mirror image (`square ^ 56`), so the
//! raw sum reads "how good for White". [`evaluate`] then multiplies by the side
//! to move sign so the result is always from the mover's point of view, which is
//! what negamax needs.
//!
//! ## Module Organization
//!
//! - `material` - Piece values and material balance
//! - `pst` - Piece-square tables (White's side, a1 = 0)

mod material;
mod pst;

pub use material::piece_value;

use crate::state::GameState;
use crate::types::{Board, Color, PieceKind, Square};
use pst::pst_value;

/// Combined material + positional value for every (color, piece, square)
///
/// Built once and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalTables {
    values: [[[i32; 64]; 6]; 2],
}

impl EvalTables {
    pub fn new() -> Self {
        let mut values = [[[0; 64]; 6]; 2];

        for kind in PieceKind::ALL {
            let material = piece_value(kind);
            for square in 0..64u8 {
                values[Color::White.index()][kind.index()][square as usize] =
                    material + pst_value(kind, square);
                values[Color::Black.index()][kind.index()][square as usize] =
                    -(material + pst_value(kind, square ^ 56));
            }
        }

        EvalTables { values }
    }

    /// Signed table entry: positive for White pieces, negative for Black
    #[inline]
    pub fn value(&self, color: Color, kind: PieceKind, square: Square) -> i32 {
        self.values[color.index()][kind.index()][square as usize]
    }
}

impl Default for EvalTables {
    fn default() -> Self {
        EvalTables::new()
    }
}

/// Evaluate a board from White's point of view
///
/// Empty squares contribute nothing.
pub fn evaluate_white_relative(board: &Board, tables: &EvalTables) -> i32 {
    board
        .iter()
        .enumerate()
        .filter_map(|(square, piece)| {
            piece.map(|piece| tables.value(piece.color, piece.kind, square as Square))
        })
        .sum()
}

/// Evaluate a position for the side about to move
///
/// # Examples
///
/// ```rust
/// use pawnking_engine::evaluation::{evaluate, EvalTables};
/// use pawnking_engine::GameState;
///
/// let tables = EvalTables::new();
/// assert_eq!(evaluate(&GameState::default(), &tables), 0);
/// ```
pub fn evaluate(state: &GameState, tables: &EvalTables) -> i32 {
    evaluate_white_relative(state.board(), tables) * state.side_sign()
}
