//! Undo records for reversible move application

use crate::types::{Color, Move, Piece};

/// Minimal diff needed to reverse one `push`
///
/// Holds the two squares a move touched as they were before it, plus the side
/// that made the move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct UndoRecord {
    pub mv: Move,
    pub moved: Option<Piece>,
    pub captured: Option<Piece>,
    pub side: Color,
}
