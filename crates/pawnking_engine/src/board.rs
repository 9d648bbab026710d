//! Board utilities and helper functions
//!
//! Provides fundamental board operations used throughout the engine:
//! - Square validation and indexing
//! - Algebraic square names (`a1`..`h8`)
//! - Board mirroring for symmetry checks

use crate::types::{Board, Piece, Square};

/// Convert file and rank to a square index (0-63)
#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// Split a square into `(file, rank)`
#[inline]
pub const fn file_rank(square: Square) -> (u8, u8) {
    (square % 8, square / 8)
}

/// Check if signed coordinates are on the board
#[inline]
pub const fn is_valid_square(file: i8, rank: i8) -> bool {
    file >= 0 && file < 8 && rank >= 0 && rank < 8
}

/// Step from `square` by `(file delta, rank delta)`, or `None` off the board
#[inline]
pub fn offset_square(square: Square, (df, dr): (i8, i8)) -> Option<Square> {
    let (file, rank) = file_rank(square);
    let file = file as i8 + df;
    let rank = rank as i8 + dr;
    is_valid_square(file, rank).then(|| square_at(file as u8, rank as u8))
}

/// Algebraic name of a square, e.g. `12` -> `"e2"`
pub fn square_name(square: Square) -> String {
    let (file, rank) = file_rank(square);
    format!("{}{}", (b'a' + file) as char, rank + 1)
}

/// Parse an algebraic name (`"e2"`, case-insensitive) into a square
pub fn parse_square(name: &str) -> Option<Square> {
    let mut chars = name.trim().chars();
    let file = chars.next()?.to_ascii_lowercase();
    let rank = chars.next()?;
    if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    Some(square_at(file as u8 - b'a', rank as u8 - b'1'))
}

/// Mirror a board across the rank axis and swap piece colors.
///
/// The piece on `square` moves to `square ^ 56` with the opposite color, which
/// turns any position into the same position seen from the other side.
pub fn mirror_board(board: &Board) -> Board {
    let mut mirrored: Board = [None; 64];
    for (square, piece) in board.iter().enumerate() {
        if let Some(piece) = piece {
            mirrored[square ^ 56] = Some(Piece::new(piece.kind, piece.color.opponent()));
        }
    }
    mirrored
}
