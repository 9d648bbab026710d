//! FEN piece placement conversion
//!
//! The engine speaks 64-character snapshots starting at a1. FEN lists rank 8
//! first and compresses empty squares into digit runs, so both directions need
//! the ranks reversed.
//!
//! Only the placement and side-to-move fields are used. Castling, en passant
//! and the move counters are accepted and ignored.

use crate::error::{AppError, AppResult};
use pawnking_engine::constants::EMPTY_SQUARE_CHAR;
use pawnking_engine::{Color, GameState, Piece};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Parse a FEN string into a snapshot and, if present, the side to move
///
/// # Examples
///
/// ```rust
/// use pawnking::fen::parse_fen;
/// use pawnking_engine::Color;
///
/// let (snapshot, side) = parse_fen("8/8/8/8/8/8/8/4K3 b").unwrap();
/// assert_eq!(snapshot.find('K'), Some(4));
/// assert_eq!(side, Some(Color::Black));
/// ```
pub fn parse_fen(fen: &str) -> AppResult<(String, Option<Color>)> {
    let invalid = |reason: &str| AppError::InvalidFen {
        fen: fen.to_string(),
        reason: reason.to_string(),
    };

    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or_else(|| invalid("empty string"))?;
    let side = match fields.next() {
        None => None,
        Some("w") | Some("W") => Some(Color::White),
        Some("b") | Some("B") => Some(Color::Black),
        Some(_) => return Err(invalid("side to move must be 'w' or 'b'")),
    };

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("expected 8 ranks separated by '/'"));
    }

    let mut snapshot = String::with_capacity(64);
    // FEN starts at rank 8, the snapshot at rank 1
    for rank in ranks.iter().rev() {
        let mut files = 0u32;
        for c in rank.chars() {
            if let Some(run) = c.to_digit(10) {
                if run == 0 || run > 8 {
                    return Err(invalid("empty-square runs must be 1-8"));
                }
                files += run;
                snapshot.extend(std::iter::repeat(EMPTY_SQUARE_CHAR).take(run as usize));
            } else if Piece::from_char(c).is_some() {
                files += 1;
                snapshot.push(c);
            } else {
                return Err(invalid("unknown piece letter"));
            }
        }
        if files != 8 {
            return Err(invalid("every rank must cover 8 files"));
        }
    }

    Ok((snapshot, side))
}

/// FEN piece placement and side to move for a position
pub fn to_fen(state: &GameState) -> String {
    let mut fen = String::new();

    for rank in (0..8u8).rev() {
        let mut empty = 0;
        for file in 0..8u8 {
            match state.piece_at(rank * 8 + file) {
                Some(piece) => {
                    if empty > 0 {
                        fen.push_str(&empty.to_string());
                        empty = 0;
                    }
                    fen.push(piece.to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            fen.push_str(&empty.to_string());
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match state.side_to_move() {
        Color::White => 'w',
        Color::Black => 'b',
    });
    fen
}
