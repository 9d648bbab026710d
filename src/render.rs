//! Plain-text board printer
//!
//! Rank 8 at the top, a-file on the left. Empty squares print as `.` and
//! highlighted empty squares as `*`.

use pawnking_engine::{BitBoard, GameState};
use std::fmt::Write;

pub fn render_board(state: &GameState, highlights: BitBoard) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let _ = write!(out, "{} ", rank + 1);
        for file in 0..8u8 {
            let square = rank * 8 + file;
            let c = match state.piece_at(square) {
                Some(piece) => piece.to_char(),
                None if highlights.test(square) => '*',
                None => '.',
            };
            out.push(c);
            if file < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}
