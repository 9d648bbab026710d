//! # Engine constants
//!
//! Piece values (centipawns), board masks, movement offsets and search
//! sentinels shared by every other module.
//!
//! ## Masks
//!
//! File and rank masks follow the a1 = bit 0 layout of [`BitBoard`]. The
//! `NOT_FILE_*` masks are applied to pawns *before* a diagonal shift so a pawn on
//! the a-file cannot "capture" onto the h-file one rank up, and vice versa.
//!
//! ## Offsets
//!
//! Knight and king reach is described as `(file delta, rank delta)` pairs rather
//! than linear square deltas. A candidate is kept only when both coordinates stay
//! inside 0-7, which filters edge cases without any wraparound checks.
//!
//! ## Search sentinels
//!
//! [`INF`] is a large finite bound. Negating it never overflows an `i32`, and no
//! reachable evaluation comes close (all material on the board sums to well
//! under 10 000).

use crate::bitset::BitBoard;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 2000;

pub const FILE_A: BitBoard = BitBoard(0x0101_0101_0101_0101);
pub const FILE_H: BitBoard = BitBoard(FILE_A.0 << 7);

pub const RANK_1: BitBoard = BitBoard(0x0000_0000_0000_00FF);
pub const RANK_3: BitBoard = BitBoard(RANK_1.0 << 16);
pub const RANK_6: BitBoard = BitBoard(RANK_1.0 << 40);

pub const NOT_FILE_A: BitBoard = BitBoard(!FILE_A.0);
pub const NOT_FILE_H: BitBoard = BitBoard(!FILE_H.0);

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1), (1, 1), (1, 0), (1, -1),
    (0, -1), (-1, -1), (-1, 0), (-1, 1),
];

pub const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const ROOK_RAYS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const INF: i32 = 1_000_000;
pub const NEG_INF: i32 = -INF;

pub const DEFAULT_SEARCH_DEPTH: u32 = 5;
pub const MAX_SEARCH_DEPTH: u32 = 8;

/// Character used for an empty square in a board snapshot.
pub const EMPTY_SQUARE_CHAR: char = '0';

/// Standard initial setup as a snapshot string (index 0 = a1).
pub const STARTING_SNAPSHOT: &str = concat!(
    "RNBQKBNR",
    "PPPPPPPP",
    "00000000",
    "00000000",
    "00000000",
    "00000000",
    "pppppppp",
    "rnbqkbnr",
);
