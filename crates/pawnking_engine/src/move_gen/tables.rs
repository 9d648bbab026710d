//! Attack table initialization
//!
//! Precomputes the knight-hop and king-step reach of every square as bitboards.
//! These 128 tables are computed once and are read-only afterwards.
//!
//! ## Algorithm
//!
//! For each origin square every `(file delta, rank delta)` offset is applied and
//! kept only when the target's file and rank stay within 0-7. The tables ignore
//! occupancy entirely; move generation intersects them with "not own pieces".

use crate::bitset::BitBoard;
use crate::board::offset_square;
use crate::constants::{KING_OFFSETS, KNIGHT_OFFSETS};
use crate::types::Square;

/// Per-square knight and king reachability
///
/// Color independent and immutable once built, so one instance can be shared
/// across any number of searches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackTables {
    knight: [BitBoard; 64],
    king: [BitBoard; 64],
}

impl AttackTables {
    /// Build both tables for all 64 squares
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pawnking_engine::move_gen::AttackTables;
    ///
    /// let tables = AttackTables::new();
    /// // A knight in the corner reaches b3 and c2 only
    /// assert_eq!(tables.knight(0).count(), 2);
    /// ```
    pub fn new() -> Self {
        let mut knight = [BitBoard::EMPTY; 64];
        let mut king = [BitBoard::EMPTY; 64];

        for square in 0..64u8 {
            knight[square as usize] = reach(square, &KNIGHT_OFFSETS);
            king[square as usize] = reach(square, &KING_OFFSETS);
        }

        AttackTables { knight, king }
    }

    #[inline]
    pub fn knight(&self, square: Square) -> BitBoard {
        self.knight[square as usize]
    }

    #[inline]
    pub fn king(&self, square: Square) -> BitBoard {
        self.king[square as usize]
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        AttackTables::new()
    }
}

fn reach(from: Square, offsets: &[(i8, i8)]) -> BitBoard {
    offsets
        .iter()
        .filter_map(|&offset| offset_square(from, offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_reach_counts() {
        let tables = AttackTables::new();
        assert_eq!(tables.knight(0).count(), 2, "a1");
        assert_eq!(tables.knight(1).count(), 3, "b1");
        assert_eq!(tables.knight(9).count(), 4, "b2");
        assert_eq!(tables.knight(27).count(), 8, "d4");
        let total: u32 = (0..64).map(|sq| tables.knight(sq).count()).sum();
        assert_eq!(total, 336);
    }

    #[test]
    fn test_king_reach_counts() {
        let tables = AttackTables::new();
        assert_eq!(tables.king(0).count(), 3);
        assert_eq!(tables.king(4).count(), 5);
        assert_eq!(tables.king(36).count(), 8);
        let total: u32 = (0..64).map(|sq| tables.king(sq).count()).sum();
        assert_eq!(total, 420);
    }

    #[test]
    fn test_no_wraparound_from_edge_files() {
        //! A king on h1 must not reach a2, and a knight on h2 must not reach a3/b4
        let tables = AttackTables::new();
        assert!(!tables.king(7).test(8));
        assert!(!tables.knight(15).test(16));
        assert!(!tables.knight(15).test(24));
        assert_eq!(tables.king(7), BitBoard::from_iter([6, 14, 15]));
    }

    #[test]
    fn test_tables_are_symmetric_under_half_turn() {
        let tables = AttackTables::new();
        for square in 0..64u8 {
            assert_eq!(
                tables.knight(63 - square),
                tables.knight(square).rotate_180(),
                "knight {square}"
            );
            assert_eq!(
                tables.king(63 - square),
                tables.king(square).rotate_180(),
                "king {square}"
            );
        }
    }

    #[test]
    fn test_reach_is_mutual() {
        //! If a knight on A reaches B, a knight on B reaches A
        let tables = AttackTables::new();
        for from in 0..64u8 {
            for to in tables.knight(from) {
                assert!(tables.knight(to).test(from));
            }
            for to in tables.king(from) {
                assert!(tables.king(to).test(from));
            }
        }
    }
}
