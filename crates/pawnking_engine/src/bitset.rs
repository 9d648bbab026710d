//! # BitBoard - 64-square set representation
//!
//! ## Overview
//!
//! A [`BitBoard`] wraps a single `u64` where bit *i* stands for square *i*.
//! Every predicate the engine needs ("white pawns", "empty squares", "squares a
//! knight on g1 reaches") is one of these masks, so move generation reduces to a
//! handful of AND/OR/NOT/shift instructions over whole sets of squares.
//!
//! ## Technical Details
//!
//! The board is mapped to bits 0-63 where:
//! - Bit 0 = a1 (bottom-left for white)
//! - Bit 7 = h1
//! - Bit 56 = a8
//! - Bit 63 = h8
//!
//! Shifts never wrap: bits pushed past square 63 or below square 0 are dropped.
//! Generators rely on this together with the file masks in
//! [`constants`](crate::constants) to discard off-board targets.
//!
//! Iteration walks the set bits from least to most significant using
//! `trailing_zeros` and clears the lowest bit each step, so it is finite and
//! cannot be restarted once consumed.

use crate::types::Square;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitBoard(pub u64);

impl BitBoard {
    pub const EMPTY: BitBoard = BitBoard(0);
    pub const FULL: BitBoard = BitBoard(u64::MAX);

    #[inline]
    pub const fn new(mask: u64) -> Self {
        BitBoard(mask)
    }

    /// Single-square set. Squares outside 0-63 give the empty set.
    #[inline]
    pub const fn from_square(square: Square) -> Self {
        if square < 64 {
            BitBoard(1u64 << square)
        } else {
            BitBoard::EMPTY
        }
    }

    #[inline]
    pub fn set(&mut self, square: Square) {
        self.0 |= BitBoard::from_square(square).0;
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.0 &= !BitBoard::from_square(square).0;
    }

    #[inline]
    pub const fn test(self, square: Square) -> bool {
        self.0 & BitBoard::from_square(square).0 != 0
    }

    /// Copy of `self` with `square` added.
    #[inline]
    pub const fn with(self, square: Square) -> Self {
        BitBoard(self.0 | BitBoard::from_square(square).0)
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Maps every square `s` to `63 - s` (a half turn of the board).
    #[inline]
    pub const fn rotate_180(self) -> Self {
        BitBoard(self.0.reverse_bits())
    }

    /// Consuming iterator over the set squares, lowest first.
    #[inline]
    pub fn iter(self) -> BitIter {
        BitIter(self.0)
    }

    /// Calls `visitor` once per set square, lowest first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pawnking_engine::BitBoard;
    ///
    /// let mut seen = Vec::new();
    /// BitBoard::new(0b1010).for_each_bit(|square| seen.push(square));
    /// assert_eq!(seen, vec![1, 3]);
    /// ```
    #[inline]
    pub fn for_each_bit<F>(self, visitor: F)
    where
        F: FnMut(Square),
    {
        self.iter().for_each(visitor);
    }
}

/// Iterator returned by [`BitBoard::iter`].
#[derive(Clone, Debug)]
pub struct BitIter(u64);

impl Iterator for BitIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(square)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitIter {}

impl IntoIterator for BitBoard {
    type Item = Square;
    type IntoIter = BitIter;

    fn into_iter(self) -> BitIter {
        self.iter()
    }
}

impl FromIterator<Square> for BitBoard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(BitBoard::EMPTY, BitBoard::with)
    }
}

impl BitAnd for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn bitand(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 & rhs.0)
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn bitor(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 | rhs.0)
    }
}

impl BitXor for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn bitxor(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 ^ rhs.0)
    }
}

impl Not for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn not(self) -> BitBoard {
        BitBoard(!self.0)
    }
}

impl BitAndAssign for BitBoard {
    #[inline]
    fn bitand_assign(&mut self, rhs: BitBoard) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for BitBoard {
    #[inline]
    fn bitor_assign(&mut self, rhs: BitBoard) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for BitBoard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: BitBoard) {
        self.0 ^= rhs.0;
    }
}

// Shifting by 64 or more empties the set instead of overflowing.
impl Shl<u32> for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn shl(self, rhs: u32) -> BitBoard {
        BitBoard(self.0.checked_shl(rhs).unwrap_or(0))
    }
}

impl Shr<u32> for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn shr(self, rhs: u32) -> BitBoard {
        BitBoard(self.0.checked_shr(rhs).unwrap_or(0))
    }
}
