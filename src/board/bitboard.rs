//! Bitboard implementation for fast move generation

use super::{Direction, Pos, TOTAL_CELLS};

/// Column 0 (A-file) mask
const FILE_A: u64 = 0x0101_0101_0101_0101;
/// Column 7 (H-file) mask
const FILE_H: u64 = 0x8080_8080_8080_8080;

/// Bitboard representation of one color's stones.
/// Bit `row * 8 + col` is set when the cell is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Shift every stone one step in `dir`, dropping stones that leave the board.
    #[inline]
    pub fn shift(self, dir: Direction) -> Bitboard {
        let b = self.bits;
        let bits = match dir {
            Direction::North => b >> 8,
            Direction::South => b << 8,
            Direction::East => (b << 1) & !FILE_A,
            Direction::West => (b >> 1) & !FILE_H,
            Direction::NorthEast => (b >> 7) & !FILE_A,
            Direction::NorthWest => (b >> 9) & !FILE_H,
            Direction::SouthEast => (b << 9) & !FILE_A,
            Direction::SouthWest => (b << 7) & !FILE_H,
        };
        Bitboard { bits }
    }

    /// Iterate over set bit positions, lowest index first
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits | rhs.bits)
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & rhs.bits)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    fn not(self) -> Bitboard {
        Bitboard::from_bits(!self.bits)
    }
}

impl std::ops::BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.bits |= rhs.bits;
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        debug_assert!(idx < TOTAL_CELLS);

        // Clear the bit we just found
        self.bits &= self.bits - 1;

        Some(Pos::from_index(idx))
    }
}
