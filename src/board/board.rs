//! Board structure with stone bookkeeping

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board: one bitboard per color.
///
/// Cells only ever move Empty -> Black/White (placement) or
/// Black <-> White (flip). Nothing on the board ever becomes Empty again
/// except through [`Board::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Board with the canonical opening:
    /// Black at (3,4) and (4,3), White at (3,3) and (4,4).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place_stone(Pos::new(3, 4), Stone::Black);
        board.place_stone(Pos::new(4, 3), Stone::Black);
        board.place_stone(Pos::new(3, 3), Stone::White);
        board.place_stone(Pos::new(4, 4), Stone::White);
        board
    }

    /// Board with no stones at all (position setup only)
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Build a board from 8 row strings: `B`/`X` black, `W`/`O` white,
    /// `.`/`-` empty. Whitespace is ignored.
    ///
    /// Panics on any other character or a row that is not 8 cells wide.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(cells.len(), BOARD_SIZE, "row {row} must have 8 cells: {line:?}");
            for (col, ch) in cells.into_iter().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                match ch {
                    'B' | 'X' => board.place_stone(pos, Stone::Black),
                    'W' | 'O' => board.place_stone(pos, Stone::White),
                    '.' | '-' => {}
                    other => panic!("unexpected cell {other:?} at ({row}, {col})"),
                }
            }
        }
        board
    }

    /// Restore the canonical opening
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a stone on an empty cell (no flips; see `rules::MoveResolver`).
    ///
    /// Panics if the cell is occupied or `stone` is `Empty`.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        assert!(self.is_empty(pos), "cell ({}, {}) is already occupied", pos.row, pos.col);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => panic!("cannot place an empty stone"),
        }
    }

    /// Turn the stone at `pos` over. Panics if the cell is empty.
    #[inline]
    pub fn flip(&mut self, pos: Pos) {
        match self.get(pos) {
            Stone::Black => {
                self.black.clear(pos);
                self.white.set(pos);
            }
            Stone::White => {
                self.white.clear(pos);
                self.black.set(pos);
            }
            Stone::Empty => panic!("cannot flip empty cell ({}, {})", pos.row, pos.col),
        }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<Bitboard> {
        match stone {
            Stone::Black => Some(self.black),
            Stone::White => Some(self.white),
            Stone::Empty => None,
        }
    }

    /// Bitboard of all empty cells
    #[inline]
    pub fn empties(&self) -> Bitboard {
        !(self.black | self.white)
    }

    /// Number of cells holding `stone` (Empty counts empty cells)
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black.count(),
            Stone::White => self.white.count(),
            Stone::Empty => TOTAL_CELLS as u32 - self.stone_count(),
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let symbol = match self.get(Pos::new(row as u8, col as u8)) {
                    Stone::Black => '●',
                    Stone::White => '○',
                    Stone::Empty => '·',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
