//! Bitboard legal-move generation
//!
//! For each direction, flood the mover's stones across contiguous
//! opponent stones; an empty cell one step past such a run is a legal
//! move. Six flood steps cover the longest possible run on an 8x8 board.

use crate::board::{Bitboard, Board, Direction, Stone};

/// All cells where `color` has a legal move.
pub fn legal_moves(board: &Board, color: Stone) -> Bitboard {
    let (Some(own), Some(opp)) = (board.stones(color), board.stones(color.opponent())) else {
        return Bitboard::new();
    };
    let empty = board.empties();

    let mut moves = Bitboard::new();
    for dir in Direction::ALL {
        let mut run = own.shift(dir) & opp;
        for _ in 0..5 {
            run |= run.shift(dir) & opp;
        }
        moves |= run.shift(dir) & empty;
    }
    moves
}

/// Check if `color` has any legal move.
#[inline]
pub fn has_legal_move(board: &Board, color: Stone) -> bool {
    !legal_moves(board, color).is_empty()
}

/// Number of legal moves for `color`.
#[inline]
pub fn mobility(board: &Board, color: Stone) -> u32 {
    legal_moves(board, color).count()
}

/// Neither side can move: the game is over.
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Stone::Black) && !has_legal_move(board, Stone::White)
}
