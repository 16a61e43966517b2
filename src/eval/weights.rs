//! Scoring weights for Reversi evaluation
//!
//! Corners can never be flipped back, so they dominate. The cells next to
//! an empty corner (X- and C-squares) hand the corner to the opponent and
//! are penalised.

use crate::board::{Pos, BOARD_SIZE};

/// Evaluation weights
pub struct Weights;

impl Weights {
    /// Points per stone of disc differential
    pub const DISC: i32 = 1;
    /// Points per legal move of mobility differential
    pub const MOBILITY: i32 = 5;
    /// Points per stone of disc differential once the game is decided
    pub const TERMINAL: i32 = 1_000;
}

/// Positional weight per cell, row-major
#[rustfmt::skip]
pub const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20,  10,   5,   5,  10, -20, 100],
    [-20, -50,  -2,  -2,  -2,  -2, -50, -20],
    [ 10,  -2,  -1,  -1,  -1,  -1,  -2,  10],
    [  5,  -2,  -1,  -1,  -1,  -1,  -2,   5],
    [  5,  -2,  -1,  -1,  -1,  -1,  -2,   5],
    [ 10,  -2,  -1,  -1,  -1,  -1,  -2,  10],
    [-20, -50,  -2,  -2,  -2,  -2, -50, -20],
    [100, -20,  10,   5,   5,  10, -20, 100],
];

/// Weight of a single cell
#[inline]
pub fn position_weight(pos: Pos) -> i32 {
    POSITION_WEIGHTS[pos.row as usize][pos.col as usize]
}
