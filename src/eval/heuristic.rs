//! Heuristic evaluation and single-ply move selection
//!
//! The evaluation combines:
//! - Positional weights (corners high, cells next to corners low)
//! - Disc differential
//! - Mobility differential
//!
//! and switches to a scaled disc count once neither side can move.

use crate::board::{Board, Pos, Stone};
use crate::rules::{execute_flips, is_legal, is_terminal, mobility};

use super::weights::{position_weight, Weights};

/// Result of a move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move, `None` when `color` has no legal move (a pass)
    pub best_move: Option<Pos>,
    /// Evaluation of the position after the move, from the mover's side
    pub score: i32,
    /// Number of legal moves that were considered
    pub candidates: u32,
}

impl MoveResult {
    /// Result for a side with nothing to play
    #[inline]
    fn no_move(score: i32) -> Self {
        Self {
            best_move: None,
            score,
            candidates: 0,
        }
    }
}

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate disadvantage for `color`
///
/// The evaluation is antisymmetric: `evaluate(b, Black) == -evaluate(b, White)`.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    assert_ne!(color, Stone::Empty, "cannot evaluate for an empty stone");
    let opponent = color.opponent();

    let disc_diff = board.count(color) as i32 - board.count(opponent) as i32;

    if is_terminal(board) {
        return disc_diff * Weights::TERMINAL;
    }

    let position_score = evaluate_positions(board, color) - evaluate_positions(board, opponent);
    let mobility_score = mobility(board, color) as i32 - mobility(board, opponent) as i32;

    position_score + disc_diff * Weights::DISC + mobility_score * Weights::MOBILITY
}

/// Sum of positional weights under `color`'s stones
fn evaluate_positions(board: &Board, color: Stone) -> i32 {
    let Some(stones) = board.stones(color) else {
        return 0;
    };
    stones.iter_ones().map(position_weight).sum()
}

/// Pick the legal move for `color` whose resulting position scores best.
///
/// Candidates are scanned in index order and only a strictly better score
/// replaces the current best, so ties go to the lowest (row, col). The
/// input board is never modified.
///
/// # Example
///
/// ```
/// use reversi::{Board, Pos, Stone};
/// use reversi::eval::select_move;
///
/// let board = Board::new();
/// let result = select_move(&board, Stone::Black);
///
/// // The four opening moves are equivalent; the lowest index wins the tie
/// assert_eq!(result.best_move, Some(Pos::new(2, 3)));
/// assert_eq!(result.candidates, 4);
/// ```
#[must_use]
pub fn select_move(board: &Board, color: Stone) -> MoveResult {
    let mut best: Option<(Pos, i32)> = None;
    let mut candidates = 0;

    for pos in Pos::all() {
        if !is_legal(board, pos, color) {
            continue;
        }
        candidates += 1;

        let mut next = *board;
        execute_flips(&mut next, pos, color);
        let score = evaluate(&next, color);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    match best {
        Some((pos, score)) => MoveResult {
            best_move: Some(pos),
            score,
            candidates,
        },
        None => MoveResult::no_move(evaluate(board, color)),
    }
}
