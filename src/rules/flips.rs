//! Directional flip computation (the Othello capture rule)
//!
//! Placing a stone at `pos` captures, in each of the 8 directions, the
//! contiguous run of opponent stones that starts next to `pos` and is
//! closed by a stone of the mover's color. A run that reaches an empty
//! cell or the board edge first captures nothing.
//!
//! Everything here is a read-only probe except [`apply_flips`] and
//! [`execute_flips`]; the evaluator and the resolver share these functions
//! so legality is decided in exactly one place.

use crate::board::{Board, Direction, Pos, Stone};

/// Number of opponent stones captured in direction `dir` by `color`
/// playing at `pos`. Zero if the run is not closed by a `color` anchor.
#[inline]
pub fn run_length(board: &Board, pos: Pos, color: Stone, dir: Direction) -> u32 {
    let opponent = color.opponent();
    let mut len = 0;
    let mut cursor = pos.step(dir);

    while let Some(cell) = cursor {
        match board.get(cell) {
            s if s == opponent => {
                len += 1;
                cursor = cell.step(dir);
            }
            s if s == color => return len,
            _ => return 0,
        }
    }

    // Ran off the edge without an anchor
    0
}

/// Total stones `color` would flip by playing at `pos`.
///
/// Returns 0 for occupied cells, which makes "flips > 0" the single
/// legality test.
pub fn count_flips(board: &Board, pos: Pos, color: Stone) -> u32 {
    assert_ne!(color, Stone::Empty, "an empty stone cannot move");
    if !board.is_empty(pos) {
        return 0;
    }
    Direction::ALL
        .iter()
        .map(|&dir| run_length(board, pos, color, dir))
        .sum()
}

/// Check if `color` may legally play at `pos`.
#[inline]
pub fn is_legal(board: &Board, pos: Pos, color: Stone) -> bool {
    assert_ne!(color, Stone::Empty, "an empty stone cannot move");
    board.is_empty(pos)
        && Direction::ALL
            .iter()
            .any(|&dir| run_length(board, pos, color, dir) > 0)
}

/// Append the cells `color` would flip at `pos` to `out`, direction by
/// direction (in [`Direction::ALL`] order), nearest cell first.
///
/// # Returns
/// Number of positions appended
pub fn collect_flips(board: &Board, pos: Pos, color: Stone, out: &mut Vec<Pos>) -> u32 {
    if !board.is_empty(pos) {
        return 0;
    }

    let mut total = 0;
    for dir in Direction::ALL {
        let len = run_length(board, pos, color, dir);
        let mut cell = pos;
        for _ in 0..len {
            // run_length only counts on-board cells
            let Some(next) = cell.step(dir) else { break };
            out.push(next);
            cell = next;
        }
        total += len;
    }
    total
}

/// Cells that would be flipped if `color` played at `pos`.
pub fn get_flipped_positions(board: &Board, pos: Pos, color: Stone) -> Vec<Pos> {
    let mut flipped = Vec::new();
    collect_flips(board, pos, color, &mut flipped);
    flipped
}

/// Place `color` at `pos` and flip the cells in `flipped`, as produced by
/// [`collect_flips`] on the same board.
pub fn apply_flips(board: &mut Board, pos: Pos, color: Stone, flipped: &[Pos]) {
    board.place_stone(pos, color);
    for &cell in flipped {
        board.flip(cell);
    }
}

/// Place `color` at `pos` and flip every captured run, without recording
/// a change-list. Used for hypothetical play on scratch boards.
///
/// Illegal moves leave the board untouched and return 0.
pub fn execute_flips(board: &mut Board, pos: Pos, color: Stone) -> u32 {
    let mut flipped = Vec::new();
    let total = collect_flips(board, pos, color, &mut flipped);
    if total > 0 {
        apply_flips(board, pos, color, &flipped);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_black_moves() {
        let board = Board::new();
        let legal: Vec<Pos> = Pos::all()
            .filter(|&p| is_legal(&board, p, Stone::Black))
            .collect();
        assert_eq!(
            legal,
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
    }

    #[test]
    fn test_opening_white_moves() {
        let board = Board::new();
        let legal: Vec<Pos> = Pos::all()
            .filter(|&p| is_legal(&board, p, Stone::White))
            .collect();
        assert_eq!(
            legal,
            vec![Pos::new(2, 4), Pos::new(3, 5), Pos::new(4, 2), Pos::new(5, 3)]
        );
    }

    #[test]
    fn test_single_capture_south() {
        let board = Board::new();
        // (2,3) over White (3,3) anchored by Black (4,3)
        assert_eq!(run_length(&board, Pos::new(2, 3), Stone::Black, Direction::South), 1);
        assert_eq!(run_length(&board, Pos::new(2, 3), Stone::Black, Direction::East), 0);
        assert_eq!(count_flips(&board, Pos::new(2, 3), Stone::Black), 1);
        assert_eq!(
            get_flipped_positions(&board, Pos::new(2, 3), Stone::Black),
            vec![Pos::new(3, 3)]
        );
    }

    #[test]
    fn test_run_stopped_by_edge_captures_nothing() {
        // B plays at (0,0): W W W runs to the edge with no anchor
        let board = Board::from_rows([
            ". W W W W W W W",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert_eq!(run_length(&board, Pos::new(0, 0), Stone::Black, Direction::East), 0);
        assert!(!is_legal(&board, Pos::new(0, 0), Stone::Black));
    }

    #[test]
    fn test_run_stopped_by_empty_captures_nothing() {
        let board = Board::from_rows([
            ". W W . B . . .",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert_eq!(count_flips(&board, Pos::new(0, 0), Stone::Black), 0);
    }

    #[test]
    fn test_long_run_and_multiple_directions() {
        // Black at (3,3) captures 3 to the east and 2 to the south
        let board = Board::from_rows([
            "........",
            "........",
            "........",
            "... . W W W B",
            "... W . . . .",
            "... W . . . .",
            "... B . . . .",
            "........",
        ]);
        let pos = Pos::new(3, 3);
        assert_eq!(run_length(&board, pos, Stone::Black, Direction::East), 3);
        assert_eq!(run_length(&board, pos, Stone::Black, Direction::South), 2);
        assert_eq!(count_flips(&board, pos, Stone::Black), 5);
        // East before South, nearest first
        assert_eq!(
            get_flipped_positions(&board, pos, Stone::Black),
            vec![
                Pos::new(3, 4),
                Pos::new(3, 5),
                Pos::new(3, 6),
                Pos::new(4, 3),
                Pos::new(5, 3),
            ]
        );
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let board = Board::new();
        assert_eq!(count_flips(&board, Pos::new(3, 3), Stone::Black), 0);
        assert!(!is_legal(&board, Pos::new(3, 4), Stone::White));
    }

    #[test]
    fn test_execute_flips_applies_captures() {
        let mut board = Board::new();
        let flipped = execute_flips(&mut board, Pos::new(2, 3), Stone::Black);
        assert_eq!(flipped, 1);
        assert_eq!(board.get(Pos::new(2, 3)), Stone::Black);
        assert_eq!(board.get(Pos::new(3, 3)), Stone::Black);
        assert_eq!(board.count(Stone::Black), 4);
        assert_eq!(board.count(Stone::White), 1);
    }

    #[test]
    fn test_execute_flips_illegal_is_noop() {
        let mut board = Board::new();
        assert_eq!(execute_flips(&mut board, Pos::new(0, 0), Stone::Black), 0);
        assert_eq!(execute_flips(&mut board, Pos::new(3, 3), Stone::Black), 0);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_execute_flips_matches_resolver() {
        // Black at (3,3) captures 3 to the east and 2 to the south
        let board = Board::from_rows([
            "........",
            "........",
            "........",
            ". . . . W W W B",
            ". . . W . . . .",
            ". . . W . . . .",
            ". . . B . . . .",
            "........",
        ]);
        let pos = Pos::new(3, 3);

        let mut scratch = board;
        let mut resolved = board;
        let mut resolver = crate::rules::MoveResolver::new();

        assert_eq!(execute_flips(&mut scratch, pos, Stone::Black), 5);
        assert_eq!(resolver.apply(&mut resolved, pos, Stone::Black), 5);
        assert_eq!(scratch, resolved);
        assert_eq!(scratch.count(Stone::White), 0);
    }

    #[test]
    fn test_corner_capture_diagonal() {
        // White at (0,0) captures the diagonal back to (3,3)
        let board = Board::from_rows([
            ". . . . . . . .",
            ". B . . . . . .",
            ". . B . . . . .",
            ". . . W . . . .",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert_eq!(
            get_flipped_positions(&board, Pos::new(0, 0), Stone::White),
            vec![Pos::new(1, 1), Pos::new(2, 2)]
        );
    }
}
