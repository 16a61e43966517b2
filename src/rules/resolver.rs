//! Move resolver: applies placements and owns the change-list

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};

use super::flips::{apply_flips, collect_flips};

/// Applies placements to a [`Board`] and remembers which cells the most
/// recent one changed.
///
/// The change-list buffer is reused across calls; it is cleared on every
/// [`MoveResolver::apply`], legal or not.
#[derive(Debug, Clone)]
pub struct MoveResolver {
    changes: Vec<Pos>,
}

impl MoveResolver {
    pub fn new() -> Self {
        Self {
            changes: Vec::with_capacity(TOTAL_CELLS),
        }
    }

    /// Try to play `color` at `pos`.
    ///
    /// On a legal move the stone is placed, every captured run is flipped
    /// and the change-list becomes `[pos, flipped...]` (direction by
    /// direction, nearest first). On an illegal move, including an
    /// occupied `pos`, the board is untouched and the change-list is empty.
    ///
    /// # Returns
    /// Number of flipped stones (the placed stone is not counted); 0 means
    /// the move was illegal.
    ///
    /// # Example
    ///
    /// ```
    /// use reversi::{Board, Pos, Stone};
    /// use reversi::rules::MoveResolver;
    ///
    /// let mut board = Board::new();
    /// let mut resolver = MoveResolver::new();
    ///
    /// assert_eq!(resolver.apply(&mut board, Pos::new(2, 3), Stone::Black), 1);
    /// assert_eq!(resolver.changes(), &[Pos::new(2, 3), Pos::new(3, 3)]);
    /// ```
    pub fn apply(&mut self, board: &mut Board, pos: Pos, color: Stone) -> u32 {
        assert_ne!(color, Stone::Empty, "an empty stone cannot move");
        self.changes.clear();

        if !board.is_empty(pos) {
            return 0;
        }

        self.changes.push(pos);
        let flipped = collect_flips(board, pos, color, &mut self.changes);
        if flipped == 0 {
            self.changes.clear();
            return 0;
        }

        apply_flips(board, pos, color, &self.changes[1..]);

        flipped
    }

    /// Cells changed by the most recent placement, placed cell first
    #[inline]
    pub fn changes(&self) -> &[Pos] {
        &self.changes
    }

    /// Forget the last change-list
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

impl Default for MoveResolver {
    fn default() -> Self {
        Self::new()
    }
}
