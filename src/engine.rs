//! Turn controller: human placements, the automated turn loop and side binding
//!
//! One color is bound to the human, the other to the automated side. The
//! controller walks a small state machine:
//!
//! - [`Phase::AwaitingHuman`]: the human may place a stone
//! - [`Phase::RunningAutomatedTurn`]: the human moved; the caller should run
//!   [`ReversiEngine::run_automated_turn`] next
//! - [`Phase::GameOver`]: 64 placements were made or neither side can move
//!
//! The automated side keeps moving for as long as the human has no legal
//! reply, and passes (without consuming a ply) when it has none itself.
//!
//! # Example
//!
//! ```
//! use reversi::{Phase, Pos, ReversiEngine, Stone};
//!
//! let mut engine = ReversiEngine::new();
//! assert_eq!(engine.human_side(), Stone::Black);
//!
//! // Human opens; the engine waits for the automated reply
//! engine.place_human(Pos::new(2, 3)).unwrap();
//! assert_eq!(engine.phase(), Phase::RunningAutomatedTurn);
//!
//! let report = engine.run_automated_turn();
//! assert_eq!(report.placements.len(), 1);
//! assert_eq!(engine.phase(), Phase::AwaitingHuman);
//! assert_eq!(engine.ply(), 2);
//! ```

use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, select_move, MoveResult};
use crate::rules::{has_legal_move, legal_moves, MoveResolver};

/// Placement budget of a game
pub const MAX_PLY: u8 = 64;

/// Where the game stands between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a human placement
    AwaitingHuman,
    /// The automated side is to move
    RunningAutomatedTurn,
    /// No further placements are accepted
    GameOver,
}

/// Why a human placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("the game is over")]
    GameOver,
    #[display("the automated side is still to move")]
    NotHumanTurn,
    #[display("illegal move at {pos}")]
    Illegal { pos: Pos },
}

/// One applied placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub pos: Pos,
    pub color: Stone,
    /// Stones flipped, not counting the placed one
    pub flips: u32,
}

/// What an automated turn did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Placements in the order they were made
    pub placements: Vec<Placement>,
    /// The turn ended because the automated side had no legal move
    pub passed: bool,
    /// Phase after the turn
    pub phase: Phase,
}

impl TurnReport {
    fn idle(phase: Phase) -> Self {
        Self {
            placements: Vec::new(),
            passed: false,
            phase,
        }
    }
}

/// Reversi game engine with one human and one automated side.
///
/// Single-threaded: every operation runs to completion before it returns,
/// and callers must not run two mutating operations at once.
#[derive(Debug, Clone)]
pub struct ReversiEngine {
    board: Board,
    resolver: MoveResolver,
    /// Color bound to the human
    human: Stone,
    /// Placements applied since the opening
    ply: u8,
    phase: Phase,
    /// Last selection made for the automated side
    last_selection: Option<MoveResult>,
}

impl ReversiEngine {
    /// Create an engine at the opening with the human playing Black.
    #[must_use]
    pub fn new() -> Self {
        Self::with_human(Stone::Black)
    }

    /// Create an engine at the opening with the human bound to `human`.
    ///
    /// Black always opens; with the human on White the caller runs the
    /// automated turn first.
    #[must_use]
    pub fn with_human(human: Stone) -> Self {
        assert_ne!(human, Stone::Empty, "the human must play a color");
        Self {
            board: Board::new(),
            resolver: MoveResolver::new(),
            human,
            ply: 0,
            phase: Phase::AwaitingHuman,
            last_selection: None,
        }
    }

    /// Create an engine over an arbitrary position, waiting for the human.
    ///
    /// The engine starts in [`Phase::GameOver`] if `ply` is already
    /// [`MAX_PLY`] or neither side can move, and in
    /// [`Phase::RunningAutomatedTurn`] if only the automated side can move.
    #[must_use]
    pub fn from_position(board: Board, human: Stone, ply: u8) -> Self {
        assert!(ply <= MAX_PLY, "ply {ply} exceeds the {MAX_PLY}-placement budget");
        let mut engine = Self::with_human(human);
        engine.board = board;
        engine.ply = ply;
        let human_movable = engine.is_movable(human);
        if ply == MAX_PLY || !(human_movable || engine.is_movable(engine.automated_side())) {
            engine.phase = Phase::GameOver;
        } else if !human_movable {
            engine.phase = Phase::RunningAutomatedTurn;
        }
        engine
    }

    /// Place a stone for the human.
    ///
    /// # Returns
    /// `Ok(flips)` when accepted. After an accepted placement the engine
    /// moves to [`Phase::RunningAutomatedTurn`], or [`Phase::GameOver`]
    /// once the placement budget is spent.
    ///
    /// # Errors
    /// - [`MoveError::GameOver`] / [`MoveError::NotHumanTurn`] outside
    ///   [`Phase::AwaitingHuman`]; nothing changes
    /// - [`MoveError::Illegal`] for an occupied cell or one that captures
    ///   nothing; the board and ply are unchanged, the change-list is emptied
    #[instrument(skip(self), fields(human = ?self.human, ply = self.ply))]
    pub fn place_human(&mut self, pos: Pos) -> Result<u32, MoveError> {
        match self.phase {
            Phase::AwaitingHuman => {}
            Phase::RunningAutomatedTurn => return Err(MoveError::NotHumanTurn),
            Phase::GameOver => return Err(MoveError::GameOver),
        }

        let flips = self.resolver.apply(&mut self.board, pos, self.human);
        if flips == 0 {
            warn!(%pos, "rejected human placement");
            return Err(MoveError::Illegal { pos });
        }

        self.ply += 1;
        debug!(%pos, flips, ply = self.ply, "human placement");

        if self.ply >= MAX_PLY {
            self.finish();
        } else {
            self.phase = Phase::RunningAutomatedTurn;
        }
        Ok(flips)
    }

    /// Play the automated side until the human can reply.
    ///
    /// Each round selects and applies a move for the automated side. The
    /// loop stops when:
    /// 1. the automated side has no legal move (a pass; no ply is used and
    ///    the change-list is emptied), handing over to the human, or ending
    ///    the game if the human is stuck too
    /// 2. the placement budget is spent
    /// 3. the human has a legal move
    ///
    /// Otherwise the automated side moves again. Every round either stops
    /// or uses a ply, so the loop is bounded by [`MAX_PLY`].
    #[instrument(skip(self), fields(automated = ?self.automated_side(), ply = self.ply))]
    pub fn run_automated_turn(&mut self) -> TurnReport {
        if self.phase == Phase::GameOver {
            return TurnReport::idle(self.phase);
        }

        self.phase = Phase::RunningAutomatedTurn;
        let color = self.automated_side();
        let mut report = TurnReport::idle(self.phase);

        loop {
            let selection = select_move(&self.board, color);
            self.last_selection = Some(selection);

            let Some(pos) = selection.best_move else {
                // Nothing placed, so nothing changed
                self.resolver.clear();
                report.passed = true;
                debug!("automated side passes");
                if self.is_movable(self.human) {
                    self.phase = Phase::AwaitingHuman;
                } else {
                    self.finish();
                }
                break;
            };

            let flips = self.resolver.apply(&mut self.board, pos, color);
            debug_assert!(flips > 0, "selector returned an illegal move");
            self.ply += 1;
            report.placements.push(Placement { pos, color, flips });
            debug!(%pos, flips, score = selection.score, ply = self.ply, "automated placement");

            if self.ply >= MAX_PLY {
                self.finish();
                break;
            }
            if self.is_movable(self.human) {
                self.phase = Phase::AwaitingHuman;
                break;
            }
            debug!("human has no reply, automated side moves again");
        }

        report.phase = self.phase;
        report
    }

    /// Exchange the human and automated colors.
    ///
    /// If the automated side is then the one to move, its turn runs
    /// immediately and the report is returned.
    #[instrument(skip(self), fields(human = ?self.human, phase = ?self.phase))]
    pub fn swap_sides(&mut self) -> Option<TurnReport> {
        let to_move = match self.phase {
            Phase::AwaitingHuman => self.human,
            Phase::RunningAutomatedTurn => self.automated_side(),
            Phase::GameOver => {
                self.human = self.human.opponent();
                info!(human = ?self.human, "sides swapped after game over");
                return None;
            }
        };

        self.human = self.human.opponent();
        info!(human = ?self.human, "sides swapped");

        if to_move == self.human && self.is_movable(self.human) {
            self.phase = Phase::AwaitingHuman;
            None
        } else {
            Some(self.run_automated_turn())
        }
    }

    /// Back to the opening. The side binding is kept.
    #[instrument(skip(self), fields(human = ?self.human))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.resolver.clear();
        self.ply = 0;
        self.phase = Phase::AwaitingHuman;
        self.last_selection = None;
        info!("game reset");
    }

    /// Check if `side` has at least one legal move. Does not touch the
    /// board or the change-list.
    #[inline]
    pub fn is_movable(&self, side: Stone) -> bool {
        has_legal_move(&self.board, side)
    }

    /// Legal moves for `side` in index order
    pub fn legal_moves(&self, side: Stone) -> Vec<Pos> {
        legal_moves(&self.board, side).iter_ones().collect()
    }

    /// Cells changed by the most recent placement, placed cell first
    #[inline]
    pub fn change_list(&self) -> &[Pos] {
        self.resolver.changes()
    }

    /// Number of `side`'s stones on the board
    #[inline]
    pub fn piece_count(&self, side: Stone) -> u32 {
        self.board.count(side)
    }

    /// Human stones minus automated stones, whichever color the human plays
    pub fn piece_diff(&self) -> i32 {
        self.piece_count(self.human) as i32 - self.piece_count(self.automated_side()) as i32
    }

    /// Heuristic score of the current position for the automated side
    pub fn eval_value(&self) -> i32 {
        evaluate(&self.board, self.automated_side())
    }

    /// Winner once the game is over; `None` while playing or on a tie
    pub fn winner(&self) -> Option<Stone> {
        if self.phase != Phase::GameOver {
            return None;
        }
        let black = self.piece_count(Stone::Black);
        let white = self.piece_count(Stone::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Stone::Black),
            std::cmp::Ordering::Less => Some(Stone::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn ply(&self) -> u8 {
        self.ply
    }

    #[inline]
    pub fn human_side(&self) -> Stone {
        self.human
    }

    #[inline]
    pub fn automated_side(&self) -> Stone {
        self.human.opponent()
    }

    /// Last selection made for the automated side
    #[inline]
    pub fn last_selection(&self) -> Option<&MoveResult> {
        self.last_selection.as_ref()
    }

    fn finish(&mut self) {
        self.phase = Phase::GameOver;
        info!(
            black = self.piece_count(Stone::Black),
            white = self.piece_count(Stone::White),
            ply = self.ply,
            winner = ?self.winner(),
            "game over"
        );
    }
}

impl Default for ReversiEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        let engine = ReversiEngine::new();
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
        assert_eq!(engine.ply(), 0);
        assert_eq!(engine.human_side(), Stone::Black);
        assert_eq!(engine.automated_side(), Stone::White);
        assert!(engine.change_list().is_empty());
        assert_eq!(engine.piece_diff(), 0);
        assert_eq!(engine.eval_value(), 0);
    }

    #[test]
    fn test_opening_legal_moves() {
        let engine = ReversiEngine::new();
        assert_eq!(
            engine.legal_moves(Stone::Black),
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
    }

    #[test]
    fn test_basic_capture() {
        let mut engine = ReversiEngine::new();

        assert_eq!(engine.place_human(Pos::new(2, 3)), Ok(1));

        assert_eq!(engine.change_list(), &[Pos::new(2, 3), Pos::new(3, 3)]);
        assert_eq!(engine.piece_count(Stone::Black), 4);
        assert_eq!(engine.piece_count(Stone::White), 1);
        assert_eq!(engine.ply(), 1);
        assert_eq!(engine.phase(), Phase::RunningAutomatedTurn);
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let mut engine = ReversiEngine::new();
        let board = *engine.board();

        // Occupied
        assert_eq!(
            engine.place_human(Pos::new(3, 3)),
            Err(MoveError::Illegal { pos: Pos::new(3, 3) })
        );
        // Empty, no capture
        assert_eq!(
            engine.place_human(Pos::new(0, 0)),
            Err(MoveError::Illegal { pos: Pos::new(0, 0) })
        );

        assert_eq!(*engine.board(), board);
        assert_eq!(engine.ply(), 0);
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
        assert!(engine.change_list().is_empty());
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut engine = ReversiEngine::new();
        engine.place_human(Pos::new(2, 3)).unwrap();
        engine.run_automated_turn();
        let board = *engine.board();
        let ply = engine.ply();

        for _ in 0..5 {
            assert!(engine.place_human(Pos::new(7, 7)).is_err());
            assert_eq!(*engine.board(), board);
            assert_eq!(engine.ply(), ply);
        }
    }

    #[test]
    fn test_placement_refused_while_automated_side_to_move() {
        let mut engine = ReversiEngine::new();
        engine.place_human(Pos::new(2, 3)).unwrap();
        let changes = engine.change_list().to_vec();

        assert_eq!(engine.place_human(Pos::new(2, 2)), Err(MoveError::NotHumanTurn));
        // Wrong-phase rejection leaves the change-list alone
        assert_eq!(engine.change_list(), changes.as_slice());
    }

    #[test]
    fn test_automated_reply() {
        let mut engine = ReversiEngine::new();
        engine.place_human(Pos::new(2, 3)).unwrap();

        let report = engine.run_automated_turn();

        assert_eq!(report.placements.len(), 1);
        assert!(!report.passed);
        assert_eq!(report.phase, Phase::AwaitingHuman);
        let placement = report.placements[0];
        assert_eq!(placement.color, Stone::White);
        assert_eq!(engine.change_list()[0], placement.pos);
        assert_eq!(engine.change_list().len() as u32, placement.flips + 1);
        assert_eq!(engine.ply(), 2);
        assert!(engine.last_selection().is_some());
    }

    #[test]
    fn test_automated_side_passes() {
        // White (automated) cannot move; Black (human) can play (0,2)
        let board = Board::from_rows([
            "B W . . . . . .",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        let mut engine = ReversiEngine::from_position(board, Stone::Black, 10);

        let report = engine.run_automated_turn();

        assert!(report.placements.is_empty());
        assert!(report.passed);
        assert_eq!(engine.ply(), 10);
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
        assert_eq!(*engine.board(), board);
        assert!(engine.change_list().is_empty());
    }

    #[test]
    fn test_pass_after_human_placement_empties_change_list() {
        // Black captures the only White stone; White then has no move
        let board = Board::from_rows([
            "B W . . . . . .",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        let mut engine = ReversiEngine::from_position(board, Stone::Black, 10);
        assert_eq!(engine.place_human(Pos::new(0, 2)), Ok(1));
        assert_eq!(engine.change_list(), &[Pos::new(0, 2), Pos::new(0, 1)]);

        let report = engine.run_automated_turn();

        assert!(report.passed);
        assert!(report.placements.is_empty());
        assert_eq!(engine.phase(), Phase::GameOver);
        assert!(engine.change_list().is_empty());
    }

    #[test]
    fn test_piece_diff_follows_human_side() {
        let mut engine = ReversiEngine::new();
        engine.place_human(Pos::new(2, 3)).unwrap();
        // Black 4, White 1
        assert_eq!(engine.piece_diff(), 3);

        engine.swap_sides();
        assert_eq!(engine.human_side(), Stone::White);
        assert_eq!(engine.piece_diff(), -3);
    }

    #[test]
    fn test_from_position_with_stuck_human_starts_automated_turn() {
        // Black (human) cannot move; White can play (0,3)
        let board = Board::from_rows([
            "W B B . . . . .",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        let mut engine = ReversiEngine::from_position(board, Stone::Black, 10);
        assert_eq!(engine.phase(), Phase::RunningAutomatedTurn);
        assert_eq!(engine.place_human(Pos::new(0, 3)), Err(MoveError::NotHumanTurn));

        let report = engine.run_automated_turn();
        assert_eq!(report.placements[0].pos, Pos::new(0, 3));

        // With the human on White the same board waits for the human
        let engine = ReversiEngine::from_position(board, Stone::White, 10);
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_automated_side_moves_again_while_human_stuck() {
        // Black (human) has no move; White takes both rows, then nobody can move
        let board = Board::from_rows([
            "W B B . . . . .",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "W B . . . . . .",
        ]);
        let mut engine = ReversiEngine::from_position(board, Stone::Black, 20);
        assert!(!engine.is_movable(Stone::Black));

        let report = engine.run_automated_turn();

        assert_eq!(report.placements.len(), 2);
        assert!(report.placements.iter().all(|p| p.color == Stone::White));
        assert!(report.passed);
        assert_eq!(report.phase, Phase::GameOver);
        assert_eq!(engine.ply(), 22);
        assert_eq!(engine.piece_count(Stone::Black), 0);
        assert_eq!(engine.winner(), Some(Stone::White));
    }

    #[test]
    fn test_game_over_when_neither_side_can_move() {
        let board = Board::from_rows([
            "B W . . . . . .",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        let mut engine = ReversiEngine::from_position(board, Stone::Black, 10);

        assert_eq!(engine.place_human(Pos::new(0, 2)), Ok(1));
        let report = engine.run_automated_turn();

        assert!(report.passed);
        assert_eq!(engine.phase(), Phase::GameOver);
        assert_eq!(engine.winner(), Some(Stone::Black));
        assert_eq!(engine.place_human(Pos::new(0, 3)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_game_over_at_placement_budget() {
        let mut engine = ReversiEngine::from_position(Board::new(), Stone::Black, MAX_PLY - 1);

        engine.place_human(Pos::new(2, 3)).unwrap();

        assert_eq!(engine.ply(), MAX_PLY);
        assert_eq!(engine.phase(), Phase::GameOver);
        assert_eq!(engine.place_human(Pos::new(2, 2)), Err(MoveError::GameOver));
        let report = engine.run_automated_turn();
        assert!(report.placements.is_empty());
        assert_eq!(report.phase, Phase::GameOver);
    }

    #[test]
    fn test_from_position_detects_finished_game() {
        let engine = ReversiEngine::from_position(Board::from_rows(["BBBBBBBB"; 8]), Stone::White, 60);
        assert_eq!(engine.phase(), Phase::GameOver);
        assert_eq!(engine.winner(), Some(Stone::Black));
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_from_position_rejects_ply_overflow() {
        let _ = ReversiEngine::from_position(Board::new(), Stone::Black, MAX_PLY + 1);
    }

    #[test]
    fn test_swap_at_opening_runs_automated_side() {
        let mut engine = ReversiEngine::new();

        let report = engine.swap_sides().expect("Black is now automated and to move");

        assert_eq!(engine.human_side(), Stone::White);
        assert_eq!(report.placements.len(), 1);
        assert_eq!(report.placements[0].color, Stone::Black);
        assert_eq!(report.placements[0].pos, Pos::new(2, 3));
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
        assert_eq!(engine.ply(), 1);
    }

    #[test]
    fn test_swap_while_automated_to_move_hands_turn_to_human() {
        let mut engine = ReversiEngine::new();
        engine.place_human(Pos::new(2, 3)).unwrap();

        // White was about to move; White is now the human
        assert!(engine.swap_sides().is_none());
        assert_eq!(engine.human_side(), Stone::White);
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
        assert!(engine.place_human(Pos::new(2, 2)).is_ok());
    }

    #[test]
    fn test_swap_after_game_over_only_rebinds() {
        let mut engine = ReversiEngine::from_position(Board::from_rows(["WWWWWWWW"; 8]), Stone::Black, 60);
        assert!(engine.swap_sides().is_none());
        assert_eq!(engine.human_side(), Stone::White);
        assert_eq!(engine.phase(), Phase::GameOver);
    }

    #[test]
    fn test_reset_keeps_binding() {
        let mut engine = ReversiEngine::new();
        engine.swap_sides();
        engine.place_human(Pos::new(2, 2)).unwrap();
        engine.run_automated_turn();

        engine.reset();

        assert_eq!(*engine.board(), Board::new());
        assert_eq!(engine.ply(), 0);
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
        assert_eq!(engine.human_side(), Stone::White);
        assert!(engine.change_list().is_empty());
        assert!(engine.last_selection().is_none());
    }

    #[test]
    fn test_is_movable_does_not_mutate() {
        let mut engine = ReversiEngine::new();
        engine.place_human(Pos::new(2, 3)).unwrap();
        let board = *engine.board();
        let changes = engine.change_list().to_vec();

        assert!(engine.is_movable(Stone::White));
        assert!(engine.is_movable(Stone::Black));

        assert_eq!(*engine.board(), board);
        assert_eq!(engine.change_list(), changes.as_slice());
    }

    #[test]
    fn test_move_error_messages() {
        assert_eq!(MoveError::GameOver.to_string(), "the game is over");
        assert_eq!(
            MoveError::Illegal { pos: Pos::new(0, 7) }.to_string(),
            "illegal move at (0, 7)"
        );
    }
}
