//! Game session state for the Reversi GUI
//!
//! Wraps the engine the way a renderer drives it: a human click places a
//! stone, the automated reply runs on the following frame, and the panel
//! reads counters back after every call.

use tracing::debug;

use crate::{Phase, Pos, ReversiEngine, Stone, TurnReport};

/// Main game session
pub struct GameState {
    pub engine: ReversiEngine,
    pub message: Option<String>,
    pub last_report: Option<TurnReport>,
    /// Automated turn scheduled for the next frame
    automated_pending: bool,
}

impl GameState {
    pub fn new(human: Stone) -> Self {
        Self {
            engine: ReversiEngine::with_human(human),
            message: None,
            last_report: None,
            // Black opens, so a White human waits for the engine
            automated_pending: human == Stone::White,
        }
    }

    /// Check if an automated turn is queued
    pub fn is_automated_pending(&self) -> bool {
        self.automated_pending
    }

    /// Check if the human may click
    pub fn is_human_turn(&self) -> bool {
        !self.automated_pending && self.engine.phase() == Phase::AwaitingHuman
    }

    /// Attempt to place the human's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> bool {
        if self.automated_pending {
            self.message = Some("Wait for the engine to move".to_string());
            return false;
        }

        match self.engine.place_human(pos) {
            Ok(flips) => {
                debug!(%pos, flips, "accepted click");
                self.message = None;
                self.automated_pending = self.engine.phase() == Phase::RunningAutomatedTurn;
                true
            }
            Err(e) => {
                self.message = Some(e.to_string());
                false
            }
        }
    }

    /// Run a queued automated turn. Returns true if one ran.
    pub fn poll_automated(&mut self) -> bool {
        if !self.automated_pending {
            return false;
        }
        self.automated_pending = false;

        let report = self.engine.run_automated_turn();
        self.record(report);
        true
    }

    /// Restore the opening, keeping the side binding
    pub fn clear(&mut self) {
        self.engine.reset();
        self.message = None;
        self.last_report = None;
        self.automated_pending = self.engine.human_side() == Stone::White;
    }

    /// Swap human and automated colors
    pub fn change(&mut self) {
        self.message = None;
        if std::mem::take(&mut self.automated_pending) && self.engine.phase() == Phase::AwaitingHuman {
            // Opening still waiting on the engine's first move: the human takes Black
            self.engine = ReversiEngine::with_human(self.engine.automated_side());
            return;
        }
        // A queued reply belongs to the side the human is taking over
        if let Some(report) = self.engine.swap_sides() {
            self.record(report);
        }
    }

    /// One-line status for the side panel
    pub fn status_text(&self) -> String {
        match self.engine.phase() {
            Phase::GameOver => match self.engine.winner() {
                Some(winner) if winner == self.engine.human_side() => "You win".to_string(),
                Some(_) => "Engine wins".to_string(),
                None => "Draw".to_string(),
            },
            _ if self.automated_pending => "Engine thinking...".to_string(),
            Phase::RunningAutomatedTurn => "Engine to move".to_string(),
            Phase::AwaitingHuman => "Your turn".to_string(),
        }
    }

    fn record(&mut self, report: TurnReport) {
        if report.passed && report.phase == Phase::AwaitingHuman {
            self.message = Some(format!("{} has no move and passes", self.engine.automated_side().name()));
        } else if report.placements.len() > 1 {
            self.message = Some(format!(
                "You have no move; engine played {} times",
                report.placements.len()
            ));
        }
        self.last_report = Some(report);
    }
}
