//! Reversi (Othello) engine with a human side and an automated side
//!
//! A compact engine for the standard 8x8 game:
//! - Canonical opening: Black on (3,4) and (4,3), White on (3,3) and (4,4)
//! - Captures in all 8 directions; a move is legal only if it flips
//! - A side without a legal move passes; the game ends after 64
//!   placements or when neither side can move
//! - Single-ply heuristic play for the automated side
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Flip computation, move resolver and legal-move generation
//! - [`eval`]: Position evaluation and move selection
//! - [`engine`]: Turn controller tying the pieces together
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use reversi::{Phase, Pos, ReversiEngine, Stone};
//!
//! let mut engine = ReversiEngine::new();
//!
//! // Human (Black) captures the White stone at (3,3)
//! assert_eq!(engine.place_human(Pos::new(2, 3)), Ok(1));
//! assert_eq!(engine.change_list(), &[Pos::new(2, 3), Pos::new(3, 3)]);
//!
//! // Automated side (White) replies
//! let report = engine.run_automated_turn();
//! for placement in &report.placements {
//!     println!("White plays {}", placement.pos);
//! }
//! assert_eq!(engine.phase(), Phase::AwaitingHuman);
//! println!("Black {} - White {}", engine.piece_count(Stone::Black), engine.piece_count(Stone::White));
//! ```

pub mod board;
pub mod cli;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Pos, Stone, BOARD_SIZE};
pub use engine::{MoveError, Phase, Placement, ReversiEngine, TurnReport, MAX_PLY};
pub use eval::MoveResult;
