//! Evaluation module for Reversi positions
//!
//! This module provides scoring and move selection for the automated side.
//! The evaluation considers:
//! - Positional weights (corner control)
//! - Disc differential
//! - Mobility

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, select_move, MoveResult};
pub use weights::{position_weight, Weights, POSITION_WEIGHTS};
