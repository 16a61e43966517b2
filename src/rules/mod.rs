//! Game rules for Reversi
//!
//! This module implements the rule set:
//! - Directional flip computation (the capture rule)
//! - The move resolver that applies placements and records change-lists
//! - Bitboard legal-move generation (mobility, pass and end detection)

pub mod flips;
pub mod moves;
pub mod resolver;

// Re-exports for convenient access
pub use flips::{
    apply_flips, collect_flips, count_flips, execute_flips, get_flipped_positions, is_legal, run_length,
};
pub use moves::{has_legal_move, is_terminal, legal_moves, mobility};
pub use resolver::MoveResolver;
