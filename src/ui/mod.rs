//! GUI module for Reversi using egui

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::ReversiApp;
pub use game_state::GameState;
