//! Command-line interface for the Reversi binary.

use clap::{Parser, ValueEnum};

use crate::Stone;

/// Reversi - play Othello against a heuristic engine
#[derive(Parser, Debug)]
#[command(name = "reversi")]
#[command(about = "Reversi against a single-ply heuristic engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color the human plays (Black opens)
    #[arg(long, value_enum, default_value_t = Side::Black)]
    pub human: Side,

    /// Tracing filter, e.g. `reversi=debug` (overrides RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,

    /// Play engine against engine in the terminal instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Initial window width
    #[arg(long, default_value_t = 900.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 640.0)]
    pub height: f32,
}

/// Side choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Stone {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

/// Default tracing filter when neither `--log` nor RUST_LOG is given
pub const DEFAULT_LOG_FILTER: &str = "reversi=info";
