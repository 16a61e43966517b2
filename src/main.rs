//! Reversi GUI and headless self-play
//!
//! Opens an egui window by default; `--headless` plays the engine against
//! itself in the terminal.

use clap::Parser;
use reversi::cli::{Cli, DEFAULT_LOG_FILTER};
use reversi::eval::select_move;
use reversi::rules::MoveResolver;
use reversi::ui::ReversiApp;
use reversi::{Board, Stone};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    let filter = match &cli.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if cli.headless {
        run_headless();
        return Ok(());
    }

    let human = Stone::from(cli.human);
    info!(human = ?human, "starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Reversi"),
        ..Default::default()
    };

    eframe::run_native(
        "Reversi",
        options,
        Box::new(move |cc| Ok(Box::new(ReversiApp::new(cc, human)))),
    )
}

/// Both sides driven by the selector until neither can move
fn run_headless() {
    let mut board = Board::new();
    let mut resolver = MoveResolver::new();
    let mut to_move = Stone::Black;
    let mut passes = 0;
    let mut ply = 0;

    println!("{board}");

    while passes < 2 {
        let result = select_move(&board, to_move);
        match result.best_move {
            Some(pos) => {
                let flips = resolver.apply(&mut board, pos, to_move);
                ply += 1;
                passes = 0;
                println!(
                    "{:>2}. {} plays {} flipping {} (score {}, {} candidates)",
                    ply,
                    to_move.name(),
                    pos,
                    flips,
                    result.score,
                    result.candidates
                );
                println!("{board}");
            }
            None => {
                passes += 1;
                println!("    {} passes", to_move.name());
            }
        }
        to_move = to_move.opponent();
    }

    let black = board.count(Stone::Black);
    let white = board.count(Stone::White);
    let verdict = match black.cmp(&white) {
        std::cmp::Ordering::Greater => "Black wins",
        std::cmp::Ordering::Less => "White wins",
        std::cmp::Ordering::Equal => "Draw",
    };
    println!("Final: Black {black} - White {white} ({verdict})");
    info!(black, white, ply, "headless game finished");
}
