//! Theme constants for the Reversi GUI

use egui::Color32;

// Board colors - classic felt green
pub const BOARD_BG: Color32 = Color32::from_rgb(0, 128, 128);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(0, 80, 80);
pub const GRID_LINE: Color32 = Color32::from_rgb(10, 40, 40);
pub const COORD_TEXT: Color32 = Color32::from_rgb(200, 230, 230);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(20, 20, 24);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const CHANGE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const LEGAL_HINT: Color32 = Color32::from_rgb(120, 200, 200);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 80)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_DONE: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const STONE_RADIUS_RATIO: f32 = 0.42;
pub const HINT_RADIUS_RATIO: f32 = 0.1;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const CHANGE_MARKER_RADIUS: f32 = 4.0;
