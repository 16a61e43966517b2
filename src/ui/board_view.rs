//! Board rendering for the Reversi GUI

use crate::{Board, Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view should draw besides the stones
pub struct BoardOverlay<'a> {
    /// Cells the human may play (drawn as small dots)
    pub hints: &'a [Pos],
    /// Cells changed by the last placement
    pub changes: &'a [Pos],
    /// Color previewed under the pointer
    pub human: Stone,
    /// Accept clicks
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.play_area(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        for &pos in overlay.changes {
            self.draw_change_marker(&painter, pos);
        }

        if !overlay.interactive {
            return None;
        }

        for &pos in overlay.hints {
            self.draw_hint(&painter, pos);
        }

        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;

        if board.is_empty(board_pos) {
            let is_valid = overlay.hints.contains(&board_pos);
            self.draw_hover_preview(&painter, board_pos, overlay.human, is_valid);
        }

        response.clicked().then_some(board_pos)
    }

    /// Area covered by the 8x8 cells
    fn play_area(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    /// Draw the 8x8 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let area = self.play_area();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [Pos2::new(area.min.x + offset, area.min.y), Pos2::new(area.min.x + offset, area.max.y)],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [Pos2::new(area.min.x, area.min.y + offset), Pos2::new(area.max.x, area.min.y + offset)],
                stroke,
            );
        }
    }

    /// Draw coordinate labels (a-h, 1-8)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let area = self.play_area();

        for i in 0..BOARD_SIZE {
            let center = (i as f32 + 0.5) * self.cell_size;

            let letter = (b'a' + i as u8) as char;
            let pos = Pos2::new(area.min.x + center, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), COORD_TEXT);

            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, area.min.y + center);
            painter.text(pos, egui::Align2::CENTER_CENTER, format!("{}", i + 1), font.clone(), COORD_TEXT);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            let stone = board.get(pos);
            if stone != Stone::Empty {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    /// Draw a single stone
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));

        match stone {
            Stone::Black => {
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    /// Mark a cell changed by the last placement
    fn draw_change_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), CHANGE_MARKER_RADIUS, CHANGE_MARKER);
    }

    /// Dot on a legal move
    fn draw_hint(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), self.cell_size * HINT_RADIUS_RATIO, LEGAL_HINT);
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Stone::Empty => hover_valid(),
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.play_area().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::try_new(row, col)
    }

    /// Convert board position to the screen center of its cell
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let area = self.play_area();
        Pos2::new(
            area.min.x + (pos.col as f32 + 0.5) * self.cell_size,
            area.min.y + (pos.row as f32 + 0.5) * self.cell_size,
        )
    }
}
