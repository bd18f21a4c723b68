// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chess board widget: paints the position and maps clicks to squares.
//!
//! Strictly a projection of the controller's state; all game decisions
//! stay in `rookery_core`. The widget reports the clicked square (if the
//! click landed on the board) and the app feeds it to the controller.

use crate::ui_config::UiConfig;
use egui::{Align2, Color32, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use rookery_core::controller::GameController;
use rookery_core::rules::RulesProvider;
use rookery_core::{Piece, PieceColor, PieceKind, SquareCoord, BOARD_SIZE};

/// Widget for rendering and interacting with the chess board
pub struct BoardWidget {
    /// Square size in pixels, recomputed each frame from available space
    square_size: f32,
}

impl BoardWidget {
    pub fn new() -> Self {
        Self { square_size: 80.0 }
    }

    /// Render the board and return the clicked square, if any.
    pub fn render<R: RulesProvider>(
        &mut self,
        ui: &mut egui::Ui,
        controller: &GameController<R>,
        config: &UiConfig,
    ) -> Option<SquareCoord> {
        let margin = config.board.margin;

        // Fit the board to the available space, capped by the configured size
        let available = ui.available_size();
        let max_side = available.min_elem() - 2.0 * margin;
        self.square_size = Self::fit_square_size(max_side, config.board.square_size);

        let board_side = self.square_size * BOARD_SIZE as f32;
        let desired_size = Vec2::splat(board_side + 2.0 * margin);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());
        let board_rect = Rect::from_min_size(rect.min + Vec2::splat(margin), Vec2::splat(board_side));

        if ui.is_rect_visible(rect) {
            self.paint_board(ui, board_rect, controller, config);
            if config.board.show_coordinates {
                self.paint_coordinates(ui, board_rect, config);
            }
        }

        if response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                // Clicks in the margin or outside the board are dropped here
                if let Some(square) = self.pos_to_square(pos, board_rect) {
                    tracing::debug!(square = %square, "board click");
                    return Some(square);
                }
            }
        }

        None
    }

    fn paint_board<R: RulesProvider>(
        &self,
        ui: &mut egui::Ui,
        board_rect: Rect,
        controller: &GameController<R>,
        config: &UiConfig,
    ) {
        let painter = ui.painter_at(board_rect.expand(config.board.margin));
        let light: Color32 = config.colors.light_square.into();
        let dark: Color32 = config.colors.dark_square.into();

        // Alternating squares; a1 is dark
        for file in 0..BOARD_SIZE {
            for rank in 0..BOARD_SIZE {
                let square = SquareCoord::new(file, rank);
                let rect = self.square_rect(square, board_rect);
                let color = if (file + rank) % 2 == 1 { light } else { dark };
                painter.rect_filled(rect, 0.0, color);
            }
        }

        // Selection highlight under the piece glyph
        if let Some(selected) = controller.selection() {
            let rect = self.square_rect(selected, board_rect);
            painter.rect_filled(rect, 0.0, Color32::from(config.colors.selection));
        }

        // Piece glyphs
        let font = FontId::proportional(self.square_size * config.board.glyph_scale);
        for file in 0..BOARD_SIZE {
            for rank in 0..BOARD_SIZE {
                let square = SquareCoord::new(file, rank);
                if let Some(piece) = controller.piece_at(square) {
                    let center = self.square_rect(square, board_rect).center();
                    self.paint_piece(&painter, center, piece, &font, config);
                }
            }
        }

        // Legal-target markers: dot on empty squares, ring around captures
        for &target in controller.legal_targets() {
            let center = self.square_rect(target, board_rect).center();
            if controller.piece_at(target).is_some() {
                let radius = self.square_size * config.board.capture_ring_ratio;
                painter.circle_stroke(
                    center,
                    radius,
                    Stroke::new(3.0, Color32::from(config.colors.capture_ring)),
                );
            } else {
                let radius = self.square_size * config.board.target_dot_ratio;
                painter.circle_filled(center, radius, Color32::from(config.colors.target_dot));
            }
        }
    }

    fn paint_piece(
        &self,
        painter: &egui::Painter,
        center: Pos2,
        piece: Piece,
        font: &FontId,
        config: &UiConfig,
    ) {
        let glyph = piece_glyph(piece.kind);
        let fill: Color32 = match piece.color {
            PieceColor::White => config.colors.white_piece.into(),
            PieceColor::Black => config.colors.black_piece.into(),
        };
        // Offset shadow keeps light glyphs visible on light squares
        let shadow_offset = (self.square_size * 0.02).max(1.0);
        painter.text(
            center + Vec2::splat(shadow_offset),
            Align2::CENTER_CENTER,
            glyph,
            font.clone(),
            config.colors.piece_shadow.into(),
        );
        painter.text(center, Align2::CENTER_CENTER, glyph, font.clone(), fill);
    }

    fn paint_coordinates(&self, ui: &mut egui::Ui, board_rect: Rect, config: &UiConfig) {
        let painter = ui.painter_at(board_rect.expand(config.board.margin));
        let font = FontId::proportional(config.board.coordinate_font_size);
        let color: Color32 = config.colors.label.into();

        for i in 0..BOARD_SIZE {
            // File letters along the bottom margin
            let file_char = (b'a' + i) as char;
            painter.text(
                Pos2::new(
                    board_rect.min.x + (i as f32 + 0.5) * self.square_size,
                    board_rect.max.y + config.board.margin * 0.5,
                ),
                Align2::CENTER_CENTER,
                file_char,
                font.clone(),
                color,
            );

            // Rank numbers along the left margin, rank 1 at the bottom
            painter.text(
                Pos2::new(
                    board_rect.min.x - config.board.margin * 0.5,
                    board_rect.max.y - (i as f32 + 0.5) * self.square_size,
                ),
                Align2::CENTER_CENTER,
                (i + 1).to_string(),
                font.clone(),
                color,
            );
        }
    }

    /// Square size that fits `available` pixels, capped by the configured
    /// size, with a readability floor. The floor wins over an undersized
    /// configured value, so no combination of inputs can panic.
    fn fit_square_size(available: f32, configured: f32) -> f32 {
        (available / BOARD_SIZE as f32).min(configured).max(32.0)
    }

    /// Screen rectangle of a square; screen row 0 is rank 8.
    fn square_rect(&self, square: SquareCoord, board_rect: Rect) -> Rect {
        let x = board_rect.min.x + f32::from(square.file) * self.square_size;
        let y = board_rect.min.y + f32::from(BOARD_SIZE - 1 - square.rank) * self.square_size;
        Rect::from_min_size(Pos2::new(x, y), Vec2::splat(self.square_size))
    }

    /// Map a pointer position to a square by integer division.
    fn pos_to_square(&self, pos: Pos2, board_rect: Rect) -> Option<SquareCoord> {
        if !board_rect.contains(pos) {
            return None;
        }
        let rel = pos - board_rect.min;
        let col = (rel.x / self.square_size).floor() as i32;
        let row = (rel.y / self.square_size).floor() as i32;
        if (0..i32::from(BOARD_SIZE)).contains(&col) && (0..i32::from(BOARD_SIZE)).contains(&row) {
            Some(SquareCoord::new(
                col as u8,
                BOARD_SIZE - 1 - row as u8,
            ))
        } else {
            None
        }
    }
}

impl Default for BoardWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// Unicode glyph for a piece kind; color comes from the fill tint.
fn piece_glyph(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => '\u{265F}',
        PieceKind::Knight => '\u{265E}',
        PieceKind::Bishop => '\u{265D}',
        PieceKind::Rook => '\u{265C}',
        PieceKind::Queen => '\u{265B}',
        PieceKind::King => '\u{265A}',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> BoardWidget {
        BoardWidget { square_size: 80.0 }
    }

    fn board_rect() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::splat(640.0))
    }

    #[test]
    fn top_left_square_is_a8() {
        let sq = widget()
            .pos_to_square(Pos2::new(101.0, 51.0), board_rect())
            .unwrap();
        assert_eq!(sq, SquareCoord::new(0, 7));
    }

    #[test]
    fn bottom_right_square_is_h1() {
        let sq = widget()
            .pos_to_square(Pos2::new(739.0, 689.0), board_rect())
            .unwrap();
        assert_eq!(sq, SquareCoord::new(7, 0));
    }

    #[test]
    fn out_of_board_clicks_are_dropped() {
        let w = widget();
        assert_eq!(w.pos_to_square(Pos2::new(99.0, 51.0), board_rect()), None);
        assert_eq!(w.pos_to_square(Pos2::new(101.0, 691.0), board_rect()), None);
    }

    #[test]
    fn rect_and_click_mapping_agree() {
        let w = widget();
        let rect = board_rect();
        for (file, rank) in [(0u8, 0u8), (4, 1), (7, 7), (3, 4)] {
            let square = SquareCoord::new(file, rank);
            let center = w.square_rect(square, rect).center();
            assert_eq!(w.pos_to_square(center, rect), Some(square));
        }
    }

    #[test]
    fn square_size_shrinks_with_the_window() {
        assert_eq!(BoardWidget::fit_square_size(800.0, 80.0), 80.0);
        assert_eq!(BoardWidget::fit_square_size(320.0, 80.0), 40.0);
    }

    #[test]
    fn undersized_configured_square_falls_back_to_the_floor() {
        // square_size below the floor in a config file must not panic
        assert_eq!(BoardWidget::fit_square_size(800.0, 16.0), 32.0);
        assert_eq!(BoardWidget::fit_square_size(100.0, 16.0), 32.0);
    }

    #[test]
    fn glyphs_are_distinct_per_kind() {
        let kinds = [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ];
        let mut glyphs: Vec<char> = kinds.iter().map(|&k| piece_glyph(k)).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), kinds.len());
    }
}
