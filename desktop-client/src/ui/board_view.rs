use common::tictactoe::{BOARD_SIDE, Board, Mark};

pub struct BoardView {
    last_hover: Option<usize>,
}

impl BoardView {
    const BOARD_PADDING: f32 = 40.0;
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let available = available_width.min(available_height) - Self::BOARD_PADDING * 2.0;
        (available / BOARD_SIDE as f32).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, position: usize) -> egui::Rect {
        let x = (position % BOARD_SIDE) as f32;
        let y = (position / BOARD_SIDE) as f32;
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + x * cell_size,
                board_rect.top() + y * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn cell_at(board_rect: egui::Rect, cell_size: f32, pointer: egui::Pos2) -> Option<usize> {
        if !board_rect.contains(pointer) {
            return None;
        }
        let x = ((pointer.x - board_rect.left()) / cell_size) as usize;
        let y = ((pointer.y - board_rect.top()) / cell_size) as usize;
        (x < BOARD_SIDE && y < BOARD_SIDE).then_some(y * BOARD_SIDE + x)
    }

    /// Paints the board and returns the empty cell clicked this frame.
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, accepts_input: bool) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let side = cell_size * BOARD_SIDE as f32;

        ui.add_space(Self::BOARD_PADDING);
        let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        if let Some(line) = board.winning_line() {
            for position in line {
                painter.rect_filled(
                    Self::cell_rect(rect, cell_size, position),
                    0.0,
                    egui::Color32::from_rgb(190, 235, 190),
                );
            }
        }

        self.last_hover = None;
        if accepts_input
            && let Some(hover_pos) = response.hover_pos()
            && let Some(position) = Self::cell_at(rect, cell_size, hover_pos)
            && board.get(position) == Some(Mark::Empty)
        {
            painter.rect_filled(
                Self::cell_rect(rect, cell_size, position),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
            self.last_hover = Some(position);
        }

        for i in 0..=BOARD_SIDE {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
        }

        for (position, mark) in board.cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, cell_size, position);
            match mark {
                Mark::X => self.draw_x(painter, cell_rect),
                Mark::O => self.draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if accepts_input && response.clicked() {
            return self.last_hover;
        }
        None
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(300.0, 300.0))
    }

    #[test]
    fn test_cell_at_maps_pointer_to_index() {
        assert_eq!(BoardView::cell_at(board_rect(), 100.0, egui::pos2(15.0, 15.0)), Some(0));
        assert_eq!(BoardView::cell_at(board_rect(), 100.0, egui::pos2(160.0, 160.0)), Some(4));
        assert_eq!(BoardView::cell_at(board_rect(), 100.0, egui::pos2(305.0, 220.0)), Some(8));
    }

    #[test]
    fn test_cell_at_outside_board() {
        assert_eq!(BoardView::cell_at(board_rect(), 100.0, egui::pos2(5.0, 50.0)), None);
        assert_eq!(BoardView::cell_at(board_rect(), 100.0, egui::pos2(50.0, 400.0)), None);
    }

    #[test]
    fn test_cell_rect_round_trips_through_cell_at() {
        for position in 0..BOARD_SIDE * BOARD_SIDE {
            let rect = BoardView::cell_rect(board_rect(), 100.0, position);
            assert_eq!(BoardView::cell_at(board_rect(), 100.0, rect.center()), Some(position));
        }
    }

    #[test]
    fn test_cell_size_is_clamped() {
        assert_eq!(BoardView::calculate_cell_size(100.0, 100.0), BoardView::MIN_CELL_SIZE);
        assert_eq!(BoardView::calculate_cell_size(2000.0, 2000.0), BoardView::MAX_CELL_SIZE);
    }
}
