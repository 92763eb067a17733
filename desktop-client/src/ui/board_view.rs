use common::games::tictactoe::{BOARD_SIZE, Mark, Position, TicTacToeGameState, WinningLine};

pub struct BoardView {
    last_hover: Option<Position>,
}

impl BoardView {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_size = available_width.min(available_height) / BOARD_SIZE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, pos: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + pos.col as f32 * cell_size,
                board_rect.top() + pos.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    /// Draws the grid and returns the cell the human clicked, if any.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        game: &TicTacToeGameState,
        enabled: bool,
    ) -> Option<Position> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_size = cell_size * BOARD_SIZE as f32;

        let sense = if enabled {
            egui::Sense::click()
        } else {
            egui::Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(egui::vec2(board_size, board_size), sense);

        let painter = ui.painter();
        let background = if enabled {
            egui::Color32::from_rgb(240, 240, 240)
        } else {
            egui::Color32::from_rgb(215, 215, 215)
        };
        painter.rect_filled(rect, 0.0, background);

        if let Some(line) = game.winning_line() {
            Self::highlight_line(painter, rect, cell_size, line);
        }

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
        }

        for (row, cells) in game.board.rows().iter().enumerate() {
            for (col, mark) in cells.iter().enumerate() {
                let cell_rect = Self::cell_rect(rect, cell_size, Position::new(row, col));
                match mark {
                    Mark::X => Self::draw_x(painter, cell_rect),
                    Mark::O => Self::draw_o(painter, cell_rect),
                    Mark::Empty => {}
                }
            }
        }

        self.last_hover = None;
        if !enabled {
            return None;
        }

        if let Some(hover_pos) = response.hover_pos() {
            let col = ((hover_pos.x - rect.left()) / cell_size) as usize;
            let row = ((hover_pos.y - rect.top()) / cell_size) as usize;
            let pos = Position::new(row, col);

            if pos.is_in_bounds() && game.board.is_empty_at(pos) {
                painter.rect_filled(
                    Self::cell_rect(rect, cell_size, pos),
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                );
                self.last_hover = Some(pos);
            }
        }

        if response.clicked() {
            return self.last_hover;
        }
        None
    }

    fn highlight_line(
        painter: &egui::Painter,
        board_rect: egui::Rect,
        cell_size: f32,
        line: WinningLine,
    ) {
        let color = egui::Color32::from_rgba_unmultiplied(255, 215, 0, 120);
        let row_step = (line.end.row as isize - line.start.row as isize) / 2;
        let col_step = (line.end.col as isize - line.start.col as isize) / 2;

        for i in 0..BOARD_SIZE as isize {
            let pos = Position::new(
                (line.start.row as isize + row_step * i) as usize,
                (line.start.col as isize + col_step * i) as usize,
            );
            painter.rect_filled(Self::cell_rect(board_rect, cell_size, pos), 0.0, color);
        }

        painter.line_segment(
            [
                Self::cell_rect(board_rect, cell_size, line.start).center(),
                Self::cell_rect(board_rect, cell_size, line.end).center(),
            ],
            egui::Stroke::new(6.0, egui::Color32::from_rgb(230, 160, 0)),
        );
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
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

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}
