use std::fmt;

use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Position};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from three rows of text: `X`, `O`, and ` `/`.`/`_` for
    /// empty cells.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, String> {
        let mut board = Self::new();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().collect();
            if symbols.len() != BOARD_SIZE {
                return Err(format!(
                    "Row {} must have {} cells, got {} in '{}'",
                    row,
                    BOARD_SIZE,
                    symbols.len(),
                    text
                ));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = Mark::from_symbol(symbol).ok_or_else(|| {
                    format!("Invalid character '{}' at row {}, column {}", symbol, row, col)
                })?;
            }
        }
        Ok(board)
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_in_bounds() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order. Search and heuristics break ties by
    /// this order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.mark_count(Mark::Empty)
    }

    /// `first` has placed as many marks as its opponent, or exactly one more.
    pub fn has_valid_turn_order(&self, first: Mark) -> bool {
        let Some(second) = first.opponent() else {
            return false;
        };
        let first_count = self.mark_count(first);
        let second_count = self.mark_count(second);
        first_count == second_count || first_count == second_count + 1
    }

    /// Search-side placement. The cell must be empty and `mark` must be a
    /// player mark.
    pub fn apply_move(&mut self, pos: Position, mark: Mark) {
        assert!(mark != Mark::Empty, "apply_move called with an empty mark");
        let cell = &mut self.cells[pos.row][pos.col];
        assert!(
            *cell == Mark::Empty,
            "apply_move on occupied cell ({}, {})",
            pos.row,
            pos.col
        );
        *cell = mark;
    }

    /// Reverts an `apply_move`. The cell must be occupied.
    pub fn undo_move(&mut self, pos: Position) {
        let cell = &mut self.cells[pos.row][pos.col];
        assert!(
            *cell != Mark::Empty,
            "undo_move on empty cell ({}, {})",
            pos.row,
            pos.col
        );
        *cell = Mark::Empty;
    }

    /// Checked placement for moves coming from outside the engine.
    pub fn place_mark(&mut self, pos: Position, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        if !pos.is_in_bounds() {
            return Err("Position out of bounds".to_string());
        }
        if self.cells[pos.row][pos.col] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }
        self.cells[pos.row][pos.col] = mark;
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let symbols: Vec<String> = row.iter().map(|m| m.symbol().to_string()).collect();
            writeln!(f, "{}", symbols.join(" | "))?;
            writeln!(f, "{}", "-".repeat(9))?;
        }
        Ok(())
    }
}
