use super::board::Board;
use super::types::{Mark, Position, WinningLine};

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Rows, then columns, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

fn line_owned_by(board: &Board, line: &[Position; 3], mark: Mark) -> bool {
    line.iter().all(|&pos| board.get(pos) == Some(mark))
}

pub fn is_winner(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    LINES.iter().any(|line| line_owned_by(board, line, mark))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in &LINES {
        let Some(mark) = board.get(line[0]) else {
            continue;
        };
        if mark != Mark::Empty && line_owned_by(board, line, mark) {
            return Some(WinningLine::new(mark, line[0], line[2]));
        }
    }
    None
}
