mod board;
mod bot_controller;
mod difficulty;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, BotMove, MoveSource, calculate_bot_move, calculate_heuristic_move,
    calculate_minimax_move, calculate_move, evaluate_position,
};
pub use difficulty::{DifficultyProfile, DifficultySetting, DifficultyTier, HeuristicLadder};
pub use game_state::{GameStatus, TicTacToeGameState};
pub use settings::TicTacToeSessionSettings;
pub use types::{BOARD_SIZE, CELL_COUNT, Mark, Position, SearchOutcome, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line, is_winner};
