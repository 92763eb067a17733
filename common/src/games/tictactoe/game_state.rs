use crate::games::SessionRng;
use crate::{log, logger};
use super::board::Board;
use super::bot_controller::{BotInput, MoveSource, calculate_bot_move, evaluate_position};
use super::difficulty::DifficultyProfile;
use super::settings::TicTacToeSessionSettings;
use super::types::{Mark, Position, WinningLine};
use super::win_detector::{check_win_with_line, is_winner};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    HumanTurn,
    ComputerTurn,
    HumanWon,
    ComputerWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(
            self,
            GameStatus::HumanWon | GameStatus::ComputerWon | GameStatus::Draw
        )
    }

    pub fn message(&self) -> &'static str {
        match self {
            GameStatus::HumanTurn => "Your turn",
            GameStatus::ComputerTurn => "Computer's turn",
            GameStatus::HumanWon => "Congratulations! You win!",
            GameStatus::ComputerWon => "Computer wins! Better luck next time.",
            GameStatus::Draw => "It's a draw!",
        }
    }
}

/// One game against the computer. Holds the only copy of the board.
#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub computer_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    profile: DifficultyProfile,
    rng: SessionRng,
}

impl TicTacToeGameState {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Self {
        let computer_mark = settings.computer_mark();
        Self {
            board: Board::new(),
            human_mark: settings.human_mark,
            computer_mark,
            status: GameStatus::HumanTurn,
            last_move: None,
            profile: settings.profile,
            rng,
        }
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn place_human_mark(&mut self, pos: Position) -> Result<GameStatus, String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }
        if self.status != GameStatus::HumanTurn {
            return Err("Not your turn".to_string());
        }

        self.board.place_mark(pos, self.human_mark)?;
        self.last_move = Some(pos);
        log!("Human placed {:?} at cell {}", self.human_mark, pos.cell_number());

        self.finish_turn(GameStatus::ComputerTurn);
        Ok(self.status)
    }

    pub fn play_computer_turn(&mut self) -> Result<Position, String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }
        if self.status != GameStatus::ComputerTurn {
            return Err("Not the computer's turn".to_string());
        }

        let bot_move = calculate_bot_move(
            &self.profile,
            BotInput::from_game_state(self),
            &mut self.rng,
        )?;
        let pos = bot_move.position;

        match bot_move.source {
            MoveSource::Minimax => log!("Computer searched and chose cell {}", pos.cell_number()),
            MoveSource::Mistake(ladder) => {
                log!("Computer rolled a mistake ({}) and chose cell {}", ladder, pos.cell_number())
            }
        }

        self.board.place_mark(pos, self.computer_mark)?;
        self.last_move = Some(pos);

        if logger::is_enabled()
            && let Some(outcome) =
                evaluate_position(&self.board, self.computer_mark, self.human_mark)
        {
            log!("Position value for the computer: {:?} ({})", outcome, outcome.score());
        }

        self.finish_turn(GameStatus::HumanTurn);
        Ok(pos)
    }

    fn finish_turn(&mut self, next: GameStatus) {
        debug_assert!(self.board.has_valid_turn_order(self.human_mark));

        self.status = if is_winner(&self.board, self.human_mark) {
            GameStatus::HumanWon
        } else if is_winner(&self.board, self.computer_mark) {
            GameStatus::ComputerWon
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            next
        };

        if self.status.is_over() {
            log!("Game over: {:?}", self.status);
        }
    }

    pub fn status_message(&self) -> &'static str {
        self.status.message()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Back to an empty board with the human to move. The profile and the
    /// random stream carry over.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::HumanTurn;
        self.last_move = None;
        log!("Game reset ({})", self.profile);
    }
}
