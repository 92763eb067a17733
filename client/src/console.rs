use std::io::{self, BufRead, Write};

use common::games::tictactoe::{Board, GameStatus, Position, TicTacToeGameState};
use common::log;

pub const PROMPT: &str = "Enter your move (1-9): ";
pub const INVALID_INPUT: &str = "Invalid input. Choose a number between 1-9.";
pub const SPOT_TAKEN: &str = "That spot is taken. Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    Invalid,
    Taken,
}

impl InputError {
    pub fn message(&self) -> &'static str {
        match self {
            InputError::Invalid => INVALID_INPUT,
            InputError::Taken => SPOT_TAKEN,
        }
    }
}

/// Parses a 1-9 cell number and checks the cell is free.
pub fn parse_cell(input: &str, board: &Board) -> Result<Position, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::Invalid);
    }
    let number: usize = trimmed.parse().map_err(|_| InputError::Invalid)?;
    let pos = Position::from_cell_number(number).ok_or(InputError::Invalid)?;
    if !board.is_empty_at(pos) {
        return Err(InputError::Taken);
    }
    Ok(pos)
}

fn finish<W: Write>(game: &TicTacToeGameState, output: &mut W) -> io::Result<GameStatus> {
    write!(output, "{}", game.board)?;
    writeln!(output, "{}", game.status_message())?;
    Ok(game.status)
}

/// Plays one game over the given streams. Returns the final status, or the
/// current one if input runs out first.
pub fn run_console_game<R: BufRead, W: Write>(
    game: &mut TicTacToeGameState,
    input: &mut R,
    output: &mut W,
) -> io::Result<GameStatus> {
    loop {
        write!(output, "{}", game.board)?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            log!("Input closed before the game finished");
            return Ok(game.status);
        }

        let pos = match parse_cell(&line, &game.board) {
            Ok(pos) => pos,
            Err(err) => {
                writeln!(output, "{}", err.message())?;
                continue;
            }
        };

        if let Err(err) = game.place_human_mark(pos) {
            writeln!(output, "{}", err)?;
            continue;
        }
        if game.status.is_over() {
            return finish(game, output);
        }

        let reply = game.play_computer_turn().map_err(io::Error::other)?;
        writeln!(output, "Computer chose {}", reply.cell_number())?;

        if game.status.is_over() {
            return finish(game, output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::{
        DifficultyProfile, HeuristicLadder, Mark, TicTacToeSessionSettings,
    };
    use std::io::Cursor;

    fn game_with(profile: DifficultyProfile, seed: u64) -> TicTacToeGameState {
        let settings = TicTacToeSessionSettings::new(Mark::X, profile).unwrap();
        TicTacToeGameState::new(settings, SessionRng::new(seed))
    }

    fn play(game: &mut TicTacToeGameState, script: &str) -> (GameStatus, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let status = run_console_game(game, &mut input, &mut output).unwrap();
        (status, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_cell() {
        let board = Board::from_rows(["X  ", "   ", "   "]).unwrap();
        assert_eq!(parse_cell("5\n", &board), Ok(Position::CENTER));
        assert_eq!(parse_cell(" 9 ", &board), Ok(Position::new(2, 2)));
        assert_eq!(parse_cell("1", &board), Err(InputError::Taken));
        assert_eq!(parse_cell("0", &board), Err(InputError::Invalid));
        assert_eq!(parse_cell("10", &board), Err(InputError::Invalid));
        assert_eq!(parse_cell("-3", &board), Err(InputError::Invalid));
        assert_eq!(parse_cell("abc", &board), Err(InputError::Invalid));
        assert_eq!(parse_cell("", &board), Err(InputError::Invalid));
    }

    #[test]
    fn test_bad_input_does_not_end_the_game() {
        let mut game = game_with(DifficultyProfile::perfect(), 1);
        let script = "abc\n0\n1\n1\n2\n7\n1\n2\n3\n4\n5\n6\n7\n8\n9\n";
        let (status, output) = play(&mut game, script);

        assert!(output.contains(INVALID_INPUT));
        assert!(output.contains(SPOT_TAKEN));
        assert!(output.contains("Computer chose 5"));
        assert!(status.is_over());
        assert_ne!(status, GameStatus::HumanWon);
        assert!(output.ends_with(&format!("{}\n", status.message())));
    }

    #[test]
    fn test_input_closed_mid_game() {
        let mut game = game_with(DifficultyProfile::perfect(), 2);
        let (status, output) = play(&mut game, "1\n");

        assert_eq!(status, GameStatus::HumanTurn);
        assert!(output.contains("Computer chose 5"));
        assert!(output.contains("X |   |  \n---------\n"));
    }

    #[test]
    fn test_drawn_game_message() {
        let mut game = game_with(DifficultyProfile::perfect(), 3);
        let (status, output) = play(&mut game, "5\n2\n4\n3\n9\n");

        assert_eq!(status, GameStatus::Draw);
        for reply in ["Computer chose 1", "Computer chose 8", "Computer chose 6", "Computer chose 7"] {
            assert!(output.contains(reply));
        }
        assert!(output.ends_with("It's a draw!\n"));
    }

    #[test]
    fn test_computer_win_message() {
        let mut game = game_with(DifficultyProfile::perfect(), 4);
        let (status, output) = play(&mut game, "1\n2\n4\n");

        assert_eq!(status, GameStatus::ComputerWon);
        assert!(output.contains("Computer chose 7"));
        assert!(output.ends_with("Computer wins! Better luck next time.\n"));
    }

    #[test]
    fn test_human_win_message() {
        let profile = DifficultyProfile::new("random", 1.0, HeuristicLadder::Random).unwrap();
        // Top row first, then any cell; some seed lets the human through.
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n";
        let won = (0..200).any(|seed| {
            let mut game = game_with(profile.clone(), seed);
            let (status, output) = play(&mut game, script);
            status == GameStatus::HumanWon && output.ends_with("Congratulations! You win!\n")
        });
        assert!(won);
    }
}
