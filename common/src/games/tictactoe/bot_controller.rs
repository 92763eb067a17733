use crate::games::SessionRng;
use super::board::Board;
use super::difficulty::{DifficultyProfile, HeuristicLadder};
use super::game_state::TicTacToeGameState;
use super::types::{Mark, Position, SearchOutcome};
use super::win_detector::{check_win, is_winner};

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board.clone(),
            current_mark: state.computer_mark,
        }
    }
}

/// How a move was picked, for logging by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Minimax,
    Mistake(HeuristicLadder),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub position: Position,
    pub source: MoveSource,
}

pub fn calculate_move(
    profile: &DifficultyProfile,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<Position, String> {
    calculate_bot_move(profile, input, rng).map(|m| m.position)
}

/// Rolls the mistake once for the whole turn, then runs either the
/// heuristic ladder or the full search.
pub fn calculate_bot_move(
    profile: &DifficultyProfile,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<BotMove, String> {
    check_preconditions(&input)?;

    if rng.roll(profile.mistake_probability()) {
        let ladder = profile.ladder();
        let position = calculate_heuristic_move(ladder, &input, rng)
            .ok_or_else(|| "Heuristic found no move on a non-full board".to_string())?;
        return Ok(BotMove {
            position,
            source: MoveSource::Mistake(ladder),
        });
    }

    let position = calculate_minimax_move(&input)
        .ok_or_else(|| "Minimax found no move on a non-full board".to_string())?;
    Ok(BotMove {
        position,
        source: MoveSource::Minimax,
    })
}

fn check_preconditions(input: &BotInput) -> Result<(), String> {
    if input.current_mark == Mark::Empty {
        return Err("Bot mark must be X or O".to_string());
    }
    if let Some(winner) = check_win(&input.board) {
        return Err(format!("Game is already won by {:?}", winner));
    }
    if input.board.is_full() {
        return Err("No available moves: board is full".to_string());
    }
    Ok(())
}

/// Exhaustive search. Returns the first move (row-major) reaching the best
/// outcome for `input.current_mark`.
pub fn calculate_minimax_move(input: &BotInput) -> Option<Position> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent()?;
    let mut board = input.board.clone();

    // Every opening draws under perfect play; the center is the
    // conventional pick and skips the largest search.
    if board.occupied_count() == 0 {
        return Some(Position::CENTER);
    }

    let mut best_move = None;
    let mut best_outcome = SearchOutcome::Loss;

    for pos in board.available_moves() {
        board.apply_move(pos, bot_mark);
        // Children at or below the current best cannot replace it.
        let outcome = minimax(
            &mut board,
            false,
            bot_mark,
            opponent_mark,
            best_outcome,
            SearchOutcome::Win,
        );
        board.undo_move(pos);

        if best_move.is_none() || outcome > best_outcome {
            best_outcome = outcome;
            best_move = Some(pos);
        }
        if best_outcome == SearchOutcome::Win {
            break;
        }
    }

    debug_assert_eq!(board, input.board, "search left the board modified");
    best_move
}

/// Alpha-beta over exact outcomes. Values outside `(alpha, beta)`
/// are bounds, values inside are exact.
fn minimax(
    board: &mut Board,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: SearchOutcome,
    mut beta: SearchOutcome,
) -> SearchOutcome {
    if is_winner(board, bot_mark) {
        return SearchOutcome::Win;
    }
    if is_winner(board, opponent_mark) {
        return SearchOutcome::Loss;
    }
    if board.is_full() {
        return SearchOutcome::Draw;
    }

    if is_maximizing {
        let mut max_eval = SearchOutcome::Loss;
        for pos in board.available_moves() {
            board.apply_move(pos, bot_mark);
            let eval = minimax(board, false, bot_mark, opponent_mark, alpha, beta);
            board.undo_move(pos);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = SearchOutcome::Win;
        for pos in board.available_moves() {
            board.apply_move(pos, opponent_mark);
            let eval = minimax(board, true, bot_mark, opponent_mark, alpha, beta);
            board.undo_move(pos);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

/// Plain minimax value of `board` with `to_move` about to play, scored for
/// `bot_mark`. No pruning; used to cross-check the pruned search.
pub fn evaluate_position(board: &Board, bot_mark: Mark, to_move: Mark) -> Option<SearchOutcome> {
    let opponent_mark = bot_mark.opponent()?;
    let mut board = board.clone();
    Some(full_minimax(&mut board, to_move == bot_mark, bot_mark, opponent_mark))
}

fn full_minimax(
    board: &mut Board,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> SearchOutcome {
    if is_winner(board, bot_mark) {
        return SearchOutcome::Win;
    }
    if is_winner(board, opponent_mark) {
        return SearchOutcome::Loss;
    }
    if board.is_full() {
        return SearchOutcome::Draw;
    }

    let mark = if is_maximizing { bot_mark } else { opponent_mark };
    let mut outcomes = Vec::new();
    for pos in board.available_moves() {
        board.apply_move(pos, mark);
        outcomes.push(full_minimax(board, !is_maximizing, bot_mark, opponent_mark));
        board.undo_move(pos);
    }

    let best = if is_maximizing {
        outcomes.into_iter().max()
    } else {
        outcomes.into_iter().min()
    };
    best.unwrap_or(SearchOutcome::Draw)
}

pub fn calculate_heuristic_move(
    ladder: HeuristicLadder,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = input.board.available_moves();

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board.clone();

    let line_move = match ladder {
        HeuristicLadder::Block => find_winning_move(&mut board, opponent_mark, &available_moves),
        HeuristicLadder::SeekWin => find_winning_move(&mut board, bot_mark, &available_moves),
        HeuristicLadder::WinThenBlock => find_winning_move(&mut board, bot_mark, &available_moves)
            .or_else(|| find_winning_move(&mut board, opponent_mark, &available_moves)),
        HeuristicLadder::Random => return rng.choose(&available_moves),
    };
    if line_move.is_some() {
        return line_move;
    }

    if available_moves.contains(&Position::CENTER) {
        return Some(Position::CENTER);
    }

    let corner_moves: Vec<Position> = available_moves
        .iter()
        .copied()
        .filter(Position::is_corner)
        .collect();
    if let Some(corner) = rng.choose(&corner_moves) {
        return Some(corner);
    }

    rng.choose(&available_moves)
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        board.apply_move(pos, mark);
        let wins = is_winner(board, mark);
        board.undo_move(pos);

        if wins {
            return Some(pos);
        }
    }
    None
}
