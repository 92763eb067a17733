use std::time::{Duration, Instant};

use common::games::SessionRng;
use common::games::tictactoe::{
    DifficultySetting, GameStatus, Mark, Position, TicTacToeGameState, TicTacToeSessionSettings,
};
use common::log;

/// Drives one window's game: human clicks go straight to the session, the
/// computer reply is held back until `computer_delay` has passed.
pub struct LocalGame {
    game: TicTacToeGameState,
    human_mark: Mark,
    computer_delay: Duration,
    computer_due_at: Option<Instant>,
    active_difficulty: DifficultySetting,
    pub selected_difficulty: DifficultySetting,
}

impl LocalGame {
    pub fn new(
        difficulty: DifficultySetting,
        human_mark: Mark,
        computer_delay: Duration,
        rng: SessionRng,
    ) -> Result<Self, String> {
        let settings = TicTacToeSessionSettings::from_setting(human_mark, &difficulty)?;
        log!("New desktop game: {} with seed {}", settings.profile, rng.seed());
        Ok(Self {
            game: TicTacToeGameState::new(settings, rng),
            human_mark,
            computer_delay,
            computer_due_at: None,
            active_difficulty: difficulty.clone(),
            selected_difficulty: difficulty,
        })
    }

    pub fn game(&self) -> &TicTacToeGameState {
        &self.game
    }

    pub fn active_difficulty(&self) -> &DifficultySetting {
        &self.active_difficulty
    }

    pub fn is_computer_thinking(&self) -> bool {
        self.computer_due_at.is_some()
    }

    pub fn cells_enabled(&self) -> bool {
        self.game.status == GameStatus::HumanTurn && !self.is_computer_thinking()
    }

    /// Clicks on occupied cells or out of turn are ignored.
    pub fn click(&mut self, pos: Position, now: Instant) -> bool {
        if !self.cells_enabled() {
            return false;
        }
        match self.game.place_human_mark(pos) {
            Ok(GameStatus::ComputerTurn) => {
                self.computer_due_at = Some(now + self.computer_delay);
                true
            }
            Ok(_) => true,
            Err(err) => {
                log!("Ignored click on cell {}: {}", pos.cell_number(), err);
                false
            }
        }
    }

    /// Plays the computer move once it is due. Returns how long to wait
    /// before the next check while a move is still pending.
    pub fn tick(&mut self, now: Instant) -> Result<Option<Duration>, String> {
        let Some(due_at) = self.computer_due_at else {
            return Ok(None);
        };
        if now < due_at {
            return Ok(Some(due_at - now));
        }

        self.computer_due_at = None;
        self.game.play_computer_turn()?;
        Ok(None)
    }

    /// Starts over with whatever difficulty is selected.
    pub fn restart(&mut self) -> Result<(), String> {
        if self.selected_difficulty != self.active_difficulty {
            let settings =
                TicTacToeSessionSettings::from_setting(self.human_mark, &self.selected_difficulty)?;
            let rng = SessionRng::from_random();
            log!("Difficulty changed to {} with seed {}", settings.profile, rng.seed());
            self.game = TicTacToeGameState::new(settings, rng);
            self.active_difficulty = self.selected_difficulty.clone();
        } else {
            self.game.reset();
        }
        self.computer_due_at = None;
        Ok(())
    }

    pub fn status_text(&self) -> String {
        match self.game.status {
            GameStatus::HumanTurn => format!("Player {}'s Turn", self.human_mark.symbol()),
            GameStatus::ComputerTurn => "Computer's Turn".to_string(),
            GameStatus::HumanWon => format!("Player {} Wins!", self.human_mark.symbol()),
            GameStatus::ComputerWon => "Computer Wins!".to_string(),
            GameStatus::Draw => "It's a Draw!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::DifficultyTier;

    const DELAY: Duration = Duration::from_millis(500);

    fn unbeatable_game() -> LocalGame {
        LocalGame::new(
            DifficultySetting::Tier(DifficultyTier::Unbeatable),
            Mark::X,
            DELAY,
            SessionRng::new(9),
        )
        .unwrap()
    }

    #[test]
    fn test_computer_waits_for_delay() {
        let mut local = unbeatable_game();
        let start = Instant::now();

        assert!(local.click(Position::new(0, 0), start));
        assert!(local.is_computer_thinking());
        assert!(!local.cells_enabled());
        assert_eq!(local.status_text(), "Computer's Turn");

        let wait = local.tick(start + Duration::from_millis(100)).unwrap();
        assert_eq!(wait, Some(Duration::from_millis(400)));
        assert_eq!(local.game().board.occupied_count(), 1);

        assert_eq!(local.tick(start + DELAY).unwrap(), None);
        assert_eq!(local.game().board.get(Position::CENTER), Some(Mark::O));
        assert!(local.cells_enabled());
        assert_eq!(local.status_text(), "Player X's Turn");
    }

    #[test]
    fn test_clicks_ignored_while_thinking_or_taken() {
        let mut local = unbeatable_game();
        let start = Instant::now();

        assert!(local.click(Position::new(0, 0), start));
        assert!(!local.click(Position::new(2, 2), start));
        local.tick(start + DELAY).unwrap();

        assert!(!local.click(Position::CENTER, start + DELAY));
        assert_eq!(local.game().board.occupied_count(), 2);
        assert_eq!(local.tick(start + DELAY * 2).unwrap(), None);
    }

    #[test]
    fn test_game_over_disables_cells() {
        let mut local = unbeatable_game();
        let mut now = Instant::now();

        while !local.game().status.is_over() {
            let pos = local.game().board.available_moves()[0];
            assert!(local.click(pos, now));
            now += DELAY;
            local.tick(now).unwrap();
        }

        assert_eq!(local.game().status, GameStatus::ComputerWon);
        assert_eq!(local.status_text(), "Computer Wins!");
        assert!(!local.cells_enabled());
        assert!(local.game().winning_line().is_some());
    }

    #[test]
    fn test_drawn_game_status() {
        let mut local = unbeatable_game();
        let mut now = Instant::now();

        for cell in [5, 2, 4, 3, 9] {
            let pos = Position::from_cell_number(cell).unwrap();
            assert!(local.click(pos, now));
            now += DELAY;
            local.tick(now).unwrap();
        }

        assert_eq!(local.game().status, GameStatus::Draw);
        assert_eq!(local.status_text(), "It's a Draw!");
        assert!(!local.cells_enabled());
        assert!(!local.is_computer_thinking());
        assert!(local.game().winning_line().is_none());
    }

    #[test]
    fn test_difficulty_applies_on_restart() {
        let mut local = unbeatable_game();
        let now = Instant::now();
        local.click(Position::new(1, 0), now);

        local.selected_difficulty = DifficultySetting::Tier(DifficultyTier::Easy);
        assert_eq!(local.game().profile().name(), "unbeatable");

        local.restart().unwrap();
        assert_eq!(local.game().profile().name(), "easy");
        assert_eq!(local.active_difficulty(), &DifficultySetting::Tier(DifficultyTier::Easy));
        assert_eq!(local.game().board.occupied_count(), 0);
        assert_eq!(local.game().status, GameStatus::HumanTurn);
        assert!(!local.is_computer_thinking());
    }

    #[test]
    fn test_restart_keeps_difficulty() {
        let mut local = unbeatable_game();
        local.click(Position::new(1, 0), Instant::now());
        local.restart().unwrap();

        assert_eq!(local.game().profile().name(), "unbeatable");
        assert_eq!(local.game().seed(), 9);
        assert!(local.cells_enabled());
    }

    #[test]
    fn test_invalid_custom_difficulty_rejected() {
        let result = LocalGame::new(
            DifficultySetting::Custom {
                mistake_probability: 2.0,
                ladder: Default::default(),
            },
            Mark::X,
            DELAY,
            SessionRng::new(1),
        );
        assert!(result.is_err());
    }
}
