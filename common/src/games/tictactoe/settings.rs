use super::difficulty::{DifficultyProfile, DifficultySetting};
use super::types::Mark;

#[derive(Debug, Clone, PartialEq)]
pub struct TicTacToeSessionSettings {
    /// The human always moves first, whichever mark they hold.
    pub human_mark: Mark,
    pub profile: DifficultyProfile,
}

impl TicTacToeSessionSettings {
    pub fn new(human_mark: Mark, profile: DifficultyProfile) -> Result<Self, String> {
        if human_mark == Mark::Empty {
            return Err("Human mark must be X or O".to_string());
        }
        Ok(Self {
            human_mark,
            profile,
        })
    }

    pub fn from_setting(human_mark: Mark, setting: &DifficultySetting) -> Result<Self, String> {
        Self::new(human_mark, setting.to_profile()?)
    }

    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent().unwrap_or(Mark::O)
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            profile: DifficultySetting::default()
                .to_profile()
                .unwrap_or_else(|_| DifficultyProfile::perfect()),
        }
    }
}
