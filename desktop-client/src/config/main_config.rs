use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{DifficultySetting, Mark};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_desktop_config.yaml";
const MAX_COMPUTER_DELAY_MS: u32 = 5_000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub difficulty: DifficultySetting,
    pub human_mark: Mark,
    /// Pause before the computer answers a click.
    pub computer_delay_ms: u32,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.difficulty.validate()?;
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {}",
                MAX_COMPUTER_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: DifficultySetting::default(),
            human_mark: Mark::X,
            computer_delay_ms: 500,
        }
    }
}
