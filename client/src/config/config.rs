use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{DifficultySetting, Mark};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

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
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.difficulty.validate()?;
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: DifficultySetting::default(),
            human_mark: Mark::X,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::{DifficultyTier, HeuristicLadder};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_custom_config_round_trips_through_manager() {
        let config = Config {
            difficulty: DifficultySetting::Custom {
                mistake_probability: 0.35,
                ladder: HeuristicLadder::SeekWin,
            },
            human_mark: Mark::O,
            seed: Some(1234),
        };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(file_path.clone());

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config.clone()));

        let fresh: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(fresh.get_config(), Ok(config));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_tier_name_in_file() {
        let content_provider = FileContentConfigProvider::new(get_temp_file_path());
        content_provider
            .set_config_content("difficulty: Unbeatable\n")
            .unwrap();
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());

        let config = manager.get_config().unwrap();
        assert_eq!(config.difficulty, DifficultySetting::Tier(DifficultyTier::Unbeatable));
        assert_eq!(config.human_mark, Mark::X);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let content_provider = FileContentConfigProvider::new(get_temp_file_path());
        content_provider.set_config_content("seed: 7\n").unwrap();
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());

        let config = manager.get_config().unwrap();
        assert_eq!(config.difficulty, DifficultySetting::default());
        assert_eq!(config.human_mark, Mark::X);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            difficulty:
              mistake_probability: 1.5
            human_mark: X
        "#;

        let content_provider = FileContentConfigProvider::new(get_temp_file_path());
        content_provider.set_config_content(invalid_config_content).unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_empty_human_mark_fails_validation() {
        let config = Config {
            human_mark: Mark::Empty,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
