use serde::{Deserialize, Serialize};

use oro_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use oro_engine::game::GameSettings;

const CONFIG_FILE: &str = "oro_runner_config.yaml";

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(CONFIG_FILE)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameSettings,
    pub scores: ScoreConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ScoreConfig {
    pub save: bool,
    pub location: String,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.scores.validate()?;
        Ok(())
    }
}

impl Validate for ScoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.is_empty() {
            return Err("score location must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            scores: ScoreConfig {
                save: true,
                location: "oro_best_level.txt".to_string(),
            },
        }
    }
}
