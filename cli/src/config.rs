use serde::{Deserialize, Serialize};
use tictactoe_core::config::Validate;
use tictactoe_core::settings::{DEFAULT_SCORE_LIMIT, GameSettings};
use tictactoe_core::types::FirstPlayerMode;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ScoreboardConfig {
    pub save: bool,
    pub location: String,
}

impl Validate for ScoreboardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.save && self.location.trim().is_empty() {
            return Err("Scoreboard location must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub computer_name: String,
    pub score_limit: u32,
    pub first_player: FirstPlayerMode,
    pub round_pause_secs: u64,
    pub scoreboard: ScoreboardConfig,
}

impl Config {
    pub fn game_settings(&self) -> GameSettings {
        GameSettings {
            score_limit: self.score_limit,
            first_player_mode: self.first_player,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.computer_name.trim().is_empty() {
            return Err("computer_name must not be empty".to_string());
        }
        self.game_settings().validate()?;
        self.scoreboard.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer_name: "C3PO".to_string(),
            score_limit: DEFAULT_SCORE_LIMIT,
            first_player: FirstPlayerMode::Random,
            round_pause_secs: 3,
            scoreboard: ScoreboardConfig {
                save: true,
                location: "tictactoe_scores".to_string(),
            },
        }
    }
}
