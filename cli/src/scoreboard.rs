use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{GameState, PlayerRole};

pub const SCOREBOARD_FILE_EXTENSION: &str = "yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub name: String,
    pub is_computer: bool,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionScoreboard {
    pub finished_at: String,
    pub seed: u64,
    pub rounds_played: u32,
    pub players: Vec<ScoreLine>,
}

impl SessionScoreboard {
    pub fn from_game(game: &GameState, seed: u64) -> Self {
        Self {
            finished_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            seed,
            rounds_played: game.rounds_played,
            players: game
                .players
                .iter()
                .map(|player| ScoreLine {
                    name: player.name.clone(),
                    is_computer: player.role == PlayerRole::Computer,
                    score: player.score,
                })
                .collect(),
        }
    }
}

pub fn generate_scoreboard_filename() -> String {
    let now = chrono::Local::now();
    format!(
        "TICTACTOE_{}.{}",
        now.format("%Y%m%d%H%M%S"),
        SCOREBOARD_FILE_EXTENSION
    )
}

pub fn save_scoreboard(path: &Path, scoreboard: &SessionScoreboard) -> Result<(), String> {
    let content = serde_yaml_ng::to_string(scoreboard)
        .map_err(|e| format!("Failed to serialize scoreboard: {}", e))?;
    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write scoreboard {}: {}", path.display(), e))?;
    Ok(())
}

pub fn load_scoreboard(path: &Path) -> Result<SessionScoreboard, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read scoreboard {}: {}", path.display(), e))?;
    serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize scoreboard: {}", e))
}
