use crate::types::FirstPlayerMode;

pub const DEFAULT_SCORE_LIMIT: u32 = 5;
pub const MAX_SCORE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub score_limit: u32,
    pub first_player_mode: FirstPlayerMode,
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.score_limit < 1 || self.score_limit > MAX_SCORE_LIMIT {
            return Err(format!(
                "score_limit must be between 1 and {}, got {}",
                MAX_SCORE_LIMIT, self.score_limit
            ));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            score_limit: DEFAULT_SCORE_LIMIT,
            first_player_mode: FirstPlayerMode::Random,
        }
    }
}
