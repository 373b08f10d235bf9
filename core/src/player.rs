use crate::types::{Mark, PlayerRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub mark: Mark,
    pub role: PlayerRole,
    pub score: u32,
}

impl Player {
    pub fn new(name: String, mark: Mark, role: PlayerRole) -> Self {
        Self {
            name,
            mark,
            role,
            score: 0,
        }
    }

    // The human always plays X and the computer always plays O.
    pub fn human(name: String) -> Self {
        Self::new(name, Mark::X, PlayerRole::Human)
    }

    pub fn computer(name: String) -> Self {
        Self::new(name, Mark::O, PlayerRole::Computer)
    }
}
