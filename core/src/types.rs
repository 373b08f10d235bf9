use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won(Mark),
    Tied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    Random,
    Human,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerRole {
    Human,
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidMove(String),
    NoMovesAvailable,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
            GameError::NoMovesAvailable => write!(f, "No moves available on the board"),
        }
    }
}

impl std::error::Error for GameError {}
