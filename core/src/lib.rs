pub mod board;
pub mod bot_controller;
pub mod config;
pub mod game_rng;
pub mod game_state;
pub mod logger;
pub mod player;
pub mod settings;
pub mod types;
pub mod win_detector;

pub use board::{Board, completing_pairs};
pub use bot_controller::calculate_move;
pub use game_rng::GameRng;
pub use game_state::GameState;
pub use player::Player;
pub use settings::GameSettings;
pub use types::{FirstPlayerMode, GameError, Mark, PlayerRole, RoundStatus};
pub use win_detector::{check_win, find_winning_line};
