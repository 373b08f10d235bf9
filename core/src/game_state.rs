use crate::board::Board;
use crate::game_rng::GameRng;
use crate::player::Player;
use crate::settings::GameSettings;
use crate::types::{FirstPlayerMode, GameError, PlayerRole, RoundStatus};
use crate::win_detector::check_win;

#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub players: [Player; 2],
    pub current: usize,
    pub status: RoundStatus,
    pub rounds_played: u32,
    pub settings: GameSettings,
}

impl GameState {
    pub fn new(
        human: Player,
        computer: Player,
        settings: GameSettings,
        rng: &mut GameRng,
    ) -> Self {
        if human.role != PlayerRole::Human || computer.role != PlayerRole::Computer {
            panic!("GameState requires a human player and a computer player");
        }

        let current = first_player_index(settings.first_player_mode, rng);

        Self {
            board: Board::new(),
            players: [human, computer],
            current,
            status: RoundStatus::InProgress,
            rounds_played: 0,
            settings,
        }
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn other_player(&self) -> &Player {
        &self.players[1 - self.current]
    }

    pub fn place_mark(&mut self, position: usize) -> Result<(), GameError> {
        if self.status != RoundStatus::InProgress {
            return Err(GameError::InvalidMove("round is already over".to_string()));
        }

        let mark = self.players[self.current].mark;
        self.board.mark(position, mark)?;

        // The win check runs only for the mover; earlier moves already ruled
        // out a win for the other mark.
        if check_win(&self.board, mark) {
            self.status = RoundStatus::Won(mark);
            self.players[self.current].score += 1;
            self.rounds_played += 1;
            return Ok(());
        }

        if self.board.is_full() {
            self.status = RoundStatus::Tied;
            self.rounds_played += 1;
            return Ok(());
        }

        self.switch_turn();
        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current = 1 - self.current;
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            RoundStatus::Won(mark) => self.players.iter().find(|player| player.mark == mark),
            _ => None,
        }
    }

    pub fn reset(&mut self, rng: &mut GameRng) {
        self.board = Board::new();
        self.status = RoundStatus::InProgress;
        self.current = first_player_index(self.settings.first_player_mode, rng);
    }

    pub fn is_session_complete(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.score >= self.settings.score_limit)
    }
}

fn first_player_index(mode: FirstPlayerMode, rng: &mut GameRng) -> usize {
    match mode {
        FirstPlayerMode::Human => 0,
        FirstPlayerMode::Random => {
            if rng.random_bool() {
                0
            } else {
                1
            }
        }
    }
}
