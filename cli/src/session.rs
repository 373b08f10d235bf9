use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_core::{
    GameRng, GameState, Player, PlayerRole, RoundStatus, calculate_move, find_winning_line, log,
};

use crate::config::Config;
use crate::input;
use crate::ui;

pub fn run_session<R: BufRead, W: Write>(
    config: &Config,
    rng: &mut GameRng,
    reader: &mut R,
    writer: &mut W,
) -> Result<GameState, String> {
    let human_name = input::read_player_name(reader, writer)?;
    log!("Session starting: {} vs {}", human_name, config.computer_name);

    let human = Player::human(human_name);
    let computer = Player::computer(config.computer_name.clone());
    let mut game = GameState::new(human, computer, config.game_settings(), rng);

    loop {
        play_round(&mut game, rng, reader, writer)?;
        announce_round_outcome(&game, writer)?;

        if game.is_session_complete() {
            if let Some(winner) = game.winner() {
                write_line(
                    writer,
                    &format!(
                        "{} has won {} rounds, ending the session.",
                        winner.name, winner.score
                    ),
                )?;
            }
            break;
        }

        if config.round_pause_secs > 0 {
            thread::sleep(Duration::from_secs(config.round_pause_secs));
        }

        if input::read_play_again(reader, writer)? {
            game.reset(rng);
        } else {
            break;
        }
    }

    write_line(writer, "Thanks for playing!")?;
    Ok(game)
}

fn play_round<R: BufRead, W: Write>(
    game: &mut GameState,
    rng: &mut GameRng,
    reader: &mut R,
    writer: &mut W,
) -> Result<(), String> {
    write_line(writer, &ui::render_board(&game.board))?;

    while game.status == RoundStatus::InProgress {
        match game.current_player().role {
            PlayerRole::Human => {
                let position =
                    input::read_position(reader, writer, &game.board.empty_positions())?;
                if let Err(e) = game.place_mark(position) {
                    // Recoverable: the next loop iteration re-prompts.
                    log!("Move to {} rejected: {}", position, e);
                    continue;
                }
            }
            PlayerRole::Computer => {
                let own_mark = game.current_player().mark;
                let opponent_mark = game.other_player().mark;
                let position = calculate_move(&game.board, own_mark, opponent_mark, rng)
                    .map_err(|e| {
                        log!("Computer cannot move: {}", e);
                        format!("Computer move failed: {}", e)
                    })?;

                write_line(
                    writer,
                    &format!("{} marks position {}.", game.current_player().name, position),
                )?;
                game.place_mark(position)
                    .map_err(|e| format!("Computer move to {} rejected: {}", position, e))?;
            }
        }

        write_line(writer, &ui::render_board(&game.board))?;
    }

    Ok(())
}

fn announce_round_outcome<W: Write>(game: &GameState, writer: &mut W) -> Result<(), String> {
    match game.status {
        RoundStatus::Won(mark) => {
            if let Some(winner) = game.winner() {
                write_line(writer, &ui::render_winner(&winner.name))?;
            }
            if let Some(line) = find_winning_line(&game.board, mark) {
                write_line(writer, &ui::render_winning_line(&line))?;
            }
        }
        RoundStatus::Tied => {
            write_line(writer, &ui::render_tie())?;
        }
        RoundStatus::InProgress => {}
    }

    write_line(writer, &ui::render_scores(&game.players))
}

fn write_line<W: Write>(writer: &mut W, text: &str) -> Result<(), String> {
    writeln!(writer, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
}
