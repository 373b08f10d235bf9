mod config;
mod input;
mod scoreboard;
mod session;
mod ui;

use clap::Parser;
use std::path::Path;
use tictactoe_core::{GameRng, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(config::get_config_path);
    let cfg: config::Config =
        tictactoe_core::config::load_yaml_config(Path::new(&config_path))?;

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    log!("Session rng seed: {}", rng.seed());

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut writer = std::io::stdout();

    let game = session::run_session(&cfg, &mut rng, &mut reader, &mut writer)?;

    if cfg.scoreboard.save {
        let summary = scoreboard::SessionScoreboard::from_game(&game, rng.seed());
        let scoreboard_dir = Path::new(&cfg.scoreboard.location);
        if let Err(e) = std::fs::create_dir_all(scoreboard_dir) {
            log!("Failed to create scoreboard directory: {}", e);
        } else {
            let file_path = scoreboard_dir.join(scoreboard::generate_scoreboard_filename());
            match scoreboard::save_scoreboard(&file_path, &summary) {
                Ok(()) => log!("Scoreboard saved to: {}", file_path.display()),
                Err(e) => log!("Failed to save scoreboard: {}", e),
            }
        }
    }

    Ok(())
}
