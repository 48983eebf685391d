use anyhow::{Context, Result};
use std::io;
use wordle_game::cli::{CliInterface, parse_cli};
use wordle_game::logging::{default_log_path, init_logging};
use wordle_game::tui::TuiInterface;
use wordle_game::{Board, game_loop};

fn main() -> Result<()> {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(default_log_path) {
        if let Err(e) = init_logging(&path, cli.verbose) {
            eprintln!("Logging disabled, cannot open '{}': {e}", path.display());
        }
    }

    let config = cli.game_config().context("invalid game configuration")?;
    log::info!(
        "Starting game: {} letters, {} attempts, {} mode",
        config.width(),
        config.max_attempts,
        if cli.plain { "plain" } else { "tui" }
    );
    let mut board = Board::new(config)?;

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock(), io::stdout());
        game_loop(&mut board, &mut interface);
    } else {
        let mut interface = TuiInterface::new().context("failed to initialise terminal")?;
        game_loop(&mut board, &mut interface);
        // Dropping the interface restores the terminal
        drop(interface);
    }

    log::info!("Game finished after {} guesses", board.rows().len());
    Ok(())
}
