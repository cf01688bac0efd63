//! Surf & Wave tic-tac-toe - unified CLI.

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use surf_tictactoe_tui::{
    Cli, Command, DEFAULT_CONFIG_FILE, TuiConfig, init_stderr_logging, run_replay, run_tui,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load(cli.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;
    if let Some(symbols) = cli.symbols {
        config = config.with_symbols(symbols);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(config),
        Command::Replay { moves, jump } => {
            init_stderr_logging();
            run_replay(&moves, jump, *config.symbols(), &mut std::io::stdout().lock())
        }
    }
}
