//! CLI Application

mod commands;

use clap::Parser;
use commands::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Roster => commands::roster::handle()?,
        Commands::Animals => commands::animals::handle()?,
        Commands::Calc(args) => commands::calc::handle(args)?,
    }

    Ok(())
}
