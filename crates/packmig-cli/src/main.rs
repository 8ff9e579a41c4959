mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    match &cli.command {
        Commands::Migrate {
            from,
            target,
            keep_tutorial,
        } => {
            commands::Migrate::execute(
                from.as_deref(),
                target,
                *keep_tutorial,
                cli.verbose,
                cli.state_file.as_deref(),
            )
            .context("Failed to execute migrate command")?;
        }
        Commands::LastTarget => {
            commands::LastTarget::execute(cli.state_file.as_deref())
                .context("Failed to execute last-target command")?;
        }
    }

    Ok(())
}
