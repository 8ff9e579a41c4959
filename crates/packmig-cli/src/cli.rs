use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Minecraft Modpack Configuration Migrator
///
/// Copies options.txt, journeymap/ and servers.dat from an old modpack
/// directory into a new one. Missing artifacts are skipped, not fatal;
/// existing files at the target are overwritten. Copies are not rolled
/// back on failure.
#[derive(Parser, Debug)]
#[command(name = "packmig")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the persisted-state file location
    #[arg(long, global = true, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the known configuration artifacts into TARGET
    Migrate {
        /// Source modpack directory (defaults to the last migration target)
        #[arg(long, value_name = "DIR")]
        from: Option<String>,

        /// Target modpack directory (created if absent)
        target: String,

        /// Leave the tutorialStep setting in the copied options.txt untouched
        #[arg(long)]
        keep_tutorial: bool,
    },

    /// Print the destination of the most recent successful migration
    LastTarget,
}
