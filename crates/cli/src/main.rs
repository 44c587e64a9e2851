mod commands;
mod source;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{CheckCommand, ListCommand, ResolveCommand};

/// Detcond CLI - Detector configuration era and conditions tool
#[derive(Debug, Parser)]
#[command(
    name = "detcond",
    version,
    about = "Detector configuration era and conditions tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a version to its (global tag, era) pair
    Resolve(ResolveCommand),
    /// List registered versions
    List(ListCommand),
    /// Validate version tags
    Check(CheckCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Resolve(cmd) => cmd.execute()?,
        Commands::List(cmd) => cmd.execute()?,
        Commands::Check(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
