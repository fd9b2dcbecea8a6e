//! wavjoin CLI - join `name.L.wav` + `name.R.wav` into `name.wav`.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wavjoin")]
#[command(author, version, about = "Join mono left/right WAV files into stereo", long_about = None)]
struct Cli {
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Join every left/right pair in a directory
    Merge(commands::merge::MergeArgs),

    /// List resolved pairs without writing anything
    Pairs(commands::pairs::PairsArgs),

    /// Display WAV file information
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Merge(args) => commands::merge::run(args),
        Commands::Pairs(args) => commands::pairs::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
