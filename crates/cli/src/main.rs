use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod data;
mod formatter;

#[derive(Parser)]
#[command(name = "stratbet")]
#[command(about = "Backtest betting strategies against a historical match archive", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a strategy file against the game archive
    Backtest {
        /// Strategy definition (JSON)
        #[arg(short, long)]
        strategy: String,
        /// Game archive CSV (defaults to the configured path)
        #[arg(short, long)]
        games: Option<String>,
        /// Config file path
        #[arg(short, long, default_value = "config/Config.toml")]
        config: String,
    },
    /// List the accepted market identifiers
    Markets,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Backtest {
            strategy,
            games,
            config,
        } => commands::backtest::run(&config, &strategy, games.as_deref()),
        Commands::Markets => {
            commands::markets::run();
            Ok(())
        }
    }
}
