mod commands;
mod error;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "distortion")]
#[command(version, about = "Edge server for the High Distortion playlist page", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Serve the playlist page and API
    Serve {
        /// Path to server.toml
        config: PathBuf,

        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch and validate the stored track document
    Check {
        /// Path to server.toml
        config: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, port } => commands::serve::run(config, port).await,
        Command::Check { config } => commands::check::run(config).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "distortion", &mut io::stdout());
            Ok(())
        }
    }
}
