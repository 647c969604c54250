use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cardwise::cli;

#[derive(Parser)]
#[command(
    name = "cardwise",
    version,
    about = "Payment card validation service: Luhn checksum, BIN scheme detection, safe masking"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP validation service
    Serve {
        /// Port to bind (overrides the config file)
        #[arg(long)]
        port: Option<u16>,

        /// Path to a YAML config file
        #[arg(long, default_value = "cardwise.yml")]
        config: PathBuf,
    },

    /// Validate a single card number and exit (code 1 if invalid)
    Check {
        /// Card number; spaces and hyphens are allowed
        number: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port, config } => cli::serve::run(&config, port).await?,
        Command::Check { number, json } => cli::check::run(&number, json)?,
    }

    Ok(())
}
