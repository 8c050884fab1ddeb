//! Main entry point for the Pig Latin translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use piglatin::cli::commands::{self, Commands};
use piglatin::TranslatorConfig;

/// Pig Latin translator - phrases, text files and an HTTP API
#[derive(Parser, Debug)]
#[command(name = "piglatin", version, about, long_about = None)]
struct Args {
    /// JSON configuration file (defaults to PIGLATIN_* env vars)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_PKG_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Execute command
    match args.command {
        Some(Commands::Phrase { words }) => {
            commands::handle_phrase(words)?;
        }
        Some(Commands::File {
            file,
            output,
            recursive,
        }) => {
            let config = TranslatorConfig::load(args.config.as_deref())?;
            commands::handle_file(config, file, output, recursive).await?;
        }
        Some(Commands::Server { host, port }) => {
            let config = TranslatorConfig::load(args.config.as_deref())?;
            commands::handle_server(config, host, port).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
