//! factpacks CLI - Entry point
//!
//! Usage: factpacks <command> [options]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use factpacks::cli::{Cli, Commands};
use factpacks::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = Config::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Show(args) => factpacks::cli::show::run(args, &config),
        Commands::Check(args) => factpacks::cli::check::run(args),
        Commands::Chat(args) => factpacks::cli::chat::run(args, &config),
    }
}
