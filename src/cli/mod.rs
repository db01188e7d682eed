//! CLI module - Command definitions and handlers
//!
//! The CLI is a thin front end: it loads packs into a [`FactStore`](crate::FactStore)
//! and feeds it text. All parsing lives in [`crate::core`].

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub mod chat;
pub mod check;
pub mod show;
pub mod utils;

/// factpacks - in-memory store of short declarative facts
///
/// Load fact packs (`name => value`, `name -> value`) and ask about them.
#[derive(Parser, Debug)]
#[command(name = "factpacks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (debug logging, shows skipped lines)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "FACTPACKS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show facts by exact name
    Show(show::ShowArgs),

    /// Load fact packs and report what was loaded and skipped
    Check(check::CheckArgs),

    /// Talk to the store: "X is Y", "X?", "forget X"
    Chat(chat::ChatArgs),
}

/// Output format shared by commands
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable sentences
    #[default]
    Pretty,
    /// JSON
    Json,
}
