//! `factpacks show` command
//!
//! Shows facts by exact name.
//!
//! # Usage
//! ```bash
//! factpacks show --pack facts.txt roses violets
//! factpacks show --pack facts.txt "red fish" --format json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use super::utils::open_store;
use super::OutputFormat;
use crate::config::Config;
use crate::core::fact::Fact;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Fact names (exact match)
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Extra fact packs to load (after configured ones)
    #[arg(short, long)]
    pub pack: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

pub fn run(args: ShowArgs, config: &Config) -> Result<()> {
    let store = open_store(config, &args.pack)?;

    let mut found: Vec<Fact> = Vec::new();
    for name in &args.names {
        match store.get_fact(name) {
            Some(fact) => found.push(fact),
            None => eprintln!("❓ No fact named '{}'", name),
        }
    }

    if found.is_empty() {
        bail!("None of the requested facts are known.");
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found)?),
        OutputFormat::Pretty => {
            for fact in &found {
                println!("{}", fact);
            }
        }
    }

    Ok(())
}
