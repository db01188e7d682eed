//! `factpacks check` command
//!
//! Loads each pack into its own store and reports loaded/skipped lines.
//! Run with `--verbose` to see why lines were skipped.
//!
//! # Usage
//! ```bash
//! factpacks check facts.txt more.txt
//! factpacks -v check facts.txt --format json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::OutputFormat;
use crate::core::fact::Fact;
use crate::core::store::FactStore;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Fact pack files to check
    #[arg(required = true)]
    pub packs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

/// Result for one pack
#[derive(Debug, Serialize)]
pub struct PackCheck {
    pub path: PathBuf,
    pub loaded: usize,
    pub skipped: usize,
    pub facts: Vec<Fact>,
}

/// Load one pack into a fresh store
pub fn check_pack(path: &Path) -> Result<PackCheck> {
    let store = FactStore::new();
    let report = store
        .load_fact_pack(path)
        .with_context(|| format!("Failed to check pack {}", path.display()))?;

    Ok(PackCheck {
        path: path.to_path_buf(),
        loaded: report.loaded,
        skipped: report.skipped,
        facts: store.facts(),
    })
}

pub fn run(args: CheckArgs) -> Result<()> {
    let checks = args
        .packs
        .iter()
        .map(PathBuf::as_path)
        .map(check_pack)
        .collect::<Result<Vec<_>>>()?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&checks)?),
        OutputFormat::Pretty => {
            for check in &checks {
                println!("📦 {}", check.path.display());
                println!("   Loaded:  {}", check.loaded);
                println!("   Skipped: {}", check.skipped);
                for fact in &check.facts {
                    println!("   • {}", fact);
                }
            }
        }
    }

    Ok(())
}
