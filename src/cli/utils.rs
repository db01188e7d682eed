//! CLI utility functions
//!
//! Common helpers shared across CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::core::store::FactStore;

/// Build a store from the configured packs followed by `extra` packs
///
/// Later packs overwrite facts with the same name from earlier ones.
///
/// # Errors
/// Returns an error if any pack can't be opened or read.
pub fn open_store(config: &Config, extra: &[PathBuf]) -> Result<FactStore> {
    let store = FactStore::new();

    for pack in config.pack_paths().iter().chain(extra) {
        store
            .load_fact_pack(pack)
            .with_context(|| format!("Failed to load pack {}", pack.display()))?;
    }

    Ok(store)
}
