//! Error types for fact pack loading.

use std::path::PathBuf;

use thiserror::Error;

/// Resource errors raised while loading a fact pack.
///
/// Malformed lines are never errors; they are skipped and logged.
#[derive(Debug, Error)]
pub enum FactPackError {
    /// The pack could not be opened for reading.
    #[error("failed to open fact pack {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stream failed part way through.
    #[error("failed to read fact pack: {0}")]
    Read(#[from] std::io::Error),
}
