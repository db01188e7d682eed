//! factpacks - in-memory store of short declarative facts
//!
//! Facts such as "roses are red" or "one is fish" are read from fact pack
//! files or from plain sentences and kept in a thread-safe store.
//!
//! ## Key Concepts
//!
//! - **Fact**: a (name, value, plural) triple that renders as a sentence
//! - **Fact pack**: one fact per line, `name => value` or `name -> value`
//! - **Utterance**: a sentence, `name is value` or `name are value`
//! - **Rejection**: input that doesn't parse is logged and skipped
//!
//! ```
//! use factpacks::FactStore;
//!
//! let store = FactStore::new();
//! store.human_fact_set("roses are red");
//! assert_eq!(store.get_fact("roses").unwrap().render(), "roses are red");
//! ```

pub mod cli;
pub mod config;
pub mod core;

pub use self::core::error::FactPackError;
pub use self::core::fact::Fact;
pub use self::core::parse::{parse_forget, parse_pack_line, parse_utterance, Rejection};
pub use self::core::store::{FactStore, LoadReport};
