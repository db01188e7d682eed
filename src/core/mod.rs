//! Core module - Business logic
//!
//! Contains the fact record, the text grammars and the fact store.

pub mod error;
pub mod fact;
pub mod parse;
pub mod store;
