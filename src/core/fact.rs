//! Fact - Core data structure
//!
//! A fact is one short declarative statement: a subject name, a predicate
//! value and a grammatical number that picks the verb.
//!
//! # Key Properties
//! - **name**: unique key in a [`FactStore`](super::store::FactStore)
//! - **value**: free predicate text, may contain "is"/"are" itself
//! - **is_plural**: renders with "are" instead of "is"
//!
//! Facts are values. Updating a fact means replacing it in the store.

use serde::{Deserialize, Serialize};

/// Verb used for singular facts
pub const SINGULAR_VERB: &str = "is";

/// Verb used for plural facts
pub const PLURAL_VERB: &str = "are";

/// A fact - one (name, value, number) statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    name: String,
    value: String,
    is_plural: bool,
}

impl Fact {
    /// Create a fact directly, without parser validation
    pub fn new(name: impl Into<String>, value: impl Into<String>, is_plural: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_plural,
        }
    }

    /// Subject name (store key)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Predicate text
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_plural(&self) -> bool {
        self.is_plural
    }

    /// "is" or "are"
    pub fn verb(&self) -> &'static str {
        if self.is_plural {
            PLURAL_VERB
        } else {
            SINGULAR_VERB
        }
    }

    /// Render as a sentence: `<name> <verb> <value>`
    pub fn render(&self) -> String {
        format!("{} {} {}", self.name, self.verb(), self.value)
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.name, self.verb(), self.value)
    }
}
