//! Parse - Text grammars that produce facts
//!
//! Two independent grammars resolve to the same [`Fact`]:
//!
//! | Grammar   | Singular          | Plural             |
//! |-----------|-------------------|--------------------|
//! | Pack line | `<name> => <val>` | `<name> -> <val>`  |
//! | Utterance | `<name> is <val>` | `<name> are <val>` |
//!
//! # Key Points
//! - The token must have whitespace on both sides
//! - Singular is tried before plural
//! - Only the first occurrence splits; later tokens stay in the value
//! - Both parts are trimmed and must be non-empty
//!
//! A failed parse is a [`Rejection`], never an error for the caller.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::fact::Fact;

// `\s` restricted to ASCII whitespace
static PACK_SINGULAR: Lazy<Regex> = Lazy::new(|| token(r"=>"));
static PACK_PLURAL: Lazy<Regex> = Lazy::new(|| token(r"->"));
static UTTERANCE_SINGULAR: Lazy<Regex> = Lazy::new(|| token(r"is"));
static UTTERANCE_PLURAL: Lazy<Regex> = Lazy::new(|| token(r"are"));
static FORGET: Lazy<Regex> = Lazy::new(|| build(r"(?s)^forget[\t\n\f\r ]+(.*)$"));

fn token(body: &str) -> Regex {
    build(&format!(r"[\t\n\f\r ]{}[\t\n\f\r ]", body))
}

fn build(pattern: &str) -> Regex {
    // Patterns are compile-time constants
    Regex::new(pattern).expect("static fact grammar pattern")
}

/// Why a line or utterance produced no fact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Neither the singular nor the plural token occurs
    #[error("no recognized separator")]
    NoSeparator,

    /// Name or value is empty after trimming
    #[error("fact name and value can't be empty")]
    EmptyField,

    /// Not a `forget <name>` request
    #[error("not a forget request")]
    NotForget,
}

/// Split on the first singular token, else the first plural token
fn split_fact(text: &str, singular: &Regex, plural: &Regex) -> Result<Fact, Rejection> {
    let (parts, is_plural): (Vec<&str>, bool) = if singular.is_match(text) {
        (singular.splitn(text, 2).collect(), false)
    } else if plural.is_match(text) {
        (plural.splitn(text, 2).collect(), true)
    } else {
        return Err(Rejection::NoSeparator);
    };

    let [name, value] = parts.as_slice() else {
        return Err(Rejection::NoSeparator);
    };

    let name = name.trim();
    let value = value.trim();
    if name.is_empty() || value.is_empty() {
        return Err(Rejection::EmptyField);
    }

    Ok(Fact::new(name, value, is_plural))
}

/// Parse one line of a fact pack (`=>` singular, `->` plural)
///
/// # Examples
/// ```
/// use factpacks::core::parse::parse_pack_line;
///
/// let fact = parse_pack_line("violets -> blue\n").unwrap();
/// assert_eq!(fact.render(), "violets are blue");
/// ```
pub fn parse_pack_line(line: &str) -> Result<Fact, Rejection> {
    split_fact(line, &PACK_SINGULAR, &PACK_PLURAL)
}

/// Parse a sentence (`is` singular, `are` plural)
///
/// # Examples
/// ```
/// use factpacks::core::parse::parse_utterance;
///
/// let fact = parse_utterance("roses are red").unwrap();
/// assert_eq!(fact.name(), "roses");
/// assert!(fact.is_plural());
/// ```
pub fn parse_utterance(text: &str) -> Result<Fact, Rejection> {
    split_fact(text, &UTTERANCE_SINGULAR, &UTTERANCE_PLURAL)
}

/// Parse `forget <name>` and return the trimmed name
pub fn parse_forget(text: &str) -> Result<&str, Rejection> {
    let captures = FORGET.captures(text.trim()).ok_or(Rejection::NotForget)?;
    let name = captures.get(1).map_or("", |m| m.as_str()).trim();
    if name.is_empty() {
        return Err(Rejection::EmptyField);
    }
    Ok(name)
}
