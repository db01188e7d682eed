//! `factpacks chat` command
//!
//! Line-oriented conversation with a fact store on stdin/stdout.
//!
//! # Usage
//! ```bash
//! factpacks chat --pack facts.txt
//! > roses?
//! roses are red
//! > the sky is blue
//! Got it.
//! > forget roses
//! OK, forgotten.
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::utils::open_store;
use crate::config::Config;
use crate::core::store::FactStore;

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Extra fact packs to load (after configured ones)
    #[arg(short, long)]
    pub pack: Vec<PathBuf>,

    /// Don't print the prompt
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: ChatArgs, config: &Config) -> Result<()> {
    let store = open_store(config, &args.pack)?;
    let prompt = if args.quiet { "" } else { config.chat.prompt.as_str() };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session(&store, stdin.lock(), stdout.lock(), prompt)
}

/// Answer one line of chat input
///
/// - `forget <name>` deletes
/// - `<name>?` looks up by exact name
/// - anything else is stored as a sentence
pub fn respond(store: &FactStore, line: &str) -> String {
    let line = line.trim();

    if store.human_fact_forget(line) {
        return "OK, forgotten.".to_string();
    }

    if let Some(name) = line.strip_suffix('?') {
        let name = name.trim();
        return match store.get_fact(name) {
            Some(fact) => fact.render(),
            None => format!("I don't know anything about {}.", name),
        };
    }

    if store.human_fact_set(line) {
        "Got it.".to_string()
    } else {
        "Sorry, I didn't understand that.".to_string()
    }
}

/// Run a chat session until the input ends
pub fn session<R: BufRead, W: Write>(
    store: &FactStore,
    input: R,
    mut output: W,
    prompt: &str,
) -> Result<()> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            writeln!(output, "{}", respond(store, &line))?;
        }
        write!(output, "{}", prompt)?;
        output.flush()?;
    }

    Ok(())
}
