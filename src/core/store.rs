//! FactStore - Thread-safe in-memory fact container
//!
//! # Architecture
//!
//! ```text
//! pack line ──parse_pack_line──┐
//!                              ├──> Fact ──set_fact──> RwLock<HashMap<name, Fact>>
//! utterance ──parse_utterance──┘
//! ```
//!
//! # Key Points
//! - The map is the only state: no index, no cache
//! - Writers take the exclusive lock for one map mutation only
//! - Readers share the lock and get an owned copy of the fact
//! - Rejected input is logged at debug level and skipped

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::error::FactPackError;
use super::fact::Fact;
use super::parse::{parse_forget, parse_pack_line, parse_utterance};

/// Outcome of a batch load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines that produced a fact
    pub loaded: usize,
    /// Lines that were rejected
    pub skipped: usize,
}

/// In-memory fact store keyed by exact fact name
#[derive(Debug, Default)]
pub struct FactStore {
    facts: RwLock<HashMap<String, Fact>>,
}

impl FactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // One insert/remove per guard, so a poisoned map is still whole
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Fact>> {
        self.facts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Fact>> {
        self.facts.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace the fact stored under `fact.name()`
    pub fn set_fact(&self, fact: Fact) {
        self.write().insert(fact.name().to_string(), fact);
    }

    /// Exact-name lookup
    pub fn get_fact(&self, name: &str) -> Option<Fact> {
        self.read().get(name).cloned()
    }

    /// Remove a fact. Absent names are a no-op.
    pub fn delete_fact(&self, name: &str) {
        self.write().remove(name);
    }

    /// Number of stored facts
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of every fact, sorted by name
    pub fn facts(&self) -> Vec<Fact> {
        let mut facts: Vec<Fact> = self.read().values().cloned().collect();
        facts.sort_by(|a, b| a.name().cmp(b.name()));
        facts
    }

    /// Load a fact pack file, one fact per line
    ///
    /// Fails only when the file can't be opened or read. Malformed lines
    /// are skipped.
    pub fn load_fact_pack(&self, path: impl AsRef<Path>) -> Result<LoadReport, FactPackError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FactPackError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let report = self.load_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "Loaded fact pack"
        );
        Ok(report)
    }

    /// Load fact pack lines from any buffered reader
    ///
    /// The whole stream is read and parsed before the first insert, so a
    /// read failure leaves the store untouched.
    pub fn load_reader<R: BufRead>(&self, mut reader: R) -> Result<LoadReport, FactPackError> {
        let mut report = LoadReport::default();
        let mut parsed = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            match parse_pack_line(&line) {
                Ok(fact) => parsed.push(fact),
                Err(reason) => {
                    debug!(line = line_no, %reason, "Invalid fact format. Skipping.");
                    report.skipped += 1;
                }
            }
        }

        for fact in parsed {
            self.set_fact(fact);
            report.loaded += 1;
        }

        Ok(report)
    }

    /// Store a fact from a sentence like "roses are red"
    ///
    /// Returns `false` (and stores nothing) when the sentence can't be parsed.
    pub fn human_fact_set(&self, utterance: &str) -> bool {
        match parse_utterance(utterance) {
            Ok(fact) => {
                self.set_fact(fact);
                true
            }
            Err(reason) => {
                debug!(%reason, "There isn't enough information to parse a fact.");
                false
            }
        }
    }

    /// Delete a fact from a sentence like "forget roses"
    ///
    /// Returns `false` when the sentence isn't a forget request.
    pub fn human_fact_forget(&self, utterance: &str) -> bool {
        match parse_forget(utterance) {
            Ok(name) => {
                self.delete_fact(name);
                true
            }
            Err(reason) => {
                debug!(%reason, "Not a forget request.");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read, Write};
    use std::sync::Arc;
    use std::thread;
    use tempfile::NamedTempFile;

    const PACK: &str = "roses => red\n\
                        violets -> blue\n\
                        one => fish\n\
                        this line has no separator\n";

    fn rendered(store: &FactStore, name: &str) -> Option<String> {
        store.get_fact(name).map(|f| f.render())
    }

    #[test]
    fn test_load_fact_pack() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(PACK.as_bytes()).unwrap();

        let store = FactStore::new();
        let report = store.load_fact_pack(file.path()).unwrap();

        assert_eq!(report, LoadReport { loaded: 3, skipped: 1 });
        assert_eq!(store.len(), 3);
        assert_eq!(rendered(&store, "roses").as_deref(), Some("roses is red"));
        assert_eq!(
            rendered(&store, "violets").as_deref(),
            Some("violets are blue")
        );
        assert_eq!(rendered(&store, "one").as_deref(), Some("one is fish"));
        assert!(store.get_fact("elephant").is_none());
    }

    #[test]
    fn test_load_fact_pack_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FactStore::new();

        let err = store
            .load_fact_pack(dir.path().join("missing.txt"))
            .unwrap_err();

        assert!(matches!(err, FactPackError::Open { .. }));
        assert!(err.to_string().contains("missing.txt"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_last_line_without_newline() {
        let store = FactStore::new();
        let report = store
            .load_reader(Cursor::new("red fish => blue fish\nmonkey => a banana eater => yum"))
            .unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(
            rendered(&store, "red fish").as_deref(),
            Some("red fish is blue fish")
        );
        assert_eq!(
            rendered(&store, "monkey").as_deref(),
            Some("monkey is a banana eater => yum")
        );
    }

    #[test]
    fn test_load_skips_empty_fields_and_blank_lines() {
        let store = FactStore::new();
        let report = store
            .load_reader(Cursor::new("\n   => nameless\nvalueless ->  \r\nok -> fine\r\n"))
            .unwrap();

        assert_eq!(report, LoadReport { loaded: 1, skipped: 3 });
        assert_eq!(rendered(&store, "ok").as_deref(), Some("ok are fine"));
    }

    #[test]
    fn test_load_later_line_overwrites() {
        let store = FactStore::new();
        store
            .load_reader(Cursor::new("sky => blue\nsky -> grey today\n"))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(rendered(&store, "sky").as_deref(), Some("sky are grey today"));
    }

    #[test]
    fn test_load_invalid_utf8_line_is_not_fatal() {
        let store = FactStore::new();
        let mut bytes = b"caf\xe9 => open\n".to_vec();
        bytes.extend_from_slice(b"tea => hot\n");

        let report = store.load_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(rendered(&store, "tea").as_deref(), Some("tea is hot"));
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.served {
                return Err(std::io::Error::other("disk on fire"));
            }
            self.served = true;
            let line = b"roses => red\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn test_read_error_leaves_store_unchanged() {
        let store = FactStore::new();
        let reader = BufReader::new(FailingReader { served: false });

        let err = store.load_reader(reader).unwrap_err();

        assert!(matches!(err, FactPackError::Read(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_fact() {
        let store = FactStore::new();
        store.set_fact(Fact::new("test fact", "these are fact details", false));

        assert_eq!(
            rendered(&store, "test fact").as_deref(),
            Some("test fact is these are fact details")
        );
    }

    #[test]
    fn test_set_fact_overwrites_without_merge() {
        let store = FactStore::new();
        store.set_fact(Fact::new("roses", "red", true));
        store.set_fact(Fact::new("roses", "a flower", false));

        let fact = store.get_fact("roses").unwrap();
        assert_eq!(fact, Fact::new("roses", "a flower", false));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_fact_is_exact_match() {
        let store = FactStore::new();
        store.set_fact(Fact::new("Roses", "red", true));

        assert!(store.get_fact("roses").is_none());
        assert!(store.get_fact("Roses ").is_none());
        assert!(store.get_fact("Roses").is_some());
    }

    #[test]
    fn test_get_returns_a_snapshot() {
        let store = FactStore::new();
        store.set_fact(Fact::new("roses", "red", true));

        let before = store.get_fact("roses").unwrap();
        store.set_fact(Fact::new("roses", "white", true));

        assert_eq!(before.value(), "red");
        assert_eq!(store.get_fact("roses").unwrap().value(), "white");
    }

    #[test]
    fn test_empty_name_is_a_valid_key() {
        let store = FactStore::new();
        store.set_fact(Fact::new("", "nothing", false));

        assert_eq!(store.get_fact("").unwrap().value(), "nothing");
    }

    #[test]
    fn test_delete_fact() {
        let store = FactStore::new();
        store.set_fact(Fact::new("42", "life, universe, and everything", false));
        store.set_fact(Fact::new("43", "one more", false));

        store.delete_fact("42");

        assert!(store.get_fact("42").is_none());
        assert!(store.get_fact("43").is_some());
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let store = FactStore::new();
        store.set_fact(Fact::new("roses", "red", true));

        store.delete_fact("elephant");

        assert_eq!(store.len(), 1);
        assert!(store.get_fact("roses").is_some());
    }

    #[test]
    fn test_human_fact_set() {
        let store = FactStore::new();

        assert!(store.human_fact_set("roses are red"));
        assert_eq!(rendered(&store, "roses").as_deref(), Some("roses are red"));

        let sentences = [
            "the quick brown fox is jumping over the lazy dog",
            "42 is the answer to life, the universe, and everything",
            "monkeys are animals that live in trees and are animals with tails",
        ];
        for sentence in sentences {
            assert!(store.human_fact_set(sentence));
        }

        assert_eq!(
            rendered(&store, "the quick brown fox").as_deref(),
            Some(sentences[0])
        );
        assert_eq!(rendered(&store, "42").as_deref(), Some(sentences[1]));
        assert_eq!(rendered(&store, "monkeys").as_deref(), Some(sentences[2]));
    }

    #[test]
    fn test_human_fact_set_rejects_without_mutation() {
        let store = FactStore::new();

        assert!(!store.human_fact_set("hello there"));
        assert!(!store.human_fact_set("   is red"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_human_fact_forget() {
        let store = FactStore::new();
        store.human_fact_set("roses are red");
        store.human_fact_set("violets are blue");

        assert!(store.human_fact_forget("forget roses"));

        assert!(store.get_fact("roses").is_none());
        assert!(store.get_fact("violets").is_some());
        assert!(!store.human_fact_forget("remember violets"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_facts_sorted_snapshot() {
        let store = FactStore::new();
        store.human_fact_set("violets are blue");
        store.human_fact_set("roses are red");

        let names: Vec<_> = store
            .facts()
            .into_iter()
            .map(|f| f.name().to_string())
            .collect();
        assert_eq!(names, vec!["roses", "violets"]);
    }

    #[test]
    fn test_independent_stores() {
        let a = FactStore::new();
        let b = FactStore::new();
        a.human_fact_set("roses are red");

        assert!(b.get_fact("roses").is_none());
    }

    #[test]
    fn test_concurrent_access() {
        let store = Arc::new(FactStore::new());
        let threads = 8;
        let per_thread = 200;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..per_thread {
                        let name = format!("fact-{}-{}", t, i);
                        store.set_fact(Fact::new(name.as_str(), "here", false));
                        store.set_fact(Fact::new("shared", format!("thread {}", t), true));
                        let fact = store.get_fact(&name).unwrap();
                        assert_eq!(fact.render(), format!("{} is here", name));
                        if i % 2 == 0 {
                            store.delete_fact(&name);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Odd-numbered facts survive, plus the shared key
        assert_eq!(store.len(), threads * per_thread / 2 + 1);
        let shared = store.get_fact("shared").unwrap();
        assert!(shared.value().starts_with("thread "));
        assert!(shared.is_plural());
    }
}
