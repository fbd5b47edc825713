//! Persistent name list
//!
//! The ordered list of names shown on the wheel. Every successful mutation
//! writes the whole list back to the injected [`KeyValueStore`].

use serde::{Deserialize, Serialize};

use super::storage::KeyValueStore;

/// Storage key holding the serialized list
pub const STORAGE_KEY: &str = "rouletteNames";

/// Names used when nothing usable is stored
pub const DEFAULT_NAMES: [&str; 3] = ["Alice", "Bob", "Charlie"];

/// One wheel segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Text shown on the segment
    #[serde(rename = "option", alias = "label")]
    pub label: String,
}

impl Entry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Name list bound to a store
pub struct Roster<S = Box<dyn KeyValueStore>> {
    entries: Vec<Entry>,
    store: S,
}

impl<S: KeyValueStore> Roster<S> {
    /// Load the list from `store`, falling back to [`DEFAULT_NAMES`]
    ///
    /// The defaults are written back right away, replacing a missing or
    /// malformed value.
    pub fn load(store: S) -> Self {
        let loaded = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Entry>>(&raw) {
                Ok(entries) => Some(entries),
                Err(e) => {
                    tracing::warn!("Stored name list is malformed ({}), using defaults", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read stored name list: {}, using defaults", e);
                None
            }
        };

        let fell_back = loaded.is_none();
        let mut roster = Self {
            entries: loaded.unwrap_or_else(default_entries),
            store,
        };
        if fell_back {
            roster.persist();
        }

        tracing::debug!("Loaded {} names", roster.len());
        roster
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a trimmed name; blank input is ignored
    ///
    /// Returns `true` if the list changed.
    pub fn add(&mut self, raw: &str) -> bool {
        let label = raw.trim();
        if label.is_empty() {
            tracing::debug!("Ignoring blank name");
            return false;
        }

        self.entries.push(Entry::new(label));
        self.persist();
        true
    }

    /// Remove the entry at `index`; out of range is ignored
    pub fn remove(&mut self, index: usize) -> Option<Entry> {
        if index >= self.entries.len() {
            tracing::debug!(
                "Ignoring remove of index {} (len {})",
                index,
                self.entries.len()
            );
            return None;
        }

        let removed = self.entries.remove(index);
        self.persist();
        Some(removed)
    }

    fn persist(&mut self) {
        let encoded = match serde_json::to_string(&self.entries) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!("Failed to encode name list: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(STORAGE_KEY, &encoded) {
            tracing::error!("Failed to save name list: {}", e);
        }
    }
}

fn default_entries() -> Vec<Entry> {
    DEFAULT_NAMES.iter().map(|name| Entry::new(*name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::storage::MemoryStore;

    fn labels<S: KeyValueStore>(roster: &Roster<S>) -> Vec<&str> {
        roster.entries().iter().map(|e| e.label.as_str()).collect()
    }

    fn stored(store: &MemoryStore) -> Vec<Entry> {
        let raw = store.get(STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_fresh_store_uses_defaults() {
        let roster = Roster::load(MemoryStore::new());
        assert_eq!(labels(&roster), vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_corrupt_value_uses_defaults() {
        let roster = Roster::load(MemoryStore::with_value(STORAGE_KEY, "{oops"));
        assert_eq!(labels(&roster), vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_fallback_defaults_are_written_back() {
        let store = MemoryStore::with_value(STORAGE_KEY, "{oops");
        let roster = Roster::load(store.clone());
        assert_eq!(stored(&store), roster.entries());

        let fresh = MemoryStore::new();
        Roster::load(fresh.clone());
        assert_eq!(stored(&fresh), default_entries());
    }

    #[test]
    fn test_stored_list_is_not_rewritten_on_load() {
        let raw = r#"[{"label":"Amy"}]"#;
        let store = MemoryStore::with_value(STORAGE_KEY, raw);
        Roster::load(store.clone());
        assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some(raw));
    }

    #[test]
    fn test_reads_original_format() {
        let store = MemoryStore::with_value(STORAGE_KEY, r#"[{"option":"Zed"},{"label":"Amy"}]"#);
        let roster = Roster::load(store);
        assert_eq!(labels(&roster), vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_blank_names_ignored() {
        let store = MemoryStore::new();
        let mut roster = Roster::load(store.clone());
        assert!(!roster.add(""));
        assert!(!roster.add("   "));
        assert_eq!(roster.len(), 3);
        assert_eq!(stored(&store), default_entries());
    }

    #[test]
    fn test_add_trims() {
        let mut roster = Roster::load(MemoryStore::new());
        assert!(roster.add(" X "));
        assert_eq!(labels(&roster)[3], "X");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut roster = Roster::load(MemoryStore::new());
        assert_eq!(roster.remove(3), None);
        assert_eq!(roster.remove(usize::MAX), None);
        assert_eq!(labels(&roster), vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_store_matches_memory_after_each_mutation() {
        let store = MemoryStore::new();
        let mut roster = Roster::load(store.clone());

        roster.add("Dana");
        assert_eq!(stored(&store), roster.entries());
        roster.remove(1);
        assert_eq!(stored(&store), roster.entries());
        roster.add("Dana");
        assert_eq!(stored(&store), roster.entries());
        roster.remove(0);
        roster.remove(0);
        roster.remove(0);
        roster.remove(0);
        assert!(roster.is_empty());
        assert_eq!(stored(&store), roster.entries());
    }

    #[test]
    fn test_add_remove_reload() {
        let store = MemoryStore::new();
        let mut roster = Roster::load(store.clone());
        roster.add("Dana");
        roster.remove(0);

        let reloaded = Roster::load(store);
        assert_eq!(labels(&reloaded), vec!["Bob", "Charlie", "Dana"]);
    }

    #[test]
    fn test_duplicates_are_distinct() {
        let mut roster = Roster::load(MemoryStore::new());
        roster.add("Bob");
        assert_eq!(roster.len(), 4);
        roster.remove(1);
        assert_eq!(labels(&roster), vec!["Alice", "Charlie", "Bob"]);
    }

    #[test]
    fn test_boxed_store() {
        let store = MemoryStore::new();
        let boxed: Box<dyn KeyValueStore> = Box::new(store.clone());
        let mut roster: Roster = Roster::load(boxed);
        roster.add("Eve");
        assert_eq!(stored(&store).len(), 4);
    }
}
