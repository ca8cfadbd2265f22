//! Key-value persistence
//!
//! Session state is saved through an injected string-keyed store rather than
//! any ambient global, so tests run against an in-memory fake and the CLI
//! runs against a JSON file. Values are themselves JSON objects keyed by
//! date string; the `load_dated`/`save_dated` helpers handle that inner
//! layer. Loads degrade silently: a missing or corrupt value reads as empty.

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Injected persistence capability
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key`
    ///
    /// # Errors
    /// Returns an I/O error when the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory store for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one JSON object of string values per file
///
/// The whole file is rewritten on every set, atomically via a temp file in
/// the same directory. A missing or unreadable file opens as an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    map: FxHashMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading any existing content
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, map }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> io::Result<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let text = serde_json::to_string_pretty(&self.map).map_err(io::Error::other)?;
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(text.as_bytes())?;
        temp.persist(&self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Read one date's entry out of a store value
///
/// The value under `key` is expected to be a JSON object keyed by date
/// string. Missing key, unparseable value, or missing date all read as
/// `None`.
#[must_use]
pub fn load_dated<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    date: &str,
) -> Option<T> {
    let raw = store.get(key)?;
    let mut map: FxHashMap<String, serde_json::Value> = serde_json::from_str(&raw).ok()?;
    let value = map.remove(date)?;
    serde_json::from_value(value).ok()
}

/// Write one date's entry into a store value, keeping other dates intact
///
/// # Errors
/// Returns an I/O error when serialization or the store write fails.
pub fn save_dated<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    date: &str,
    entry: &T,
) -> io::Result<()> {
    let mut map: serde_json::Map<String, serde_json::Value> = store
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();

    let value = serde_json::to_value(entry).map_err(io::Error::other)?;
    map.insert(date.to_string(), value);

    let raw = serde_json::to_string(&serde_json::Value::Object(map)).map_err(io::Error::other)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Entry {
        note: String,
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v".to_string()));
    }

    #[test]
    fn dated_round_trip_keeps_other_dates() {
        let mut store = MemoryStore::new();
        let first = Entry {
            note: "one".to_string(),
        };
        let second = Entry {
            note: "two".to_string(),
        };

        save_dated(&mut store, "sessions", "2026-08-29", &first).unwrap();
        save_dated(&mut store, "sessions", "2026-08-30", &second).unwrap();

        assert_eq!(
            load_dated::<Entry>(&store, "sessions", "2026-08-29"),
            Some(first)
        );
        assert_eq!(
            load_dated::<Entry>(&store, "sessions", "2026-08-30"),
            Some(second)
        );
    }

    #[test]
    fn save_overwrites_the_same_date() {
        let mut store = MemoryStore::new();
        let first = Entry {
            note: "one".to_string(),
        };
        let second = Entry {
            note: "two".to_string(),
        };

        save_dated(&mut store, "sessions", "2026-08-30", &first).unwrap();
        save_dated(&mut store, "sessions", "2026-08-30", &second).unwrap();
        assert_eq!(
            load_dated::<Entry>(&store, "sessions", "2026-08-30"),
            Some(second)
        );
    }

    #[test]
    fn corrupt_value_loads_as_none() {
        let mut store = MemoryStore::new();
        store.set("sessions", "not json at all").unwrap();
        assert_eq!(load_dated::<Entry>(&store, "sessions", "2026-08-30"), None);
    }

    #[test]
    fn corrupt_value_is_replaced_on_save() {
        let mut store = MemoryStore::new();
        store.set("sessions", "{broken").unwrap();
        let entry = Entry {
            note: "fresh".to_string(),
        };
        save_dated(&mut store, "sessions", "2026-08-30", &entry).unwrap();
        assert_eq!(
            load_dated::<Entry>(&store, "sessions", "2026-08-30"),
            Some(entry)
        );
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path);
        store.set("k", "v").unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("k"), Some("v".to_string()));
    }

    #[test]
    fn file_store_opens_empty_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "]]not json[[").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("k"), None);
    }
}
