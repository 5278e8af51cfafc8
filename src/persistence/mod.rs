//! Key-value persistence backends
//!
//! High scores and settings go through the `ScoreStore` trait so the game
//! does not care where they live: a JSON file on native, LocalStorage on
//! the web, an in-memory map in tests and headless runs. Write failures
//! are logged and swallowed; losing a save must never take the game down.

use std::collections::HashMap;

/// Minimal persistent string map.
pub trait ScoreStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);

    fn read_int(&self, key: &str) -> Option<u32> {
        self.read(key).and_then(|v| v.parse().ok())
    }

    fn write_int(&mut self, key: &str, value: u32) {
        self.write(key, &value.to_string());
    }
}

/// Volatile backend for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// JSON file backend (native only). The whole map is rewritten on every
/// write; the data is a handful of small values.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileStore {
    path: std::path::PathBuf,
    values: HashMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("corrupt save file {}: {e}", path.display());
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to serialize save data: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            log::warn!("failed to write {}: {e}", self.path.display());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScoreStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

/// Browser LocalStorage backend (wasm32 only).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("LocalStorage write failed for {key}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read_int("best"), None);
        store.write_int("best", 42);
        assert_eq!(store.read_int("best"), Some(42));
    }

    #[test]
    fn non_numeric_value_reads_as_none() {
        let mut store = MemoryStore::new();
        store.write("best", "not a number");
        assert_eq!(store.read_int("best"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_survives_reopen() {
        let path = std::env::temp_dir().join(format!("hovercat-store-{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        {
            let mut store = FileStore::open(&path);
            store.write_int("best", 17);
        }
        let store = FileStore::open(&path);
        assert_eq!(store.read_int("best"), Some(17));

        let _ = std::fs::remove_file(&path);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn corrupt_file_starts_fresh() {
        let path =
            std::env::temp_dir().join(format!("hovercat-corrupt-{}.json", std::process::id()));
        std::fs::write(&path, "{ nope").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.read_int("best"), None);

        let _ = std::fs::remove_file(&path);
    }
}
