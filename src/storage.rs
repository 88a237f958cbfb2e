//! Key-value persistence for player statistics.
//!
//! Values are stored as strings under string keys, the way a browser's local
//! storage would hold them. Two backends:
//!
//! - [`MemoryStore`]: in-process map, for tests and throwaway sessions.
//! - [`FileStore`]: a single JSON object on disk, rewritten on every save.
//!   Last write wins; there is no locking or versioning.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed stats file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Read/write string values by key.
pub trait StatsStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: StatsStore + ?Sized> StatsStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

// ── In-memory ──

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl StatsStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ── JSON file ──

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole object; a missing file is an empty object.
    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::Unavailable(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
        }
    }
}

impl StatsStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.read_all()?;
        Ok(map.get(key).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    /// A file that is not a JSON object is replaced by a fresh one holding
    /// only this key; I/O errors still fail the save.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = match self.read_all() {
            Ok(map) => map,
            Err(StoreError::Io(e)) => return Err(e.into()),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Replacing unreadable stats file"
                );
                Map::new()
            }
        };
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(map))?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "guesser_storage_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_memory_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);
        store.save("k", "12").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("12"));
        assert_eq!(store.get("k"), Some("12"));
    }

    #[test]
    fn test_file_missing_is_empty() {
        let store = FileStore::new(temp_path("missing_xyz"));
        let _ = fs::remove_file(store.path());
        assert_eq!(store.load("guesser_streak").unwrap(), None);
    }

    #[test]
    fn test_file_save_and_reload() {
        let path = temp_path("save");
        let _ = fs::remove_file(&path);

        let mut store = FileStore::new(&path);
        store.save("guesser_streak", "4").unwrap();
        store.save("guesser_best_score", "5300").unwrap();
        store.save("guesser_streak", "5").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load("guesser_streak").unwrap().as_deref(), Some("5"));
        assert_eq!(
            reopened.load("guesser_best_score").unwrap().as_deref(),
            Some("5300")
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_creates_parent_dir() {
        let dir = std::env::temp_dir().join(format!("guesser_storage_dir_{}", std::process::id()));
        let path = dir.join("nested").join("stats.json");
        let _ = fs::remove_dir_all(&dir);

        let mut store = FileStore::new(&path);
        store.save("guesser_total_correct", "1").unwrap();
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_numeric_json_values() {
        let path = temp_path("numeric");
        fs::write(&path, r#"{"guesser_streak": 7, "other": "x"}"#).unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.load("guesser_streak").unwrap().as_deref(), Some("7"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_malformed() {
        let path = temp_path("malformed");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(store.load("k"), Err(StoreError::Json(_))));

        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(store.load("k"), Err(StoreError::Unavailable(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_malformed_is_replaced_on_save() {
        let path = temp_path("replaced");
        fs::write(&path, "not json").unwrap();
        let mut store = FileStore::new(&path);
        store.save("guesser_streak", "2").unwrap();
        assert_eq!(store.load("guesser_streak").unwrap().as_deref(), Some("2"));

        fs::write(&path, "[1, 2]").unwrap();
        store.save("guesser_best_score", "40").unwrap();
        assert_eq!(store.load("guesser_best_score").unwrap().as_deref(), Some("40"));
        assert_eq!(store.load("guesser_streak").unwrap(), None);
        let _ = fs::remove_file(&path);
    }
}
