// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

//! Keyed string storage.
//!
//! [`BlobStore`] is the thin persistence seam the board is saved through. It
//! mirrors a browser-style key/value storage: opaque string values under
//! string keys. [`MemoryStore`] backs tests and ephemeral sessions,
//! [`FileStore`] maps each key to a JSON file under a root directory with
//! atomic replacement on write.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        key: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "storage io error at {}: {source}", path.display())
            }
            StoreError::Json { key, source } => {
                write!(f, "invalid json under key {key:?}: {source}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Json { source, .. } => Some(source),
        }
    }
}

/// Opaque keyed string storage.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store mapping each key to `<root>/<key>.json`.
///
/// Writes go through a temp file in the same directory followed by a rename,
/// so readers never observe a partially written value.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or_default();
        self.root.join(format!(".caseboard.tmp.{key}.{nanos}"))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io { path, source: err }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|err| StoreError::Io {
            path: self.root.clone(),
            source: err,
        })?;
        let temp = self.temp_path(key);
        fs::write(&temp, value).map_err(|err| StoreError::Io {
            path: temp.clone(),
            source: err,
        })?;
        let path = self.key_path(key);
        fs::rename(&temp, &path).map_err(|err| {
            let _ = fs::remove_file(&temp);
            StoreError::Io { path, source: err }
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io { path, source: err }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    struct TempDir {
        path: PathBuf,
    }

    impl TempDir {
        fn new(tag: &str) -> Self {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock after epoch")
                .as_nanos();
            let path = std::env::temp_dir().join(format!("caseboard-{tag}-{nanos}"));
            fs::create_dir_all(&path).expect("create temp dir");
            Self { path }
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new("blob")
    }

    #[rstest]
    fn file_store_get_of_missing_key_is_none(temp_dir: TempDir) {
        let store = FileStore::new(&temp_dir.path);
        assert_eq!(store.get("absent").expect("get"), None);
    }

    #[rstest]
    fn file_store_round_trips_a_value(temp_dir: TempDir) {
        let mut store = FileStore::new(&temp_dir.path);
        store.set("board", "{\"nodes\":[]}").expect("set");
        assert_eq!(
            store.get("board").expect("get").as_deref(),
            Some("{\"nodes\":[]}")
        );
        assert!(temp_dir.path.join("board.json").is_file());
    }

    #[rstest]
    fn file_store_set_overwrites_and_leaves_no_temp_files(temp_dir: TempDir) {
        let mut store = FileStore::new(&temp_dir.path);
        store.set("board", "one").expect("set");
        store.set("board", "two").expect("set again");

        assert_eq!(store.get("board").expect("get").as_deref(), Some("two"));
        let leftovers: Vec<_> = fs::read_dir(&temp_dir.path)
            .expect("read dir")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with('.'))
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
    }

    #[rstest]
    fn file_store_remove_is_idempotent(temp_dir: TempDir) {
        let mut store = FileStore::new(&temp_dir.path);
        store.set("board", "value").expect("set");
        store.remove("board").expect("remove");
        store.remove("board").expect("remove again");
        assert_eq!(store.get("board").expect("get"), None);
    }

    #[rstest]
    fn file_store_creates_the_root_on_first_write(temp_dir: TempDir) {
        let nested = temp_dir.path.join("deep").join("er");
        let mut store = FileStore::new(&nested);
        store.set("board", "value").expect("set");
        assert_eq!(store.get("board").expect("get").as_deref(), Some("value"));
    }

    #[test]
    fn memory_store_round_trips_and_removes() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").expect("get"), None);
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k").expect("get").as_deref(), Some("v"));
        store.remove("k").expect("remove");
        assert!(store.is_empty());
    }
}
