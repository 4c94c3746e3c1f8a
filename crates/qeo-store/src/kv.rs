//! Key-value storage collaborators.
//!
//! The browser original kept its record in `localStorage`; these are the
//! equivalent stores for a native process. The card store is generic over
//! [`KeyValueStore`], so tests run against [`MemoryStore`] and the
//! application against [`FsStore`].

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreResult;

/// Minimal get/set storage.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, if any.
    ///
    /// ## Errors
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// ## Errors
    /// Returns an error if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the value under `key`. Removing a missing key succeeds.
    ///
    /// ## Errors
    /// Returns an error if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Filesystem store: one `<key>.json` file per key under a data directory.
#[derive(Debug)]
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// ## Errors
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FsStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        std::fs::write(&path, value)?;
        tracing::debug!(key, path = %path.display(), "value stored");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
