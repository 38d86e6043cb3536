//! Key-value persistence store with file locking.
//!
//! Each key maps to one JSON file under the store's data directory and
//! holds a full snapshot of one persisted structure (ledger, templates,
//! draft, calorie log). Every mutation is followed by a full-structure
//! overwrite; there is no partial-write state. A missing or unparseable
//! file yields the type's default, logged at warn, never a user-visible
//! error.

use crate::{Error, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Well-known store keys
pub const KEY_LEDGER: &str = "ledger";
pub const KEY_TEMPLATES: &str = "templates";
pub const KEY_DRAFT: &str = "draft";
pub const KEY_CALORIE_LOG: &str = "calorie_log";

/// A scoped key-value store over a data directory
#[derive(Clone, Debug)]
pub struct KvStore {
    data_dir: PathBuf,
}

impl KvStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the JSON file backing a key
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Load the value for `key` with shared locking
    ///
    /// Returns the default value if the file doesn't exist. If the file is
    /// unreadable or corrupted, logs a warning and returns the default;
    /// malformed data is replaced on the next save, never repaired.
    pub fn load<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path_for(key);
        if !path.exists() {
            tracing::info!("No snapshot for key '{}', using default", key);
            return T::default();
        }

        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("Unable to open {:?}: {}. Using default.", path, e);
                return T::default();
            }
        };

        // Acquire shared lock for reading
        if let Err(e) = file.lock_shared() {
            tracing::warn!("Unable to lock {:?}: {}. Using default.", path, e);
            return T::default();
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!("Failed to read {:?}: {}. Using default.", path, e);
            return T::default();
        }

        let _ = file.unlock();

        match serde_json::from_str::<T>(&contents) {
            Ok(value) => {
                tracing::debug!("Loaded snapshot for key '{}'", key);
                value
            }
            Err(e) => {
                tracing::warn!("Failed to parse {:?}: {}. Using default.", path, e);
                T::default()
            }
        }
    }

    /// Save the value for `key` with exclusive locking
    ///
    /// Atomically writes the snapshot by:
    /// 1. Writing to a temp file in the same directory
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let path = self.path_for(key);
        std::fs::create_dir_all(&self.data_dir)?;

        let temp = NamedTempFile::new_in(&self.data_dir)?;

        // Exclusive lock on the temp file to serialize concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(value)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        // Atomically replace the old snapshot
        temp.persist(&path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved snapshot for key '{}' to {:?}", key, path);
        Ok(())
    }

    /// Load a value, modify it, and save it back
    ///
    /// Convenience for the load-modify-save pattern every mutation uses.
    pub fn update<T, F>(&self, key: &str, f: F) -> Result<T>
    where
        T: DeserializeOwned + Default + Serialize,
        F: FnOnce(&mut T) -> Result<()>,
    {
        let mut value: T = self.load(key);
        f(&mut value)?;
        self.save(key, &value)?;
        Ok(value)
    }
}
