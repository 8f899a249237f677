//! Key/value blob storage for persisted app state.
//!
//! Two backends:
//! - [`MemoryStore`] for tests and embedding
//! - [`FileStore`], one JSON file per key in a directory

use grocer_core::error::{Error, ErrorCode, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Storage for serialized state blobs.
pub trait BlobStore {
    /// The blob stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `blob` under `key`, replacing what was there.
    fn save(&self, key: &str, blob: &str) -> Result<()>;

    /// Forget `key`. Returns whether anything was stored.
    fn remove(&self, key: &str) -> Result<bool>;
}

/// In-memory blob store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> Error {
    Error::new(ErrorCode::Internal, "Failed to acquire storage lock")
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let guard = self.blobs.read().map_err(|_| poisoned())?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        let mut guard = self.blobs.write().map_err(|_| poisoned())?;
        guard.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut guard = self.blobs.write().map_err(|_| poisoned())?;
        Ok(guard.remove(key).is_some())
    }
}

/// Directory-backed blob store: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store in `dir`, creating the directory when needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            Error::from(e).with_context(format!("creating state directory {}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(Error::storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl BlobStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        let path = self.path_for(key)?;
        // replace atomically
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), bytes = blob.len(), "State saved");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }
}
