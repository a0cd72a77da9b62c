//! Key-value storage backends for the entry journal.
//!
//! The journal only needs string values stored under string keys. The
//! [`KeyValueStorage`] trait captures exactly that, so the entry store can
//! run against a file-backed directory in production and an in-memory map
//! in tests.

use crate::{Error, Result};
use fs2::FileExt;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Minimal string-by-key storage capability
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ============================================================================
// In-memory storage
// ============================================================================

/// HashMap-backed storage, mainly for tests.
///
/// Can be switched to an unavailable state in which every call fails,
/// which mimics a storage medium that refuses access.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail (or succeed again)
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(Error::StorageUnavailable("memory storage disabled".into()));
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check()?;
        self.values.remove(key);
        Ok(())
    }
}

// ============================================================================
// File-backed storage
// ============================================================================

/// Directory-backed storage: each key lives in `<dir>/<key>.json`.
///
/// Reads take a shared lock. Writes go through a locked temp file in the
/// same directory which is synced and then renamed over the target, so a
/// reader never observes a half-written value.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::StorageUnavailable(format!(
                "invalid storage key {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No storage file at {:?}", path);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        FileExt::lock_shared(&file)?;

        let mut bytes = Vec::new();
        let read = std::io::BufReader::new(&file).read_to_end(&mut bytes);
        let _ = FileExt::unlock(&file);
        read?;

        // Invalid UTF-8 is malformed content, not a storage failure
        let contents = match String::from_utf8(bytes) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Storage file {:?} is not valid UTF-8: {}", path, e);
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        tracing::debug!("Read {} bytes from {:?}", contents.len(), path);
        Ok(Some(contents))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        // Temp file in the same directory so the rename stays atomic
        let temp = NamedTempFile::new_in(&self.dir)?;
        FileExt::lock_exclusive(temp.as_file())?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            writer.write_all(value.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        FileExt::unlock(temp.as_file())?;

        temp.persist(&path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed {:?}", path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
