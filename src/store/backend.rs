//! Key/value backends for document storage
//!
//! Provides a unified interface over a file-backed store and an in-memory
//! store using enum dispatch.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Storage backend enum supporting multiple implementations
#[derive(Debug)]
pub enum StorageBackend {
    /// One JSON file per key in a data directory
    File(FileStore),
    /// Process-local map, nothing survives the process
    Memory(MemoryStore),
}

impl StorageBackend {
    /// Open (creating if needed) a file store rooted at `dir`
    pub fn open_file<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Ok(Self::File(FileStore::open(dir)?))
    }

    /// Create an empty in-memory store for testing
    pub fn in_memory() -> Self {
        Self::Memory(MemoryStore::default())
    }

    /// Read the document stored under `key`, if any
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::File(store) => store.get(key),
            Self::Memory(store) => Ok(store.get(key)),
        }
    }

    /// Replace the document stored under `key`
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::File(store) => store.set(key, value),
            Self::Memory(store) => {
                store.set(key, value);
                Ok(())
            }
        }
    }

    /// Get backend name for debugging/logging
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Memory(_) => "memory",
        }
    }
}

/// File-backed key/value store: `{dir}/{key}.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let path = paths::key_file(&self.dir, key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(contents))
    }

    /// Write to a sibling temp file, then rename over the target so readers
    /// only ever see the old or the new document.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = paths::key_file(&self.dir, key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));

        fs::write(&tmp, value).with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }
}

/// In-memory key/value store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
