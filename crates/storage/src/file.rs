//! File-backed key-value store: one file per key under a base directory.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::kv::{KvStore, StoreError};

/// Synchronous file store, one file per key.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Store rooted at an explicit directory (tests, overrides).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the per-user app data directory:
    /// `{app_data_dir}/menucart/`.
    pub fn open_default() -> anyhow::Result<Self> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

        let mut dir = base;
        dir.push("menucart");

        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create storage directory at {:?}", dir))?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| StoreError::Unavailable(format!("{:?}: {e}", self.dir)))?;
        std::fs::write(self.path_for(key), value)
            .map_err(|e| StoreError::Write(format!("{key}: {e}")))
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.path_for(key));
    }
}
