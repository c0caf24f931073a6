//! JSON file standing in for the watch's persistent storage.
//!
//! Slots live in memory and are written back by [`FileStore::flush`], so a
//! failed write surfaces as an error in the run loop instead of vanishing
//! inside the fire-and-forget [`PersistentStore`] interface.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use watchface_common::PersistentStore;

#[derive(Serialize, Deserialize, Default, Debug)]
struct StoreFile {
    #[serde(default)]
    slots: BTreeMap<u32, i32>,
}

pub struct FileStore {
    path: PathBuf,
    data: StoreFile,
    dirty: bool,
}

impl FileStore {
    /// Open `path`, starting empty if it does not exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        let data = if path.exists() {
            let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?
        } else {
            StoreFile::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            data,
            dirty: false,
        })
    }

    /// Write pending changes to disk.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))?;
        self.dirty = false;
        Ok(())
    }

    #[inline]
    pub fn path(&self) -> &Path { &self.path }
}

impl PersistentStore for FileStore {
    fn read_int(
        &self,
        key: u32,
    ) -> Option<i32> {
        self.data.slots.get(&key).copied()
    }

    fn write_int(
        &mut self,
        key: u32,
        value: i32,
    ) {
        self.data.slots.insert(key, value);
        self.dirty = true;
    }
}
