// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The on-disk inventory snapshot.
//!
//! The snapshot is a single JSON document (see [`Inventory`]). Writers hold
//! an exclusive lock on a sibling `.lock` file and replace the snapshot with
//! a rename, so readers never see a partial write.

use fs2::FileExt;
use imgsel_core::Inventory;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A JSON inventory snapshot at a fixed path.
#[derive(Debug, Clone)]
pub struct InventoryFile {
    path: PathBuf,
}

/// Exclusive write access to an [`InventoryFile`]. Released on drop.
#[derive(Debug)]
pub struct InventoryLock {
    _file: fs::File,
}

impl InventoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InventoryFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the snapshot.
    pub fn load(&self) -> Result<Inventory> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::InventoryNotFound(self.path.display().to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        let inventory: Inventory = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            images = inventory.images.len(),
            containers = inventory.containers.len(),
            "loaded inventory"
        );
        Ok(inventory)
    }

    /// Takes the writer lock without blocking.
    pub fn lock(&self) -> Result<InventoryLock> {
        let file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.lock_path())?;
        file.try_lock_exclusive()
            .map_err(|_| Error::InventoryLocked(self.path.display().to_string()))?;
        Ok(InventoryLock { _file: file })
    }

    /// Replaces the snapshot. Callers must hold the [`InventoryLock`].
    pub fn save(&self, _lock: &InventoryLock, inventory: &Inventory) -> Result<()> {
        let tmp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_vec_pretty(inventory)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        tracing::debug!(path = %self.path.display(), "saved inventory");
        Ok(())
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
#[path = "inventory_file_tests.rs"]
mod tests;
