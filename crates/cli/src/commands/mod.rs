// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod images;
pub mod prune;

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::inventory_file::InventoryFile;

/// Helper to locate the inventory snapshot for this invocation.
pub fn inventory_file(config: &Config, flag: Option<PathBuf>) -> Result<InventoryFile> {
    let path = config.inventory_path(flag)?;
    tracing::debug!(path = %path.display(), "using inventory");
    Ok(InventoryFile::new(path))
}
