// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the imgsel CLI.
///
/// Engine failures are wrapped as-is so their hints reach the user.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] imgsel_core::Error),

    #[error("inventory not found: {0}\n  hint: pass --inventory <path> or set IMGSEL_INVENTORY")]
    InventoryNotFound(String),

    #[error("inventory is locked: {0}\n  hint: another prune is running against this inventory")]
    InventoryLocked(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for imgsel CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
