// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup for the binary.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::env;

/// Level used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter directive: `RUST_LOG`, then the configured level, then
/// [`DEFAULT_LEVEL`].
pub fn directive(rust_log: Option<String>, configured: Option<&str>) -> String {
    rust_log
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Install the global subscriber, logging to stderr.
///
/// An unparsable directive falls back to [`DEFAULT_LEVEL`]. Calling this
/// twice is a no-op.
pub fn init(configured: Option<&str>) {
    let directive = directive(env::rust_log(), configured);
    let (filter, invalid) = match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new(DEFAULT_LEVEL), true),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .is_ok();

    if installed && invalid {
        tracing::warn!(%directive, "invalid log filter, using {DEFAULT_LEVEL}");
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
