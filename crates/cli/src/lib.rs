// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! imgsel - select and prune container images with filter expressions.
//!
//! This crate is the command line front end over [`imgsel_core`]. It reads
//! an inventory snapshot (JSON), applies `images`/`prune` filters, and for
//! `prune --force` rewrites the snapshot without the removed images.
//!
//! # Main Components
//!
//! - [`Config`] - User configuration (`config.toml`)
//! - [`InventoryFile`] - The on-disk snapshot, with locking for writers
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use imgsel::{Cli, Config};
//!
//! let config = Config::load()?;
//! imgsel::run(Cli::parse(), &config)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
pub mod logging;

pub mod config;
pub mod env;
pub mod error;
pub mod inventory_file;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{Config, PruneConfig};
pub use error::{Error, Result};
pub use inventory_file::InventoryFile;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Command::Images {
            filter,
            quiet,
            output,
        } => {
            let file = commands::inventory_file(config, cli.inventory)?;
            commands::images::run(&file, &filter, quiet, config.output_format(output))
        }
        Command::Prune { all, force, filter } => {
            let file = commands::inventory_file(config, cli.inventory)?;
            commands::prune::run(&file, &config.prune, all, force, filter)
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "imgsel", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
