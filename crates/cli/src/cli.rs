// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for commands supporting structured output.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "imgsel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Select and prune container images with filter expressions")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Inventory snapshot to read (overrides IMGSEL_INVENTORY and config)
    #[arg(long, global = true, value_name = "path")]
    pub inventory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List images matching filters
    #[command(after_help = format!("{}\n\n{}", help::filters(), colors::examples("\
Examples:
  imgsel images                              List all images
  imgsel images -f dangling=true             List untagged images
  imgsel images -f label=env -f label=ci     Images labelled env OR ci
  imgsel images -f since=alpine:3.19 -q      Names of images newer than alpine:3.19
  imgsel images -f 'reference=acme/*'        Images in the acme namespace")))]
    Images {
        /// Filter images (repeatable, all must hold)
        #[arg(short = 'f', long = "filter", value_name = "filter")]
        filter: Vec<String>,

        /// Only print image names
        #[arg(short, long)]
        quiet: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Remove unused images
    #[command(after_help = format!("{}\n  until=<timestamp>        Created before <timestamp> (prune only)\n\n{}", help::filters(), colors::examples("\
Examples:
  imgsel prune                               Show dangling images that would be removed
  imgsel prune --force                       Remove unused dangling images
  imgsel prune -a --force -f until=24h       Remove unused images older than a day")))]
    Prune {
        /// Consider every unused image, not just dangling ones
        #[arg(short, long)]
        all: bool,

        /// Remove the images instead of listing them
        #[arg(long)]
        force: bool,

        /// Filter images (repeatable, all must hold)
        #[arg(short = 'f', long = "filter", value_name = "filter")]
        filter: Vec<String>,
    },

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  imgsel completion bash > ~/.local/share/bash-completion/completions/imgsel
  imgsel completion zsh > ~/.zfunc/_imgsel
  imgsel completion fish > ~/.config/fish/completions/imgsel.fish"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
