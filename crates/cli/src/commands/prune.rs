// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use imgsel_core::{prune, ImageRecord, Inventory, PruneOptions, PruneReport, Selector};

use crate::config::PruneConfig;
use crate::display::format_names;
use crate::error::Result;
use crate::inventory_file::InventoryFile;

const NOTHING_TO_PRUNE: &str = "No images to remove\n";

/// Show or remove prunable images.
///
/// Without `force` this is a dry run over the current snapshot. With `force`
/// the snapshot is reloaded under the writer lock, pruned, and rewritten.
pub fn run(
    file: &InventoryFile,
    defaults: &PruneConfig,
    all: bool,
    force: bool,
    filters: Vec<String>,
) -> Result<()> {
    if !force {
        let inventory = file.load()?;
        let options = options(defaults, all, filters, &inventory);
        let selected =
            Selector::new(&inventory).select_prunable(inventory.images.clone(), &options)?;
        print!("{}", render_dry_run(&selected));
        return Ok(());
    }

    let lock = file.lock()?;
    let mut inventory = file.load()?;
    let options = options(defaults, all, filters, &inventory);
    let images = inventory.images.clone();
    let report = prune(&mut inventory, images, &options, Utc::now())?;
    if !report.removed.is_empty() {
        file.save(&lock, &inventory)?;
    }
    print!("{}", render_report(&report));
    Ok(())
}

/// Merge configured defaults with command line flags.
///
/// Configured filters come first; `all` is set by either source.
pub(crate) fn options(
    defaults: &PruneConfig,
    all: bool,
    filters: Vec<String>,
    inventory: &Inventory,
) -> PruneOptions {
    PruneOptions {
        all: all || defaults.all,
        filters: defaults.filters.iter().cloned().chain(filters).collect(),
        in_use: inventory.in_use(),
    }
}

pub(crate) fn render_dry_run(selected: &[ImageRecord]) -> String {
    if selected.is_empty() {
        return NOTHING_TO_PRUNE.to_string();
    }
    format!(
        "Would remove:\n{}\nRun with --force to remove {} image(s).\n",
        format_names(selected),
        selected.len()
    )
}

pub(crate) fn render_report(report: &PruneReport) -> String {
    if report.removed.is_empty() {
        return NOTHING_TO_PRUNE.to_string();
    }
    let mut out = String::from("Deleted Images:\n");
    for name in &report.removed {
        out.push_str(name);
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "prune_tests.rs"]
mod tests;
