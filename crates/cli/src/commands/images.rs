// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use imgsel_core::{ImageRecord, Selector};

use crate::cli::OutputFormat;
use crate::display::{format_json, format_names, format_table};
use crate::error::Result;
use crate::inventory_file::InventoryFile;

/// List the images matching every filter.
pub fn run(
    file: &InventoryFile,
    filters: &[String],
    quiet: bool,
    output: OutputFormat,
) -> Result<()> {
    let inventory = file.load()?;
    let selected = Selector::new(&inventory).select(inventory.images.clone(), filters)?;
    print!("{}", render(&selected, quiet, output, Utc::now())?);
    Ok(())
}

/// Render a selection; `quiet` prints names only, whatever the format.
pub(crate) fn render(
    images: &[ImageRecord],
    quiet: bool,
    output: OutputFormat,
    now: DateTime<Utc>,
) -> Result<String> {
    if quiet {
        return Ok(format_names(images));
    }
    match output {
        OutputFormat::Text => Ok(format_table(images, now)),
        OutputFormat::Json => Ok(format!("{}\n", format_json(images)?)),
    }
}

#[cfg(test)]
#[path = "images_tests.rs"]
mod tests;
