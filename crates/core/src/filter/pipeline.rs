// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential application of filter stages.

use crate::error::Result;
use crate::image::ImageRecord;
use crate::store::ImageStore;

use super::stage::Stage;

/// Apply each stage in order, feeding each the previous stage's output.
///
/// Stages run one after another on the calling thread. The first failing
/// stage aborts the run: its error is returned and no partial list is. An
/// empty stage list returns `images` unchanged.
pub fn apply_filters<S: ImageStore + ?Sized>(
    images: Vec<ImageRecord>,
    store: &S,
    stages: &[Stage],
) -> Result<Vec<ImageRecord>> {
    let mut filtered = images;
    for stage in stages {
        let before = filtered.len();
        filtered = stage.apply(filtered, store)?;
        tracing::debug!(
            stage = stage.name(),
            before,
            after = filtered.len(),
            "applied filter stage"
        );
    }
    Ok(filtered)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
