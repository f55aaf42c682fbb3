// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selection entry points for list and prune.
//!
//! [`Selector`] drives parse → compile → apply over an inventory snapshot.
//! It only talks to the store through [`ImageStore`]; [`prune`] is the one
//! place a finished selection is handed to an [`ImageRemover`].

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use crate::error::Result;
use crate::filter::{apply_filters, parse_filters, Stage};
use crate::image::ImageRecord;
use crate::store::{ImageRemover, ImageStore};

const UNTIL_KEY: &str = "until";

/// What a prune run should consider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneOptions {
    /// Consider every unused image, not just dangling ones.
    pub all: bool,
    /// Raw filter strings; `until=<timestamp>` is accepted here in addition
    /// to the list grammar.
    pub filters: Vec<String>,
    /// Image names referenced by containers. These are never selected.
    pub in_use: BTreeSet<String>,
}

/// Outcome of a prune run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Names of removed images, in selection order.
    pub removed: Vec<String>,
}

/// Selects images from a snapshot using filter strings.
pub struct Selector<'s, S: ?Sized> {
    store: &'s S,
    now: DateTime<Utc>,
}

impl<'s, S: ImageStore + ?Sized> Selector<'s, S> {
    /// Creates a selector reading from `store`, with "now" taken from the clock.
    pub fn new(store: &'s S) -> Self {
        Selector {
            store,
            now: Utc::now(),
        }
    }

    /// Pin "now": the default `before` bound and the base of `until` durations.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Select the images of `images` matching every filter.
    ///
    /// No filters returns `images` unchanged. Any failure aborts the whole
    /// selection.
    pub fn select<F: AsRef<str>>(
        &self,
        images: Vec<ImageRecord>,
        filters: &[F],
    ) -> Result<Vec<ImageRecord>> {
        let set = parse_filters(filters)?;
        let stages = set.compile(self.store, self.now)?;
        apply_filters(images, self.store, &stages)
    }

    /// Build the prune stages: time range, until, label, reference,
    /// dangling, unused, then dangling-images unless `all` is set.
    pub fn prune_stages(&self, options: &PruneOptions) -> Result<Vec<Stage>> {
        let mut until = Vec::new();
        let mut rest = Vec::new();
        for filter in &options.filters {
            match filter.split_once('=') {
                Some((UNTIL_KEY, value)) => until.push(Stage::until(value, self.now)?),
                _ => rest.push(filter.as_str()),
            }
        }

        let set = parse_filters(&rest)?;
        let (time, others): (Vec<Stage>, Vec<Stage>) = set
            .compile(self.store, self.now)?
            .into_iter()
            .partition(|stage| matches!(stage, Stage::CreatedBetween { .. }));

        let mut stages = time;
        stages.extend(until);
        stages.extend(others);
        stages.push(Stage::Unused(options.in_use.clone()));
        if !options.all {
            stages.push(Stage::dangling_images());
        }
        Ok(stages)
    }

    /// Select the images a prune with `options` would remove.
    pub fn select_prunable(
        &self,
        images: Vec<ImageRecord>,
        options: &PruneOptions,
    ) -> Result<Vec<ImageRecord>> {
        let stages = self.prune_stages(options)?;
        apply_filters(images, self.store, &stages)
    }
}

/// Select prunable images from `images` and remove them through `store`.
///
/// Nothing is removed unless selection succeeds in full.
pub fn prune<S: ImageStore + ImageRemover>(
    store: &mut S,
    images: Vec<ImageRecord>,
    options: &PruneOptions,
    now: DateTime<Utc>,
) -> Result<PruneReport> {
    let selected = Selector::new(&*store)
        .at(now)
        .select_prunable(images, options)?;
    if selected.is_empty() {
        return Ok(PruneReport::default());
    }

    let removed = store.remove(&selected)?;
    tracing::info!(count = removed.len(), all = options.all, "pruned images");
    Ok(PruneReport { removed })
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
