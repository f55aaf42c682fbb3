// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation of filter sets into stages, and stage evaluation.

use chrono::{DateTime, Utc};
use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::image::ImageRecord;
use crate::reference::AnyReference;
use crate::store::ImageStore;
use crate::timestamp::parse_until;

use super::clause::{FilterSet, TimeKind, TimeReference};

/// One step of a filter pipeline: narrows an image list.
///
/// Stages hold only resolved values (timestamps, patterns, label maps).
/// [`Stage::Labels`] is the exception that reads from the store while it
/// runs, once per candidate image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Keep images created strictly between `after` and `before`.
    CreatedBetween {
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    },
    /// Keep images created strictly before the instant (`until=`).
    CreatedBefore(DateTime<Utc>),
    /// Keep images whose config carries ANY of the labels. An empty value
    /// accepts any value for that key.
    Labels(BTreeMap<String, String>),
    /// Keep images whose name matches EVERY pattern.
    References(Vec<String>),
    /// `true` keeps untagged images only, `false` tagged images only.
    Dangling(bool),
    /// Keep images not named in the in-use set.
    Unused(BTreeSet<String>),
}

impl Stage {
    /// Untagged images only.
    pub fn dangling_images() -> Self {
        Stage::Dangling(true)
    }

    /// Tagged images only.
    pub fn tagged_images() -> Self {
        Stage::Dangling(false)
    }

    /// Images created before an `until=` timestamp.
    pub fn until(value: &str, now: DateTime<Utc>) -> Result<Self> {
        parse_until(value, now).map(Stage::CreatedBefore)
    }

    /// Short stage name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::CreatedBetween { .. } => "created-between",
            Stage::CreatedBefore(_) => "until",
            Stage::Labels(_) => "label",
            Stage::References(_) => "reference",
            Stage::Dangling(_) => "dangling",
            Stage::Unused(_) => "unused",
        }
    }

    /// Run this stage over `images`, preserving their order.
    ///
    /// # Errors
    ///
    /// [`Error::LabelRead`] if a label lookup fails, [`Error::PatternCompile`]
    /// if a reference pattern is invalid.
    pub fn apply<S: ImageStore + ?Sized>(
        &self,
        images: Vec<ImageRecord>,
        store: &S,
    ) -> Result<Vec<ImageRecord>> {
        match self {
            Stage::CreatedBetween { after, before } => Ok(images
                .into_iter()
                .filter(|image| created_between(image, *after, *before))
                .collect()),
            Stage::CreatedBefore(until) => Ok(images
                .into_iter()
                .filter(|image| image.created_at < *until)
                .collect()),
            Stage::Labels(wanted) => {
                let mut kept = Vec::new();
                for image in images {
                    let labels = read_labels(store, &image)?;
                    if matches_any_label(&labels, wanted) {
                        kept.push(image);
                    }
                }
                Ok(kept)
            }
            Stage::References(patterns) => {
                let matchers = patterns
                    .iter()
                    .map(|p| PatternMatcher::new(p))
                    .collect::<Result<Vec<_>>>()?;
                Ok(images
                    .into_iter()
                    .filter(|image| matches_references(image, &matchers))
                    .collect())
            }
            Stage::Dangling(dangling) => Ok(images
                .into_iter()
                .filter(|image| image.is_dangling() == *dangling)
                .collect()),
            Stage::Unused(in_use) => Ok(images
                .into_iter()
                .filter(|image| !in_use.contains(&image.name))
                .collect()),
        }
    }
}

impl FilterSet {
    /// Compile into stages, in evaluation order: time range, label,
    /// reference, dangling.
    ///
    /// `before`/`since` references are resolved against the store here, so
    /// the returned stages carry concrete timestamps. Kinds without clauses
    /// produce no stage.
    ///
    /// # Errors
    ///
    /// [`Error::ReferenceResolution`] if a time reference is not a valid
    /// reference or matches no image.
    pub fn compile<S: ImageStore + ?Sized>(
        &self,
        store: &S,
        now: DateTime<Utc>,
    ) -> Result<Vec<Stage>> {
        let mut stages = Vec::new();

        if !self.before.is_empty() || !self.since.is_empty() {
            let before = if self.before.is_empty() {
                now
            } else {
                resolve_bound(store, &self.before, TimeKind::Before)?
            };
            let after = if self.since.is_empty() {
                DateTime::UNIX_EPOCH
            } else {
                resolve_bound(store, &self.since, TimeKind::Since)?
            };
            tracing::debug!(%after, %before, "compiled creation window");
            stages.push(Stage::CreatedBetween { after, before });
        }
        if !self.labels.is_empty() {
            stages.push(Stage::Labels(self.labels.clone()));
        }
        if !self.references.is_empty() {
            stages.push(Stage::References(self.references.clone()));
        }
        if let Some(dangling) = self.dangling {
            stages.push(Stage::Dangling(dangling));
        }

        Ok(stages)
    }
}

/// Resolve time references to a single bound: the newest creation time for
/// `before`, the oldest for `since`. Every reference must match an image.
fn resolve_bound<S: ImageStore + ?Sized>(
    store: &S,
    references: &[TimeReference],
    kind: TimeKind,
) -> Result<DateTime<Utc>> {
    let mut bound: Option<DateTime<Utc>> = None;

    for reference in references {
        let queries = reference.queries()?;
        let images = store
            .resolve(&queries)
            .map_err(|e| Error::ReferenceResolution {
                reference: reference.raw.clone(),
                reason: e.to_string(),
            })?;
        if images.is_empty() {
            return Err(Error::ReferenceResolution {
                reference: reference.raw.clone(),
                reason: "no such image".to_string(),
            });
        }

        for image in &images {
            bound = Some(match (bound, kind) {
                (None, _) => image.created_at,
                (Some(t), TimeKind::Before) => t.max(image.created_at),
                (Some(t), TimeKind::Since) => t.min(image.created_at),
            });
        }
        tracing::debug!(reference = %reference.raw, matches = images.len(), "resolved time reference");
    }

    bound.ok_or_else(|| Error::ReferenceResolution {
        reference: String::new(),
        reason: "no references given".to_string(),
    })
}

fn read_labels<S: ImageStore + ?Sized>(
    store: &S,
    image: &ImageRecord,
) -> Result<BTreeMap<String, String>> {
    store.read_labels(image).map_err(|e| match e {
        Error::LabelRead { .. } => e,
        other => Error::LabelRead {
            image: image.name.clone(),
            reason: other.to_string(),
        },
    })
}

/// Both bounds are exclusive.
fn created_between(image: &ImageRecord, after: DateTime<Utc>, before: DateTime<Utc>) -> bool {
    after < image.created_at && image.created_at < before
}

fn matches_any_label(image_labels: &BTreeMap<String, String>, wanted: &BTreeMap<String, String>) -> bool {
    wanted.iter().any(|(key, value)| {
        image_labels
            .get(key)
            .is_some_and(|actual| value.is_empty() || actual == value)
    })
}

/// A `reference=` pattern, matched either as a glob on the familiar name or
/// as a regex on the raw name.
struct PatternMatcher {
    glob: GlobMatcher,
    regex: Regex,
}

impl PatternMatcher {
    fn new(pattern: &str) -> Result<Self> {
        let compile_err = |reason: String| Error::PatternCompile {
            pattern: pattern.to_string(),
            reason,
        };
        let glob = GlobBuilder::new(&literal_braces(pattern))
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|e| compile_err(e.to_string()))?
            .compile_matcher();
        let regex = Regex::new(pattern).map_err(|e| compile_err(e.to_string()))?;
        Ok(PatternMatcher { glob, regex })
    }

    fn matches(&self, name: &str, familiar: Option<&(String, Option<String>)>) -> bool {
        let familiar_match = familiar.is_some_and(|(string, short_name)| {
            self.glob.is_match(string)
                || short_name.as_ref().is_some_and(|n| self.glob.is_match(n))
        });
        familiar_match || self.regex.is_match(name)
    }
}

/// Escape `{` and `}` outside character classes so they match literally.
/// Familiar-name globs have no alternation groups.
fn literal_braces(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    let mut in_class = false;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
                // A leading `]` (after an optional negation) is a class member.
                let mut rest = chars.clone().peekable();
                if let Some(&neg @ ('!' | '^')) = rest.peek() {
                    out.push(neg);
                    chars.next();
                    rest.next();
                }
                if rest.peek() == Some(&']') {
                    out.push(']');
                    chars.next();
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '{' if !in_class => out.push_str("[{]"),
            '}' if !in_class => out.push_str("[}]"),
            _ => out.push(c),
        }
    }
    out
}

fn matches_references(image: &ImageRecord, matchers: &[PatternMatcher]) -> bool {
    // Names that are not references can still match by regex.
    let familiar = AnyReference::parse(&image.name)
        .ok()
        .map(|r| (r.familiar_string(), r.familiar_name()));
    matchers
        .iter()
        .all(|m| m.matches(&image.name, familiar.as_ref()))
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
