// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter clause and filter set types.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::reference::canonicalize;

/// Which side of the time window a reference bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKind {
    /// `before=<image>`: upper bound.
    Before,
    /// `since=<image>`: lower bound.
    Since,
}

/// An image reference used as a time bound, as typed and in canonical form.
///
/// The store may have recorded the image under either spelling, so both are
/// kept. `canonical` is `None` when the raw text is not a valid reference;
/// that only becomes an error once the bound is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReference {
    pub raw: String,
    pub canonical: Option<String>,
}

impl TimeReference {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let canonical = canonicalize(&raw).ok();
        TimeReference { raw, canonical }
    }

    /// Store queries matching this reference by exact name, canonical first.
    ///
    /// # Errors
    ///
    /// [`Error::ReferenceResolution`] if the raw text is not a reference.
    pub fn queries(&self) -> Result<Vec<String>> {
        let canonical = self
            .canonical
            .as_ref()
            .ok_or_else(|| Error::ReferenceResolution {
                reference: self.raw.clone(),
                reason: "not a valid image reference".to_string(),
            })?;

        let mut queries = vec![format!("name=={canonical}")];
        if *canonical != self.raw {
            queries.push(format!("name=={}", self.raw));
        }
        Ok(queries)
    }
}

/// A single parsed filter instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// `before=<image>` or `since=<image>`.
    Time {
        kind: TimeKind,
        reference: TimeReference,
    },
    /// `label=<key>` (value `None`) or `label=<key>=<value>`.
    Label { key: String, value: Option<String> },
    /// `reference=<pattern>`.
    Reference(String),
    /// `dangling=true|false`.
    Dangling(bool),
}

/// All clauses of one invocation, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    /// Upper-bound references, in input order.
    pub before: Vec<TimeReference>,
    /// Lower-bound references, in input order.
    pub since: Vec<TimeReference>,
    /// Requested labels. An empty value means "key present, any value".
    pub labels: BTreeMap<String, String>,
    /// Reference patterns, in input order.
    pub references: Vec<String>,
    /// `None` means no constraint.
    pub dangling: Option<bool>,
}

impl FilterSet {
    /// Fold a clause into the set.
    ///
    /// Time and reference clauses accumulate; labels overwrite per key; the
    /// dangling flag is last-write-wins.
    pub fn push(&mut self, clause: FilterClause) {
        match clause {
            FilterClause::Time {
                kind: TimeKind::Before,
                reference,
            } => self.before.push(reference),
            FilterClause::Time {
                kind: TimeKind::Since,
                reference,
            } => self.since.push(reference),
            FilterClause::Label { key, value } => {
                self.labels.insert(key, value.unwrap_or_default());
            }
            FilterClause::Reference(pattern) => self.references.push(pattern),
            FilterClause::Dangling(dangling) => self.dangling = Some(dangling),
        }
    }

    /// True when no clause constrains the selection.
    pub fn is_empty(&self) -> bool {
        self.before.is_empty()
            && self.since.is_empty()
            && self.labels.is_empty()
            && self.references.is_empty()
            && self.dangling.is_none()
    }
}
