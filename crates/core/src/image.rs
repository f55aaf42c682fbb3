// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Image inventory records.
//!
//! An [`ImageRecord`] is what the backing store lists. The engine only ever
//! selects subsets of records; it never mutates one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::reference::Reference;

/// A single image as listed by the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Fully qualified reference name (`docker.io/library/alpine:3.19`).
    /// Untagged images carry a sentinel such as `<none>` or an empty name.
    #[serde(default)]
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Store-level labels attached to the record itself. Carried through
    /// listings and snapshots only; `label=` filters match the image
    /// config's labels, never these.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Content-addressed digest of the image configuration blob.
    #[serde(default)]
    pub config: String,
}

impl ImageRecord {
    /// Creates a record with no labels and no config digest.
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        ImageRecord {
            name: name.into(),
            created_at,
            labels: BTreeMap::new(),
            config: String::new(),
        }
    }

    /// Sets the config digest.
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = config.into();
        self
    }

    /// Returns the repository and tag of this image's name.
    ///
    /// Names that do not parse as a reference yield `("", "")`. A parsed
    /// name without an explicit tag or digest gets the implicit `latest`
    /// tag; a digest-only name has an empty tag.
    pub fn repo_tag(&self) -> (String, String) {
        match Reference::parse_docker(&self.name) {
            Ok(reference) => (
                reference.familiar_name(),
                reference.tag.unwrap_or_default(),
            ),
            Err(_) => (String::new(), String::new()),
        }
    }

    /// An image is dangling when its name has no tag component.
    pub fn is_dangling(&self) -> bool {
        self.repo_tag().1.is_empty()
    }
}

/// The parts of an image configuration blob the engine looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

/// A container that keeps an image in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    /// Name of the image the container was created from.
    pub image: String,
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
