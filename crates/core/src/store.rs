// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory access.
//!
//! The engine reads the image store through [`ImageStore`] and hands prune
//! selections to an [`ImageRemover`]. [`Inventory`] is an in-memory snapshot
//! implementing both; it is also the on-disk JSON snapshot format.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::image::{Container, ImageConfig, ImageRecord};
use crate::reference::canonicalize;

/// Read access to an image store.
///
/// Implementations surface their own failures synchronously; callers never
/// retry.
pub trait ImageStore {
    /// List the images matching any of the query expressions, in store order.
    ///
    /// Must support at least exact name equality (`name==<value>`).
    fn resolve(&self, queries: &[String]) -> Result<Vec<ImageRecord>>;

    /// Read the labels of an image's configuration blob.
    ///
    /// This is a store round-trip per image.
    fn read_labels(&self, image: &ImageRecord) -> Result<BTreeMap<String, String>>;
}

/// Destructive side of the store, used once a prune selection is final.
pub trait ImageRemover {
    /// Remove the given images and return the names removed, in order.
    fn remove(&mut self, images: &[ImageRecord]) -> Result<Vec<String>>;
}

/// A parsed store query expression.
#[derive(Debug, Clone)]
pub enum Query {
    /// `name==<value>`
    NameEq(String),
    /// `name!=<value>`
    NameNe(String),
    /// `name~=<regex>`
    NameMatches(Regex),
}

impl Query {
    /// Parse a `field<op>value` expression. Only the `name` field is known.
    pub fn parse(expr: &str) -> Result<Self> {
        let (idx, op) = ["==", "!=", "~="]
            .iter()
            .filter_map(|op| expr.find(op).map(|idx| (idx, *op)))
            .min_by_key(|(idx, _)| *idx)
            .ok_or_else(|| Error::InvalidQuery(format!("missing operator in '{expr}'")))?;

        let field = expr[..idx].trim();
        let value = &expr[idx + op.len()..];
        if field != "name" {
            return Err(Error::InvalidQuery(format!(
                "unknown field '{field}' in '{expr}'"
            )));
        }

        match op {
            "==" => Ok(Query::NameEq(value.to_string())),
            "!=" => Ok(Query::NameNe(value.to_string())),
            _ => Regex::new(value)
                .map(Query::NameMatches)
                .map_err(|e| Error::InvalidQuery(format!("'{expr}': {e}"))),
        }
    }

    /// Check whether an image satisfies this query.
    pub fn matches(&self, image: &ImageRecord) -> bool {
        match self {
            Query::NameEq(name) => image.name == *name,
            Query::NameNe(name) => image.name != *name,
            Query::NameMatches(re) => re.is_match(&image.name),
        }
    }
}

/// In-memory image inventory snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub images: Vec<ImageRecord>,
    /// Configuration blobs keyed by digest.
    #[serde(default)]
    pub configs: BTreeMap<String, ImageConfig>,
    #[serde(default)]
    pub containers: Vec<Container>,
}

impl Inventory {
    /// Names of images kept alive by a container.
    ///
    /// Containers may name their image in short form, so the canonical
    /// spelling is included as well.
    pub fn in_use(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for container in &self.containers {
            names.insert(container.image.clone());
            if let Ok(canonical) = canonicalize(&container.image) {
                names.insert(canonical);
            }
        }
        names
    }
}

impl ImageStore for Inventory {
    fn resolve(&self, queries: &[String]) -> Result<Vec<ImageRecord>> {
        let queries = queries
            .iter()
            .map(|q| Query::parse(q))
            .collect::<Result<Vec<_>>>()?;

        Ok(self
            .images
            .iter()
            .filter(|image| queries.iter().any(|q| q.matches(image)))
            .cloned()
            .collect())
    }

    fn read_labels(&self, image: &ImageRecord) -> Result<BTreeMap<String, String>> {
        self.configs
            .get(&image.config)
            .map(|config| config.labels.clone())
            .ok_or_else(|| Error::LabelRead {
                image: image.name.clone(),
                reason: format!("config '{}' not found", image.config),
            })
    }
}

impl ImageRemover for Inventory {
    fn remove(&mut self, images: &[ImageRecord]) -> Result<Vec<String>> {
        if let Some(missing) = images.iter().find(|i| !self.images.contains(i)) {
            return Err(Error::ImageNotFound(missing.name.clone()));
        }

        self.images.retain(|image| !images.contains(image));
        tracing::debug!(removed = images.len(), "removed images from inventory");
        Ok(images.iter().map(|image| image.name.clone()).collect())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
