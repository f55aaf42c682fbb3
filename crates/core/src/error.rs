// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for imgsel-core operations.

use thiserror::Error;

/// All possible errors that can occur while selecting images.
///
/// Every variant is terminal: selection is all-or-nothing and nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid filter \"{filter}\": {reason}\n  hint: valid filters are dangling=true|false, before=<image>, since=<image>, label=<key>[=<value>], reference=<pattern>")]
    InvalidFilterSyntax { filter: String, reason: String },

    #[error("cannot resolve reference '{reference}': {reason}")]
    ReferenceResolution { reference: String, reason: String },

    #[error("cannot read labels of image '{image}': {reason}")]
    LabelRead { image: String, reason: String },

    #[error("invalid reference pattern '{pattern}': {reason}")]
    PatternCompile { pattern: String, reason: String },

    #[error("invalid reference '{reference}': {reason}")]
    InvalidReference { reference: String, reason: String },

    #[error("no timestamp specified for until filter")]
    NoUntilTimestamp,

    #[error("unable to parse until timestamp '{0}'\n  hint: use a duration (3h, 1h30m), an RFC 3339 timestamp, a date (2024-01-02) or unix seconds")]
    UnparsableUntilTimestamp(String),

    #[error("invalid query expression: {0}")]
    InvalidQuery(String),

    #[error("image not found: {0}")]
    ImageNotFound(String),
}

/// A specialized Result type for imgsel-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn syntax(filter: &str, reason: impl Into<String>) -> Self {
        Error::InvalidFilterSyntax {
            filter: filter.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
