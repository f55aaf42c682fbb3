// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Container image reference grammar.
//!
//! Parses names like `alpine`, `alpine:3.19`, `ghcr.io/acme/tool:v1` or
//! `localhost:5000/app@sha256:...` into their normalized form, and renders
//! them back either fully qualified (`docker.io/library/alpine:3.19`) or in
//! the familiar short form users type (`alpine:3.19`).

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Registry assumed when a name carries no domain.
pub const DEFAULT_DOMAIN: &str = "docker.io";
const LEGACY_DEFAULT_DOMAIN: &str = "index.docker.io";
const OFFICIAL_REPO_PREFIX: &str = "library/";
const DEFAULT_TAG: &str = "latest";
const NAME_TOTAL_LENGTH_MAX: usize = 255;

// Hard-coded, known-valid patterns.
static COMPONENT_RE: LazyLock<Regex> =
    LazyLock::new(
        || match Regex::new(r"^[a-z0-9]+(?:(?:[._]|__|-+)[a-z0-9]+)*$") {
            Ok(re) => re,
            Err(_) => unreachable!("static regex pattern"),
        },
    );
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(
        r"^(?:\[[a-fA-F0-9:]+\]|[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*)(?::[0-9]+)?$",
    ) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^\w[\w.-]{0,127}$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static DIGEST_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^[A-Za-z][A-Za-z0-9]*(?:[-_+.][A-Za-z][A-Za-z0-9]*)*:[0-9a-fA-F]{32,}$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});
static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^[a-f0-9]{64}$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// A named image reference in normalized form.
///
/// `domain` is always populated (`docker.io` when the input had none) and
/// official Docker Hub images carry the `library/` path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub domain: String,
    pub path: String,
    pub tag: Option<String>,
    pub digest: Option<String>,
}

impl Reference {
    /// Parse a possibly short name into a normalized reference.
    ///
    /// No tag is added: `alpine` stays untagged.
    pub fn parse_normalized(input: &str) -> Result<Self> {
        if IDENTIFIER_RE.is_match(input) {
            return Err(invalid(
                input,
                "cannot specify 64-byte hexadecimal strings as a name",
            ));
        }

        let (domain, remainder) = split_domain(input);

        let (name_part, digest) = match remainder.split_once('@') {
            Some((name, digest)) => (name, Some(digest)),
            None => (remainder.as_str(), None),
        };
        let (path, tag) = match name_part.rfind(':') {
            Some(idx) => (&name_part[..idx], Some(&name_part[idx + 1..])),
            None => (name_part, None),
        };

        if path.is_empty() {
            return Err(invalid(input, "repository name cannot be empty"));
        }
        if domain != DEFAULT_DOMAIN && !DOMAIN_RE.is_match(&domain) {
            return Err(invalid(input, "invalid domain"));
        }
        if let Some(bad) = path.split('/').find(|c| !COMPONENT_RE.is_match(c)) {
            let reason = if bad.to_lowercase() != bad {
                "repository name must be lowercase".to_string()
            } else {
                format!("invalid path component '{bad}'")
            };
            return Err(invalid(input, reason));
        }
        if domain.len() + 1 + path.len() > NAME_TOTAL_LENGTH_MAX {
            return Err(invalid(
                input,
                format!("repository name must not be more than {NAME_TOTAL_LENGTH_MAX} characters"),
            ));
        }
        if let Some(tag) = tag {
            if !TAG_RE.is_match(tag) {
                return Err(invalid(input, format!("invalid tag '{tag}'")));
            }
        }
        if let Some(digest) = digest {
            if !DIGEST_RE.is_match(digest) {
                return Err(invalid(input, format!("invalid digest '{digest}'")));
            }
        }

        Ok(Reference {
            domain,
            path: path.to_string(),
            tag: tag.map(str::to_string),
            digest: digest.map(str::to_string),
        })
    }

    /// Parse a name the way the image store records it.
    ///
    /// A bare name gets the `latest` tag; a name carrying both a tag and a
    /// digest keeps only the digest.
    pub fn parse_docker(input: &str) -> Result<Self> {
        let mut reference = Self::parse_normalized(input)?;
        if reference.digest.is_some() {
            reference.tag = None;
        } else if reference.tag.is_none() {
            reference.tag = Some(DEFAULT_TAG.to_string());
        }
        Ok(reference)
    }

    /// Repository name as users usually write it (`alpine`, `acme/tool`,
    /// `ghcr.io/acme/tool`).
    pub fn familiar_name(&self) -> String {
        if self.domain == DEFAULT_DOMAIN {
            match self.path.strip_prefix(OFFICIAL_REPO_PREFIX) {
                Some(rest) if !rest.contains('/') => rest.to_string(),
                _ => self.path.clone(),
            }
        } else {
            format!("{}/{}", self.domain, self.path)
        }
    }

    /// Familiar name plus tag and digest (`alpine:3.19`).
    pub fn familiar_string(&self) -> String {
        let mut out = self.familiar_name();
        push_version(&mut out, self.tag.as_deref(), self.digest.as_deref());
        out
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = format!("{}/{}", self.domain, self.path);
        push_version(&mut out, self.tag.as_deref(), self.digest.as_deref());
        f.write_str(&out)
    }
}

/// Either a named reference or a bare content digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyReference {
    Named(Reference),
    Digest(String),
}

impl AnyReference {
    /// Parse any accepted spelling: a 64-hex image ID, an `algo:hex` digest,
    /// or a (possibly short) name.
    pub fn parse(input: &str) -> Result<Self> {
        if IDENTIFIER_RE.is_match(input) {
            return Ok(AnyReference::Digest(format!("sha256:{input}")));
        }
        if DIGEST_RE.is_match(input) {
            return Ok(AnyReference::Digest(input.to_string()));
        }
        Reference::parse_normalized(input).map(AnyReference::Named)
    }

    /// Familiar rendering; digests render as themselves.
    pub fn familiar_string(&self) -> String {
        match self {
            AnyReference::Named(reference) => reference.familiar_string(),
            AnyReference::Digest(digest) => digest.clone(),
        }
    }

    /// Familiar repository name, if this reference is named.
    pub fn familiar_name(&self) -> Option<String> {
        match self {
            AnyReference::Named(reference) => Some(reference.familiar_name()),
            AnyReference::Digest(_) => None,
        }
    }
}

impl fmt::Display for AnyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyReference::Named(reference) => reference.fmt(f),
            AnyReference::Digest(digest) => f.write_str(digest),
        }
    }
}

/// Canonical spelling of a user-supplied reference, as the store names images.
///
/// `alpine` becomes `docker.io/library/alpine:latest`; image IDs become
/// `sha256:<id>`.
pub fn canonicalize(input: &str) -> Result<String> {
    match AnyReference::parse(input)? {
        AnyReference::Digest(digest) => Ok(digest),
        AnyReference::Named(_) => Reference::parse_docker(input).map(|r| r.to_string()),
    }
}

fn split_domain(name: &str) -> (String, String) {
    let (mut domain, mut remainder) = match name.split_once('/') {
        Some((first, rest))
            if first.contains(['.', ':'])
                || first == "localhost"
                || first.to_lowercase() != first =>
        {
            (first.to_string(), rest.to_string())
        }
        _ => (DEFAULT_DOMAIN.to_string(), name.to_string()),
    };
    if domain == LEGACY_DEFAULT_DOMAIN {
        domain = DEFAULT_DOMAIN.to_string();
    }
    if domain == DEFAULT_DOMAIN && !remainder.contains('/') {
        remainder = format!("{OFFICIAL_REPO_PREFIX}{remainder}");
    }
    (domain, remainder)
}

fn push_version(out: &mut String, tag: Option<&str>, digest: Option<&str>) {
    if let Some(tag) = tag {
        out.push(':');
        out.push_str(tag);
    }
    if let Some(digest) = digest {
        out.push('@');
        out.push_str(digest);
    }
}

fn invalid(reference: &str, reason: impl Into<String>) -> Error {
    Error::InvalidReference {
        reference: reference.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
