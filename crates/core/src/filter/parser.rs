// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for `key=value` filter strings.

use crate::error::{Error, Result};

use super::clause::{FilterClause, FilterSet, TimeKind, TimeReference};

/// Parse one filter string into a clause.
///
/// The string is split on `=`. Two tokens select a filter kind by keyword;
/// three tokens are only valid as `label=<key>=<value>`. Anything else is
/// rejected.
///
/// # Errors
///
/// [`Error::InvalidFilterSyntax`] naming the offending string.
pub fn parse_clause(filter: &str) -> Result<FilterClause> {
    let tokens: Vec<&str> = filter.split('=').collect();

    match tokens.as_slice() {
        [kind, value] => {
            if value.is_empty() {
                return Err(Error::syntax(filter, format!("missing value for '{kind}'")));
            }
            match *kind {
                "dangling" => match *value {
                    "true" => Ok(FilterClause::Dangling(true)),
                    "false" => Ok(FilterClause::Dangling(false)),
                    _ => Err(Error::syntax(
                        filter,
                        format!("dangling must be 'true' or 'false', got '{value}'"),
                    )),
                },
                "before" => Ok(FilterClause::Time {
                    kind: TimeKind::Before,
                    reference: TimeReference::new(*value),
                }),
                "since" => Ok(FilterClause::Time {
                    kind: TimeKind::Since,
                    reference: TimeReference::new(*value),
                }),
                "label" => Ok(FilterClause::Label {
                    key: value.to_string(),
                    value: None,
                }),
                "reference" => Ok(FilterClause::Reference(value.to_string())),
                _ => Err(Error::syntax(filter, format!("unknown filter kind '{kind}'"))),
            }
        }
        ["label", key, value] => {
            if key.is_empty() {
                return Err(Error::syntax(filter, "missing label key"));
            }
            Ok(FilterClause::Label {
                key: key.to_string(),
                value: Some(value.to_string()),
            })
        }
        [kind, _, _] => Err(Error::syntax(
            filter,
            format!("'{kind}' does not take a key=value argument"),
        )),
        [_] => Err(Error::syntax(filter, "expected key=value")),
        _ => Err(Error::syntax(filter, "too many '=' separators")),
    }
}

/// Parse filter strings, in order, into a [`FilterSet`].
///
/// Parsing is purely syntactic: nothing is looked up in the inventory.
///
/// # Examples
///
/// ```ignore
/// let set = parse_filters(&["dangling=true", "label=org=acme"])?;
/// assert_eq!(set.dangling, Some(true));
/// ```
pub fn parse_filters<S: AsRef<str>>(filters: &[S]) -> Result<FilterSet> {
    let mut set = FilterSet::default();
    for filter in filters {
        set.push(parse_clause(filter.as_ref())?);
    }
    Ok(set)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
