// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expressions for image selection.
//!
//! Filters are `key=value` strings, as collected from repeated `--filter`
//! flags:
//!
//! ```text
//! dangling=true|false      untagged images only, or tagged images only
//! before=<image>           created before the newest image matching <image>
//! since=<image>            created after the oldest image matching <image>
//! label=<key>              config label <key> present, any value
//! label=<key>=<value>      config label <key> equal to <value>
//! reference=<pattern>      name matches <pattern> (glob on the short name, or regex)
//! ```
//!
//! # Combination
//!
//! - `before`, `since` and `reference` clauses accumulate.
//! - `label` clauses build a key→value map; a repeated key overwrites, and an
//!   image passes when ANY requested label matches.
//! - every `reference` pattern must match (AND across patterns).
//! - a repeated `dangling` clause overwrites the earlier one.
//!
//! # Evaluation
//!
//! A [`FilterSet`] compiles into ordered [`Stage`]s (time range, label,
//! reference, dangling) which [`apply_filters`] runs left to right, each
//! narrowing the previous output. The first stage error aborts the run and no
//! partial result is returned.

mod clause;
mod parser;
mod pipeline;
mod stage;

pub use clause::{FilterClause, FilterSet, TimeKind, TimeReference};
pub use parser::{parse_clause, parse_filters};
pub use pipeline::apply_filters;
pub use stage::Stage;
