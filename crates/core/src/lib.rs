// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! imgsel-core: image filter-and-prune engine
//!
//! This crate turns user-supplied filter expressions such as `before=alpine`,
//! `label=org=acme` or `dangling=true` into an ordered pipeline of stages and
//! applies it to an image inventory to decide which images are listed or
//! pruned. It selects; it never deletes. Removal is delegated to an
//! [`ImageRemover`] once a selection has been made.
//!
//! ```rust,ignore
//! use imgsel_core::{Inventory, Selector};
//!
//! let inventory: Inventory = serde_json::from_str(&snapshot)?;
//! let selected = Selector::new(&inventory).select(inventory.images.clone(), &filters)?;
//! ```

pub mod error;
pub mod filter;
pub mod image;
pub mod reference;
pub mod select;
pub mod store;
pub mod timestamp;

pub use error::{Error, Result};
pub use filter::{apply_filters, parse_filters, FilterClause, FilterSet, Stage, TimeReference};
pub use image::{Container, ImageConfig, ImageRecord};
pub use reference::{AnyReference, Reference};
pub use select::{prune, PruneOptions, PruneReport, Selector};
pub use store::{ImageRemover, ImageStore, Inventory, Query};
