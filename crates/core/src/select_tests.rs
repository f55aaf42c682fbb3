// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use crate::image::{Container, ImageConfig};
use crate::store::Inventory;
use chrono::{Duration, TimeZone};
use std::collections::BTreeMap;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn names(images: &[ImageRecord]) -> Vec<&str> {
    images.iter().map(|i| i.name.as_str()).collect()
}

/// A small store: two tagged images, two dangling builds, one container.
fn inventory() -> Inventory {
    let image = |name: &str, hours_ago: i64, config: &str| {
        ImageRecord::new(name, now() - Duration::hours(hours_ago)).with_config(config)
    };
    let mut configs = BTreeMap::new();
    configs.insert(
        "sha256:app".to_string(),
        ImageConfig {
            labels: BTreeMap::from([("team".to_string(), "web".to_string())]),
        },
    );
    configs.insert("sha256:plain".to_string(), ImageConfig::default());

    Inventory {
        images: vec![
            image("docker.io/library/alpine:3.19", 48, "sha256:plain"),
            image("<none>", 36, "sha256:app"),
            image("docker.io/acme/app:v1", 24, "sha256:app"),
            image("", 1, "sha256:plain"),
        ],
        configs,
        containers: vec![Container {
            id: "c1".into(),
            image: "alpine:3.19".into(),
        }],
    }
}

fn options(all: bool, filters: &[&str], inv: &Inventory) -> PruneOptions {
    PruneOptions {
        all,
        filters: filters.iter().map(|f| f.to_string()).collect(),
        in_use: inv.in_use(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Select
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn select_without_filters_returns_input() {
    let inv = inventory();
    let selected = Selector::new(&inv)
        .select::<&str>(inv.images.clone(), &[])
        .unwrap();
    assert_eq!(selected, inv.images);
}

#[test]
fn select_epoch_image_only_bounded_by_time_filters() {
    let mut inv = inventory();
    inv.images
        .push(ImageRecord::new("<none>", DateTime::UNIX_EPOCH).with_config("sha256:plain"));
    let selector = Selector::new(&inv).at(now());

    // No time filter, no creation window: the epoch build is still dangling.
    let dangling = selector.select(inv.images.clone(), &["dangling=true"]).unwrap();
    assert_eq!(names(&dangling), vec!["<none>", "", "<none>"]);
    assert_eq!(dangling[2].created_at, DateTime::UNIX_EPOCH);

    // A time filter opens the window at the epoch, exclusive.
    let before = selector
        .select(inv.images.clone(), &["before=docker.io/acme/app:v1"])
        .unwrap();
    assert_eq!(names(&before), vec!["docker.io/library/alpine:3.19", "<none>"]);
    assert!(before.iter().all(|i| i.created_at > DateTime::UNIX_EPOCH));
}

#[test]
fn select_combines_filters() {
    let inv = inventory();
    let selected = Selector::new(&inv)
        .at(now())
        .select(inv.images.clone(), &["dangling=false", "since=alpine:3.19"])
        .unwrap();
    assert_eq!(names(&selected), vec!["docker.io/acme/app:v1"]);
}

#[test]
fn select_labels_read_config() {
    let inv = inventory();
    let selected = Selector::new(&inv)
        .select(inv.images.clone(), &["label=team=web"])
        .unwrap();
    assert_eq!(names(&selected), vec!["<none>", "docker.io/acme/app:v1"]);
}

#[test]
fn select_rejects_until() {
    let inv = inventory();
    let err = Selector::new(&inv)
        .select(inv.images.clone(), &["until=3h"])
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFilterSyntax { .. }));
}

#[test]
fn select_syntax_error_wins_over_resolution() {
    let inv = inventory();
    let err = Selector::new(&inv)
        .select(inv.images.clone(), &["before=missing", "dangling=maybe"])
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFilterSyntax { .. }));
}

// ─────────────────────────────────────────────────────────────────────────────
// Prune selection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn prune_stages_order() {
    let inv = inventory();
    let opts = options(false, &["label=team", "until=2h", "before=docker.io/acme/app:v1"], &inv);
    let stages = Selector::new(&inv).at(now()).prune_stages(&opts).unwrap();
    let order: Vec<_> = stages.iter().map(Stage::name).collect();
    assert_eq!(
        order,
        vec!["created-between", "until", "label", "unused", "dangling"]
    );
}

#[test]
fn prune_defaults_to_dangling() {
    let inv = inventory();
    let selected = Selector::new(&inv)
        .at(now())
        .select_prunable(inv.images.clone(), &options(false, &[], &inv))
        .unwrap();
    assert_eq!(names(&selected), vec!["<none>", ""]);
}

#[test]
fn prune_all_skips_images_in_use() {
    let inv = inventory();
    let selected = Selector::new(&inv)
        .at(now())
        .select_prunable(inv.images.clone(), &options(true, &[], &inv))
        .unwrap();
    assert_eq!(names(&selected), vec!["<none>", "docker.io/acme/app:v1", ""]);
}

#[test]
fn prune_until_keeps_recent_images() {
    let inv = inventory();
    let selected = Selector::new(&inv)
        .at(now())
        .select_prunable(inv.images.clone(), &options(false, &["until=3h"], &inv))
        .unwrap();
    assert_eq!(names(&selected), vec!["<none>"]);
}

#[test]
fn prune_bad_until_is_error() {
    let inv = inventory();
    let err = Selector::new(&inv)
        .select_prunable(inv.images.clone(), &options(false, &["until=soon"], &inv))
        .unwrap_err();
    assert!(matches!(err, Error::UnparsableUntilTimestamp(_)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Prune
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn prune_removes_selection() {
    let mut inv = inventory();
    let images = inv.images.clone();
    let opts = options(true, &["label=team=web"], &inv);
    let report = prune(&mut inv, images, &opts, now()).unwrap();
    assert_eq!(report.removed, vec!["<none>", "docker.io/acme/app:v1"]);
    assert_eq!(inv.images.len(), 2);
}

#[test]
fn prune_nothing_selected() {
    let mut inv = inventory();
    let images = inv.images.clone();
    let opts = options(false, &["reference=nothing-matches-this"], &inv);
    let report = prune(&mut inv, images, &opts, now()).unwrap();
    assert!(report.removed.is_empty());
    assert_eq!(inv.images.len(), 4);
}

#[test]
fn prune_failure_removes_nothing() {
    let mut inv = inventory();
    inv.configs.remove("sha256:app");
    let images = inv.images.clone();
    let opts = options(true, &["label=team"], &inv);
    let err = prune(&mut inv, images, &opts, now()).unwrap_err();
    assert!(matches!(err, Error::LabelRead { .. }));
    assert_eq!(inv.images.len(), 4);
}
