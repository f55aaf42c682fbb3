// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::IMGSEL_CONFIG, "IMGSEL_CONFIG");
    assert_eq!(vars::IMGSEL_INVENTORY, "IMGSEL_INVENTORY");
    assert_eq!(vars::RUST_LOG, "RUST_LOG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn test_config_path_unset() {
    std::env::remove_var("IMGSEL_CONFIG");
    assert_eq!(config_path(), None);
}

#[test]
fn test_config_path_set() {
    std::env::set_var("IMGSEL_CONFIG", "/tmp/imgsel-test/config.toml");
    assert_eq!(
        config_path(),
        Some(PathBuf::from("/tmp/imgsel-test/config.toml"))
    );
    std::env::remove_var("IMGSEL_CONFIG");
}

#[test]
fn test_inventory_path_empty_is_unset() {
    std::env::set_var("IMGSEL_INVENTORY", "");
    assert_eq!(inventory_path(), None);
    std::env::remove_var("IMGSEL_INVENTORY");
}

#[test]
fn test_inventory_path_set() {
    std::env::set_var("IMGSEL_INVENTORY", "/tmp/imgsel-test/inventory.json");
    assert_eq!(
        inventory_path(),
        Some(PathBuf::from("/tmp/imgsel-test/inventory.json"))
    );
    std::env::remove_var("IMGSEL_INVENTORY");
}

#[test]
fn test_no_color_set_to_one() {
    std::env::set_var("NO_COLOR", "1");
    assert!(no_color());
    std::env::remove_var("NO_COLOR");
}

#[test]
fn test_no_color_set_to_other() {
    std::env::set_var("NO_COLOR", "true");
    assert!(!no_color());
    std::env::remove_var("NO_COLOR");
}

#[test]
fn test_force_color_set_to_one() {
    std::env::set_var("COLOR", "1");
    assert!(force_color());
    std::env::remove_var("COLOR");
}
