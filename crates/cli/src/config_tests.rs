// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn test_parse_empty_is_default() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn test_parse_full() {
    let config = Config::parse(
        r#"
inventory = "/var/lib/imgsel/inventory.json"
log_level = "debug"
output = "json"

[prune]
all = true
filters = ["label=env=ci", "until=24h"]
"#,
    )
    .unwrap();

    assert_eq!(
        config.inventory,
        Some(PathBuf::from("/var/lib/imgsel/inventory.json"))
    );
    assert_eq!(config.log_level.as_deref(), Some("debug"));
    assert_eq!(config.output, Some(OutputFormat::Json));
    assert!(config.prune.all);
    assert_eq!(config.prune.filters, vec!["label=env=ci", "until=24h"]);
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(Config::parse("colour = true").is_err());
    assert!(Config::parse("[prune]\nforce = true").is_err());
}

#[test]
fn test_load_from_missing_file() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_invalid_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "output = \"yaml\"").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn test_load_from_round_trips_save() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    let config = Config {
        log_level: Some("info".to_string()),
        prune: PruneConfig {
            all: false,
            filters: vec!["dangling=true".to_string()],
        },
        ..Config::default()
    };
    std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_inventory_path_flag_wins() {
    let config = Config {
        inventory: Some(PathBuf::from("/from/config.json")),
        ..Config::default()
    };
    let path = config
        .inventory_path(Some(PathBuf::from("/from/flag.json")))
        .unwrap();
    assert_eq!(path, PathBuf::from("/from/flag.json"));
}

#[test]
fn test_output_format_precedence() {
    let config = Config {
        output: Some(OutputFormat::Json),
        ..Config::default()
    };
    assert_eq!(config.output_format(None), OutputFormat::Json);
    assert_eq!(config.output_format(Some(OutputFormat::Text)), OutputFormat::Text);
    assert_eq!(Config::default().output_format(None), OutputFormat::Text);
}
