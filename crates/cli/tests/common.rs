// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A snapshot with two tagged images, one in use, and two dangling builds.
pub const INVENTORY: &str = r#"{
  "images": [
    {
      "name": "docker.io/library/alpine:3.19",
      "created_at": "2024-01-01T00:00:00Z",
      "config": "sha256:1111111111111111111111111111111111111111111111111111111111111111"
    },
    {
      "name": "<none>",
      "created_at": "2024-01-02T00:00:00Z",
      "config": "sha256:2222222222222222222222222222222222222222222222222222222222222222"
    },
    {
      "name": "docker.io/acme/app:v1",
      "created_at": "2024-01-03T00:00:00Z",
      "config": "sha256:2222222222222222222222222222222222222222222222222222222222222222"
    },
    {
      "name": "",
      "created_at": "2024-01-04T00:00:00Z",
      "config": "sha256:1111111111111111111111111111111111111111111111111111111111111111"
    }
  ],
  "configs": {
    "sha256:1111111111111111111111111111111111111111111111111111111111111111": {
      "labels": {}
    },
    "sha256:2222222222222222222222222222222222222222222222222222222222222222": {
      "labels": {"team": "web", "env": "ci"}
    }
  },
  "containers": [
    {"id": "c1", "image": "alpine:3.19"}
  ]
}"#;

/// `imgsel` isolated from the user's config and environment.
pub fn imgsel(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("imgsel");
    cmd.env("IMGSEL_CONFIG", temp.path().join("config.toml"))
        .env_remove("IMGSEL_INVENTORY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Temp directory holding `inventory.json` with [`INVENTORY`].
pub fn with_inventory() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("inventory.json");
    std::fs::write(&path, INVENTORY).unwrap();
    (temp, path)
}

/// Image names currently in the snapshot at `path`.
pub fn image_names(path: &Path) -> Vec<String> {
    let content = std::fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    value["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|image| image["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Stdout of a successful run, split into lines.
pub fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
