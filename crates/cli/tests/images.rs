// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn images_lists_everything_without_filters() {
    let (temp, path) = with_inventory();
    let lines = stdout_lines(imgsel(&temp).arg("images").arg("--inventory").arg(&path));

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("REPOSITORY"));
    assert!(lines[0].contains("CREATED"));
    assert!(lines[1].starts_with("alpine"));
    assert!(lines[1].contains("111111111111"));
    assert!(lines[3].starts_with("acme/app"));
}

#[test]
fn images_quiet_prints_names() {
    let (temp, path) = with_inventory();
    let lines = stdout_lines(
        imgsel(&temp)
            .args(["images", "-q", "-f", "dangling=false"])
            .arg("--inventory")
            .arg(&path),
    );
    assert_eq!(lines, vec!["docker.io/library/alpine:3.19", "docker.io/acme/app:v1"]);
}

#[test]
fn images_dangling_true() {
    let (temp, path) = with_inventory();
    let lines = stdout_lines(
        imgsel(&temp)
            .args(["images", "-q", "-f", "dangling=true"])
            .arg("--inventory")
            .arg(&path),
    );
    assert_eq!(lines, vec!["<none>", ""]);
}

#[test]
fn images_labels_are_ored() {
    let (temp, path) = with_inventory();
    let lines = stdout_lines(
        imgsel(&temp)
            .args(["images", "-q", "-f", "label=team=web", "-f", "label=missing"])
            .arg("--inventory")
            .arg(&path),
    );
    assert_eq!(lines, vec!["<none>", "docker.io/acme/app:v1"]);
}

#[test]
fn images_since_and_before_bound_the_range() {
    let (temp, path) = with_inventory();
    let lines = stdout_lines(
        imgsel(&temp)
            .args([
                "images",
                "-q",
                "-f",
                "since=alpine:3.19",
                "-f",
                "before=acme/app:v1",
            ])
            .arg("--inventory")
            .arg(&path),
    );
    assert_eq!(lines, vec!["<none>"]);
}

#[test]
fn images_reference_glob() {
    let (temp, path) = with_inventory();
    let lines = stdout_lines(
        imgsel(&temp)
            .args(["images", "-q", "-f", "reference=acme/*"])
            .arg("--inventory")
            .arg(&path),
    );
    assert_eq!(lines, vec!["docker.io/acme/app:v1"]);
}

#[test]
fn images_json_output() {
    let (temp, path) = with_inventory();
    let output = imgsel(&temp)
        .args(["images", "-o", "json", "-f", "reference=alpine"])
        .arg("--inventory")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let images = value.as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["name"], "docker.io/library/alpine:3.19");
}

#[test]
fn images_json_from_config() {
    let (temp, path) = with_inventory();
    std::fs::write(temp.path().join("config.toml"), "output = \"json\"\n").unwrap();

    imgsel(&temp)
        .arg("images")
        .arg("--inventory")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn images_inventory_from_env() {
    let (temp, path) = with_inventory();
    imgsel(&temp)
        .args(["images", "-q"])
        .env("IMGSEL_INVENTORY", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("docker.io/acme/app:v1"));
}

#[test]
fn images_rejects_bad_filter() {
    let (temp, path) = with_inventory();
    imgsel(&temp)
        .args(["images", "-f", "dangling=maybe"])
        .arg("--inventory")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error:"))
        .stderr(predicate::str::contains("dangling=maybe"));
}

#[test]
fn images_rejects_unknown_before_reference() {
    let (temp, path) = with_inventory();
    imgsel(&temp)
        .args(["images", "-f", "before=busybox:latest"])
        .arg("--inventory")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("busybox:latest"));
}

#[test]
fn images_rejects_until() {
    let (temp, path) = with_inventory();
    imgsel(&temp)
        .args(["images", "-f", "until=24h"])
        .arg("--inventory")
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn images_missing_inventory() {
    let temp = TempDir::new().unwrap();
    imgsel(&temp)
        .arg("images")
        .arg("--inventory")
        .arg(temp.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("inventory not found"));
}

#[test]
fn invalid_config_is_reported() {
    let (temp, path) = with_inventory();
    std::fs::write(temp.path().join("config.toml"), "output = 3\n").unwrap();
    imgsel(&temp)
        .arg("images")
        .arg("--inventory")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}
