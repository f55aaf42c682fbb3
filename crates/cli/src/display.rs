// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Duration, Utc};
use imgsel_core::ImageRecord;

/// Placeholder shown for a missing repository, tag, or config.
pub const NONE: &str = "<none>";

const DIGEST_PREFIX: &str = "sha256:";
const SHORT_DIGEST_LEN: usize = 12;
const COLUMN_GAP: &str = "   ";
const HEADERS: [&str; 4] = ["REPOSITORY", "TAG", "CONFIG", "CREATED"];

/// Human readable approximation of a duration ("3 hours", "About a minute").
///
/// Hours are rounded to the nearest hour; larger units truncate.
pub fn human_duration(d: Duration) -> String {
    let seconds = d.num_seconds();
    if seconds < 1 {
        return "Less than a second".to_string();
    }
    if seconds == 1 {
        return "1 second".to_string();
    }
    if seconds < 60 {
        return format!("{seconds} seconds");
    }

    let minutes = d.num_minutes();
    if minutes == 1 {
        return "About a minute".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} minutes");
    }

    let hours = (seconds + 1800) / 3600;
    match hours {
        1 => "About an hour".to_string(),
        h if h < 48 => format!("{h} hours"),
        h if h < 24 * 7 * 2 => format!("{} days", h / 24),
        h if h < 24 * 30 * 2 => format!("{} weeks", h / 24 / 7),
        h if h < 24 * 365 * 2 => format!("{} months", h / 24 / 30),
        _ => format!("{} years", d.num_hours() / 24 / 365),
    }
}

/// `CREATED` column text.
pub fn created_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("{} ago", human_duration(now - created_at))
}

/// First 12 hex characters of a config digest.
pub fn short_digest(digest: &str) -> String {
    let hex = digest.strip_prefix(DIGEST_PREFIX).unwrap_or(digest);
    if hex.is_empty() {
        return NONE.to_string();
    }
    hex.chars().take(SHORT_DIGEST_LEN).collect()
}

/// Repository and tag columns; dangling images show `<none>`.
pub fn repo_tag(image: &ImageRecord) -> (String, String) {
    let (repo, tag) = image.repo_tag();
    let or_none = |s: String| if s.is_empty() { NONE.to_string() } else { s };
    (or_none(repo), or_none(tag))
}

/// Render images as an aligned table with a header row.
pub fn format_table(images: &[ImageRecord], now: DateTime<Utc>) -> String {
    let rows: Vec<[String; 4]> = images
        .iter()
        .map(|image| {
            let (repo, tag) = repo_tag(image);
            [
                repo,
                tag,
                short_digest(&image.config),
                created_ago(image.created_at, now),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 4], widths: &[usize; 4]) {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i + 1 == cells.len() {
            line.push_str(cell.as_ref());
        } else {
            line.push_str(&format!("{:<width$}{COLUMN_GAP}", cell.as_ref()));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One image name per line.
pub fn format_names(images: &[ImageRecord]) -> String {
    images
        .iter()
        .map(|image| format!("{}\n", image.name))
        .collect()
}

/// Render images as a pretty-printed JSON array.
pub fn format_json(images: &[ImageRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(images)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
