// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of `until=` timestamps.
//!
//! A timestamp may be written as:
//!
//! - a duration relative to now: `3h`, `1h30m`, `1.5h`, `90s`
//! - an RFC 3339 timestamp: `2024-01-02T15:04:05Z`, `2024-01-02T15:04:05.5+02:00`
//! - a local-less date-time, read as UTC: `2024-01-02T15:04:05`, `2024-01-02T15:04`
//! - a date, read as UTC midnight: `2024-01-02`
//! - Unix seconds with an optional fraction: `1704153600`, `1704153600.25`

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Error, Result};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Resolve an `until=` value to an absolute instant.
///
/// # Errors
///
/// [`Error::NoUntilTimestamp`] for an empty value and
/// [`Error::UnparsableUntilTimestamp`] when no accepted form matches.
pub fn parse_until(value: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    if value.is_empty() {
        return Err(Error::NoUntilTimestamp);
    }

    // "0" is the Unix epoch, not a zero duration
    if value != "0" {
        if let Some(duration) = parse_duration(value) {
            return Ok(now - duration);
        }
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ts.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(ts) = date.and_hms_opt(0, 0, 0) {
            return Ok(ts.and_utc());
        }
    }

    parse_unix(value).ok_or_else(|| Error::UnparsableUntilTimestamp(value.to_string()))
}

/// Parse a duration made of number+unit pairs (`1h30m`, `1.5s`, `-2m`).
///
/// Units: `ns`, `us`, `µs`, `ms`, `s`, `m`, `h`. Returns `None` for anything
/// else, including a bare number without unit.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    if rest.is_empty() {
        return None;
    }

    let mut total_nanos: f64 = 0.0;
    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let num_str = &rest[..num_end];
        if num_str.is_empty() || num_str == "." || num_str.matches('.').count() > 1 {
            return None;
        }
        let num: f64 = num_str.parse().ok()?;
        rest = &rest[num_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit_nanos = match &rest[..unit_end] {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return None,
        };
        rest = &rest[unit_end..];
        total_nanos += num * unit_nanos;
    }

    if !total_nanos.is_finite() || total_nanos > i64::MAX as f64 {
        return None;
    }
    let duration = Duration::nanoseconds(total_nanos.round() as i64);
    Some(if negative { -duration } else { duration })
}

fn parse_unix(value: &str) -> Option<DateTime<Utc>> {
    let (secs, frac) = match value.split_once('.') {
        Some((secs, frac)) => (secs, frac),
        None => (value, ""),
    };
    if secs.is_empty()
        || !secs.bytes().all(|b| b.is_ascii_digit())
        || frac.len() > 9
        || !frac.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let secs: i64 = secs.parse().ok()?;
    let nanos: u32 = if frac.is_empty() {
        0
    } else {
        format!("{frac:0<9}").parse().ok()?
    };
    DateTime::from_timestamp(secs, nanos)
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
