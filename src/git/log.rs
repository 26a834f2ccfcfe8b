//! Parsers for the line-oriented text git prints.
//!
//! The log stream uses a sentinel string between records so that multi-line
//! commit bodies survive the round trip through one `git log` invocation.

use crate::model::Commit;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Sentinel inserted after every record by the `--format` string.
pub const END_MARKER: &str = "<END_COMMIT>";

/// Format string handed to `git log`; field order is what [`parse_log`] expects.
pub const LOG_FORMAT: &str = "%H%n%an%n%ad%n%s%n%b%n<END_COMMIT>";

// git's default `%ad` rendering, with and without the offset
const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y %z";
const DATE_FORMAT_NO_TZ: &str = "%a %b %e %H:%M:%S %Y";

/// A record dropped because its date line did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub hash: String,
    pub raw_date: String,
}

/// Split raw `git log` output on the end-of-record marker and parse each
/// chunk. Chunks with fewer than four lines are dropped silently; records
/// whose date fails both formats surface as `Err` so the caller can warn.
///
/// File lists and line counts stay at their zero values here; enrichment is a
/// separate per-commit lookup.
pub fn parse_log(raw: &str) -> Vec<Result<Commit, SkippedRecord>> {
    raw.split(END_MARKER).filter_map(parse_record).collect()
}

fn parse_record(chunk: &str) -> Option<Result<Commit, SkippedRecord>> {
    let chunk = chunk.trim();
    if chunk.is_empty() {
        return None;
    }

    let lines: Vec<&str> = chunk.lines().collect();
    if lines.len() < 4 {
        return None;
    }

    let hash = lines[0].to_string();
    let author = lines[1].to_string();
    let raw_date = lines[2];
    let subject = lines[3].to_string();
    let body = if lines.len() > 4 {
        lines[4..].join("\n").trim().to_string()
    } else {
        String::new()
    };

    let Some(date) = parse_commit_date(raw_date) else {
        return Some(Err(SkippedRecord {
            hash,
            raw_date: raw_date.to_string(),
        }));
    };

    Some(Ok(Commit {
        hash,
        author,
        date,
        subject,
        body,
        files: Vec::new(),
        additions: 0,
        deletions: 0,
    }))
}

/// Parse a `%ad` date line, falling back to the offset-less form (read as UTC).
pub fn parse_commit_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_str(raw, DATE_FORMAT) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, DATE_FORMAT_NO_TZ)
        .ok()
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}

/// Split `git show --name-only --format=` output into file paths.
pub fn parse_name_only(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract aggregate (insertions, deletions) from `git show --stat` output.
///
/// Scans from the last line upwards for the summary line, e.g.
/// `3 files changed, 10 insertions(+), 4 deletions(-)`. A phrase that is
/// absent leaves its count at zero.
pub fn parse_diffstat(raw: &str) -> (u32, u32) {
    let mut additions = 0;
    let mut deletions = 0;

    for line in raw.lines().rev() {
        if !line.contains("insertion") && !line.contains("deletion") {
            continue;
        }
        for part in line.split(", ") {
            let number = part
                .trim()
                .split_whitespace()
                .next()
                .and_then(|n| n.parse::<u32>().ok());
            let Some(n) = number else { continue };
            if part.contains("insertion") {
                additions = n;
            } else if part.contains("deletion") {
                deletions = n;
            }
        }
        break;
    }

    (additions, deletions)
}
