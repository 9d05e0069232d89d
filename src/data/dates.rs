//! Date normalization for mixed-format date columns
//!
//! The raw dataset carries two date encodings side by side:
//! - ISO-like timestamps with an explicit UTC offset, e.g.
//!   `2020-06-05T10:30:54-04:00`
//! - Naive timestamps in `YYYY-MM-DD HH:MM:SS` form, which are UTC by
//!   convention
//!
//! Rows are routed to a parse path by the presence of a `±HH:MM` offset.
//! A row that fails its parse path becomes an explicit missing value
//! rather than aborting the batch.

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

/// Fixed format for entries without an embedded offset.
const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted layouts for entries carrying a `±HH:MM` offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%d %H:%M:%S%:z",
];

/// Aggregate outcome of one normalization batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Rows processed
    pub total: usize,
    /// Rows that produced a valid timestamp
    pub parsed: usize,
    /// Rows that degraded to the missing marker
    pub missing: usize,
}

/// Converts a column of heterogeneous date strings into canonical UTC
/// timestamps.
#[derive(Debug, Clone)]
pub struct DateNormalizer {
    offset_pattern: Regex,
}

impl DateNormalizer {
    pub fn new() -> Self {
        Self {
            // Matches a UTC-offset suffix anywhere in the string
            offset_pattern: Regex::new(r"[+-]\d{2}:\d{2}").unwrap(),
        }
    }

    /// Whether the entry carries an embedded `±HH:MM` offset and should be
    /// routed to the offset-aware parse path.
    pub fn has_offset(&self, raw: &str) -> bool {
        self.offset_pattern.is_match(raw)
    }

    /// Normalize a single entry. Returns `None` for anything that does not
    /// parse under its routed format.
    pub fn normalize_one(&self, raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if self.has_offset(raw) {
            parse_with_offset(raw)
        } else {
            NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
                .ok()
                .map(|dt| dt.and_utc())
        }
    }

    /// Normalize a whole column. Output length and order match the input;
    /// malformed entries resolve to `None` and never abort the batch.
    pub fn normalize(&self, values: &[String]) -> Vec<Option<DateTime<Utc>>> {
        values.iter().map(|v| self.normalize_one(v)).collect()
    }

    /// Normalize a column and report how many rows became missing.
    pub fn normalize_with_report(
        &self,
        values: &[String],
    ) -> (Vec<Option<DateTime<Utc>>>, NormalizeReport) {
        let normalized = self.normalize(values);
        let parsed = normalized.iter().filter(|d| d.is_some()).count();
        let report = NormalizeReport {
            total: normalized.len(),
            parsed,
            missing: normalized.len() - parsed,
        };
        (normalized, report)
    }
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an offset-bearing timestamp and convert it to UTC.
fn parse_with_offset(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    None
}
